// crates/geoexplorer-core/src/model/mod.rs
pub mod convert;
pub mod record;

pub use record::CountryRecord;

/// Language key of the French entry in `translations`.
pub const FRENCH: &str = "fra";
