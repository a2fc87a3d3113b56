// crates/geoexplorer-core/src/source/mod.rs

//! # Country Sources
//!
//! Adapters implementing [`CountrySource`](crate::traits::CountrySource).

mod http;

pub use http::RestCountriesClient;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

pub const API_VERSION: &str = "v3.1";

/// Fields requested from `/all`. The service refuses unfiltered `/all`
/// calls and caps the list at ten entries, so `independent` is left out.
pub const ALL_FIELDS: &[&str] = &[
    "name",
    "translations",
    "region",
    "subregion",
    "capital",
    "population",
    "area",
    "currencies",
    "languages",
    "flags",
];
