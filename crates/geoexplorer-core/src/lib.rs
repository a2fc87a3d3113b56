// crates/geoexplorer-core/src/lib.rs

//! geoexplorer-core
//! ================
//!
//! Resolve free-text country names (French spellings included) against the
//! [REST Countries](https://restcountries.com) service and turn the result
//! into a display-ready sheet.
//!
//! ```no_run
//! use geoexplorer_core::prelude::*;
//!
//! let client = RestCountriesClient::new(DEFAULT_BASE_URL)?;
//! let resolver = CountryResolver::new(client);
//!
//! let country = resolver.resolve("Côte d'Ivoire")?;
//! println!("{}", describe(&country));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alias;
pub mod cache;
pub mod config;
pub mod error;
pub mod explorer;
pub mod model;
pub mod present;
pub mod resolver;
pub mod source;
pub mod text;
pub mod traits;
// Remote payload shapes, only consumed by the conversion layer.
#[doc(hidden)]
pub mod raw;

pub mod prelude;

// Re-exports
pub use crate::error::{GeoError, ResolveError, Result};
pub use alias::AliasTable;
pub use cache::MemoryCache;
pub use config::ExplorerConfig;
pub use explorer::{Explorer, SearchOutcome};
pub use model::CountryRecord;
pub use resolver::CountryResolver;
pub use source::RestCountriesClient;
