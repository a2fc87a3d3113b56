//! geoexplorer prelude: bring common types and traits into scope.

pub use crate::alias::AliasTable;
pub use crate::cache::MemoryCache;
pub use crate::config::ExplorerConfig;
pub use crate::error::{GeoError, ResolveError, Result};
pub use crate::explorer::{Explorer, SearchOutcome, QUICK_COUNTRIES};
pub use crate::model::CountryRecord;
pub use crate::present::{describe, CountrySheet, Presenter, TextPresenter};
pub use crate::resolver::CountryResolver;
pub use crate::source::{RestCountriesClient, DEFAULT_BASE_URL};
pub use crate::text::{equals_folded, fold_key, format_number};
pub use crate::traits::{CountryCache, CountrySource, NameMatch};
