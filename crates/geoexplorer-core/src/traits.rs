// crates/geoexplorer-core/src/traits.rs
use crate::error::Result;
use crate::model::CountryRecord;
use crate::text::fold_key;
use std::sync::Arc;

/// Accent-insensitive name matching for types that expose display names.
///
/// Implementors provide a canonical name via [`NameMatch::name_str`] and may
/// widen the set of names considered via [`NameMatch::match_names`]. Matching
/// compares [`fold_key`] forms, which is what the resolver's fallback scan
/// relies on.
///
/// # Examples
/// ```rust
/// use geoexplorer_core::text::fold_key;
/// use geoexplorer_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Guinée-Bissau").contains_key(&fold_key("BISSAU")));
/// assert!(!Place("Sénégal").contains_key("gambia"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Every name a substring match should look at. Defaults to the canonical one.
    fn match_names(&self) -> Vec<&str> {
        vec![self.name_str()]
    }

    /// Substring match against an already folded key, over [`NameMatch::match_names`].
    fn contains_key(&self, key: &str) -> bool {
        self.match_names()
            .into_iter()
            .any(|name| fold_key(name).contains(key))
    }
}

/// Where country data comes from.
///
/// [`RestCountriesClient`](crate::source::RestCountriesClient) talks to the
/// live service; tests plug in canned data.
pub trait CountrySource: Send + Sync {
    /// Name search (`/v3.1/name/{term}`). Entries in service order; an
    /// unknown name is an `Err` or an empty vector.
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>>;

    /// The complete dataset (`/v3.1/all`), in service order.
    fn fetch_all(&self) -> Result<Vec<CountryRecord>>;
}

impl<S: CountrySource + ?Sized> CountrySource for Arc<S> {
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>> {
        (**self).search_by_name(term)
    }

    fn fetch_all(&self) -> Result<Vec<CountryRecord>> {
        (**self).fetch_all()
    }
}

/// Session cache of resolved countries keyed by folded query.
///
/// Entries are only ever added; there is no eviction.
pub trait CountryCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Arc<CountryRecord>>;

    fn insert(&self, key: String, record: Arc<CountryRecord>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: CountryCache + ?Sized> CountryCache for Arc<C> {
    fn get(&self, key: &str) -> Option<Arc<CountryRecord>> {
        (**self).get(key)
    }

    fn insert(&self, key: String, record: Arc<CountryRecord>) {
        (**self).insert(key, record)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
