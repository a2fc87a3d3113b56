// crates/geoexplorer-core/src/resolver.rs

//! # Country Resolver
//!
//! Turns free text into a [`CountryRecord`] with a layered strategy:
//!
//! 1. session cache, keyed by the folded query;
//! 2. direct name search on the service (alias term substituted when the
//!    folded query is a known alternate spelling);
//! 3. fallback scan of the full dataset, first record whose folded common,
//!    official or French name contains the folded query.
//!
//! Only successes are cached. Concurrent misses on the same key are
//! serialized behind a per-key gate: the first caller does the network work,
//! the others wait and then read its result from the cache.
//!
//! A failed direct lookup is never an error by
//! itself; it just moves on to the scan. A dataset that cannot be fetched is
//! reported as [`ResolveError::Transport`], an exhausted scan as
//! [`ResolveError::NotFound`].

use crate::alias::AliasTable;
use crate::cache::MemoryCache;
use crate::error::{GeoError, ResolveError};
use crate::model::CountryRecord;
use crate::text::fold_key;
use crate::traits::{CountryCache, CountrySource, NameMatch};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Cache key and remote search term derived from one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub key: String,
    pub term: String,
    pub aliased: bool,
}

struct DatasetSnapshot {
    fetched_at: Instant,
    countries: Arc<Vec<CountryRecord>>,
}

pub struct CountryResolver<S: CountrySource, C: CountryCache = MemoryCache> {
    source: S,
    cache: C,
    aliases: AliasTable,
    dataset_ttl: Option<Duration>,
    dataset: Mutex<Option<DatasetSnapshot>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: CountrySource> CountryResolver<S> {
    /// Resolver with a fresh [`MemoryCache`] and the French alias table.
    pub fn new(source: S) -> Self {
        Self::with_cache(source, MemoryCache::new())
    }
}

impl<S: CountrySource, C: CountryCache> CountryResolver<S, C> {
    pub fn with_cache(source: S, cache: C) -> Self {
        Self {
            source,
            cache,
            aliases: AliasTable::french(),
            dataset_ttl: None,
            dataset: Mutex::new(None),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Reuse a fetched `/all` dataset for `ttl`. `None` (the default)
    /// fetches it again on every fallback scan.
    pub fn with_dataset_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.dataset_ttl = ttl;
        self
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, query: &str) -> bool {
        self.cache.get(&fold_key(query)).is_some()
    }

    /// Cache key and search term for `query`; `None` when there is nothing to search.
    pub fn lookup_for(&self, query: &str) -> Option<Lookup> {
        let trimmed = query.trim();
        let key = fold_key(trimmed);
        if trimmed.is_empty() || key.is_empty() {
            return None;
        }

        Some(match self.aliases.get(&key) {
            Some(term) => Lookup {
                term: term.to_string(),
                key,
                aliased: true,
            },
            None => Lookup {
                term: trimmed.to_string(),
                key,
                aliased: false,
            },
        })
    }

    /// Resolve free text to a country.
    pub fn resolve(&self, query: &str) -> Result<Arc<CountryRecord>, ResolveError> {
        let lookup = self.lookup_for(query).ok_or(ResolveError::EmptyQuery)?;

        if let Some(hit) = self.cache.get(&lookup.key) {
            tracing::debug!("cache hit for {:?}", lookup.key);
            return Ok(hit);
        }

        let gate = self.gate_for(&lookup.key);
        let result = {
            let _turn = gate.lock().unwrap_or_else(|p| p.into_inner());
            // another caller may have resolved the key while we waited
            match self.cache.get(&lookup.key) {
                Some(hit) => {
                    tracing::debug!("resolved concurrently: {:?}", lookup.key);
                    Ok(hit)
                }
                None => self.fetch_and_remember(query, &lookup),
            }
        };
        self.release_gate(&lookup.key, &gate);
        result
    }

    fn fetch_and_remember(
        &self,
        query: &str,
        lookup: &Lookup,
    ) -> Result<Arc<CountryRecord>, ResolveError> {
        if lookup.aliased {
            tracing::debug!("alias {:?} -> {:?}", lookup.key, lookup.term);
        }

        if let Some(record) = self.direct_lookup(&lookup.term) {
            return Ok(self.remember(&lookup.key, record));
        }

        let dataset = self.dataset().map_err(|e| {
            tracing::warn!("fallback scan for {:?} aborted: {e}", lookup.key);
            ResolveError::Transport(e)
        })?;

        match dataset.iter().find(|c| c.contains_key(&lookup.key)) {
            Some(record) => {
                tracing::debug!(
                    "fallback scan matched {:?} for {:?}",
                    record.common_name(),
                    lookup.key
                );
                Ok(self.remember(&lookup.key, record.clone()))
            }
            None => {
                tracing::info!("no country matches {:?}", lookup.key);
                Err(ResolveError::NotFound {
                    query: query.trim().to_string(),
                })
            }
        }
    }

    fn direct_lookup(&self, term: &str) -> Option<CountryRecord> {
        match self.source.search_by_name(term) {
            Ok(found) => {
                let first = found.into_iter().next();
                if first.is_none() {
                    tracing::debug!("direct lookup for {term:?} returned no entries");
                }
                first
            }
            Err(GeoError::Status { status: 404, .. }) => {
                tracing::debug!("direct lookup for {term:?}: not found");
                None
            }
            Err(e) => {
                tracing::warn!("direct lookup for {term:?} failed: {e}");
                None
            }
        }
    }

    fn dataset(&self) -> Result<Arc<Vec<CountryRecord>>, GeoError> {
        let Some(ttl) = self.dataset_ttl else {
            return self.source.fetch_all().map(Arc::new);
        };

        let mut slot = self.dataset.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(snapshot) = slot.as_ref() {
            if snapshot.fetched_at.elapsed() < ttl {
                return Ok(snapshot.countries.clone());
            }
            tracing::debug!("dataset snapshot expired");
        }

        let countries = Arc::new(self.source.fetch_all()?);
        *slot = Some(DatasetSnapshot {
            fetched_at: Instant::now(),
            countries: countries.clone(),
        });
        Ok(countries)
    }

    fn remember(&self, key: &str, record: CountryRecord) -> Arc<CountryRecord> {
        tracing::info!("resolved {:?} to {}", key, record.common_name());
        let record = Arc::new(record);
        self.cache.insert(key.to_string(), record.clone());
        record
    }

    fn gate_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut gates = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        gates.entry(key.to_string()).or_default().clone()
    }

    /// Drops the gate once its holder is done; a newer gate for the same key is left alone.
    fn release_gate(&self, key: &str, gate: &Arc<Mutex<()>>) {
        let mut gates = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if gates.get(key).is_some_and(|g| Arc::ptr_eq(g, gate)) {
            gates.remove(key);
        }
    }
}
