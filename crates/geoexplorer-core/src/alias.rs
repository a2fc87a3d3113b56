// crates/geoexplorer-core/src/alias.rs

//! # Alias Table
//!
//! Maps alternate-language spellings (French by default) to the English
//! search term understood by the country service. The table lives in a
//! JSON asset so it can be extended without touching the resolver.

use crate::error::{GeoError, Result};
use crate::text::fold_key;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The French table shipped with the crate.
static EMBEDDED_FR: &str = include_str!("../data/fr_aliases.json");

static DEFAULT_TABLE: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_json(EMBEDDED_FR).unwrap_or_else(|e| {
        tracing::error!("embedded alias table is invalid: {e}");
        AliasTable::default()
    })
});

/// On-disk shape of an alias asset.
#[derive(Debug, Deserialize)]
struct AliasFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    language: Option<String>,
    aliases: BTreeMap<String, String>,
}

/// Folded alias key → canonical search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    version: u32,
    language: Option<String>,
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// The built-in French table.
    pub fn french() -> Self {
        DEFAULT_TABLE.clone()
    }

    /// Parses an alias asset from a JSON string.
    ///
    /// Keys are folded with [`fold_key`], so `"côte d'ivoire"` and
    /// `"cote d'ivoire"` end up as a single entry. Empty keys or terms are
    /// rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: AliasFile = serde_json::from_str(json)?;
        Self::from_file_shape(file)
    }

    /// Loads an alias asset from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: AliasFile = serde_json::from_reader(reader)?;
        Self::from_file_shape(file)
    }

    /// Loads an alias asset from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeoError::InvalidData(format!(
                "Alias table not readable at {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            "loaded {} aliases from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    fn from_file_shape(file: AliasFile) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (key, term) in file.aliases {
            let folded = fold_key(&key);
            let term = term.trim();
            if folded.is_empty() || term.is_empty() {
                return Err(GeoError::InvalidData(format!(
                    "empty alias entry: {key:?} -> {term:?}"
                )));
            }
            if let Some(previous) = entries.insert(folded.clone(), term.to_string()) {
                if previous != term {
                    return Err(GeoError::InvalidData(format!(
                        "alias {folded:?} maps to both {previous:?} and {term:?}"
                    )));
                }
            }
        }
        Ok(Self {
            version: file.version,
            language: file.language,
            entries,
        })
    }

    /// Canonical term for an already folded key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Canonical term for raw user text (folded first).
    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.get(&fold_key(query))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_collapses_accented_variants() {
        let table = AliasTable::french();
        assert_eq!(table.language(), Some("fr"));
        assert_eq!(table.version(), 1);
        // 14 raw entries, 5 of which are accented duplicates
        assert_eq!(table.len(), 9);
        assert_eq!(table.get("cote d'ivoire"), Some("ivory coast"));
        assert_eq!(table.get("cote divoire"), Some("ivory coast"));
        assert_eq!(table.get("iles comores"), Some("comoros"));
        assert_eq!(table.get("côte d'ivoire"), None);
    }

    #[test]
    fn lookup_folds_raw_text() {
        let table = AliasTable::french();
        assert_eq!(table.lookup("  Côte d'Ivoire "), Some("ivory coast"));
        assert_eq!(table.lookup("Guinée Équatoriale"), Some("equatorial guinea"));
        assert_eq!(table.lookup("Cap Vert"), Some("cape verde"));
        assert_eq!(table.lookup("France"), None);
    }

    #[test]
    fn rejects_conflicting_entries() {
        let json = r#"{ "aliases": { "Bénin": "benin", "benin": "dahomey" } }"#;
        let err = AliasTable::from_json(json).unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));
    }

    #[test]
    fn rejects_empty_entries() {
        let json = r#"{ "aliases": { "  ": "benin" } }"#;
        assert!(AliasTable::from_json(json).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = AliasTable::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("not readable"));
    }
}
