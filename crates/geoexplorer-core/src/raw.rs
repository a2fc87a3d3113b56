// crates/geoexplorer-core/src/raw.rs

use serde::Deserialize;
use std::collections::HashMap;

/// `name` object of a REST Countries entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NameRaw {
    pub common: String,
    pub official: String,
}

/// One entry of `translations`; only the common name is read.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRaw {
    #[serde(default)]
    pub common: Option<String>,
}

/// One entry of `currencies`, e.g. `"EUR": { "name": "Euro", "symbol": "€" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyRaw {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
}

/// Raw country object as served by `/v3.1/name/{term}` and `/v3.1/all`.
/// NOTE: mirrors the external payload; the public API exposes
/// [`CountryRecord`](crate::model::CountryRecord) instead.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub translations: HashMap<String, TranslationRaw>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub currencies: Option<HashMap<String, CurrencyRaw>>,
    #[serde(default)]
    pub languages: Option<HashMap<String, String>>,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub independent: Option<bool>,
}

pub type CountriesRaw = Vec<CountryRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_payload_fields_are_ignored() {
        let json = r#"{
            "name": { "common": "Chad", "official": "Republic of Chad", "nativeName": {} },
            "translations": { "fra": { "official": "République du Tchad", "common": "Tchad" } },
            "currencies": { "XAF": { "name": "Central African CFA franc", "symbol": "Fr" } },
            "flags": { "png": "https://flagcdn.com/w320/td.png", "svg": "x.svg", "alt": "flag" },
            "cca2": "TD"
        }"#;
        let raw: CountryRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.translations["fra"].common.as_deref(), Some("Tchad"));
        assert_eq!(
            raw.currencies.unwrap()["XAF"].name,
            "Central African CFA franc"
        );
        assert_eq!(raw.flags.png.as_deref(), Some("https://flagcdn.com/w320/td.png"));
    }
}
