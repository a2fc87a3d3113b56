// crates/geoexplorer-core/src/model/record.rs
use super::FRENCH;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// A resolved country.
///
/// Built once from the service payload and then shared read-only
/// (the resolver hands out `Arc<CountryRecord>`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,

    /// Sorted list of (Language Code, Common Name).
    pub translations: Vec<(String, String)>,

    pub region: String,
    pub subregion: Option<String>,
    pub capitals: Vec<String>,
    pub population: u64,
    /// Square kilometres.
    pub area: f64,

    /// Sorted list of (ISO 4217 Code, Currency Name).
    pub currencies: Vec<(String, String)>,
    /// Sorted list of (Language Code, Language Name).
    pub languages: Vec<(String, String)>,

    pub flag_png: Option<String>,
    /// `None` when the payload omits the field (the filtered `/all` view does).
    pub independent: Option<bool>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    /// Common name in the given translation (e.g. `"fra"`, `"deu"`).
    pub fn translation(&self, lang: &str) -> Option<&str> {
        self.translations
            .binary_search_by(|(code, _)| code.as_str().cmp(lang))
            .ok()
            .map(|i| self.translations[i].1.as_str())
    }

    pub fn french_name(&self) -> Option<&str> {
        self.translation(FRENCH)
    }

    /// French name if the service knows one, else the common name.
    pub fn display_name(&self) -> &str {
        self.french_name().unwrap_or(&self.common_name)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> &str {
        self.subregion.as_deref().unwrap_or("")
    }

    pub fn capital(&self) -> Option<&str> {
        self.capitals.first().map(String::as_str)
    }

    pub fn capitals(&self) -> &[String] {
        &self.capitals
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn currency_names(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|(_, name)| name.as_str())
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(_, name)| name.as_str())
    }

    pub fn flag_png(&self) -> &str {
        self.flag_png.as_deref().unwrap_or("")
    }

    pub fn is_independent(&self) -> Option<bool> {
        self.independent
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.common_name
    }

    /// Common, official and French names; the fallback scan matches on all three.
    fn match_names(&self) -> Vec<&str> {
        let mut names = vec![self.common_name.as_str(), self.official_name.as_str()];
        if let Some(fr) = self.french_name() {
            names.push(fr);
        }
        names
    }
}
