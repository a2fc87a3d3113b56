// crates/geoexplorer-core/src/model/convert.rs

use super::record::CountryRecord;
use crate::raw::{CountriesRaw, CountryRaw};

impl From<CountryRaw> for CountryRecord {
    fn from(raw: CountryRaw) -> Self {
        // 1. Translations: keep only common names, sorted for binary search
        let mut translations: Vec<(String, String)> = raw
            .translations
            .into_iter()
            .filter_map(|(lang, t)| t.common.map(|common| (lang, common)))
            .collect();
        translations.sort();

        // 2. Currencies & languages: stable order by code
        let mut currencies: Vec<(String, String)> = raw
            .currencies
            .unwrap_or_default()
            .into_iter()
            .map(|(code, c)| (code, c.name))
            .collect();
        currencies.sort();

        let mut languages: Vec<(String, String)> =
            raw.languages.unwrap_or_default().into_iter().collect();
        languages.sort();

        CountryRecord {
            common_name: raw.name.common,
            official_name: raw.name.official,
            translations,
            region: raw.region,
            subregion: raw.subregion.filter(|s| !s.is_empty()),
            capitals: raw.capital.unwrap_or_default(),
            population: raw.population,
            area: raw.area,
            currencies,
            languages,
            flag_png: raw.flags.png,
            independent: raw.independent,
        }
    }
}

/// Convert a decoded dataset, keeping the service's order.
pub fn from_raw(raw: CountriesRaw) -> Vec<CountryRecord> {
    raw.into_iter().map(CountryRecord::from).collect()
}
