//! Shared fixtures: a scripted, call-counting `CountrySource`.
#![allow(dead_code)]

use geoexplorer_core::error::{GeoError, Result};
use geoexplorer_core::model::CountryRecord;
use geoexplorer_core::traits::CountrySource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub fn country(common: &str, official: &str, french: Option<&str>) -> CountryRecord {
    CountryRecord {
        common_name: common.to_string(),
        official_name: official.to_string(),
        translations: french
            .map(|fr| vec![("fra".to_string(), fr.to_string())])
            .unwrap_or_default(),
        region: "Europe".to_string(),
        subregion: None,
        capitals: Vec::new(),
        population: 1_000,
        area: 10.0,
        currencies: Vec::new(),
        languages: Vec::new(),
        flag_png: None,
        independent: Some(true),
    }
}

pub fn france() -> CountryRecord {
    let mut c = country("France", "French Republic", Some("France"));
    c.capitals = vec!["Paris".into()];
    c.subregion = Some("Western Europe".into());
    c.population = 67_391_582;
    c.area = 551_695.0;
    c.currencies = vec![("EUR".into(), "Euro".into())];
    c.languages = vec![("fra".into(), "French".into())];
    c
}

pub fn ivory_coast() -> CountryRecord {
    let mut c = country(
        "Ivory Coast",
        "Republic of Côte d'Ivoire",
        Some("Côte d'Ivoire"),
    );
    c.region = "Africa".into();
    c
}

pub fn germany() -> CountryRecord {
    country("Germany", "Federal Republic of Germany", Some("Allemagne"))
}

/// Small dataset in service order.
pub fn dataset() -> Vec<CountryRecord> {
    vec![
        germany(),
        country("Guinea", "Guinean Republic", Some("Guinée")),
        country("Equatorial Guinea", "Republic of Equatorial Guinea", Some("Guinée équatoriale")),
        country("Guinea-Bissau", "Republic of Guinea-Bissau", Some("Guinée-Bissau")),
        ivory_coast(),
        france(),
        country("Peru", "Republic of Peru", Some("Pérou")),
    ]
}

pub enum NameBehavior {
    /// Unknown names answer 404.
    NotFound,
    /// Unknown names answer an empty array.
    Empty,
    /// Every name search fails at the transport level.
    Broken,
}

pub struct FakeSource {
    by_name: HashMap<String, Vec<CountryRecord>>,
    dataset: Option<Vec<CountryRecord>>,
    unknown: NameBehavior,
    fetch_delay: Duration,
    name_calls: AtomicUsize,
    all_calls: AtomicUsize,
    terms: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            dataset: Some(dataset()),
            unknown: NameBehavior::NotFound,
            fetch_delay: Duration::ZERO,
            name_calls: AtomicUsize::new(0),
            all_calls: AtomicUsize::new(0),
            terms: Mutex::new(Vec::new()),
        }
    }

    /// Answer name searches for `term` (case-insensitive) with `records`.
    pub fn with_name(mut self, term: &str, records: Vec<CountryRecord>) -> Self {
        self.by_name.insert(term.to_lowercase(), records);
        self
    }

    pub fn with_dataset(mut self, dataset: Option<Vec<CountryRecord>>) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn with_unknown(mut self, behavior: NameBehavior) -> Self {
        self.unknown = behavior;
        self
    }

    /// Make `fetch_all` slow enough for concurrent callers to overlap.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn name_calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst)
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.name_calls() + self.all_calls()
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

impl CountrySource for FakeSource {
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        self.terms.lock().unwrap().push(term.to_string());

        if let Some(found) = self.by_name.get(&term.to_lowercase()) {
            return Ok(found.clone());
        }
        match self.unknown {
            NameBehavior::NotFound => Err(GeoError::Status {
                url: format!("fake://v3.1/name/{term}"),
                status: 404,
            }),
            NameBehavior::Empty => Ok(Vec::new()),
            NameBehavior::Broken => Err(GeoError::InvalidData("connection reset".into())),
        }
    }

    fn fetch_all(&self) -> Result<Vec<CountryRecord>> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        if !self.fetch_delay.is_zero() {
            thread::sleep(self.fetch_delay);
        }
        self.dataset
            .clone()
            .ok_or_else(|| GeoError::InvalidData("dataset unavailable".into()))
    }
}
