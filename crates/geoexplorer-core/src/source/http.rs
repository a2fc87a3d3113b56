// crates/geoexplorer-core/src/source/http.rs

use super::{ALL_FIELDS, API_VERSION};
use crate::config::ExplorerConfig;
use crate::error::{GeoError, Result};
use crate::model::convert::from_raw;
use crate::model::CountryRecord;
use crate::raw::CountriesRaw;
use crate::traits::CountrySource;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

const USER_AGENT: &str = concat!("geoexplorer/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: Client,
    base: Url,
}

impl RestCountriesClient {
    /// Client without a request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| GeoError::InvalidData(format!("invalid base URL {base_url:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(GeoError::InvalidData(format!(
                "base URL {base_url:?} cannot carry a path"
            )));
        }

        // reqwest's blocking client defaults to 30s; `None` really means no limit here.
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base })
    }

    pub fn from_config(cfg: &ExplorerConfig) -> Result<Self> {
        Self::with_timeout(&cfg.base_url, cfg.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/v3.1/name/{term}` with `term` percent-encoded as one segment.
    pub fn name_url(&self, term: &str) -> Result<Url> {
        self.endpoint(&["name", term])
    }

    /// `{base}/v3.1/all?fields=...`
    pub fn all_url(&self) -> Result<Url> {
        let mut url = self.endpoint(&["all"])?;
        url.query_pairs_mut()
            .append_pair("fields", &ALL_FIELDS.join(","));
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GeoError::InvalidData(format!("cannot extend {}", self.base)))?;
            path.pop_if_empty().push(API_VERSION).extend(segments);
        }
        Ok(url)
    }

    fn get_countries(&self, url: Url) -> Result<Vec<CountryRecord>> {
        tracing::debug!("GET {url}");
        let response = self.http.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        let raw: CountriesRaw = serde_json::from_slice(&body)?;
        Ok(from_raw(raw))
    }
}

impl CountrySource for RestCountriesClient {
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>> {
        let url = self.name_url(term)?;
        self.get_countries(url)
    }

    fn fetch_all(&self) -> Result<Vec<CountryRecord>> {
        let url = self.all_url()?;
        let countries = self.get_countries(url)?;
        tracing::debug!("fetched {} countries", countries.len());
        Ok(countries)
    }
}
