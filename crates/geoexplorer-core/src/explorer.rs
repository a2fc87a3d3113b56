// crates/geoexplorer-core/src/explorer.rs

use crate::cache::MemoryCache;
use crate::error::{ResolveError, Result};
use crate::model::CountryRecord;
use crate::present::Presenter;
use crate::resolver::CountryResolver;
use crate::traits::{CountryCache, CountrySource};
use std::sync::Arc;

pub const MSG_NOT_FOUND: &str = "Pays non trouvé. Vérifiez l'orthographe.";
pub const MSG_CONNECTION: &str = "Erreur de connexion. Réessayez.";

/// Shortcut queries offered next to the search box.
pub const QUICK_COUNTRIES: &[&str] = &[
    "France",
    "Belgique",
    "Suisse",
    "Canada",
    "Maroc",
    "Sénégal",
    "Côte d'Ivoire",
    "Japon",
    "Brésil",
];

/// What a search ended up showing.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Placeholder,
    Displayed(Arc<CountryRecord>),
    NotFound,
    ConnectionError,
}

impl SearchOutcome {
    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            SearchOutcome::Displayed(record) => Some(&**record),
            _ => None,
        }
    }
}

/// Drives one presenter from one resolver.
pub struct Explorer<S: CountrySource, P: Presenter, C: CountryCache = MemoryCache> {
    resolver: CountryResolver<S, C>,
    presenter: P,
}

impl<S: CountrySource, P: Presenter, C: CountryCache> Explorer<S, P, C> {
    pub fn new(resolver: CountryResolver<S, C>, presenter: P) -> Self {
        Self {
            resolver,
            presenter,
        }
    }

    pub fn resolver(&self) -> &CountryResolver<S, C> {
        &self.resolver
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Show the welcome screen.
    pub fn start(&mut self) -> Result<()> {
        self.presenter.show_placeholder()
    }

    /// Resolve `query` and render the result.
    ///
    /// Resolution failures become render states; only presenter I/O errors
    /// are returned as `Err`.
    pub fn handle_search(&mut self, query: &str) -> Result<SearchOutcome> {
        if query.trim().is_empty() {
            self.presenter.show_placeholder()?;
            return Ok(SearchOutcome::Placeholder);
        }

        self.presenter.set_loading(true)?;
        let rendered = self.render(query);
        let reset = self.presenter.set_loading(false);

        let outcome = rendered?;
        reset?;
        Ok(outcome)
    }

    /// Search one of the [`QUICK_COUNTRIES`] shortcuts (or any name).
    pub fn quick_select(&mut self, name: &str) -> Result<SearchOutcome> {
        self.handle_search(name)
    }

    fn render(&mut self, query: &str) -> Result<SearchOutcome> {
        match self.resolver.resolve(query) {
            Ok(record) => {
                self.presenter.display_country(&record)?;
                Ok(SearchOutcome::Displayed(record))
            }
            Err(ResolveError::EmptyQuery) => {
                self.presenter.show_placeholder()?;
                Ok(SearchOutcome::Placeholder)
            }
            Err(ResolveError::NotFound { .. }) => {
                self.presenter.show_error(MSG_NOT_FOUND)?;
                Ok(SearchOutcome::NotFound)
            }
            Err(ResolveError::Transport(e)) => {
                tracing::warn!("search for {query:?} failed: {e}");
                self.presenter.show_error(MSG_CONNECTION)?;
                Ok(SearchOutcome::ConnectionError)
            }
        }
    }
}
