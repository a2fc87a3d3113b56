// crates/geoexplorer-core/src/present.rs

//! # Presentation
//!
//! [`Presenter`] is the render surface the [`Explorer`](crate::explorer::Explorer)
//! drives. [`CountrySheet`] holds everything a surface needs to show one
//! country (header, fact cards, French description), so renderers only
//! decide on layout. [`TextPresenter`] lays it out as plain text.

use crate::error::Result;
use crate::model::CountryRecord;
use crate::text::{format_count, format_number};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io::Write;

pub const NOT_AVAILABLE: &str = "N/A";

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, like `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The four render commands.
pub trait Presenter {
    fn display_country(&mut self, record: &CountryRecord) -> Result<()>;

    fn show_placeholder(&mut self) -> Result<()>;

    fn show_error(&mut self, message: &str) -> Result<()>;

    fn set_loading(&mut self, loading: bool) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn display_country(&mut self, record: &CountryRecord) -> Result<()> {
        (**self).display_country(record)
    }

    fn show_placeholder(&mut self) -> Result<()> {
        (**self).show_placeholder()
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        (**self).show_error(message)
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        (**self).set_loading(loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCard {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready view of a [`CountryRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySheet {
    pub flag_url: String,
    pub display_name: String,
    pub official_name: String,
    /// `"region • subregion"`
    pub location: String,
    pub map_url: String,
    pub facts: Vec<FactCard>,
    pub description: String,
}

impl CountrySheet {
    pub fn from_record(record: &CountryRecord) -> Self {
        let display_name = record.display_name().to_string();

        let facts = vec![
            FactCard {
                label: "Population",
                value: format_count(record.population()),
            },
            FactCard {
                label: "Superficie",
                value: format!("{} km²", format_number(record.area())),
            },
            FactCard {
                label: "Capitale",
                value: record.capital().unwrap_or(NOT_AVAILABLE).to_string(),
            },
            FactCard {
                label: "Devise",
                value: join_or_na(record.currency_names()),
            },
            FactCard {
                label: "Langues",
                value: join_or_na(record.language_names()),
            },
            FactCard {
                label: "Continent",
                value: record.region().to_string(),
            },
            FactCard {
                label: "Indépendant",
                value: match record.is_independent() {
                    Some(true) => "Oui",
                    Some(false) => "Non",
                    None => NOT_AVAILABLE,
                }
                .to_string(),
            },
        ];

        Self {
            flag_url: record.flag_png().to_string(),
            official_name: record.official_name().to_string(),
            location: format!("{} • {}", record.region(), record.subregion()),
            map_url: map_link(&display_name),
            description: describe(record),
            display_name,
            facts,
        }
    }

    pub fn fact(&self, label: &str) -> Option<&str> {
        self.facts
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Google Maps search link for a place name.
pub fn map_link(name: &str) -> String {
    format!("{MAPS_SEARCH_URL}{}", utf8_percent_encode(name, URI_COMPONENT))
}

/// Generated French description of a country.
pub fn describe(record: &CountryRecord) -> String {
    let mut text = format!("{} est un pays ", record.display_name());

    if !record.region().is_empty() {
        text.push_str(&format!("situé en {}. ", record.region()));
    }

    text.push_str(&format!(
        "Il compte environ {} habitants ",
        format_count(record.population())
    ));
    text.push_str(&format!(
        "et couvre une superficie de {} km². ",
        format_number(record.area())
    ));

    if let Some(capital) = record.capital() {
        text.push_str(&format!("Sa capitale est {capital}. "));
    }

    let languages: Vec<&str> = record.language_names().collect();
    match languages.as_slice() {
        [] => {}
        [only] => text.push_str(&format!("La langue officielle est le {only}.")),
        many => text.push_str(&format!(
            "Les langues officielles sont : {}.",
            many.join(", ")
        )),
    }

    text.trim_end().to_string()
}

fn join_or_na<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

/// Plain-text renderer over any writer.
pub struct TextPresenter<W: Write> {
    out: W,
    loading: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn display_country(&mut self, record: &CountryRecord) -> Result<()> {
        let sheet = CountrySheet::from_record(record);
        let out = &mut self.out;

        if !sheet.flag_url.is_empty() {
            writeln!(out, "Drapeau : {}", sheet.flag_url)?;
        }
        writeln!(out, "{}", sheet.display_name)?;
        writeln!(out, "{}", sheet.official_name)?;
        writeln!(out, "{}", sheet.location)?;
        writeln!(out, "📍 Voir sur Google Maps : {}", sheet.map_url)?;
        writeln!(out)?;

        for card in &sheet.facts {
            writeln!(out, "  {:<12} {}", card.label, card.value)?;
        }
        writeln!(out)?;

        writeln!(out, "Description")?;
        writeln!(out, "{}", sheet.description)?;
        out.flush()?;
        Ok(())
    }

    fn show_placeholder(&mut self) -> Result<()> {
        let out = &mut self.out;
        writeln!(out, "🗺️  Bienvenue sur GeoExplorer")?;
        writeln!(out, "Recherchez un pays pour découvrir ses informations")?;
        writeln!(out, "  🌍 195 pays à découvrir")?;
        writeln!(out, "  🇫🇷 Noms français acceptés")?;
        writeln!(out, "  🔍 Recherche facile par nom ou code")?;
        out.flush()?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "❌ {message}")?;
        writeln!(
            self.out,
            "Essayez avec un nom différent ou vérifiez l'orthographe"
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        if loading && !self.loading {
            writeln!(self.out, "Recherche en cours…")?;
            self.out.flush()?;
        }
        self.loading = loading;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FR_GROUP_SEPARATOR as SEP;

    fn senegal() -> CountryRecord {
        CountryRecord {
            common_name: "Senegal".into(),
            official_name: "Republic of Senegal".into(),
            translations: vec![("fra".into(), "Sénégal".into())],
            region: "Africa".into(),
            subregion: Some("Western Africa".into()),
            capitals: vec!["Dakar".into()],
            population: 16_743_930,
            area: 196_722.0,
            currencies: vec![("XOF".into(), "West African CFA franc".into())],
            languages: vec![("fra".into(), "French".into())],
            flag_png: Some("https://flagcdn.com/w320/sn.png".into()),
            independent: Some(true),
        }
    }

    #[test]
    fn sheet_prefers_french_name_and_fills_cards() {
        let sheet = CountrySheet::from_record(&senegal());
        assert_eq!(sheet.display_name, "Sénégal");
        assert_eq!(sheet.official_name, "Republic of Senegal");
        assert_eq!(sheet.location, "Africa • Western Africa");
        assert_eq!(sheet.map_url, "https://www.google.com/maps/search/S%C3%A9n%C3%A9gal");
        assert_eq!(
            sheet.fact("Population"),
            Some(format!("16{SEP}743{SEP}930").as_str())
        );
        assert_eq!(
            sheet.fact("Superficie"),
            Some(format!("196{SEP}722 km²").as_str())
        );
        assert_eq!(sheet.fact("Capitale"), Some("Dakar"));
        assert_eq!(sheet.fact("Devise"), Some("West African CFA franc"));
        assert_eq!(sheet.fact("Continent"), Some("Africa"));
        assert_eq!(sheet.fact("Indépendant"), Some("Oui"));
        let labels: Vec<_> = sheet.facts.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "Population",
                "Superficie",
                "Capitale",
                "Devise",
                "Langues",
                "Continent",
                "Indépendant"
            ]
        );
    }

    #[test]
    fn map_link_escapes_reserved_characters() {
        assert_eq!(
            map_link("Saint-Barthélemy, île & co"),
            "https://www.google.com/maps/search/Saint-Barth%C3%A9lemy%2C%20%C3%AEle%20%26%20co"
        );
        assert_eq!(
            map_link("Côte d'Ivoire"),
            "https://www.google.com/maps/search/C%C3%B4te%20d'Ivoire"
        );
        assert_eq!(
            map_link("a/b?c#d"),
            "https://www.google.com/maps/search/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn description_single_language() {
        assert_eq!(
            describe(&senegal()),
            format!(
                "Sénégal est un pays situé en Africa. Il compte environ 16{SEP}743{SEP}930 habitants \
                 et couvre une superficie de 196{SEP}722 km². Sa capitale est Dakar. \
                 La langue officielle est le French."
            )
        );
    }

    #[test]
    fn description_without_optional_parts() {
        let mut c = senegal();
        c.region.clear();
        c.capitals.clear();
        c.languages = vec![("deu".into(), "German".into()), ("fra".into(), "French".into())];
        c.population = 0;
        c.area = 0.5;
        assert_eq!(
            describe(&c),
            "Sénégal est un pays Il compte environ 0 habitants et couvre une superficie de 0,5 km². \
             Les langues officielles sont : German, French."
        );

        c.languages.clear();
        assert!(describe(&c).ends_with("0,5 km²."));
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let mut c = senegal();
        c.capitals.clear();
        c.currencies.clear();
        c.languages.clear();
        c.subregion = None;
        c.independent = None;
        let sheet = CountrySheet::from_record(&c);
        assert_eq!(sheet.fact("Capitale"), Some(NOT_AVAILABLE));
        assert_eq!(sheet.fact("Devise"), Some(NOT_AVAILABLE));
        assert_eq!(sheet.fact("Langues"), Some(NOT_AVAILABLE));
        assert_eq!(sheet.fact("Indépendant"), Some(NOT_AVAILABLE));
        assert_eq!(sheet.location, "Africa • ");

        c.independent = Some(false);
        assert_eq!(CountrySheet::from_record(&c).fact("Indépendant"), Some("Non"));
    }

    #[test]
    fn text_presenter_renders_each_mode() {
        let mut p = TextPresenter::new(Vec::new());

        p.set_loading(true).unwrap();
        assert!(p.is_loading());
        p.display_country(&senegal()).unwrap();
        p.set_loading(false).unwrap();
        assert!(!p.is_loading());
        p.show_error("Pays non trouvé. Vérifiez l'orthographe.").unwrap();
        p.show_placeholder().unwrap();

        let text = String::from_utf8(p.into_inner()).unwrap();
        assert!(text.starts_with("Recherche en cours…\n"));
        assert!(text.contains("Drapeau : https://flagcdn.com/w320/sn.png\nSénégal\n"));
        assert!(text.contains("  Capitale     Dakar\n"));
        assert!(text.contains("  Indépendant  Oui\n"));
        assert!(text.contains("❌ Pays non trouvé. Vérifiez l'orthographe.\n"));
        assert!(text.contains("Bienvenue sur GeoExplorer"));
    }
}
