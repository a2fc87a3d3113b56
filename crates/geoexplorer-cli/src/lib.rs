//! geoexplorer-cli
//! ===============
//!
//! Command-line front end for [`geoexplorer-core`]: type a country name,
//! get its flag, capital, population, currencies, languages and a short
//! French description.
//!
//! This crate primarily provides a binary (`geoexplorer`). The library
//! target exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geoexplorer-cli
//! geoexplorer search "Côte d'Ivoire"
//! geoexplorer quick
//! geoexplorer --dataset-ttl-secs 600 interactive
//! ```
//!
//! Exit status: `0` country shown, `1` not found, `2` bad shortcut number,
//! `3` service unreachable.
//!
//! Links
//! -----
//! - Core crate: <https://docs.rs/geoexplorer-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
