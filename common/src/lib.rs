//! Folio Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型とロジック

pub mod types;
pub mod error;
pub mod href;
pub mod card;
pub mod classify;
pub mod grid;
pub mod search;
pub mod tabs;
pub mod reveal;
pub mod skill;
pub mod load;
pub mod config;

pub use types::{Category, CorpusEntry, Group, Record};
pub use error::{Error, Result};
pub use href::{detect_base, fix_path, is_external, link_target, LinkTarget};
pub use card::{card_html, escape_html, search_card_html};
pub use classify::{classify, partition, ClassifierPolicy, Partitioned, Rule};
pub use search::{build_corpus, search, SearchOutcome};
pub use tabs::{filter_by_tag, tag_keys, TabState};
pub use reveal::{ElementId, RevealRegistry, RevealState};
pub use skill::{AnimationGuard, SkillPlan, SkillTiming};
pub use load::{Dataset, Degraded, LoadPolicy, Loaded, Source};
pub use config::SiteConfig;
