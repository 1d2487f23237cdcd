//! Language entries declared in the i18n plugin configuration.
//!
//! Each entry is validated once against an explicit schema instead of being
//! probed field by field.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

/// One language declared under the i18n plugin's `languages` list.
///
/// Keys other than the ones below (`name`, `site_name`, `nav`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    /// Locale code (e.g., "en", "ja"), only used for logging
    #[serde(default)]
    pub locale: Option<String>,

    /// Whether this is the default language (at most one should be true)
    #[serde(default, deserialize_with = "yaml11_bool")]
    pub default: bool,

    /// Whether pages for this language were generated
    #[serde(default = "default_build", deserialize_with = "yaml11_bool")]
    pub build: bool,

    /// Relative path of this language's pages (e.g., "/fr/")
    #[serde(default)]
    pub link: Option<String>,
}

fn default_build() -> bool {
    true
}

/// Parse a YAML 1.1 boolean word (`yes`, `off`, `Y`, ...).
///
/// MkDocs reads its config with YAML 1.1 rules, where these are booleans.
fn parse_yaml11_bool(word: &str) -> Option<bool> {
    match word.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" => Some(true),
        "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Accept a real boolean or a YAML 1.1 boolean word.
fn yaml11_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Word(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Word(word) => parse_yaml11_bool(&word)
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&word), &"a boolean")),
    }
}

impl LanguageEntry {
    /// Default language that was actually built.
    pub fn is_built_default(&self) -> bool {
        self.default && self.build
    }

    /// Normalized redirect target, or `None` when `link` is absent or empty.
    pub fn redirect_link(&self) -> Option<String> {
        self.link
            .as_deref()
            .filter(|link| !link.is_empty())
            .map(normalize_link)
    }
}

/// Make a language link relative to the site root.
///
/// Links already starting with `./` are kept as-is; anything else gets a `.`
/// prefix, so `/fr/` becomes `./fr/`. Note that `fr/` becomes `.fr/`: existing
/// sites depend on this exact rule.
pub fn normalize_link(link: &str) -> String {
    if link.starts_with("./") {
        link.to_string()
    } else {
        format!(".{}", link)
    }
}
