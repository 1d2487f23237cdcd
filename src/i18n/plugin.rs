//! Default-language lookup against the i18n plugin options.

use crate::i18n::LanguageEntry;
use crate::site::PluginRegistry;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Registry name of the i18n plugin.
pub const I18N_PLUGIN: &str = "i18n";

/// Redirect target used when no default language can be resolved.
pub const FALLBACK_LINK: &str = "./en/";

/// Why the i18n plugin options could not be read.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("i18n plugin options must be a map, got {0}")]
    OptionsNotAMap(&'static str),

    #[error("i18n `languages` must be a list, got {0}")]
    LanguagesNotAList(&'static str),

    #[error("malformed i18n language entry at index {index}")]
    MalformedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

/// Find the link of the default language.
///
/// Scans the `languages` entries in declared order and stops at the first one
/// that is both default and built. Returns `Ok(None)` when the plugin is not
/// installed, declares no languages, nothing qualifies, or the qualifying
/// entry has no link. Entries after the match are never inspected.
pub fn find_default_link(plugins: &PluginRegistry) -> Result<Option<String>, LookupError> {
    let languages = match plugins.get(I18N_PLUGIN) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(options)) => match options.get("languages") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(languages)) => languages,
            Some(other) => return Err(LookupError::LanguagesNotAList(kind(other))),
        },
        Some(other) => return Err(LookupError::OptionsNotAMap(kind(other))),
    };

    for (index, raw) in languages.iter().enumerate() {
        let entry = LanguageEntry::deserialize(raw)
            .map_err(|source| LookupError::MalformedEntry { index, source })?;

        if entry.is_built_default() {
            debug!(
                "Default language: {}",
                entry.locale.as_deref().unwrap_or("<unnamed>")
            );
            return Ok(entry.redirect_link());
        }
    }

    Ok(None)
}

/// Resolve the redirect target, falling back to [`FALLBACK_LINK`].
///
/// Lookup failures never propagate: the redirect page is a convenience and
/// must not break the build.
pub fn default_link(plugins: &PluginRegistry) -> String {
    match find_default_link(plugins) {
        Ok(Some(link)) => link,
        Ok(None) => FALLBACK_LINK.to_string(),
        Err(e) => {
            debug!("i18n lookup failed, using {}: {}", FALLBACK_LINK, e);
            FALLBACK_LINK.to_string()
        }
    }
}
