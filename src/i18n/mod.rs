//! Internationalization (i18n) plugin support.
//!
//! Reads the language list declared for the i18n plugin and resolves the
//! path of the default language, which the root redirect points at.
//!
//! # Example
//!
//! ```rust,ignore
//! use mkdocs_root_redirect::i18n;
//!
//! // "./fr/" for a site whose default language links to "/fr/",
//! // "./en/" when nothing can be resolved
//! let link = i18n::default_link(&config.plugins);
//! ```

mod language;
mod plugin;

pub use language::{normalize_link, LanguageEntry};
pub use plugin::{default_link, find_default_link, LookupError, FALLBACK_LINK, I18N_PLUGIN};
