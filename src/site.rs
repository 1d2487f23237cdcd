//! Build configuration of the static-site generator.
//!
//! Only the parts the post-build hooks read are modeled: the output
//! directory and the ordered registry of installed plugins. Everything else
//! in `mkdocs.yml` is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use serde_yaml::value::TaggedValue;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output directory used by MkDocs when `site_dir` is not configured.
pub const DEFAULT_SITE_DIR: &str = "site";

/// Ordered registry of installed plugins, queryable by name.
///
/// Plugin options are kept as opaque JSON values; consumers validate the
/// shape they need when they look a plugin up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginRegistry {
    plugins: Vec<(String, Value)>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Re-registering a name replaces its options in place.
    pub fn insert(&mut self, name: impl Into<String>, options: Value) {
        let name = name.into();
        match self.plugins.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = options,
            None => self.plugins.push((name, options)),
        }
    }

    /// Options of the plugin registered under `name`.
    ///
    /// Plugins listed without options map to `Value::Null`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.plugins
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, options)| options)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Plugin names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Build the registry from the raw `plugins` section.
    ///
    /// Accepts the MkDocs list form (`[search, {i18n: {...}}]`) and a plain
    /// `name: options` map. Entries that fit neither shape are skipped.
    fn from_raw(raw: serde_yaml::Value) -> Self {
        let mut registry = Self::new();

        match raw {
            serde_yaml::Value::Null => {}
            serde_yaml::Value::Sequence(items) => {
                for item in items {
                    match item {
                        serde_yaml::Value::String(name) => registry.insert(name, Value::Null),
                        serde_yaml::Value::Mapping(map) if map.len() == 1 => {
                            for (name, options) in map {
                                registry.insert_raw(name, options);
                            }
                        }
                        other => debug!("Skipping unrecognized plugin entry: {:?}", other),
                    }
                }
            }
            serde_yaml::Value::Mapping(map) => {
                for (name, options) in map {
                    registry.insert_raw(name, options);
                }
            }
            other => debug!("Ignoring plugins section of unexpected shape: {:?}", other),
        }

        registry
    }

    fn insert_raw(&mut self, name: serde_yaml::Value, options: serde_yaml::Value) {
        let Some(name) = name.as_str() else {
            debug!("Skipping plugin with non-string name: {:?}", name);
            return;
        };

        match serde_json::to_value(resolve_tags(options)) {
            Ok(options) => self.insert(name, options),
            Err(e) => debug!("Skipping plugin '{}' with unrepresentable options: {}", name, e),
        }
    }
}

/// Resolve YAML tags the way MkDocs does when it loads its config.
///
/// `!ENV VAR` and `!ENV [VAR, OTHER, default]` become the value of the first
/// set variable, parsed as YAML, or the default (`null` when there is none).
/// Any other tag is dropped and its inner value kept.
fn resolve_tags(value: serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            if tag == "!ENV" {
                resolve_env(value)
            } else {
                resolve_tags(value)
            }
        }
        serde_yaml::Value::Sequence(items) => {
            serde_yaml::Value::Sequence(items.into_iter().map(resolve_tags).collect())
        }
        serde_yaml::Value::Mapping(map) => serde_yaml::Value::Mapping(
            map.into_iter()
                .map(|(key, value)| (resolve_tags(key), resolve_tags(value)))
                .collect(),
        ),
        other => other,
    }
}

fn resolve_env(spec: serde_yaml::Value) -> serde_yaml::Value {
    let (names, default) = match spec {
        serde_yaml::Value::String(name) => (vec![name], serde_yaml::Value::Null),
        serde_yaml::Value::Sequence(mut items) => {
            let default = if items.len() > 1 {
                items.pop().map(resolve_tags).unwrap_or(serde_yaml::Value::Null)
            } else {
                serde_yaml::Value::Null
            };
            let names = items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            (names, default)
        }
        other => {
            debug!("Ignoring !ENV tag with unexpected value: {:?}", other);
            return serde_yaml::Value::Null;
        }
    };

    for name in &names {
        if let Ok(raw) = std::env::var(name) {
            return serde_yaml::from_str(&raw).unwrap_or(serde_yaml::Value::String(raw));
        }
    }
    default
}

/// Build configuration handed to post-build hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Directory the site was generated into
    pub site_dir: PathBuf,

    /// Installed plugins in declared order
    pub plugins: PluginRegistry,
}

/// The subset of the config file we read.
#[derive(Debug, Deserialize)]
struct RawBuildConfig {
    #[serde(default)]
    site_dir: Option<serde_yaml::Value>,

    #[serde(default)]
    plugins: Option<serde_yaml::Value>,
}

impl BuildConfig {
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: site_dir.into(),
            plugins: PluginRegistry::new(),
        }
    }

    /// Add a plugin with the given options.
    pub fn with_plugin(mut self, name: impl Into<String>, options: Value) -> Self {
        self.plugins.insert(name, options);
        self
    }

    /// Replace the output directory, e.g. when the generator ran with `--site-dir`.
    pub fn with_site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.site_dir = site_dir.into();
        self
    }

    /// Load the build configuration from a `mkdocs.yml` (or `.json`) file.
    ///
    /// A relative `site_dir` is resolved against the directory that contains
    /// the config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content, base_dir)
        } else {
            Self::from_yaml_str(&content, base_dir)
        };

        config.with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse a YAML config document.
    pub fn from_yaml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawBuildConfig =
            serde_yaml::from_str(content).context("Invalid YAML build configuration")?;
        Self::from_raw(raw, base_dir)
    }

    /// Parse a JSON config document.
    pub fn from_json_str(content: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawBuildConfig =
            serde_json::from_str(content).context("Invalid JSON build configuration")?;
        Self::from_raw(raw, base_dir)
    }

    fn from_raw(raw: RawBuildConfig, base_dir: &Path) -> Result<Self> {
        let site_dir = match raw.site_dir.map(resolve_tags) {
            None | Some(serde_yaml::Value::Null) => PathBuf::from(DEFAULT_SITE_DIR),
            Some(serde_yaml::Value::String(dir)) => PathBuf::from(dir),
            Some(other) => anyhow::bail!("`site_dir` must be a string, got {:?}", other),
        };
        let site_dir = if site_dir.is_absolute() {
            site_dir
        } else {
            base_dir.join(site_dir)
        };

        let plugins = PluginRegistry::from_raw(raw.plugins.unwrap_or(serde_yaml::Value::Null));
        debug!(
            "Loaded build config: site_dir={}, plugins={:?}",
            site_dir.display(),
            plugins.names().collect::<Vec<_>>()
        );

        Ok(Self { site_dir, plugins })
    }
}
