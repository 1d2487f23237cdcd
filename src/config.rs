use std::path::PathBuf;

/// Default location of the site generator's configuration file.
pub const DEFAULT_MKDOCS_CONFIG: &str = "mkdocs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Site generator config file (mkdocs.yml or an equivalent JSON document)
    pub mkdocs_config: PathBuf,

    // Overrides the output directory from the config file
    pub site_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mkdocs_config: std::env::var("MKDOCS_CONFIG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MKDOCS_CONFIG)),

            site_dir: std::env::var("SITE_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mkdocs_config: PathBuf::from(DEFAULT_MKDOCS_CONFIG),
            site_dir: None,
        }
    }
}
