//! Root redirect page generation.
//!
//! Writes `<site_dir>/index.html`, a meta-refresh page pointing at the
//! default language of the site. Works the same after a one-shot build and
//! after every rebuild in serve mode: the file is simply overwritten.

use crate::i18n;
use crate::site::BuildConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// File name of the generated page, relative to the site root.
pub const INDEX_FILE: &str = "index.html";

/// Filesystem failures while writing the redirect page.
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("failed to create site directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the redirect page for `link`.
///
/// The link is inserted verbatim, without HTML escaping.
pub fn render(link: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta http-equiv="refresh" content="0; url={link}" />
    <link rel="canonical" href="{link}" />
    <title>Redirecting...</title>
  </head>
  <body>
    <p>If you are not redirected automatically, please <a href="{link}">click here</a>.</p>
  </body>
</html>
"#,
        link = link
    )
}

/// Generate the root redirect page for a built site.
///
/// Creates the site directory if needed and overwrites any existing
/// `index.html`. Returns the path of the written file. Only filesystem
/// failures are reported; the i18n lookup always falls back to `./en/`.
pub fn generate(config: &BuildConfig) -> Result<PathBuf, RedirectError> {
    let site_dir = &config.site_dir;
    std::fs::create_dir_all(site_dir).map_err(|source| RedirectError::CreateDir {
        path: site_dir.clone(),
        source,
    })?;

    let link = i18n::default_link(&config.plugins);
    debug!("Redirect target: {}", link);

    let path = site_dir.join(INDEX_FILE);
    std::fs::write(&path, render(&link)).map_err(|source| RedirectError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Wrote root redirect {} -> {}", path.display(), link);
    Ok(path)
}
