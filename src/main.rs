use anyhow::Result;
use clap::Parser;
use mkdocs_root_redirect::{config::Config, hooks::PostBuildHooks, site::BuildConfig};
use std::path::PathBuf;
use tracing::info;

/// Write a root index.html that redirects to the site's default language.
///
/// Run it right after `mkdocs build`, or after every rebuild when serving.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to mkdocs.yml (or a JSON build config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overriding `site_dir` from the config
    #[arg(short = 'd', long)]
    site_dir: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags take precedence over environment settings.
    fn merge(self, settings: Config) -> Config {
        Config {
            mkdocs_config: self.config.unwrap_or(settings.mkdocs_config),
            site_dir: self.site_dir.or(settings.site_dir),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mkdocs_root_redirect=info".parse()?),
        )
        .init();

    let settings = Cli::parse().merge(Config::from_env());
    info!("Loading build config from {}", settings.mkdocs_config.display());

    let mut build_config = BuildConfig::from_path(&settings.mkdocs_config)?;
    if let Some(site_dir) = settings.site_dir {
        build_config = build_config.with_site_dir(site_dir);
    }

    PostBuildHooks::with_root_redirect().run(&build_config)?;

    info!("Post-build hooks finished");
    Ok(())
}
