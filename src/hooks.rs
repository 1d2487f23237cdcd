//! Post-build hooks.
//!
//! A hook runs once after the site generator has written all pages, and
//! again after every rebuild in serve mode.

use crate::redirect;
use crate::site::BuildConfig;
use anyhow::{Context, Result};
use tracing::info;

/// A callback invoked after the site has been built.
pub trait PostBuildHook {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    fn on_post_build(&self, config: &BuildConfig) -> Result<()>;
}

/// Writes the root `index.html` redirect to the default language.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootRedirect;

impl PostBuildHook for RootRedirect {
    fn name(&self) -> &str {
        "root-redirect"
    }

    fn on_post_build(&self, config: &BuildConfig) -> Result<()> {
        redirect::generate(config)?;
        Ok(())
    }
}

/// Ordered set of post-build hooks.
#[derive(Default)]
pub struct PostBuildHooks {
    hooks: Vec<Box<dyn PostBuildHook>>,
}

impl PostBuildHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks with the root redirect registered.
    pub fn with_root_redirect() -> Self {
        let mut hooks = Self::new();
        hooks.register(RootRedirect);
        hooks
    }

    pub fn register(&mut self, hook: impl PostBuildHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in registration order, stopping at the first failure.
    pub fn run(&self, config: &BuildConfig) -> Result<()> {
        for hook in &self.hooks {
            info!("Running post-build hook: {}", hook.name());
            hook.on_post_build(config)
                .with_context(|| format!("Post-build hook '{}' failed", hook.name()))?;
        }
        Ok(())
    }
}
