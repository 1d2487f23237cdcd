//! Root redirect generation for internationalized MkDocs sites.
//!
//! After a build, [`hooks::PostBuildHooks`] runs the [`hooks::RootRedirect`]
//! hook, which writes `<site_dir>/index.html` redirecting visitors to the
//! default language (resolved from the i18n plugin, or `./en/`).

pub mod config;
pub mod hooks;
pub mod i18n;
pub mod redirect;
pub mod site;
