//! Integration tests for the root redirect generator
//!
//! These tests drive the public API end to end: a config file on disk is
//! loaded, the post-build hooks run, and the generated index.html is checked.

use std::path::Path;
use tempfile::TempDir;

use mkdocs_root_redirect::{
    hooks::PostBuildHooks,
    redirect::{self, render},
    site::BuildConfig,
};

// ==================== Test Helpers ====================

/// Write `content` as mkdocs.yml inside `dir` and return its path
fn write_mkdocs_yml(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("mkdocs.yml");
    std::fs::write(&path, content).expect("Failed to write mkdocs.yml");
    path
}

/// Load the config at `path`, run the hooks and return the generated page
fn build_and_read(path: &Path) -> String {
    let config = BuildConfig::from_path(path).expect("Failed to load config");
    PostBuildHooks::with_root_redirect()
        .run(&config)
        .expect("Hooks should succeed");
    std::fs::read_to_string(config.site_dir.join("index.html")).expect("index.html should exist")
}

/// Extract the meta-refresh target from a generated page
fn redirect_target(html: &str) -> &str {
    let start = html.find("url=").expect("meta refresh present") + "url=".len();
    let end = html[start..].find('"').expect("closing quote") + start;
    &html[start..end]
}

const I18N_SITE: &str = r#"
site_name: Kompox Docs
docs_dir: docs
theme:
  name: material
markdown_extensions:
  - pymdownx.emoji:
      emoji_index: !!python/name:material.extensions.emoji.twemoji
plugins:
  - search
  - i18n:
      docs_structure: folder
      languages:
        - locale: en
          name: English
          build: true
          link: /en/
        - locale: ja
          name: 日本語
          default: true
          build: true
          link: /ja/
"#;

// ==================== Redirect Target Tests ====================

#[test]
fn test_site_without_i18n_redirects_to_english() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(temp_dir.path(), "site_name: Docs\nplugins:\n  - search\n");

    let html = build_and_read(&path);
    assert_eq!(redirect_target(&html), "./en/");
    assert!(temp_dir.path().join("site").join("index.html").exists());
}

#[test]
fn test_site_with_default_language() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(temp_dir.path(), I18N_SITE);

    let html = build_and_read(&path);
    assert_eq!(html, render("./ja/"));
}

#[test]
fn test_default_language_without_link_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(
        temp_dir.path(),
        r#"
plugins:
  - i18n:
      languages:
        - locale: fr
          default: true
"#,
    );

    assert_eq!(redirect_target(&build_and_read(&path)), "./en/");
}

#[test]
fn test_unbuilt_default_uses_next_qualifying_entry() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(
        temp_dir.path(),
        r#"
plugins:
  i18n:
    languages:
      - locale: de
        default: true
        build: false
        link: /de/
      - locale: fr
        default: true
        link: /fr/
"#,
    );

    assert_eq!(redirect_target(&build_and_read(&path)), "./fr/");
}

#[test]
fn test_malformed_i18n_config_does_not_fail_build() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(
        temp_dir.path(),
        r#"
plugins:
  - i18n:
      languages:
        en: English
        fr: Français
"#,
    );

    assert_eq!(redirect_target(&build_and_read(&path)), "./en/");
}

// ==================== Output Directory Tests ====================

#[test]
fn test_custom_site_dir_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(temp_dir.path(), "site_dir: build/public\n");

    let html = build_and_read(&path);
    assert_eq!(redirect_target(&html), "./en/");
    assert!(temp_dir.path().join("build/public/index.html").is_file());
}

#[test]
fn test_site_dir_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(temp_dir.path(), I18N_SITE);
    let override_dir = temp_dir.path().join("preview");

    let config = BuildConfig::from_path(&path)
        .unwrap()
        .with_site_dir(&override_dir);
    let written = redirect::generate(&config).expect("Should generate");

    assert_eq!(written, override_dir.join("index.html"));
    assert!(!temp_dir.path().join("site").exists());
}

#[test]
fn test_rebuild_overwrites_previous_redirect() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_mkdocs_yml(temp_dir.path(), I18N_SITE);
    assert_eq!(redirect_target(&build_and_read(&path)), "./ja/");

    // Default language removed between rebuilds, as in serve mode
    write_mkdocs_yml(temp_dir.path(), "plugins:\n  - search\n");
    let html = build_and_read(&path);
    assert_eq!(html, render("./en/"));
}

// ==================== JSON Config Tests ====================

#[test]
fn test_json_build_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("build.json");
    let config = serde_json::json!({
        "site_dir": "out",
        "plugins": [
            "search",
            {"i18n": {"languages": [
                {"locale": "es", "default": true, "build": true, "link": "./es/"}
            ]}}
        ]
    });
    std::fs::write(&path, config.to_string()).unwrap();

    let html = build_and_read(&path);
    assert_eq!(redirect_target(&html), "./es/");
    assert!(temp_dir.path().join("out").join("index.html").is_file());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = BuildConfig::from_path(&temp_dir.path().join("mkdocs.yml"));
    assert!(result.is_err());
}
