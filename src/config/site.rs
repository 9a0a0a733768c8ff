//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Loaded from `site.yml` in the base directory when present; the defaults
/// match the layout this compiler was originally deployed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL posts are published under
    pub url: String,

    /// Source directory holding the manifest, layout and assets
    pub source_dir: String,

    /// Output directory the site is written to
    pub output_dir: String,

    /// Subdirectory prefix stripped from post paths when deriving
    /// output paths and URLs
    pub post_dir: String,

    /// Manifest filename inside the source directory
    pub manifest: String,

    /// Layout template filename inside the source directory
    pub layout: String,

    /// Static assets copied verbatim into the output root,
    /// relative to the source directory
    pub copy_files: Vec<String>,

    /// Syntect theme used for fenced code blocks
    pub highlight_theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://example.com".to_string(),
            source_dir: "src".to_string(),
            output_dir: "dist".to_string(),
            post_dir: "blog".to_string(),
            manifest: "blog.json".to_string(),
            layout: "layout.html".to_string(),
            copy_files: vec![
                "assets/style.css".to_string(),
                "assets/favicon.ico".to_string(),
                "static/data-privacy.html".to_string(),
                "static/imprint.html".to_string(),
            ],
            highlight_theme: "base16-ocean.dark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
