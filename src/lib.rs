//! micropress: a minimal manifest-driven static site compiler
//!
//! This crate reads a JSON manifest of markdown posts, renders each one
//! through a shared `%%PLACEHOLDER%%` layout template, and writes a
//! deployable output tree with copied static assets and an index page.

pub mod builder;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod template;

pub use error::BuildError;

use anyhow::Result;
use std::path::Path;

/// The main compiler instance
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory (manifest, layout, assets)
    pub source_dir: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            output_dir,
        })
    }

    /// Compile the site
    pub async fn build(&self) -> Result<()> {
        commands::build::run(self).await
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
