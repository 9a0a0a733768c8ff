//! Content loader - reads the manifest, layout and referenced markdown files

use anyhow::Result;
use tokio::task::JoinSet;

use super::{Manifest, PostEntry};
use crate::error::BuildError;
use crate::Site;

/// A manifest entry together with its raw markdown body
#[derive(Debug, Clone)]
pub struct LoadedPost {
    pub entry: PostEntry,
    pub body: String,
}

/// Loads content referenced by the manifest
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Read the shared layout template
    pub async fn load_layout(&self) -> Result<String> {
        let path = self.site.source_dir.join(&self.site.config.layout);
        let layout = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| BuildError::Read { path, source })?;
        Ok(layout)
    }

    /// Parse the manifest and read every referenced markdown file
    ///
    /// File reads fan out concurrently; the result preserves manifest order.
    /// Any missing or unreadable file fails the whole load, so nothing is
    /// rendered from a partially loaded manifest.
    pub async fn load_posts(&self) -> Result<Vec<LoadedPost>> {
        let manifest_path = self.site.source_dir.join(&self.site.config.manifest);
        let raw = tokio::fs::read_to_string(&manifest_path)
            .await
            .map_err(|source| BuildError::Read {
                path: manifest_path.clone(),
                source,
            })?;

        let entries = Manifest::parse(&manifest_path, &raw)?;
        tracing::debug!("Manifest lists {} posts", entries.len());

        let mut set = JoinSet::new();
        let count = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            // Post paths resolve against the base directory, not source_dir
            let path = self.site.base_dir.join(&entry.file);
            set.spawn(async move {
                let body = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| BuildError::Read { path, source })?;
                Ok::<_, BuildError>((index, LoadedPost { entry, body }))
            });
        }

        let mut slots: Vec<Option<LoadedPost>> = (0..count).map(|_| None).collect();
        while let Some(joined) = set.join_next().await {
            let (index, post) = joined??;
            slots[index] = Some(post);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
