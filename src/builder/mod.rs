//! Site builder - assembles the output tree
//!
//! Phases run behind strict barriers: ensure the output directory, copy
//! static assets, load all content, render every post, render the index.
//! Within the copy and render phases, independent file operations fan out
//! concurrently; each unit writes a distinct output path and the first
//! failure aborts the run.

use anyhow::Result;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::content::{ContentLoader, LoadedPost, MarkdownRenderer};
use crate::error::BuildError;
use crate::helpers::url;
use crate::template;
use crate::Site;

/// Static site builder
pub struct SiteBuilder {
    site: Site,
    renderer: Arc<MarkdownRenderer>,
}

impl SiteBuilder {
    /// Create a new builder
    pub fn new(site: &Site) -> Self {
        let renderer = Arc::new(MarkdownRenderer::new(&site.config.highlight_theme));
        Self {
            site: site.clone(),
            renderer,
        }
    }

    /// Build the entire site
    pub async fn build(&self) -> Result<()> {
        self.ensure_output_dir().await?;
        self.copy_static_files().await?;

        let loader = ContentLoader::new(&self.site);
        let layout = loader.load_layout().await?;
        let posts = loader.load_posts().await?;
        tracing::info!("Loaded {} posts", posts.len());

        self.render_posts(&layout, &posts).await?;
        self.render_index(&layout, &posts).await?;

        Ok(())
    }

    /// Create the output directory if it does not exist yet
    async fn ensure_output_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.site.output_dir)
            .await
            .map_err(|source| BuildError::CreateDir {
                path: self.site.output_dir.clone(),
                source,
            })?;
        Ok(())
    }

    /// Copy configured static assets into the output root
    ///
    /// Filenames are preserved; source subdirectory structure is discarded.
    async fn copy_static_files(&self) -> Result<()> {
        let mut set = JoinSet::new();

        for file in &self.site.config.copy_files {
            let from = self.site.source_dir.join(file);
            let name = Path::new(file)
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(file));
            let to = self.site.output_dir.join(name);

            set.spawn(async move {
                tokio::fs::copy(&from, &to)
                    .await
                    .map_err(|source| BuildError::Copy { from, to, source })?;
                Ok::<_, BuildError>(())
            });
        }

        while let Some(joined) = set.join_next().await {
            joined??;
        }

        tracing::debug!("Copied {} static files", self.site.config.copy_files.len());
        Ok(())
    }

    /// Output path of a post, relative to the output root
    ///
    /// The configured posts prefix is stripped and the markdown extension
    /// swapped for `.html`.
    fn output_rel_path(&self, file: &str) -> String {
        let path = Path::new(file);
        let rel = path
            .strip_prefix(&self.site.config.post_dir)
            .unwrap_or(path);
        rel.with_extension("html").to_string_lossy().into_owned()
    }

    /// Render every post through the layout and write it out
    async fn render_posts(&self, layout: &str, posts: &[LoadedPost]) -> Result<()> {
        let mut set = JoinSet::new();

        for post in posts {
            let rel = self.output_rel_path(&post.entry.file);
            let permalink = url::join_url(&self.site.config.url, &rel);
            let out_path = self.site.output_dir.join(&rel);

            let mut props = post.entry.fields.clone();
            props.insert("URL".to_string(), permalink);

            let renderer = Arc::clone(&self.renderer);
            let layout = layout.to_string();
            let body = post.body.clone();

            set.spawn(async move {
                let content = renderer.render(&body);
                let page = template::render(&layout, &content, &props);

                if let Some(parent) = out_path.parent() {
                    tokio::fs::create_dir_all(parent).await.map_err(|source| {
                        BuildError::CreateDir {
                            path: parent.to_path_buf(),
                            source,
                        }
                    })?;
                }
                tokio::fs::write(&out_path, page)
                    .await
                    .map_err(|source| BuildError::Write {
                        path: out_path.clone(),
                        source,
                    })?;
                tracing::debug!("Generated: {:?}", out_path);
                Ok::<_, BuildError>(())
            });
        }

        while let Some(joined) = set.join_next().await {
            joined??;
        }

        Ok(())
    }

    /// Render the index page listing all posts, newest first
    async fn render_index(&self, layout: &str, posts: &[LoadedPost]) -> Result<()> {
        let mut sorted: Vec<&LoadedPost> = posts.iter().collect();
        // stable sort: posts sharing a date keep their manifest order
        sorted.sort_by(|a, b| b.entry.date.cmp(&a.entry.date));

        let links: Vec<String> = sorted
            .iter()
            .map(|post| {
                let rel = self.output_rel_path(&post.entry.file);
                let title = post.entry.fields.get("title").map_or("", String::as_str);
                let date = post.entry.fields.get("date").map_or("", String::as_str);
                format!(r#"<a href="{}"><h2>{}</h2><p>{}</p></a>"#, rel, title, date)
            })
            .collect();

        let mut props = IndexMap::new();
        props.insert("title".to_string(), "Home".to_string());
        props.insert("URL".to_string(), self.site.config.url.clone());

        let page = template::render(layout, &links.join("\n"), &props);

        let out_path = self.site.output_dir.join("index.html");
        tokio::fs::write(&out_path, page)
            .await
            .map_err(|source| BuildError::Write {
                path: out_path.clone(),
                source,
            })?;
        tracing::debug!("Generated: {:?}", out_path);

        Ok(())
    }
}
