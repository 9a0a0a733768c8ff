//! Compile the site

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::builder::SiteBuilder;
use crate::Site;

/// Compile the site once
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let builder = SiteBuilder::new(site);
    builder.build().await?;

    let duration = start.elapsed();
    tracing::info!("Compiled in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and recompile
///
/// Every change triggers a full rebuild; there is no incrementality.
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    // Watch the source directory (manifest, layout, assets)
    watcher.watch(site.source_dir.as_ref(), notify::RecursiveMode::Recursive)?;

    // Watch the posts directory, which lives outside the source tree
    let posts_dir = site.base_dir.join(&site.config.post_dir);
    if posts_dir.exists() {
        watcher.watch(posts_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, recompiling...");
                    if let Err(e) = run(site).await {
                        tracing::error!("Compilation failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
