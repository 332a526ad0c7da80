use anyhow::{Context, Result, anyhow};
use log2::{debug, info};
use std::collections::HashSet;
use tokio::fs;
use tokio::task::JoinHandle;
use url::Url;

use super::config::CorpusConfigRef;
use super::scrape::scrape_page;
use crate::graph::Graph;

/// Parse every page of the corpus directory and build its link graph.
///
/// Pages are scraped concurrently. Links to pages outside the corpus and
/// self links are dropped by [`Graph::from_links`].
pub async fn crawl(config: CorpusConfigRef) -> Result<Graph> {
    let directory = fs::canonicalize(&config.directory)
        .await
        .with_context(|| format!("Failed to open corpus {}", config.directory.display()))?;
    let base = Url::from_directory_path(&directory)
        .map_err(|_| anyhow!("Corpus path is not a directory: {}", directory.display()))?;

    let mut entries = fs::read_dir(&directory)
        .await
        .with_context(|| format!("Failed to list corpus {}", directory.display()))?;
    let mut handles: Vec<JoinHandle<Result<(String, HashSet<String>)>>> = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(file_name) = entry.file_name().into_string() else {
            debug!("Skipped non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        let path = entry.path();
        // metadata follows symlinks, so linked pages count as pages
        if !config.is_page(&file_name) || !fs::metadata(&path).await?.is_file() {
            debug!("Skipped {}", file_name);
            continue;
        }

        let base = base.clone();
        handles.push(tokio::spawn(async move {
            let links = scrape_page(&path, &base).await?;
            Ok((file_name, links))
        }));
    }

    let mut pages = Vec::with_capacity(handles.len());
    for handle in handles {
        pages.push(handle.await??);
    }

    let graph = Graph::from_links(pages);
    info!("Corpus {} has {} pages", directory.display(), graph.len());

    Ok(graph)
}
