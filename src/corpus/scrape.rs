use anyhow::{Context, Result, anyhow};
use log2::{debug, info};
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Resolves `href` against the corpus directory `base` (a `file://` URL
/// ending in `/`). Query and fragment are dropped.
///
/// Returns the file name of the target when it lies directly inside the
/// corpus directory, `None` for anything else (other schemes, hosts,
/// subdirectories, the directory itself).
pub fn construct_link(href: &str, base: &Url) -> Option<String> {
    let mut url = base.join(href).ok()?;
    url.set_query(None);
    url.set_fragment(None);

    let target = url.to_file_path().ok()?;
    let directory = base.to_file_path().ok()?;
    if target.parent()? != directory.as_path() {
        return None;
    }

    target.file_name()?.to_str().map(str::to_string)
}

/// Collects the raw `href` of every anchor in `html`.
pub fn extract_links(html: &str) -> Result<HashSet<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    Ok(document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect())
}

/// Reads one page and returns the corpus file names it links to.
pub async fn scrape_page(path: &Path, base: &Url) -> Result<HashSet<String>> {
    let html = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read page {}", path.display()))?;

    let mut found_links = HashSet::new();
    for href in extract_links(&html)? {
        match construct_link(&href, base) {
            Some(link) => {
                found_links.insert(link);
            }
            None => debug!("Skipped link outside corpus: {}", href),
        }
    }

    info!("Found {} links on page {}", found_links.len(), path.display());

    Ok(found_links)
}
