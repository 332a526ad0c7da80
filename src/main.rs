use log2::*;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use page_ranker::config;
use page_ranker::corpus;
use page_ranker::pagerank;

/// Number of best ranked pages logged after each estimator
const TOP_PAGES: usize = 3;

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("page_ranker")) // include only modules having this pattern
        .compress(false) // compress output
        .level(cfg.log_level.to_string()) // level of logging (trace - error)
        .start();

    let graph = corpus::crawl(Arc::new(cfg.corpus_config())).await?;
    debug!("Corpus loaded in {:?}", START_TIME.elapsed());

    if let Some(path) = &cfg.output_file {
        std::fs::write(path, graph.to_dot())?;
        info!("Graph written to {:?}", path);
    }

    let rank_cfg = cfg.rank_config();

    if rank_cfg.mode.samples() {
        let ranks = rank_cfg.sample(&graph)?;
        pagerank::print_ranks(&format!("PageRank Results from Sampling (n = {})", rank_cfg.samples), &ranks);
        info!("Top sampled pages: {:?}", ranks.top(TOP_PAGES));
    }

    if rank_cfg.mode.iterates() {
        let ranks = rank_cfg.iterate(&graph)?;
        pagerank::print_ranks("PageRank Results from Iteration", &ranks);
        info!("Top iterated pages: {:?}", ranks.top(TOP_PAGES));
    }

    debug!("Finished in {:?}", START_TIME.elapsed());

    Ok(())
}
