use std::sync::Arc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use page_ranker::corpus::{self, CorpusConfig};
use page_ranker::pagerank::{self, EstimatorMode, PageRankError, RankConfig};

fn write_corpus(pages: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in pages {
        std::fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_corpus_ranking_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = write_corpus(&[
        ("1.html", r#"<html><body><a href="2.html">Two</a> <a href="3.html">Three</a></body></html>"#),
        ("2.html", r#"<html><body><a href="3.html">Three</a></body></html>"#),
        ("3.html", r#"<html><body><a href="2.html">Two</a></body></html>"#),
    ]);

    let graph = corpus::crawl(Arc::new(CorpusConfig::new(dir.path()))).await?;
    assert_eq!(graph.len(), 3);

    let transition = pagerank::transition_model(&graph, "1.html", 0.85)?;
    assert!((transition["1.html"] - 0.05).abs() < 1e-9);
    assert!((transition["2.html"] - 0.475).abs() < 1e-9);
    assert!((transition["3.html"] - 0.475).abs() < 1e-9);

    let iterated = pagerank::iterate_rank(&graph, pagerank::DAMPING)?;
    let mut rng = StdRng::seed_from_u64(2024);
    let sampled = pagerank::sample_rank_with_rng(&graph, pagerank::DAMPING, pagerank::SAMPLES, &mut rng)?;

    for ranks in [&iterated, &sampled] {
        assert!((ranks.total() - 1.0).abs() < 1e-6);
        let first = ranks.rank("1.html").unwrap();
        assert!(ranks.rank("2.html").unwrap() > first);
        assert!(ranks.rank("3.html").unwrap() > first);
    }
    assert!(iterated.max_delta(&sampled) < 0.03);
    Ok(())
}

#[tokio::test]
async fn test_sink_corpus_is_uniform() -> Result<(), Box<dyn std::error::Error>> {
    let dir = write_corpus(&[
        ("a.html", "<p>nothing here</p>"),
        ("b.html", r#"<a href="https://example.com">away</a>"#),
        ("c.html", r#"<a href="c.html">myself</a>"#),
    ]);

    let graph = corpus::crawl(Arc::new(CorpusConfig::new(dir.path()))).await?;
    assert_eq!(graph.sinks().count(), 3);

    let cfg = RankConfig::new().with_seed(5).with_mode(EstimatorMode::Both);
    let iterated = cfg.iterate(&graph)?;
    let sampled = cfg.sample(&graph)?;
    for (_, rank) in iterated.iter() {
        assert!((rank - 1.0 / 3.0).abs() < 1e-9);
    }
    for (_, rank) in sampled.iter() {
        assert!((rank - 1.0 / 3.0).abs() < 0.03);
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_corpus_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = write_corpus(&[("readme.txt", "not a page")]);

    let graph = corpus::crawl(Arc::new(CorpusConfig::new(dir.path()))).await?;
    assert!(graph.is_empty());

    let cfg = RankConfig::new();
    assert_eq!(cfg.sample(&graph), Err(PageRankError::EmptyGraph));
    assert_eq!(cfg.iterate(&graph), Err(PageRankError::EmptyGraph));
    Ok(())
}
