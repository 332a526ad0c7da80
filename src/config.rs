use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::corpus::{CorpusConfig, PAGE_EXTENSION};
use crate::pagerank::{self, DAMPING, EstimatorMode, MAX_ROUNDS, RankConfig, SAMPLES, THRESHOLD};

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
/// This struct receives all program arguments, while CorpusConfig and
/// RankConfig describe only their own part of the run
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Directory holding the corpus pages
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, default_value_t = DAMPING)]
    pub damping: f64,
    /// Number of random surfer steps
    #[arg(short, long, default_value_t = SAMPLES)]
    pub samples: usize,
    /// Which estimators to run
    #[arg(short, long, default_value = "both", value_enum)]
    pub mode: EstimatorMode,
    /// Largest per-page change accepted as converged
    #[arg(long, default_value_t = THRESHOLD)]
    pub threshold: f64,
    /// Maximum number of update rounds before giving up
    #[arg(long, default_value_t = MAX_ROUNDS)]
    pub max_rounds: usize,
    /// Seed for the random surfer
    #[arg(long)]
    pub seed: Option<u64>,
    /// File extension of corpus pages
    #[arg(short, long, default_value = PAGE_EXTENSION)]
    pub extension: String,
    /// Output file for the link graph in DOT format
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        pagerank::check_damping(self.damping)?;
        if self.samples == 0 {
            anyhow::bail!("samples must be greater than 0");
        }
        if !(self.threshold > 0.0) {
            anyhow::bail!("threshold must be greater than 0");
        }
        if self.max_rounds == 0 {
            anyhow::bail!("max_rounds must be greater than 0");
        }
        Ok(())
    }

    pub fn corpus_config(&self) -> CorpusConfig {
        CorpusConfig::new(self.corpus.clone()).with_extension(self.extension.clone())
    }

    pub fn rank_config(&self) -> RankConfig {
        let cfg = RankConfig::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
            .with_threshold(self.threshold)
            .with_max_rounds(self.max_rounds)
            .with_mode(self.mode);
        match self.seed {
            Some(seed) => cfg.with_seed(seed),
            None => cfg,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
