use std::path::PathBuf;
use std::sync::Arc;

/// Default file extension of corpus pages
pub const PAGE_EXTENSION: &str = ".html";

/// Configuration for loading a corpus
pub struct CorpusConfig {
    pub directory: PathBuf,
    /// Only files whose name ends with this suffix are pages
    pub extension: String,
}

impl CorpusConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: PAGE_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn is_page(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

pub type CorpusConfigRef = Arc<CorpusConfig>;
