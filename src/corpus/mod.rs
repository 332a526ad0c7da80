pub mod config;
pub mod loader;
pub mod scrape;


pub use config::{CorpusConfig, CorpusConfigRef, PAGE_EXTENSION};
pub use loader::crawl;
pub use scrape::{construct_link, extract_links, scrape_page};
