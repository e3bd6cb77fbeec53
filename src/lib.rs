pub mod analyzer;
pub mod checker;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod offline;
pub mod parser;
pub mod scraper;
pub mod storage;
