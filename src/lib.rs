pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod paginator;
pub mod runner;
