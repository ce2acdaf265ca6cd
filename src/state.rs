use std::sync::Arc;

use crate::config::Config;
use crate::corpus::{self, Corpus};

/// Shared application state.
///
/// The corpus is loaded once at startup and shared read-only behind an
/// `Arc`; it is never mutated afterward, so concurrent query handlers need
/// no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub corpus: Arc<Corpus>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let corpus = corpus::load(&config.data_file)?;
        tracing::info!("Loaded {} records from {}", corpus.len(), config.data_file.display());

        Ok(Self {
            config,
            corpus: Arc::new(corpus),
        })
    }
}
