use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the record corpus
    pub data_file: PathBuf,
    /// Directory holding the scanned documents referenced by records
    pub docs_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/sample_records.csv"),
            docs_dir: PathBuf::from("./static/documents"),
            bind_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(file) = std::env::var("RECORD_SEARCH_DATA_FILE") {
            config.data_file = PathBuf::from(file);
        }
        if let Ok(dir) = std::env::var("RECORD_SEARCH_DOCS_DIR") {
            config.docs_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("RECORD_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }
}
