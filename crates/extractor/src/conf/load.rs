//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::WorkerConfig;

impl WorkerConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("EXTRACTOR_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/extractor/worker.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::default()
        };

        if let Ok(max) = std::env::var("EXTRACTOR_MAX_CONTENT_BYTES") {
            config.max_content_bytes = max.parse()?;
        }
        if let Ok(top_n) = std::env::var("EXTRACTOR_SUMMARY_TOP_N") {
            config.summary_top_n = top_n.parse()?;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: WorkerConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}
