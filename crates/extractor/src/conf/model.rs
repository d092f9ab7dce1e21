//! Model — worker configuration shape and defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Hard cap on request `content` size; larger requests are rejected
    /// with an error response instead of being parsed.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,

    /// Default list length for summary aggregates when a request does not
    /// specify `topN`.
    #[serde(default = "default_summary_top_n")]
    pub summary_top_n: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_content_bytes: default_max_content_bytes(),
            summary_top_n: default_summary_top_n(),
        }
    }
}

fn default_max_content_bytes() -> usize {
    64 * 1024 * 1024 // 64MB
}

fn default_summary_top_n() -> usize {
    5
}
