//! Message — wire shapes of the request/response boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scan::model::LogReport;
use crate::scan::summary::ReportSummary;

/// One request from the host. Missing `content`/`fileName` fields default
/// to empty strings rather than failing the whole request.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Request {
    Parse {
        #[serde(default)]
        id: Value,
        #[serde(default)]
        content: String,
        #[serde(default, rename = "fileName")]
        file_name: String,
    },
    Compress {
        #[serde(default)]
        id: Value,
        #[serde(default)]
        content: String,
    },
    Summary {
        #[serde(default)]
        id: Value,
        #[serde(default)]
        content: String,
        #[serde(default, rename = "fileName")]
        file_name: String,
        #[serde(default, rename = "topN")]
        top_n: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Tag describing how the `compressed` payload is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionFormat {
    #[serde(rename = "lzutf16")]
    LzUtf16,
    /// Pass-through: the payload is the original text, unmodified.
    #[serde(rename = "json")]
    Json,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Parse {
        id: Value,
        status: Status,
        result: LogReport,
    },
    Compress {
        id: Value,
        status: Status,
        compressed: String,
        format: CompressionFormat,
    },
    Summary {
        id: Value,
        status: Status,
        summary: ReportSummary,
    },
    Error {
        id: Value,
        status: Status,
        error: String,
    },
}

impl Response {
    pub fn parse_ok(id: Value, result: LogReport) -> Self {
        Response::Parse {
            id,
            status: Status::Ok,
            result,
        }
    }

    pub fn compress_ok(id: Value, compressed: String, format: CompressionFormat) -> Self {
        Response::Compress {
            id,
            status: Status::Ok,
            compressed,
            format,
        }
    }

    pub fn summary_ok(id: Value, summary: ReportSummary) -> Self {
        Response::Summary {
            id,
            status: Status::Ok,
            summary,
        }
    }

    pub fn error(id: Value, error: impl ToString) -> Self {
        Response::Error {
            id,
            status: Status::Error,
            error: error.to_string(),
        }
    }
}
