//! Handle — request dispatch and the fault boundary.
//!
//! Every scan-engine invocation, parsing and summarizing alike, runs inside
//! `catch_unwind` so a defect surfaces as a structured error response
//! instead of killing the worker.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, warn};

use super::compress::compress;
use super::message::{Request, Response};
use super::TransportError;
use crate::conf::WorkerConfig;
use crate::scan::parse_report;
use crate::scan::summary::summarize;

/// Handle one raw request line. Deserialization failures still produce an
/// error response, with the correlation id recovered from the raw JSON
/// where possible.
pub fn handle_raw(line: &str, config: &WorkerConfig) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(request, config),
        Err(err) => {
            warn!(error = %err, "rejecting malformed request");
            let id = recover_id(line);
            Response::error(id, TransportError::BadRequest(err.to_string()))
        }
    }
}

/// Dispatch one decoded request.
pub fn handle(request: Request, config: &WorkerConfig) -> Response {
    match request {
        Request::Parse {
            id,
            content,
            file_name,
        } => match checked_scan(&content, config, || parse_report(&content, &file_name)) {
            Ok(report) => Response::parse_ok(id, report),
            Err(err) => Response::error(id, err),
        },
        Request::Compress { id, content } => {
            let (compressed, format) = compress(&content);
            debug!(
                raw = content.len(),
                compressed = compressed.len(),
                "compress request served"
            );
            Response::compress_ok(id, compressed, format)
        }
        Request::Summary {
            id,
            content,
            file_name,
            top_n,
        } => {
            let top_n = top_n.unwrap_or(config.summary_top_n);
            match checked_scan(&content, config, || {
                summarize(&parse_report(&content, &file_name), top_n)
            }) {
                Ok(summary) => Response::summary_ok(id, summary),
                Err(err) => Response::error(id, err),
            }
        }
    }
}

/// Enforce the content cap, then run the scan behind the panic boundary.
fn checked_scan<T>(
    content: &str,
    config: &WorkerConfig,
    scan: impl FnOnce() -> T,
) -> Result<T, TransportError> {
    if content.len() > config.max_content_bytes {
        return Err(TransportError::ContentTooLarge(
            content.len(),
            config.max_content_bytes,
        ));
    }

    catch_unwind(AssertUnwindSafe(scan))
        .map_err(|panic| TransportError::ParserPanic(panic_message(panic.as_ref())))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_owned()
    }
}

fn recover_id(line: &str) -> Value {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|v| v.get("id").cloned())
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WorkerConfig {
        WorkerConfig::default()
    }

    #[test]
    fn test_parse_request_echoes_id() {
        let line = r#"{"kind":"parse","id":"req-1","content":"lga -m 30\n2024-01-05;14:32:01;AL;m;NodeA;Link down;\n","fileName":"n.log"}"#;
        let resp = handle_raw(line, &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], "req-1");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["result"]["alarmEvents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_json_yields_error_with_recovered_id() {
        let resp = handle_raw(r#"{"kind":"parse","id":42,"content":5}"#, &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["status"], "error");
    }

    #[test]
    fn test_garbage_line_yields_error_with_null_id() {
        let resp = handle_raw("not json at all", &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], Value::Null);
        assert_eq!(json["status"], "error");
    }

    #[test]
    fn test_oversized_content_rejected() {
        let mut cfg = config();
        cfg.max_content_bytes = 8;
        let req: Request = serde_json::from_str(
            r#"{"kind":"parse","id":1,"content":"0123456789","fileName":"n.log"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(handle(req, &cfg)).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json["error"].as_str().unwrap().contains("too large"));
    }

    #[test]
    fn test_compress_request_round_trips_shape() {
        let resp = handle_raw(r#"{"kind":"compress","id":9,"content":"hello"}"#, &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["status"], "ok");
        assert!(json["compressed"].is_string());
        let format = json["format"].as_str().unwrap();
        assert!(format == "lzutf16" || format == "json");
    }

    #[test]
    fn test_scan_panic_yields_structured_error() {
        let result = checked_scan("content", &config(), || -> () { panic!("synthetic fault") });
        match result {
            Err(TransportError::ParserPanic(msg)) => assert!(msg.contains("synthetic fault")),
            other => panic!("expected panic error, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_survives_extreme_duration_values() {
        let request = serde_json::json!({
            "kind": "summary",
            "id": 11,
            "content": "lgd -m 30\n2024-02-01;03:00:00;Restart (Upgrade);1;ops;9999999999999999999h\n",
            "fileName": "n.log",
        });
        let resp = handle_raw(&request.to_string(), &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], 11);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["summary"]["restartCount"], 1);
    }

    #[test]
    fn test_summary_request() {
        let content = "lga -m 30\\n2024-01-05;14:32:01;AL;m;NodeA;Link down;\\n";
        let line = format!(
            r#"{{"kind":"summary","id":3,"content":"{content}","fileName":"n.log","topN":2}}"#
        );
        let resp = handle_raw(&line, &config());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["summary"]["alarmCount"], 1);
        assert_eq!(json["summary"]["alarmTopTitles"]["labels"][0], "Link down");
    }
}
