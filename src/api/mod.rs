//! Leads API Client
//!
//! HTTP bindings to the leads API, organized by resource.

mod leads;

use lead_core::{ApiError, ApiResult};
use serde_json::Value;

pub use leads::*;

/// Status code and parsed JSON body (if the body was non-empty JSON)
async fn read_body(resp: reqwest::Response) -> ApiResult<(u16, Option<Value>)> {
    let status = resp.status().as_u16();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok((status, None));
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => Ok((status, Some(body))),
        Err(_) if !(200..300).contains(&status) => Ok((status, None)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
