//! API Configuration
//!
//! The leads API base URL is baked in at build time from `LEAD_DESK_API_URL`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Used when `LEAD_DESK_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Base URL of the leads API, without trailing slash
pub fn api_base_url() -> &'static str {
    option_env!("LEAD_DESK_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}

/// `GET`/`POST` collection endpoint
pub fn leads_url(base: &str) -> String {
    format!("{}/leads", base.trim_end_matches('/'))
}

/// `DELETE` endpoint for one lead
pub fn lead_url(base: &str, id: &str) -> String {
    format!("{}/{}", leads_url(base), utf8_percent_encode(id, PATH_SEGMENT))
}
