//! Cloudflare API response shapes

use serde::Deserialize;

/// One page of a listing: `{result: [...], result_info: {total_count}}`
#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    pub result: Vec<T>,
    pub result_info: ResultInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultInfo {
    pub total_count: u64,
}

/// Single-object response: `{result: {...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct Single<T> {
    pub result: T,
}

/// Zone entry of a zone listing; only the id is used downstream
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareZone {
    pub id: String,
    pub name: String,
}

/// Error payload: `{success: false, errors: [{code, message}]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    #[allow(dead_code)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
