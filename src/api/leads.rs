//! Lead Endpoints
//!
//! `GET /leads`, `POST /leads`, `DELETE /leads/{id}`.

use lead_core::envelope::{decode_ack_response, decode_response};
use lead_core::{ApiResult, Lead, NewLead};

use super::{read_body, transport};
use crate::config;

pub async fn list_leads() -> ApiResult<Vec<Lead>> {
    let url = config::leads_url(config::api_base_url());
    let resp = reqwest::Client::new().get(&url).send().await.map_err(transport)?;
    let (status, body) = read_body(resp).await?;
    decode_response(status, body)
}

pub async fn create_lead(lead: &NewLead) -> ApiResult<Lead> {
    let url = config::leads_url(config::api_base_url());
    let resp = reqwest::Client::new()
        .post(&url)
        .json(lead)
        .send()
        .await
        .map_err(transport)?;
    let (status, body) = read_body(resp).await?;
    decode_response(status, body)
}

pub async fn delete_lead(id: &str) -> ApiResult<()> {
    let url = config::lead_url(config::api_base_url(), id);
    let resp = reqwest::Client::new().delete(&url).send().await.map_err(transport)?;
    let (status, body) = read_body(resp).await?;
    decode_ack_response(status, body)
}
