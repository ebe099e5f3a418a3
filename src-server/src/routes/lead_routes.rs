//! Lead Handlers
//!
//! `GET /leads`, `POST /leads`, `DELETE /leads/{id}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use lead_core::validate;

use super::ServerState;
use crate::domain::{DomainError, Lead, LeadDraft};
use crate::error::ServerError;
use crate::repository::Repository;

/// List all leads
pub async fn list_leads(State(state): State<ServerState>) -> Result<Json<Vec<Lead>>, ServerError> {
    let leads = state.leads.list().await?;
    log::debug!("Listing {} leads", leads.len());
    Ok(Json(leads))
}

/// Create a lead from `{name, email, status}`
pub async fn create_lead(
    State(state): State<ServerState>,
    body: Result<Json<LeadDraft>, JsonRejection>,
) -> Result<Json<Lead>, ServerError> {
    let Json(draft) = body?;
    let new_lead = validate(&draft).map_err(|errors| {
        let msg = errors.first_message().unwrap_or("Invalid lead").to_string();
        DomainError::InvalidInput(msg)
    })?;

    match state.leads.insert(new_lead).await {
        Ok(lead) => {
            log::info!("Created lead {} <{}>", lead.id, lead.email);
            Ok(Json(lead))
        }
        Err(e) => {
            log::warn!("Rejected lead: {}", e);
            Err(e.into())
        }
    }
}

/// Delete a lead by id
pub async fn delete_lead(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    state.leads.delete(&id).await?;
    log::info!("Deleted lead {}", id);
    Ok(Json(json!({})))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::repository::LeadRepository;
    use crate::routes::{build_router, ServerState};

    fn app() -> Router {
        build_router(ServerState::new(LeadRepository::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/leads",
            Some(json!({ "name": "Ada", "email": "ada@x.com", "status": "New" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(created.get("error").is_none());
        assert_eq!(created["name"], "Ada");
        assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

        let (_, listed) = send(&app, Method::GET, "/leads", None).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn test_duplicate_email_uses_error_envelope() {
        let app = app();
        let body = json!({ "name": "Ada", "email": "ada@x.com", "status": "New" });
        send(&app, Method::POST, "/leads", Some(body.clone())).await;

        let (status, resp) = send(&app, Method::POST, "/leads", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp, json!({ "error": "Email already exists" }));
    }

    #[tokio::test]
    async fn test_invalid_lead_rejected() {
        let app = app();
        let (status, resp) = send(
            &app,
            Method::POST,
            "/leads",
            Some(json!({ "name": "", "email": "nope", "status": "Lost" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp, json!({ "error": "Name is required" }));

        let (_, listed) = send(&app, Method::GET, "/leads", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let (status, resp) = send(&app, Method::POST, "/leads", Some(json!([1, 2, 3]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_delete_lead() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/leads",
            Some(json!({ "name": "Bob", "email": "bob@x.com", "status": "Engaged" })),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, resp) = send(&app, Method::DELETE, &format!("/leads/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp, json!({}));

        let (_, listed) = send(&app, Method::GET, "/leads", None).await;
        assert_eq!(listed, json!([]));

        let (_, resp) = send(&app, Method::DELETE, &format!("/leads/{id}"), None).await;
        assert_eq!(resp, json!({ "error": "Lead not found" }));
    }
}
