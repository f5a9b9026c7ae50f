//! Stateless pass-through that exchanges a hosting-provider watch-page URL
//! for a direct, time-limited download URL via the provider's
//! ticket-then-download handshake. Nothing is persisted and nothing is
//! retried; the caller decides what to do with provider-side refusals.

use std::sync::LazyLock;

use axum::extract::{Query, State};
use axum::response::Json;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

static FILE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/e/([A-Za-z0-9]+)").expect("valid file id pattern")
});

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub url: Option<String>,
}

/// GET /resolve?url= — resolve a watch-page URL into a direct download link.
pub async fn resolve_link_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<Json<Value>> {
    let Some(url) = query.url.as_deref() else {
        return Err(ApiError::bad_request("URL is required"));
    };
    let Some(file_id) = FILE_ID_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    else {
        return Err(ApiError::bad_request("Invalid watch page URL"));
    };

    let resolver = &state.config.resolver;
    let ticket_url = format!(
        "{}/file/dlticket?file={}&login={}&key={}",
        resolver.api_base, file_id, resolver.login, resolver.key
    );
    let ticket_data = fetch_json(&state, &ticket_url).await?;

    if ticket_data["result"].as_i64() != Some(200) {
        let message = ticket_data["msg"]
            .as_str()
            .unwrap_or("Failed to get ticket");
        return Ok(Json(json!({
            "success": false,
            "error": message,
            "needsCaptcha": ticket_data["result"].as_i64() == Some(-1),
        })));
    }

    let ticket = ticket_data["ticket"].clone();
    let expires = ticket_data["expires"].clone();

    if let Some(captcha_url) = ticket_data["captcha_url"].as_str() {
        return Ok(Json(json!({
            "success": false,
            "error": "Captcha required",
            "captchaUrl": captcha_url,
            "ticket": ticket,
            "fileId": file_id,
        })));
    }

    let dl_url = format!(
        "{}/file/dl?file={}&ticket={}",
        resolver.api_base,
        file_id,
        ticket.as_str().unwrap_or_default()
    );
    let dl_data = fetch_json(&state, &dl_url).await?;

    if dl_data["result"].as_i64() == Some(200) {
        if let Some(link) = dl_data["link"].as_str() {
            return Ok(Json(json!({
                "success": true,
                "downloadUrl": link,
                "expires": expires,
            })));
        }
    }

    Ok(Json(json!({
        "success": false,
        "error": dl_data["msg"].as_str().unwrap_or("Failed to get download link"),
    })))
}

async fn fetch_json(state: &AppState, url: &str) -> ApiResult<Value> {
    let response = state.http.get(url).send().await.map_err(|e| {
        warn!("resolver request failed: {e}");
        ApiError::internal("Failed to fetch download link")
    })?;
    response.json::<Value>().await.map_err(|e| {
        warn!("resolver returned unparseable body: {e}");
        ApiError::internal("Failed to fetch download link")
    })
}
