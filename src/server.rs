//! HTTP server exposing the email actions

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::ai::{EmailRequest, EmailService, LanguageProfile, TextGenerator, language};
use crate::error::Error;

type ServiceArc<G> = Arc<EmailService<G>>;

/// Body of `POST /generate-email`. Everything is optional here so missing
/// fields produce our own error message instead of a serde one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateEmailBody {
    action: Option<String>,
    text: Option<String>,
    tone: Option<String>,
    language: Option<String>,
    previous_email: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateEmailResponse {
    result: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl TryFrom<GenerateEmailBody> for EmailRequest {
    type Error = Error;

    fn try_from(body: GenerateEmailBody) -> Result<Self, Error> {
        let (Some(action), Some(text)) = (body.action, body.text) else {
            return Err(Error::InvalidRequest(
                "Action and text are required".to_string(),
            ));
        };
        if action.is_empty() || text.is_empty() {
            return Err(Error::InvalidRequest(
                "Action and text are required".to_string(),
            ));
        }

        let mut request = EmailRequest::new(action.parse()?, text)
            .previous_email(body.previous_email);
        if let Some(tone) = body.tone {
            request = request.tone(tone.parse()?);
        }
        if let Some(language) = body.language {
            request = request.language(language);
        }
        Ok(request)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router<G: TextGenerator + 'static>(service: ServiceArc<G>) -> Router {
    Router::new()
        .route("/generate-email", post(generate_email::<G>))
        .route("/languages", get(list_languages))
        .route("/health", get(health))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn generate_email<G: TextGenerator + 'static>(
    State(service): State<ServiceArc<G>>,
    payload: Result<Json<GenerateEmailBody>, JsonRejection>,
) -> Result<Json<GenerateEmailResponse>, Error> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection);
        Error::InvalidRequest(rejection.body_text())
    })?;

    let request = EmailRequest::try_from(body)?;
    info!(
        action = %request.action,
        tone = %request.tone,
        language = %request.language,
        "Handling email request"
    );

    match service.handle(&request).await {
        Ok(result) => Ok(Json(GenerateEmailResponse { result })),
        Err(e) => {
            error!("Email request failed: {}", e);
            Err(e)
        }
    }
}

async fn list_languages() -> Json<&'static [LanguageProfile]> {
    Json(language::all())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Serve until Ctrl-C
pub async fn run<G: TextGenerator + 'static>(service: EmailService<G>, bind: &str) -> Result<()> {
    let app = router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
