use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("upstream HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    UpstreamRequest { url: String, source: reqwest::Error },

    #[error("bad payload from {url}: {source}")]
    UpstreamDecode {
        url: String,
        source: serde_json::Error,
    },

    #[error("Could not resolve NFL week for matchups.")]
    WeekUnresolved,

    #[error("Could not resolve week/round for transactions.")]
    RoundUnresolved,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("document store: {0}")]
    Document(#[from] std::io::Error),

    #[error("document encode: {0}")]
    DocumentEncode(#[from] serde_json::Error),
}

/// Map a service error onto the JSON error body the mobile client expects.
#[must_use]
pub fn error_response(err: &AppError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        AppError::WeekUnresolved | AppError::RoundUnresolved | AppError::BadRequest(_) => {
            HttpResponse::BadRequest().json(body)
        }
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
