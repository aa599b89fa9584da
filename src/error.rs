use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Gagal melakukan analisis. Pastikan file adalah gambar yang valid.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data tidak lengkap")]
    IncompleteData,

    #[error("Email atau password tidak boleh kosong")]
    MissingFields,

    #[error("Email sudah terdaftar")]
    EmailTaken,

    #[error("Email atau password salah")]
    InvalidCredentials,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(&'static str),

    #[error("Tidak ada file yang diunggah")]
    NoFileUploaded,

    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    AnalysisFailed,

    #[error("Semua field harus diisi")]
    FeedbackIncomplete,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::IncompleteData
            | Error::MissingFields
            | Error::NoFileUploaded
            | Error::FeedbackIncomplete
            | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Multipart(err) => err.status(),
            Error::InvalidCredentials | Error::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Error::EmailTaken => StatusCode::CONFLICT,
            Error::AnalysisFailed | Error::Config(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self {
            Error::Unauthenticated(code) => code.to_string(),
            Error::BadRequest(msg) => msg,
            Error::Multipart(err) => err.body_text(),
            Error::Config(msg) | Error::Internal(msg) => {
                tracing::error!(error = %msg, "request failed with internal error");
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
