use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type ProfileResult<T, E = ProfileError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("You already liked this profile")]
    AlreadyLiked { likes: u64 },

    #[error("You have not liked this profile yet")]
    NotLiked { likes: u64 },

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Internal server error")]
    Anyhow(#[from] anyhow::Error),
}

impl ProfileError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::AlreadyLiked { .. } => StatusCode::BAD_REQUEST,
            Self::NotLiked { .. } => StatusCode::BAD_REQUEST,
            Self::EndpointNotFound => StatusCode::NOT_FOUND,
            Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Like count reported alongside business-rule rejections.
    fn likes(&self) -> Option<u64> {
        match self {
            Self::AlreadyLiked { likes } | Self::NotLiked { likes } => Some(*likes),
            _ => None,
        }
    }
}

/// Failure envelope shared by every error response.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        if let Self::Anyhow(ref e) = self {
            tracing::error!("Generic error: {:?}", e);
        }

        (
            self.status_code(),
            Json(ErrorBody {
                success: false,
                error: self.to_string(),
                likes: self.likes(),
            }),
        )
            .into_response()
    }
}
