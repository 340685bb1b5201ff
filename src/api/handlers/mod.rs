pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod signup;
pub use self::signup::signup;

pub mod users;

// common functions for the handlers
use crate::account::AccountError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

/// Error body, `{"detail": "..."}`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Detail {
    pub detail: String,
}

/// Acknowledgement body, `{"message": "..."}`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Message {
    pub message: String,
}

pub(crate) fn detail(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(Detail {
            detail: message.to_string(),
        }),
    )
        .into_response()
}

pub(crate) fn message(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(Message {
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Map store failures that every route renders the same way.
///
/// Route specific outcomes (not found, duplicate, wrong password) are matched
/// by the handlers before falling back here.
pub(crate) fn account_error(err: &AccountError) -> Response {
    if err.is_client_error() {
        debug!("{err}");
    } else {
        error!("{err}");
    }

    match err {
        AccountError::InvalidInput(_) => detail(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()),
        AccountError::DuplicateUsername => {
            detail(StatusCode::BAD_REQUEST, "Username already registered")
        }
        AccountError::NotFound => detail(StatusCode::NOT_FOUND, "user not found"),
        AccountError::InvalidPassword => detail(StatusCode::BAD_REQUEST, "incorrect password"),
        AccountError::Storage(_) | AccountError::Hashing(_) => {
            detail(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

pub(crate) fn missing_payload() -> Response {
    detail(StatusCode::UNPROCESSABLE_ENTITY, "Missing or invalid payload")
}


#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Result<serde_json::Value> {
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause() -> Result<()> {
        let err = AccountError::Storage(anyhow!("password authentication failed for user"));
        let response = account_error(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await?;
        assert_eq!(body["detail"], "internal server error");
        Ok(())
    }

    #[tokio::test]
    async fn hashing_failures_are_internal_errors() -> Result<()> {
        let response = account_error(&AccountError::Hashing(anyhow!("invalid stored password hash")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await?;
        assert_eq!(body["detail"], "internal server error");
        Ok(())
    }

    #[tokio::test]
    async fn client_errors_keep_their_status() {
        assert_eq!(
            account_error(&AccountError::DuplicateUsername).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            account_error(&AccountError::InvalidPassword).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            account_error(&AccountError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn invalid_input_names_the_field() -> Result<()> {
        let response = account_error(&AccountError::InvalidInput("username"));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await?;
        assert_eq!(body["detail"], "missing required field: username");
        Ok(())
    }
}
