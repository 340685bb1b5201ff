use super::{account_error, detail, missing_payload, Detail};
use crate::account::{AccountError, AccountStore};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
pub struct UserLogin {
    username: String,
    password: String,
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoggedIn {
    username: String,
    name: String,
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = LoggedIn, content_type = "application/json"),
        (status = 400, description = "Unknown username or incorrect password", body = Detail),
        (status = 422, description = "Missing or invalid payload", body = Detail),
    ),
    tag = "login"
)]
#[instrument(skip_all)]
pub async fn login(
    Extension(store): Extension<AccountStore>,
    payload: Option<Json<UserLogin>>,
) -> Response {
    let Some(Json(user)) = payload else {
        return missing_payload();
    };

    match store
        .authenticate(&user.username, SecretString::from(user.password))
        .await
    {
        Ok(identity) => (
            StatusCode::OK,
            Json(LoggedIn {
                username: identity.username,
                name: identity.name,
            }),
        )
            .into_response(),
        Err(AccountError::NotFound) => {
            detail(StatusCode::BAD_REQUEST, "incorrect username or password")
        }
        Err(AccountError::InvalidPassword) => detail(StatusCode::BAD_REQUEST, "incorrect password"),
        Err(err) => account_error(&err),
    }
}
