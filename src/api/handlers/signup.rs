use super::{account_error, detail, missing_payload, Detail};
use crate::account::{AccountError, AccountStore, NewAccount};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
pub struct UserCreate {
    username: String,
    password: String,
    name: String,
    phonenumber: String,
    email: String,
    birth: String,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("password", &"***")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl From<UserCreate> for NewAccount {
    fn from(user: UserCreate) -> Self {
        Self {
            username: user.username,
            password: SecretString::from(user.password),
            name: user.name,
            phone_number: user.phonenumber,
            email: user.email,
            birth: user.birth,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserCreated {
    username: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    request_body = UserCreate,
    responses (
        (status = 200, description = "Account created", body = UserCreated, content_type = "application/json"),
        (status = 400, description = "Username already registered", body = Detail),
        (status = 422, description = "Missing or invalid payload", body = Detail),
    ),
    tag = "login"
)]
#[instrument(skip_all)]
pub async fn signup(
    Extension(store): Extension<AccountStore>,
    payload: Option<Json<UserCreate>>,
) -> Response {
    let Some(Json(user)) = payload else {
        return missing_payload();
    };

    debug!("user: {:?}", user);

    match store.create(user.into()).await {
        Ok(account) => (
            StatusCode::OK,
            Json(UserCreated {
                username: account.username,
            }),
        )
            .into_response(),
        Err(AccountError::DuplicateUsername) => {
            detail(StatusCode::BAD_REQUEST, "Username already registered")
        }
        Err(err) => account_error(&err),
    }
}
