//! Account read, update and delete by username.

use super::{account_error, detail, message, Detail, Message};
use crate::account::{AccountError, AccountStore};
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(IntoParams, Deserialize, Debug)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// New display name
    name: String,
}

#[utoipa::path(
    get,
    path = "/users/{username}",
    params(
        ("username" = String, Path, description = "Exact username")
    ),
    responses (
        (status = 200, description = "Display name of the account", body = String, content_type = "application/json"),
        (status = 404, description = "User not found", body = Detail),
    ),
    tag = "users"
)]
#[instrument(skip(store))]
pub async fn read_user(
    Path(username): Path<String>,
    Extension(store): Extension<AccountStore>,
) -> Response {
    match store.get(&username).await {
        Ok(name) => (StatusCode::OK, Json(name)).into_response(),
        Err(AccountError::NotFound) => detail(StatusCode::NOT_FOUND, "User not found"),
        Err(err) => account_error(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{username}",
    params(
        ("username" = String, Path, description = "Exact username")
    ),
    responses (
        (status = 200, description = "Account deleted", body = Message),
        (status = 404, description = "User not found", body = Detail),
    ),
    tag = "users"
)]
#[instrument(skip(store))]
pub async fn delete_user(
    Path(username): Path<String>,
    Extension(store): Extension<AccountStore>,
) -> Response {
    match store.delete(&username).await {
        Ok(()) => message("User successfully deleted"),
        Err(err) => account_error(&err),
    }
}

#[utoipa::path(
    put,
    path = "/users/{username}",
    params(
        ("username" = String, Path, description = "Exact username"),
        NameQuery
    ),
    responses (
        (status = 200, description = "Name updated", body = Message),
        (status = 404, description = "User not found", body = Detail),
        (status = 422, description = "Missing name query parameter", body = Detail),
    ),
    tag = "users"
)]
#[instrument(skip(store, query))]
pub async fn update_user(
    Path(username): Path<String>,
    Extension(store): Extension<AccountStore>,
    query: Option<Query<NameQuery>>,
) -> Response {
    let Some(Query(query)) = query else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Missing name query parameter");
    };

    match store.update_name(&username, &query.name).await {
        Ok(()) => message("Name successfully updated"),
        Err(err) => account_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::{app, send};
    use anyhow::Result;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn alice_lifecycle_over_http() -> Result<()> {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/signup",
            Some(json!({
                "username": "alice",
                "password": "secret123",
                "name": "Alice A",
                "phonenumber": "555-0100",
                "email": "a@x.com",
                "birth": "2000-01-01"
            })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"username": "alice"}));

        let (status, body) = send(&app, Method::GET, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Alice A"));

        let (status, body) =
            send(&app, Method::PUT, "/users/alice?name=Alice%20B", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Name successfully updated");

        let (status, body) = send(&app, Method::GET, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Alice B"));

        let (status, body) = send(&app, Method::DELETE, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User successfully deleted");

        let (status, body) = send(&app, Method::GET, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "User not found");

        let (status, body) = send(&app, Method::DELETE, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "user not found");
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() -> Result<()> {
        let app = app();

        let (status, body) = send(&app, Method::PUT, "/users/ghost?name=Ghost", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "user not found");
        Ok(())
    }

    #[tokio::test]
    async fn update_without_name_is_unprocessable() -> Result<()> {
        let app = app();

        let (status, body) = send(&app, Method::PUT, "/users/alice", None).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Missing name query parameter");
        Ok(())
    }
}
