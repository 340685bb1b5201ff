use super::handlers::{health, login, signup, users, Detail, Message};
use utoipa::{
    openapi::{Contact, Info, InfoBuilder, License},
    OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        signup::signup,
        login::login,
        users::read_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(
        Detail,
        Message,
        health::Health,
        signup::UserCreate,
        signup::UserCreated,
        login::UserLogin,
        login::LoggedIn,
    )),
    tags(
        (name = "login", description = "Signup and login"),
        (name = "users", description = "Account read, update and delete"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

/// `OpenAPI` document served at `/api-docs/openapi.json`.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.info = cargo_info();
    openapi
}

fn cargo_info() -> Info {
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(non_empty(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = env!("CARGO_PKG_AUTHORS")
        .split(';')
        .find_map(|author| match parse_author(author) {
            (None, None) => None,
            (name, email) => {
                let mut contact = Contact::new();
                contact.name = name.map(str::to_string);
                contact.email = email.map(str::to_string);
                Some(contact)
            }
        });

    info.license = non_empty(env!("CARGO_PKG_LICENSE")).map(|spdx| {
        let mut license = License::new(spdx);
        license.identifier = Some(spdx.to_string());
        license
    });

    info
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

/// Splits a Cargo author entry, `Name <email>` or just `Name`.
fn parse_author(author: &str) -> (Option<&str>, Option<&str>) {
    match author.split_once('<') {
        Some((name, rest)) => (non_empty(name), non_empty(rest.trim_end().trim_end_matches('>'))),
        None => (non_empty(author), None),
    }
}
