//! Route definitions.

pub mod calculations;
pub mod handwritten;
pub mod health;
pub mod notes;
pub mod profiles;
pub mod speech;
pub mod token;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                      register (public POST)
/// /users/me                   current user (GET)
///
/// /token                      obtain token pair (public POST)
/// /token/refresh              rotate refresh token (public POST)
/// /token/revoke               revoke all sessions (POST)
///
/// /profiles                   list own profile
/// /profiles/{id}              get, update bio
/// /profiles/{id}/picture      upload picture (PUT, multipart)
///
/// /notes                      list, create
/// /notes/{id}                 get, update, delete
///
/// /handwritten                list, create (multipart image)
/// /handwritten/{id}           get, delete
///
/// /speech                     list, create (multipart audio)
/// /speech/{id}                get (poll status), delete
///
/// /calculations               list, create
/// /calculations/{id}          get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/token", token::router())
        .nest("/profiles", profiles::router())
        .nest("/notes", notes::router())
        .nest("/handwritten", handwritten::router())
        .nest("/speech", speech::router())
        .nest("/calculations", calculations::router())
}
