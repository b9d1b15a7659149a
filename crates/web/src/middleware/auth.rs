//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use basket_db::models::user::User;
use basket_db::repositories::{SessionRepo, UserRepo};

use crate::auth::token::hash_session_token;
use crate::cookies::{self, SESSION_COOKIE};
use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Anonymous requests are redirected to `/login` with a
/// flash message rather than rejected with a status error:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Response> {
///     tracing::debug!(user_id = user.0.id, "handling request");
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Optional variant of [`CurrentUser`] for pages that render for both
/// anonymous and authenticated visitors.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

/// Rejection for [`CurrentUser`]: either "go log in" or a real error.
#[derive(Debug)]
pub enum AuthRejection {
    Unauthenticated,
    Error(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => {
                flash::redirect_with_flash("/login", Flash::LoginRequired)
            }
            AuthRejection::Error(err) => err.into_response(),
        }
    }
}

/// Resolve the user behind the request's session cookie, if any.
///
/// A cookie whose session row is missing or expired, or whose user no longer
/// exists, resolves to `None` -- never to an error.
pub async fn resolve_user(headers: &HeaderMap, state: &AppState) -> Result<Option<User>, AppError> {
    let Some(token) = cookies::get_cookie(headers, SESSION_COOKIE) else {
        return Ok(None);
    };

    let token_hash = hash_session_token(token);
    let Some(session) = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash).await?
    else {
        return Ok(None);
    };

    Ok(UserRepo::find_by_id(&state.pool, session.user_id).await?)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_user(&parts.headers, state).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(AuthRejection::Unauthenticated),
            Err(err) => Err(AuthRejection::Error(err)),
        }
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve_user(&parts.headers, state).await?))
    }
}
