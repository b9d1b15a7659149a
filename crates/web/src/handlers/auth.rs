//! Handlers for registration, login, and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use basket_core::forms::{error_messages, LoginForm, RegisterForm};
use basket_core::types::DbId;
use basket_db::models::session::CreateSession;
use basket_db::models::user::CreateUser;
use basket_db::repositories::{SessionRepo, UserRepo};
use chrono::Utc;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::{generate_session_token, hash_session_token};
use crate::cookies::{self, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::flash::{self, Flash};
use crate::middleware::auth::MaybeUser;
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /register
pub async fn register_form(
    MaybeUser(user): MaybeUser,
    headers: HeaderMap,
) -> AppResult<Response> {
    let pending = flash::take(&headers);
    let page = views::register_page(&[], user.as_ref(), pending).into_response();
    Ok(match pending {
        Some(_) => flash::clear_on(page),
        None => page,
    })
}

/// POST /register
///
/// Validate the form, reject duplicate emails with a flash + redirect to
/// `/login`, otherwise create the user, log them in, and redirect home.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let messages = error_messages(&errors);
        return Ok(views::register_page(&messages, None, None).into_response());
    }

    if UserRepo::find_by_email(&state.pool, &form.email)
        .await?
        .is_some()
    {
        return Ok(flash::redirect_with_flash("/login", Flash::EmailExists));
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        email: form.email,
        password_hash,
        name: form.name,
    };
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "Registered new user");

    // Auto-login after registration.
    start_session(&state, user.id).await
}

/// GET /login
pub async fn login_form(MaybeUser(user): MaybeUser, headers: HeaderMap) -> AppResult<Response> {
    let pending = flash::take(&headers);
    let page = views::login_page(&[], user.as_ref(), pending).into_response();
    Ok(match pending {
        Some(_) => flash::clear_on(page),
        None => page,
    })
}

/// POST /login
///
/// Verify credentials. Unknown email and wrong password each flash their own
/// message and redirect back to `/login`.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let messages = error_messages(&errors);
        return Ok(views::login_page(&messages, None, None).into_response());
    }

    let Some(user) = UserRepo::find_by_email(&state.pool, &form.email).await? else {
        return Ok(flash::redirect_with_flash("/login", Flash::UnknownEmail));
    };

    if !verify_password(&form.password, &user.password_hash) {
        return Ok(flash::redirect_with_flash("/login", Flash::WrongPassword));
    }

    tracing::info!(user_id = user.id, "User logged in");
    start_session(&state, user.id).await
}

/// GET /logout
///
/// Delete the session row (if any), clear the cookie, redirect home.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = cookies::get_cookie(&headers, SESSION_COOKIE) {
        let token_hash = hash_session_token(token);
        SessionRepo::delete_by_token_hash(&state.pool, &token_hash).await?;
    }

    let mut response = Redirect::to("/").into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, cookies::clear_cookie(SESSION_COOKIE));
    Ok(response)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a session row for the user, set the session cookie, and redirect
/// to the catalog.
async fn start_session(state: &AppState, user_id: DbId) -> AppResult<Response> {
    let (plaintext, token_hash) = generate_session_token();

    let expiry_days = state.config.session_expiry_days;
    let input = CreateSession {
        user_id,
        token_hash,
        expires_at: Utc::now() + chrono::Duration::days(expiry_days),
    };
    SessionRepo::create(&state.pool, &input).await?;

    let max_age_secs = expiry_days * 24 * 60 * 60;
    let mut response = Redirect::to("/").into_response();
    response.headers_mut().append(
        SET_COOKIE,
        cookies::set_cookie(SESSION_COOKIE, &plaintext, max_age_secs),
    );
    Ok(response)
}
