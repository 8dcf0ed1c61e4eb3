//! Handlers for registration, login, and logout.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::auth::{
    generate_session_token, hash_password, session_expires_at, verify_password, MaybeUser,
};
use crate::db as queries;
use crate::web::flash::{self, IncomingFlash, Level};
use crate::web::{pages, AppState};

/// Usernames longer than this are rejected at registration.
const MAX_USERNAME_LEN: usize = 80;

/// GET /register - Show the registration form.
pub async fn register_page(
    MaybeUser(user): MaybeUser,
    IncomingFlash(flash): IncomingFlash,
) -> Response {
    // Already logged in, nothing to register
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let flash_display = flash
        .as_ref()
        .map(|(level, message)| (level.variant(), message.as_str()));
    let html = pages::render_register_page(flash_display).into_string();

    if flash.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

/// Form data for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// POST /register - Create an account and log it in.
pub async fn register_post(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        return flash::redirect_with_flash(
            "/register",
            Level::Error,
            "Username and password are required",
        );
    }

    if username.len() > MAX_USERNAME_LEN {
        return flash::redirect_with_flash("/register", Level::Error, "Username is too long");
    }

    if username.chars().any(char::is_whitespace) {
        return flash::redirect_with_flash(
            "/register",
            Level::Error,
            "Username cannot contain spaces",
        );
    }

    match queries::username_exists(state.db.pool(), username).await {
        Ok(true) => {
            return flash::redirect_with_flash(
                "/register",
                Level::Error,
                "That username is already taken",
            );
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to check username: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed").into_response();
        }
    }

    let password_hash = match hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Failed to hash password: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed").into_response();
        }
    };

    let user_id = match queries::create_user(state.db.pool(), username, &password_hash).await {
        Ok(id) => id,
        Err(e) => {
            // The UNIQUE constraint can still fire if the same name was
            // registered between the existence check and the insert
            tracing::error!("Failed to create user: {e}");
            return flash::redirect_with_flash(
                "/register",
                Level::Error,
                "That username is already taken",
            );
        }
    };

    tracing::info!(user_id, username = %username, "User registered");

    // Log the new account straight in
    match start_session(&state, user_id).await {
        Ok(session_cookie) => (
            AppendHeaders([
                (header::SET_COOKIE, session_cookie),
                (
                    header::SET_COOKIE,
                    flash::set_cookie(Level::Success, "Welcome! Your account is ready."),
                ),
            ]),
            Redirect::to("/"),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create session after registration: {e}");
            flash::redirect_with_flash("/login", Level::Info, "Account created. Please log in.")
        }
    }
}

/// GET /login - Show the login form.
pub async fn login_page(
    MaybeUser(user): MaybeUser,
    IncomingFlash(flash): IncomingFlash,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let flash_display = flash
        .as_ref()
        .map(|(level, message)| (level.variant(), message.as_str()));
    let html = pages::render_login_page(flash_display).into_string();

    if flash.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

/// Form data for login.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// POST /login - Verify credentials and establish a session.
pub async fn login_post(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        return flash::redirect_with_flash(
            "/login",
            Level::Error,
            "Username and password are required",
        );
    }

    // The same message covers unknown usernames and wrong passwords
    let user = match queries::get_user_by_username(state.db.pool(), username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            return flash::redirect_with_flash(
                "/login",
                Level::Error,
                "Invalid username or password",
            );
        }
        Err(e) => {
            tracing::error!("Database error during login: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Login failed").into_response();
        }
    };

    let password_valid = match verify_password(&form.password, &user.password_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::error!("Password verification error: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Login failed").into_response();
        }
    };

    if !password_valid {
        return flash::redirect_with_flash("/login", Level::Error, "Invalid username or password");
    }

    match start_session(&state, user.id).await {
        Ok(session_cookie) => {
            tracing::info!(user_id = user.id, "User logged in");
            (
                AppendHeaders([
                    (header::SET_COOKIE, session_cookie),
                    (
                        header::SET_COOKIE,
                        flash::set_cookie(Level::Success, "Logged in"),
                    ),
                ]),
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create session: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Login failed").into_response()
        }
    }
}

/// GET /logout - End the current session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = headers
        .get("cookie")
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .find_map(|cookie| cookie.trim().strip_prefix("session="))
        });

    if let Some(token) = token {
        if let Err(e) = queries::delete_session(state.db.pool(), token).await {
            tracing::warn!("Failed to delete session on logout: {e}");
        }
    }

    (
        AppendHeaders([
            (
                header::SET_COOKIE,
                "session=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0".to_string(),
            ),
            (
                header::SET_COOKIE,
                flash::set_cookie(Level::Info, "Logged out"),
            ),
        ]),
        Redirect::to("/"),
    )
        .into_response()
}

/// Create a session for `user_id` and return the Set-Cookie value for it.
async fn start_session(state: &AppState, user_id: i64) -> anyhow::Result<String> {
    let token = generate_session_token();
    let expires_at = session_expires_at(state.config.session_ttl_secs);
    queries::create_session(state.db.pool(), user_id, &token, &expires_at).await?;

    let max_age = state.config.session_ttl_secs;
    Ok(format!(
        "session={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}"
    ))
}
