//! Authentication route handlers.
//!
//! Login is delegated entirely to the platform: `POST /api/auth/login`
//! returns a bearer token and a role, and both land in the server-side
//! session. There is nothing resembling a password database here.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::auth::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

use super::MessageQuery;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: String,
    pub email: String,
}

/// Display the login page.
///
/// Already-authenticated admins go straight to the dashboard.
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if admin.is_some_and(|a| a.role.has_panel_access()) {
        return Redirect::to("/dashboard").into_response();
    }

    LoginTemplate {
        error: query.error.unwrap_or_default(),
        email: String::new(),
    }
    .into_response()
}

/// Handle login form submission.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    // Required-field check before any platform call
    let email = form.email.trim().to_string();
    if email.is_empty() || form.password.is_empty() {
        return LoginTemplate {
            error: "Email and password are required.".to_string(),
            email,
        }
        .into_response();
    }

    match state.platform().login(&email, &form.password).await {
        Ok(data) => {
            // Customers can authenticate against the platform, but they have
            // no business in the panel - treat it like a bad credential and
            // persist nothing.
            if !data.role.has_panel_access() {
                tracing::warn!("Login attempt with non-panel role");
                return LoginTemplate {
                    error: "This account does not have access to the admin panel.".to_string(),
                    email,
                }
                .into_response();
            }

            let name = data
                .name
                .clone()
                .unwrap_or_else(|| email.split('@').next().unwrap_or("admin").to_string());

            let admin = CurrentAdmin {
                email,
                name,
                role: data.role,
                token: data.token,
            };

            if let Err(e) = set_current_admin(&session, &admin).await {
                tracing::error!("Failed to set session: {e}");
                return LoginTemplate {
                    error: "Could not start a session. Please try again.".to_string(),
                    email: admin.email,
                }
                .into_response();
            }

            tracing::info!(role = %admin.role, "Admin signed in");
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            // A 401 here means bad credentials, not a stale session
            let error = match &e {
                crate::platform::PlatformError::TokenRejected => {
                    "Invalid email or password.".to_string()
                }
                _ => e.user_message(),
            };
            LoginTemplate { error, email }.into_response()
        }
    }
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }
    Redirect::to("/")
}
