//! Authentication middleware and extractors for the admin panel.
//!
//! Provides extractors for requiring admin authentication in route handlers.
//! These gates are a UI convenience: the platform re-validates the bearer
//! token on every API call regardless of what the session claims.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires an authenticated panel user.
///
/// A session must exist, hold a `CurrentAdmin`, and carry a role that is
/// admitted to the panel. On failure, HTML requests are redirected to the
/// login page at the root route; API requests get 401 Unauthorized.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to the login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin_from_parts(parts).await.ok_or_else(|| {
            if is_api_request(parts) {
                AdminAuthRejection::Unauthorized
            } else {
                AdminAuthRejection::RedirectToLogin
            }
        })?;

        // A token with a non-panel role can exist if someone signs in with
        // customer credentials; treat it exactly like a missing session.
        if !admin.role.has_panel_access() {
            return Err(if is_api_request(parts) {
                AdminAuthRejection::Unauthorized
            } else {
                AdminAuthRejection::RedirectToLogin
            });
        }

        Ok(Self(admin))
    }
}

/// Extractor that optionally gets the current admin.
///
/// Unlike `RequireAdminAuth`, this does not reject the request when nobody
/// is logged in. Used by the login page to skip straight to the dashboard.
pub struct OptionalAdminAuth(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_admin_from_parts(parts).await))
    }
}

/// Extractor that requires the `admin` role.
///
/// Staff can manage the store but not the user directory; that stays
/// admin-only.
///
/// # Example
///
/// ```rust,ignore
/// async fn user_management_handler(
///     RequireAdminRole(admin): RequireAdminRole,
/// ) -> impl IntoResponse {
///     format!("Hello admin {}!", admin.name)
/// }
/// ```
pub struct RequireAdminRole(pub CurrentAdmin);

/// Error returned when the `admin` role is required.
pub enum AdminRoleRejection {
    /// Redirect to the login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// Forbidden - user is staff but not admin.
    Forbidden,
}

impl IntoResponse for AdminRoleRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only admins can access this resource",
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminRole
where
    S: Send + Sync,
{
    type Rejection = AdminRoleRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin_from_parts(parts).await.ok_or_else(|| {
            if is_api_request(parts) {
                AdminRoleRejection::Unauthorized
            } else {
                AdminRoleRejection::RedirectToLogin
            }
        })?;

        if !admin.role.has_panel_access() {
            return Err(if is_api_request(parts) {
                AdminRoleRejection::Unauthorized
            } else {
                AdminRoleRejection::RedirectToLogin
            });
        }

        if !admin.role.can_manage_users() {
            return Err(AdminRoleRejection::Forbidden);
        }

        Ok(Self(admin))
    }
}

/// Read the current admin from the request's session, if any.
async fn current_admin_from_parts(parts: &Parts) -> Option<CurrentAdmin> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

/// Whether this request targets the JSON API rather than a page.
fn is_api_request(parts: &Parts) -> bool {
    parts.uri.path().starts_with("/api/")
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
