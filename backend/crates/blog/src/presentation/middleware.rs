//! Identity Resolution Middleware
//!
//! Runs on every request: reads the session cookie, decodes it through
//! [`SessionCodec`], and attaches a [`CurrentUser`] extension. The
//! middleware itself never rejects a request; an unreadable cookie simply
//! resolves to an anonymous identity. Authorization decisions happen in the
//! handlers via [`require_admin`] / [`require_user`].

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::config::WebConfig;
use crate::application::session::SessionCodec;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{ApiError, ApiResult};
use platform::cookie;

/// The identity resolved for the current request, anonymous or signed-in.
///
/// When a user is present its password digest is already masked.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(|user| user.admin)
    }
}

/// State for the identity middleware
pub struct IdentityState<R> {
    pub repo: Arc<R>,
    pub config: Arc<WebConfig>,
}

impl<R> Clone for IdentityState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Resolve the request identity from the session cookie.
///
/// Always calls the inner service; the resolved [`CurrentUser`] (possibly
/// anonymous) is inserted into the request extensions.
pub async fn resolve_identity<R>(
    State(state): State<IdentityState<R>>,
    mut request: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let identity = match cookie::extract_cookie(request.headers(), &state.config.cookie.name) {
        Some(value) => {
            let codec = SessionCodec::new(state.config.session_secret.clone());
            CurrentUser(codec.decode(state.repo.as_ref(), &value).await)
        }
        None => CurrentUser::anonymous(),
    };

    if let Some(user) = identity.user() {
        tracing::debug!(user_id = %user.user_id, "request identity resolved");
    }

    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Require an admin identity, or fail with permission denied.
pub fn require_admin(identity: &CurrentUser) -> ApiResult<()> {
    if identity.is_admin() {
        Ok(())
    } else {
        Err(ApiError::PermissionDenied)
    }
}

/// Require any signed-in identity, returning the user.
pub fn require_user(identity: &CurrentUser) -> ApiResult<&User> {
    identity.user().ok_or(ApiError::PermissionDenied)
}
