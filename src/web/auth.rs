use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use super::AppState;
use crate::auth::{session::clear_session_cookie, AuthState};

/// Handle sign-out - clear the provider session cookie and land on the
/// authenticator's post-sign-out page
pub async fn sign_out(State(state): State<AppState>, auth: AuthState) -> Response {
    if let Some(user) = &auth.user {
        info!(user_id = %user.id, "User signed out");
    }

    let jar = CookieJar::new().add(clear_session_cookie(&state.settings.session_cookie));
    let target = state.gate.authenticator().after_sign_out_url();

    (jar, Redirect::to(target)).into_response()
}
