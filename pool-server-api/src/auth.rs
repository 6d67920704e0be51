use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use subtle::ConstantTimeEq;

use crate::{AppState, error::ServiceError};

/// Guards admin routes. Passes every request when no admin token is
/// configured.
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.admin_token.as_deref() else {
            return Ok(AdminAuth);
        };

        let path = parts.uri.path().to_string();
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                log::warn!("Rejected admin request to {} without token", path);
                ServiceError::Unauthorized("Missing admin token".to_string())
            })?;

        if !token_matches(bearer.token(), expected) {
            log::warn!("Rejected admin request to {} with wrong token", path);
            return Err(ServiceError::Unauthorized("Invalid admin token".to_string()));
        }
        Ok(AdminAuth)
    }
}

fn token_matches(given: &str, expected: &str) -> bool {
    given.as_bytes().ct_eq(expected.as_bytes()).into()
}
