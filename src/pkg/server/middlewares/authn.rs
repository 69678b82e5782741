use std::sync::Arc;

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    conf::settings,
    pkg::internal::auth::verify_token,
    prelude::{Error, Result},
};

// missing credential and invalid credential are distinct failures: 401 for
// the former, 403 for the latter
pub async fn authenticate(mut request: Request, next: Next) -> Result<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let Some(token) = token else {
        tracing::warn!("token missing, authentication denied");
        return Err(Error::Unauthorized(
            "Access denied. No token provided.".into(),
        ));
    };
    let claims = verify_token(token, &settings.jwt_secret)?;
    tracing::debug!("authenticated {} ({:?})", &claims.email, &claims.role);
    request.extensions_mut().insert(Arc::new(claims));
    Ok(next.run(request).await)
}
