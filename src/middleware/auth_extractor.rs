use std::fmt;

use actix_web::error::Error;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use base64::Engine;
use futures::future::{Ready, ready};
use uuid::Uuid;

use crate::AppState;
use crate::config;

/// The authenticated caller, extracted from the bearer token. Token
/// issuance and signature verification live in the external identity
/// service; this side only reads the subject claim.
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Anonymous callers of protected endpoints are bounced to the identity
/// service's login page instead of receiving an error body.
#[derive(Debug)]
pub struct LoginRequired {
    location: String,
}

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "login required, redirecting to {}", self.location)
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, self.location.clone()))
            .finish()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<AuthenticatedUser, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let login = || {
            let location = req
                .app_data::<web::Data<AppState>>()
                .map(|state| state.login_url.clone())
                .unwrap_or_else(config::login_url);
            Error::from(LoginRequired { location })
        };

        let auth_header = match req.headers().get(header::AUTHORIZATION) {
            Some(header) => match header.to_str() {
                Ok(h) => h,
                Err(_) => return ready(Err(login())),
            },
            None => return ready(Err(login())),
        };

        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            return ready(Err(login()));
        };

        match subject_from_token(token.trim()) {
            Ok(user_id) => ready(Ok(AuthenticatedUser { user_id })),
            Err(_) => ready(Err(login())),
        }
    }
}

/// Pull the `sub` claim out of the token payload. Tokens are
/// header.payload.signature with base64url segments, no padding.
fn subject_from_token(token: &str) -> Result<Uuid, String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("not a three-part token".to_string());
    }

    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| format!("payload decode: {}", e))?;
    let payload: serde_json::Value =
        serde_json::from_slice(&decoded).map_err(|e| format!("payload json: {}", e))?;

    let sub = payload["sub"]
        .as_str()
        .ok_or_else(|| "missing sub claim".to_string())?;
    Uuid::parse_str(sub).map_err(|e| format!("sub is not a uuid: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(payload: &serde_json::Value) -> String {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = engine.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn extracts_subject_uuid() {
        let id = Uuid::new_v4();
        let token = token_for(&serde_json::json!({ "sub": id.to_string() }));
        assert_eq!(subject_from_token(&token).expect("subject"), id);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(subject_from_token("just-a-string").is_err());
        assert!(subject_from_token("a.b").is_err());
        assert!(subject_from_token("a.!!!.c").is_err());
    }

    #[test]
    fn rejects_missing_or_bad_subject() {
        let token = token_for(&serde_json::json!({ "aud": "inkwell" }));
        assert!(subject_from_token(&token).is_err());
        let token = token_for(&serde_json::json!({ "sub": "not-a-uuid" }));
        assert!(subject_from_token(&token).is_err());
    }
}
