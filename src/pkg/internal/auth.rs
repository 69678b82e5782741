use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

pub const TOKEN_TTL_HOURS: i64 = 24;

const STUDENT_ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employer,
    Student,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

pub fn issue_token(sub: &str, name: &str, email: &str, role: Role, secret: &str) -> Result<String> {
    let expiry = Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .ok_or_else(|| Error::Internal("failed to calculate token expiry".into()))?
        .timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        exp: expiry,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("failed to sign token: {}", e)))
}

// malformed, expired and badly-signed tokens all land on Forbidden; a missing
// token is the middleware's Unauthorized
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Forbidden("Invalid or expired token".into()))
}

pub fn hash_password(plain: &str) -> Result<String> {
    Ok(bcrypt::hash(plain, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    Ok(bcrypt::verify(plain, hashed)?)
}

pub fn generate_student_id() -> String {
    let mut rng = rand::rng();
    (0..6)
        .map(|_| STUDENT_ID_CHARSET[rng.random_range(0..STUDENT_ID_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn test_token_roundtrip() -> crate::prelude::Result<()> {
        let token = issue_token("42", "Asha", "asha@example.com", Role::Employer, "s3cret")?;
        let claims = verify_token(&token, "s3cret")?;
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, Role::Employer);
        assert_eq!(claims.email, "asha@example.com");
        Ok(())
    }

    #[test]
    fn test_token_wrong_secret_rejected() {
        let token = issue_token("42", "Asha", "asha@example.com", Role::Student, "s3cret")
            .expect("token issued");
        assert!(matches!(
            verify_token(&token, "other"),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims {
            sub: "42".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            role: Role::Student,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .expect("token encoded");
        assert!(matches!(
            verify_token(&token, "s3cret"),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            verify_token("not-a-jwt", "s3cret"),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn test_password_roundtrip() -> crate::prelude::Result<()> {
        let hashed = hash_password("hunter2")?;
        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2", &hashed)?);
        assert!(!verify_password("hunter3", &hashed)?);
        Ok(())
    }

    #[test]
    fn test_student_id_shape() {
        for _ in 0..50 {
            let id = generate_student_id();
            assert_eq!(id.len(), 6);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }
}
