// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i64,
    email: String,
    username: String,
    iat: i64,
    exp: i64,
}

/// HS256 tokens carrying the user's id, email and username.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<String> {
        let issued_at = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| ApplicationError::infrastructure("token ttl out of range"))?;

        let claims = Claims {
            id: i64::from(subject.user_id),
            email: subject.email,
            username: subject.username,
            iat: issued_at,
            exp: issued_at.saturating_add(ttl),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|err| {
                tracing::debug!(error = %err, "token rejected");
                ApplicationError::unauthorized("invalid token")
            })?;

        let claims = data.claims;
        let id = UserId::new(claims.id)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            id,
            username: claims.username,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(42).unwrap(),
            username: "jake".into(),
            email: "jake@jake.jake".into(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = JwtTokenManager::new(SECRET, Duration::from_secs(60));
        let token = manager.issue(subject()).await.unwrap();

        let user = manager.authenticate(&token).await.unwrap();
        assert_eq!(i64::from(user.id), 42);
        assert_eq!(user.username, "jake");
        assert_eq!(user.email, "jake@jake.jake");
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtTokenManager::new(SECRET, Duration::from_secs(60));
        let verifier = JwtTokenManager::new(b"another-secret-another-secret-xx", Duration::from_secs(60));
        let token = issuer.issue(subject()).await.unwrap();

        let err = verifier.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let manager = JwtTokenManager::new(SECRET, Duration::from_secs(60));
        assert!(matches!(
            manager.authenticate("not.a.jwt").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let manager = JwtTokenManager::new(SECRET, Duration::from_secs(60));
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: 42,
            email: "jake@jake.jake".into(),
            username: "jake".into(),
            iat: now - 7_200,
            exp: now - 3_600,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();

        assert!(manager.authenticate(&token).await.is_err());
    }
}
