use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::TokenClaims;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signature or format is invalid")]
    Invalid(#[from] jsonwebtoken::errors::Error),
    #[error("token has expired")]
    Expired,
}

pub struct AuthService;

impl AuthService {
    /// Signs a short-lived HS256 token valid for `ttl_seconds` from `now` (unix seconds).
    pub fn issue_token(secret: &str, ttl_seconds: u64, now: i64) -> anyhow::Result<String> {
        let now = now.max(0) as usize;
        let claims = TokenClaims {
            iat: now,
            exp: now + ttl_seconds as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Checks the signature, then expiry against the supplied clock.
    /// A token is rejected from the second its `exp` is reached.
    pub fn verify_token(secret: &str, token: &str, now: i64) -> Result<TokenClaims, TokenError> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared below against the injected clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &key, &validation)?.claims;
        if (claims.exp as i64) <= now {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
