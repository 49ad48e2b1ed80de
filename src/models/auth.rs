use serde::{Deserialize, Serialize};

/// Claims embedded in the bearer token handed out by GET /api/get-token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iat: usize,
    pub exp: usize,
}
