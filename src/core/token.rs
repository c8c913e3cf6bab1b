//! Signed API tokens.
//!
//! The gateway accepts two long-lived JWTs, one per database role. Both are
//! signed with the project's JWT secret so the auth server can verify either.
//!
//! ## Adding a New Signing Algorithm
//!
//! 1. Implement the `TokenSigner` trait
//! 2. Pass the signer to `bundle::generate_with_signer`

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::core::constants::TOKEN_ISSUER;
use crate::error::{GenerateError, Result};

/// Database role a token grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Anon,
    ServiceRole,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Anon => "anon",
            Role::ServiceRole => "service_role",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub role: Role,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for `role`, issued now and valid for `expires_in` seconds.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Signing` if the expiry does not fit in an `i64`.
    pub fn issue(role: Role, expires_in: i64) -> Result<Self> {
        Self::issued_at(role, Utc::now().timestamp(), expires_in)
    }

    /// Claims for `role` with an explicit issue time.
    pub fn issued_at(role: Role, iat: i64, expires_in: i64) -> Result<Self> {
        let exp = iat.checked_add(expires_in).ok_or_else(|| {
            GenerateError::Signing(format!("token lifetime of {}s overflows", expires_in))
        })?;

        Ok(Self {
            role,
            iss: TOKEN_ISSUER.to_string(),
            iat,
            exp,
        })
    }
}

/// Token signing trait.
///
/// Produces the compact `header.payload.signature` encoding for a set of
/// claims. Bundle generation only depends on this trait.
pub trait TokenSigner {
    /// JOSE algorithm name placed in the token header.
    fn algorithm(&self) -> &'static str;

    /// Sign claims into a compact token.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Signing` if serialization or signing fails.
    fn sign(&self, claims: &Claims) -> Result<String>;
}

/// HMAC-SHA256 signer keyed by a shared secret.
pub struct Hs256Signer {
    secret: Zeroizing<Vec<u8>>,
}

impl Hs256Signer {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Zeroizing::new(secret.as_bytes().to_vec()),
        }
    }

    /// Verify a token's signature, issuer and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Signing` if the token does not verify under
    /// this signer's secret.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(|e| GenerateError::Signing(e.to_string()))?;

        Ok(data.claims)
    }
}

impl TokenSigner for Hs256Signer {
    fn algorithm(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, claims: &Claims) -> Result<String> {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| GenerateError::Signing(e.to_string()))?;

        Ok(token)
    }
}
