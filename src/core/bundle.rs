//! Secret bundle generation.
//!
//! A bundle holds every secret one deployment needs. It is generated once,
//! never mutated, and shared by all three renderers so that files which
//! repeat a value always agree.

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{lengths, DASHBOARD_USERNAME, DEFAULT_EXPIRES_IN};
use crate::core::random::{random_string, Alphabet};
use crate::core::token::{Claims, Hs256Signer, Role, TokenSigner};
use crate::error::Result;

/// Options controlling bundle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Lifetime of the signed tokens in seconds.
    pub expires_in: i64,
    /// Alphabet for the random fields.
    pub alphabet: Alphabet,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
            alphabet: Alphabet::Alphanumeric,
        }
    }
}

/// Every secret for one deployment.
///
/// `anon_key` and `service_role_key` are signed with `jwt_secret`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretBundle {
    pub postgres_password: String,
    pub jwt_secret: String,
    pub anon_key: String,
    pub service_role_key: String,
    pub dashboard_username: String,
    pub dashboard_password: String,
    pub secret_key_base: String,
    pub vault_enc_key: String,
    pub logflare_logger_backend_api_key: String,
    pub logflare_api_key: String,
    pub pooler_tenant_id: String,
    pub encryption_key: String,
}

impl SecretBundle {
    /// Entries as `(ENV_NAME, value)` pairs, in file order.
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("POSTGRES_PASSWORD", self.postgres_password.as_str()),
            ("JWT_SECRET", self.jwt_secret.as_str()),
            ("ANON_KEY", self.anon_key.as_str()),
            ("SERVICE_ROLE_KEY", self.service_role_key.as_str()),
            ("DASHBOARD_USERNAME", self.dashboard_username.as_str()),
            ("DASHBOARD_PASSWORD", self.dashboard_password.as_str()),
            ("SECRET_KEY_BASE", self.secret_key_base.as_str()),
            ("VAULT_ENC_KEY", self.vault_enc_key.as_str()),
            (
                "LOGFLARE_LOGGER_BACKEND_API_KEY",
                self.logflare_logger_backend_api_key.as_str(),
            ),
            ("LOGFLARE_API_KEY", self.logflare_api_key.as_str()),
            ("POOLER_TENANT_ID", self.pooler_tenant_id.as_str()),
            ("ENCRYPTION_KEY", self.encryption_key.as_str()),
        ]
    }

    /// Names of all entries.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries().iter().map(|(k, _)| *k).collect()
    }
}

impl std::fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBundle")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

/// Generate a fresh bundle with default options.
///
/// # Errors
///
/// Returns `GenerateError` if the random source or signing fails. No partial
/// bundle is ever returned.
pub fn generate_random_values() -> Result<SecretBundle> {
    generate_with(&GenerateOptions::default())
}

/// Generate a fresh bundle signed with HS256.
///
/// Both tokens are verified against the bundle's own secret before the
/// bundle is returned.
pub fn generate_with(options: &GenerateOptions) -> Result<SecretBundle> {
    let bundle = generate_with_signer(options, Hs256Signer::new)?;

    let verifier = Hs256Signer::new(&bundle.jwt_secret);
    for token in [&bundle.anon_key, &bundle.service_role_key] {
        let claims = verifier.verify(token)?;
        debug!("Verified {} token (exp {})", claims.role, claims.exp);
    }

    Ok(bundle)
}

/// Generate a fresh bundle, building the token signer from the new JWT secret.
pub fn generate_with_signer<S, F>(options: &GenerateOptions, signer_for: F) -> Result<SecretBundle>
where
    S: TokenSigner,
    F: FnOnce(&str) -> S,
{
    let alphabet = options.alphabet;
    let field = |name: &str, length: usize| -> Result<String> {
        debug!("Generating {} ({} chars)", name, length);
        random_string(length, alphabet)
    };

    let jwt_secret = field("JWT_SECRET", lengths::JWT_SECRET)?;
    let signer = signer_for(&jwt_secret);
    debug!("Signing role tokens with {}", signer.algorithm());
    let anon_key = signer.sign(&Claims::issue(Role::Anon, options.expires_in)?)?;
    let service_role_key = signer.sign(&Claims::issue(Role::ServiceRole, options.expires_in)?)?;

    Ok(SecretBundle {
        postgres_password: field("POSTGRES_PASSWORD", lengths::POSTGRES_PASSWORD)?,
        jwt_secret,
        anon_key,
        service_role_key,
        dashboard_username: DASHBOARD_USERNAME.to_string(),
        dashboard_password: field("DASHBOARD_PASSWORD", lengths::DASHBOARD_PASSWORD)?,
        secret_key_base: field("SECRET_KEY_BASE", lengths::SECRET_KEY_BASE)?,
        vault_enc_key: field("VAULT_ENC_KEY", lengths::VAULT_ENC_KEY)?,
        logflare_logger_backend_api_key: field(
            "LOGFLARE_LOGGER_BACKEND_API_KEY",
            lengths::LOGFLARE_LOGGER_BACKEND_API_KEY,
        )?,
        logflare_api_key: field("LOGFLARE_API_KEY", lengths::LOGFLARE_API_KEY)?,
        pooler_tenant_id: field("POOLER_TENANT_ID", lengths::POOLER_TENANT_ID)?,
        encryption_key: field("ENCRYPTION_KEY", lengths::ENCRYPTION_KEY)?,
    })
}
