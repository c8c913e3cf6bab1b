//! Env file templates.
//!
//! Each renderer takes typed inputs and returns the full file text. Values are
//! interpolated by field name, so a missing value is a compile error rather
//! than a render-time failure.

use crate::core::bundle::SecretBundle;
use crate::core::constants::{GATEWAY_HOST, REDIS_URL};
use crate::core::types::{Artifacts, Hostname};

/// Render all three files from one bundle.
pub fn render_all(bundle: &SecretBundle, hostname: &Hostname, jwt_expiry: i64) -> Artifacts {
    Artifacts {
        platform: platform_env(bundle, jwt_expiry),
        frontend: frontend_env(bundle, hostname),
        backend: backend_env(bundle),
    }
}

/// Render the platform `.env` consumed by the database, gateway, auth server,
/// dashboard and log ingestion containers.
pub fn platform_env(bundle: &SecretBundle, jwt_expiry: i64) -> String {
    let SecretBundle {
        postgres_password,
        jwt_secret,
        anon_key,
        service_role_key,
        dashboard_username,
        dashboard_password,
        secret_key_base,
        vault_enc_key,
        logflare_logger_backend_api_key,
        logflare_api_key,
        pooler_tenant_id,
        ..
    } = bundle;

    format!(
        r#"
POSTGRES_PASSWORD={postgres_password}
JWT_SECRET={jwt_secret}
ANON_KEY={anon_key}
SERVICE_ROLE_KEY={service_role_key}
DASHBOARD_USERNAME={dashboard_username}
DASHBOARD_PASSWORD={dashboard_password}
SECRET_KEY_BASE={secret_key_base}
VAULT_ENC_KEY={vault_enc_key}
POOLER_TENANT_ID={pooler_tenant_id}


############
# Database
############

POSTGRES_HOST=db
POSTGRES_DB=postgres
POSTGRES_PORT=5432
# default user is postgres


############
# Supavisor -- Database pooler
############
POOLER_PROXY_PORT_TRANSACTION=6543
POOLER_DEFAULT_POOL_SIZE=20
POOLER_MAX_CLIENT_CONN=100


############
# API Proxy - Configuration for the Kong Reverse proxy.
############

KONG_HTTP_PORT=8000
KONG_HTTPS_PORT=8443


############
# API - Configuration for PostgREST.
############

PGRST_DB_SCHEMAS=public,storage,graphql_public


############
# Auth - Configuration for the GoTrue authentication server.
############

## General
SITE_URL=http://localhost:3000
ADDITIONAL_REDIRECT_URLS=
JWT_EXPIRY={jwt_expiry}
DISABLE_SIGNUP=false
API_EXTERNAL_URL=http://localhost:8000

## Mailer Config
MAILER_URLPATHS_CONFIRMATION="/auth/v1/verify"
MAILER_URLPATHS_INVITE="/auth/v1/verify"
MAILER_URLPATHS_RECOVERY="/auth/v1/verify"
MAILER_URLPATHS_EMAIL_CHANGE="/auth/v1/verify"

## Email auth
ENABLE_EMAIL_SIGNUP=true
ENABLE_EMAIL_AUTOCONFIRM=true
SMTP_ADMIN_EMAIL=admin@example.com
SMTP_HOST=supabase-mail
SMTP_PORT=2500
SMTP_USER=fake_mail_user
SMTP_PASS=fake_mail_password
SMTP_SENDER_NAME=fake_sender
ENABLE_ANONYMOUS_USERS=false

## Phone auth
ENABLE_PHONE_SIGNUP=true
ENABLE_PHONE_AUTOCONFIRM=true


############
# Studio - Configuration for the Dashboard
############

STUDIO_DEFAULT_ORGANIZATION=Default Organization
STUDIO_DEFAULT_PROJECT=Default Project

STUDIO_PORT=3000
# replace if you intend to use Studio outside of localhost
SUPABASE_PUBLIC_URL=http://localhost:8000

# Enable webp support
IMGPROXY_ENABLE_WEBP_DETECTION=true

# Add your OpenAI API key to enable SQL Editor Assistant
OPENAI_API_KEY=


############
# Functions - Configuration for Functions
############
# NOTE: VERIFY_JWT applies to all functions. Per-function VERIFY_JWT is not supported yet.
FUNCTIONS_VERIFY_JWT=false


############
# Logs - Configuration for Logflare
# Please refer to https://supabase.com/docs/reference/self-hosting-analytics/introduction
############

LOGFLARE_LOGGER_BACKEND_API_KEY={logflare_logger_backend_api_key}

# Change vector.toml sinks to reflect this change
LOGFLARE_API_KEY={logflare_api_key}

# Docker socket location - this value will differ depending on your OS
DOCKER_SOCKET_LOCATION=/var/run/docker.sock

# Google Cloud Project details
GOOGLE_PROJECT_ID=GOOGLE_PROJECT_ID
GOOGLE_PROJECT_NUMBER=GOOGLE_PROJECT_NUMBER
"#
    )
}

/// Render `frontend.env`.
pub fn frontend_env(bundle: &SecretBundle, hostname: &Hostname) -> String {
    format!(
        "
NEXT_PUBLIC_SUPABASE_URL=http://{GATEWAY_HOST}:8000
NEXT_PUBLIC_SUPABASE_ANON_KEY={anon_key}
REDIS_URL={REDIS_URL}
BACKEND_URL=http://{hostname}:8080
",
        anon_key = bundle.anon_key,
    )
}

/// Render `backend.env`.
pub fn backend_env(bundle: &SecretBundle) -> String {
    format!(
        "
NODE_ENV=production
PORT=8080

#SUPABASE
SUPABASE_URL=http://{GATEWAY_HOST}:8000
SUPABASE_SERVICE_ROLE_KEY={service_role_key}
REDIS_URL={REDIS_URL}

ENCRYPTION_KEY={encryption_key}

POSTGRES_PASSWORD={postgres_password}
POOLER_TENANT_ID={pooler_tenant_id}
",
        service_role_key = bundle.service_role_key,
        encryption_key = bundle.encryption_key,
        postgres_password = bundle.postgres_password,
        pooler_tenant_id = bundle.pooler_tenant_id,
    )
}
