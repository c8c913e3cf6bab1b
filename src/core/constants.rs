//! Constants used throughout envseed.
//!
//! Centralizes file names, service endpoints and secret lengths.

/// Platform configuration file name (.env).
pub const PLATFORM_FILE: &str = ".env";

/// Frontend configuration file name.
pub const FRONTEND_FILE: &str = "frontend.env";

/// Backend configuration file name.
pub const BACKEND_FILE: &str = "backend.env";

/// System hosts file.
#[cfg(not(windows))]
pub const SYSTEM_HOSTS_FILE: &str = "/etc/hosts";

/// System hosts file.
#[cfg(windows)]
pub const SYSTEM_HOSTS_FILE: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// Internal hostname of the API gateway container.
pub const GATEWAY_HOST: &str = "kong";

/// Hosts entry mapping the gateway to loopback.
pub const HOSTS_ENTRY: &str = "127.0.0.1 kong";

/// Cache/broker URL shared by frontend and backend.
pub const REDIS_URL: &str = "redis://redis:6379";

/// Issuer claim for signed tokens.
pub const TOKEN_ISSUER: &str = "supabase";

/// Fixed dashboard login.
pub const DASHBOARD_USERNAME: &str = "supabase";

/// Default token lifetime in seconds.
pub const DEFAULT_EXPIRES_IN: i64 = 3600;

/// Longest token lifetime the CLI accepts, in seconds.
pub const MAX_EXPIRES_IN: i64 = u32::MAX as i64;

/// Secret lengths.
pub mod lengths {
    pub const POSTGRES_PASSWORD: usize = 16;
    pub const JWT_SECRET: usize = 40;
    pub const DASHBOARD_PASSWORD: usize = 16;
    pub const SECRET_KEY_BASE: usize = 64;
    pub const VAULT_ENC_KEY: usize = 32;
    pub const LOGFLARE_LOGGER_BACKEND_API_KEY: usize = 64;
    pub const LOGFLARE_API_KEY: usize = 64;
    pub const POOLER_TENANT_ID: usize = 16;
    pub const ENCRYPTION_KEY: usize = 64;
}

/// Line separator used when appending to the hosts file.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Line separator used when appending to the hosts file.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
