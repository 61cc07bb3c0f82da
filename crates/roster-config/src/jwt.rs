use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

use crate::parse_var;

/// Shortest accepted HMAC secret, in bytes (256 bits for HS256).
pub const MIN_SECRET_LEN: usize = 32;

pub const DEFAULT_ISSUER: &str = "yourIssuer";
pub const DEFAULT_AUDIENCE: &str = "yourAudience";
/// 12 hours.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 43_200;

/// Which claims the bearer verifier checks besides the signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenValidation {
    /// Only the HS256 signature is checked. Expired tokens and tokens for a
    /// different issuer or audience are accepted.
    #[default]
    SignatureOnly,
    /// Signature, `exp`, `iss` and `aud` are all checked.
    Strict,
}

impl FromStr for TokenValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "signature" | "signature_only" => Ok(Self::SignatureOnly),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown token validation mode '{other}', expected 'signature' or 'strict'"
            )),
        }
    }
}

impl fmt::Display for TokenValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignatureOnly => f.write_str("signature"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
    pub validation: TokenValidation,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_expiry", &self.token_expiry)
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(secret) = lookup("SECRET_KEY").or_else(|| lookup("SecretKey")) else {
            bail!("SECRET_KEY must be set");
        };
        if secret.len() < MIN_SECRET_LEN {
            bail!(
                "SECRET_KEY must be at least {MIN_SECRET_LEN} bytes long, got {}",
                secret.len()
            );
        }

        let token_expiry = parse_var(&lookup, "JWT_TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY)?;
        if token_expiry <= 0 {
            bail!("JWT_TOKEN_EXPIRY must be positive, got {token_expiry}");
        }

        Ok(Self {
            secret,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            token_expiry,
            validation: parse_var(&lookup, "JWT_VALIDATION", TokenValidation::default())?,
        })
    }
}
