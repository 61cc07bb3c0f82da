//! JWT (JSON Web Token) issuing and verification.
//!
//! Tokens are signed with HS256 using [`JwtConfig::secret`]. Verification
//! always checks the algorithm and signature; whether `exp`, `iss` and `aud`
//! are checked as well depends on [`JwtConfig::validation`].

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use roster_config::{JwtConfig, TokenValidation};
use roster_core::AppError;

use crate::claims::{Audience, Claims, TOKEN_SUBJECT};

/// Mints a bearer token for the fixed [`TOKEN_SUBJECT`] identity.
///
/// The token carries the configured issuer and audience and expires
/// [`JwtConfig::token_expiry`] seconds from now.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: TOKEN_SUBJECT.to_string(),
        unique_name: TOKEN_SUBJECT.to_string(),
        iss: jwt_config.issuer.clone(),
        aud: Audience::Single(jwt_config.audience.clone()),
        exp: now + jwt_config.token_expiry,
        nbf: now,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a bearer token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, was signed with a
/// different key or algorithm, or (in strict mode) is expired or was issued
/// for another issuer or audience.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation_for(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::unauthorized(anyhow!("Invalid bearer token: {}", e)))
}

fn validation_for(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);

    match jwt_config.validation {
        TokenValidation::SignatureOnly => {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
            validation.validate_nbf = false;
            validation.validate_aud = false;
        }
        TokenValidation::Strict => {
            validation.set_required_spec_claims(&["exp", "iss", "aud"]);
            validation.set_issuer(&[jwt_config.issuer.as_str()]);
            validation.set_audience(&[jwt_config.audience.as_str()]);
        }
    }

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            issuer: "yourIssuer".to_string(),
            audience: "yourAudience".to_string(),
            token_expiry: 43_200,
            validation: TokenValidation::SignatureOnly,
        }
    }

    fn strict(config: JwtConfig) -> JwtConfig {
        JwtConfig {
            validation: TokenValidation::Strict,
            ..config
        }
    }

    #[test]
    fn test_issue_token_success() {
        let token = issue_token(&get_test_jwt_config()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let token = issue_token(&config).unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "testuser");
        assert_eq!(claims.unique_name, "testuser");
        assert_eq!(claims.iss, "yourIssuer");
        assert!(claims.aud.contains("yourAudience"));
    }

    #[test]
    fn test_token_expires_after_twelve_hours() {
        let config = get_test_jwt_config();
        let token = issue_token(&config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.exp - claims.iat, 12 * 60 * 60);
    }

    #[test]
    fn test_verify_token_invalid() {
        let result = verify_token("invalid-token", &get_test_jwt_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = issue_token(&config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_signature_only_accepts_expired_token() {
        let expired_config = JwtConfig {
            token_expiry: -3600,
            ..get_test_jwt_config()
        };
        let token = issue_token(&expired_config).unwrap();

        assert!(verify_token(&token, &get_test_jwt_config()).is_ok());
    }

    #[test]
    fn test_strict_rejects_expired_token() {
        let expired_config = JwtConfig {
            token_expiry: -3600,
            ..get_test_jwt_config()
        };
        let token = issue_token(&expired_config).unwrap();

        assert!(verify_token(&token, &strict(get_test_jwt_config())).is_err());
    }

    #[test]
    fn test_signature_only_ignores_audience_and_issuer() {
        let foreign_config = JwtConfig {
            issuer: "someone-else".to_string(),
            audience: "another-api".to_string(),
            ..get_test_jwt_config()
        };
        let token = issue_token(&foreign_config).unwrap();

        assert!(verify_token(&token, &get_test_jwt_config()).is_ok());
    }

    #[test]
    fn test_strict_rejects_wrong_audience() {
        let foreign_config = JwtConfig {
            audience: "another-api".to_string(),
            ..get_test_jwt_config()
        };
        let token = issue_token(&foreign_config).unwrap();

        assert!(verify_token(&token, &strict(get_test_jwt_config())).is_err());
    }

    #[test]
    fn test_strict_rejects_wrong_issuer() {
        let foreign_config = JwtConfig {
            issuer: "someone-else".to_string(),
            ..get_test_jwt_config()
        };
        let token = issue_token(&foreign_config).unwrap();

        assert!(verify_token(&token, &strict(get_test_jwt_config())).is_err());
    }

    #[test]
    fn test_strict_accepts_fresh_token() {
        let config = strict(get_test_jwt_config());
        let token = issue_token(&config).unwrap();

        assert!(verify_token(&token, &config).is_ok());
    }

    #[test]
    fn test_rejects_other_algorithm() {
        let config = get_test_jwt_config();
        let claims = Claims {
            sub: "testuser".to_string(),
            ..Claims::default()
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_signature_only_accepts_sparse_payload() {
        let config = get_test_jwt_config();
        let payload = serde_json::json!({ "role": "anything" });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert!(claims.sub.is_empty());
    }

    #[test]
    fn test_signature_only_accepts_array_audience() {
        let config = get_test_jwt_config();
        let payload = serde_json::json!({
            "sub": "testuser",
            "aud": ["yourAudience", "other-api"],
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert!(claims.aud.contains("other-api"));
    }

    #[test]
    fn test_strict_accepts_array_audience_containing_ours() {
        let config = strict(get_test_jwt_config());
        let now = Utc::now().timestamp();
        let payload = serde_json::json!({
            "sub": "testuser",
            "iss": "yourIssuer",
            "aud": ["other-api", "yourAudience"],
            "exp": now + 600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_ok());
    }

    #[test]
    fn test_signature_only_accepts_numeric_subject_and_float_expiry() {
        let config = get_test_jwt_config();
        let payload = serde_json::json!({ "sub": 42, "exp": 1.5e9 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp, 1_500_000_000);
    }
}
