use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: UserId,
        is_admin: bool,
        is_verified: bool,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id.value(),
            is_admin,
            is_verified,
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            iss: self.config.issuer.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_secret(secret: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: secret.to_string(),
            issuer: "todo-test".to_string(),
            access_token_expiry: 3600,
        })
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service_with_secret("test_secret_key_for_testing_purposes_only");

        let issued = service
            .generate_access_token(UserId::from(42), true, false)
            .expect("Token should be generated");

        let claims = service.verify_token(&issued.token).expect("Token should verify");
        assert_eq!(claims.sub, 42);
        assert!(claims.is_admin);
        assert!(!claims.is_verified);
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_expiry_follows_config() {
        let service = service_with_secret("test_secret_key_for_testing_purposes_only");
        let before = Utc::now();

        let issued = service
            .generate_access_token(UserId::from(1), false, true)
            .unwrap();

        let ttl = issued.expires_at - before;
        assert!(ttl <= Duration::seconds(3601));
        assert!(ttl >= Duration::seconds(3599));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let issuer = service_with_secret("another_secret_key_for_testing_only_x");
        let verifier = service_with_secret("test_secret_key_for_testing_purposes_only");

        let issued = issuer
            .generate_access_token(UserId::from(1), false, true)
            .unwrap();

        assert_eq!(
            verifier.verify_token(&issued.token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service_with_secret("test_secret_key_for_testing_purposes_only");
        let past = Utc::now() - Duration::hours(2);

        let claims = TokenClaims {
            sub: 1,
            is_admin: false,
            is_verified: true,
            token_type: "access".to_string(),
            iss: "todo-test".to_string(),
            exp: (past + Duration::minutes(5)).timestamp(),
            iat: past.timestamp(),
            nbf: past.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key_for_testing_purposes_only"),
        )
        .unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = service_with_secret("test_secret_key_for_testing_purposes_only");
        assert_eq!(
            service.verify_token("not.a.jwt").unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
