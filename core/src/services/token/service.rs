//! Bearer token signing and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for minting and verifying signed bearer tokens.
///
/// The signing secret is injected once at construction and held for the
/// process lifetime; no state is kept per token.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_hours: i64,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // the 24h window is exact, no grace period
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            expiry_hours: config.expiry_hours,
        }
    }

    /// Mint a signed bearer token for a user
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, self.expiry_hours);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verify a bearer token and return the user id it was issued to.
    ///
    /// Only the issuer claim is trusted; everything else in the payload is
    /// ignored.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::InvalidTokenFormat,
            })?;

        data.claims.user_id().map_err(|_| TokenError::InvalidClaims)
    }
}
