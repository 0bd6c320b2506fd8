/**
 * Session Issuer and JWT Tokens
 *
 * `SessionIssuer` checks a username/password pair against a
 * `CredentialStore` and mints HS256 bearer tokens for a fixed validity
 * window. Tokens are stateless: there is no server-side session record, so
 * a token dies only by reaching `exp`.
 *
 * The issuer is built once from configuration and shared through
 * `AppState`; nothing here reads the environment.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::users::{CredentialStore, User};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display handle at issue time
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// A freshly minted token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

impl IssuedToken {
    /// Seconds of validity granted at issue time
    pub fn expires_in(&self) -> u64 {
        self.claims.exp.saturating_sub(self.claims.iat)
    }
}

/// Verifies credentials and issues signed bearer tokens
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    bcrypt_cost: u32,
    /// Hash checked against when the username is unknown
    dummy_hash: String,
}

impl SessionIssuer {
    /// Build an issuer
    ///
    /// # Arguments
    /// * `secret` - HMAC secret used to sign and verify tokens
    /// * `ttl` - Validity window of every issued token
    /// * `bcrypt_cost` - Work factor for new password hashes
    pub fn new(secret: &[u8], ttl: Duration, bcrypt_cost: u32) -> Result<Self, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let dummy_hash = bcrypt::hash("simplenotes-unknown-user", bcrypt_cost)?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// Token validity window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check a username/password pair and issue a token on success
    ///
    /// Returns the matched user along with the token. Unknown usernames and
    /// wrong passwords both yield `AuthError::InvalidCredentials`. Store
    /// failures propagate as `AuthError::Store`.
    pub async fn authenticate<S: CredentialStore>(
        &self,
        store: &S,
        handle: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), AuthError> {
        let Some(user) = store.find_by_handle(handle).await? else {
            // Same bcrypt work as the wrong-password path.
            let _ = bcrypt::verify(password, &self.dummy_hash);
            tracing::warn!("Login rejected, unknown user: {}", handle);
            return Err(AuthError::InvalidCredentials);
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            tracing::warn!("Login rejected, wrong password for user: {}", handle);
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.issue(&user)?;
        Ok((user, issued))
    }

    /// Issue a token for a known user, valid from now
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
        self.issue_at(user, now_secs())
    }

    /// Issue a token with an explicit issue time (Unix seconds)
    pub fn issue_at(&self, user: &User, issued_at: u64) -> Result<IssuedToken, AuthError> {
        let exp = issued_at
            .checked_add(self.ttl.as_secs())
            .ok_or(AuthError::ExpiryOverflow)?;
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: issued_at,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(IssuedToken { token, claims })
    }

    /// Verify signature and expiry and return the claims
    ///
    /// A token is valid only while the current second is before `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {:?}", e);
                AuthError::InvalidToken
            })?;

        // jsonwebtoken still accepts exp == now with zero leeway
        if claims.exp <= now_secs() {
            tracing::debug!("Token rejected: expired at {}", claims.exp);
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    /// Hash a password with the configured bcrypt cost
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
