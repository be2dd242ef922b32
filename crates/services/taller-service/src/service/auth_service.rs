//! Operator authentication.
//!
//! Registration hashes with the domain `Password` value object; login issues
//! an HS256 JWT that the HTTP middleware checks on every protected route.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};
use domain::{Password, User, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

use crate::repository::UserRepository;

/// Hash verified against when the email is unknown, so both paths cost one
/// Argon2 verification.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("taller-dummy-password").ok());

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new operator
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Login and return a JWT
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a JWT and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    jwt: JwtConfig,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    fn generate_token(&self, user: &User) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt.expiration_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.jwt.expiration_hours * SECONDS_PER_HOUR,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.users.create(User::new(name, email, password_hash)).await?;
        tracing::info!(user_id = %user.id, "Operator registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_email(&email).await?;

        let verified = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()).verify(&password),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    dummy.verify(&password);
                }
                false
            }
        };

        match user {
            Some(user) if verified => self.generate_token(&user),
            _ => {
                tracing::debug!("Rejected login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
