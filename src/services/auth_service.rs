//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    config::{AdminBootstrapConfig, JwtConfig},
    constants::{REFRESH_TOKEN_LENGTH, roles},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::{generate_secure_token, hash_string, normalize_phone, sanitize_string},
};

/// Placeholder phone for the bootstrapped admin account
const ADMIN_PLACEHOLDER_PHONE: &str = "0000000000";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Tokens handed out on login and refresh
#[derive(Debug)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// New account details (already validated)
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub phone: &'a str,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new learner account
    pub async fn register(pool: &PgPool, new_user: NewUser<'_>) -> AppResult<User> {
        if UserRepository::find_by_username(pool, new_user.username).await?.is_some() {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        if UserRepository::find_by_email(pool, new_user.email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(new_user.password)?;

        let user = UserRepository::create(
            pool,
            new_user.username,
            new_user.email,
            &password_hash,
            &sanitize_string(new_user.name),
            &normalize_phone(new_user.phone),
            roles::LEARNER,
        )
        .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Login with username/email and password
    pub async fn login(
        pool: &PgPool,
        redis: ConnectionManager,
        jwt: &JwtConfig,
        identifier: &str,
        password: &str,
    ) -> AppResult<(User, IssuedTokens)> {
        let user = UserRepository::find_by_identifier(pool, identifier)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        UserRepository::update_last_login(pool, &user.id).await?;

        let (access_token, expires_in) = Self::generate_access_token(&user, jwt)?;
        let refresh_token = Self::issue_refresh_token(redis, &user.id, jwt).await?;

        info!(user_id = %user.id, "User logged in");

        Ok((
            user,
            IssuedTokens {
                access_token,
                refresh_token,
                expires_in,
            },
        ))
    }

    /// Exchange a refresh token for a new token pair. The old refresh token
    /// is consumed.
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        jwt: &JwtConfig,
        refresh_token: &str,
    ) -> AppResult<IssuedTokens> {
        let token_hash = hash_string(refresh_token);

        let owner: Option<String> = redis.get_del(refresh_key(&token_hash)).await?;
        let owner = owner.ok_or(AppError::InvalidToken)?;
        let user_id = Uuid::parse_str(&owner).map_err(|_| AppError::InvalidToken)?;

        let _: () = redis.srem(sessions_key(&user_id), &token_hash).await?;

        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let (access_token, expires_in) = Self::generate_access_token(&user, jwt)?;
        let refresh_token = Self::issue_refresh_token(redis, &user.id, jwt).await?;

        Ok(IssuedTokens {
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// Logout: drop one refresh token, or every session of the user
    pub async fn logout(
        mut redis: ConnectionManager,
        user_id: &Uuid,
        refresh_token: Option<&str>,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            let hashes: Vec<String> = redis.smembers(sessions_key(user_id)).await?;
            let mut keys: Vec<String> = hashes.iter().map(|h| refresh_key(h)).collect();
            keys.push(sessions_key(user_id));
            let _: () = redis.del(keys).await?;

            info!(user_id = %user_id, sessions = hashes.len(), "Logged out of all sessions");
            return Ok(());
        }

        if let Some(token) = refresh_token {
            let token_hash = hash_string(token);
            let owner: Option<String> = redis.get(refresh_key(&token_hash)).await?;

            // Only the owner may revoke a token
            if owner.as_deref() == Some(user_id.to_string().as_str()) {
                let _: () = redis.del(refresh_key(&token_hash)).await?;
                let _: () = redis.srem(sessions_key(user_id), &token_hash).await?;
            }
        }

        Ok(())
    }

    /// Create the configured admin account if it doesn't exist yet
    pub async fn ensure_admin(pool: &PgPool, admin: &AdminBootstrapConfig) -> AppResult<()> {
        if let Some(existing) = UserRepository::find_by_username(pool, &admin.username).await? {
            if !existing.is_admin() {
                warn!(username = %admin.username, "Bootstrap admin username belongs to a non-admin user");
            }
            return Ok(());
        }

        let password_hash = Self::hash_password(&admin.password)?;
        let user = UserRepository::create(
            pool,
            &admin.username,
            &admin.email,
            &password_hash,
            &admin.username,
            ADMIN_PLACEHOLDER_PHONE,
            roles::ADMIN,
        )
        .await?;

        info!(user_id = %user.id, username = %user.username, "Bootstrap admin created");
        Ok(())
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token, returning it with its lifetime in seconds
    pub fn generate_access_token(user: &User, jwt: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);
        let expires_in = jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Create a refresh token and record it in Redis. Only the token's hash
    /// is stored.
    async fn issue_refresh_token(
        mut redis: ConnectionManager,
        user_id: &Uuid,
        jwt: &JwtConfig,
    ) -> AppResult<String> {
        let token = generate_secure_token(REFRESH_TOKEN_LENGTH);
        let token_hash = hash_string(&token);
        let ttl = jwt.refresh_token_ttl_secs();

        let _: () = redis
            .set_ex(refresh_key(&token_hash), user_id.to_string(), ttl)
            .await?;
        let _: () = redis.sadd(sessions_key(user_id), &token_hash).await?;
        let _: () = redis.expire(sessions_key(user_id), ttl as i64).await?;

        Ok(token)
    }
}

fn refresh_key(token_hash: &str) -> String {
    format!("refresh_token:{}", token_hash)
}

fn sessions_key(user_id: &Uuid) -> String {
    format!("user_sessions:{}", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            expiry_hours: 2,
            refresh_token_expiry_days: 7,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "somchai".to_string(),
            email: "somchai@example.com".to_string(),
            password_hash: String::new(),
            name: "สมชาย".to_string(),
            phone: "0812345678".to_string(),
            role: roles::LEARNER.to_string(),
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_roundtrip() {
        let hash = AuthService::hash_password("Str0ngPassword").unwrap();

        assert!(AuthService::verify_password("Str0ngPassword", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(AuthService::verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_access_token_claims() {
        let jwt = jwt_config();
        let user = user();

        let (token, expires_in) = AuthService::generate_access_token(&user, &jwt).unwrap();
        let claims = AuthService::verify_token(&token, &jwt.secret).unwrap();

        assert_eq!(expires_in, 7200);
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "somchai");
        assert_eq!(claims.role, roles::LEARNER);
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[test]
    fn test_token_with_wrong_secret_is_rejected() {
        let jwt = jwt_config();
        let (token, _) = AuthService::generate_access_token(&user(), &jwt).unwrap();

        let err = AuthService::verify_token(&token, "another-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_redis_keys() {
        let id = Uuid::nil();
        assert_eq!(refresh_key("abc"), "refresh_token:abc");
        assert_eq!(
            sessions_key(&id),
            "user_sessions:00000000-0000-0000-0000-000000000000"
        );
    }
}
