//! Core business logic for the authentication system.
//!
//! This service handles user creation, password hashing, credential checks and
//! token issuance/validation. It orchestrates interactions between handlers
//! and the database.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::errors::AuthError;
use super::models::{Claims, LoginRequest, Principal, RegisterRequest, Role};
use crate::database::models::{NewUser, UserRow};
use crate::database::queries;
use crate::errors::{ApiError, ApiResult};

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

/// Signs and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        Self {
            keys: Arc::new(TokenKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation,
                ttl,
            }),
        }
    }

    pub fn issue(&self, principal: Principal) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            id: principal.id,
            role: principal.role,
            iat: now.timestamp(),
            exp: (now + self.keys.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.keys.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims.into())
            .map_err(|err| {
                debug!(error = %err, "token rejected");
                AuthError::InvalidToken
            })
    }
}

#[derive(Clone)]
pub struct AccountService {
    pool: SqlitePool,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(pool: SqlitePool, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            tokens,
            bcrypt_cost,
        }
    }

    /// Creates a user with a zero balance, plus a profile row for consultants.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<UserRow> {
        let role: Role = request.role.parse()?;

        let password = request.password;
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        let mut tx = self.pool.begin().await?;
        let user = queries::insert_user(
            &mut *tx,
            &NewUser {
                name: &request.name,
                email: &request.email,
                password_hash: &hash,
                role,
            },
        )
        .await
        .map_err(duplicate_email)?;

        if role == Role::Consultant {
            queries::insert_consultant_profile(
                &mut *tx,
                user.id,
                request.specialization.as_deref(),
                request.bio.as_deref(),
            )
            .await?;
        }
        tx.commit().await?;

        info!(user_id = user.id, %role, "user registered");
        Ok(user)
    }

    /// Checks the credentials and returns a freshly signed token.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<String> {
        let user = queries::find_user_by_email(&self.pool, &request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user.password.clone();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(request.password, &hash)).await??;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(Principal {
            id: user.id,
            role: user.role,
        })?;
        debug!(user_id = user.id, "token issued");
        Ok(token)
    }
}

fn duplicate_email(err: sqlx::Error) -> ApiError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::DuplicateEmail.into(),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    const TEST_COST: u32 = 4;

    async fn service() -> AccountService {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        AccountService::new(pool, TokenService::new("test-secret", Duration::hours(24)), TEST_COST)
    }

    fn register_request(email: &str, role: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Dana".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            role: role.to_string(),
            specialization: None,
            bio: None,
        }
    }

    #[tokio::test]
    async fn register_hashes_password_and_login_succeeds() {
        let accounts = service().await;
        let user = accounts.register(register_request("dana@example.com", "client")).await.unwrap();

        assert_ne!(user.password, "hunter22");
        assert!(bcrypt::verify("hunter22", &user.password).unwrap());
        assert_eq!(user.balance_cents, 0);
        assert_eq!(user.role, Role::Client);

        let token = accounts
            .login(LoginRequest {
                email: "dana@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();
        let principal = accounts.tokens.verify(&token).unwrap();
        assert_eq!(principal, Principal { id: user.id, role: Role::Client });
    }

    #[tokio::test]
    async fn duplicate_email_leaves_first_user_untouched() {
        let accounts = service().await;
        let first = accounts.register(register_request("dup@example.com", "client")).await.unwrap();

        let mut second = register_request("dup@example.com", "consultant");
        second.name = "Impostor".to_string();
        let err = accounts.register(second).await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::DuplicateEmail)));

        let stored = queries::find_user_by_email(&accounts.pool, "dup@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.name, "Dana");
        assert_eq!(stored.role, Role::Client);
        assert!(queries::list_consultants(&accounts.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_role_is_rejected_before_insert() {
        let accounts = service().await;
        let err = accounts.register(register_request("x@example.com", "wizard")).await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::InvalidRole)));
        assert!(queries::find_user_by_email(&accounts.pool, "x@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn consultant_registration_creates_profile() {
        let accounts = service().await;
        let mut request = register_request("c@example.com", "consultant");
        request.specialization = Some("Tax law".to_string());
        let user = accounts.register(request).await.unwrap();

        let listing = queries::list_consultants(&accounts.pool).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].user_id, user.id);
        assert_eq!(listing[0].specialization.as_deref(), Some("Tax law"));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let accounts = service().await;
        accounts.register(register_request("dana@example.com", "client")).await.unwrap();

        let wrong_password = accounts
            .login(LoginRequest {
                email: "dana@example.com".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        let unknown = accounts
            .login(LoginRequest {
                email: "ghost@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ApiError::Auth(AuthError::InvalidCredentials)));
        assert!(matches!(unknown, ApiError::Auth(AuthError::InvalidCredentials)));
    }

    #[test]
    fn tokens_from_another_secret_are_invalid() {
        let ours = TokenService::new("ours", Duration::hours(1));
        let theirs = TokenService::new("theirs", Duration::hours(1));
        let token = theirs.issue(Principal { id: 1, role: Role::Client }).unwrap();
        assert_eq!(ours.verify(&token), Err(AuthError::InvalidToken));
        assert_eq!(ours.verify("not-a-jwt"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_tokens_are_invalid() {
        let tokens = TokenService::new("secret", Duration::hours(1));
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&Claims {
                id: 7,
                role: Role::Consultant,
                iat: now - 7_200,
                exp: now - 3_600,
            })
            .unwrap();
        assert_eq!(tokens.verify(&token), Err(AuthError::InvalidToken));
    }
}
