use std::sync::Arc;

use validator::Validate;

use crate::database::user_store::{InsertOutcome, UserStore};
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::{Error, Result};
use crate::models::user::{User, UserProfile};
use crate::services::token_service::TokenService;
use crate::utils::crypto;

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    pub async fn register(&self, payload: RegisterRequest) -> Result<UserProfile> {
        payload.validate().map_err(|_| Error::IncompleteData)?;

        // Skip the expensive hash for the common duplicate case; the insert
        // below is still what decides a race.
        if self.store.get(&payload.email).is_some() {
            return Err(Error::EmailTaken);
        }

        let RegisterRequest {
            name,
            email,
            password,
        } = payload;
        let password_hash = tokio::task::spawn_blocking(move || crypto::hash_password(&password))
            .await
            .map_err(|e| Error::Internal(format!("hashing task failed: {}", e)))??;

        let user = User {
            name,
            email,
            password_hash,
        };
        let profile = UserProfile::from(&user);

        match self.store.insert_if_absent(user) {
            InsertOutcome::Inserted => {
                tracing::info!(email = %profile.email, users = self.store.len(), "user registered");
                Ok(profile)
            }
            InsertOutcome::AlreadyExists => Err(Error::EmailTaken),
        }
    }

    pub async fn login(&self, payload: LoginRequest) -> Result<LoginResponse> {
        payload.validate().map_err(|_| Error::MissingFields)?;

        let Some(user) = self.store.get(&payload.email) else {
            tracing::info!(email = %payload.email, "login for unknown email");
            return Err(Error::InvalidCredentials);
        };

        let stored_hash = user.password_hash.clone();
        let password = payload.password;
        let verified =
            tokio::task::spawn_blocking(move || crypto::verify_password(&password, &stored_hash))
                .await
                .map_err(|e| Error::Internal(format!("verification task failed: {}", e)))?;

        if !verified {
            tracing::info!(email = %user.email, "login with wrong password");
            return Err(Error::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.email)?;
        tracing::info!(email = %user.email, "user logged in");

        Ok(LoginResponse {
            token,
            user: UserProfile::from(&user),
        })
    }
}
