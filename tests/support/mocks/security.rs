// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Mutex;
use yanote::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};

use super::time::fixed_now;

/// Hands out opaque `fake-N` tokens and remembers who each one belongs to.
#[derive(Default)]
pub struct FakeTokenManager {
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        let mut issued = self.issued.lock().unwrap();
        let token = format!("fake-{}", issued.len() + 1);
        issued.insert(
            token.clone(),
            AuthenticatedUser {
                id: subject.user_id,
                username: subject.username,
                issued_at: now,
                expires_at: now + Duration::hours(1),
                session_id: subject.session_id.clone(),
            },
        );

        Ok(AuthTokenDto {
            token,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Stores `hash::<password>` and only accepts the exact password back.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
