use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
        forms::FieldErrors,
    },
    domain::{
        note::value_objects::REQUIRED_MESSAGE,
        user::{User, Username},
    },
};

const INVALID_LOGIN: &str =
    "please enter a correct username and password, note that both fields may be case-sensitive";

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let mut errors = FieldErrors::new();
        if command.username.trim().is_empty() {
            errors.add("username", REQUIRED_MESSAGE);
        }
        if command.password.is_empty() {
            errors.add("password", REQUIRED_MESSAGE);
        }
        errors.into_result()?;

        let user = self
            .find_and_authenticate_user(&command.username, &command.password)
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(reason) => {
                    tracing::warn!(username = %command.username, %reason, "login rejected");
                    ApplicationError::form_field(FieldErrors::NON_FIELD, INVALID_LOGIN)
                }
                other => other,
            })?;

        let token = self.start_session(&user).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Unknown users, inactive accounts and wrong passwords all surface as
    /// `Unauthorized` so callers cannot tell them apart.
    async fn find_and_authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let username = Username::new(username)
            .map_err(|_| ApplicationError::unauthorized("malformed username"))?;
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown username"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("account is disabled"));
        }

        self.hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
