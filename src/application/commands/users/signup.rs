use super::{UserCommandService, password::password_problems};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        forms::FieldErrors,
    },
    domain::{
        errors::DomainError,
        note::value_objects::REQUIRED_MESSAGE,
        user::{NewUser, PasswordHash, Username},
    },
};

const USERNAME_TAKEN: &str = "a user with that username already exists";
const PASSWORD_MISMATCH: &str = "the two password fields didn't match";

pub struct SignupCommand {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl UserCommandService {
    pub async fn signup(&self, command: SignupCommand) -> ApplicationResult<UserDto> {
        let SignupCommand {
            username,
            password1,
            password2,
        } = command;

        let mut errors = FieldErrors::new();
        let parsed_username = errors.capture("username", Username::new(username.clone()));
        Self::check_passwords(&mut errors, &username, &password1, &password2);

        let username_taken = match &parsed_username {
            Some(name) => self.users.find_by_username(name).await?.is_some(),
            None => false,
        };
        if username_taken {
            errors.add("username", USERNAME_TAKEN);
        }
        errors.into_result()?;

        let username = parsed_username
            .ok_or_else(|| ApplicationError::infrastructure("username passed validation unset"))?;
        let hashed = self.hasher.hash(&password1).await?;
        let new_user = NewUser::new(username, PasswordHash::new(hashed)?, self.clock.now());

        let user = self.users.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => ApplicationError::form_field("username", USERNAME_TAKEN),
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "user signed up");
        Ok(user.into())
    }

    fn check_passwords(errors: &mut FieldErrors, username: &str, password1: &str, password2: &str) {
        if password1.is_empty() {
            errors.add("password1", REQUIRED_MESSAGE);
        }
        if password2.is_empty() {
            errors.add("password2", REQUIRED_MESSAGE);
            return;
        }
        if password1 != password2 {
            errors.add("password2", PASSWORD_MISMATCH);
            return;
        }
        for problem in password_problems(password2, username) {
            errors.add("password2", problem);
        }
    }
}
