use crate::domain::errors::DomainError;

const CNT_NOTE_SLUG: &str = "notes_slug_key";
const CNT_NOTE_AUTHOR: &str = "notes_author_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NOTE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_NOTE_AUTHOR => DomainError::NotFound("author not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let mapped = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }

    #[test]
    fn pool_timeouts_are_persistence_failures() {
        let mapped = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }
}
