use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";
const UNTRANSLATABLE_CHARACTER: &str = "22P05";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => DomainError::conflict(format!(
                "{} already exists",
                db_err.constraint().unwrap_or("unique key")
            )),
            Some(CHARACTER_NOT_IN_REPERTOIRE | UNTRANSLATABLE_CHARACTER) => {
                DomainError::validation("text contains characters the database cannot store")
            }
            _ => DomainError::persistence(db_err.message()),
        },
        _ => DomainError::persistence(err.to_string()),
    }
}
