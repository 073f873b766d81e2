use sea_orm::{DbErr, EntityTrait};
use thiserror::Error;

/// Error returned by every service call.
///
/// The api layer maps each variant onto one HTTP status:
/// `Validation` → 400, `NotFound` → 404, `Database` → 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            other => AppError::Database(other),
        }
    }
}

/// Maps create parameters onto a fresh active model.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> Result<E::ActiveModel, AppError>;
}

/// Merge-patch onto an existing row: only fields that are `Some` are overwritten.
pub trait ApplyPatch<E>
where
    E: EntityTrait,
{
    fn apply_to(self, active: &mut E::ActiveModel) -> Result<(), AppError>;
}
