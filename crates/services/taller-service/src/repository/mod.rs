//! Repository layer for data access.

mod cliente_repository;
pub mod entities;
mod user_repository;
mod vehiculo_repository;

use sea_orm::{DbErr, SqlErr};

use common::AppError;

pub use cliente_repository::{ClienteRepository, ClienteStore};
pub use user_repository::{UserRepository, UserStore};
pub use vehiculo_repository::{VehiculoRepository, VehiculoStore};

#[cfg(any(test, feature = "test-utils"))]
pub use cliente_repository::MockClienteRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use vehiculo_repository::MockVehiculoRepository;

/// Unique constraint name paired with the field label reported on conflict.
pub(crate) type UniqueColumns = &'static [(&'static str, &'static str)];

/// Map a failed insert/update. A unique index hit that slipped past the
/// service-level check surfaces as a conflict on the field it guards, or on
/// `entity` when the constraint is not listed.
pub(crate) fn write_error(err: DbErr, entity: &'static str, unique: UniqueColumns) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            AppError::conflict(conflict_label(&detail, entity, unique))
        }
        _ => match err {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::from(other),
        },
    }
}

fn conflict_label(detail: &str, entity: &'static str, unique: UniqueColumns) -> &'static str {
    unique
        .iter()
        .find(|&&(constraint, _)| detail.contains(constraint))
        .map_or(entity, |&(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENTES: UniqueColumns = &[("clientes_email_key", "Email"), ("clientes_dni_key", "DNI")];

    #[test]
    fn conflict_names_the_violated_column() {
        assert_eq!(
            conflict_label(
                r#"duplicate key value violates unique constraint "clientes_dni_key""#,
                "Cliente",
                CLIENTES
            ),
            "DNI"
        );
        assert_eq!(
            conflict_label(
                r#"duplicate key value violates unique constraint "clientes_email_key""#,
                "Cliente",
                CLIENTES
            ),
            "Email"
        );
        assert_eq!(
            conflict_label(r#"unique constraint "clientes_pkey""#, "Cliente", CLIENTES),
            "Cliente"
        );
    }
}
