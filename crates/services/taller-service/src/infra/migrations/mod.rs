//! Database migrations.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240227_000001_create_users_table;
mod m20240227_000002_create_clientes_table;
mod m20240227_000003_create_vehiculos_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240227_000001_create_users_table::Migration),
            Box::new(m20240227_000002_create_clientes_table::Migration),
            Box::new(m20240227_000003_create_vehiculos_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();

        assert_eq!(names.len(), 3);
        assert_eq!(names, sorted);
    }
}
