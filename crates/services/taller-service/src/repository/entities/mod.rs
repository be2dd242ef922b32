//! SeaORM entities.

pub mod cliente;
pub mod user;
pub mod vehiculo;
