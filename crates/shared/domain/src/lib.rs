//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the DNI check letter, the workshop entities and the translation catalog.

pub mod cliente;
pub mod constants;
pub mod dni;
pub mod error;
pub mod password;
pub mod translation;
pub mod user;
pub mod vehiculo;

pub use cliente::{Cliente, ClienteData, ClienteWithVehiculos};
pub use constants::*;
pub use dni::{check_letter, validate_dni, DniCode, DniError};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use translation::{LanguageTexts, Translations};
pub use user::{User, UserResponse};
pub use vehiculo::{Vehiculo, VehiculoData, VehiculoWithCliente};
