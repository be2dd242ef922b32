//! Service layer - workshop use cases.

mod auth_service;
mod cliente_service;
mod translation_service;
mod vehiculo_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use cliente_service::{ClienteManager, ClienteService};
pub use translation_service::{TranslationService, TranslationStore};
pub use vehiculo_service::{VehiculoManager, VehiculoService};
