//! HTTP handlers, one module per resource.

pub mod auth_handler;
pub mod cliente_handler;
pub mod health_handler;
pub mod translation_handler;
pub mod vehiculo_handler;

pub use auth_handler::auth_routes;
pub use cliente_handler::cliente_routes;
pub use health_handler::{health_check, welcome};
pub use translation_handler::translation_routes;
pub use vehiculo_handler::vehiculo_routes;
