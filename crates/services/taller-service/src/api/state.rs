//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::HealthCheck;
use crate::service::{AuthService, ClienteService, TranslationService, VehiculoService};

/// Services shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub clientes: Arc<dyn ClienteService>,
    pub vehiculos: Arc<dyn VehiculoService>,
    pub auth: Arc<dyn AuthService>,
    pub translations: Arc<dyn TranslationService>,
    pub health: Arc<dyn HealthCheck>,
}
