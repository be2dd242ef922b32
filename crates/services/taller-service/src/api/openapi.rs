//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::api::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::api::handlers::cliente_handler::ClienteRequest;
use crate::api::handlers::health_handler::{HealthResponse, ServiceHealth};
use crate::api::handlers::vehiculo_handler::VehiculoRequest;
use crate::api::response::MessageResponse;
use crate::service::TokenResponse;
use domain::{Cliente, ClienteWithVehiculos, UserResponse, Vehiculo, VehiculoWithCliente};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler::health_check,
        crate::api::handlers::auth_handler::register,
        crate::api::handlers::auth_handler::login,
        crate::api::handlers::cliente_handler::list_clientes,
        crate::api::handlers::cliente_handler::create_cliente,
        crate::api::handlers::cliente_handler::get_cliente,
        crate::api::handlers::cliente_handler::update_cliente,
        crate::api::handlers::cliente_handler::delete_cliente,
        crate::api::handlers::vehiculo_handler::list_vehiculos,
        crate::api::handlers::vehiculo_handler::create_vehiculo,
        crate::api::handlers::vehiculo_handler::get_vehiculo,
        crate::api::handlers::vehiculo_handler::update_vehiculo,
        crate::api::handlers::vehiculo_handler::delete_vehiculo,
        crate::api::handlers::translation_handler::all_translations,
        crate::api::handlers::translation_handler::language_translations,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            UserResponse,
            ClienteRequest,
            Cliente,
            ClienteWithVehiculos,
            VehiculoRequest,
            Vehiculo,
            VehiculoWithCliente,
            MessageResponse,
            HealthResponse,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "Operator accounts"),
        (name = "Clientes", description = "Workshop customers"),
        (name = "Vehiculos", description = "Customer vehicles"),
        (name = "Translations", description = "UI translation catalog"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/auth/login",
            "/clientes",
            "/clientes/{id}",
            "/vehiculos/{id}",
            "/translations/{lang}",
        ] {
            assert!(paths.iter().any(|p| *p == expected), "{expected}");
        }
    }
}
