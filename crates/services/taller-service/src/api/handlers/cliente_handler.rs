//! Cliente CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Cliente, ClienteData, ClienteWithVehiculos, DniCode};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::response::MessageResponse;
use crate::api::rules::{validate_dni_field, TELEFONO_REGEX};
use crate::api::AppState;

/// Cliente payload, used for both create and update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClienteRequest {
    #[validate(length(
        min = 3,
        max = 255,
        message = "The nombre field must be between 3 and 255 characters."
    ))]
    #[schema(example = "Ana García")]
    pub nombre: String,
    #[validate(email(message = "The email field must be a valid email address."))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[validate(regex(path = *TELEFONO_REGEX, message = "The telefono field format is invalid."))]
    #[schema(example = "612345678")]
    pub telefono: String,
    #[validate(custom(function = "validate_dni_field"))]
    #[schema(example = "12345678Z")]
    pub dni: String,
}

impl ClienteRequest {
    fn into_data(self) -> AppResult<ClienteData> {
        Ok(ClienteData {
            dni: self.dni.parse::<DniCode>()?,
            nombre: self.nombre,
            email: self.email,
            telefono: self.telefono,
        })
    }
}

pub fn cliente_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes).post(create_cliente))
        .route(
            "/:id",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
}

/// List clientes with their vehiculos
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All clientes", body = Vec<ClienteWithVehiculos>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_clientes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClienteWithVehiculos>>> {
    Ok(Json(state.clientes.list_clientes().await?))
}

/// Create a cliente
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    request_body = ClienteRequest,
    responses(
        (status = 201, description = "Cliente created", body = Cliente),
        (status = 409, description = "Email or DNI already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClienteRequest>,
) -> AppResult<(StatusCode, Json<Cliente>)> {
    let cliente = state.clientes.create_cliente(payload.into_data()?).await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

/// Show a cliente with its vehiculos
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Cliente found", body = ClienteWithVehiculos),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ClienteWithVehiculos>> {
    Ok(Json(state.clientes.get_cliente(id).await?))
}

/// Update a cliente
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cliente id")),
    request_body = ClienteRequest,
    responses(
        (status = 200, description = "Cliente updated", body = Cliente),
        (status = 404, description = "Cliente not found"),
        (status = 409, description = "Email or DNI already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ClienteRequest>,
) -> AppResult<Json<Cliente>> {
    let cliente = state
        .clientes
        .update_cliente(id, payload.into_data()?)
        .await?;

    Ok(Json(cliente))
}

/// Delete a cliente and its vehiculos
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Cliente deleted", body = MessageResponse),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn delete_cliente(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.clientes.delete_cliente(id).await?;
    tracing::info!(
        operator_id = %user.id,
        operator = %user.email,
        cliente_id = %id,
        "Cliente removed"
    );

    Ok(Json(MessageResponse::new("Cliente eliminado correctamente")))
}
