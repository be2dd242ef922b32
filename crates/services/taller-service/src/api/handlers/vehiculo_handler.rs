//! Vehiculo CRUD.

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
use domain::{Vehiculo, VehiculoData, VehiculoWithCliente};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::response::MessageResponse;
use crate::api::AppState;

/// Vehiculo payload, used for both create and update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VehiculoRequest {
    #[validate(length(min = 1, max = 255, message = "The marca field is required."))]
    #[schema(example = "Toyota")]
    pub marca: String,
    #[validate(length(min = 1, max = 255, message = "The modelo field is required."))]
    #[schema(example = "Corolla")]
    pub modelo: String,
    #[validate(length(min = 1, max = 255, message = "The color field is required."))]
    #[schema(example = "silver")]
    pub color: String,
    #[validate(length(min = 1, max = 255, message = "The placa field is required."))]
    #[schema(example = "1234-BCD")]
    pub placa: String,
    /// Model year, also accepted as `año`
    #[serde(alias = "año")]
    #[schema(example = 2015)]
    pub anio: i32,
    #[validate(range(min = 0, message = "The kilometraje field must be at least 0."))]
    #[schema(example = 120000, minimum = 0)]
    pub kilometraje: i32,
    pub cliente_id: Uuid,
}

impl From<VehiculoRequest> for VehiculoData {
    fn from(req: VehiculoRequest) -> Self {
        VehiculoData {
            marca: req.marca,
            modelo: req.modelo,
            color: req.color,
            placa: req.placa,
            anio: req.anio,
            kilometraje: req.kilometraje,
            cliente_id: req.cliente_id,
        }
    }
}

pub fn vehiculo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehiculos).post(create_vehiculo))
        .route(
            "/:id",
            get(get_vehiculo).put(update_vehiculo).delete(delete_vehiculo),
        )
}

/// List vehiculos with their owner
#[utoipa::path(
    get,
    path = "/vehiculos",
    tag = "Vehiculos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All vehiculos", body = Vec<VehiculoWithCliente>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_vehiculos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VehiculoWithCliente>>> {
    Ok(Json(state.vehiculos.list_vehiculos().await?))
}

/// Create a vehiculo
#[utoipa::path(
    post,
    path = "/vehiculos",
    tag = "Vehiculos",
    security(("bearer_auth" = [])),
    request_body = VehiculoRequest,
    responses(
        (status = 201, description = "Vehiculo created", body = Vehiculo),
        (status = 409, description = "Placa already registered"),
        (status = 422, description = "Validation error or unknown cliente")
    )
)]
pub async fn create_vehiculo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VehiculoRequest>,
) -> AppResult<(StatusCode, Json<Vehiculo>)> {
    let vehiculo = state.vehiculos.create_vehiculo(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(vehiculo)))
}

/// Show a vehiculo with its owner
#[utoipa::path(
    get,
    path = "/vehiculos/{id}",
    tag = "Vehiculos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    responses(
        (status = 200, description = "Vehiculo found", body = VehiculoWithCliente),
        (status = 404, description = "Vehiculo not found")
    )
)]
pub async fn get_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VehiculoWithCliente>> {
    Ok(Json(state.vehiculos.get_vehiculo(id).await?))
}

/// Update a vehiculo
#[utoipa::path(
    put,
    path = "/vehiculos/{id}",
    tag = "Vehiculos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    request_body = VehiculoRequest,
    responses(
        (status = 200, description = "Vehiculo updated", body = Vehiculo),
        (status = 404, description = "Vehiculo not found"),
        (status = 409, description = "Placa already registered"),
        (status = 422, description = "Validation error or unknown cliente")
    )
)]
pub async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<VehiculoRequest>,
) -> AppResult<Json<Vehiculo>> {
    Ok(Json(
        state.vehiculos.update_vehiculo(id, payload.into()).await?,
    ))
}

/// Delete a vehiculo
#[utoipa::path(
    delete,
    path = "/vehiculos/{id}",
    tag = "Vehiculos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    responses(
        (status = 200, description = "Vehiculo deleted", body = MessageResponse),
        (status = 404, description = "Vehiculo not found")
    )
)]
pub async fn delete_vehiculo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.vehiculos.delete_vehiculo(id).await?;
    tracing::info!(
        operator_id = %user.id,
        operator = %user.email,
        vehiculo_id = %id,
        "Vehiculo removed"
    );

    Ok(Json(MessageResponse::new("Vehículo eliminado correctamente")))
}
