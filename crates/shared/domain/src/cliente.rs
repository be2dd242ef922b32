//! Cliente (workshop customer) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dni::DniCode;
use crate::vehiculo::Vehiculo;

/// A workshop customer. `dni` is always stored in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Cliente {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    #[cfg_attr(feature = "openapi", schema(example = "12345678Z"))]
    pub dni: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cliente {
    /// Create a new cliente from validated input.
    pub fn new(data: ClienteData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nombre: data.nombre,
            email: data.email,
            telefono: data.telefono,
            dni: data.dni.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every writable field.
    pub fn apply(&mut self, data: ClienteData) {
        self.nombre = data.nombre;
        self.email = data.email;
        self.telefono = data.telefono;
        self.dni = data.dni.to_string();
        self.updated_at = Utc::now();
    }
}

/// Writable cliente fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ClienteData {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub dni: DniCode,
}

/// A cliente together with the vehiculos it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClienteWithVehiculos {
    #[serde(flatten)]
    pub cliente: Cliente,
    pub vehiculos: Vec<Vehiculo>,
}
