//! Vehiculo (customer vehicle) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cliente::Cliente;

/// A vehicle owned by a cliente. `placa` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Vehiculo {
    pub id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    #[cfg_attr(feature = "openapi", schema(example = "1234-BCD"))]
    pub placa: String,
    /// Model year
    #[serde(alias = "año")]
    pub anio: i32,
    pub kilometraje: i32,
    pub cliente_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehiculo {
    pub fn new(data: VehiculoData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            marca: data.marca,
            modelo: data.modelo,
            color: data.color,
            placa: data.placa,
            anio: data.anio,
            kilometraje: data.kilometraje,
            cliente_id: data.cliente_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, data: VehiculoData) {
        self.marca = data.marca;
        self.modelo = data.modelo;
        self.color = data.color;
        self.placa = data.placa;
        self.anio = data.anio;
        self.kilometraje = data.kilometraje;
        self.cliente_id = data.cliente_id;
        self.updated_at = Utc::now();
    }
}

/// Writable vehiculo fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiculoData {
    pub marca: String,
    pub modelo: String,
    pub color: String,
    pub placa: String,
    #[serde(alias = "año")]
    pub anio: i32,
    pub kilometraje: i32,
    pub cliente_id: Uuid,
}

/// A vehiculo with its owner, when the owner still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VehiculoWithCliente {
    #[serde(flatten)]
    pub vehiculo: Vehiculo,
    pub cliente: Option<Cliente>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_anio_alias() {
        let raw = serde_json::json!({
            "marca": "Toyota",
            "modelo": "Corolla",
            "color": "red",
            "placa": "1234-BCD",
            "año": 2015,
            "kilometraje": 120000,
            "cliente_id": Uuid::nil(),
        });
        let data: VehiculoData = serde_json::from_value(raw).unwrap();

        assert_eq!(data.anio, 2015);
    }

    #[test]
    fn apply_keeps_identity() {
        let data = VehiculoData {
            marca: "Honda".to_string(),
            modelo: "Civic".to_string(),
            color: "blue".to_string(),
            placa: "0001-B".to_string(),
            anio: 2010,
            kilometraje: 0,
            cliente_id: Uuid::new_v4(),
        };
        let mut vehiculo = Vehiculo::new(data.clone());
        let id = vehiculo.id;
        vehiculo.apply(VehiculoData {
            kilometraje: 5000,
            ..data
        });

        assert_eq!(vehiculo.id, id);
        assert_eq!(vehiculo.kilometraje, 5000);
    }
}
