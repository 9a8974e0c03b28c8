//! Catálogo de vehículos
//!
//! Secuencia ordenada e inmutable de `VehicleRecord`, única por id. Se carga
//! una vez al arrancar (JSON embebido o `CATALOG_PATH`) y después solo se lee.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::vehicle::VehicleRecord;

/// Catálogo por defecto, compilado dentro del binario
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errores de carga del catálogo
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate vehicle id {0}")]
    DuplicateId(u32),

    #[error("Vehicle {id} is invalid: {reason}")]
    InvalidRecord { id: u32, reason: String },
}

#[derive(Debug, Clone)]
pub struct VehicleRepository {
    vehicles: Vec<VehicleRecord>,
}

impl VehicleRepository {
    /// Construye el catálogo validando cada registro
    pub fn from_records(vehicles: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id) {
                return Err(CatalogError::DuplicateId(vehicle.id));
            }
            validate_record(vehicle)?;
        }
        Ok(Self { vehicles })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(raw)?;
        Self::from_records(vehicles)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Carga desde `path` si se indica, si no el catálogo embebido
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        let repository = match path {
            Some(path) => Self::from_path(Path::new(path))?,
            None => Self::builtin()?,
        };
        info!(
            "🚗 Catálogo cargado: {} vehículos ({})",
            repository.len(),
            path.unwrap_or("builtin")
        );
        Ok(repository)
    }

    /// Todos los vehículos en el orden de carga
    pub fn all(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn find_by_id(&self, id: u32) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_available).count()
    }

    /// Vocabulario de características en orden de primera aparición
    pub fn feature_vocabulary(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.vehicles.iter().flat_map(|v| v.feature_tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }
}

fn validate_record(vehicle: &VehicleRecord) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        id: vehicle.id,
        reason: reason.to_string(),
    };

    if vehicle.name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if vehicle.passenger_capacity == 0 {
        return Err(invalid("passenger_capacity must be positive"));
    }
    if !(vehicle.price_per_day.is_finite() && vehicle.price_per_day > 0.0) {
        return Err(invalid("price_per_day must be positive"));
    }
    if !(0.0..=5.0).contains(&vehicle.rating_score) {
        return Err(invalid("rating_score must be between 0 and 5"));
    }
    Ok(())
}
