//! Modelo de Vehicle
//!
//! Registro inmutable del catálogo de alquiler. Los valores se cargan una
//! sola vez al arrancar y nunca se modifican.

use serde::{Deserialize, Serialize};

/// Categoría del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Electric,
    Sports,
    Suv,
    Luxury,
    Economy,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Electric => "electric",
            VehicleCategory::Sports => "sports",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Economy => "economy",
        }
    }

    /// Etiqueta para las tarjetas ("SUV", "Electric", ...)
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Electric => "Electric",
            VehicleCategory::Sports => "Sports",
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Luxury => "Luxury",
            VehicleCategory::Economy => "Economy",
        }
    }

    /// Comparación sin distinguir mayúsculas
    pub fn matches(&self, value: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(value)
    }
}

/// Tipo de transmisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransmissionType {
    Automatic,
    Manual,
}

impl TransmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransmissionType::Automatic => "automatic",
            TransmissionType::Manual => "manual",
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(value)
    }
}

/// Vehículo del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u32,
    pub name: String,
    pub category: VehicleCategory,
    pub transmission_type: TransmissionType,
    pub passenger_capacity: u32,
    pub price_per_day: f64,
    #[serde(default)]
    pub feature_tags: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    pub rating_score: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl VehicleRecord {
    pub fn has_feature(&self, tag: &str) -> bool {
        self.feature_tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matches_ignores_case() {
        assert!(VehicleCategory::Sports.matches("SPORTS"));
        assert!(VehicleCategory::Suv.matches("Suv"));
        assert!(!VehicleCategory::Suv.matches("luxury"));
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: VehicleRecord = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "Fiat 500",
            "category": "economy",
            "transmission_type": "manual",
            "passenger_capacity": 4,
            "price_per_day": 39,
            "rating_score": 4.1
        }))
        .unwrap();

        assert!(record.is_available);
        assert_eq!(record.review_count, 0);
        assert!(record.feature_tags.is_empty());
        assert_eq!(record.category, VehicleCategory::Economy);
    }
}
