//! Motor de filtrado del catálogo
//!
//! Función pura: recorre el catálogo una vez y conserva, en el mismo orden,
//! los vehículos que cumplen todos los predicados activos. Un criterio sin
//! valor no participa en la conjunción. La ubicación y las fechas se aceptan
//! pero nunca se evalúan.

use serde::Serialize;

use crate::models::search::SearchCriteria;
use crate::models::vehicle::VehicleRecord;

/// Predicado derivado de un campo de los criterios
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "predicate", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    VehicleType(String),
    Transmission(String),
    MinPassengers(u32),
    MaxPricePerDay(f64),
    RequiredFeatures(Vec<String>),
}

impl Predicate {
    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        match self {
            Predicate::VehicleType(value) => vehicle.category.matches(value),
            Predicate::Transmission(value) => vehicle.transmission_type.matches(value),
            Predicate::MinPassengers(min) => vehicle.passenger_capacity >= *min,
            Predicate::MaxPricePerDay(max) => vehicle.price_per_day <= *max,
            Predicate::RequiredFeatures(tags) => tags.iter().all(|tag| vehicle.has_feature(tag)),
        }
    }
}

/// Resultado de una búsqueda: subconjunto ordenado del catálogo
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub vehicles: Vec<&'a VehicleRecord>,
    pub count: usize,
    pub applied: Vec<Predicate>,
}

/// Predicados activos para unos criterios. El de precio siempre está.
pub fn active_predicates(criteria: &SearchCriteria) -> Vec<Predicate> {
    let mut predicates = Vec::with_capacity(5);

    if let Some(value) = non_blank(criteria.vehicle_type.as_deref()) {
        predicates.push(Predicate::VehicleType(value.to_string()));
    }
    if let Some(value) = non_blank(criteria.transmission.as_deref()) {
        predicates.push(Predicate::Transmission(value.to_string()));
    }
    if let Some(min) = criteria.min_passengers {
        predicates.push(Predicate::MinPassengers(min));
    }
    predicates.push(Predicate::MaxPricePerDay(criteria.max_price_per_day));
    if !criteria.required_features.is_empty() {
        predicates.push(Predicate::RequiredFeatures(criteria.required_features.clone()));
    }

    predicates
}

pub fn matches_all(vehicle: &VehicleRecord, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| p.matches(vehicle))
}

/// Filtra el catálogo con los criterios dados
pub fn filter_vehicles<'a>(catalog: &'a [VehicleRecord], criteria: &SearchCriteria) -> FilterOutcome<'a> {
    let applied = active_predicates(criteria);
    let vehicles: Vec<&VehicleRecord> = catalog
        .iter()
        .filter(|vehicle| matches_all(vehicle, &applied))
        .collect();

    FilterOutcome {
        count: vehicles.len(),
        vehicles,
        applied,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
