use chrono::NaiveDate;
use serde::Serialize;

use crate::models::search::SearchCriteria;
use crate::models::vehicle::VehicleRecord;
use crate::services::filter_engine::{FilterOutcome, Predicate};
use crate::utils::validation::parse_form_date;

// Tarjeta de vehículo tal como la pinta la sección de resultados
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub category_label: String,
    pub price_per_day: f64,
    pub passenger_capacity: u32,
    pub transmission_type: String,
    pub rating_score: f64,
    pub review_count: u32,
    pub is_available: bool,
    pub features: Vec<String>,
    pub image_url: String,
}

impl From<&VehicleRecord> for VehicleResponse {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name.clone(),
            category: vehicle.category.as_str().to_string(),
            category_label: vehicle.category.label().to_string(),
            price_per_day: vehicle.price_per_day,
            passenger_capacity: vehicle.passenger_capacity,
            transmission_type: vehicle.transmission_type.as_str().to_string(),
            rating_score: vehicle.rating_score,
            review_count: vehicle.review_count,
            is_available: vehicle.is_available,
            features: vehicle.feature_tags.clone(),
            image_url: vehicle.image_url.clone(),
        }
    }
}

// Campos informativos recibidos y no aplicados al filtro
#[derive(Debug, Serialize)]
pub struct AdvisoryFields {
    pub location: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub duration: Option<String>,
}

// Response de búsqueda
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub vehicles: Vec<VehicleResponse>,
    pub applied: Vec<Predicate>,
    pub advisory: AdvisoryFields,
}

impl SearchResponse {
    pub fn from_outcome(outcome: FilterOutcome<'_>, criteria: &SearchCriteria) -> Self {
        Self {
            count: outcome.count,
            vehicles: outcome.vehicles.into_iter().map(VehicleResponse::from).collect(),
            applied: outcome.applied,
            advisory: AdvisoryFields {
                location: criteria.location_text.clone(),
                pickup_date: parse_form_date(criteria.pickup_date.as_deref()),
                return_date: parse_form_date(criteria.return_date.as_deref()),
                duration: criteria.duration.clone(),
            },
        }
    }
}

// Vocabulario de características para los checkboxes del formulario
#[derive(Debug, Serialize)]
pub struct FeatureVocabularyResponse {
    pub features: Vec<String>,
}
