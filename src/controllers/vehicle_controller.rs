use std::sync::Arc;

use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{FeatureVocabularyResponse, SearchResponse, VehicleResponse};
use crate::models::search::SearchCriteria;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::filter_engine::filter_vehicles;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    catalog: Arc<VehicleRepository>,
}

impl VehicleController {
    pub fn new(catalog: Arc<VehicleRepository>) -> Self {
        Self { catalog }
    }

    /// Catálogo completo en orden de carga
    pub fn list(&self) -> ApiResponse<Vec<VehicleResponse>> {
        let vehicles: Vec<VehicleResponse> = self.catalog.all().iter().map(VehicleResponse::from).collect();
        ApiResponse::success_with_message(
            vehicles,
            format!("{} vehículos en el catálogo", self.catalog.len()),
        )
    }

    pub fn get_by_id(&self, id: u32) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(ApiResponse::success(VehicleResponse::from(vehicle)))
    }

    pub fn search(&self, criteria: &SearchCriteria) -> ApiResponse<SearchResponse> {
        debug!("🔎 Criterios de búsqueda: {:?}", criteria);

        let outcome = filter_vehicles(self.catalog.all(), criteria);
        info!(
            "🔎 Búsqueda: {} filtros aplicados, {} de {} vehículos",
            outcome.applied.len(),
            outcome.count,
            self.catalog.len()
        );

        let message = format!("{} vehicles found", outcome.count);
        ApiResponse::success_with_message(SearchResponse::from_outcome(outcome, criteria), message)
    }

    pub fn features(&self) -> ApiResponse<FeatureVocabularyResponse> {
        let features = self
            .catalog
            .feature_vocabulary()
            .into_iter()
            .map(str::to_string)
            .collect();

        ApiResponse::success(FeatureVocabularyResponse { features })
    }
}
