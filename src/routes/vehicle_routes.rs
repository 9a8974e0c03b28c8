use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{FeatureVocabularyResponse, SearchResponse, VehicleResponse};
use crate::models::search::{SearchCriteria, SearchQueryParams};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/features", get(list_features))
        .route("/search", get(search_vehicles_query).post(search_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<ApiResponse<Vec<VehicleResponse>>> {
    let controller = VehicleController::new(state.catalog.clone());
    Json(controller.list())
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let Path(id) = id?;
    let controller = VehicleController::new(state.catalog.clone());
    let response = controller.get_by_id(id)?;
    Ok(Json(response))
}

async fn search_vehicles(
    State(state): State<AppState>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Result<Json<ApiResponse<SearchResponse>>, AppError> {
    let Json(criteria) = payload?;
    let controller = VehicleController::new(state.catalog.clone());
    Ok(Json(controller.search(&criteria)))
}

async fn search_vehicles_query(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ApiResponse<SearchResponse>>, AppError> {
    let Query(pairs) = query?;
    let criteria = SearchCriteria::from(SearchQueryParams::from_pairs(pairs));
    let controller = VehicleController::new(state.catalog.clone());
    Ok(Json(controller.search(&criteria)))
}

async fn list_features(State(state): State<AppState>) -> Json<ApiResponse<FeatureVocabularyResponse>> {
    let controller = VehicleController::new(state.catalog.clone());
    Json(controller.features())
}
