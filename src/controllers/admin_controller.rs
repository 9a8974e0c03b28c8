use std::sync::Arc;

use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::models::auth::AdminSession;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::dashboard_service::build_dashboard;
use crate::services::newsletter_service::NewsletterService;

pub struct AdminController {
    catalog: Arc<VehicleRepository>,
    newsletter: Arc<NewsletterService>,
}

impl AdminController {
    pub fn new(catalog: Arc<VehicleRepository>, newsletter: Arc<NewsletterService>) -> Self {
        Self { catalog, newsletter }
    }

    pub async fn dashboard(&self, session: &AdminSession) -> ApiResponse<DashboardResponse> {
        let subscribers = self.newsletter.subscriber_count().await;
        info!("📊 Dashboard solicitado por {}", session.email);

        ApiResponse::success(build_dashboard(&self.catalog, session, subscribers))
    }
}
