pub mod api_response;
pub mod auth_dto;
pub mod dashboard_dto;
pub mod newsletter_dto;
pub mod vehicle_dto;
