use std::sync::Arc;

use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, SessionResponse};
use crate::models::auth::{AdminSession, Credentials};
use crate::services::auth_service::AuthService;
use crate::utils::errors::AppError;

pub struct AuthController {
    auth: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginResponse>, AppError> {
        request.validate()?;

        let credentials = Credentials::from(request);
        let (access_token, session) = self.auth.sign_in(&credentials).await?;

        let response = LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: (session.expires_at - session.created_at).num_seconds(),
            session: SessionResponse::from(&session),
        };

        Ok(ApiResponse::success_with_message(response, "Login successful".to_string()))
    }

    pub async fn logout(&self, session: &AdminSession) -> Result<ApiResponse<()>, AppError> {
        self.auth.sign_out(&session.session_id).await?;
        Ok(ApiResponse::message("Signed out".to_string()))
    }

    pub fn session(&self, session: &AdminSession) -> ApiResponse<SessionResponse> {
        ApiResponse::success(SessionResponse::from(session))
    }
}
