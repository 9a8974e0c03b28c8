use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub email: String,
    pub subscribers: usize,
}
