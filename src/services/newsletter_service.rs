//! Suscripciones al newsletter del footer
//!
//! Solo en memoria: la lista se pierde al reiniciar el servicio.

use std::collections::BTreeSet;

use tokio::sync::RwLock;
use tracing::info;

use crate::utils::errors::AppError;

#[derive(Default)]
pub struct NewsletterService {
    subscribers: RwLock<BTreeSet<String>>,
}

impl NewsletterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un email ya validado; devuelve `Conflict` si ya estaba
    pub async fn subscribe(&self, email: &str) -> Result<usize, AppError> {
        let email = email.trim().to_lowercase();
        let mut subscribers = self.subscribers.write().await;

        if !subscribers.insert(email.clone()) {
            return Err(AppError::Conflict(format!("{} is already subscribed", email)));
        }

        info!("📬 Nuevo suscriptor: {} (total: {})", email, subscribers.len());
        Ok(subscribers.len())
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}
