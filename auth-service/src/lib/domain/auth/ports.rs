use async_trait::async_trait;

use super::models::User;

/// Port for the external user store.
#[async_trait]
pub trait UserGateway: Send + Sync + 'static {
    /// Find the active user matching the document exactly as given.
    ///
    /// The document arrives with its original punctuation; normalization
    /// or masking is the gateway's concern, not the caller's.
    ///
    /// # Returns
    /// The user if one exists and is active, None otherwise
    ///
    /// # Errors
    /// Returns error string if the store cannot be queried
    async fn find_active_user(&self, document: &str) -> Result<Option<User>, String>;
}
