use async_trait::async_trait;

use crate::errors::Result;
use crate::session::UserProfile;

/// Trait for session operations.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// The profile of the logged-in user, if any.
    fn current_user(&self) -> Result<Option<UserProfile>>;

    /// Validate credentials and persist the session on success.
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile>;

    /// End the session, wiping the entire persisted store.
    async fn logout(&self) -> Result<()>;
}
