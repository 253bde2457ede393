use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::{DEMO_DISPLAY_NAME, DEMO_EMAIL, DEMO_PASSWORD, SESSION_KEY};
use crate::errors::{Error, Result};
use crate::session::session_traits::SessionServiceTrait;
use crate::store::StoreRepositoryTrait;

/// Display profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
}

/// Session service over the injected store.
///
/// Credentials are a verbatim compare against the bundled demo account; this
/// is deliberately not an authentication system.
pub struct SessionService {
    store: Arc<dyn StoreRepositoryTrait>,
}

impl SessionService {
    pub fn new(store: Arc<dyn StoreRepositoryTrait>) -> Self {
        SessionService { store }
    }

    fn demo_profile() -> UserProfile {
        UserProfile {
            email: DEMO_EMAIL.to_string(),
            display_name: DEMO_DISPLAY_NAME.to_string(),
        }
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    fn current_user(&self) -> Result<Option<UserProfile>> {
        let raw = match self.store.get_entry(SESSION_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let profile = serde_json::from_str(&raw)?;
        Ok(Some(profile))
    }

    async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            debug!("Rejected login attempt for '{email}'");
            return Err(Error::InvalidCredentials);
        }

        let profile = Self::demo_profile();
        let payload = serde_json::to_string(&profile)?;
        self.store.put_entry(SESSION_KEY, &payload).await?;
        info!("Session opened for {}", profile.email);
        Ok(profile)
    }

    async fn logout(&self) -> Result<()> {
        // Not scoped to the session entry: logout erases all persisted state.
        self.store.clear_all().await?;
        info!("Session closed, store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAVED_MEALS_KEY;
    use crate::store::MemoryStoreRepository;

    fn service() -> (Arc<MemoryStoreRepository>, SessionService) {
        let store = Arc::new(MemoryStoreRepository::new());
        let service = SessionService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_login_with_demo_credentials_persists_session() {
        let (_, service) = service();
        let profile = service.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(profile.display_name, DEMO_DISPLAY_NAME);

        let current = service.current_user().unwrap();
        assert_eq!(current, Some(profile));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let (_, service) = service();
        let err = service.login(DEMO_EMAIL, "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(service.current_user().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let (_, service) = service();
        let err = service.login("nobody@example.com", DEMO_PASSWORD).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let (store, service) = service();
        service.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.put_entry(SAVED_MEALS_KEY, "[]").await.unwrap();

        service.logout().await.unwrap();

        assert!(service.current_user().unwrap().is_none());
        assert!(store.get_entry(SAVED_MEALS_KEY).unwrap().is_none());
    }
}
