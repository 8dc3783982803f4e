use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::fixtures::{self, ADMIN_EMAIL};
use crate::persistence::{persist_state, restore_state, StateStorage, AUTH_STORAGE_KEY};
use crate::remote::{RemoteGateway, Resource};

use super::errors::SessionError;
use super::value_objects::{User, UserRole};

// ============================================================================
// Session Store - Sign-In State
// ============================================================================
//
// Tracks who is signed in and mirrors that into storage under `auth-storage`,
// so a restart resumes the session. Credential checks live in the backend;
// the mock gateway accepts everything and the account is resolved locally:
// the admin address maps to the admin account, anything else to the demo
// student.
//
// ============================================================================

/// The persisted shape under `auth-storage`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SessionState {
    user: Option<User>,
    is_authenticated: bool,
}

pub struct SessionStore {
    state: SessionState,
    storage: Arc<dyn StateStorage>,
    gateway: Arc<dyn RemoteGateway>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StateStorage>, gateway: Arc<dyn RemoteGateway>) -> Self {
        let state: SessionState =
            restore_state(storage.as_ref(), AUTH_STORAGE_KEY).unwrap_or_default();
        if let Some(ref user) = state.user {
            tracing::info!(user_id = %user.id, email = %user.email, "Restored session from storage");
        }
        Self {
            state,
            storage,
            gateway,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated && self.state.user.is_some()
    }

    // ------------------------------------------------------------------------
    // Sign-in lifecycle
    // ------------------------------------------------------------------------

    /// Authenticate against the backend and open a session. The mock backend
    /// ignores the password entirely.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<User, SessionError> {
        self.gateway
            .create(Resource::Sessions, json!({ "email": email }))
            .await?;

        let user = if email == ADMIN_EMAIL {
            fixtures::admin_user()
        } else {
            fixtures::student_user(email)
        };

        tracing::info!(user_id = %user.id, email = %user.email, role = %user.role, "User signed in");
        self.state = SessionState {
            user: Some(user.clone()),
            is_authenticated: true,
        };
        self.persist();
        Ok(user)
    }

    /// Create an account and open a session for it. `canteen_id` is kept for
    /// admins and ignored for students.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        role: UserRole,
        canteen_id: Option<Uuid>,
    ) -> Result<User, SessionError> {
        self.gateway
            .create(
                Resource::Users,
                json!({ "name": name, "email": email, "role": role }),
            )
            .await?;

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            canteen_id: match role {
                UserRole::Admin => canteen_id,
                UserRole::Student => None,
            },
        };

        tracing::info!(user_id = %user.id, email = %user.email, role = %user.role, "User registered");
        self.state = SessionState {
            user: Some(user.clone()),
            is_authenticated: true,
        };
        self.persist();
        Ok(user)
    }

    /// Close the session locally. No backend call involved.
    pub fn logout(&mut self) {
        if let Some(ref user) = self.state.user {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        self.state = SessionState::default();
        self.persist();
    }

    fn persist(&self) {
        if let Err(error) = persist_state(self.storage.as_ref(), AUTH_STORAGE_KEY, &self.state) {
            tracing::error!(%error, "Failed to persist session state");
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::remote::{GatewayError, MockGateway};

    fn collaborators() -> (Arc<MemoryStorage>, Arc<MockGateway>) {
        (Arc::new(MemoryStorage::new()), Arc::new(MockGateway::instant()))
    }

    fn session(storage: Arc<MemoryStorage>, gateway: Arc<MockGateway>) -> SessionStore {
        SessionStore::new(storage, gateway)
    }

    #[tokio::test]
    async fn test_admin_email_resolves_admin_account() {
        let (storage, gateway) = collaborators();
        let mut store = session(storage, gateway);

        let user = store.login(ADMIN_EMAIL, "secret").await.unwrap();

        assert!(user.is_admin());
        assert_eq!(user.canteen_id, Some(fixtures::CENTRAL_CANTEEN_ID));
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_other_emails_resolve_the_demo_student() {
        let (storage, gateway) = collaborators();
        let mut store = session(storage, gateway);

        let user = store.login("priya@campus.edu", "secret").await.unwrap();

        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.email, "priya@campus.edu");
        assert_eq!(user.canteen_id, None);
    }

    #[tokio::test]
    async fn test_register_keeps_canteen_for_admins_only() {
        let (storage, gateway) = collaborators();
        let mut store = session(Arc::clone(&storage), Arc::clone(&gateway));

        let canteen = Some(fixtures::NORTH_BLOCK_CAFE_ID);

        let student = store
            .register("Ravi", "ravi@campus.edu", "pw", UserRole::Student, canteen)
            .await
            .unwrap();
        assert_eq!(student.canteen_id, None);

        let admin = store
            .register("Meena", "meena@canteenq.com", "pw", UserRole::Admin, canteen)
            .await
            .unwrap();
        assert_eq!(admin.canteen_id, canteen);
    }

    #[tokio::test]
    async fn test_session_survives_store_recreation() {
        let (storage, gateway) = collaborators();

        let mut store = session(Arc::clone(&storage), Arc::clone(&gateway));
        store.login("priya@campus.edu", "secret").await.unwrap();
        drop(store);

        let restored = session(storage, gateway);
        assert!(restored.is_authenticated());
        assert_eq!(
            restored.current_user().map(|u| u.email.as_str()),
            Some("priya@campus.edu")
        );
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_session() {
        let (storage, gateway) = collaborators();

        let mut store = session(Arc::clone(&storage), Arc::clone(&gateway));
        store.login("priya@campus.edu", "secret").await.unwrap();
        store.logout();
        drop(store);

        let restored = session(storage, gateway);
        assert!(!restored.is_authenticated());
        assert!(restored.current_user().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_closed() {
        let (storage, gateway) = collaborators();
        gateway.fail_next(GatewayError::Unavailable("backend down".to_string()));
        let mut store = session(storage, gateway);

        let result = store.login("priya@campus.edu", "secret").await;

        assert!(matches!(result, Err(SessionError::Gateway(_))));
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_session_closed() {
        let (storage, gateway) = collaborators();
        gateway.fail_next(GatewayError::Unavailable("backend down".to_string()));
        let mut store = session(Arc::clone(&storage), gateway);

        let result = store
            .register("Ravi", "ravi@campus.edu", "pw", UserRole::Student, None)
            .await;

        assert!(matches!(result, Err(SessionError::Gateway(_))));
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(storage.get(AUTH_STORAGE_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_auth_blob_wire_shape() {
        let (storage, gateway) = collaborators();
        let mut store = session(Arc::clone(&storage), gateway);
        store.login(ADMIN_EMAIL, "secret").await.unwrap();

        let blob = storage.get(AUTH_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["state"]["user"]["email"], ADMIN_EMAIL);
        assert_eq!(value["state"]["user"]["role"], "admin");
    }
}
