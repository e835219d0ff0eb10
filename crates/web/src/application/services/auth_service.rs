//! Mock sign-in service
//!
//! No credentials are ever checked against anything. A well-formed login or
//! registration fabricates an [`Identity`] and leaves two markers in storage
//! so the session survives a reload.

use adgorithm_domain::{AuthError, Credentials, Identity, Registration, Role, Session, UserId};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Value stored under `storage_keys::AUTH_TOKEN` while signed in
pub const DUMMY_TOKEN: &str = "dummy_token";

/// Owns session transitions and their persisted markers
#[derive(Clone)]
pub struct AuthService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> AuthService<S> {
    /// Create a new AuthService with the given storage provider
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Rebuild the session from the persisted markers.
    ///
    /// A token yields the demo identity: the submitted name and email are not
    /// persisted, only the role. A missing or unreadable role falls back to
    /// `Brand`.
    pub fn restore(&self) -> Session {
        if self.storage.load(storage_keys::AUTH_TOKEN).is_none() {
            return Session::LoggedOut;
        }

        let role = match self.storage.load(storage_keys::ROLE) {
            Some(tag) => tag.parse::<Role>().unwrap_or_else(|e| {
                tracing::warn!("{}; restoring session as brand", e);
                Role::Brand
            }),
            None => Role::Brand,
        };

        Session::LoggedIn(Identity::demo(role))
    }

    /// Sign in as a brand with any well-formed email and non-empty password
    pub fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.login_as(email, password, Role::Brand)
    }

    /// Sign in with an explicit role (the landing page demo buttons)
    pub fn login_as(&self, email: &str, password: &str, role: Role) -> Result<Identity, AuthError> {
        let credentials = Credentials::new(email, password)?;
        let identity = Identity {
            id: UserId::new(),
            display_name: Identity::DEMO_NAME.to_string(),
            email: credentials.email().to_string(),
            avatar_url: None,
            role,
        };
        self.persist(role);
        tracing::info!(role = %role, "Signed in");
        Ok(identity)
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, AuthError> {
        let registration = Registration::new(name, email, password, role)?;
        let identity = Identity {
            id: UserId::new(),
            display_name: registration.name().to_string(),
            email: registration.email().to_string(),
            avatar_url: None,
            role: registration.role(),
        };
        self.persist(identity.role);
        tracing::info!(role = %identity.role, "Registered");
        Ok(identity)
    }

    /// Forget both markers
    pub fn logout(&self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
        self.storage.remove(storage_keys::ROLE);
        tracing::info!("Signed out");
    }

    fn persist(&self, role: Role) {
        self.storage.save(storage_keys::AUTH_TOKEN, DUMMY_TOKEN);
        self.storage.save(storage_keys::ROLE, role.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Clone, Default)]
    struct MockStorage {
        data: std::sync::Arc<RwLock<HashMap<String, String>>>,
    }

    impl StorageProvider for MockStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().unwrap().get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().unwrap().remove(key);
        }
    }

    #[test]
    fn test_login_accepts_any_well_formed_input() {
        let storage = MockStorage::default();
        let service = AuthService::new(storage.clone());

        let identity = service.login("anything@x.com", "anything").unwrap();

        assert_eq!(identity.display_name, "John Doe");
        assert_eq!(identity.email, "anything@x.com");
        assert_eq!(identity.role, Role::Brand);
        assert_eq!(
            storage.load(storage_keys::AUTH_TOKEN).as_deref(),
            Some("dummy_token")
        );
        assert_eq!(storage.load(storage_keys::ROLE).as_deref(), Some("brand"));
        assert!(service.restore().is_authenticated());
    }

    #[test]
    fn test_login_rejects_malformed_input_without_persisting() {
        let storage = MockStorage::default();
        let service = AuthService::new(storage.clone());

        assert_eq!(
            service.login("nope", "pw"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(storage.load(storage_keys::AUTH_TOKEN), None);
        assert_eq!(service.restore(), Session::LoggedOut);
    }

    #[test]
    fn test_register_copies_submitted_fields() {
        let storage = MockStorage::default();
        let service = AuthService::new(storage.clone());

        let identity = service
            .register("Ada Lovelace", "ada@x.io", "pw", Role::Influencer)
            .unwrap();

        assert_eq!(identity.display_name, "Ada Lovelace");
        assert_eq!(identity.email, "ada@x.io");
        assert_eq!(identity.role, Role::Influencer);
        assert_eq!(
            storage.load(storage_keys::ROLE).as_deref(),
            Some("influencer")
        );
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let service = AuthService::new(MockStorage::default());
        assert!(matches!(
            service.register(" ", "ada@x.io", "pw", Role::Brand),
            Err(AuthError::InvalidRegistration(_))
        ));
    }

    #[test]
    fn test_restore_yields_demo_identity_with_persisted_role() {
        let storage = MockStorage::default();
        AuthService::new(storage.clone())
            .register("Ada Lovelace", "ada@x.io", "pw", Role::Influencer)
            .unwrap();

        // Fresh service, as after a reload
        let restored = AuthService::new(storage).restore();

        assert_eq!(
            restored,
            Session::LoggedIn(Identity::demo(Role::Influencer))
        );
    }

    #[test]
    fn test_restore_defaults_unknown_role_to_brand() {
        let storage = MockStorage::default();
        storage.save(storage_keys::AUTH_TOKEN, DUMMY_TOKEN);
        storage.save(storage_keys::ROLE, "agency");

        let session = AuthService::new(storage.clone()).restore();
        assert_eq!(session.role(), Some(Role::Brand));

        storage.remove(storage_keys::ROLE);
        let session = AuthService::new(storage).restore();
        assert_eq!(session.role(), Some(Role::Brand));
    }

    #[test]
    fn test_role_without_token_is_logged_out() {
        let storage = MockStorage::default();
        storage.save(storage_keys::ROLE, "influencer");

        assert_eq!(AuthService::new(storage).restore(), Session::LoggedOut);
    }

    #[test]
    fn test_logout_removes_markers() {
        let storage = MockStorage::default();
        let service = AuthService::new(storage.clone());
        service.login_as("a@b.co", "pw", Role::Influencer).unwrap();

        service.logout();

        assert_eq!(storage.load(storage_keys::AUTH_TOKEN), None);
        assert_eq!(storage.load(storage_keys::ROLE), None);
        assert_eq!(service.restore(), Session::LoggedOut);
    }
}
