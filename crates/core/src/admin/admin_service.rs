use std::sync::Arc;

use log::warn;

use super::AdminSecret;
use crate::errors::{Error, Result, ValidationError};
use crate::settings::SettingsServiceTrait;

/// Credential check in front of the censorship flag.
///
/// No rate limiting, lockout or audit trail: a bare shared-secret check.
pub struct AdminService {
    secret: Option<AdminSecret>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl AdminService {
    pub fn new(secret: Option<AdminSecret>, settings_service: Arc<dyn SettingsServiceTrait>) -> Self {
        AdminService {
            secret,
            settings_service,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks, in order: secret configured, password matches, `new_state`
    /// present. Then overwrites the flag and returns the stored value.
    ///
    /// `new_state` is `None` when the request carried something other than
    /// a boolean.
    pub async fn toggle_censorship(&self, password: &str, new_state: Option<bool>) -> Result<bool> {
        let secret = self.secret.as_ref().ok_or_else(|| {
            warn!("ADMIN_PASSWORD is not set; refusing censorship toggle");
            Error::AdminSecretMissing
        })?;

        if !secret.verify(password) {
            return Err(Error::Unauthorized);
        }

        let new_state = new_state.ok_or_else(|| {
            ValidationError::InvalidInput("Invalid newState provided".to_string())
        })?;

        self.settings_service.set_censorship(new_state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct FlagSettings {
        enabled: AtomicBool,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl SettingsServiceTrait for FlagSettings {
        fn is_censorship_enabled(&self) -> Result<bool> {
            Ok(self.enabled.load(Ordering::SeqCst))
        }

        async fn set_censorship(&self, enabled: bool) -> Result<bool> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.enabled.store(enabled, Ordering::SeqCst);
            Ok(enabled)
        }
    }

    fn service(secret: Option<&str>) -> (AdminService, Arc<FlagSettings>) {
        let settings = Arc::new(FlagSettings::default());
        let service = AdminService::new(secret.and_then(AdminSecret::new), settings.clone());
        (service, settings)
    }

    #[tokio::test]
    async fn test_correct_secret_sets_flag() {
        let (service, settings) = service(Some("letmein"));

        assert!(service.toggle_censorship("letmein", Some(true)).await.unwrap());
        assert!(settings.enabled.load(Ordering::SeqCst));

        assert!(!service.toggle_censorship("letmein", Some(false)).await.unwrap());
        assert!(!settings.enabled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_wrong_secret_is_unauthorized() {
        let (service, settings) = service(Some("letmein"));

        let err = service.toggle_censorship("guess", Some(true)).await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized));
        assert_eq!(settings.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_authorization_checked_before_payload() {
        let (service, _) = service(Some("letmein"));

        let err = service.toggle_censorship("guess", None).await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized));

        let err = service.toggle_censorship("letmein", None).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Invalid newState provided");
    }

    #[tokio::test]
    async fn test_missing_secret_is_a_configuration_error() {
        let (service, settings) = service(None);
        assert!(!service.is_configured());

        let err = service.toggle_censorship("", Some(true)).await.unwrap_err();
        assert!(matches!(err, Error::AdminSecretMissing));
        assert_eq!(settings.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_toggle_is_idempotent() {
        let (service, settings) = service(Some("letmein"));

        for _ in 0..3 {
            assert!(service.toggle_censorship("letmein", Some(true)).await.unwrap());
        }
        assert!(settings.enabled.load(Ordering::SeqCst));
    }
}
