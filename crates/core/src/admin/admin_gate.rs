use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Body of a censorship toggle request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CensorshipToggle {
    pub password: String,
    pub new_state: bool,
}

/// Client-side "logged in" state of the admin panel.
///
/// Any non-empty password unlocks the toggle control. Nothing is verified
/// here: the password is only remembered so it can accompany each toggle
/// request, and the server checks it every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    LoggedOut,
    LoggedIn { password: String },
}

impl AdminGate {
    pub fn login(&mut self, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(ValidationError::MissingField("Please enter a password.".to_string()).into());
        }
        *self = AdminGate::LoggedIn {
            password: password.to_string(),
        };
        Ok(())
    }

    pub fn logout(&mut self) {
        *self = AdminGate::LoggedOut;
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, AdminGate::LoggedIn { .. })
    }

    /// Request that flips the flag from `current`, if the control is unlocked.
    pub fn toggle_request(&self, current: bool) -> Option<CensorshipToggle> {
        match self {
            AdminGate::LoggedIn { password } => Some(CensorshipToggle {
                password: password.clone(),
                new_state: !current,
            }),
            AdminGate::LoggedOut => None,
        }
    }
}
