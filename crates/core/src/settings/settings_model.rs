use serde::{Deserialize, Serialize};

/// A named boolean configuration value.
///
/// Rows are seeded by migrations; the application only ever overwrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub key: String,
    pub value: bool,
}

/// Public view of the censorship flag, as read by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CensorshipStatus {
    pub censor_bad_vibes: bool,
}
