//! Choosing how marked spans are treated.
//!
//! The sanitizer only understands [`PrivacyMode`]. Build profiles and the
//! "allow private data" toggle belong to the caller and are folded into a mode
//! with [`PrivacyMode::for_build`].

/// Runtime policy for marked spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrivacyMode {
    /// Marked spans are dropped along with their markers.
    Reveal,
    /// Marked spans are replaced with [`crate::REDACTED_PLACEHOLDER`].
    #[default]
    Redact,
}

/// The kind of build the host application was deployed as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuildProfile {
    Development,
    #[default]
    Production,
}

impl PrivacyMode {
    /// Selects the mode for a build profile.
    ///
    /// Production builds always redact. Development builds reveal only when the
    /// caller opted in with `allow_private_data`.
    #[must_use]
    pub fn for_build(profile: BuildProfile, allow_private_data: bool) -> Self {
        match (profile, allow_private_data) {
            (BuildProfile::Development, true) => PrivacyMode::Reveal,
            (BuildProfile::Development, false) | (BuildProfile::Production, _) => {
                PrivacyMode::Redact
            }
        }
    }
}
