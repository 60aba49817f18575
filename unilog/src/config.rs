//! Logger configuration.
//!
//! A [`LoggerConfig`] is built by the caller and handed to a [`crate::Logger`].
//! There is no process-wide default instance.

use crate::privacy::{BuildProfile, PrivacyMode};

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "App";

/// Subsystem and category identifiers attached to every record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    subsystem: String,
    #[cfg_attr(feature = "serde", serde(default = "default_category"))]
    category: String,
}

#[cfg(feature = "serde")]
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Label {
    /// Labels records with `subsystem` and the [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Uses a specific category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Switches to `category`, and to `subsystem` when it is non-empty.
    ///
    /// An empty `category` leaves the label unchanged.
    pub fn set_category(&mut self, category: &str, subsystem: &str) {
        if category.is_empty() {
            return;
        }
        if !subsystem.is_empty() {
            self.subsystem = subsystem.to_string();
        }
        self.category = category.to_string();
    }
}

/// Everything a [`crate::Logger`] needs besides its sink.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    label: Label,
    #[cfg_attr(feature = "serde", serde(default))]
    profile: BuildProfile,
    #[cfg_attr(feature = "serde", serde(default))]
    allow_private_data: bool,
}

impl LoggerConfig {
    /// A production configuration for `subsystem` with the default category.
    #[must_use]
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            label: Label::new(subsystem),
            profile: BuildProfile::Production,
            allow_private_data: false,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.label = self.label.with_category(category);
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Allows marked spans to be revealed in development builds.
    ///
    /// Has no effect on production builds.
    #[must_use]
    pub fn with_private_data(mut self, allow: bool) -> Self {
        self.allow_private_data = allow;
        self
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    #[must_use]
    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    #[must_use]
    pub fn allows_private_data(&self) -> bool {
        self.allow_private_data
    }

    pub(crate) fn set_allow_private_data(&mut self, allow: bool) {
        self.allow_private_data = allow;
    }

    /// The mode messages are sanitized with.
    #[must_use]
    pub fn privacy_mode(&self) -> PrivacyMode {
        PrivacyMode::for_build(self.profile, self.allow_private_data)
    }
}
