//! Match settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{MatchController, PLAYER_ONE, PLAYER_TWO};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Player names for a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Name of the player who moves first (plays X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the player who moves second (plays O).
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    PLAYER_TWO.to_string()
}

impl MatchSettings {
    /// Creates settings with the given names.
    #[instrument(skip(player_one, player_two))]
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(
            player_one = %settings.player_one,
            player_two = %settings.player_two,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!(path = %path.as_ref().display(), "Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces whichever names are given.
    ///
    /// # Errors
    ///
    /// Fails if the result leaves both players with the same name.
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Result<Self, SettingsError> {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(SettingsError::new("Player names cannot be blank"));
        }
        if self.player_one == self.player_two {
            return Err(SettingsError::new(format!(
                "Both players are named {:?}",
                self.player_one
            )));
        }
        Ok(())
    }

    /// Builds a fresh match for these players.
    pub fn controller(&self) -> MatchController {
        MatchController::with_names(self.player_one.clone(), self.player_two.clone())
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self::new(PLAYER_ONE, PLAYER_TWO)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
