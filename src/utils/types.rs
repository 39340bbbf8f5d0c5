use super::error::{ModalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Where the container sits inside the overlay.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalPosition {
    #[default]
    Center,
    Bottom,
}

impl ModalPosition {
    pub fn all() -> Vec<ModalPosition> {
        vec![ModalPosition::Center, ModalPosition::Bottom]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalPosition::Center => "center",
            ModalPosition::Bottom => "bottom",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModalPosition::Center => "Center",
            ModalPosition::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for ModalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalPosition {
    type Err = ModalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "center" => Ok(ModalPosition::Center),
            "bottom" => Ok(ModalPosition::Bottom),
            other => Err(ModalError::UnknownPosition(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Small,
    Medium,
    Large,
}

impl ModalSize {
    pub fn all() -> Vec<ModalSize> {
        vec![ModalSize::Small, ModalSize::Medium, ModalSize::Large]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalSize::Small => "small",
            ModalSize::Medium => "medium",
            ModalSize::Large => "large",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModalSize::Small => "Small",
            ModalSize::Medium => "Medium",
            ModalSize::Large => "Large",
        }
    }

    /// Container width applied by the bundled stylesheet.
    pub fn width_px(&self) -> u32 {
        match self {
            ModalSize::Small => 320,
            ModalSize::Medium => 480,
            ModalSize::Large => 600,
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalSize {
    type Err = ModalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(ModalSize::Small),
            "medium" => Ok(ModalSize::Medium),
            "large" => Ok(ModalSize::Large),
            other => Err(ModalError::UnknownSize(other.to_string())),
        }
    }
}

/// Serializable part of the modal props. Content, footer and the close
/// handler are supplied by the host at render time.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModalConfig {
    #[serde(default)]
    pub position: ModalPosition,
    pub size: ModalSize,
    pub title: String,
    #[serde(default = "default_has_close_button")]
    pub has_close_button: bool,
}

fn default_has_close_button() -> bool {
    true
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            position: ModalPosition::Center,
            size: ModalSize::Medium,
            title: "Hello".to_string(),
            has_close_button: true,
        }
    }
}

impl ModalConfig {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModalError::EmptyTitle);
        }
        Ok(())
    }
}

/// Element ids of one mounted modal. The aria bindings point at these.
#[derive(Clone, PartialEq, Debug)]
pub struct ModalIds {
    pub title: String,
    pub content: String,
    pub container: String,
}

impl ModalIds {
    pub fn new() -> Self {
        Self::with_suffix(&Uuid::new_v4().simple().to_string())
    }

    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            title: format!("modal-title-{suffix}"),
            content: format!("modal-content-{suffix}"),
            container: format!("modal-container-{suffix}"),
        }
    }
}

impl Default for ModalIds {
    fn default() -> Self {
        Self::new()
    }
}
