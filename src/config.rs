use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::switch_state::SwitchState;

/// An ordered (off, on) pair for one visual axis of a switch button.
///
/// The struct shape enforces the two-entry invariant; there is no way to
/// hand `apply_state` a pair of the wrong arity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatePair {
    pub off: String,
    pub on: String,
}

impl StatePair {
    pub fn new(off: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            off: off.into(),
            on: on.into(),
        }
    }

    /// Value for the given state.
    pub fn get(&self, state: SwitchState) -> &str {
        match state {
            SwitchState::Off => &self.off,
            SwitchState::On => &self.on,
        }
    }

    /// Parses a comma-joined pair spec in "on,off" order, e.g.
    /// `"toggle-on,toggle-off"` or `"success,danger"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [on, off] if !on.is_empty() && !off.is_empty() => Ok(Self::new(*off, *on)),
            _ => bail!("pair spec must hold exactly two values, got {:?}", spec),
        }
    }
}

/// Visual configuration for a switch button: one (off, on) pair per axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwitchConfig {
    #[serde(default = "default_colors")]
    pub colors: StatePair,
    #[serde(default = "default_icons")]
    pub icons: StatePair,
    #[serde(default = "default_labels")]
    pub labels: StatePair,
}

fn default_colors() -> StatePair {
    StatePair::new("danger", "success")
}

fn default_icons() -> StatePair {
    StatePair::new("toggle-off", "toggle-on")
}

fn default_labels() -> StatePair {
    StatePair::new("Off", "On")
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            icons: default_icons(),
            labels: default_labels(),
        }
    }
}

impl SwitchConfig {
    pub fn new(colors: StatePair, icons: StatePair, labels: StatePair) -> Self {
        Self {
            colors,
            icons,
            labels,
        }
    }

    /// Color CSS class for the given state, e.g. `text-success`.
    pub fn color_class(&self, state: SwitchState) -> String {
        format!("text-{}", self.colors.get(state))
    }

    /// Icon CSS class for the given state, e.g. `fa-toggle-on`.
    pub fn icon_class(&self, state: SwitchState) -> String {
        format!("fa-{}", self.icons.get(state))
    }

    /// Label text for the given state.
    pub fn label(&self, state: SwitchState) -> &str {
        self.labels.get(state)
    }
}

pub fn load_config(yaml: &str) -> Result<SwitchConfig> {
    let config: SwitchConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}
