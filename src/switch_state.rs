use tracing::debug;

use crate::element::ElementHandle;

/// Attached-data key under which a switch button stores its current value.
pub const VALUE_KEY: &str = "value";

/// Represents the state of a switch button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    /// Returns the opposite state for toggling
    pub fn toggle(self) -> SwitchState {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::On,
        }
    }

    /// Index into a `StatePair`: 0 for off, 1 for on.
    pub fn index(self) -> usize {
        match self {
            SwitchState::Off => 0,
            SwitchState::On => 1,
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, SwitchState::On)
    }

    /// Reads the state stored on an element's attached data.
    ///
    /// A freshly rendered button carries no stored value yet; that reads
    /// as `Off`, matching the markup the host renders for an unset switch.
    pub fn read_from(element: &impl ElementHandle) -> SwitchState {
        let state = SwitchState::from(element.data(VALUE_KEY).unwrap_or(false));
        debug!("Read state for '{}': {:?}", element.id(), state);
        state
    }

    /// Stores the state on an element's attached data.
    pub fn store_on(self, element: &mut impl ElementHandle) {
        debug!("Storing state for '{}': {:?}", element.id(), self);
        element.set_data(VALUE_KEY, self.is_on());
    }
}

impl From<bool> for SwitchState {
    fn from(value: bool) -> Self {
        if value {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }
}

impl From<SwitchState> for bool {
    fn from(state: SwitchState) -> Self {
        state.is_on()
    }
}
