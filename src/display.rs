use tracing::debug;

use crate::config::SwitchConfig;
use crate::element::ElementHandle;
use crate::switch_state::SwitchState;

/// Class carried by the nested label element of a switch button.
pub const LABEL_CLASS: &str = "switch-title";

/// Suffix appended to a derived handler name.
pub const HANDLER_SUFFIX: &str = "_SWITCH";

/// Derives the companion handler name for a button element id.
///
/// Hyphen-separated words become underscore-separated and uppercased, with
/// `_SWITCH` appended: `"debug-switch"` becomes `"DEBUG_SWITCH"`. Ids are
/// not validated; a malformed id simply yields a malformed name.
pub fn derive_handler_name(element_id: &str) -> String {
    let mut name = element_id.replace('-', "_").to_uppercase();
    name.push_str(HANDLER_SUFFIX);
    name
}

/// Updates a switch button's visual attributes to reflect `value`.
///
/// Stores the value as attached data under `"value"`, swaps the color class
/// on the button, swaps the icon class on the nested icon element, and sets
/// the nested label element's text. A missing icon or label sub-element is
/// silently skipped for that step. Applying the same value twice leaves the
/// button in the same observable state as applying it once.
pub fn apply_state(button: &mut impl ElementHandle, value: bool, config: &SwitchConfig) {
    let state = SwitchState::from(value);
    let previous = state.toggle();

    debug!("Applying state {:?} to '{}'", state, button.id());

    state.store_on(button);

    button.remove_class(&config.color_class(previous));
    button.add_class(&config.color_class(state));

    let outgoing_icon = config.icon_class(previous);
    if let Some(icon) = button.find_by_class_mut(&outgoing_icon) {
        icon.remove_class(&outgoing_icon);
        icon.add_class(&config.icon_class(state));
    } else {
        debug!("No icon element in state {:?}, skipping icon swap", previous);
    }

    if let Some(label) = button.find_by_class_mut(LABEL_CLASS) {
        label.set_text(config.label(state));
    } else {
        debug!("No label element, skipping label update");
    }
}

/// Flips the stored value of a switch button and re-renders it.
///
/// A button with no stored value yet reads as off, so the first toggle of a
/// freshly rendered button turns it on. Returns the new state.
pub fn toggle(button: &mut impl ElementHandle, config: &SwitchConfig) -> SwitchState {
    let new_state = SwitchState::read_from(button).toggle();
    debug!("Toggling '{}' to {:?}", button.id(), new_state);
    apply_state(button, new_state.is_on(), config);
    new_state
}
