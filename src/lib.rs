pub mod config;
pub mod display;
pub mod element;
pub mod switch_state;


pub use config::{StatePair, SwitchConfig, load_config};
pub use display::{HANDLER_SUFFIX, LABEL_CLASS, apply_state, derive_handler_name, toggle};
pub use element::{ElementHandle, ElementNode};
pub use switch_state::{SwitchState, VALUE_KEY};
