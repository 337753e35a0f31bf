pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::wire_control_handlers;
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
