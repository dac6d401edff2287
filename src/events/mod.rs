//! DOM event wiring. Handlers only record input or forward clicks into the
//! shared `AppState`; the frame loop does the rest.

mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_close_button, wire_pointer};
