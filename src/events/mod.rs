pub mod keyboard;
pub mod orientation;
pub mod pointer;
pub mod touch;

pub use keyboard::wire_secret_keys;
pub use orientation::{wire_deviceorientation, wire_permission_request};
pub use pointer::wire_pointermove;
pub use touch::wire_triple_tap;
