pub mod buttons;
pub mod viewport;

pub use buttons::wire_projector_buttons;
pub use viewport::{wire_resize, wire_scroll};
