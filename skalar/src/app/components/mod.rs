mod controls;
mod viewport;

pub use controls::Controls;
pub use viewport::Viewport;
