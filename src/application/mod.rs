mod screen;
mod session;
mod viewport;

pub use screen::{Router, Screen};
pub use session::GameSession;
pub use viewport::Viewport;
