//! Command implementations

mod reverse;
mod session;

pub use reverse::reverse;
pub use session::session;
