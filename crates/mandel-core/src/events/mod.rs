//! Render lifecycle events.
//! Handlers are registered on an `EventDispatcher` and only override what they need.

pub mod dispatcher;
pub mod handler;
pub mod logging;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RenderEventHandler;
pub use logging::LoggingEventHandler;
pub use types::*;
