use mandel_core::config::MandelConfig;
use mandel_core::errors::ViewerError;
use mandel_core::events::EventDispatcher;

use crate::app;
use crate::session::Session;

/// `mandel view`: open the interactive window.
pub fn run(config: &MandelConfig, events: EventDispatcher) -> Result<(), ViewerError> {
    let session = Session::start(config, events)?;
    app::run(config.window.effective_title(), session)
}
