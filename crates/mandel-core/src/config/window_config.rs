//! Desktop window configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WINDOW_TITLE;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title. Default: "Mandelbrot Set".
    pub title: Option<String>,
}

impl WindowConfig {
    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_WINDOW_TITLE)
    }
}
