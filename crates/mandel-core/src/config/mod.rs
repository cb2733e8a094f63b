//! Configuration system for mandel.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod mandel_config;
pub mod navigation_config;
pub mod render_config;
pub mod view_config;
pub mod window_config;

pub use mandel_config::{CliOverrides, MandelConfig};
pub use navigation_config::NavigationConfig;
pub use render_config::RenderConfig;
pub use view_config::ViewConfig;
pub use window_config::WindowConfig;
