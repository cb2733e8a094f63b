//! Tests for the mandel configuration system.

use std::sync::Mutex;

use mandel_core::config::{CliOverrides, MandelConfig};
use mandel_core::errors::{ConfigError, MandelErrorCode};
use mandel_core::types::{PaletteKind, Projection};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 7] = [
    "MANDEL_WIDTH",
    "MANDEL_HEIGHT",
    "MANDEL_MAX_ITERATIONS",
    "MANDEL_THREADS",
    "MANDEL_PROJECTION",
    "MANDEL_PALETTE",
    "MANDEL_ZOOM_FACTOR",
];

/// Clears MANDEL_ vars and points HOME at an empty dir so no user config leaks in.
fn isolate_env(home: &std::path::Path) {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".mandel")).unwrap();
    std::fs::write(
        home.path().join(".mandel/config.toml"),
        "[render]\nwidth = 320\nheight = 200\npalette = \"grayscale\"\n",
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mandel.toml"),
        "[render]\nwidth = 640\nmax_iterations = 500\n",
    )
    .unwrap();

    std::env::set_var("MANDEL_MAX_ITERATIONS", "700");

    let cli = CliOverrides {
        projection: Some(Projection::CenteredScale),
        ..Default::default()
    };
    let config = MandelConfig::load(dir.path(), Some(&cli)).unwrap();

    // user
    assert_eq!(config.render.height, Some(200));
    assert_eq!(config.render.palette, Some(PaletteKind::Grayscale));
    // project over user
    assert_eq!(config.render.width, Some(640));
    // env over project
    assert_eq!(config.render.max_iterations, Some(700));
    // cli
    assert_eq!(config.render.effective_projection(), Projection::CenteredScale);

    isolate_env(home.path());
}

#[test]
fn test_missing_files_fall_back_to_projection_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    let dir = tempfile::TempDir::new().unwrap();
    let config = MandelConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.render.effective_projection(), Projection::FixedPlane);
    assert_eq!(config.render.effective_width(), 1280);
    assert_eq!(config.render.effective_height(), 720);
    assert_eq!(config.render.effective_max_iterations(), 1024);
    assert_eq!(config.view.effective_zoom(), 1.0);
    assert_eq!(config.navigation.effective_zoom_factor(Projection::FixedPlane), 2.0);
    assert_eq!(config.window.effective_title(), "Mandelbrot Set");
}

#[test]
fn test_centered_scale_defaults() {
    let config = MandelConfig::from_toml("[render]\nprojection = \"centered_scale\"\n").unwrap();
    let p = config.render.effective_projection();
    assert_eq!(p, Projection::CenteredScale);
    assert_eq!(config.render.effective_max_iterations(), 100);
    assert_eq!(config.navigation.effective_zoom_factor(p), 1.2);
    assert_eq!(config.navigation.effective_pan_step(p), 30.0);
    assert_eq!(config.navigation.effective_iteration_growth(p), 1.03);
}

#[test]
fn test_unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    std::env::set_var("MANDEL_WIDTH", "wide");
    std::env::set_var("MANDEL_PROJECTION", "scale");

    let dir = tempfile::TempDir::new().unwrap();
    let config = MandelConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.render.width, None);
    assert_eq!(config.render.projection, Some(Projection::CenteredScale));

    isolate_env(home.path());
}

#[test]
fn test_explicit_config_file_replaces_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("mandel.toml"), "[render]\nwidth = 640\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "[render]\nheight = 480\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(explicit),
        ..Default::default()
    };
    let config = MandelConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.render.width, None);
    assert_eq!(config.render.height, Some(480));
}

#[test]
fn test_missing_explicit_config_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    let dir = tempfile::TempDir::new().unwrap();
    let cli = CliOverrides {
        config_file: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };
    match MandelConfig::load(dir.path(), Some(&cli)) {
        Err(ConfigError::FileNotFound { path }) => assert!(path.ends_with("nope.toml")),
        other => panic!("Expected FileNotFound, got: {:?}", other),
    }
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("mandel.toml"), "this is not valid toml {{{{").unwrap();

    match MandelConfig::load(dir.path(), None) {
        Err(e @ ConfigError::ParseError { .. }) => assert_eq!(e.error_code(), "CONFIG_ERROR"),
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[render]\nwidth = 0\n", "render.width"),
        ("[render]\nheight = 20000\n", "render.height"),
        ("[render]\nmax_iterations = 0\n", "render.max_iterations"),
        ("[render]\nthreads = 0\n", "render.threads"),
        ("[view]\nzoom = -1.0\n", "view.zoom"),
        ("[view]\nshift_x = inf\n", "view.shift_x"),
        ("[navigation]\nzoom_factor = 1.0\n", "navigation.zoom_factor"),
        ("[navigation]\npan_step = 0.0\n", "navigation.pan_step"),
        ("[navigation]\niteration_growth = 0.5\n", "navigation.iteration_growth"),
        ("[navigation]\niteration_step = 0\n", "navigation.iteration_step"),
    ];
    for (toml_str, expected_field) in cases {
        let config = MandelConfig::from_toml(toml_str).unwrap();
        match MandelConfig::validate(&config) {
            Err(ConfigError::ValidationFailed { field, .. }) => {
                assert_eq!(field, expected_field, "for input {toml_str:?}")
            }
            other => panic!("Expected ValidationFailed for {toml_str:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = MandelConfig::from_toml(
        "[render]\nwidth = 100\nshader = \"smooth\"\n[future]\nkey = 1\n",
    )
    .unwrap();
    assert_eq!(config.render.width, Some(100));
}

#[test]
fn test_toml_round_trip() {
    let config = MandelConfig::from_toml(
        r#"
[render]
width = 1024
height = 768
projection = "centered_scale"
palette = "grayscale"

[view]
zoom = 4.0
shift_x = -0.75

[navigation]
iteration_step = 32

[window]
title = "Deep Zoom"
"#,
    )
    .unwrap();

    let serialized = config.to_toml().unwrap();
    let reparsed = MandelConfig::from_toml(&serialized).unwrap();
    assert_eq!(config, reparsed);
}
