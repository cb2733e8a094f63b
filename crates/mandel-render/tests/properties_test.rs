//! Property tests for the kernel, palettes, and navigation.

use mandel_core::types::{Direction, Projection};
use mandel_render::escape::escape_iterations;
use mandel_render::palette::{GrayscalePalette, OrangePalette, Palette};
use mandel_render::{Action, Complex64, NavigationSettings, Navigator, ViewState};
use proptest::prelude::*;

proptest! {
    #[test]
    fn escape_count_within_budget(re in -3.0f64..3.0, im in -3.0f64..3.0, max in 1u32..512) {
        let n = escape_iterations(Complex64::new(re, im), max);
        prop_assert!(n >= 1);
        prop_assert!(n <= max);
    }

    #[test]
    fn larger_budget_never_escapes_sooner(re in -2.0f64..1.0, im in -1.5f64..1.5, max in 1u32..256) {
        let c = Complex64::new(re, im);
        let small = escape_iterations(c, max);
        let large = escape_iterations(c, max * 2);
        if small < max {
            prop_assert_eq!(small, large);
        } else {
            prop_assert!(large >= max);
        }
    }

    #[test]
    fn outside_radius_two_escapes_at_one(re in 2.01f64..10.0, im in -10.0f64..10.0) {
        prop_assert_eq!(escape_iterations(Complex64::new(re, im), 100), 1);
    }

    #[test]
    fn palettes_are_opaque_and_black_only_inside(max in 1u32..100_000, frac in 0.0f64..1.0) {
        let it = ((max as f64) * frac) as u32;
        for palette in [&OrangePalette as &dyn Palette, &GrayscalePalette] {
            let c = palette.color(it, max);
            prop_assert_eq!(c.0[3], 255);
        }
        prop_assert_eq!(OrangePalette.color(max, max).0, [0, 0, 0, 255]);
    }

    #[test]
    fn pan_round_trip(zoom in 0.01f64..1000.0, sx in -2.0f64..2.0, sy in -2.0f64..2.0) {
        for projection in Projection::all() {
            let view = ViewState { zoom, shift_x: sx, shift_y: sy, max_iterations: 100 };
            let nav = Navigator::new(NavigationSettings::for_projection(*projection), view);
            let mut v = view;
            nav.apply(&mut v, Action::Pan(Direction::Left));
            nav.apply(&mut v, Action::Pan(Direction::Up));
            nav.apply(&mut v, Action::Pan(Direction::Right));
            nav.apply(&mut v, Action::Pan(Direction::Down));
            prop_assert!((v.shift_x - sx).abs() < 1e-9);
            prop_assert!((v.shift_y - sy).abs() < 1e-9);
            prop_assert_eq!(v.zoom, zoom);
        }
    }

    #[test]
    fn zoom_never_leaves_valid_range(steps in proptest::collection::vec(any::<bool>(), 0..40)) {
        for projection in Projection::all() {
            let view = ViewState { max_iterations: projection.default_max_iterations(), ..ViewState::default() };
            let nav = Navigator::new(NavigationSettings::for_projection(*projection), view);
            let mut v = view;
            for zoom_in in &steps {
                nav.apply(&mut v, if *zoom_in { Action::ZoomIn } else { Action::ZoomOut });
            }
            prop_assert!(v.validate().is_ok());
        }
    }

    #[test]
    fn zoom_far_in_one_direction_stays_valid(zoom_in in any::<bool>(), steps in 1500usize..2500) {
        let action = if zoom_in { Action::ZoomIn } else { Action::ZoomOut };
        for projection in Projection::all() {
            let view = ViewState { shift_x: 0.5, shift_y: -0.5, ..ViewState::default() };
            let nav = Navigator::new(NavigationSettings::for_projection(*projection), view);
            let mut v = view;
            for _ in 0..steps {
                nav.apply(&mut v, action);
            }
            prop_assert!(v.validate().is_ok(), "{:?}", v);
            prop_assert!(v.zoom.is_normal());
            prop_assert!(v.shift_x.is_finite() && v.shift_y.is_finite());
        }
    }
}
