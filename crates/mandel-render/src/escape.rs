//! Escape-time kernel for the quadratic map `z -> z² + c`.

use mandel_core::constants::ESCAPE_RADIUS_SQUARED;
use num_complex::Complex64;

/// Number of iterations before `|z|²` exceeds 4, capped at `max_iterations`.
///
/// Points inside the set return exactly `max_iterations`. The bound is tested
/// before each step, so any `c` yields at least 1 when `max_iterations >= 1`.
#[inline]
pub fn escape_iterations(c: Complex64, max_iterations: u32) -> u32 {
    let (mut re, mut im) = (0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while re * re + im * im <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        let next_re = re * re - im * im + c.re;
        im = 2.0 * re * im + c.im;
        re = next_re;
        iterations += 1;
    }
    iterations
}
