//! Escape count → RGBA color schemes.

use image::Rgba;
use mandel_core::types::PaletteKind;

/// Colors one escape count. Called from rayon workers.
pub trait Palette: Send + Sync {
    fn color(&self, iterations: u32, max_iterations: u32) -> Rgba<u8>;
}

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Black interior; exterior ramps red, then yellow, then toward white.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrangePalette;

impl Palette for OrangePalette {
    fn color(&self, iterations: u32, max_iterations: u32) -> Rgba<u8> {
        if iterations >= max_iterations {
            return BLACK;
        }
        let v = 765 * iterations as u64 / max_iterations as u64;
        let band = (v % 255) as u8;
        if v > 510 {
            Rgba([255, 255, band, 255])
        } else if v > 255 {
            Rgba([255, band, 0, 255])
        } else {
            Rgba([band, 0, 0, 255])
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GrayscalePalette;

impl Palette for GrayscalePalette {
    fn color(&self, iterations: u32, max_iterations: u32) -> Rgba<u8> {
        if iterations >= max_iterations {
            return BLACK;
        }
        let g = (255 * iterations as u64 / max_iterations as u64) as u8;
        Rgba([g, g, g, 255])
    }
}

pub fn palette_for(kind: PaletteKind) -> Box<dyn Palette> {
    match kind {
        PaletteKind::Orange => Box::new(OrangePalette),
        PaletteKind::Grayscale => Box::new(GrayscalePalette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_is_black() {
        assert_eq!(OrangePalette.color(100, 100), BLACK);
        assert_eq!(GrayscalePalette.color(7, 7), BLACK);
    }

    #[test]
    fn orange_bands() {
        // v = 765 * it / 765 = it
        let p = OrangePalette;
        assert_eq!(p.color(0, 765), Rgba([0, 0, 0, 255]));
        assert_eq!(p.color(100, 765), Rgba([100, 0, 0, 255]));
        assert_eq!(p.color(255, 765), Rgba([0, 0, 0, 255]));
        assert_eq!(p.color(256, 765), Rgba([255, 1, 0, 255]));
        assert_eq!(p.color(510, 765), Rgba([255, 0, 0, 255]));
        assert_eq!(p.color(600, 765), Rgba([255, 255, 90, 255]));
        assert_eq!(p.color(764, 765), Rgba([255, 255, 254, 255]));
    }

    #[test]
    fn orange_handles_large_budgets_without_overflow() {
        let c = OrangePalette.color(u32::MAX - 1, u32::MAX);
        assert_eq!(c.0[0], 255);
        assert_eq!(c.0[3], 255);
    }

    #[test]
    fn grayscale_ramp() {
        assert_eq!(GrayscalePalette.color(0, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(GrayscalePalette.color(5, 10), Rgba([127, 127, 127, 255]));
    }

    #[test]
    fn palette_for_kind() {
        assert_eq!(palette_for(PaletteKind::Orange).color(100, 765), Rgba([100, 0, 0, 255]));
        assert_eq!(palette_for(PaletteKind::Grayscale).color(5, 10), Rgba([127, 127, 127, 255]));
    }
}
