//! Validated image dimensions.

use mandel_core::constants::MAX_DIMENSION;
use mandel_core::errors::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        for (field, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(RenderError::ZeroDimension { field });
            }
            if value > MAX_DIMENSION {
                return Err(RenderError::DimensionTooLarge {
                    field,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
