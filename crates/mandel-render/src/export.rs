//! PNG export.

use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};
use mandel_core::errors::ExportError;

/// Write `image` to `path` as PNG. The extension must be `.png`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(ExportError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => ExportError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => ExportError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })
}
