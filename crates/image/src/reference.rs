use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use log::{debug, info};

use crate::error::ImageLoadError;
use crate::types::{TileId, GRID_SIZE};

/// A resampled crop, addressed in `u16` cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rgb: RgbImage,
}

impl PixelGrid {
    /// All-black grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            rgb: RgbImage::new(width as u32, height as u32),
        }
    }

    pub fn width(&self) -> u16 {
        self.rgb.width() as u16
    }

    pub fn height(&self) -> u16 {
        self.rgb.height() as u16
    }

    pub fn get(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        self.rgb.get_pixel_checked(x as u32, y as u32).map(|p| p.0)
    }
}

/// A decoded reference image.
#[derive(Debug, Clone)]
pub struct ReferenceImage {
    name: String,
    format: ImageFormat,
    rgb: RgbImage,
}

/// Read `path` and decode it as the new reference image.
pub fn load_reference(path: impl AsRef<Path>) -> Result<ReferenceImage, ImageLoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let image = ReferenceImage::from_bytes(name, &bytes).map_err(|err| match err {
        ImageLoadError::NotAnImage { .. } => ImageLoadError::NotAnImage {
            path: path.to_path_buf(),
        },
        ImageLoadError::Decode { source, .. } => ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(
        "loaded {} ({:?}, {}x{})",
        path.display(),
        image.format,
        image.rgb.width(),
        image.rgb.height()
    );
    Ok(image)
}

impl ReferenceImage {
    /// Decode in-memory bytes. The format is sniffed from the content.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ImageLoadError> {
        let name = name.into();
        let format = image::guess_format(bytes).map_err(|_| ImageLoadError::NotAnImage {
            path: PathBuf::from(&name),
        })?;
        let decoded = image::load_from_memory_with_format(bytes, format).map_err(|source| {
            ImageLoadError::Decode {
                path: PathBuf::from(&name),
                source,
            }
        })?;
        Ok(Self::from_dynamic(name, format, decoded))
    }

    pub fn from_dynamic(name: impl Into<String>, format: ImageFormat, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            format,
            rgb: image.to_rgb8(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }

    /// The ninth of the image belonging to tile `id`, resampled to `w x h`.
    pub fn sample_tile(&self, id: TileId, w: u16, h: u16) -> PixelGrid {
        let home = id.home();
        let (img_w, img_h) = self.rgb.dimensions();
        let cuts = GRID_SIZE as u32;
        let col = home.col() as u32;
        let row = home.row() as u32;

        let x0 = img_w * col / cuts;
        let x1 = img_w * (col + 1) / cuts;
        let y0 = img_h * row / cuts;
        let y1 = img_h * (row + 1) / cuts;
        self.sample_region(x0, y0, x1, y1, w, h)
    }

    /// The uncut image, resampled to `w x h`.
    pub fn sample_full(&self, w: u16, h: u16) -> PixelGrid {
        let (img_w, img_h) = self.rgb.dimensions();
        self.sample_region(0, 0, img_w, img_h, w, h)
    }

    /// Crop `[x0, x1) x [y0, y1)` and resample it to a `w x h` grid.
    fn sample_region(&self, x0: u32, y0: u32, x1: u32, y1: u32, w: u16, h: u16) -> PixelGrid {
        let (img_w, img_h) = self.rgb.dimensions();
        if img_w == 0 || img_h == 0 || w == 0 || h == 0 {
            return PixelGrid::new(w, h);
        }

        // Images narrower than the grid still give every tile one source pixel.
        let x0 = x0.min(img_w - 1);
        let y0 = y0.min(img_h - 1);
        let x1 = x1.clamp(x0 + 1, img_w);
        let y1 = y1.clamp(y0 + 1, img_h);

        let crop = self.rgb.view(x0, y0, x1 - x0, y1 - y0);
        let rgb = imageops::resize(&*crop, w as u32, h as u32, FilterType::Triangle);
        debug!("sampled {}x{} region into {}x{}", x1 - x0, y1 - y0, w, h);
        PixelGrid { rgb }
    }
}
