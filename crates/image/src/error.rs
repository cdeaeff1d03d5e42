use std::path::PathBuf;

use thiserror::Error;

/// Why a picked file did not become the reference image.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not an image", .path.display())]
    NotAnImage { path: PathBuf },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ImageLoadError {
    /// Stable short code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            ImageLoadError::Io { .. } => "io",
            ImageLoadError::NotAnImage { .. } => "not_an_image",
            ImageLoadError::Decode { .. } => "decode",
        }
    }
}
