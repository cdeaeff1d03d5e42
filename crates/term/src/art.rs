//! Pre-sampled pixel art for the current reference image and layout.
//!
//! Sampling walks every source pixel, so it is done once per image or
//! terminal resize rather than per frame.

use tile_puzzle_image::{PixelGrid, ReferenceImage};

use crate::types::{TileId, TILE_COUNT};

/// Cell dimensions the art was sampled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtSize {
    pub tile_w: u16,
    pub tile_h: u16,
    pub full_w: u16,
    pub full_h: u16,
}

/// Pixel grids for each tile crop and for the uncut image.
///
/// Pixel grids are twice as tall as the cell areas they fill: each terminal
/// cell shows two stacked pixels.
#[derive(Debug, Clone)]
pub struct TileArt {
    name: String,
    size: ArtSize,
    tiles: Vec<PixelGrid>,
    full: PixelGrid,
}

impl TileArt {
    pub fn build(image: &ReferenceImage, size: ArtSize) -> Self {
        let tiles = TileId::all()
            .map(|id| image.sample_tile(id, size.tile_w, size.tile_h.saturating_mul(2)))
            .collect::<Vec<_>>();
        debug_assert_eq!(tiles.len(), TILE_COUNT);
        let full = image.sample_full(size.full_w, size.full_h.saturating_mul(2));
        Self {
            name: image.name().to_string(),
            size,
            tiles,
            full,
        }
    }

    /// Rebuild `slot` if the image or the layout changed.
    ///
    /// `generation` identifies the image; callers bump it on every upload.
    pub fn refresh(
        slot: &mut Option<(u64, TileArt)>,
        image: Option<&ReferenceImage>,
        generation: u64,
        size: ArtSize,
    ) {
        let Some(image) = image else {
            *slot = None;
            return;
        };
        let fresh = matches!(slot, Some((g, art)) if *g == generation && art.size() == size);
        if !fresh {
            *slot = Some((generation, TileArt::build(image, size)));
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> ArtSize {
        self.size
    }

    pub fn tile(&self, id: TileId) -> Option<&PixelGrid> {
        self.tiles.get(id.index())
    }

    pub fn full(&self) -> &PixelGrid {
        &self.full
    }
}
