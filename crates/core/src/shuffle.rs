//! Shuffle module - Fisher-Yates over tile positions
//!
//! Tiles stay put in storage; the walk exchanges the `position` values held by
//! storage slots `i` and `j`. Because the positions start as a permutation and
//! every step is a transposition, this is the textbook in-place Fisher-Yates
//! applied to the position array, so each of the 9! arrangements is equally
//! likely given a uniform `rng`.

use rand::Rng;

use crate::puzzle::Tile;

/// Permute the `position` fields of `tiles` uniformly at random.
///
/// For `i` from the last index down to 1, draw `j` uniformly from `[0, i]`
/// and exchange the positions held by `tiles[i]` and `tiles[j]`.
pub fn shuffle_positions<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    for i in (1..tiles.len()).rev() {
        let j = rng.gen_range(0..=i);
        let tmp = tiles[i].position;
        tiles[i].position = tiles[j].position;
        tiles[j].position = tmp;
    }
}
