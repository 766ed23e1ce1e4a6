//! Chunk geometry constants and density grid indexing.
//!
//! Every chunk covers the same world extent. Coarser chunks cover it with
//! fewer, larger cells:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CHUNK RESOLUTION PER LOD                        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   LOD   cells/side   cell width (voxels)   samples/side (with apron)    │
//! │   ───   ──────────   ───────────────────   ─────────────────────────    │
//! │    0        16                1                       19                │
//! │    1         8                2                       11                │
//! │    2         4                4                        7                │
//! │    3         2                8                        5                │
//! │                                                                         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Sample index:   0     1    ...   cells+1   cells+2                     │
//! │                  │     │            │         │                         │
//! │                  │     └─ corners ──┘         └─ positive apron         │
//! │                  └─ negative apron                                      │
//! │                                                                         │
//! │  The apron ring lets central-difference gradients read one sample       │
//! │  beyond every corner a cell can touch.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! index = (x * dim + y) * dim + z      (X major, Z innermost)
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!       +Z
//!
//! Cell corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

/// Cells per chunk side at LOD 0.
pub const CHUNK_CELLS: usize = 16;

/// Apron samples on each side of the corner grid.
pub const PADDING: usize = 1;

/// Coarsest LOD a chunk can be built at (2 cells per side).
pub const MAX_SUPPORTED_LOD: u8 = 3;

/// Fixed-point denominator for edge interpolation.
pub const INTERPOLATION_ONE: i32 = 256;

/// Cells per side for a chunk at `lod`.
#[inline(always)]
pub const fn cells_for_lod(lod: u8) -> usize {
  CHUNK_CELLS >> lod
}

/// Samples per axis of a density field with `cells` cells per side.
#[inline(always)]
pub const fn sample_dim(cells: usize) -> usize {
  cells + 1 + 2 * PADDING
}

/// Convert 3D sample coordinates (apron included) to a linear index.
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, z: usize, dim: usize) -> usize {
  (x * dim + y) * dim + z
}

/// Convert a linear index back to sample coordinates.
#[inline(always)]
pub const fn index_to_coord(idx: usize, dim: usize) -> (usize, usize, usize) {
  let z = idx % dim;
  let y = (idx / dim) % dim;
  let x = idx / (dim * dim);
  (x, y, z)
}

/// Offsets of the 8 cube corners relative to the cell origin.
///
/// Corner layout (binary: ZYX):
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (0,1,0)
/// - 3 = (1,1,0)
/// - 4 = (0,0,1)
/// - 5 = (1,0,1)
/// - 6 = (0,1,1)
/// - 7 = (1,1,1)
pub const CORNER_OFFSETS: [[i32; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [0, 1, 0],
  [1, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [0, 1, 1],
  [1, 1, 1],
];

/// Linear index deltas of the 8 cube corners for a field of `dim` samples.
#[inline]
pub const fn corner_deltas(dim: usize) -> [usize; 8] {
  let x = dim * dim;
  let y = dim;
  [0, x, y, x + y, 1, x + 1, y + 1, x + y + 1]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
