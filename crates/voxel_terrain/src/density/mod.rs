//! Density field sampling.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  DensitySampler (world position → f32 in [-1, 1])                 │
//! │         │                                                         │
//! │         ▼  every grid position, apron included                    │
//! │  world = chunk origin + (index - PADDING) · voxel_size · 2^lod    │
//! │         │                                                         │
//! │         ▼  clamp + quantize                                       │
//! │  DensityField: (cells + 3)³ i8 samples, X major                   │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sampling is a pure function of (coordinate, LOD, voxel size, sampler):
//! re-sampling the same chunk reproduces the field bit for bit, and two
//! chunks that share a world position store the same value for it.

mod terrain;

use std::sync::Arc;

use glam::DVec3;

pub use terrain::NoiseTerrain;

use crate::constants::{cells_for_lod, coord_to_index, sample_dim, PADDING};
use crate::types::{density_conversion, ChunkCoord, DensitySample};

/// Procedural density source.
///
/// Implementations must be pure: the same position always yields the same
/// value.
pub trait DensitySampler: Send + Sync {
  /// Density at a world position. Negative = solid, positive = air,
  /// roughly in [-1, 1] (values outside are clamped on storage).
  fn density(&self, position: DVec3) -> f32;
}

impl<S: DensitySampler + ?Sized> DensitySampler for &S {
  fn density(&self, position: DVec3) -> f32 {
    (**self).density(position)
  }
}

impl<S: DensitySampler + ?Sized> DensitySampler for Box<S> {
  fn density(&self, position: DVec3) -> f32 {
    (**self).density(position)
  }
}

impl<S: DensitySampler + ?Sized> DensitySampler for Arc<S> {
  fn density(&self, position: DVec3) -> f32 {
    (**self).density(position)
  }
}

/// Padded grid of quantized density samples for one chunk.
///
/// Addressed in corner coordinates: `-1..=cells + 1` on every axis, where
/// `0..=cells` are the corners of the chunk's own cells.
#[derive(Clone, PartialEq, Eq)]
pub struct DensityField {
  cells: usize,
  dim: usize,
  samples: Box<[DensitySample]>,
}

impl DensityField {
  /// Field with every sample set to `value`.
  pub fn filled(cells: usize, value: DensitySample) -> Self {
    let dim = sample_dim(cells);
    Self {
      cells,
      dim,
      samples: vec![value; dim * dim * dim].into_boxed_slice(),
    }
  }

  /// Field built from a function of corner coordinates (`-1..=cells + 1`).
  pub fn from_fn(cells: usize, mut f: impl FnMut(i32, i32, i32) -> DensitySample) -> Self {
    let dim = sample_dim(cells);
    let mut samples = Vec::with_capacity(dim * dim * dim);
    let pad = PADDING as i32;
    for x in 0..dim as i32 {
      for y in 0..dim as i32 {
        for z in 0..dim as i32 {
          samples.push(f(x - pad, y - pad, z - pad));
        }
      }
    }
    Self {
      cells,
      dim,
      samples: samples.into_boxed_slice(),
    }
  }

  /// Sample a chunk at `lod`.
  #[cfg_attr(
    feature = "profiling",
    tracing::instrument(skip_all, name = "density::sample")
  )]
  pub fn sample<S: DensitySampler + ?Sized>(
    coord: ChunkCoord,
    lod: u8,
    voxel_size: f64,
    sampler: &S,
  ) -> Self {
    let cells = cells_for_lod(lod);
    let origin = coord.origin(voxel_size);
    let cell_size = voxel_size * (1u32 << lod) as f64;

    Self::from_fn(cells, |x, y, z| {
      let local = DVec3::new(x as f64, y as f64, z as f64) * cell_size;
      density_conversion::to_storage(sampler.density(origin + local))
    })
  }

  /// Cells per side.
  #[inline(always)]
  pub fn cells(&self) -> usize {
    self.cells
  }

  /// Samples per side, apron included.
  #[inline(always)]
  pub fn dim(&self) -> usize {
    self.dim
  }

  /// Raw samples in X-major order.
  #[inline(always)]
  pub fn samples(&self) -> &[DensitySample] {
    &self.samples
  }

  /// Linear index of a corner coordinate.
  #[inline(always)]
  pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
    let pad = PADDING as i32;
    debug_assert!(
      [x, y, z]
        .iter()
        .all(|&c| c >= -pad && c <= self.cells as i32 + pad),
      "density coordinate ({}, {}, {}) outside field of {} cells",
      x,
      y,
      z,
      self.cells
    );
    coord_to_index(
      (x + pad) as usize,
      (y + pad) as usize,
      (z + pad) as usize,
      self.dim,
    )
  }

  /// Sample at a corner coordinate.
  #[inline(always)]
  pub fn get(&self, x: i32, y: i32, z: i32) -> DensitySample {
    self.samples[self.index(x, y, z)]
  }

  /// Sample at a linear index.
  #[inline(always)]
  pub fn get_index(&self, index: usize) -> DensitySample {
    self.samples[index]
  }

  /// True if every sample has the same sign, so no cell can produce
  /// geometry.
  pub fn is_homogeneous(&self) -> bool {
    let first_sign = self.samples[0] < 0;
    self.samples.iter().all(|&v| (v < 0) == first_sign)
  }
}

impl std::fmt::Debug for DensityField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DensityField")
      .field("cells", &self.cells)
      .field("dim", &self.dim)
      .finish_non_exhaustive()
  }
}
