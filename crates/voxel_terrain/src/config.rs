//! Terrain and noise configuration.
//!
//! Both structs follow the builder style: `Default` gives a playable setup,
//! `with_*` methods override single knobs. With the `serde` feature they load
//! from any serde format; missing fields fall back to the defaults.
//!
//! ```toml
//! voxel_size = 1.0
//! max_lod = 3
//! lod_distance = 48.0
//! view_distance = 6
//!
//! [noise]
//! seed = 7
//! caves_enabled = true
//! ```

use crate::constants::MAX_SUPPORTED_LOD;
use crate::error::{TerrainError, TerrainResult};
use crate::types::chunk_world_size;

/// Terrain-wide settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainConfig {
  /// World size of a LOD 0 cell.
  pub voxel_size: f64,

  /// Coarsest LOD handed out by the selector.
  pub max_lod: u8,

  /// World distance covered by each LOD ring. Must be at least one chunk so
  /// neighbors never differ by more than one LOD.
  pub lod_distance: f64,

  /// Horizontal radius of the active region, in chunks.
  pub view_distance: u32,

  /// Vertical radius of the active region, in chunks.
  pub vertical_view_distance: u32,

  /// Maximum number of tracked chunks.
  pub capacity: usize,

  /// Transition slab width as a fraction of a cell.
  pub transition_width: f32,

  /// Run sampling and meshing passes on the rayon pool.
  pub parallel: bool,

  /// Procedural terrain parameters.
  pub noise: NoiseConfig,
}

impl Default for TerrainConfig {
  fn default() -> Self {
    Self {
      voxel_size: 1.0,
      max_lod: MAX_SUPPORTED_LOD,
      lod_distance: 48.0,
      view_distance: 6,
      vertical_view_distance: 2,
      capacity: 4096,
      transition_width: 0.5,
      parallel: false,
      noise: NoiseConfig::default(),
    }
  }
}

impl TerrainConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_voxel_size(mut self, size: f64) -> Self {
    self.voxel_size = size;
    self
  }

  pub fn with_max_lod(mut self, lod: u8) -> Self {
    self.max_lod = lod;
    self
  }

  pub fn with_lod_distance(mut self, distance: f64) -> Self {
    self.lod_distance = distance;
    self
  }

  pub fn with_view_distance(mut self, horizontal: u32, vertical: u32) -> Self {
    self.view_distance = horizontal;
    self.vertical_view_distance = vertical;
    self
  }

  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  pub fn with_transition_width(mut self, width: f32) -> Self {
    self.transition_width = width;
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
    self.noise = noise;
    self
  }

  /// World size of a chunk.
  #[inline]
  pub fn chunk_size(&self) -> f64 {
    chunk_world_size(self.voxel_size)
  }

  /// World size of a cell at `lod`.
  #[inline]
  pub fn cell_size(&self, lod: u8) -> f64 {
    self.voxel_size * (1u32 << lod) as f64
  }

  /// Check every constraint the selector and meshers rely on.
  pub fn validate(&self) -> TerrainResult<()> {
    if !(self.voxel_size.is_finite() && self.voxel_size > 0.0) {
      return Err(TerrainError::InvalidVoxelSize(self.voxel_size));
    }
    if self.max_lod > MAX_SUPPORTED_LOD {
      return Err(TerrainError::UnsupportedLod {
        requested: self.max_lod,
        supported: MAX_SUPPORTED_LOD,
      });
    }
    // Adjacent chunk centers are one chunk apart; a ring at least that wide
    // caps the LOD step between them at one.
    let chunk_size = self.chunk_size();
    if !(self.lod_distance >= chunk_size) {
      return Err(TerrainError::InvalidLodDistance {
        lod_distance: self.lod_distance,
        chunk_size,
      });
    }
    if self.capacity == 0 {
      return Err(TerrainError::ZeroCapacity);
    }
    if !(self.transition_width > 0.0 && self.transition_width < 1.0) {
      return Err(TerrainError::InvalidTransitionWidth(self.transition_width));
    }
    Ok(())
  }
}

/// Layered noise parameters for [`NoiseTerrain`](crate::density::NoiseTerrain).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseConfig {
  /// Random seed
  pub seed: u32,

  /// Terrain height before noise, in world units.
  pub base_height: f64,

  /// Height of the macro relief (world units).
  pub macro_amplitude: f64,

  /// Macro relief frequency. Smaller = broader hills.
  pub macro_frequency: f64,

  /// Octaves of the macro relief fBm.
  pub macro_octaves: usize,

  /// Height of the high-frequency octave (world units).
  pub detail_amplitude: f64,

  /// High-frequency octave frequency.
  pub detail_frequency: f64,

  /// World distance over which density ramps from -1 to 1 across the
  /// surface.
  pub ramp: f64,

  /// Enable 3D cave carving.
  pub caves_enabled: bool,

  /// Cave noise above this value is carved out. Range [-1, 1].
  pub cave_threshold: f64,

  /// Cave noise frequency. Smaller = wider tunnels.
  pub cave_frequency: f64,

  /// Caves only open below this height.
  pub cave_ceiling: f64,
}

impl Default for NoiseConfig {
  fn default() -> Self {
    Self {
      seed: 0,
      base_height: 0.0,
      macro_amplitude: 24.0,
      macro_frequency: 0.004,
      macro_octaves: 5,
      detail_amplitude: 1.5,
      detail_frequency: 0.08,
      ramp: 4.0,
      caves_enabled: false,
      cave_threshold: 0.45,
      cave_frequency: 0.04,
      cave_ceiling: -8.0,
    }
  }
}

impl NoiseConfig {
  pub fn new(seed: u32) -> Self {
    Self {
      seed,
      ..Default::default()
    }
  }

  pub fn with_base_height(mut self, height: f64) -> Self {
    self.base_height = height;
    self
  }

  /// Set the macro relief.
  ///
  /// - `amplitude`: height variation (larger = bigger hills)
  /// - `frequency`: feature size (smaller = larger features)
  pub fn with_macro(mut self, amplitude: f64, frequency: f64) -> Self {
    self.macro_amplitude = amplitude;
    self.macro_frequency = frequency;
    self
  }

  pub fn with_detail(mut self, amplitude: f64, frequency: f64) -> Self {
    self.detail_amplitude = amplitude;
    self.detail_frequency = frequency;
    self
  }

  pub fn with_ramp(mut self, ramp: f64) -> Self {
    self.ramp = ramp;
    self
  }

  /// Enable caves with the given threshold and frequency.
  pub fn with_caves(mut self, threshold: f64, frequency: f64) -> Self {
    self.caves_enabled = true;
    self.cave_threshold = threshold;
    self.cave_frequency = frequency;
    self
  }

  pub fn with_cave_ceiling(mut self, ceiling: f64) -> Self {
    self.cave_ceiling = ceiling;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
