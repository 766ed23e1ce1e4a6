//! Height-field terrain sampler built on the `noise` crate.
//!
//! The density function is:
//! ```text
//! height  = base_height + fbm(x, z) · macro_amplitude + perlin(x, z) · detail_amplitude
//! density = clamp((y - height) / ramp, -1, 1)
//! density = max(density, cave(x, y, z))        (caves enabled, below the ceiling)
//! ```
//!
//! Where density < 0 is solid and density > 0 is air.

use glam::DVec3;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::DensitySampler;
use crate::config::NoiseConfig;

/// Procedural terrain: a layered-noise height field with optional caves.
#[derive(Clone)]
pub struct NoiseTerrain {
  config: NoiseConfig,
  relief: Fbm<Perlin>,
  detail: Perlin,
  caves: Perlin,
}

impl NoiseTerrain {
  pub fn new(config: NoiseConfig) -> Self {
    let relief = Fbm::<Perlin>::new(config.seed)
      .set_octaves(config.macro_octaves.max(1))
      .set_frequency(config.macro_frequency)
      .set_persistence(0.5)
      .set_lacunarity(2.0);
    let detail = Perlin::new(config.seed.wrapping_add(1));
    let caves = Perlin::new(config.seed.wrapping_add(2));

    Self {
      config,
      relief,
      detail,
      caves,
    }
  }

  pub fn config(&self) -> &NoiseConfig {
    &self.config
  }

  /// Surface height at a horizontal position.
  pub fn height(&self, x: f64, z: f64) -> f64 {
    let c = &self.config;
    let relief = self.relief.get([x, z]) * c.macro_amplitude;
    let detail = self
      .detail
      .get([x * c.detail_frequency, z * c.detail_frequency])
      * c.detail_amplitude;
    c.base_height + relief + detail
  }

  /// Carving density at a position, or `None` where caves never open.
  fn cave(&self, position: DVec3) -> Option<f64> {
    let c = &self.config;
    if !c.caves_enabled {
      return None;
    }

    // Fade in over one ramp below the ceiling so the roof stays smooth.
    let fade = ((c.cave_ceiling - position.y) / c.ramp.max(f64::EPSILON)).clamp(0.0, 1.0);
    if fade <= 0.0 {
      return None;
    }

    let p = position * c.cave_frequency;
    let n = self.caves.get([p.x, p.y, p.z]);
    let span = (1.0 - c.cave_threshold).max(f64::EPSILON);
    let carve = ((n - c.cave_threshold) / span).clamp(-1.0, 1.0);
    Some(-1.0 + (carve + 1.0) * fade)
  }
}

impl Default for NoiseTerrain {
  fn default() -> Self {
    Self::new(NoiseConfig::default())
  }
}

impl DensitySampler for NoiseTerrain {
  fn density(&self, position: DVec3) -> f32 {
    let height = self.height(position.x, position.z);
    let ramp = self.config.ramp.max(f64::EPSILON);
    let mut density = ((position.y - height) / ramp).clamp(-1.0, 1.0);

    if let Some(carve) = self.cave(position) {
      density = density.max(carve);
    }

    density as f32
  }
}

#[cfg(test)]
#[path = "terrain_test.rs"]
mod terrain_test;
