//! Synthetic samplers and mesh checks for tests and benchmarks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use glam::DVec3;

use crate::density::{DensityField, DensitySampler};
use crate::types::{density_conversion, DensitySample};

// =============================================================================
// Mock samplers
// =============================================================================

/// Sphere centered at a point.
///
/// Returns negative inside the sphere, positive outside.
#[derive(Clone, Debug)]
pub struct SphereSampler {
  pub center: DVec3,
  pub radius: f64,
  /// World distance over which density ramps from 0 to 1.
  pub ramp: f64,
}

impl SphereSampler {
  pub fn new(center: DVec3, radius: f64) -> Self {
    Self {
      center,
      radius,
      ramp: 2.0,
    }
  }
}

impl DensitySampler for SphereSampler {
  fn density(&self, position: DVec3) -> f32 {
    ((position.distance(self.center) - self.radius) / self.ramp) as f32
  }
}

/// Plane dividing space; negative below, positive above.
#[derive(Clone, Debug)]
pub struct PlaneSampler {
  /// Point on the plane.
  pub point: DVec3,
  /// Normal direction (points toward positive/air side).
  pub normal: DVec3,
  pub ramp: f64,
}

impl PlaneSampler {
  /// Horizontal plane at given Y height.
  pub fn horizontal(y: f64) -> Self {
    Self {
      point: DVec3::new(0.0, y, 0.0),
      normal: DVec3::Y,
      ramp: 4.0,
    }
  }

  pub fn with_ramp(mut self, ramp: f64) -> Self {
    self.ramp = ramp;
    self
  }
}

impl DensitySampler for PlaneSampler {
  fn density(&self, position: DVec3) -> f32 {
    ((position - self.point).dot(self.normal) / self.ramp) as f32
  }
}

/// Same density everywhere.
#[derive(Clone, Debug)]
pub struct ConstantSampler {
  pub value: f32,
}

impl ConstantSampler {
  pub fn all_air() -> Self {
    Self { value: 1.0 }
  }

  pub fn all_solid() -> Self {
    Self { value: -1.0 }
  }
}

impl DensitySampler for ConstantSampler {
  fn density(&self, _position: DVec3) -> f32 {
    self.value
  }
}

/// Counting wrapper: tracks how many positions were sampled.
pub struct CountingSampler<S: DensitySampler> {
  pub inner: S,
  pub sample_count: AtomicUsize,
}

impl<S: DensitySampler> CountingSampler<S> {
  pub fn new(inner: S) -> Self {
    Self {
      inner,
      sample_count: AtomicUsize::new(0),
    }
  }

  pub fn count(&self) -> usize {
    self.sample_count.load(Ordering::SeqCst)
  }

  pub fn reset(&self) {
    self.sample_count.store(0, Ordering::SeqCst);
  }
}

impl<S: DensitySampler> DensitySampler for CountingSampler<S> {
  fn density(&self, position: DVec3) -> f32 {
    self.sample_count.fetch_add(1, Ordering::Relaxed);
    self.inner.density(position)
  }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Sphere field in cell coordinates of a single chunk.
pub fn sphere_field(cells: usize, center: [f64; 3], radius: f64) -> DensityField {
  let center = DVec3::from_array(center);
  DensityField::from_fn(cells, |x, y, z| {
    let p = DVec3::new(x as f64, y as f64, z as f64);
    density_conversion::to_storage(((p.distance(center) - radius) / 2.0) as f32)
  })
}

/// Field split by a horizontal plane at `height` (cell units).
pub fn half_space_field(cells: usize, height: f64) -> DensityField {
  DensityField::from_fn(cells, |_, y, _| {
    density_conversion::to_storage(((y as f64 - height) / 4.0) as f32)
  })
}

/// Field with every sample set to `value`.
pub fn constant_field(cells: usize, value: DensitySample) -> DensityField {
  DensityField::filled(cells, value)
}

// =============================================================================
// Mesh checks
// =============================================================================

/// Directed edges that are not matched by exactly one reverse edge.
///
/// Empty for a closed, consistently wound triangle mesh.
pub fn unmatched_edges(indices: &[u16]) -> Vec<(u16, u16)> {
  let mut counts: HashMap<(u16, u16), i32> = HashMap::new();
  for tri in indices.chunks_exact(3) {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *counts.entry((a, b)).or_default() += 1;
    }
  }

  let mut open: Vec<(u16, u16)> = counts
    .iter()
    .filter(|&(&(a, b), &n)| n != 1 || counts.get(&(b, a)).copied().unwrap_or(0) != 1)
    .map(|(&edge, _)| edge)
    .collect();
  open.sort_unstable();
  open
}

/// Quantize a position for matching vertices produced by different meshes.
pub fn position_key(position: [f32; 3]) -> [i64; 3] {
  position.map(|c| (c as f64 * 4096.0).round() as i64)
}
