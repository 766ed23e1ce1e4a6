//! Gradient/normal computation using glam SIMD.
//!
//! Normals are the normalized central-difference gradient of the density
//! field at a corner. The apron ring guarantees both neighbors exist for
//! every corner a cell can touch.

use glam::Vec3A;

use crate::density::DensityField;

/// Normal at a corner coordinate of `field`.
#[inline]
pub fn at_corner(field: &DensityField, x: i32, y: i32, z: i32) -> [f32; 3] {
  let gx = field.get(x + 1, y, z) as f32 - field.get(x - 1, y, z) as f32;
  let gy = field.get(x, y + 1, z) as f32 - field.get(x, y - 1, z) as f32;
  let gz = field.get(x, y, z + 1) as f32 - field.get(x, y, z - 1) as f32;
  normalize(Vec3A::new(gx, gy, gz))
}

/// Normalize a gradient, falling back to up for degenerate input.
#[inline]
pub fn normalize(gradient: Vec3A) -> [f32; 3] {
  let len_sq = gradient.length_squared();

  if len_sq < 1e-8 {
    return [0.0, 1.0, 0.0]; // Fallback to up
  }

  let normalized = gradient * len_sq.sqrt().recip();
  [normalized.x, normalized.y, normalized.z]
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
