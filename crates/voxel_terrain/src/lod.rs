//! Distance-based LOD selection.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  lod(chunk) = clamp(floor(|center - focal| / lod_distance),      │
//! │                     0, max_lod)                                  │
//! │                                                                  │
//! │     ring 0      ring 1           ring 2                          │
//! │   ├────────┼──────────────┼────────────────┤                     │
//! │   focal    lod_distance   2·lod_distance                         │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Face neighbors have centers exactly one chunk apart, so their distances
//! to the focal point differ by at most one chunk. With `lod_distance` at
//! least one chunk their rings, and so their LODs, differ by at most one.

use std::collections::HashMap;

use glam::DVec3;

use crate::config::TerrainConfig;
use crate::error::TerrainResult;
use crate::types::{ChunkCoord, Face, TransitionMask};

/// Picks a LOD and transition mask for every chunk around a focal point.
#[derive(Clone, Debug, PartialEq)]
pub struct LodSelector {
  voxel_size: f64,
  lod_distance: f64,
  max_lod: u8,
  view_distance: i32,
  vertical_view_distance: i32,
}

/// Two face neighbors more than one LOD apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradationViolation {
  pub coord: ChunkCoord,
  pub lod: u8,
  pub neighbor: ChunkCoord,
  pub neighbor_lod: u8,
}

impl LodSelector {
  /// Build a selector, rejecting configurations that could put face
  /// neighbors more than one LOD apart.
  pub fn new(config: &TerrainConfig) -> TerrainResult<Self> {
    config.validate()?;
    Ok(Self {
      voxel_size: config.voxel_size,
      lod_distance: config.lod_distance,
      max_lod: config.max_lod,
      view_distance: config.view_distance as i32,
      vertical_view_distance: config.vertical_view_distance as i32,
    })
  }

  #[inline]
  pub fn max_lod(&self) -> u8 {
    self.max_lod
  }

  /// LOD of the chunk at `coord` for a viewer at `focal`.
  pub fn lod_for(&self, focal: DVec3, coord: ChunkCoord) -> u8 {
    let distance = coord.center(self.voxel_size).distance(focal);
    let ring = (distance / self.lod_distance).floor();
    ring.clamp(0.0, self.max_lod as f64) as u8
  }

  /// Faces of `coord` whose neighbor is one LOD finer.
  pub fn transition_mask_for(&self, focal: DVec3, coord: ChunkCoord) -> TransitionMask {
    let lod = self.lod_for(focal, coord);
    let mut mask = TransitionMask::EMPTY;
    if lod == 0 {
      return mask;
    }

    for face in Face::ALL {
      let neighbor_lod = self.lod_for(focal, coord.neighbor(face));
      debug_assert!(
        lod.abs_diff(neighbor_lod) <= 1,
        "chunk {} at LOD {} borders LOD {} across {:?}",
        coord,
        lod,
        neighbor_lod,
        face
      );
      if neighbor_lod < lod {
        mask.insert(face);
      }
    }
    mask
  }

  /// Chunks within the view box around the focal chunk, nearest first.
  pub fn active_region(&self, focal: DVec3) -> Vec<ChunkCoord> {
    let center = ChunkCoord::from_world(focal, self.voxel_size);
    let h = self.view_distance;
    let v = self.vertical_view_distance;

    let mut region = Vec::with_capacity(((2 * h + 1) * (2 * h + 1) * (2 * v + 1)) as usize);
    for dx in -h..=h {
      for dy in -v..=v {
        for dz in -h..=h {
          region.push(ChunkCoord::new(center.x + dx, center.y + dy, center.z + dz));
        }
      }
    }

    let voxel_size = self.voxel_size;
    region.sort_by(|a, b| {
      let da = a.center(voxel_size).distance_squared(focal);
      let db = b.center(voxel_size).distance_squared(focal);
      da.total_cmp(&db).then_with(|| a.cmp(b))
    });
    region
  }
}

/// Check that no two face neighbors in `lods` differ by more than one LOD.
///
/// Neighbors missing from the map are ignored. Coordinates are visited in
/// sorted order, so the reported violation is deterministic.
pub fn validate_gradation(lods: &HashMap<ChunkCoord, u8>) -> Result<(), GradationViolation> {
  let mut coords: Vec<&ChunkCoord> = lods.keys().collect();
  coords.sort();

  for &coord in coords {
    let lod = lods[&coord];
    for face in Face::ALL {
      let neighbor = coord.neighbor(face);
      if let Some(&neighbor_lod) = lods.get(&neighbor) {
        if lod.abs_diff(neighbor_lod) > 1 {
          return Err(GradationViolation {
            coord,
            lod,
            neighbor,
            neighbor_lod,
          });
        }
      }
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "lod_test.rs"]
mod lod_test;
