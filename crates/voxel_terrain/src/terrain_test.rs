use super::*;

use std::collections::{HashMap, HashSet};

use crate::error::TerrainError;
use crate::lod::validate_gradation;
use crate::test_utils::{position_key, PlaneSampler, SphereSampler};

const FOCAL: DVec3 = DVec3::new(8.0, 8.0, 8.0);

fn small_config() -> TerrainConfig {
  TerrainConfig::default()
    .with_lod_distance(16.0)
    .with_view_distance(2, 1)
}

fn plane_terrain() -> Terrain<PlaneSampler> {
  Terrain::new(small_config(), PlaneSampler::horizontal(5.0)).unwrap()
}

/// Cancels its token on the first sample, so exactly one chunk gets sampled.
struct CancellingSampler {
  inner: PlaneSampler,
  token: CancelToken,
}

impl DensitySampler for CancellingSampler {
  fn density(&self, position: DVec3) -> f32 {
    self.token.cancel();
    self.inner.density(position)
  }
}

type KeyTriangle = [[i64; 3]; 3];

/// Every loaded triangle in world space: regular meshes plus transition
/// strips at their secondary positions. Triangles collapsed to a line or a
/// point are left out.
fn world_triangles<S: DensitySampler>(terrain: &Terrain<S>) -> Vec<KeyTriangle> {
  let voxel_size = terrain.config().voxel_size;
  let mut triangles = Vec::new();

  for chunk in terrain.chunks() {
    let origin = chunk.coord.origin(voxel_size);
    let key = |p: [f32; 3]| {
      let world = origin + DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64);
      position_key(world.as_vec3().to_array())
    };

    let mut push = |tri: KeyTriangle| {
      if tri[0] != tri[1] && tri[1] != tri[2] && tri[2] != tri[0] {
        triangles.push(tri);
      }
    };
    for tri in chunk.mesh.indices.chunks_exact(3) {
      push(std::array::from_fn(|i| {
        key(chunk.mesh.vertices[tri[i] as usize].position)
      }));
    }
    for transition in &chunk.transitions {
      for tri in transition.indices.chunks_exact(3) {
        push(std::array::from_fn(|i| {
          key(transition.vertices[tri[i] as usize].secondary_position)
        }));
      }
    }
  }
  triangles
}

/// Directed edges without exactly one reverse partner.
fn open_edges(triangles: &[KeyTriangle]) -> usize {
  let mut counts: HashMap<([i64; 3], [i64; 3]), usize> = HashMap::new();
  for tri in triangles {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *counts.entry((a, b)).or_default() += 1;
    }
  }
  counts
    .iter()
    .filter(|&(&(a, b), &n)| n != 1 || counts.get(&(b, a)) != Some(&1))
    .count()
}

#[test]
fn test_new_validates_config() {
  let config = TerrainConfig::default().with_lod_distance(4.0);
  let result = Terrain::new(config, PlaneSampler::horizontal(0.0));
  assert_eq!(
    result.err(),
    Some(TerrainError::InvalidLodDistance {
      lod_distance: 4.0,
      chunk_size: 16.0,
    })
  );
}

#[test]
fn test_update_builds_region() {
  let mut terrain = plane_terrain();
  let report = terrain.update(FOCAL);

  assert!(report.completed);
  assert_eq!(report.added.len(), 75);
  assert_eq!(report.remeshed.len(), 75);
  assert!(report.removed.is_empty());
  assert_eq!(report.dropped, 0);
  assert_eq!(terrain.store().len(), 75);
  assert_eq!(terrain.pending(), 0);

  // Only the row of chunks containing y = 5 has geometry.
  let renderable: Vec<&Chunk> = terrain.renderable().collect();
  assert_eq!(renderable.len(), 25);
  assert!(renderable.iter().all(|chunk| chunk.coord.y == 0));
}

#[test]
fn test_second_update_is_idle() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  let report = terrain.update(FOCAL);
  assert!(report.completed);
  assert!(report.is_idle(), "{:?}", report);
}

#[test]
fn test_store_matches_selector() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  let selector = terrain.selector().clone();
  let mut lods = HashMap::new();
  for chunk in terrain.chunks() {
    assert_eq!(chunk.lod, selector.lod_for(FOCAL, chunk.coord));
    assert_eq!(chunk.transition_mask, selector.transition_mask_for(FOCAL, chunk.coord));
    assert_eq!(chunk.field.cells(), crate::constants::cells_for_lod(chunk.lod));
    lods.insert(chunk.coord, chunk.lod);
  }
  assert_eq!(validate_gradation(&lods), Ok(()));
  assert!(lods.values().any(|&lod| lod >= 2));
}

#[test]
fn test_transitions_stitch_finer_neighbors() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  // Center 16 away from the focal point: LOD 1 next to the LOD 0 chunk.
  let chunk = terrain.get(ChunkCoord::new(1, 0, 0)).unwrap();
  assert_eq!(chunk.lod, 1);
  assert_eq!(chunk.transition_mask, TransitionMask::EMPTY.with(Face::NegX));

  let seam = chunk.transition(Face::NegX).unwrap();
  assert!(!seam.is_empty());
  assert!(chunk.transition(Face::PosX).is_none());

  // Finest chunk never stitches.
  let center = terrain.get(ChunkCoord::new(0, 0, 0)).unwrap();
  assert!(center.transition_mask.is_empty());
  assert!(center.transitions.is_empty());
}

#[test]
fn test_lod_change_resamples_and_flips_masks() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  let above = ChunkCoord::new(0, 1, 0);
  assert_eq!(
    terrain.get(above).unwrap().transition_mask,
    TransitionMask::EMPTY.with(Face::NegY)
  );

  let report = terrain.update(DVec3::new(24.0, 8.0, 8.0));
  assert!(report.completed);

  // The old center coarsens and now stitches toward the new one.
  let old_center = terrain.get(ChunkCoord::new(0, 0, 0)).unwrap();
  assert_eq!(old_center.lod, 1);
  assert_eq!(old_center.field.cells(), 8);
  assert_eq!(old_center.transition_mask, TransitionMask::EMPTY.with(Face::PosX));
  assert!(old_center.transition(Face::PosX).is_some_and(|t| !t.is_empty()));

  let new_center = terrain.get(ChunkCoord::new(1, 0, 0)).unwrap();
  assert_eq!(new_center.lod, 0);
  assert!(new_center.transitions.is_empty());

  // Same LOD, but its finer neighbor is gone: remeshed without a transition.
  let chunk = terrain.get(above).unwrap();
  assert_eq!(chunk.lod, 1);
  assert!(chunk.transition_mask.is_empty());
  assert!(report.remeshed.contains(&above));
  assert!(!report.added.contains(&above));

  assert_eq!(report.removed.len(), 15);
  assert!(report.removed.iter().all(|c| c.x == -2));
  assert_eq!(report.added.len(), 15);
  assert!(report.added.iter().all(|c| c.x == 3));
}

#[test]
fn test_moving_far_replaces_region() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  let report = terrain.update(FOCAL + DVec3::new(160.0, 0.0, 0.0));
  assert_eq!(report.removed.len(), 75);
  assert_eq!(report.added.len(), 75);
  assert_eq!(terrain.store().len(), 75);
  assert!(!terrain.store().contains(ChunkCoord::new(0, 0, 0)));
  assert!(terrain.store().contains(ChunkCoord::new(10, 0, 0)));

  let mut removed = report.removed.clone();
  removed.sort();
  assert_eq!(removed, report.removed, "removals not in coordinate order");
}

#[test]
fn test_full_store_drops_farthest_chunks() {
  let config = small_config().with_capacity(10);
  let mut terrain = Terrain::new(config, PlaneSampler::horizontal(5.0)).unwrap();

  let report = terrain.update(FOCAL);
  assert!(report.completed);
  assert_eq!(report.dropped, 65);
  assert_eq!(report.added.len(), 10);
  assert_eq!(terrain.store().len(), 10);

  let region = terrain.selector().active_region(FOCAL);
  for &coord in &region[..10] {
    assert!(terrain.store().contains(coord), "nearest chunk {} missing", coord);
  }
}

#[test]
fn test_cancel_leaves_pending_work() {
  let token = CancelToken::new();
  let sampler = CancellingSampler {
    inner: PlaneSampler::horizontal(5.0),
    token: token.clone(),
  };
  let mut terrain = Terrain::new(small_config(), sampler).unwrap();

  let report = terrain.update_with_cancel(FOCAL, &token);
  assert!(!report.completed);
  assert_eq!(report.added, vec![ChunkCoord::new(0, 0, 0)]);
  assert!(report.remeshed.is_empty());
  assert_eq!(terrain.pending(), 1);
  assert!(terrain.get(ChunkCoord::new(0, 0, 0)).unwrap().mesh.is_empty());

  // A fresh token lets the next update finish the job.
  let report = terrain.update(FOCAL);
  assert!(report.completed);
  assert_eq!(report.added.len(), 74);
  assert_eq!(report.remeshed.len(), 75);
  assert_eq!(terrain.pending(), 0);
}

#[test]
fn test_cancel_token_reset() {
  let token = CancelToken::new();
  let shared = token.clone();
  assert!(!token.is_cancelled());

  shared.cancel();
  assert!(token.is_cancelled());

  token.reset();
  assert!(!shared.is_cancelled());
}

#[test]
fn test_parallel_matches_serial() {
  let sampler = SphereSampler::new(DVec3::new(10.3, 7.7, 9.1), 12.0);
  let mut serial = Terrain::new(small_config(), sampler.clone()).unwrap();
  let mut parallel = Terrain::new(small_config().with_parallel(true), sampler).unwrap();

  for focal in [FOCAL, DVec3::new(20.0, 3.0, -6.0)] {
    let a = serial.update(focal);
    let b = parallel.update(focal);
    assert_eq!(a, b);
  }

  assert_eq!(serial.store().len(), parallel.store().len());
  for chunk in serial.chunks() {
    let other = parallel.get(chunk.coord).unwrap();
    assert_eq!(chunk.lod, other.lod);
    assert_eq!(chunk.transition_mask, other.transition_mask);
    assert_eq!(chunk.mesh, other.mesh, "regular mesh differs at {}", chunk.coord);
    assert_eq!(chunk.transitions, other.transitions, "transitions differ at {}", chunk.coord);
  }

  assert!(serial
    .chunks()
    .any(|chunk| chunk.transitions.iter().any(|t| !t.is_empty())));
}

#[test]
fn test_clear_rebuilds_on_next_update() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);
  terrain.clear();
  assert_eq!(terrain.store().len(), 0);

  let report = terrain.update(FOCAL);
  assert_eq!(report.added.len(), 75);
}

#[test]
fn test_noise_terrain_updates() {
  let config = TerrainConfig::default().with_view_distance(1, 1);
  let mut terrain = Terrain::with_noise(config).unwrap();

  let report = terrain.update(DVec3::ZERO);
  assert!(report.completed);
  assert_eq!(terrain.store().len(), 27);
  assert_eq!(terrain.pending(), 0);
}

#[cfg(feature = "metrics")]
#[test]
fn test_update_records_metrics() {
  let mut terrain = plane_terrain();
  terrain.update(FOCAL);

  let metrics = terrain.metrics();
  assert_eq!(metrics.total_chunks(), 75);
  assert_eq!(metrics.visible_chunks, 25);
  assert_eq!(metrics.total_chunks_sampled, 75);
  assert_eq!(metrics.total_chunks_meshed, 75);
  assert_eq!(metrics.update_timings.len(), 1);
}

#[test]
fn test_sphere_across_lod_rings_is_watertight() {
  // Both spheres sit well inside the loaded region and cut through several
  // LOD rings, so every chunk seam and chunk edge they cross must close.
  let cases = [
    (
      TerrainConfig::default()
        .with_lod_distance(16.0)
        .with_view_distance(4, 4)
        .with_max_lod(2),
      SphereSampler::new(DVec3::new(3.3, -2.1, 5.7), 41.7),
      vec![FOCAL, DVec3::new(20.0, 4.0, 12.0)],
    ),
    (
      TerrainConfig::default()
        .with_lod_distance(24.0)
        .with_view_distance(3, 3)
        .with_max_lod(3),
      SphereSampler::new(DVec3::new(-9.8, 15.5, 11.9), 42.6),
      vec![DVec3::new(-8.1, 9.7, 15.8)],
    ),
  ];

  for (config, sampler, focals) in cases {
    let mut terrain = Terrain::new(config, sampler).unwrap();
    for focal in focals {
      let report = terrain.update(focal);
      assert!(report.completed);

      let lods: HashSet<u8> = terrain.renderable().map(|chunk| chunk.lod).collect();
      assert!(lods.len() >= 2, "sphere only touches LODs {:?}", lods);
      assert!(terrain.chunks().any(|chunk| !chunk.transitions.is_empty()));

      let triangles = world_triangles(&terrain);
      assert!(triangles.len() > 1000);
      assert_eq!(open_edges(&triangles), 0, "cracks with focal point {}", focal);
    }
  }
}
