use super::*;

use crate::error::TerrainError;

fn selector() -> LodSelector {
  LodSelector::new(&TerrainConfig::default()).unwrap()
}

#[test]
fn test_new_rejects_short_lod_distance() {
  let config = TerrainConfig::default().with_lod_distance(10.0);
  assert_eq!(
    LodSelector::new(&config),
    Err(TerrainError::InvalidLodDistance {
      lod_distance: 10.0,
      chunk_size: 16.0,
    })
  );

  // Exactly one chunk is allowed.
  assert!(LodSelector::new(&TerrainConfig::default().with_lod_distance(16.0)).is_ok());
}

#[test]
fn test_new_rejects_unsupported_lod() {
  let config = TerrainConfig::default().with_max_lod(4);
  assert_eq!(
    LodSelector::new(&config),
    Err(TerrainError::UnsupportedLod {
      requested: 4,
      supported: 3,
    })
  );
}

#[test]
fn test_lod_rings() {
  let selector = selector();
  let focal = DVec3::splat(8.0);

  assert_eq!(selector.lod_for(focal, ChunkCoord::new(0, 0, 0)), 0);
  assert_eq!(selector.lod_for(focal, ChunkCoord::new(2, 0, 0)), 0);
  // Center at distance 48: first ring boundary.
  assert_eq!(selector.lod_for(focal, ChunkCoord::new(3, 0, 0)), 1);
  assert_eq!(selector.lod_for(focal, ChunkCoord::new(-6, 0, 0)), 2);
  assert_eq!(selector.lod_for(focal, ChunkCoord::new(10, 0, 0)), 3);
  // Clamped to max_lod.
  assert_eq!(selector.lod_for(focal, ChunkCoord::new(100, 0, 0)), 3);
}

#[test]
fn test_lod_respects_max_lod() {
  let selector = LodSelector::new(&TerrainConfig::default().with_max_lod(1)).unwrap();
  assert_eq!(selector.lod_for(DVec3::ZERO, ChunkCoord::new(50, 0, 0)), 1);
}

#[test]
fn test_transition_mask_points_at_finer_neighbor() {
  let selector = selector();
  let focal = DVec3::splat(8.0);

  let mask = selector.transition_mask_for(focal, ChunkCoord::new(3, 0, 0));
  assert_eq!(mask, TransitionMask::EMPTY.with(Face::NegX));

  let mask = selector.transition_mask_for(focal, ChunkCoord::new(0, 0, -3));
  assert_eq!(mask, TransitionMask::EMPTY.with(Face::PosZ));
}

#[test]
fn test_finest_chunks_never_stitch() {
  let selector = selector();
  let focal = DVec3::new(3.0, 9.5, -20.0);
  for coord in selector.active_region(focal) {
    if selector.lod_for(focal, coord) == 0 {
      assert!(selector.transition_mask_for(focal, coord).is_empty());
    }
  }
}

#[test]
fn test_mask_flips_when_focal_moves() {
  let selector = selector();
  let coord = ChunkCoord::new(3, 0, 0);

  let near = DVec3::splat(8.0);
  assert!(selector.transition_mask_for(near, coord).contains(Face::NegX));

  // Focal inside the chunk: LOD 0, nothing to stitch.
  let inside = ChunkCoord::new(3, 0, 0).center(1.0);
  assert_eq!(selector.lod_for(inside, coord), 0);
  assert!(selector.transition_mask_for(inside, coord).is_empty());
}

#[test]
fn test_active_region_box() {
  let config = TerrainConfig::default().with_view_distance(1, 1);
  let selector = LodSelector::new(&config).unwrap();
  let focal = DVec3::new(8.0, 8.0, 8.0);

  let region = selector.active_region(focal);
  assert_eq!(region.len(), 27);
  assert_eq!(region[0], ChunkCoord::new(0, 0, 0));

  let mut unique = region.clone();
  unique.sort();
  unique.dedup();
  assert_eq!(unique.len(), 27);

  let distances: Vec<f64> = region
    .iter()
    .map(|c| c.center(1.0).distance_squared(focal))
    .collect();
  assert!(distances.windows(2).all(|w| w[0] <= w[1]), "region not nearest first");
}

#[test]
fn test_active_region_follows_focal_chunk() {
  let config = TerrainConfig::default().with_view_distance(2, 0);
  let selector = LodSelector::new(&config).unwrap();
  let region = selector.active_region(DVec3::new(-40.0, 20.0, 100.0));

  assert_eq!(region.len(), 25);
  assert_eq!(region[0], ChunkCoord::new(-3, 1, 6));
  assert!(region.iter().all(|c| c.y == 1));
}

#[test]
fn test_gradation_holds_over_regions() {
  let config = TerrainConfig::default()
    .with_lod_distance(16.0)
    .with_view_distance(8, 3);
  let selector = LodSelector::new(&config).unwrap();

  for focal in [
    DVec3::ZERO,
    DVec3::new(8.0, 8.0, 8.0),
    DVec3::new(-123.4, 17.9, 55.5),
    DVec3::new(1000.0, -3.0, -999.0),
  ] {
    let lods: HashMap<ChunkCoord, u8> = selector
      .active_region(focal)
      .into_iter()
      .map(|coord| (coord, selector.lod_for(focal, coord)))
      .collect();
    assert_eq!(validate_gradation(&lods), Ok(()), "focal {:?}", focal);
    assert!(lods.values().any(|&lod| lod > 0));
  }
}

#[test]
fn test_gradation_reports_violation() {
  let mut lods = HashMap::new();
  lods.insert(ChunkCoord::new(0, 0, 0), 0);
  lods.insert(ChunkCoord::new(1, 0, 0), 1);
  lods.insert(ChunkCoord::new(2, 0, 0), 3);

  assert_eq!(
    validate_gradation(&lods),
    Err(GradationViolation {
      coord: ChunkCoord::new(1, 0, 0),
      lod: 1,
      neighbor: ChunkCoord::new(2, 0, 0),
      neighbor_lod: 3,
    })
  );
}
