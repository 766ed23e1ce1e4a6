use super::*;

#[test]
fn test_rolling_window() {
  let mut window = RollingWindow::new(3);
  assert!(window.is_empty());
  assert_eq!(window.min_max(), None);

  window.push(10u64);
  window.push(20);
  window.push(30);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 60);
  assert_eq!(window.average(), 20.0);

  // Oldest value is evicted.
  window.push(40);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 90);
  assert_eq!(window.min_max(), Some((20, 40)));
  assert_eq!(window.last(), Some(&40));
}

#[test]
fn test_zero_capacity_window_stays_empty() {
  let mut window = RollingWindow::new(0);
  window.push(1u64);
  assert!(window.is_empty());
}

#[cfg(not(feature = "metrics"))]
#[test]
fn test_recording_is_noop_without_feature() {
  let mut metrics = TerrainMetrics::new();
  assert!(!metrics.is_enabled());

  metrics.record_mesh_pass(100, 4);
  assert!(metrics.mesh_timings.is_empty());
  assert_eq!(metrics.total_chunks_meshed, 0);
}

#[cfg(feature = "metrics")]
#[test]
fn test_timing_recording() {
  let mut metrics = TerrainMetrics::new();

  metrics.record_mesh_pass(1000, 2);
  metrics.record_mesh_pass(3000, 1);
  metrics.record_sample_pass(500, 5);

  assert_eq!(metrics.avg_mesh_timing_us(), 2000.0);
  assert_eq!(metrics.total_chunks_meshed, 3);
  assert_eq!(metrics.total_chunks_sampled, 5);

  metrics.enabled = false;
  metrics.record_mesh_pass(9000, 1);
  assert_eq!(metrics.mesh_timings.len(), 2);
}

#[cfg(feature = "metrics")]
#[test]
fn test_per_lod_snapshot() {
  use crate::density::DensityField;
  use crate::test_utils::half_space_field;
  use crate::transvoxel::{generate_regular, MeshConfig};
  use crate::types::{ChunkCoord, TransitionMask};

  let mut surface = Chunk::new(ChunkCoord::new(0, 0, 0), 1, half_space_field(8, 3.5));
  surface.mesh = generate_regular(&surface.field, TransitionMask::EMPTY, &MeshConfig::default());
  let air = Chunk::new(ChunkCoord::new(0, 1, 0), 1, DensityField::filled(8, 127));
  let near = Chunk::new(ChunkCoord::new(1, 0, 0), 0, DensityField::filled(16, 127));

  let mut metrics = TerrainMetrics::new();
  metrics.update_from_chunks([&surface, &air, &near].into_iter());

  assert_eq!(metrics.chunks_per_lod, [1, 2, 0, 0]);
  assert_eq!(metrics.total_chunks(), 3);
  assert_eq!(metrics.visible_chunks, 1);
  assert_eq!(metrics.triangles_per_lod[1], 2 * 8 * 8);
  assert_eq!(metrics.vertices_per_lod[1], 9 * 9);
  assert!(metrics.mesh_memory_bytes > 0);
}
