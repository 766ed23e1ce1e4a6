//! Terrain statistics.
//!
//! Feature-gated and runtime-toggled: without the `metrics` feature every
//! recording call is a no-op, with it [`TerrainMetrics::enabled`] switches
//! collection at runtime.
//!
//! # Usage
//!
//! ```ignore
//! // Compile with --features metrics
//! let report = terrain.update(focal);
//! let metrics = terrain.metrics();
//! println!("{} chunks, {:.0} us/mesh", metrics.total_chunks(), metrics.avg_mesh_timing_us());
//! ```

use std::collections::VecDeque;

use crate::chunk::Chunk;
use crate::constants::MAX_SUPPORTED_LOD;

const LOD_SLOTS: usize = MAX_SUPPORTED_LOD as usize + 1;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.capacity == 0 {
      return;
    }
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Values from oldest to newest.
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  pub fn sum(&self) -> T {
    self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = self.buffer.iter().min()?;
    let max = self.buffer.iter().max()?;
    Some((*min, *max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Per-terrain statistics, refreshed after every update.
#[derive(Debug, Clone)]
pub struct TerrainMetrics {
  /// Runtime switch; ignored without the `metrics` feature.
  pub enabled: bool,

  // LOD distribution (index = LOD)
  pub chunks_per_lod: [u32; LOD_SLOTS],
  pub vertices_per_lod: [u64; LOD_SLOTS],
  pub triangles_per_lod: [u64; LOD_SLOTS],

  /// Chunks with geometry.
  pub visible_chunks: u32,
  /// Approximate mesh memory (vertex and index buffers).
  pub mesh_memory_bytes: u64,

  /// Sampling pass durations in microseconds.
  pub sample_timings: RollingWindow<u64>,
  /// Meshing pass durations in microseconds.
  pub mesh_timings: RollingWindow<u64>,
  /// Whole update durations in microseconds.
  pub update_timings: RollingWindow<u64>,

  /// Chunks sampled since creation.
  pub total_chunks_sampled: u64,
  /// Chunks meshed since creation.
  pub total_chunks_meshed: u64,
}

impl Default for TerrainMetrics {
  fn default() -> Self {
    Self {
      enabled: true,
      chunks_per_lod: [0; LOD_SLOTS],
      vertices_per_lod: [0; LOD_SLOTS],
      triangles_per_lod: [0; LOD_SLOTS],
      visible_chunks: 0,
      mesh_memory_bytes: 0,
      sample_timings: RollingWindow::default(),
      mesh_timings: RollingWindow::default(),
      update_timings: RollingWindow::default(),
      total_chunks_sampled: 0,
      total_chunks_meshed: 0,
    }
  }
}

impl TerrainMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// True if recording calls have any effect.
  #[inline]
  pub fn is_enabled(&self) -> bool {
    cfg!(feature = "metrics") && self.enabled
  }

  pub fn record_sample_pass(&mut self, timing_us: u64, chunks: usize) {
    if self.is_enabled() {
      self.sample_timings.push(timing_us);
      self.total_chunks_sampled += chunks as u64;
    }
  }

  pub fn record_mesh_pass(&mut self, timing_us: u64, chunks: usize) {
    if self.is_enabled() {
      self.mesh_timings.push(timing_us);
      self.total_chunks_meshed += chunks as u64;
    }
  }

  pub fn record_update(&mut self, timing_us: u64) {
    if self.is_enabled() {
      self.update_timings.push(timing_us);
    }
  }

  /// Recompute the per-LOD snapshot from the stored chunks.
  pub fn update_from_chunks<'a>(&mut self, chunks: impl Iterator<Item = &'a Chunk>) {
    if !self.is_enabled() {
      return;
    }

    self.chunks_per_lod.fill(0);
    self.vertices_per_lod.fill(0);
    self.triangles_per_lod.fill(0);
    self.visible_chunks = 0;
    self.mesh_memory_bytes = 0;

    for chunk in chunks {
      let lod = (chunk.lod as usize).min(LOD_SLOTS - 1);
      let vertices = chunk.mesh.vertex_count()
        + chunk.transitions.iter().map(|t| t.vertex_count()).sum::<usize>();
      let triangles = chunk.triangle_count();

      self.chunks_per_lod[lod] += 1;
      self.vertices_per_lod[lod] += vertices as u64;
      self.triangles_per_lod[lod] += triangles as u64;

      if !chunk.is_empty() {
        self.visible_chunks += 1;
      }

      let regular_bytes = chunk.mesh.vertex_count() * std::mem::size_of::<crate::types::RegularVertex>();
      let transition_bytes = chunk
        .transitions
        .iter()
        .map(|t| t.vertex_count() * std::mem::size_of::<crate::types::TransitionVertex>())
        .sum::<usize>();
      let index_bytes = triangles * 3 * std::mem::size_of::<u16>();
      self.mesh_memory_bytes += (regular_bytes + transition_bytes + index_bytes) as u64;
    }
  }

  pub fn total_chunks(&self) -> u32 {
    self.chunks_per_lod.iter().sum()
  }

  pub fn total_vertices(&self) -> u64 {
    self.vertices_per_lod.iter().sum()
  }

  pub fn total_triangles(&self) -> u64 {
    self.triangles_per_lod.iter().sum()
  }

  pub fn avg_sample_timing_us(&self) -> f64 {
    self.sample_timings.average()
  }

  pub fn avg_mesh_timing_us(&self) -> f64 {
    self.mesh_timings.average()
  }

  pub fn mesh_memory_mb(&self) -> f64 {
    self.mesh_memory_bytes as f64 / 1_048_576.0
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
