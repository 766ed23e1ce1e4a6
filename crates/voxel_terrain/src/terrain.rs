//! Terrain context: one update turns a focal point into meshed chunks.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ Terrain::update(focal)                                              │
//! │                                                                     │
//! │  1. Region    LodSelector::active_region → (coord, lod), nearest    │
//! │               first; chunks outside the region are removed          │
//! │                                                                     │
//! │  2. Sample    every missing chunk and every chunk whose LOD         │
//! │               changed: DensityField::sample  (rayon if parallel)    │
//! │               → ChunkStore::insert (Full: drop + warn)              │
//! │                                                                     │
//! │  3. Stale     chunks whose transition mask changed, and coarser     │
//! │               neighbors of resampled chunks, need new meshes        │
//! │                                                                     │
//! │  4. Mesh      generate_regular + generate_transitions per stale     │
//! │               chunk, reading neighbor fields  (rayon if parallel)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sampling pass always finishes before meshing starts, so every
//! transition reads final neighbor fields. Results of both passes are
//! applied in region order, which makes serial and parallel updates
//! produce identical stores.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::DVec3;
use rayon::prelude::*;
use tracing::{debug, trace, warn};
use web_time::Instant;

use crate::chunk::Chunk;
use crate::chunk_store::{ChunkStore, Insert};
use crate::config::TerrainConfig;
use crate::density::{DensityField, DensitySampler, NoiseTerrain};
use crate::error::TerrainResult;
use crate::lod::LodSelector;
use crate::metrics::TerrainMetrics;
use crate::transvoxel::{generate_regular, generate_transitions, MeshConfig, TransitionMeshes};
use crate::types::{ChunkCoord, ChunkMesh, Face, TransitionMask};

/// Shared flag that stops an update between chunks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  #[inline]
  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }

  /// Clear the flag so the token can be reused.
  pub fn reset(&self) {
    self.0.store(false, Ordering::Relaxed);
  }
}

/// What an update changed, for renderers to upload or despawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
  /// Coordinates tracked for the first time.
  pub added: Vec<ChunkCoord>,

  /// Coordinates whose meshes were rebuilt (new chunks included).
  pub remeshed: Vec<ChunkCoord>,

  /// Coordinates that left the active region.
  pub removed: Vec<ChunkCoord>,

  /// Chunks not stored because the store was full.
  pub dropped: usize,

  /// False if the update was cancelled; pending work resumes next update.
  pub completed: bool,
}

impl UpdateReport {
  /// True if nothing changed.
  pub fn is_idle(&self) -> bool {
    self.added.is_empty() && self.remeshed.is_empty() && self.removed.is_empty() && self.dropped == 0
  }
}

struct BuiltMesh {
  coord: ChunkCoord,
  mask: TransitionMask,
  mesh: ChunkMesh,
  transitions: TransitionMeshes,
}

/// Chunked Transvoxel terrain around a moving focal point.
///
/// Generic over the sampler so hot paths can be specialized; use
/// `Box<dyn DensitySampler>` to swap samplers at runtime.
pub struct Terrain<S: DensitySampler> {
  config: TerrainConfig,
  sampler: S,
  selector: LodSelector,
  store: ChunkStore,
  metrics: TerrainMetrics,
}

impl Terrain<NoiseTerrain> {
  /// Terrain over the noise described by `config.noise`.
  pub fn with_noise(config: TerrainConfig) -> TerrainResult<Self> {
    let sampler = NoiseTerrain::new(config.noise.clone());
    Self::new(config, sampler)
  }
}

impl<S: DensitySampler> Terrain<S> {
  pub fn new(config: TerrainConfig, sampler: S) -> TerrainResult<Self> {
    let selector = LodSelector::new(&config)?;
    let store = ChunkStore::with_capacity(config.capacity);
    Ok(Self {
      config,
      sampler,
      selector,
      store,
      metrics: TerrainMetrics::new(),
    })
  }

  pub fn config(&self) -> &TerrainConfig {
    &self.config
  }

  pub fn sampler(&self) -> &S {
    &self.sampler
  }

  pub fn selector(&self) -> &LodSelector {
    &self.selector
  }

  pub fn store(&self) -> &ChunkStore {
    &self.store
  }

  pub fn metrics(&self) -> &TerrainMetrics {
    &self.metrics
  }

  pub fn metrics_mut(&mut self) -> &mut TerrainMetrics {
    &mut self.metrics
  }

  pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
    self.store.get(coord)
  }

  /// All tracked chunks, empty ones included.
  pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
    self.store.iter()
  }

  /// Chunks with geometry.
  pub fn renderable(&self) -> impl Iterator<Item = &Chunk> {
    self.store.iter().filter(|chunk| !chunk.is_empty())
  }

  /// Chunks waiting for a mesh build.
  pub fn pending(&self) -> usize {
    self.store.iter().filter(|chunk| chunk.needs_mesh).count()
  }

  /// Drop every chunk; the next update rebuilds the region.
  pub fn clear(&mut self) {
    self.store.clear();
  }

  /// Bring the region around `focal` up to date.
  pub fn update(&mut self, focal: DVec3) -> UpdateReport {
    self.update_with_cancel(focal, &CancelToken::new())
  }

  /// [`update`](Self::update) that stops between chunks once `cancel` is
  /// set. Chunks left unmeshed keep `needs_mesh` and are finished by a later
  /// update.
  #[cfg_attr(
    feature = "profiling",
    tracing::instrument(skip_all, name = "terrain::update")
  )]
  pub fn update_with_cancel(&mut self, focal: DVec3, cancel: &CancelToken) -> UpdateReport {
    let start = Instant::now();
    let mut report = UpdateReport::default();

    let region = self.selector.active_region(focal);
    self.remove_outside(&region, &mut report);

    let targets: Vec<(ChunkCoord, u8)> = region
      .iter()
      .map(|&coord| (coord, self.selector.lod_for(focal, coord)))
      .collect();
    let resampled = self.sample_pass(&targets, cancel, &mut report);

    report.completed = if cancel.is_cancelled() {
      false
    } else {
      self.mark_stale(focal, &region, &resampled);
      self.mesh_pass(focal, &region, cancel, &mut report)
    };

    self.metrics.record_update(start.elapsed().as_micros() as u64);
    self.metrics.update_from_chunks(self.store.iter());

    debug!(
      added = report.added.len(),
      remeshed = report.remeshed.len(),
      removed = report.removed.len(),
      dropped = report.dropped,
      completed = report.completed,
      chunks = self.store.len(),
      "terrain update"
    );
    report
  }

  fn remove_outside(&mut self, region: &[ChunkCoord], report: &mut UpdateReport) {
    let keep: HashSet<ChunkCoord> = region.iter().copied().collect();
    let mut outside: Vec<ChunkCoord> = self.store.coords().filter(|c| !keep.contains(c)).collect();
    outside.sort_unstable();

    for coord in outside {
      if self.store.remove(coord).is_some() {
        report.removed.push(coord);
      }
    }
  }

  /// Sample missing chunks and chunks whose LOD changed. Returns the stored
  /// `(coord, lod)` pairs.
  fn sample_pass(
    &mut self,
    targets: &[(ChunkCoord, u8)],
    cancel: &CancelToken,
    report: &mut UpdateReport,
  ) -> Vec<(ChunkCoord, u8)> {
    #[cfg(feature = "profiling")]
    let _span = tracing::info_span!("sample_pass").entered();

    let jobs: Vec<(ChunkCoord, u8)> = targets
      .iter()
      .copied()
      .filter(|&(coord, lod)| self.store.get(coord).map_or(true, |chunk| chunk.lod != lod))
      .collect();
    if jobs.is_empty() {
      return Vec::new();
    }

    let start = Instant::now();
    let voxel_size = self.config.voxel_size;
    let sampler = &self.sampler;
    let fields = run_jobs(self.config.parallel, jobs, |(coord, lod)| {
      if cancel.is_cancelled() {
        return None;
      }
      Some((coord, lod, DensityField::sample(coord, lod, voxel_size, sampler)))
    });

    let mut stored = Vec::new();
    for (coord, lod, field) in fields.into_iter().flatten() {
      match self.store.insert(Chunk::new(coord, lod, field)) {
        Ok(Insert::Vacant) => {
          report.added.push(coord);
          stored.push((coord, lod));
        }
        Ok(Insert::Replaced(old)) => {
          trace!(%coord, from = old.lod, to = lod, "chunk changed LOD");
          stored.push((coord, lod));
        }
        Err(err) => {
          warn!(%coord, %err, "dropping chunk");
          report.dropped += 1;
        }
      }
    }

    self
      .metrics
      .record_sample_pass(start.elapsed().as_micros() as u64, stored.len());
    stored
  }

  fn mark_stale(&mut self, focal: DVec3, region: &[ChunkCoord], resampled: &[(ChunkCoord, u8)]) {
    // Coarser neighbors stitch against the new field.
    for &(coord, lod) in resampled {
      for face in Face::ALL {
        if let Some(neighbor) = self.store.get_mut(coord.neighbor(face)) {
          if neighbor.lod == lod + 1 {
            neighbor.needs_mesh = true;
          }
        }
      }
    }

    for &coord in region {
      let mask = self.selector.transition_mask_for(focal, coord);
      if let Some(chunk) = self.store.get_mut(coord) {
        if chunk.transition_mask != mask {
          chunk.needs_mesh = true;
        }
      }
    }
  }

  /// Rebuild stale meshes. Returns false if cancelled before all finished.
  fn mesh_pass(
    &mut self,
    focal: DVec3,
    region: &[ChunkCoord],
    cancel: &CancelToken,
    report: &mut UpdateReport,
  ) -> bool {
    #[cfg(feature = "profiling")]
    let _span = tracing::info_span!("mesh_pass").entered();

    let jobs: Vec<(ChunkCoord, TransitionMask)> = region
      .iter()
      .filter(|&&coord| self.store.get(coord).is_some_and(|chunk| chunk.needs_mesh))
      .map(|&coord| (coord, self.selector.transition_mask_for(focal, coord)))
      .collect();
    if jobs.is_empty() {
      return true;
    }

    let start = Instant::now();
    let store = &self.store;
    let config = &self.config;
    let built = run_jobs(config.parallel, jobs, |(coord, mask)| {
      if cancel.is_cancelled() {
        return None;
      }
      store
        .get(coord)
        .map(|chunk| build_meshes(store, chunk, mask, config))
    });

    let mut completed = true;
    let mut meshed = 0;
    for result in built {
      let Some(result) = result else {
        completed = false;
        continue;
      };
      if let Some(chunk) = self.store.get_mut(result.coord) {
        chunk.transition_mask = result.mask;
        chunk.mesh = result.mesh;
        chunk.transitions = result.transitions;
        chunk.needs_mesh = false;
        report.remeshed.push(result.coord);
        meshed += 1;
      }
    }

    self
      .metrics
      .record_mesh_pass(start.elapsed().as_micros() as u64, meshed);
    completed
  }
}

fn build_meshes(
  store: &ChunkStore,
  chunk: &Chunk,
  mask: TransitionMask,
  config: &TerrainConfig,
) -> BuiltMesh {
  let mesh_config = MeshConfig::new()
    .with_cell_size(config.cell_size(chunk.lod) as f32)
    .with_transition_width(config.transition_width);

  let mesh = generate_regular(&chunk.field, mask, &mesh_config);

  let neighbors: [Option<&DensityField>; 6] = Face::ALL.map(|face| {
    if mask.contains(face) {
      store.get(chunk.coord.neighbor(face)).map(|n| &n.field)
    } else {
      None
    }
  });
  let transitions = generate_transitions(&chunk.field, &neighbors, mask, &mesh_config);

  trace!(
    coord = %chunk.coord,
    lod = chunk.lod,
    %mask,
    triangles = mesh.triangle_count(),
    "meshed chunk"
  );

  BuiltMesh {
    coord: chunk.coord,
    mask,
    mesh,
    transitions,
  }
}

/// Map `work` over `jobs`, on the rayon pool if `parallel`. Output order
/// matches input order either way.
fn run_jobs<T, R, F>(parallel: bool, jobs: Vec<T>, work: F) -> Vec<R>
where
  T: Send,
  R: Send,
  F: Fn(T) -> R + Sync + Send,
{
  if parallel {
    jobs.into_par_iter().map(work).collect()
  } else {
    jobs.into_iter().map(work).collect()
  }
}

#[cfg(test)]
#[path = "terrain_test.rs"]
mod terrain_test;
