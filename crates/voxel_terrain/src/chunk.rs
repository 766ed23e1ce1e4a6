//! Per-chunk state kept by the terrain.

use crate::density::DensityField;
use crate::transvoxel::TransitionMeshes;
use crate::types::{ChunkCoord, ChunkMesh, Face, TransitionMask, TransitionMesh};

/// One chunk of terrain: its samples and the meshes built from them.
#[derive(Clone, Debug)]
pub struct Chunk {
  pub coord: ChunkCoord,

  /// LOD the field was sampled at (0 = finest).
  pub lod: u8,

  /// Faces stitched to a finer neighbor at the last mesh build.
  pub transition_mask: TransitionMask,

  pub field: DensityField,

  /// Regular cell geometry.
  pub mesh: ChunkMesh,

  /// One mesh per stitched face.
  pub transitions: TransitionMeshes,

  /// Set when the field changed and the meshes are stale.
  pub needs_mesh: bool,
}

impl Chunk {
  /// Chunk holding freshly sampled data and no geometry yet.
  pub fn new(coord: ChunkCoord, lod: u8, field: DensityField) -> Self {
    Self {
      coord,
      lod,
      transition_mask: TransitionMask::EMPTY,
      field,
      mesh: ChunkMesh::new(),
      transitions: TransitionMeshes::new(),
      needs_mesh: true,
    }
  }

  /// Triangles across the regular and transition meshes.
  pub fn triangle_count(&self) -> usize {
    self.mesh.triangle_count()
      + self
        .transitions
        .iter()
        .map(TransitionMesh::triangle_count)
        .sum::<usize>()
  }

  /// True if the chunk has nothing to draw.
  pub fn is_empty(&self) -> bool {
    self.mesh.is_empty() && self.transitions.iter().all(TransitionMesh::is_empty)
  }

  /// Transition mesh for `face`, if that face is stitched.
  pub fn transition(&self, face: Face) -> Option<&TransitionMesh> {
    self.transitions.iter().find(|mesh| mesh.face == face)
  }
}
