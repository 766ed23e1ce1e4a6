//! Transvoxel extraction.
//!
//! Converts a chunk's density field into triangles with regular cells, then
//! stitches every face that borders a finer chunk with transition cells.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: DensityField        - (cells + 3)³ i8 samples           │
//! │  neighbors: [Option<&DensityField>; 6] - finer face neighbors   │
//! │  transition_mask            - faces that need stitching         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Regular Cells                       │
//! │  For each cell: 8-bit case code from corner signs               │
//! │    Skip 0 / 255                                                 │
//! │    Class lookup → vertex descriptors + triangle list            │
//! │    Vertex: reuse from owning cell or interpolate + store        │
//! │    Inset vertices near stitched faces (transition width)        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Transition Cells                    │
//! │  For each masked face with a finer neighbor:                    │
//! │    cells × cells transition cells on the face plane             │
//! │    9-bit case code from the neighbor's samples                  │
//! │    Vertices carry primary + secondary position + border mask    │
//! │    Winding flipped on positive faces                            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  ChunkMesh:         RegularVertex[], u16 indices, bounds        │
//! │  TransitionMesh[]:  per face, TransitionVertex[], u16 indices   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Seam Geometry
//!
//! ```text
//!   fine chunk │ coarse chunk
//!              │
//!      *──*──*─┼─*╲                     * fine boundary vertices
//!              │   ╲   transition       o inset regular vertices
//!              │    o──────────o        slab width = transition_width
//!              │    ↑                   cells
//!              plane
//! ```
//!
//! The high-resolution side of each transition slab reproduces the fine
//! neighbor's boundary vertices exactly; the low-resolution side
//! reproduces the inset regular vertices exactly. Both come from the same
//! fixed-point interpolation of the same samples, so the seam is closed.

mod gradient;
mod lod_seams;
mod regular;
mod reuse;
mod transition;

use smallvec::SmallVec;

pub use lod_seams::{border_mask, transition_offset};
pub use regular::generate_regular;
pub use transition::{generate_transition_face, generate_transitions};

/// Per-chunk meshing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshConfig {
  /// World size of one cell of the field being meshed.
  pub cell_size: f32,

  /// Transition slab width as a fraction of a cell.
  pub transition_width: f32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      cell_size: 1.0,
      transition_width: 0.5,
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }

  pub fn with_transition_width(mut self, width: f32) -> Self {
    self.transition_width = width;
    self
  }
}

/// Transition meshes of one chunk, one per stitched face.
pub type TransitionMeshes = SmallVec<[crate::types::TransitionMesh; 3]>;

/// Fixed-point interpolation parameter of the zero crossing between two
/// samples of opposite sign: 0 snaps to `d1`'s corner, 256 to `d0`'s.
#[inline(always)]
pub(crate) fn interpolation_t(d0: i8, d1: i8) -> i32 {
  let d0 = d0 as i32;
  let d1 = d1 as i32;
  debug_assert!(d1 != d0, "interpolating an edge without a sign change");
  (d1 * crate::constants::INTERPOLATION_ONE) / (d1 - d0)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
