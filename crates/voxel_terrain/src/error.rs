//! Error types.
//!
//! Only recoverable conditions live here. Broken invariants (a neighbor LOD
//! gap above one, a table index out of range) are debug assertions.

use thiserror::Error;

/// Configuration errors reported by constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
  /// Voxel size is zero, negative, or not finite.
  #[error("invalid voxel size {0}: must be finite and positive")]
  InvalidVoxelSize(f64),

  /// Requested LOD range exceeds what a chunk can be subdivided into.
  #[error("unsupported max LOD {requested}: at most {supported}")]
  UnsupportedLod {
    /// The configured maximum.
    requested: u8,
    /// The coarsest LOD a chunk supports.
    supported: u8,
  },

  /// LOD rings narrower than a chunk would let face neighbors differ by
  /// more than one LOD.
  #[error("LOD distance {lod_distance} is shorter than the chunk size {chunk_size}")]
  InvalidLodDistance {
    /// World distance per LOD step.
    lod_distance: f64,
    /// World size of a chunk.
    chunk_size: f64,
  },

  /// Chunk store capacity of zero.
  #[error("chunk store capacity must be non-zero")]
  ZeroCapacity,

  /// Transition slab width outside (0, 1) cells.
  #[error("transition width {0} must lie strictly between 0 and 1")]
  InvalidTransitionWidth(f32),
}

/// Result type for terrain construction.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Errors from the chunk store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStoreError {
  /// The store already tracks its maximum number of chunks.
  #[error("chunk store full: capacity {capacity}")]
  Full {
    /// Maximum number of chunks.
    capacity: usize,
  },
}
