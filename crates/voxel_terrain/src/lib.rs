//! voxel_terrain - Transvoxel terrain with crack-free LOD seams
//!
//! Chunked isosurface extraction over a signed density field. Chunks near a
//! focal point are sampled finely, distant ones coarsely, and every face
//! bordering a finer chunk is stitched with a Transvoxel transition strip so
//! the surface stays watertight across LOD changes.
//!
//! # Features
//!
//! - **Regular cells**: Modified Marching Cubes over 256 corner cases with
//!   vertex reuse across cells
//! - **Transition cells**: 9-sample half-resolution faces (512 cases) that
//!   bridge a chunk to its finer neighbor
//! - **Distance LOD**: ring-based LOD selection that never lets face
//!   neighbors differ by more than one level
//! - **Chunk store**: fixed-capacity spatial hash keyed by chunk coordinate
//! - **Parallel updates**: sampling and meshing passes on rayon, with
//!   results identical to a serial run
//!
//! # Example
//!
//! ```ignore
//! use glam::DVec3;
//! use voxel_terrain::{Terrain, TerrainConfig};
//!
//! let config = TerrainConfig::default().with_parallel(true);
//! let mut terrain = Terrain::with_noise(config)?;
//!
//! let report = terrain.update(DVec3::new(0.0, 40.0, 0.0));
//! for coord in &report.remeshed {
//!   let chunk = terrain.get(*coord).unwrap();
//!   println!("{} LOD {}: {} triangles", coord, chunk.lod, chunk.triangle_count());
//! }
//! ```

pub mod constants;
pub mod error;
pub mod types;

pub use constants::{cells_for_lod, CHUNK_CELLS, MAX_SUPPORTED_LOD};
pub use error::{ChunkStoreError, TerrainError, TerrainResult};
pub use types::{
  density_conversion, ChunkCoord, ChunkMesh, DensitySample, Face, MinMaxAABB, RegularVertex,
  TransitionMask, TransitionMesh, TransitionVertex, BORDER_HIGH_RES,
};

// Configuration (TOML/serde friendly)
pub mod config;
pub use config::{NoiseConfig, TerrainConfig};

// Lengyel's case tables
pub mod tables;

// Density fields and samplers
pub mod density;
pub use density::{DensityField, DensitySampler, NoiseTerrain};

// Regular and transition cell meshing
pub mod transvoxel;
pub use transvoxel::{
  generate_regular, generate_transition_face, generate_transitions, MeshConfig, TransitionMeshes,
};

// Chunk bookkeeping
pub mod chunk;
pub mod chunk_store;
pub mod lod;
pub use chunk::Chunk;
pub use chunk_store::{ChunkStore, Insert};
pub use lod::{validate_gradation, GradationViolation, LodSelector};

// Update driver
pub mod terrain;
pub use terrain::{CancelToken, Terrain, UpdateReport};

pub mod metrics;
pub use metrics::{RollingWindow, TerrainMetrics};

// Synthetic samplers and fixtures for tests and benches
pub mod test_utils;
