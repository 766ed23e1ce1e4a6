//! Core data types shared by the samplers, meshers and chunk bookkeeping.

use std::fmt;

use glam::{DVec3, IVec3};

use crate::constants::CHUNK_CELLS;

/// Quantized density sample.
/// Negative = inside/solid, Positive = outside/air.
pub type DensitySample = i8;

/// Density conversion utilities for quantized storage.
///
/// Samplers return a clamped linear ramp in [-1, 1]; storage maps that ramp
/// onto [-127, +127]. The magnitude is only used for edge interpolation.
pub mod density_conversion {
  /// Quantization scale (full ramp maps to ±127).
  pub const SCALE: f32 = 127.0;

  /// Inverse scale for converting back to float.
  pub const INV_SCALE: f32 = 1.0 / SCALE;

  /// Convert a float density to quantized i8 storage.
  ///
  /// Values are clamped before rounding, so any finite input is valid. NaN
  /// maps to 0.
  #[inline(always)]
  pub fn to_storage(density: f32) -> i8 {
    (density.clamp(-1.0, 1.0) * SCALE).round() as i8
  }

  /// Convert quantized storage back to float density.
  #[inline(always)]
  pub fn to_float(value: i8) -> f32 {
    value as f32 * INV_SCALE
  }
}

// =============================================================================
// Chunk coordinates and faces
// =============================================================================

/// Integer position of a chunk in chunk-grid space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkCoord {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl ChunkCoord {
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  /// Chunk containing a world position.
  pub fn from_world(position: DVec3, voxel_size: f64) -> Self {
    let chunk = (position / chunk_world_size(voxel_size)).floor();
    Self::new(chunk.x as i32, chunk.y as i32, chunk.z as i32)
  }

  /// Face-adjacent neighbor.
  #[inline]
  pub fn neighbor(self, face: Face) -> Self {
    let [dx, dy, dz] = face.offset();
    Self::new(self.x + dx, self.y + dy, self.z + dz)
  }

  /// World-space minimum corner.
  #[inline]
  pub fn origin(self, voxel_size: f64) -> DVec3 {
    self.as_dvec3() * chunk_world_size(voxel_size)
  }

  /// World-space center.
  #[inline]
  pub fn center(self, voxel_size: f64) -> DVec3 {
    (self.as_dvec3() + DVec3::splat(0.5)) * chunk_world_size(voxel_size)
  }

  #[inline]
  pub fn as_ivec3(self) -> IVec3 {
    IVec3::new(self.x, self.y, self.z)
  }

  #[inline]
  fn as_dvec3(self) -> DVec3 {
    DVec3::new(self.x as f64, self.y as f64, self.z as f64)
  }
}

impl From<IVec3> for ChunkCoord {
  fn from(v: IVec3) -> Self {
    Self::new(v.x, v.y, v.z)
  }
}

impl fmt::Display for ChunkCoord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.x, self.y, self.z)
  }
}

/// World-space side length of every chunk.
#[inline]
pub fn chunk_world_size(voxel_size: f64) -> f64 {
  CHUNK_CELLS as f64 * voxel_size
}

/// One of the six chunk faces, in transition mask bit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
  NegX = 0,
  PosX = 1,
  NegY = 2,
  PosY = 3,
  NegZ = 4,
  PosZ = 5,
}

impl Face {
  pub const ALL: [Face; 6] = [
    Face::NegX,
    Face::PosX,
    Face::NegY,
    Face::PosY,
    Face::NegZ,
    Face::PosZ,
  ];

  #[inline]
  pub const fn from_index(index: usize) -> Option<Face> {
    match index {
      0 => Some(Face::NegX),
      1 => Some(Face::PosX),
      2 => Some(Face::NegY),
      3 => Some(Face::PosY),
      4 => Some(Face::NegZ),
      5 => Some(Face::PosZ),
      _ => None,
    }
  }

  #[inline(always)]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Axis the face is perpendicular to (0 = x, 1 = y, 2 = z).
  #[inline(always)]
  pub const fn axis(self) -> usize {
    self.index() >> 1
  }

  #[inline(always)]
  pub const fn is_positive(self) -> bool {
    self.index() & 1 == 1
  }

  #[inline(always)]
  pub const fn bit(self) -> u8 {
    1 << self.index()
  }

  /// Face of the neighbor that touches this one.
  #[inline]
  pub const fn opposite(self) -> Face {
    match self {
      Face::NegX => Face::PosX,
      Face::PosX => Face::NegX,
      Face::NegY => Face::PosY,
      Face::PosY => Face::NegY,
      Face::NegZ => Face::PosZ,
      Face::PosZ => Face::NegZ,
    }
  }

  /// Unit step toward the neighbor.
  #[inline]
  pub const fn offset(self) -> [i32; 3] {
    let step = if self.is_positive() { 1 } else { -1 };
    match self.axis() {
      0 => [step, 0, 0],
      1 => [0, step, 0],
      _ => [0, 0, step],
    }
  }
}

// =============================================================================
// Transition mask
// =============================================================================

/// Six face bits (−x, +x, −y, +y, −z, +z). A set bit means the neighbor
/// across that face is one LOD finer and this chunk stitches the seam.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransitionMask(u8);

impl TransitionMask {
  pub const EMPTY: TransitionMask = TransitionMask(0);
  pub const ALL: TransitionMask = TransitionMask(0x3F);

  /// Build from raw bits; bits above 5 are ignored.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    Self(bits & 0x3F)
  }

  #[inline(always)]
  pub const fn bits(self) -> u8 {
    self.0
  }

  #[inline(always)]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  #[inline(always)]
  pub const fn contains(self, face: Face) -> bool {
    self.0 & face.bit() != 0
  }

  #[inline]
  pub fn insert(&mut self, face: Face) {
    self.0 |= face.bit();
  }

  #[inline]
  pub fn remove(&mut self, face: Face) {
    self.0 &= !face.bit();
  }

  #[inline]
  pub fn with(mut self, face: Face) -> Self {
    self.insert(face);
    self
  }

  /// Set faces, in bit order.
  pub fn faces(self) -> impl Iterator<Item = Face> {
    Face::ALL.into_iter().filter(move |face| self.contains(*face))
  }
}

impl fmt::Display for TransitionMask {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:06b}", self.0)
  }
}

// =============================================================================
// Vertices
// =============================================================================

/// Regular cell vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularVertex {
  /// Chunk-local position in world units.
  pub position: [f32; 3],

  /// Surface normal (unit vector, pointing toward air).
  pub normal: [f32; 3],

  /// Material tag for the renderer.
  pub material: u32,
}

impl Default for RegularVertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
      material: 0,
    }
  }
}

/// Transition cell vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionVertex {
  /// Undisplaced chunk-local position on the face plane.
  pub position: [f32; 3],

  /// Surface normal (unit vector, pointing toward air).
  pub normal: [f32; 3],

  /// Stitched position that closes the seam with the regular cells.
  pub secondary_position: [f32; 3],

  /// Bits 0-5: chunk faces within one cell. Bit 6: on the high-res face.
  pub border_mask: i32,
}

/// Border mask bit marking a vertex on the high-resolution face.
pub const BORDER_HIGH_RES: i32 = 1 << 6;

// =============================================================================
// Bounds and mesh buffers
// =============================================================================

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Regular cell output of one chunk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
  pub vertices: Vec<RegularVertex>,

  /// Triangle indices (3 per triangle).
  pub indices: Vec<u16>,

  pub bounds: MinMaxAABB,
}

impl ChunkMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Transition cell output for one chunk face.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMesh {
  pub face: Face,
  pub vertices: Vec<TransitionVertex>,

  /// Triangle indices (3 per triangle).
  pub indices: Vec<u16>,

  /// Bounds of the secondary positions.
  pub bounds: MinMaxAABB,
}

impl TransitionMesh {
  pub fn new(face: Face) -> Self {
    Self {
      face,
      vertices: Vec::new(),
      indices: Vec::new(),
      bounds: MinMaxAABB::empty(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
