//! Transvoxel lookup tables.
//!
//! Two table families drive extraction:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  REGULAR CELLS (8 corners, 256 case codes)                           │
//! │    REGULAR_CELL_CLASS[case]   → class index                          │
//! │    REGULAR_CELL_DATA[class]   → vertex count, triangle list          │
//! │    REGULAR_VERTEX_DATA[case]  → per-vertex edge + reuse descriptor   │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  TRANSITION CELLS (9 high-res + 4 low-res points, 512 case codes)    │
//! │    TRANSITION_CELL_CLASS[case]  → class index                        │
//! │    TRANSITION_CELL_DATA[class]  → vertex count, triangle list        │
//! │    TRANSITION_VERTEX_DATA[case] → per-vertex edge + reuse descriptor │
//! │    TRANSITION_CORNER_DATA[pt]   → reuse descriptor for a snapped pt  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Vertex Descriptor Encoding
//!
//! ```text
//!   15      12 11       8 7        4 3        0
//!  ┌──────────┬──────────┬──────────┬──────────┐
//!  │ owner dir│  slot    │    v0    │    v1    │
//!  └──────────┴──────────┴──────────┴──────────┘
//!
//!  owner dir: bit 0 = x-1 (u-1), bit 1 = y-1 (v-1), bit 2 = z-1,
//!             0x8 = owned by the current cell
//!  slot:      reuse slot inside the owning cell
//!  v0 < v1:   corner (or transition point) indices of the edge
//! ```
//!
//! Triangles are wound counter-clockwise when viewed from the positive
//! (outside) side of the surface. Faces whose two inside corners sit on a
//! diagonal are resolved so that the inside corners stay separated.
//!
//! # Transition Cell Points
//!
//! ```text
//!  high-res face (w = 0)        low-res face (w = 1)
//!
//!   6 ─── 7 ─── 8                 11 ─────────── 12
//!   │     │     │                  │              │
//!   3 ─── 4 ─── 5                  │              │
//!   │     │     │                  │              │
//!   0 ─── 1 ─── 2                  9 ─────────── 10
//!
//!   +v                   points 9, 10, 11, 12 copy the samples of
//!   │                    points 0, 2, 6, 8
//!   └── +u
//! ```

mod regular;
mod transition;

pub use regular::{REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};
pub use transition::{
  TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA, TRANSITION_CORNER_DATA, TRANSITION_VERTEX_DATA,
};

/// Descriptor direction value meaning "owned by the current cell".
pub const OWNER_SELF: u16 = 0x8;

/// Maximum vertices any cell class emits.
pub const MAX_CELL_VERTICES: usize = 12;

/// Reuse slots per regular cell: one snapped corner plus x, y and z edges.
pub const REGULAR_REUSE_SLOTS: usize = 4;

/// Reuse slots per transition cell: 10 owned edges plus 5 owned points.
pub const TRANSITION_REUSE_SLOTS: usize = 15;

/// Triangulation shared by every case code of a regular equivalence class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegularCellData {
  /// High nibble: vertex count. Low nibble: triangle count.
  pub geometry_counts: u8,
  /// Triangle corner indices into the case's vertex list.
  pub vertex_index: [u8; 15],
}

impl RegularCellData {
  #[inline(always)]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  #[inline(always)]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Triangle list, three indices per triangle.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.vertex_index[..self.triangle_count() * 3]
  }
}

/// Triangulation shared by every case code of a transition equivalence class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionCellData {
  /// High nibble: vertex count. Low nibble: triangle count.
  pub geometry_counts: u8,
  /// Triangle corner indices into the case's vertex list.
  pub vertex_index: [u8; 27],
}

impl TransitionCellData {
  #[inline(always)]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  #[inline(always)]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Triangle list, three indices per triangle.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.vertex_index[..self.triangle_count() * 3]
  }
}

/// Decoded vertex descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeCode {
  pub v0: usize,
  pub v1: usize,
  pub owner: u16,
  pub slot: usize,
}

impl EdgeCode {
  #[inline(always)]
  pub const fn decode(code: u16) -> Self {
    Self {
      v0: ((code >> 4) & 0x0F) as usize,
      v1: (code & 0x0F) as usize,
      owner: code >> 12,
      slot: ((code >> 8) & 0x0F) as usize,
    }
  }
}

/// Regular cell class and vertex descriptors for a case code.
#[inline]
pub fn regular_case(case: u8) -> (&'static RegularCellData, &'static [u16; 12]) {
  let class = REGULAR_CELL_CLASS[case as usize] as usize;
  (&REGULAR_CELL_DATA[class], &REGULAR_VERTEX_DATA[case as usize])
}

/// Transition cell class and vertex descriptors for a 9-bit case code.
#[inline]
pub fn transition_case(case: u16) -> (&'static TransitionCellData, &'static [u16; 12]) {
  debug_assert!(case < 512, "transition case code out of range: {}", case);
  let class = TRANSITION_CELL_CLASS[case as usize] as usize;
  (&TRANSITION_CELL_DATA[class], &TRANSITION_VERTEX_DATA[case as usize])
}

/// Decoded reuse descriptor of a transition point a vertex snapped onto.
///
/// Returns `(owner direction, slot)`.
#[inline]
pub fn transition_corner(point: usize) -> (u16, usize) {
  let code = TRANSITION_CORNER_DATA[point];
  ((code >> 4) as u16, (code & 0x0F) as usize)
}

/// Source sample of each transition point (low-res corners copy high-res).
pub const TRANSITION_POINT_SOURCE: [usize; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 2, 6, 8];

/// Position of each transition point in half-cell units: `(u, v, low_res)`.
pub const TRANSITION_POINT_UV: [(u8, u8, bool); 13] = [
  (0, 0, false),
  (1, 0, false),
  (2, 0, false),
  (0, 1, false),
  (1, 1, false),
  (2, 1, false),
  (0, 2, false),
  (1, 2, false),
  (2, 2, false),
  (0, 0, true),
  (2, 0, true),
  (0, 2, true),
  (2, 2, true),
];

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
