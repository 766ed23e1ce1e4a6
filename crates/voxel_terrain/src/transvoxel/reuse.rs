//! Vertex reuse caches.
//!
//! Every vertex has exactly one owning cell: the cell whose maximal corner
//! or maximal edges it lies on. A cell looks the vertex up in the owner's
//! slot and creates it there on first use, so each shared vertex is emitted
//! once, whatever order cells are visited in.
//!
//! ```text
//!   regular cell owner slots          transition cell owner slots
//!
//!        ┌──────7                       6 ── 7 ── 8        11 ──── 12
//!       /│     /│  slot 0: corner 7     │    │    │         │       │
//!      ┌─┼────┐ │  slot 1: x edge 6-7   3 ── 4 ── 5         │       │
//!      │ └────┼─3  slot 2: y edge 5-7   │    │    │         │       │
//!      │/     │/   slot 3: z edge 3-7   0 ── 1 ── 2         9 ──── 10
//!      └──────┘                         edges touching 4,5,7,8 + 10-12,
//!                                       11-12; points 4,5,7,8,12
//! ```
//!
//! Owners can sit one cell below the chunk's minimum (vertices on the
//! minimum boundary), so both caches carry a one-cell apron.

use crate::tables::{REGULAR_REUSE_SLOTS, TRANSITION_REUSE_SLOTS};

const EMPTY: u16 = u16::MAX;

/// Reuse cache for regular cells: 4 slots per cell, cells `-1..cells`.
pub struct RegularReuseCache {
  stride: usize,
  slots: Vec<[u16; REGULAR_REUSE_SLOTS]>,
}

impl RegularReuseCache {
  pub fn new(cells: usize) -> Self {
    let stride = cells + 1;
    Self {
      stride,
      slots: vec![[EMPTY; REGULAR_REUSE_SLOTS]; stride * stride * stride],
    }
  }

  #[inline(always)]
  fn index(&self, cell: [i32; 3]) -> usize {
    debug_assert!(
      cell.iter().all(|&c| c >= -1 && c < self.stride as i32 - 1),
      "reuse owner {:?} outside cache",
      cell
    );
    let [x, y, z] = cell.map(|c| (c + 1) as usize);
    (x * self.stride + y) * self.stride + z
  }

  #[inline]
  pub fn get(&self, cell: [i32; 3], slot: usize) -> Option<u16> {
    let index = self.slots[self.index(cell)][slot];
    (index != EMPTY).then_some(index)
  }

  #[inline]
  pub fn set(&mut self, cell: [i32; 3], slot: usize, vertex: u16) {
    debug_assert_ne!(vertex, EMPTY, "vertex index collides with the empty marker");
    let index = self.index(cell);
    self.slots[index][slot] = vertex;
  }
}

/// Reuse deck for one face of transition cells: 15 slots per cell, cells
/// `-1..cells` on both face axes.
pub struct TransitionReuseDeck {
  stride: usize,
  slots: Vec<[u16; TRANSITION_REUSE_SLOTS]>,
}

impl TransitionReuseDeck {
  pub fn new(cells: usize) -> Self {
    let stride = cells + 1;
    Self {
      stride,
      slots: vec![[EMPTY; TRANSITION_REUSE_SLOTS]; stride * stride],
    }
  }

  #[inline(always)]
  fn index(&self, u: i32, v: i32) -> usize {
    debug_assert!(
      u >= -1 && v >= -1 && u < self.stride as i32 - 1 && v < self.stride as i32 - 1,
      "transition owner ({}, {}) outside deck",
      u,
      v
    );
    (u + 1) as usize * self.stride + (v + 1) as usize
  }

  #[inline]
  pub fn get(&self, u: i32, v: i32, slot: usize) -> Option<u16> {
    let index = self.slots[self.index(u, v)][slot];
    (index != EMPTY).then_some(index)
  }

  #[inline]
  pub fn set(&mut self, u: i32, v: i32, slot: usize, vertex: u16) {
    debug_assert_ne!(vertex, EMPTY, "vertex index collides with the empty marker");
    let index = self.index(u, v);
    self.slots[index][slot] = vertex;
  }
}

/// Step a cell back along the axes of a reuse direction nibble.
#[inline(always)]
pub fn owner_cell(cell: [i32; 3], direction: u16) -> [i32; 3] {
  if direction == crate::tables::OWNER_SELF {
    return cell;
  }
  [
    cell[0] - (direction & 1) as i32,
    cell[1] - ((direction >> 1) & 1) as i32,
    cell[2] - ((direction >> 2) & 1) as i32,
  ]
}

#[cfg(test)]
#[path = "reuse_test.rs"]
mod reuse_test;
