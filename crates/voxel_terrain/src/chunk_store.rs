//! Open-addressed spatial hashmap of chunks.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  hash(x, y, z) = x·73856093 ^ y·19349663 ^ z·83492791  (wrapping) │
//! │  slot          = hash & (table_len - 1)                           │
//! │  table_len     = next_pow2(2 · capacity)                          │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  lookup: probe slot, slot+1, ... until the coord, an empty slot,  │
//! │          or a full wrap                                           │
//! │  remove: backward-shift the rest of the probe run into the hole   │
//! │          (no tombstones)                                          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table never holds more than `capacity` chunks, so at least half the
//! slots stay empty and probe runs stay short.

use crate::chunk::Chunk;
use crate::error::ChunkStoreError;
use crate::types::ChunkCoord;

/// Outcome of a successful insert.
#[derive(Debug)]
pub enum Insert {
  /// The coordinate was not stored before.
  Vacant,
  /// The coordinate was stored; the previous chunk is returned.
  Replaced(Chunk),
}

enum Probe {
  Found(usize),
  Vacant(usize),
  Exhausted,
}

/// Fixed-capacity chunk table keyed by [`ChunkCoord`].
pub struct ChunkStore {
  slots: Vec<Option<Chunk>>,
  mask: usize,
  len: usize,
  capacity: usize,
}

/// Spatial hash of a chunk coordinate.
#[inline]
pub fn spatial_hash(coord: ChunkCoord) -> u32 {
  (coord.x as u32).wrapping_mul(73_856_093)
    ^ (coord.y as u32).wrapping_mul(19_349_663)
    ^ (coord.z as u32).wrapping_mul(83_492_791)
}

impl ChunkStore {
  /// Store that accepts at most `capacity` chunks.
  pub fn with_capacity(capacity: usize) -> Self {
    let table_len = (capacity.max(1) * 2).next_power_of_two();
    let mut slots = Vec::with_capacity(table_len);
    slots.resize_with(table_len, || None);
    Self {
      slots,
      mask: table_len - 1,
      len: 0,
      capacity,
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Maximum number of chunks.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  #[inline(always)]
  fn home(&self, coord: ChunkCoord) -> usize {
    spatial_hash(coord) as usize & self.mask
  }

  fn probe(&self, coord: ChunkCoord) -> Probe {
    let mut slot = self.home(coord);
    for _ in 0..self.slots.len() {
      match &self.slots[slot] {
        Some(chunk) if chunk.coord == coord => return Probe::Found(slot),
        Some(_) => slot = (slot + 1) & self.mask,
        None => return Probe::Vacant(slot),
      }
    }
    Probe::Exhausted
  }

  pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
    match self.probe(coord) {
      Probe::Found(slot) => self.slots[slot].as_ref(),
      _ => None,
    }
  }

  pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
    match self.probe(coord) {
      Probe::Found(slot) => self.slots[slot].as_mut(),
      _ => None,
    }
  }

  #[inline]
  pub fn contains(&self, coord: ChunkCoord) -> bool {
    matches!(self.probe(coord), Probe::Found(_))
  }

  /// Insert or replace the chunk at `chunk.coord`.
  ///
  /// Replacing never fails; adding a new coordinate fails once the store
  /// holds `capacity` chunks.
  pub fn insert(&mut self, chunk: Chunk) -> Result<Insert, ChunkStoreError> {
    match self.probe(chunk.coord) {
      Probe::Found(slot) => match self.slots[slot].replace(chunk) {
        Some(old) => Ok(Insert::Replaced(old)),
        None => Ok(Insert::Vacant),
      },
      Probe::Vacant(slot) if self.len < self.capacity => {
        self.slots[slot] = Some(chunk);
        self.len += 1;
        Ok(Insert::Vacant)
      }
      Probe::Vacant(_) | Probe::Exhausted => Err(ChunkStoreError::Full {
        capacity: self.capacity,
      }),
    }
  }

  /// Remove and return the chunk at `coord`.
  pub fn remove(&mut self, coord: ChunkCoord) -> Option<Chunk> {
    let Probe::Found(slot) = self.probe(coord) else {
      return None;
    };
    let removed = self.slots[slot].take();
    self.len -= 1;

    // Pull later entries of the run back so no lookup hits a false gap.
    let mut hole = slot;
    let mut next = (slot + 1) & self.mask;
    while let Some(chunk) = &self.slots[next] {
      let home = self.home(chunk.coord);
      let from_home = next.wrapping_sub(home) & self.mask;
      let from_hole = next.wrapping_sub(hole) & self.mask;
      if from_home >= from_hole {
        self.slots[hole] = self.slots[next].take();
        hole = next;
      }
      next = (next + 1) & self.mask;
    }

    removed
  }

  /// Remove every chunk.
  pub fn clear(&mut self) {
    self.slots.iter_mut().for_each(|slot| *slot = None);
    self.len = 0;
  }

  /// Chunks in table order.
  pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
    self.slots.iter().filter_map(Option::as_ref)
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
    self.slots.iter_mut().filter_map(Option::as_mut)
  }

  /// Stored coordinates in table order.
  pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
    self.iter().map(|chunk| chunk.coord)
  }
}

impl std::fmt::Debug for ChunkStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ChunkStore")
      .field("len", &self.len)
      .field("capacity", &self.capacity)
      .field("table_len", &self.slots.len())
      .finish()
  }
}

#[cfg(test)]
#[path = "chunk_store_test.rs"]
mod chunk_store_test;
