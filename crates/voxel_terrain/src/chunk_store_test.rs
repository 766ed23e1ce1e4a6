use super::*;

use std::collections::HashMap;

use crate::density::DensityField;

fn chunk(x: i32, y: i32, z: i32, lod: u8) -> Chunk {
  Chunk::new(ChunkCoord::new(x, y, z), lod, DensityField::filled(2, 1))
}

#[test]
fn test_hash_matches_formula() {
  assert_eq!(spatial_hash(ChunkCoord::new(0, 0, 0)), 0);
  assert_eq!(spatial_hash(ChunkCoord::new(1, 0, 0)), 73_856_093);
  assert_eq!(
    spatial_hash(ChunkCoord::new(1, 1, 1)),
    73_856_093 ^ 19_349_663 ^ 83_492_791
  );
  // Negative coordinates wrap instead of overflowing.
  assert_eq!(
    spatial_hash(ChunkCoord::new(-1, 0, 0)),
    (-1i32 as u32).wrapping_mul(73_856_093)
  );
}

#[test]
fn test_insert_get() {
  let mut store = ChunkStore::with_capacity(4);
  assert!(store.is_empty());

  assert!(matches!(store.insert(chunk(1, 2, 3, 0)), Ok(Insert::Vacant)));
  assert!(matches!(store.insert(chunk(-1, 0, 5, 2)), Ok(Insert::Vacant)));

  assert_eq!(store.len(), 2);
  assert!(store.contains(ChunkCoord::new(1, 2, 3)));
  assert_eq!(store.get(ChunkCoord::new(-1, 0, 5)).map(|c| c.lod), Some(2));
  assert!(store.get(ChunkCoord::new(0, 0, 0)).is_none());
}

#[test]
fn test_insert_replaces() {
  let mut store = ChunkStore::with_capacity(1);
  store.insert(chunk(0, 0, 0, 0)).unwrap();

  match store.insert(chunk(0, 0, 0, 3)) {
    Ok(Insert::Replaced(old)) => assert_eq!(old.lod, 0),
    other => panic!("expected replacement, got {:?}", other),
  }
  assert_eq!(store.len(), 1);
  assert_eq!(store.get(ChunkCoord::new(0, 0, 0)).map(|c| c.lod), Some(3));
}

#[test]
fn test_full_store_rejects_new_coords() {
  let mut store = ChunkStore::with_capacity(2);
  store.insert(chunk(0, 0, 0, 0)).unwrap();
  store.insert(chunk(1, 0, 0, 0)).unwrap();

  let err = store.insert(chunk(2, 0, 0, 0)).unwrap_err();
  assert_eq!(err, ChunkStoreError::Full { capacity: 2 });
  assert_eq!(store.len(), 2);

  // Replacing at capacity still works.
  assert!(matches!(store.insert(chunk(1, 0, 0, 1)), Ok(Insert::Replaced(_))));
}

#[test]
fn test_zero_capacity_rejects_everything() {
  let mut store = ChunkStore::with_capacity(0);
  assert!(store.insert(chunk(0, 0, 0, 0)).is_err());
  assert!(store.is_empty());
}

#[test]
fn test_get_mut() {
  let mut store = ChunkStore::with_capacity(4);
  store.insert(chunk(3, 3, 3, 0)).unwrap();

  if let Some(c) = store.get_mut(ChunkCoord::new(3, 3, 3)) {
    c.needs_mesh = false;
  }
  assert_eq!(store.get(ChunkCoord::new(3, 3, 3)).map(|c| c.needs_mesh), Some(false));
}

#[test]
fn test_remove_keeps_probe_chains() {
  // Tiny table: most coordinates collide.
  let mut store = ChunkStore::with_capacity(8);
  let coords: Vec<ChunkCoord> = (0..8).map(|i| ChunkCoord::new(i, -i, i * 2)).collect();
  for &coord in &coords {
    store.insert(Chunk::new(coord, 0, DensityField::filled(2, 1))).unwrap();
  }

  for (i, &coord) in coords.iter().enumerate().filter(|(i, _)| i % 2 == 0) {
    let removed = store.remove(coord).expect("stored chunk");
    assert_eq!(removed.coord, coord, "removed wrong chunk at step {}", i);
  }

  assert_eq!(store.len(), 4);
  for (i, &coord) in coords.iter().enumerate() {
    assert_eq!(store.contains(coord), i % 2 == 1, "coord {}", coord);
  }
  assert!(store.remove(coords[0]).is_none());
}

#[test]
fn test_matches_hashmap_under_churn() {
  let mut store = ChunkStore::with_capacity(32);
  let mut reference: HashMap<ChunkCoord, u8> = HashMap::new();

  // Deterministic LCG.
  let mut state = 0x2545_f491u32;
  let mut next = move || {
    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    state >> 16
  };

  for step in 0..2000 {
    let coord = ChunkCoord::new(
      (next() % 7) as i32 - 3,
      (next() % 3) as i32 - 1,
      (next() % 7) as i32 - 3,
    );
    let lod = (step % 4) as u8;

    if next() % 3 == 0 {
      let removed = store.remove(coord).map(|c| c.lod);
      assert_eq!(removed, reference.remove(&coord), "remove at step {}", step);
    } else {
      match store.insert(Chunk::new(coord, lod, DensityField::filled(2, 1))) {
        Ok(Insert::Replaced(old)) => {
          assert_eq!(reference.insert(coord, lod), Some(old.lod));
        }
        Ok(Insert::Vacant) => {
          assert_eq!(reference.insert(coord, lod), None);
        }
        Err(ChunkStoreError::Full { .. }) => {
          assert_eq!(reference.len(), 32);
          assert!(!reference.contains_key(&coord));
        }
      }
    }

    assert_eq!(store.len(), reference.len());
  }

  for (coord, lod) in &reference {
    assert_eq!(store.get(*coord).map(|c| c.lod), Some(*lod));
  }
  let mut stored: Vec<ChunkCoord> = store.coords().collect();
  stored.sort();
  let mut expected: Vec<ChunkCoord> = reference.keys().copied().collect();
  expected.sort();
  assert_eq!(stored, expected);
}

#[test]
fn test_clear_and_iter() {
  let mut store = ChunkStore::with_capacity(8);
  for i in 0..5 {
    store.insert(chunk(i, 0, 0, 0)).unwrap();
  }
  assert_eq!(store.iter().count(), 5);

  for c in store.iter_mut() {
    c.lod = 1;
  }
  assert!(store.iter().all(|c| c.lod == 1));

  store.clear();
  assert!(store.is_empty());
  assert_eq!(store.iter().count(), 0);
}
