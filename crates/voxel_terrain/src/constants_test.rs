use super::*;

#[test]
fn test_cells_per_lod() {
  assert_eq!(cells_for_lod(0), 16);
  assert_eq!(cells_for_lod(1), 8);
  assert_eq!(cells_for_lod(MAX_SUPPORTED_LOD), 2);
}

#[test]
fn test_sample_dim_includes_apron() {
  assert_eq!(sample_dim(16), 19);
  assert_eq!(sample_dim(2), 5);
}

#[test]
fn test_index_roundtrip() {
  let dim = sample_dim(CHUNK_CELLS);
  for &(x, y, z) in &[(0, 0, 0), (1, 2, 3), (18, 0, 7), (18, 18, 18)] {
    let idx = coord_to_index(x, y, z, dim);
    assert_eq!(index_to_coord(idx, dim), (x, y, z));
  }
}

#[test]
fn test_z_is_innermost() {
  let dim = sample_dim(8);
  assert_eq!(coord_to_index(0, 0, 1, dim), 1);
  assert_eq!(coord_to_index(0, 1, 0, dim), dim);
  assert_eq!(coord_to_index(1, 0, 0, dim), dim * dim);
}

#[test]
fn test_corner_deltas_match_offsets() {
  let dim = sample_dim(4);
  let deltas = corner_deltas(dim);
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    let expected = coord_to_index(
      offset[0] as usize,
      offset[1] as usize,
      offset[2] as usize,
      dim,
    );
    assert_eq!(deltas[corner], expected, "corner {} delta mismatch", corner);
  }
}

#[test]
fn test_corner_offsets_binary_layout() {
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    assert_eq!(offset[0], (corner & 1) as i32);
    assert_eq!(offset[1], ((corner >> 1) & 1) as i32);
    assert_eq!(offset[2], ((corner >> 2) & 1) as i32);
  }
}
