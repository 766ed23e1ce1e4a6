//! Regular cell tables (256 case codes, 16 classes).
//!
//! Generated by walking each cube face counter-clockwise from outside and
//! linking the boundary segment of every run of inside corners into loops,
//! which are then fanned into triangles. Each loop is listed starting at a
//! vertex whose fan puts no triangle flat inside a cube face.

use super::RegularCellData;

const fn cell(vertex_count: u8, triangle_count: u8, vertex_index: [u8; 15]) -> RegularCellData {
  RegularCellData {
    geometry_counts: (vertex_count << 4) | triangle_count,
    vertex_index,
  }
}

/// Class index for each case code.
pub const REGULAR_CELL_CLASS: [u8; 256] = [
   0,  1,  1,  2,  1,  2,  3,  4,  1,  3,  2,  4,  2,  4,  4,  2,
   1,  2,  3,  4,  3,  4,  5,  6,  3,  7,  7,  6,  7,  6,  8,  4,
   1,  3,  2,  4,  3,  7,  7,  6,  3,  5,  4,  6,  7,  8,  6,  4,
   2,  4,  4,  2,  9,  6,  8,  4,  7,  8,  6,  4, 10, 11, 11,  2,
   1,  3,  3,  7,  2,  4,  9,  6,  3,  5,  7,  8,  4,  6,  6,  4,
   2,  4,  9,  6,  4,  2, 12,  4,  7,  8, 10, 11,  6,  4, 11,  2,
   3,  5,  7,  8,  7,  8, 10, 11,  5, 13,  8, 14,  8, 14, 11,  6,
   4,  6,  6,  4,  6,  4, 11,  2,  8, 14, 11,  6, 11,  6,  3,  1,
   1,  3,  3,  7,  3,  7,  5,  8,  2,  9,  4,  6,  4,  6,  6,  4,
   3,  7,  5,  8,  5,  8, 13, 14,  9, 10,  8, 11,  8, 11, 14,  6,
   2,  9,  4,  6,  9, 10,  8, 11,  4, 12,  2,  4,  6, 11,  4,  2,
   4,  6,  6,  4, 12, 11, 14,  6,  6, 11,  4,  2, 11,  3,  6,  1,
   2,  9,  9, 10,  4,  6, 12, 11,  4, 12,  6, 11,  2,  4,  4,  2,
   4,  6, 12, 11,  6,  4, 15,  6,  6, 11, 11,  3,  4,  2,  6,  1,
   4, 12,  6, 11,  6, 11, 11,  3,  6, 15,  4,  6,  4,  6,  2,  1,
   2,  4,  4,  2,  4,  2,  6,  1,  4,  6,  2,  1,  2,  1,  1,  0,
];

/// Vertex count and triangle list for each class.
pub const REGULAR_CELL_DATA: [RegularCellData; 16] = [
  cell(0, 0, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(3, 1, [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(4, 2, [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(6, 2, [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(5, 3, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 0, 0, 0, 0, 0]),
  cell(9, 3, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  cell(6, 4, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0]),
  cell(7, 3, [0, 1, 2, 0, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
  cell(8, 4, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 0, 0, 0]),
  cell(7, 3, [0, 1, 2, 3, 4, 5, 3, 5, 6, 0, 0, 0, 0, 0, 0]),
  cell(8, 4, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0]),
  cell(7, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6]),
  cell(8, 4, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 0, 0, 0]),
  cell(12, 4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0]),
  cell(9, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8]),
  cell(9, 5, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8]),
];

/// Edge descriptors for each case code, in class vertex order.
///
/// Edge slots: 1 = x edge, 2 = y edge, 3 = z edge (slot 0 is the snapped
/// corner, resolved at runtime).
pub const REGULAR_VERTEX_DATA: [[u16; 12]; 256] = [
  [0; 12],
  [0x6101, 0x5202, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x4213, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x1326, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x8337, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x2145, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x1326, 0x1246, 0x2145, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x2145, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x2145, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x4123, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x2145, 0x2315, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x1326, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x1326, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x1326, 0x5202, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x8337, 0x1326, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x3304, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x4213, 0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8257, 0x4213, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8337, 0x4123, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8337, 0x4123, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x1326, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x1326, 0x3304, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x8337, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8257, 0x8337, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8257, 0x4213, 0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x1326, 0x1246, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x8257, 0x2315, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x8257, 0x2315, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x1326, 0x3304, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x1326, 0x1246, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8257, 0x8337, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x1246, 0x8257, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x4213, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8167, 0x1246, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x4213, 0x4123, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x8167, 0x1246, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x8167, 0x1246, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x8337, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x3304, 0x1326, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8167, 0x2145, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8167, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x8167, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x8167, 0x2145, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8167, 0x2145, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8167, 0x2145, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8337, 0x4123, 0x3304, 0x1326, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8167, 0x2145, 0x2315, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x8167, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8337, 0x8167, 0x2145, 0x3304, 0x5202, 0x6101, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x8337, 0x8167, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x2145, 0x8257, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x2315, 0x2145, 0x8257, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x4213, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8257, 0x4213, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8167, 0x1246, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8167, 0x1246, 0x3304, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x4213, 0x5202, 0x4123, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8257, 0x4213, 0x4123, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8337, 0x4123, 0x2315, 0x2145, 0x8257, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8337, 0x4123, 0x2315, 0x2145, 0x8257, 0x1326, 0x8167, 0x1246],
  [0x6101, 0x2145, 0x8257, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8257, 0x8337, 0x4123, 0x1326, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x8167, 0x1246, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x8167, 0x1246, 0x3304, 0x2315, 0x2145, 0x8257, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8257, 0x8337, 0x8167, 0x1246, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8257, 0x8337, 0x8167, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8167, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8167, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1326, 0x8167, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8167, 0x8257, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8167, 0x8257, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8167, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x5202, 0x4123, 0x8167, 0x8257, 0x4213, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x8167, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8167, 0x8257, 0x2315, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8167, 0x8257, 0x2315, 0x4213, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1326, 0x8167, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8167, 0x8257, 0x8337, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8337, 0x8167, 0x8257, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8337, 0x8167, 0x8257, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x5202, 0x8337, 0x8167, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8337, 0x8167, 0x8257, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x4213, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x3304, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x1326, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x4213, 0x4123, 0x1326, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8257, 0x8167, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8257, 0x8167, 0x1326, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x8167, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x8257, 0x8167, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x3304, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x2145, 0x2315, 0x4213, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x2145, 0x8337, 0x8257, 0x8167],
  [0x4213, 0x4123, 0x1326, 0x1246, 0x2145, 0x2315, 0x8337, 0x8257, 0x8167, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x2145, 0x4213, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x2145, 0x4213, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x8167, 0x4123, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x2145, 0x2315, 0x8257, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8257, 0x8167, 0x1326, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8257, 0x8167, 0x1326, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x8167, 0x1326, 0x5202, 0x3304, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x8257, 0x8167, 0x1326, 0x1246, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x2145, 0x8167, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x2315, 0x2145, 0x8167, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8167, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8167, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x2315, 0x2145, 0x8167, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x3304, 0x2315, 0x2145, 0x8167, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8167, 0x8337, 0x4213, 0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8167, 0x8337, 0x4213, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x2315, 0x2145, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x2315, 0x2145, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2145, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x2315, 0x2145, 0x8167, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x2315, 0x2145, 0x8167, 0x1326, 0x3304, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x8167, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x8167, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x8167, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1246, 0x8167, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8167, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x8167, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x1326, 0x3304, 0x1246, 0x8167, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x1326, 0x1246, 0x8167, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8167, 0x8337, 0x4213, 0x5202, 0x4123, 0x1326, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x1326, 0x1246, 0x8167, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1246, 0x8167, 0x4123, 0x4213, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1246, 0x8167, 0x4123, 0x4213, 0x2315, 0x6101, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1246, 0x8167, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x2315, 0x3304, 0x1246, 0x8167, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x2315, 0x1326, 0x1246, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1246, 0x8167, 0x1326, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x1246, 0x8167, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x1326, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x1326, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x3304, 0x2315, 0x4213, 0x1326, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8337, 0x8257, 0x1246, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x4213, 0x4123, 0x8337, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x8257, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x8257, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x8257, 0x1246, 0x1326, 0x4123, 0x5202, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8257, 0x1246, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x8257, 0x1246, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2315, 0x8257, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8337, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8337, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x3304, 0x1326, 0x8337, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8337, 0x8257, 0x2145, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8337, 0x8257, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8337, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2315, 0x4213, 0x5202, 0x4123, 0x8337, 0x8257, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000],
  [0x4123, 0x8337, 0x8257, 0x2145, 0x2315, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x4123, 0x4213, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x4123, 0x4213, 0x8257, 0x2145, 0x6101, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8257, 0x2145, 0x3304, 0x1326, 0x4123, 0x6101, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x4123, 0x2315, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x8257, 0x2145, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8257, 0x2145, 0x3304, 0x5202, 0x6101, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x8257, 0x2145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2315, 0x2145, 0x1246, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x2315, 0x2145, 0x1246, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x1246, 0x1326, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2145, 0x1246, 0x1326, 0x8337, 0x4213, 0x5202, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8337, 0x2315, 0x2145, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4123, 0x8337, 0x2315, 0x2145, 0x1246, 0x3304, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2145, 0x1246, 0x5202, 0x4123, 0x8337, 0x4213, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x1246, 0x4213, 0x4123, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x2315, 0x2145, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x3304, 0x4213, 0x2315, 0x2145, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x1246, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2145, 0x1246, 0x1326, 0x4123, 0x5202, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x2315, 0x2145, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x2315, 0x2145, 0x1246, 0x3304, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x2145, 0x1246, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x2145, 0x1246, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x5202, 0x1326, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1326, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x8337, 0x4213, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4123, 0x8337, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4123, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x5202, 0x4123, 0x8337, 0x4213, 0x6101, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x4213, 0x4123, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x3304, 0x1326, 0x4123, 0x4213, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1326, 0x4123, 0x4213, 0x2315, 0x6101, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x1326, 0x4123, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x5202, 0x4213, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x4213, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x6101, 0x3304, 0x5202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0; 12],
];
