//! Transition cell tables (512 case codes).
//!
//! The cell is a thin prism: a 2x2 high-resolution face, a single
//! low-resolution face and four pentagonal sides. The sides never carry
//! vertices because each low-res corner copies its high-res sample.

use super::TransitionCellData;

const fn cell(vertex_count: u8, triangle_count: u8, vertex_index: [u8; 27]) -> TransitionCellData {
  TransitionCellData {
    geometry_counts: (vertex_count << 4) | triangle_count,
    vertex_index,
  }
}

/// Class index for each 9-bit case code.
pub const TRANSITION_CELL_CLASS: [u8; 512] = [
   0,  1,  2,  3,  1,  4,  3,  3,  2,  3,  5,  4,  6,  7,  8,  4,
   1,  9,  3,  7,  9, 10,  7,  7,  3,  7,  4,  4, 11, 12, 13,  4,
   2, 14,  5,  8,  3,  7,  4,  4,  5,  8, 15, 16, 17, 13, 16,  7,
   3, 18,  4, 13,  7, 12,  4,  4,  4, 13,  7,  7, 13, 17,  7,  3,
   1,  4,  6,  7,  9, 13, 11,  7,  3,  3, 17,  4, 11,  7, 19,  4,
   9, 10, 11, 12, 20, 21, 22, 12,  7,  7, 13,  4, 22, 12, 23,  4,
   6, 16, 24, 25, 11, 12, 10, 13,  8,  8, 26, 16, 19, 13, 27,  7,
  11, 27, 10, 23, 22, 28, 10, 13, 13, 13, 12,  7, 23, 17, 12,  3,
   2, 14,  5,  8, 14, 16,  8,  8,  5,  8, 15, 16, 29, 25, 30, 16,
   3, 18,  4, 13, 18, 27, 13, 13,  4, 13,  7,  7, 10, 23, 12,  7,
   5, 31, 15, 30,  8, 25, 16, 16, 15, 30, 32, 33, 26, 34, 33, 25,
   4, 35,  7, 12, 13, 23,  7,  7,  7, 12, 13, 13, 12, 36, 13,  4,
   3,  7, 17, 13, 18, 12, 19, 13,  4,  4, 36,  7, 10, 13, 37,  7,
   7, 12, 13, 17, 38, 28, 23, 17,  4,  4,  7,  3, 10, 13, 12,  3,
  17, 25, 39, 34, 19, 23, 27, 12, 16, 16, 40, 25, 27, 12, 41, 13,
  13, 23, 12, 36, 23, 10, 12,  6,  7,  7, 13,  4, 12,  6, 13,  1,
   1,  9,  6, 11,  4, 13,  7,  7,  6, 11, 24, 10, 36, 12, 25, 13,
   9, 20, 11, 22, 10, 21, 12, 12, 11, 22, 10, 10, 37, 28, 23, 13,
   3, 18, 17, 19,  3,  7,  4,  4, 17, 19, 39, 27, 17, 13, 16,  7,
   7, 38, 13, 23,  7, 12,  4,  4, 13, 23, 12, 12, 13, 17,  7,  3,
   4, 13, 36, 12, 13, 13, 12,  7,  7,  7, 42, 13, 12,  7, 23,  4,
  35, 21, 37, 28, 21, 21, 28, 12, 12, 12, 23, 13, 28, 12, 35,  4,
   7, 12, 42, 23,  7,  7, 13,  4, 13, 13, 43, 12, 13,  4, 12,  3,
  12, 28, 23, 10, 12, 12, 13,  4,  8,  8, 16, 14,  8,  5, 14,  2,
   3, 18, 17, 19,  7, 12, 13, 13, 17, 19, 39, 27, 42, 23, 34, 12,
   7, 38, 13, 23, 12, 28,  8,  8, 13, 23, 12, 12, 23, 10, 16,  6,
   4, 35, 36, 37,  4, 13,  7,  7, 36, 37, 44, 41, 36, 12, 25, 13,
   4, 35,  7, 12,  4, 13,  3,  3,  7, 12, 13, 13,  7,  6,  4,  1,
   3,  7, 17, 13,  7,  7, 13,  4,  4,  4, 36,  7, 13,  4, 12,  3,
   7, 12, 13, 17, 12, 12,  8,  5,  4,  4,  7,  3, 13,  4, 14,  2,
   4, 13, 36, 12,  4,  4,  7,  3,  7,  7, 42, 13,  7,  3, 13,  1,
   4, 13,  7,  6,  4,  4,  3,  2,  3,  3,  4,  1,  3,  2,  1,  0,
];

/// Vertex count and triangle list for each class.
pub const TRANSITION_CELL_DATA: [TransitionCellData; 45] = [
  cell(0, 0, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(4, 2, [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(3, 1, [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(5, 3, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(6, 4, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(6, 2, [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(7, 3, [0, 1, 2, 3, 4, 5, 3, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(7, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(8, 4, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(8, 4, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(10, 6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 6, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 0, 0, 0, 0, 0]),
  cell(8, 6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(7, 3, [0, 1, 2, 0, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 3, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(8, 4, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 5, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(10, 6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 8, 5, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 8, 9, 10, 8, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 8, 9, 10, 8, 10, 11, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 7, 8, 9, 7, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(10, 8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 8, 9, 0, 0, 0]),
  cell(10, 4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(10, 6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 5, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 8, 9, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(11, 9, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 8, 9, 0, 9, 10]),
  cell(10, 4, [0, 1, 2, 3, 4, 5, 3, 5, 6, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 5, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 8, 9, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(10, 4, [0, 1, 2, 0, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 8, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(10, 6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(9, 5, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 8, 5, 8, 9, 5, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 9, 4, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(11, 5, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 6, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 9, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(12, 8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 6, 10, 11, 0, 0, 0]),
  cell(10, 6, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 3, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  cell(11, 7, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 3, 8, 9, 3, 9, 10, 0, 0, 0, 0, 0, 0]),
  cell(12, 6, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 6, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
];

/// Edge descriptors for each case code, in class vertex order.
///
/// Slots 0-7 are high-res edges owned by the cell, 8-9 low-res edges.
pub const TRANSITION_VERTEX_DATA: [[u16; 12]; 512] = [
  [0; 12],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8125, 0x2712, 0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x1536, 0x189B, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8447, 0x1536, 0x189B, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8558, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x189B, 0x88AC, 0x8558, 0x8447, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x8558, 0x8447, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x8558, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x8558, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8447, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8447, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x189B, 0x88AC, 0x8558, 0x8447, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x2712, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x8014, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x8014, 0x8345, 0x8447, 0x8234],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8667, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8447, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x8667, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x8667, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8447, 0x8667, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8447, 0x8667, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8558, 0x8345, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x8125, 0x8558, 0x8345, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x8667, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1103, 0x8234, 0x8667, 0x89BC, 0x189B, 0x0000],
  [0x8014, 0x8234, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x8558, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x8014, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x299A, 0x2712, 0x8125, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8234, 0x8014, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000],
  [0x89BC, 0x88AC, 0x8558, 0x8447, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x1536, 0x8667, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8234, 0x1536, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x8558, 0x8447, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x8558, 0x8447, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8447, 0x8667, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x8558, 0x8447, 0x8667, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8667, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x8447, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8447, 0x8667, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x8447, 0x8667, 0x89BC, 0x88AC, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8125, 0x2712, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8125, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8125, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8125, 0x2712, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1103, 0x8234, 0x1536, 0x8447, 0x8778, 0x8667, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8125, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x8014, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8125, 0x2712, 0x8014, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8125, 0x8345, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8778, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8778, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8778, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8778, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8778, 0x8667, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8778, 0x8667, 0x1536, 0x189B, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8778, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8778, 0x8667, 0x1536, 0x189B, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x88AC, 0x8558, 0x8345, 0x2712, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8558, 0x8345, 0x8014, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8345, 0x2712, 0x8447, 0x8778, 0x8667, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1103, 0x8234, 0x1536, 0x8447, 0x8778, 0x8667],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8345, 0x8447, 0x8778, 0x8667, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8125, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8125, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8778, 0x8667, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x189B, 0x88AC, 0x8558, 0x8778, 0x8667, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x88AC, 0x8558, 0x8778, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x8558, 0x8778, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x8558, 0x8778, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8778, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x8558, 0x8778, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8778, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x1536, 0x189B, 0x88AC, 0x8558, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8778, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x189B, 0x88AC, 0x8558, 0x8778, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x8447, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8014, 0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000],
  [0x8014, 0x8234, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8345, 0x8778, 0x89BC, 0x299A, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x2712, 0x8345, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8125, 0x8014, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8345, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x2601, 0x1103, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x8125, 0x8345, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8778, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8125, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8778, 0x89BC, 0x88AC, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8125, 0x8345, 0x8778, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8558, 0x8345, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x299A, 0x2712, 0x8014, 0x8125, 0x8558, 0x8345, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1536, 0x8447, 0x8778, 0x89BC, 0x189B, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8778, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x8125, 0x8558, 0x8345],
  [0x2712, 0x8014, 0x8234, 0x8447, 0x8778, 0x89BC, 0x299A, 0x8125, 0x8558, 0x8345, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8345, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8345, 0x8014, 0x1103, 0x8234, 0x8447, 0x8778, 0x89BC, 0x189B],
  [0x8014, 0x8234, 0x8447, 0x8778, 0x89BC, 0x88AC, 0x8558, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8125, 0x8558, 0x8778, 0x89BC, 0x299A, 0x2601, 0x1103, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x2712, 0x8125, 0x8558, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x88AC, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x8014, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x8558, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x8558, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x8558, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x8558, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x8558, 0x8778, 0x89BC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x88AC, 0x8558, 0x8778, 0x89BC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x8558, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x88AC, 0x8558, 0x8778, 0x89BC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8558, 0x8778, 0x89BC, 0x88AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8447, 0x8234, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8345, 0x8447, 0x8234, 0x8558, 0x88AC, 0x89BC, 0x8778],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8234, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8345, 0x8447, 0x8234, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8014, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x2712, 0x8014, 0x8345, 0x8447, 0x8234],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x1536, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x1536, 0x189B, 0x299A, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x1536, 0x1103, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8447, 0x1536, 0x189B, 0x299A, 0x8558, 0x88AC, 0x89BC, 0x8778, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x1536, 0x2712, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8558, 0x8125, 0x8345, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8447, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x89BC, 0x8778, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8778, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8345, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8345, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8778, 0x8447, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x189B, 0x89BC, 0x8778, 0x8447, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x88AC, 0x89BC, 0x8778, 0x8447, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x89BC, 0x8778, 0x8447, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x1536, 0x189B, 0x89BC, 0x8778, 0x8447, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8778, 0x8447, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x189B, 0x89BC, 0x8778, 0x8447, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x299A, 0x189B, 0x1103, 0x8234, 0x8667, 0x8778, 0x8558, 0x8125, 0x8014, 0x2601, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x8667, 0x8778, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x8014, 0x8345, 0x8447, 0x8234],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8234, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x2712, 0x8345, 0x8447, 0x8234, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x8014, 0x8345, 0x8447, 0x8234],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x8014, 0x8345, 0x8447, 0x8234],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8558, 0x8125, 0x8345, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x88AC, 0x189B, 0x1103, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x299A, 0x189B, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1103, 0x8125, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8447, 0x8667, 0x8778, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x88AC, 0x189B, 0x1536, 0x8667, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8667, 0x8778, 0x8345, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8667, 0x8778, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x189B, 0x0000],
  [0x8234, 0x8667, 0x8778, 0x8345, 0x8125, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8667, 0x8778, 0x8345, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8667, 0x8778, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x299A, 0x189B, 0x1103, 0x8234, 0x8667, 0x8778, 0x8345, 0x8014, 0x2601, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x8667, 0x8778, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x8778, 0x8447, 0x8234, 0x8014, 0x8125, 0x88AC, 0x299A, 0x2601, 0x1103, 0x1536, 0x8667, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x2712, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x8778, 0x8447, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x1536, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8667, 0x8778, 0x8447, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x88AC, 0x189B, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x88AC, 0x299A, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x189B, 0x1103, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x88AC, 0x299A, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x189B, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1103, 0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8447, 0x8667, 0x8778, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8447, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000],
  [0x299A, 0x89BC, 0x8667, 0x8234, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x189B, 0x89BC, 0x8667, 0x8234, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x2601, 0x1103, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8234, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8667, 0x8234, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8558, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x299A, 0x89BC, 0x8667, 0x1536, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x1536, 0x189B, 0x89BC, 0x8667, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x1536, 0x1103, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8558, 0x1536, 0x189B, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x1536, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x1536, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345],
  [0x2712, 0x8014, 0x8234, 0x1536, 0x189B, 0x299A, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8447, 0x8345],
  [0x1103, 0x8234, 0x1536, 0x2712, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8447, 0x8345, 0x8014, 0x1103, 0x8234, 0x1536, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x1536, 0x189B, 0x89BC, 0x8667, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x189B, 0x299A, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x299A, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x89BC, 0x8667, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x189B, 0x89BC, 0x8667, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x189B, 0x89BC, 0x8667, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x88AC, 0x89BC, 0x8667, 0x1536, 0x189B, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x89BC, 0x8667, 0x1536, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x1536, 0x189B, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x89BC, 0x8667, 0x1536, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x189B, 0x89BC, 0x8667, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8447, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1536, 0x8447, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8558, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8447, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8447, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8558, 0x8125, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8447, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8014, 0x8234, 0x8447, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8558, 0x8125, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x299A, 0x189B, 0x1103, 0x8234, 0x8447, 0x8558, 0x8125, 0x8014, 0x2601, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x8447, 0x8558, 0x8125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8345, 0x8558, 0x88AC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8345, 0x8558, 0x88AC, 0x299A, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8558, 0x88AC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x2712, 0x8345, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x299A, 0x189B, 0x1536, 0x8234, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8234, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8558, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8345, 0x8558, 0x88AC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8345, 0x8558, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8345, 0x8558, 0x8125, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1103, 0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x8345, 0x8558, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8125, 0x88AC, 0x189B, 0x1536, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8345, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8345, 0x8125, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x1103, 0x1536, 0x8447, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8447, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8447, 0x8345, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8345, 0x8125, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8345, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8014, 0x1103, 0x8234, 0x8447, 0x8345, 0x8125, 0x88AC, 0x189B, 0x0000, 0x0000],
  [0x8234, 0x8447, 0x8345, 0x8125, 0x88AC, 0x299A, 0x2712, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8234, 0x8447, 0x8345, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8234, 0x8447, 0x8345, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x299A, 0x189B, 0x1103, 0x8234, 0x8447, 0x8345, 0x8014, 0x2601, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8234, 0x8447, 0x8345, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x8014, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x8125, 0x88AC, 0x299A, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x2712, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x299A, 0x189B, 0x1536, 0x8234, 0x8014, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1536, 0x8234, 0x8014, 0x2712, 0x2601, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x1536, 0x8234, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x8125, 0x88AC, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x2712, 0x8125, 0x88AC, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2712, 0x8125, 0x88AC, 0x299A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x1103, 0x8014, 0x2712, 0x299A, 0x189B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x8014, 0x2712, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0x2601, 0x299A, 0x189B, 0x1103, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
  [0; 12],
];

/// Reuse descriptor of each transition point: owner direction in the high
/// nibble, slot (10-14) in the low nibble.
pub const TRANSITION_CORNER_DATA: [u8; 13] = [
  0x3D, 0x2C, 0x2D, 0x1B, 0x8A, 0x8B, 0x1D, 0x8C, 0x8D, 0x3E, 0x2E, 0x1E, 0x8E,
];
