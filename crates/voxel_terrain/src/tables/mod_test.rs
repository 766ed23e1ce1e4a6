use super::*;

use std::collections::HashMap;

/// Sign-changing edges of a regular case, as sorted corner pairs.
fn crossing_edges(case: u8) -> Vec<(usize, usize)> {
  let mut edges = Vec::new();
  for v0 in 0..8usize {
    for axis in 0..3 {
      let bit = 1 << axis;
      if v0 & bit != 0 {
        continue;
      }
      let v1 = v0 | bit;
      let inside0 = case & (1 << v0) != 0;
      let inside1 = case & (1 << v1) != 0;
      if inside0 != inside1 {
        edges.push((v0, v1));
      }
    }
  }
  edges.sort();
  edges
}

#[test]
fn test_regular_homogeneous_cases_empty() {
  for case in [0u8, 255] {
    let (data, _) = regular_case(case);
    assert_eq!(data.vertex_count(), 0, "case {} should be empty", case);
    assert_eq!(data.triangle_count(), 0);
  }
}

#[test]
fn test_regular_indices_in_range() {
  for (class, data) in REGULAR_CELL_DATA.iter().enumerate() {
    assert!(data.vertex_count() <= MAX_CELL_VERTICES);
    for &index in data.indices() {
      assert!(
        (index as usize) < data.vertex_count(),
        "class {} references vertex {} of {}",
        class,
        index,
        data.vertex_count()
      );
    }
  }
}

#[test]
fn test_regular_vertices_are_crossing_edges() {
  for case in 0..=255u8 {
    let (data, codes) = regular_case(case);
    let mut edges: Vec<(usize, usize)> = codes[..data.vertex_count()]
      .iter()
      .map(|&code| {
        let edge = EdgeCode::decode(code);
        (edge.v0, edge.v1)
      })
      .collect();
    edges.sort();
    assert_eq!(edges, crossing_edges(case), "case {:#04x} edge set mismatch", case);
  }
}

#[test]
fn test_regular_every_vertex_used() {
  for case in 1..255u8 {
    let (data, _) = regular_case(case);
    for vertex in 0..data.vertex_count() {
      assert!(
        data.indices().contains(&(vertex as u8)),
        "case {:#04x} never references vertex {}",
        case,
        vertex
      );
    }
  }
}

#[test]
fn test_regular_reuse_directions() {
  for case in 1..255u8 {
    let (data, codes) = regular_case(case);
    for &code in &codes[..data.vertex_count()] {
      let edge = EdgeCode::decode(code);
      let axis_bit = edge.v0 ^ edge.v1;
      assert_eq!(axis_bit.count_ones(), 1, "edge must follow one axis");
      assert_eq!(edge.slot, axis_bit.trailing_zeros() as usize + 1);

      // The owner steps back along every perpendicular axis the edge sits
      // at the low side of.
      let expected = (!edge.v0 & 0x7 & !axis_bit) as u16;
      if expected == 0 {
        assert_eq!(edge.owner, OWNER_SELF);
      } else {
        assert_eq!(edge.owner, expected, "case {:#04x} code {:#06x}", case, code);
      }
    }
  }
}

#[test]
fn test_regular_single_corner_is_one_triangle() {
  for corner in 0..8 {
    let (data, _) = regular_case(1 << corner);
    assert_eq!(data.vertex_count(), 3);
    assert_eq!(data.triangle_count(), 1);
  }
}

#[test]
fn test_transition_homogeneous_cases_empty() {
  for case in [0u16, 511] {
    let (data, _) = transition_case(case);
    assert_eq!(data.vertex_count(), 0);
    assert_eq!(data.triangle_count(), 0);
  }
}

#[test]
fn test_transition_vertices_are_crossing_edges() {
  for case in 0..512u16 {
    let (data, codes) = transition_case(case);
    let inside = |point: usize| case & (1 << TRANSITION_POINT_SOURCE[point]) != 0;
    for &code in &codes[..data.vertex_count()] {
      let edge = EdgeCode::decode(code);
      assert!(edge.v0 < edge.v1 && edge.v1 < 13);
      assert_ne!(inside(edge.v0), inside(edge.v1), "case {} code {:#06x}", case, code);
      // Edges never cross between the two faces
      assert_eq!(edge.v0 >= 9, edge.v1 >= 9);
      assert!(edge.slot < 10);
    }
    for &index in data.indices() {
      assert!((index as usize) < data.vertex_count());
    }
  }
}

#[test]
fn test_transition_corner_slots() {
  for point in 0..13 {
    let (owner, slot) = transition_corner(point);
    assert!((10..TRANSITION_REUSE_SLOTS).contains(&slot));
    assert!(owner == OWNER_SELF || (1..=3).contains(&owner));
  }
  // Point 8 (max u, max v) belongs to the cell itself, point 0 to the
  // diagonal predecessor.
  assert_eq!(transition_corner(8).0, OWNER_SELF);
  assert_eq!(transition_corner(0).0, 3);
  assert_eq!(transition_corner(0).1, transition_corner(8).1);
  assert_eq!(transition_corner(9).1, transition_corner(12).1);
}

#[test]
fn test_transition_single_high_res_point() {
  // An isolated center sample is cut off by four high-res edges.
  let (data, _) = transition_case(1 << 4);
  assert_eq!(data.vertex_count(), 4);
  assert_eq!(data.triangle_count(), 2);
}

#[test]
fn test_edge_code_decode() {
  let edge = EdgeCode::decode(0x3304);
  assert_eq!(edge.owner, 3);
  assert_eq!(edge.slot, 3);
  assert_eq!(edge.v0, 0);
  assert_eq!(edge.v1, 4);
}

/// Lattice point in half-cell units.
type Point = [i8; 3];

/// A vertex, identified by the lattice edge it sits on.
type VertexKey = (Point, Point);

fn vertex_key(a: Point, b: Point) -> VertexKey {
  if a <= b {
    (a, b)
  } else {
    (b, a)
  }
}

fn regular_triangles(case: u8, corner: impl Fn(usize) -> Point) -> Vec<[VertexKey; 3]> {
  let (data, codes) = regular_case(case);
  let keys: Vec<VertexKey> = codes[..data.vertex_count()]
    .iter()
    .map(|&code| {
      let edge = EdgeCode::decode(code);
      vertex_key(corner(edge.v0), corner(edge.v1))
    })
    .collect();
  data
    .indices()
    .chunks(3)
    .map(|t| [keys[t[0] as usize], keys[t[1] as usize], keys[t[2] as usize]])
    .collect()
}

/// Transition cell with its high-res face at z = 0 and low-res face at z = 2.
fn transition_triangles(case: u16, u_offset: i8) -> Vec<[VertexKey; 3]> {
  let point = |p: usize| {
    let (u, v, low_res) = TRANSITION_POINT_UV[p];
    [u as i8 + u_offset, v as i8, if low_res { 2 } else { 0 }]
  };
  let (data, codes) = transition_case(case);
  let keys: Vec<VertexKey> = codes[..data.vertex_count()]
    .iter()
    .map(|&code| {
      let edge = EdgeCode::decode(code);
      vertex_key(point(edge.v0), point(edge.v1))
    })
    .collect();
  data
    .indices()
    .chunks(3)
    .map(|t| [keys[t[0] as usize], keys[t[1] as usize], keys[t[2] as usize]])
    .collect()
}

/// Counts directed edges selected by `counted` that are not matched by
/// exactly one reversed edge.
fn unmatched_edges(
  triangles: &[[VertexKey; 3]],
  counted: impl Fn(VertexKey, VertexKey) -> bool,
) -> usize {
  let mut counts: HashMap<(VertexKey, VertexKey), usize> = HashMap::new();
  for tri in triangles {
    for i in 0..3 {
      let (a, b) = (tri[i], tri[(i + 1) % 3]);
      if counted(a, b) {
        *counts.entry((a, b)).or_default() += 1;
      }
    }
  }
  counts
    .iter()
    .filter(|&(&(a, b), &n)| n != 1 || counts.get(&(b, a)) != Some(&1))
    .count()
}

fn all_points(a: VertexKey, b: VertexKey) -> [Point; 4] {
  [a.0, a.1, b.0, b.1]
}

#[test]
fn test_regular_no_triangle_inside_a_face() {
  let corner = |c: usize| [(c & 1) as i8, ((c >> 1) & 1) as i8, ((c >> 2) & 1) as i8];
  for case in 1..255u8 {
    for tri in regular_triangles(case, corner) {
      let points = [tri[0].0, tri[0].1, tri[1].0, tri[1].1, tri[2].0, tri[2].1];
      for axis in 0..3 {
        for side in 0..2 {
          assert!(
            !points.iter().all(|p| p[axis] == side),
            "case {:#04x} has a triangle on face {}{}",
            case,
            axis,
            side
          );
        }
      }
    }
  }
}

#[test]
fn test_regular_shared_face_closes() {
  // Two cells side by side over a 3x2x2 block of corners: every directed
  // edge in the shared x = 1 face needs exactly one reverse.
  for pattern in 0..4096u32 {
    let mut triangles = Vec::new();
    for x0 in 0..2i8 {
      let corner = |c: usize| [x0 + (c & 1) as i8, ((c >> 1) & 1) as i8, ((c >> 2) & 1) as i8];
      let case = (0..8).fold(0u8, |case, c| {
        let [x, y, z] = corner(c);
        let bit = x as u32 + 3 * (y as u32 + 2 * z as u32);
        case | (((pattern >> bit) & 1) as u8) << c
      });
      triangles.extend(regular_triangles(case, corner));
    }
    let on_face = |a: VertexKey, b: VertexKey| all_points(a, b).iter().all(|p| p[0] == 1);
    assert_eq!(unmatched_edges(&triangles, on_face), 0, "pattern {:#05x}", pattern);
  }
}

#[test]
fn test_transition_no_triangle_inside_a_face() {
  type OnFace = fn(&(u8, u8, bool)) -> bool;
  let faces: [OnFace; 9] = [
    |&(u, v, low)| !low && u <= 1 && v <= 1,
    |&(u, v, low)| !low && u >= 1 && v <= 1,
    |&(u, v, low)| !low && u <= 1 && v >= 1,
    |&(u, v, low)| !low && u >= 1 && v >= 1,
    |&(_, _, low)| low,
    |&(u, _, _)| u == 0,
    |&(u, _, _)| u == 2,
    |&(_, v, _)| v == 0,
    |&(_, v, _)| v == 2,
  ];
  for case in 1..511u16 {
    let (data, codes) = transition_case(case);
    for t in data.indices().chunks(3) {
      let points: Vec<(u8, u8, bool)> = t
        .iter()
        .flat_map(|&i| {
          let edge = EdgeCode::decode(codes[i as usize]);
          [TRANSITION_POINT_UV[edge.v0], TRANSITION_POINT_UV[edge.v1]]
        })
        .collect();
      for (index, face) in faces.iter().enumerate() {
        assert!(
          !points.iter().all(face),
          "case {} has a triangle on face {}",
          case,
          index
        );
      }
    }
  }
}

#[test]
fn test_transition_shared_side_closes() {
  // Two cells along u over a 5x3 grid of high-res samples.
  for pattern in 0..(1u32 << 15) {
    let mut triangles = Vec::new();
    for cell in 0..2u32 {
      let case = (0..9).fold(0u16, |case, p| {
        let bit = 2 * cell + p % 3 + 5 * (p / 3);
        case | (((pattern >> bit) & 1) as u16) << p
      });
      triangles.extend(transition_triangles(case, 2 * cell as i8));
    }
    let on_side = |a: VertexKey, b: VertexKey| all_points(a, b).iter().all(|p| p[0] == 2);
    assert_eq!(unmatched_edges(&triangles, on_side), 0, "pattern {:#06x}", pattern);
  }
}

#[test]
fn test_transition_low_res_face_meets_regular_cell() {
  // Nine high-res samples plus the four far corners of the regular cell
  // sitting on the low-res face.
  for pattern in 0..(1u32 << 13) {
    let case = (pattern & 0x1FF) as u16;
    let mut triangles = transition_triangles(case, 0);

    let corner = |c: usize| [2 * (c & 1) as i8, 2 * ((c >> 1) & 1) as i8, 2 + 2 * ((c >> 2) & 1) as i8];
    let regular = (0..8).fold(0u8, |regular, c| {
      let bit = if c < 4 {
        TRANSITION_POINT_SOURCE[[9, 10, 11, 12][c]] as u32
      } else {
        9 + c as u32 - 4
      };
      regular | (((pattern >> bit) & 1) as u8) << c
    });
    triangles.extend(regular_triangles(regular, corner));

    let on_face = |a: VertexKey, b: VertexKey| all_points(a, b).iter().all(|p| p[2] == 2);
    assert_eq!(unmatched_edges(&triangles, on_face), 0, "pattern {:#06x}", pattern);
  }
}

#[test]
fn test_transition_high_res_face_meets_fine_cells() {
  // Nine shared samples on the high-res face plus nine below it, meshed as
  // four half-size regular cells. Edges along the outer rim belong to the
  // neighboring transition cells and are left out.
  for pattern in 0..(1u32 << 18) {
    let case = (pattern & 0x1FF) as u16;
    let mut triangles = transition_triangles(case, 0);

    for (cu, cv) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
      let corner = |c: usize| {
        [
          cu + (c & 1) as i8,
          cv + ((c >> 1) & 1) as i8,
          ((c >> 2) & 1) as i8 - 1,
        ]
      };
      let fine = (0..8).fold(0u8, |fine, c| {
        let [u, v, z] = corner(c);
        let bit = (u + 3 * v) as u32 + if z == 0 { 0 } else { 9 };
        fine | (((pattern >> bit) & 1) as u8) << c
      });
      triangles.extend(regular_triangles(fine, corner));
    }

    let inner = |a: VertexKey, b: VertexKey| {
      let points = all_points(a, b);
      let rim = (0..2).any(|axis| [0, 2].iter().any(|&side| points.iter().all(|p| p[axis] == side)));
      points.iter().all(|p| p[2] == 0) && !rim
    };
    assert_eq!(unmatched_edges(&triangles, inner), 0, "pattern {:#07x}", pattern);
  }
}
