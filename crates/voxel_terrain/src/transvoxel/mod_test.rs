use super::*;

use std::collections::{HashMap, HashSet};

use glam::DVec3;

use crate::density::DensityField;
use crate::test_utils::{
  constant_field, half_space_field, position_key, sphere_field, unmatched_edges,
};
use crate::types::{density_conversion, ChunkMesh, Face, TransitionMask, BORDER_HIGH_RES};

// =============================================================================
// Helpers
// =============================================================================

type KeyTriangle = [[i64; 3]; 3];

fn keyed_triangles(positions: &[[f32; 3]], indices: &[u16], offset: [f32; 3]) -> Vec<KeyTriangle> {
  indices
    .chunks_exact(3)
    .map(|tri| {
      std::array::from_fn(|i| {
        let p = positions[tri[i] as usize];
        position_key([p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]])
      })
    })
    .collect()
}

fn regular_positions(mesh: &ChunkMesh) -> Vec<[f32; 3]> {
  mesh.vertices.iter().map(|v| v.position).collect()
}

/// Directed edges (by position) without exactly one reverse partner.
fn open_edges(triangles: &[KeyTriangle]) -> usize {
  let mut counts: HashMap<([i64; 3], [i64; 3]), i32> = HashMap::new();
  for tri in triangles {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *counts.entry((a, b)).or_default() += 1;
    }
  }
  counts
    .iter()
    .filter(|&(&(a, b), &n)| n != 1 || counts.get(&(b, a)).copied().unwrap_or(0) != 1)
    .count()
}

fn signed_volume(triangles: &[KeyTriangle]) -> f64 {
  let to_world = |k: [i64; 3]| DVec3::new(k[0] as f64, k[1] as f64, k[2] as f64) / 4096.0;
  triangles
    .iter()
    .map(|&tri| {
      let [a, b, c] = tri.map(to_world);
      a.dot(b.cross(c)) / 6.0
    })
    .sum()
}

/// Triangles whose geometric normal points toward `center`.
fn inward_triangles(mesh: &ChunkMesh, center: [f32; 3]) -> usize {
  let center = glam::Vec3::from_array(center);
  mesh
    .indices
    .chunks_exact(3)
    .filter(|tri| {
      let [a, b, c] = [tri[0], tri[1], tri[2]]
        .map(|i| glam::Vec3::from_array(mesh.vertices[i as usize].position));
      let normal = (b - a).cross(c - a);
      normal.dot((a + b + c) / 3.0 - center) < 0.0
    })
    .count()
}

struct SeamFixture {
  coarse_field: DensityField,
  fine_field: DensityField,
  coarse: ChunkMesh,
  transition: crate::types::TransitionMesh,
  fine: ChunkMesh,
  fine_offset: [f32; 3],
}

/// A coarse chunk (8 cells of size 2) at the origin and a fine chunk (16
/// cells of size 1) across `face`, cut by a sphere straddling the seam.
fn seam_fixture(face: Face) -> SeamFixture {
  let axis = face.axis();
  let mut center = [8.3, 8.1, 7.7];
  center[axis] = if face.is_positive() { 16.2 } else { 0.3 };
  let center = DVec3::from_array(center);
  let mut offset = [0i32; 3];
  offset[axis] = if face.is_positive() { 16 } else { -16 };

  let density =
    |p: DVec3| density_conversion::to_storage(((p.distance(center) - 5.2) / 2.0) as f32);
  let coarse_field = DensityField::from_fn(8, |x, y, z| {
    density(DVec3::new(2.0 * x as f64, 2.0 * y as f64, 2.0 * z as f64))
  });
  let fine_field = DensityField::from_fn(16, |x, y, z| {
    density(DVec3::new(
      (offset[0] + x) as f64,
      (offset[1] + y) as f64,
      (offset[2] + z) as f64,
    ))
  });

  let mask = TransitionMask::EMPTY.with(face);
  let coarse_config = MeshConfig::new().with_cell_size(2.0);
  let coarse = generate_regular(&coarse_field, mask, &coarse_config);
  let transition = generate_transition_face(&coarse_field, &fine_field, face, mask, &coarse_config);
  let fine = generate_regular(&fine_field, TransitionMask::EMPTY, &MeshConfig::default());

  SeamFixture {
    coarse_field,
    fine_field,
    coarse,
    transition,
    fine,
    fine_offset: offset.map(|c| c as f32),
  }
}

impl SeamFixture {
  fn union(&self) -> Vec<KeyTriangle> {
    let secondary: Vec<[f32; 3]> = self
      .transition
      .vertices
      .iter()
      .map(|v| v.secondary_position)
      .collect();

    let mut all = keyed_triangles(&regular_positions(&self.coarse), &self.coarse.indices, [0.0; 3]);
    all.extend(keyed_triangles(&secondary, &self.transition.indices, [0.0; 3]));
    all.extend(keyed_triangles(
      &regular_positions(&self.fine),
      &self.fine.indices,
      self.fine_offset,
    ));
    all
  }
}

// =============================================================================
// Regular cells
// =============================================================================

#[test]
fn test_sphere_is_closed() {
  for (center, radius) in [
    ([8.0, 8.0, 8.0], 5.3),
    ([8.2, 7.9, 8.4], 6.0),
    ([8.5, 8.5, 8.5], 3.7),
  ] {
    let field = sphere_field(16, center, radius);
    let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

    assert!(!mesh.is_empty());
    assert!(
      unmatched_edges(&mesh.indices).is_empty(),
      "sphere at {:?} r={} has open edges",
      center,
      radius
    );
  }
}

#[test]
fn test_sphere_faces_outward() {
  let center = [8.2, 7.9, 8.4];
  let field = sphere_field(16, center, 6.0);
  let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

  let c = center.map(|v| v as f32);
  assert_eq!(inward_triangles(&mesh, c), 0);

  for vertex in &mesh.vertices {
    let p = vertex.position;
    let outward = (p[0] - c[0]) * vertex.normal[0]
      + (p[1] - c[1]) * vertex.normal[1]
      + (p[2] - c[2]) * vertex.normal[2];
    assert!(outward > 0.0, "normal at {:?} points inward", p);
  }
}

#[test]
fn test_vertices_are_shared() {
  let field = sphere_field(16, [8.0, 8.0, 8.0], 5.3);
  let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

  let unique: HashSet<[i64; 3]> = mesh.vertices.iter().map(|v| position_key(v.position)).collect();
  assert_eq!(unique.len(), mesh.vertex_count(), "duplicate vertex emitted");
  // Closed genus-0 surface: V - E + F = 2.
  let edges = mesh.indices.len() / 2;
  assert_eq!(
    mesh.vertex_count() as i64 - edges as i64 + mesh.triangle_count() as i64,
    2
  );
}

#[test]
fn test_meshing_is_idempotent() {
  let field = sphere_field(16, [8.2, 7.9, 8.4], 6.0);
  let mask = TransitionMask::EMPTY.with(Face::PosY);
  let config = MeshConfig::default();

  let first = generate_regular(&field, mask, &config);
  let second = generate_regular(&field, mask, &config);
  assert_eq!(first, second);
}

#[test]
fn test_half_space() {
  let field = half_space_field(16, 8.5);
  let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

  assert_eq!(mesh.triangle_count(), 2 * 16 * 16);
  assert_eq!(mesh.vertex_count(), 17 * 17);
  for vertex in &mesh.vertices {
    assert_eq!(vertex.position[1], 8.5);
    assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
  }
  assert_eq!(mesh.bounds.min, [0.0, 8.5, 0.0]);
  assert_eq!(mesh.bounds.max, [16.0, 8.5, 16.0]);
}

#[test]
fn test_half_space_on_lattice_plane() {
  // Zero samples snap onto corners; no triangle may collapse into the mesh.
  let field = half_space_field(16, 8.0);
  let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

  assert_eq!(mesh.triangle_count(), 2 * 16 * 16);
  assert_eq!(mesh.vertex_count(), 17 * 17);
  assert!(mesh.vertices.iter().all(|v| v.position[1] == 8.0));
}

#[test]
fn test_half_space_faces_up() {
  let field = half_space_field(8, 3.5);
  let mesh = generate_regular(&field, TransitionMask::EMPTY, &MeshConfig::default());

  for tri in mesh.indices.chunks_exact(3) {
    let [a, b, c] = [tri[0], tri[1], tri[2]]
      .map(|i| glam::Vec3::from_array(mesh.vertices[i as usize].position));
    assert!((b - a).cross(c - a).y > 0.0);
  }
}

#[test]
fn test_cell_size_scales_positions() {
  let field = half_space_field(8, 3.5);
  let mesh = generate_regular(
    &field,
    TransitionMask::EMPTY,
    &MeshConfig::new().with_cell_size(2.0),
  );

  assert!(mesh.vertices.iter().all(|v| v.position[1] == 7.0));
  assert_eq!(mesh.bounds.max, [16.0, 7.0, 16.0]);
}

#[test]
fn test_homogeneous_fields_are_empty() {
  for value in [-127, -1, 0, 1, 127] {
    let mesh = generate_regular(
      &constant_field(16, value),
      TransitionMask::EMPTY,
      &MeshConfig::default(),
    );
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
  }
}

#[test]
fn test_regular_inset_near_stitched_face() {
  let field = half_space_field(8, 3.5);
  let mask = TransitionMask::EMPTY.with(Face::NegX).with(Face::PosZ);
  let mesh = generate_regular(&field, mask, &MeshConfig::default());
  let has = |p: [f32; 3]| mesh.vertices.iter().any(|v| v.position == p);

  assert_eq!(mesh.vertex_count(), 9 * 9);
  // Stitched faces move in by the full width, both at once on their shared edge.
  assert!(has([0.5, 3.5, 4.0]));
  assert!(has([4.0, 3.5, 7.5]));
  assert!(has([0.5, 3.5, 7.5]));
  // Interior lattice lines stay put.
  assert!(has([1.0, 3.5, 7.0]));
  // Edges shared with the unstitched -z and +x faces do not move.
  assert!(has([0.0, 3.5, 0.0]));
  assert!(has([8.0, 3.5, 8.0]));
  assert_eq!(mesh.bounds.min, [0.0, 3.5, 0.0]);
  assert_eq!(mesh.bounds.max, [8.0, 3.5, 8.0]);
}

// =============================================================================
// Transition cells
// =============================================================================

#[test]
fn test_seam_is_closed_on_every_face() {
  for face in Face::ALL {
    let fixture = seam_fixture(face);
    assert!(!fixture.coarse.is_empty());
    assert!(!fixture.transition.is_empty(), "{:?}: no transition geometry", face);
    assert!(!fixture.fine.is_empty());

    let union = fixture.union();
    assert_eq!(open_edges(&union), 0, "{:?}: seam has cracks", face);
    assert!(signed_volume(&union) > 0.0, "{:?}: seam is inside out", face);
  }
}

#[test]
fn test_seam_vertices_match_both_sides() {
  for face in Face::ALL {
    let fixture = seam_fixture(face);
    let fine_keys: HashSet<[i64; 3]> = fixture
      .fine
      .vertices
      .iter()
      .map(|v| {
        let p = v.position;
        let o = fixture.fine_offset;
        position_key([p[0] + o[0], p[1] + o[1], p[2] + o[2]])
      })
      .collect();
    let coarse_keys: HashSet<[i64; 3]> = fixture
      .coarse
      .vertices
      .iter()
      .map(|v| position_key(v.position))
      .collect();

    for vertex in &fixture.transition.vertices {
      let key = position_key(vertex.secondary_position);
      if vertex.border_mask & BORDER_HIGH_RES != 0 {
        assert!(fine_keys.contains(&key), "{:?}: high-res vertex off the fine mesh", face);
      } else {
        assert!(coarse_keys.contains(&key), "{:?}: low-res vertex off the coarse mesh", face);
      }
    }
  }
}

#[test]
fn test_transition_vertex_layout() {
  for face in Face::ALL {
    let fixture = seam_fixture(face);
    let axis = face.axis();
    let plane = if face.is_positive() { 16.0 } else { 0.0 };
    let inset = if face.is_positive() { 15.0 } else { 1.0 };

    for vertex in &fixture.transition.vertices {
      assert_eq!(vertex.position[axis], plane);
      assert_ne!(vertex.border_mask & face.bit() as i32, 0);
      if vertex.border_mask & BORDER_HIGH_RES != 0 {
        assert_eq!(vertex.secondary_position, vertex.position);
      } else {
        // Full inset away from the other faces, scaled down within one
        // cell (two units) of them.
        let fade: f32 = (0..3)
          .filter(|&k| k != axis)
          .map(|k| {
            let p = vertex.position[k];
            (p.min(16.0 - p) / 2.0).min(1.0)
          })
          .product();
        let expected = plane + (inset - plane) * fade;
        assert!(
          (vertex.secondary_position[axis] - expected).abs() < 1e-5,
          "{:?}: low-res vertex at {:?} moved to {:?}",
          face,
          vertex.position,
          vertex.secondary_position
        );
      }
      let n = vertex.normal;
      assert!(((n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt() - 1.0).abs() < 1e-5);
    }
  }
}

#[test]
fn test_transition_faces_follow_mask() {
  let fixture = seam_fixture(Face::PosX);
  let mask = TransitionMask::EMPTY.with(Face::PosX).with(Face::NegY);
  let config = MeshConfig::new().with_cell_size(2.0);

  let mut neighbors: [Option<&DensityField>; 6] = [None; 6];
  neighbors[Face::PosX.index()] = Some(&fixture.fine_field);

  let meshes = generate_transitions(&fixture.coarse_field, &neighbors, mask, &config);
  assert_eq!(meshes.len(), 1, "missing -y neighbor must be skipped");
  assert_eq!(meshes[0].face, Face::PosX);

  // A neighbor at the same LOD is not stitched.
  neighbors[Face::NegY.index()] = Some(&fixture.coarse_field);
  let meshes = generate_transitions(&fixture.coarse_field, &neighbors, mask, &config);
  assert_eq!(meshes.len(), 1);

  let meshes = generate_transitions(&fixture.coarse_field, &neighbors, TransitionMask::EMPTY, &config);
  assert!(meshes.is_empty());
}

#[test]
fn test_transition_homogeneous_face_is_empty() {
  let coarse = constant_field(8, 64);
  let fine = constant_field(16, 64);
  let mask = TransitionMask::EMPTY.with(Face::NegZ);
  let mesh = generate_transition_face(&coarse, &fine, Face::NegZ, mask, &MeshConfig::default());

  assert_eq!(mesh.face, Face::NegZ);
  assert!(mesh.is_empty());
}

#[test]
fn test_transition_half_space() {
  // A horizontal plane through an x face crosses every transition cell once.
  let coarse = half_space_field(8, 3.5);
  let fine = half_space_field(16, 7.0);
  let mask = TransitionMask::EMPTY.with(Face::NegX);
  let mesh = generate_transition_face(&coarse, &fine, Face::NegX, mask, &MeshConfig::default());

  assert!(!mesh.is_empty());
  for vertex in &mesh.vertices {
    assert_eq!(vertex.position[1], 3.5);
    assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
  }
}

#[test]
fn test_interpolation_parameter() {
  assert_eq!(interpolation_t(-16, 16), 128);
  assert_eq!(interpolation_t(-10, 0), 0);
  assert_eq!(interpolation_t(0, -10), 256);
  assert_eq!(interpolation_t(10, -30), 192);
  // Truncates toward zero.
  assert_eq!(interpolation_t(-2, 1), 85);
}
