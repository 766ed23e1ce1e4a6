//! Transition cell extraction.
//!
//! A chunk stitches each face that borders a chunk one LOD finer. The face
//! is covered by `cells × cells` transition cells; cell `(u, v)` reads a
//! 3×3 block of the finer neighbor's samples on the shared plane.
//!
//! ```text
//!   face frame (axis a):       u = (a + 1) % 3,  v = (a + 2) % 3
//!
//!   sample (i, j) of cell (u, v) in the finer neighbor:
//!     [a]  = 2·cells (negative face) or 0 (positive face)
//!     [u]  = 2u + i
//!     [v]  = 2v + j
//! ```

use tracing::debug;

use super::lod_seams::{border_mask, transition_offset};
use super::reuse::TransitionReuseDeck;
use super::{gradient, interpolation_t, MeshConfig, TransitionMeshes};
use crate::constants::INTERPOLATION_ONE;
use crate::density::DensityField;
use crate::tables::{
  transition_case, transition_corner, EdgeCode, MAX_CELL_VERTICES, OWNER_SELF,
  TRANSITION_POINT_SOURCE, TRANSITION_POINT_UV,
};
use crate::types::{Face, TransitionMask, TransitionMesh, TransitionVertex};

/// Transition meshes for every face in `mask`.
///
/// `neighbors` is indexed by [`Face::index`]. A face whose neighbor is
/// missing, or is not exactly one LOD finer, produces no mesh.
#[cfg_attr(
  feature = "profiling",
  tracing::instrument(skip_all, name = "transvoxel::transitions")
)]
pub fn generate_transitions(
  field: &DensityField,
  neighbors: &[Option<&DensityField>; 6],
  mask: TransitionMask,
  config: &MeshConfig,
) -> TransitionMeshes {
  let mut meshes = TransitionMeshes::new();

  for face in mask.faces() {
    match neighbors[face.index()] {
      Some(fine) if fine.cells() == field.cells() * 2 => {
        meshes.push(generate_transition_face(field, fine, face, mask, config));
      }
      Some(fine) => {
        debug!(
          ?face,
          cells = field.cells(),
          neighbor_cells = fine.cells(),
          "neighbor is not one LOD finer, skipping transition face"
        );
      }
      None => {
        debug!(?face, "no neighbor field, skipping transition face");
      }
    }
  }

  meshes
}

/// Transition mesh for a single face.
///
/// `fine` must be the field of the neighbor across `face`, sampled with
/// twice as many cells. `mask` is the chunk's full transition mask: the
/// low-res side of the slab follows the insets of every stitched face.
pub fn generate_transition_face(
  field: &DensityField,
  fine: &DensityField,
  face: Face,
  mask: TransitionMask,
  config: &MeshConfig,
) -> TransitionMesh {
  debug_assert_eq!(fine.cells(), field.cells() * 2, "neighbor must be one LOD finer");
  debug_assert!(mask.contains(face), "face {:?} is not stitched by {}", face, mask);

  let mut mesh = TransitionMesh::new(face);
  let frame = FaceFrame::new(face, field.cells());
  let mut reuse = TransitionReuseDeck::new(field.cells());
  let cells = field.cells() as i32;

  for v in 0..cells {
    for u in 0..cells {
      let mut density = [0i8; 13];
      for (point, sample) in density.iter_mut().enumerate() {
        let source = TRANSITION_POINT_SOURCE[point];
        let (pu, pv, _) = TRANSITION_POINT_UV[source];
        let [x, y, z] = frame.fine_coord(u, v, pu, pv);
        *sample = fine.get(x, y, z);
      }

      let case = density[..9]
        .iter()
        .enumerate()
        .fold(0u16, |case, (i, &d)| case | (((d < 0) as u16) << i));
      let (class, codes) = transition_case(case);
      if class.vertex_count() == 0 {
        continue;
      }

      let mut local = [0u16; MAX_CELL_VERTICES];
      for (out, &code) in local.iter_mut().zip(codes).take(class.vertex_count()) {
        let edge = EdgeCode::decode(code);
        let t = interpolation_t(density[edge.v0], density[edge.v1]);

        let (direction, slot) = if t & 0xFF != 0 {
          (edge.owner, edge.slot)
        } else {
          transition_corner(if t == 0 { edge.v1 } else { edge.v0 })
        };

        let (ou, ov) = if direction == OWNER_SELF {
          (u, v)
        } else {
          (u - (direction & 1) as i32, v - ((direction >> 1) & 1) as i32)
        };

        *out = match reuse.get(ou, ov, slot) {
          Some(index) => index,
          None => {
            let index = push_vertex(&mut mesh, field, fine, &frame, (u, v), edge, t, mask, config);
            reuse.set(ou, ov, slot, index);
            index
          }
        };
      }

      for tri in class.indices().chunks_exact(3) {
        let a = local[tri[0] as usize];
        let mut b = local[tri[1] as usize];
        let mut c = local[tri[2] as usize];
        if a == b || b == c || a == c {
          continue;
        }
        if face.is_positive() {
          std::mem::swap(&mut b, &mut c);
        }
        mesh.indices.extend_from_slice(&[a, b, c]);
      }
    }
  }

  mesh
}

/// Maps face-local `(u, v)` coordinates onto chunk axes.
struct FaceFrame {
  axis: usize,
  u_axis: usize,
  v_axis: usize,
  cells: i32,
  /// Plane coordinate in this chunk's corner space.
  plane: i32,
  /// Plane coordinate in the finer neighbor's corner space.
  fine_plane: i32,
}

impl FaceFrame {
  fn new(face: Face, cells: usize) -> Self {
    let axis = face.axis();
    let cells = cells as i32;
    let (plane, fine_plane) = if face.is_positive() {
      (cells, 0)
    } else {
      (0, 2 * cells)
    };
    Self {
      axis,
      u_axis: (axis + 1) % 3,
      v_axis: (axis + 2) % 3,
      cells,
      plane,
      fine_plane,
    }
  }

  #[inline(always)]
  fn place(&self, a: i32, u: i32, v: i32) -> [i32; 3] {
    let mut out = [0; 3];
    out[self.axis] = a;
    out[self.u_axis] = u;
    out[self.v_axis] = v;
    out
  }

  /// Neighbor corner of a high-res point (`pu`, `pv` in half cells).
  #[inline(always)]
  fn fine_coord(&self, u: i32, v: i32, pu: u8, pv: u8) -> [i32; 3] {
    self.place(self.fine_plane, 2 * u + pu as i32, 2 * v + pv as i32)
  }

  /// Own corner under a low-res point.
  #[inline(always)]
  fn coarse_coord(&self, u: i32, v: i32, pu: u8, pv: u8) -> [i32; 3] {
    self.place(self.plane, u + (pu / 2) as i32, v + (pv / 2) as i32)
  }

  /// Point position in half-cell units of this chunk.
  #[inline(always)]
  fn half_cell_position(&self, u: i32, v: i32, pu: u8, pv: u8) -> [i32; 3] {
    self.place(2 * self.plane, 2 * u + pu as i32, 2 * v + pv as i32)
  }
}

#[allow(clippy::too_many_arguments)]
fn push_vertex(
  mesh: &mut TransitionMesh,
  field: &DensityField,
  fine: &DensityField,
  frame: &FaceFrame,
  (u, v): (i32, i32),
  edge: EdgeCode,
  t: i32,
  mask: TransitionMask,
  config: &MeshConfig,
) -> u16 {
  let (u0, v0, low_res) = TRANSITION_POINT_UV[edge.v0];
  let (u1, v1, _) = TRANSITION_POINT_UV[edge.v1];
  let q0 = frame.half_cell_position(u, v, u0, v0);
  let q1 = frame.half_cell_position(u, v, u1, v1);
  let w = INTERPOLATION_ONE - t;
  let denominator = (2 * INTERPOLATION_ONE) as f32;
  let local: [f32; 3] = std::array::from_fn(|k| (q0[k] * t + q1[k] * w) as f32 / denominator);

  let near = if t >= INTERPOLATION_ONE / 2 { edge.v0 } else { edge.v1 };
  let (nu, nv, _) = TRANSITION_POINT_UV[near];
  let normal = if low_res {
    let [x, y, z] = frame.coarse_coord(u, v, nu, nv);
    gradient::at_corner(field, x, y, z)
  } else {
    let [x, y, z] = frame.fine_coord(u, v, nu, nv);
    gradient::at_corner(fine, x, y, z)
  };

  let cells = frame.cells as f32;
  let secondary = if low_res {
    transition_offset(local, cells, mask, config.transition_width)
  } else {
    local
  };

  let position = local.map(|c| c * config.cell_size);
  let secondary_position = secondary.map(|c| c * config.cell_size);

  debug_assert!(
    mesh.vertices.len() < u16::MAX as usize,
    "transition mesh exceeds u16 indices"
  );
  let index = mesh.vertices.len() as u16;
  mesh.vertices.push(TransitionVertex {
    position,
    normal,
    secondary_position,
    border_mask: border_mask(local, cells, !low_res),
  });
  mesh.bounds.encapsulate(secondary_position);
  index
}
