//! Regular cell extraction.

use super::lod_seams::transition_offset;
use super::reuse::{owner_cell, RegularReuseCache};
use super::{gradient, interpolation_t, MeshConfig};
use crate::constants::{corner_deltas, CORNER_OFFSETS, INTERPOLATION_ONE};
use crate::density::DensityField;
use crate::tables::{regular_case, EdgeCode, MAX_CELL_VERTICES, OWNER_SELF};
use crate::types::{ChunkMesh, RegularVertex, TransitionMask};

/// Extract the regular cells of a chunk.
///
/// `mask` lists the faces bordering a finer chunk; vertices near those faces
/// are inset to make room for the transition slab.
#[cfg_attr(
  feature = "profiling",
  tracing::instrument(skip_all, name = "transvoxel::regular")
)]
pub fn generate_regular(
  field: &DensityField,
  mask: TransitionMask,
  config: &MeshConfig,
) -> ChunkMesh {
  let mut mesh = ChunkMesh::new();
  if field.is_homogeneous() {
    return mesh;
  }

  let cells = field.cells() as i32;
  let deltas = corner_deltas(field.dim());
  let mut reuse = RegularReuseCache::new(field.cells());
  let seam = Seam {
    cells: cells as f32,
    mask,
    width: config.transition_width,
    cell_size: config.cell_size,
  };

  for x in 0..cells {
    for y in 0..cells {
      for z in 0..cells {
        let base = field.index(x, y, z);
        let density: [i8; 8] = std::array::from_fn(|i| field.get_index(base + deltas[i]));
        let case = case_code(&density);
        if case == 0 || case == 255 {
          continue;
        }

        let cell = [x, y, z];
        let (class, codes) = regular_case(case);
        let mut local = [0u16; MAX_CELL_VERTICES];

        for (out, &code) in local.iter_mut().zip(codes).take(class.vertex_count()) {
          let edge = EdgeCode::decode(code);
          let t = interpolation_t(density[edge.v0], density[edge.v1]);

          let (direction, slot) = if t & 0xFF != 0 {
            (edge.owner, edge.slot)
          } else {
            // Snapped onto a corner: owned by the cell whose maximal corner it is.
            let corner = if t == 0 { edge.v1 } else { edge.v0 };
            let direction = corner as u16 ^ 7;
            (if direction == 0 { OWNER_SELF } else { direction }, 0)
          };

          let owner = owner_cell(cell, direction);
          *out = match reuse.get(owner, slot) {
            Some(index) => index,
            None => {
              let index = push_vertex(&mut mesh, field, cell, edge, t, &seam);
              reuse.set(owner, slot, index);
              index
            }
          };
        }

        for tri in class.indices().chunks_exact(3) {
          let a = local[tri[0] as usize];
          let b = local[tri[1] as usize];
          let c = local[tri[2] as usize];
          if a == b || b == c || a == c {
            continue;
          }
          mesh.indices.extend_from_slice(&[a, b, c]);
        }
      }
    }
  }

  mesh
}

struct Seam {
  cells: f32,
  mask: TransitionMask,
  width: f32,
  cell_size: f32,
}

/// Bit `i` set when corner `i` is solid.
#[inline(always)]
fn case_code(density: &[i8; 8]) -> u8 {
  density
    .iter()
    .enumerate()
    .fold(0u8, |case, (i, &d)| case | (((d < 0) as u8) << i))
}

fn push_vertex(
  mesh: &mut ChunkMesh,
  field: &DensityField,
  cell: [i32; 3],
  edge: EdgeCode,
  t: i32,
  seam: &Seam,
) -> u16 {
  let p0 = corner_position(cell, edge.v0);
  let p1 = corner_position(cell, edge.v1);
  let u = INTERPOLATION_ONE - t;
  let local: [f32; 3] = std::array::from_fn(|k| {
    (p0[k] * t + p1[k] * u) as f32 / INTERPOLATION_ONE as f32
  });

  let near = if t >= INTERPOLATION_ONE / 2 { p0 } else { p1 };
  let normal = gradient::at_corner(field, near[0], near[1], near[2]);

  let inset = transition_offset(local, seam.cells, seam.mask, seam.width);
  let position = inset.map(|c| c * seam.cell_size);

  debug_assert!(
    mesh.vertices.len() < u16::MAX as usize,
    "regular mesh exceeds u16 indices"
  );
  let index = mesh.vertices.len() as u16;
  mesh.vertices.push(RegularVertex {
    position,
    normal,
    material: 0,
  });
  mesh.bounds.encapsulate(position);
  index
}

#[inline(always)]
fn corner_position(cell: [i32; 3], corner: usize) -> [i32; 3] {
  let offset = CORNER_OFFSETS[corner];
  [cell[0] + offset[0], cell[1] + offset[1], cell[2] + offset[2]]
}
