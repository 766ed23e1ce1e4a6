//! Seam geometry between a chunk and its finer face neighbors.
//!
//! # The Seam Problem
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │   FINE CHUNK (LOD n)              COARSE CHUNK (LOD n+1)        │
//! │                                                                 │
//! │   * --- * --- * --- * --- *          o ------------- o          │
//! │   |     |     |     |     |          |               |          │
//! │   * --- * --- * --- * --- *    GAP   |               |          │
//! │   |     |     |     |     |  <---->  |               |          │
//! │   * --- * --- * --- * --- *          o ------------- o          │
//! │                                                                 │
//! │   The fine side crosses the seam plane at points the coarse     │
//! │   side never produces, so the two boundaries disagree.          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Transition Slab
//!
//! The coarse chunk shrinks its boundary cells away from every stitched
//! face, opening a slab `width` cells thick. Transition cells fill the slab:
//! their high-res side sits on the plane and matches the fine neighbor,
//! their low-res side receives the same inset as the regular vertices.
//!
//! ```text
//!   1D, negative face, width w:
//!
//!   pos:      0 ─────── 1 ─────── 2
//!   offset:   0 + w ─── 1 ─────── 2      inset fades to 0 at one cell
//! ```
//!
//! A face that is not stitched borders a chunk of the same or a coarser LOD,
//! and both sides must agree on every vertex lying in it. The inset scales
//! down toward each unstitched face and vanishes on it:
//!
//! ```text
//!   stitched +x, unstitched +y (shared with a same-LOD chunk):
//!
//!        +y face ── o─────o─────o     no inset on the shared face
//!                   │     │    ╱
//!                   o─────o───o       inset scaled by distance to +y
//!                   │     │   │
//!                   o─────o───o ── +x face
//! ```

use crate::types::{Face, TransitionMask, BORDER_HIGH_RES};

/// Push a chunk-local position (cell units) away from stitched faces.
///
/// Positions within one cell of a masked face move toward the interior by
/// `(1 - distance) · width`; the face plane itself moves by `width`, the one
/// cell line does not move. The shift is multiplied by the distance to every
/// unmasked face closer than one cell, so positions on an unmasked face
/// never move.
#[inline]
pub fn transition_offset(
  position: [f32; 3],
  cells: f32,
  mask: TransitionMask,
  width: f32,
) -> [f32; 3] {
  if mask.is_empty() {
    return position;
  }

  let fade: f32 = Face::ALL
    .into_iter()
    .filter(|&face| !mask.contains(face))
    .map(|face| face_distance(position, cells, face).min(1.0))
    .product();
  if fade <= 0.0 {
    return position;
  }

  let mut out = position;
  for face in mask.faces() {
    let distance = face_distance(position, cells, face);
    if distance >= 1.0 {
      continue;
    }
    let shift = (1.0 - distance) * width * fade;
    if face.is_positive() {
      out[face.axis()] -= shift;
    } else {
      out[face.axis()] += shift;
    }
  }
  out
}

/// Distance in cells from `position` to `face`, measured inward.
#[inline(always)]
fn face_distance(position: [f32; 3], cells: f32, face: Face) -> f32 {
  let p = position[face.axis()];
  if face.is_positive() {
    cells - p
  } else {
    p
  }
}

/// Faces a transition vertex lies within one cell of, plus the high-res bit.
pub fn border_mask(position: [f32; 3], cells: f32, high_res: bool) -> i32 {
  let mut mask = 0;
  for face in Face::ALL {
    let p = position[face.axis()];
    let near = if face.is_positive() {
      p > cells - 1.0
    } else {
      p < 1.0
    };
    if near {
      mask |= face.bit() as i32;
    }
  }
  if high_res {
    mask |= BORDER_HIGH_RES;
  }
  mask
}

#[cfg(test)]
#[path = "lod_seams_test.rs"]
mod lod_seams_test;
