use super::*;

fn approx_eq(a: [f32; 3], b: [f32; 3], epsilon: f32) -> bool {
  (a[0] - b[0]).abs() < epsilon && (a[1] - b[1]).abs() < epsilon && (a[2] - b[2]).abs() < epsilon
}

#[test]
fn test_gradient_along_each_axis() {
  let fx = DensityField::from_fn(2, |x, _, _| (x * 10) as i8);
  let fy = DensityField::from_fn(2, |_, y, _| (y * 10) as i8);
  let fz = DensityField::from_fn(2, |_, _, z| (z * 10) as i8);

  assert!(approx_eq(at_corner(&fx, 1, 1, 1), [1.0, 0.0, 0.0], 1e-6));
  assert!(approx_eq(at_corner(&fy, 1, 1, 1), [0.0, 1.0, 0.0], 1e-6));
  assert!(approx_eq(at_corner(&fz, 1, 1, 1), [0.0, 0.0, 1.0], 1e-6));
}

#[test]
fn test_gradient_points_toward_air() {
  // Solid below y = 1: the normal must point up (toward positive density).
  let field = DensityField::from_fn(2, |_, y, _| if y < 1 { -50 } else { 50 });
  let normal = at_corner(&field, 0, 1, 0);
  assert!(approx_eq(normal, [0.0, 1.0, 0.0], 1e-6));
}

#[test]
fn test_gradient_diagonal_is_unit() {
  let field = DensityField::from_fn(4, |x, y, z| (x + y + z) as i8);
  let n = at_corner(&field, 2, 2, 2);
  let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
  assert!((len - 1.0).abs() < 1e-5);
  assert!(approx_eq(n, [0.57735, 0.57735, 0.57735], 1e-4));
}

#[test]
fn test_gradient_fallback_on_flat_field() {
  let field = DensityField::filled(2, 7);
  assert_eq!(at_corner(&field, 1, 1, 1), [0.0, 1.0, 0.0]);
}

#[test]
fn test_gradient_reads_apron_at_boundary() {
  let field = DensityField::from_fn(2, |x, _, _| (x * 3) as i8);
  // Corner 0 reads x = -1, corner 2 reads x = 3 (apron on both sides).
  assert!(approx_eq(at_corner(&field, 0, 0, 0), [1.0, 0.0, 0.0], 1e-6));
  assert!(approx_eq(at_corner(&field, 2, 2, 2), [1.0, 0.0, 0.0], 1e-6));
}
