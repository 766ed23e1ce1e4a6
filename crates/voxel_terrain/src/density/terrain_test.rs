use super::*;

fn flat_config() -> NoiseConfig {
  NoiseConfig::new(3)
    .with_macro(0.0, 0.01)
    .with_detail(0.0, 0.1)
    .with_base_height(10.0)
    .with_ramp(2.0)
}

#[test]
fn test_flat_terrain_ramps_around_base_height() {
  let terrain = NoiseTerrain::new(flat_config());
  assert_eq!(terrain.height(123.0, -45.0), 10.0);
  assert_eq!(terrain.density(DVec3::new(0.0, 10.0, 0.0)), 0.0);
  assert_eq!(terrain.density(DVec3::new(0.0, 11.0, 0.0)), 0.5);
  assert_eq!(terrain.density(DVec3::new(0.0, 9.0, 0.0)), -0.5);
}

#[test]
fn test_density_is_clamped() {
  let terrain = NoiseTerrain::default();
  for y in [-10_000.0, -500.0, 0.0, 500.0, 10_000.0] {
    let d = terrain.density(DVec3::new(17.0, y, -3.0));
    assert!((-1.0..=1.0).contains(&d), "density {} out of range at y {}", d, y);
  }
  assert_eq!(terrain.density(DVec3::new(0.0, 10_000.0, 0.0)), 1.0);
  assert_eq!(terrain.density(DVec3::new(0.0, -10_000.0, 0.0)), -1.0);
}

#[test]
fn test_same_seed_is_deterministic() {
  let a = NoiseTerrain::new(NoiseConfig::new(11));
  let b = NoiseTerrain::new(NoiseConfig::new(11));
  for i in 0..32 {
    let p = DVec3::new(i as f64 * 7.3, i as f64 * 0.5 - 8.0, i as f64 * -3.1);
    assert_eq!(a.density(p), b.density(p));
  }
}

#[test]
fn test_different_seeds_differ() {
  let a = NoiseTerrain::new(NoiseConfig::new(1));
  let b = NoiseTerrain::new(NoiseConfig::new(2));
  let differs = (0..64).any(|i| {
    let x = i as f64 * 13.7;
    let z = i as f64 * 5.9;
    a.height(x, z) != b.height(x, z)
  });
  assert!(differs, "seeds 1 and 2 produced identical height fields");
}

#[test]
fn test_relief_varies_height() {
  let terrain = NoiseTerrain::new(NoiseConfig::new(5).with_macro(30.0, 0.01));
  let heights: Vec<f64> = (0..64)
    .map(|i| terrain.height(i as f64 * 11.0, i as f64 * 3.0))
    .collect();
  let min = heights.iter().cloned().fold(f64::INFINITY, f64::min);
  let max = heights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
  assert!(max - min > 1.0, "relief too flat: {}..{}", min, max);
}

#[test]
fn test_caves_open_only_below_ceiling() {
  let config = flat_config()
    .with_caves(0.0, 0.1)
    .with_cave_ceiling(-10.0);
  let terrain = NoiseTerrain::new(config);

  let mut carved_below = 0;
  for x in 0..16 {
    for z in 0..16 {
      // Deep underground: only caves can make it positive.
      let deep = DVec3::new(x as f64 * 3.0, -40.0, z as f64 * 3.0);
      if terrain.density(deep) > 0.0 {
        carved_below += 1;
      }
      // Between ceiling and surface: always solid.
      let shallow = DVec3::new(x as f64 * 3.0, 0.0, z as f64 * 3.0);
      assert!(terrain.density(shallow) < 0.0);
    }
  }
  assert!(carved_below > 0, "no caves carved below the ceiling");
}

#[test]
fn test_caves_disabled_by_default() {
  let terrain = NoiseTerrain::new(flat_config());
  assert!(!terrain.config().caves_enabled);
  for i in 0..32 {
    let p = DVec3::new(i as f64 * 2.5, -60.0, i as f64 * 1.5);
    assert_eq!(terrain.density(p), -1.0);
  }
}
