use {
  super::*,
  euclid::Size2D,
  crate::noise::CoherentNoise,
  proptest::prelude::*
};

fn size(w: f32, h: f32) -> CanvasSize { Size2D::new(w, h) }

fn run(w: f32, h: f32, seed: u64) -> Vec<MotifAnchor> {
  generate(size(w, h), &PlacementConfig::default(), &Palette::default(), &mut CoherentNoise::seed_from_u64(seed))
}

fn assert_disjoint(anchors: &[MotifAnchor]) {
  for (i, a) in anchors.iter().enumerate() {
    for b in &anchors[i + 1..] {
      assert!(
        a.position.distance_to(b.position) >= a.radius + b.radius,
        "{:?} overlaps {:?}", a, b
      );
    }
  }
}

#[test] fn degenerate_canvas_is_empty() {
  for (w, h) in [(0.0, 0.0), (0.0, 500.0), (500.0, 0.0), (-10.0, 500.0), (500.0, -1.0), (f32::NAN, 10.0)] {
    assert!(run(w, h, 0).is_empty(), "{}x{}", w, h);
  }
}

#[test] fn grid_dimensions() {
  let config = PlacementConfig::default();
  assert_eq!(grid(size(500.0, 500.0), &config), Some((100.0, 5, 5)));
  assert_eq!(grid(size(1000.0, 450.0), &config), Some((200.0, 3, 5)));
  assert_eq!(grid(size(0.0, 450.0), &config), None);
}

#[test] fn square_canvas_scenario() {
  for seed in 0..20 {
    let anchors = run(500.0, 500.0, seed);
    assert!(anchors.len() <= 25);
    for anchor in &anchors {
      assert!((8..=15).contains(&anchor.leaf_count), "{}", anchor.leaf_count);
      assert!((50.0..=100.0).contains(&anchor.radius), "{}", anchor.radius);
      assert!((0.0..300.0).contains(&anchor.phase));
    }
    assert_disjoint(&anchors);
  }
}

#[test] fn first_cell_is_always_accepted() {
  let anchors = run(500.0, 500.0, 4);
  let first = anchors.first().expect("first candidate has nothing to overlap");
  assert!((20.0..=80.0).contains(&first.position.x));
  assert!((20.0..=80.0).contains(&first.position.y));
}

#[test] fn anchors_sit_in_cell_centers_in_row_major_order() {
  let edge = 1200.0 / 5.0;
  let anchors = run(1200.0, 800.0, 9);
  let cells = anchors.iter()
    .map(|a| {
      let (col, row) = ((a.position.x / edge) as usize, (a.position.y / edge) as usize);
      let (fx, fy) = (a.position.x / edge - col as f32, a.position.y / edge - row as f32);
      assert!((0.199..=0.801).contains(&fx) && (0.199..=0.801).contains(&fy), "{:?}", a.position);
      row * 5 + col
    })
    .collect::<Vec<_>>();
  assert!(cells.windows(2).all(|w| w[0] < w[1]), "{:?}", cells);
}

#[test] fn palette_roles_are_independent_draws() {
  let palette = Palette::default();
  let anchors = (0..10).flat_map(|seed| run(2000.0, 2000.0, seed)).collect::<Vec<_>>();
  assert!(anchors.iter().any(|a| a.colors.flower_center != a.colors.leaf_stem));
  assert!(anchors.iter().all(|a| palette.colors().contains(&a.colors.leaf_tip_stroke)));
}

#[test] fn tiny_canvas_is_valid() {
  // cells far smaller than any radius: only the first candidate fits
  let anchors = run(10.0, 2.0, 0);
  assert!(anchors.len() <= 1);
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test] fn never_overlaps(w in 1.0f32..3000.0, h in 1.0f32..3000.0, seed in any::<u64>()) {
    let anchors = run(w, h, seed);
    let (_, rows, cols) = grid(size(w, h), &PlacementConfig::default()).unwrap();
    prop_assert!(anchors.len() <= rows * cols);
    assert_disjoint(&anchors);
  }
}
