mod visibility {
  use shadowcast::algorithms::segments::Source;
  use shadowcast::algorithms::visibility::naive;
  use shadowcast::data::*;
  use shadowcast::*;

  use rand::Rng;
  use rand::SeedableRng;

  fn corners(polygon: &VisibilityPolygon) -> Vec<[f64; 2]> {
    polygon.iter().map(|pt| pt.array).collect()
  }

  #[test]
  fn baseline_without_obstacles() -> Result<(), Error> {
    let engine = VisibilityEngine::new(100.0, 100.0, Vec::new())?;
    let polygon = engine.visibility_polygon(&Point::new([50.0, 50.0]))?;
    assert_eq!(
      corners(&polygon),
      vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]
    );
    assert_eq!(polygon.area(), 10_000.0);
    Ok(())
  }

  #[test]
  fn occluded_corner() -> Result<(), Error> {
    let engine = VisibilityEngine::new(100.0, 100.0, vec![Rect::new(60.0, 40.0, 10.0, 20.0)])?;
    let polygon = engine.visibility_polygon(&Point::new([50.0, 50.0]))?;
    assert!(polygon.iter().any(|pt| pt.approx_eq(&Point::new([60.0, 40.0]))));
    assert!(polygon.iter().any(|pt| pt.approx_eq(&Point::new([60.0, 60.0]))));
    assert_eq!(polygon.locate(&Point::new([85.0, 50.0])), PointLocation::Outside);
    Ok(())
  }

  #[test]
  fn obstacle_order_does_not_matter() -> Result<(), Error> {
    let a = Rect::new(20.0, 20.0, 10.0, 5.0);
    let b = Rect::new(60.0, 70.0, 5.0, 15.0);
    let c = Rect::new(45.0, 10.0, 30.0, 3.0);
    let origin = Point::new([40.0, 45.0]);
    let one = VisibilityEngine::new(100.0, 100.0, vec![a, b, c])?.visibility_polygon(&origin)?;
    let two = VisibilityEngine::new(100.0, 100.0, vec![c, a, b])?.visibility_polygon(&origin)?;
    assert!((one.area() - two.area()).abs() < 1e-6);
    assert_eq!(one.len(), two.len());
    Ok(())
  }

  // Same loop of vertices, possibly starting elsewhere.
  fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    let n = a.len();
    n == b.len()
      && (n == 0
        || (0..n).any(|shift| (0..n).all(|i| a[i].approx_eq(&b[(i + shift) % n]))))
  }

  #[test]
  fn mirrored_scene() -> Result<(), Error> {
    let scene = vec![Rect::new(10.0, 10.0, 20.0, 10.0), Rect::new(70.0, 50.0, 10.0, 30.0)];
    let mirrored: Vec<Rect> = scene
      .iter()
      .map(|rect| Rect::new(100.0 - rect.x - rect.width, rect.y, rect.width, rect.height))
      .collect();
    let polygon = VisibilityEngine::new(100.0, 100.0, scene)?
      .visibility_polygon(&Point::new([35.5, 40.25]))?;
    let mirror = VisibilityEngine::new(100.0, 100.0, mirrored)?
      .visibility_polygon(&Point::new([64.5, 40.25]))?;
    assert!(
      (polygon.area() - mirror.area()).abs() < 1e-6,
      "{} vs {}",
      polygon.area(),
      mirror.area()
    );
    let reflected: Vec<Point> = mirror
      .iter()
      .rev()
      .map(|pt| Point::new([100.0 - pt[0], pt[1]]))
      .collect();
    assert!(same_cycle(polygon.points(), &reflected), "{:?}\nvs\n{:?}", polygon, reflected);
    Ok(())
  }

  #[test]
  fn touching_obstacles() -> Result<(), Error> {
    // Two obstacles sharing an edge and one touching the viewport border.
    let engine = VisibilityEngine::new(
      100.0,
      100.0,
      vec![
        Rect::new(30.0, 30.0, 10.0, 10.0),
        Rect::new(40.0, 30.0, 10.0, 10.0),
        Rect::new(90.0, 60.0, 10.0, 10.0),
      ],
    )?;
    let origin = Point::new([45.0, 70.0]);
    let fast = engine.visibility_polygon(&origin)?;
    let slow = naive::visibility_polygon(&origin, engine.segments())?;
    assert!((fast.area() - slow.area()).abs() < 1e-6, "{} vs {}", fast.area(), slow.area());
    assert!(!fast.contains(&Point::new([45.0, 10.0])));
    Ok(())
  }

  #[test]
  fn random_scenes_agree_with_brute_force() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let viewport = Rect::new(0.0, 0.0, 200.0, 150.0);
    for _ in 0..20 {
      let obstacles: Vec<Rect> = (0..10)
        .map(|_| Rect::random(&viewport, 2.0, 25.0, &mut rng))
        .collect();
      let engine = VisibilityEngine::new(200.0, 150.0, obstacles)?;
      let origin = loop {
        let pt = Point::new([rng.gen_range(0.0..200.0), rng.gen_range(0.0..150.0)]);
        if engine.obstacles().iter().all(|rect| !rect.expand(0.01).contains(&pt)) {
          break pt;
        }
      };
      let fast = engine.visibility_polygon(&origin)?;
      let slow = naive::visibility_polygon(&origin, engine.segments())?;
      assert!(
        (fast.area() - slow.area()).abs() < 1e-3,
        "origin {:?}: {} vs {}",
        origin,
        fast.area(),
        slow.area()
      );
    }
    Ok(())
  }

  #[test]
  fn svg_output() -> Result<(), Error> {
    let engine = VisibilityEngine::new(10.0, 10.0, Vec::new())?;
    let polygon = engine.visibility_polygon(&Point::new([5.0, 5.0]))?;
    assert_eq!(polygon.to_svg_path(), "M0 0 L10 0 L10 10 L0 10 Z");
    Ok(())
  }

  #[test]
  fn segment_sources() -> Result<(), Error> {
    let set = build_segments(50.0, 50.0, &[Rect::new(5.0, 5.0, 5.0, 5.0)])?;
    assert_eq!(
      set.edges().iter().filter(|e| e.source == Source::Obstacle(0)).count(),
      4
    );
    assert_eq!(
      set.occluders().iter().filter(|e| e.source == Source::Margin).count(),
      4
    );
    Ok(())
  }

  #[cfg(feature = "serde")]
  #[test]
  fn scene_from_json() -> Result<(), Error> {
    let obstacles: Vec<Rect> =
      serde_json::from_str(r#"[{ "x": 60.0, "y": 40.0, "width": 10.0, "height": 20.0 }]"#).unwrap();
    let engine = VisibilityEngine::new(100.0, 100.0, obstacles)?;
    let polygon = engine.visibility_polygon(&Point::new([50.0, 50.0]))?;
    assert_eq!(polygon.len(), 6);
    Ok(())
  }
}
