use super::rand::{draw_shape, draw_shapes, KindMix, ReplayToken, SampleCfg, EXTENT_CAP};
use super::*;
use nalgebra::vector;
use std::f64::consts::PI;

#[test]
fn known_geometry() {
    let sq = Square::new(2.0);
    assert!((sq.perimeter() - 8.0).abs() < 1e-12);
    assert!((sq.area() - 4.0).abs() < 1e-12);

    let c = Circle::new(1.0);
    assert!((c.perimeter() - 2.0 * PI).abs() < 1e-12);
    assert!((c.area() - PI).abs() < 1e-12);

    let r = Rectangle::new(1.5, 4.0);
    assert!((r.perimeter() - 11.0).abs() < 1e-12);
    assert!((r.area() - 6.0).abs() < 1e-12);

    // 3-4-5 right triangle
    let t = Triangle::new(vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]);
    assert!((t.perimeter() - 12.0).abs() < 1e-12);
    assert!((t.area() - 6.0).abs() < 1e-12);
}

#[test]
fn triangle_area_ignores_orientation() {
    let ccw = Triangle::new(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
    let cw = Triangle::new(vector![0.0, 0.0], vector![0.0, 2.0], vector![2.0, 0.0]);
    assert!((ccw.area() - 2.0).abs() < 1e-12);
    assert!((cw.area() - 2.0).abs() < 1e-12);

    let eq = Triangle::equilateral(2.0);
    assert!((eq.perimeter() - 6.0).abs() < 1e-12);
    assert!((eq.area() - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn enum_dispatch_matches_variants() {
    let shapes: [Shape; 4] = [
        Circle::new(0.5).into(),
        Square::new(3.0).into(),
        Rectangle::new(2.0, 1.0).into(),
        Triangle::equilateral(1.0).into(),
    ];
    let kinds: Vec<_> = shapes.iter().map(Shape::kind).collect();
    assert_eq!(kinds, ShapeKind::ALL);
    assert!(shapes[0].is_circle());
    assert!(shapes[1..].iter().all(|s| !s.is_circle()));
    assert!((shapes[1].area() - 9.0).abs() < 1e-12);
    assert!((shapes[2].perimeter() - 6.0).abs() < 1e-12);
}

#[test]
fn display_and_validity() {
    assert_eq!(Shape::from(Circle::new(1.0)).to_string(), "Circle(r=1)");
    assert_eq!(Shape::from(Square::new(2.5)).to_string(), "Square(s=2.5)");
    assert_eq!(
        Shape::from(Rectangle::new(1.0, 2.0)).to_string(),
        "Rectangle(w=1, h=2)"
    );
    assert!(Shape::from(Circle::new(0.0)).is_valid());
    assert!(!Shape::from(Circle::new(-1.0)).is_valid());
    assert!(!Shape::from(Rectangle::new(1.0, f64::NAN)).is_valid());
    assert_eq!(ShapeKind::Triangle.to_string(), "triangle");
}

#[test]
fn sampler_is_reproducible_and_respects_mix() {
    let cfg = SampleCfg::default();
    let tok = ReplayToken { seed: 7, index: 3 };
    assert_eq!(draw_shape(cfg, tok), draw_shape(cfg, tok));
    assert_eq!(draw_shapes(cfg, 7, 10), draw_shapes(cfg, 7, 10));

    let no_circles = SampleCfg {
        kinds: KindMix::NoCircles,
        ..cfg
    };
    assert!(draw_shapes(no_circles, 1, 200).iter().all(|s| !s.is_circle()));

    let only_tri = SampleCfg {
        kinds: KindMix::Only(ShapeKind::Triangle),
        ..cfg
    };
    assert!(draw_shapes(only_tri, 2, 50)
        .iter()
        .all(|s| s.kind() == ShapeKind::Triangle && s.area() > 0.0));
}

#[test]
fn sampler_clamps_degenerate_extents() {
    let cfg = SampleCfg {
        kinds: KindMix::Only(ShapeKind::Square),
        min_extent: -3.0,
        max_extent: -5.0,
    };
    for s in draw_shapes(cfg, 11, 20) {
        assert!(s.is_valid());
        assert!(s.area() > 0.0);
    }
}

#[test]
fn sampler_clamps_non_finite_extents() {
    let base = SampleCfg::default();
    let cfgs = [
        SampleCfg { max_extent: f64::INFINITY, ..base },
        SampleCfg { min_extent: f64::INFINITY, ..base },
        SampleCfg { min_extent: f64::NAN, max_extent: f64::NAN, ..base },
        SampleCfg { min_extent: f64::NEG_INFINITY, max_extent: f64::NAN, ..base },
    ];
    for cfg in cfgs {
        for s in draw_shapes(cfg, 3, 40) {
            assert!(s.is_valid(), "{s}");
            assert!(s.perimeter().is_finite() && s.perimeter() > 0.0);
            assert!(s.area() <= EXTENT_CAP * EXTENT_CAP * 4.0);
        }
    }
}
