use blockport_geom::{Aabb, Shape, ShapeBox, Vec3};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn aabb_from_coords_keeps_layout() {
    let b = Aabb::from_coords([0.0, 0.25, 0.5, 1.0, 0.75, 0.5]);
    assert_eq!(b.min, Vec3::new(0.0, 0.25, 0.5));
    assert_eq!(b.max, Vec3::new(1.0, 0.75, 0.5));
    assert_eq!(b.coords(), [0.0, 0.25, 0.5, 1.0, 0.75, 0.5]);
}

#[test]
fn aabb_dimensions_use_absolute_differences() {
    // Corners given in reverse order still produce positive dimensions
    let b = Aabb::from_coords([1.0, 0.5, 0.75, 0.0, 0.0, 0.25]);
    assert!(approx_eq(b.width(), 1.0, 1e-12));
    assert!(approx_eq(b.height(), 0.5, 1e-12));
    assert!(approx_eq(b.depth(), 0.5, 1e-12));
}

#[test]
fn shape_box_from_slice() {
    let ok = ShapeBox::from_slice(&[0.0, 0.0, 0.0, 0.5, 0.5, 0.5]);
    assert!(ok.aabb().is_some());
    let bad = ShapeBox::from_slice(&[0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0]);
    assert!(bad.aabb().is_none());
}

#[test]
fn shape_accessors() {
    let empty = Shape::EMPTY;
    assert!(empty.is_empty());
    assert!(empty.first_box().is_none());
    assert!(empty.single_box().is_none());

    let a = Aabb::from_coords([0.0, 0.0, 0.0, 1.0, 0.5, 1.0]);
    let b = Aabb::from_coords([0.0, 0.5, 0.0, 0.5, 1.0, 1.0]);
    let two = Shape::from_aabbs([a, b]);
    assert_eq!(two.len(), 2);
    assert_eq!(two.first_box(), Some(&a));
    assert!(two.single_box().is_none());
    assert_eq!(two.valid_boxes().count(), 2);

    let one = Shape::from_aabbs([b]);
    assert_eq!(one.single_box(), Some(&b));
}

#[test]
fn shape_equality_is_ordered() {
    let a = Aabb::from_coords([0.0, 0.0, 0.0, 1.0, 0.5, 1.0]);
    let b = Aabb::from_coords([0.0, 0.5, 0.0, 0.5, 1.0, 1.0]);
    assert_eq!(Shape::from_aabbs([a, b]), Shape::from_aabbs([a, b]));
    assert_ne!(Shape::from_aabbs([a, b]), Shape::from_aabbs([b, a]));
}
