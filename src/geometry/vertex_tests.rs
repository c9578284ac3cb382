use crate::geometry::Vertex;

#[test]
fn test_new_assigns_each_coordinate() {
    let v = Vertex::new(1.0, 2.0, 3.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.y(), 2.0);
    assert_eq!(v.z(), 3.0);
}

#[test]
fn test_from_array_assigns_coordinates_by_index() {
    // Index 2 must land in z, not get folded into y.
    let v = Vertex::from([10.0, 20.0, 30.0]);
    assert_eq!(v.x(), 10.0);
    assert_eq!(v.y(), 20.0);
    assert_eq!(v.z(), 30.0);
}

#[test]
fn test_from_tuple() {
    let v: Vertex = (4.0, 5.0, 6.0).into();
    assert_eq!(v.x(), 4.0);
    assert_eq!(v.y(), 5.0);
    assert_eq!(v.z(), 6.0);
}

#[test]
fn test_equality() {
    let a = Vertex::new(1.0, 1.0, 1.0);
    let b = Vertex::new(1.0, 1.0, 1.0);
    let c = Vertex::new(1.0, 1.0, 1.0001);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_copy_semantics() {
    let a = Vertex::new(1.0, 2.0, 3.0);
    let b = a;
    assert_eq!(a, b);
}
