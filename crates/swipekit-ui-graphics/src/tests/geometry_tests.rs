use super::*;

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b - a, Point::new(3.0, 4.0));
}

#[test]
fn sanitized_width_rejects_garbage() {
    assert_eq!(Size::new(-4.0, 10.0).sanitized_width(), 0.0);
    assert_eq!(Size::new(f32::NAN, 10.0).sanitized_width(), 0.0);
    assert_eq!(Size::new(73.0, 10.0).sanitized_width(), 73.0);
}

#[test]
fn system_red_is_opaque() {
    assert_eq!(Color::SYSTEM_RED.a(), 1.0);
    assert!(Color::SYSTEM_RED.r() > Color::SYSTEM_RED.g());
}
