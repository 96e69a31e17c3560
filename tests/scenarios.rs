//! End-to-end coverage of the six golden scenarios and the rotation /
//! determinism properties, driven entirely through the public `triangulate`
//! facade.

use ring_triangulation::{point, signed_area, triangulate, Point, Triangle};

fn as_set(t: Triangle) -> [Point; 3] {
    let mut v = [t.a, t.b, t.c];
    v.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
    v
}

fn triangle_sets(triangles: &[Triangle]) -> Vec<[Point; 3]> {
    let mut sets: Vec<[Point; 3]> = triangles.iter().copied().map(as_set).collect();
    sets.sort_by(|a, b| {
        a.iter()
            .map(|p| (p.x, p.y))
            .collect::<Vec<_>>()
            .partial_cmp(&b.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>())
            .unwrap()
    });
    sets
}

#[test]
fn scenario_1_simple_cw_triangle() {
    let ring = [point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)];
    let expected = [Triangle::new(point(1.0, 0.0), point(0.0, 1.0), point(0.0, 0.0))];
    assert_eq!(triangle_sets(&triangulate(&ring)), triangle_sets(&expected));
}

#[test]
fn scenario_2_axis_aligned_square() {
    let ring = [
        point(-1.0, -1.0),
        point(1.0, -1.0),
        point(1.0, 1.0),
        point(-1.0, 1.0),
    ];
    let triangles = triangulate(&ring);
    assert_eq!(triangles.len(), 2);
    let total_area: f64 = triangles
        .iter()
        .map(|t| signed_area(t.a, t.b, t.c).abs() / 2.0)
        .sum();
    assert!((total_area - 4.0).abs() < 1e-9);
}

#[test]
fn scenario_3_repeated_point_matches_scenario_1() {
    let with_repeat = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 0.0),
        point(0.0, 1.0),
    ];
    let plain = [point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)];
    assert_eq!(
        triangle_sets(&triangulate(&with_repeat)),
        triangle_sets(&triangulate(&plain))
    );
}

#[test]
fn scenario_4_figure_eight() {
    let ring = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
    ];
    let expected = [
        Triangle::new(point(0.5, 0.5), point(1.0, 1.0), point(0.0, 1.0)),
        Triangle::new(point(0.5, 0.5), point(0.0, 0.0), point(1.0, 0.0)),
    ];
    assert_eq!(
        triangle_sets(&triangulate(&ring)),
        triangle_sets(&expected)
    );
}

#[test]
fn scenario_5_m_shape_with_self_touch() {
    let ring = [
        point(1.0, 1.0),
        point(3.0, 3.0),
        point(5.0, 1.0),
        point(5.0, 2.0),
        point(1.0, 2.0),
    ];
    let expected = [
        Triangle::new(point(4.0, 2.0), point(5.0, 1.0), point(5.0, 2.0)),
        Triangle::new(point(4.0, 2.0), point(3.0, 3.0), point(2.0, 2.0)),
        Triangle::new(point(2.0, 2.0), point(1.0, 2.0), point(1.0, 1.0)),
    ];
    assert_eq!(
        triangle_sets(&triangulate(&ring)),
        triangle_sets(&expected)
    );
}

#[test]
fn scenario_6_zero_area_loop_is_empty() {
    let ring = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        point(1.0, 0.0),
    ];
    assert!(triangulate(&ring).is_empty());
}

#[test]
fn property_rotation_invariance() {
    let ring = [
        point(-1.0, -1.0),
        point(1.0, -1.0),
        point(1.0, 1.0),
        point(-1.0, 1.0),
    ];
    let rotated = [ring[2], ring[3], ring[0], ring[1]];
    assert_eq!(
        triangle_sets(&triangulate(&ring)),
        triangle_sets(&triangulate(&rotated))
    );
}

#[test]
fn property_determinism() {
    let ring = [
        point(1.0, 1.0),
        point(3.0, 3.0),
        point(5.0, 1.0),
        point(5.0, 2.0),
        point(1.0, 2.0),
    ];
    let first = triangulate(&ring);
    let second = triangulate(&ring);
    assert_eq!(triangle_sets(&first), triangle_sets(&second));
}
