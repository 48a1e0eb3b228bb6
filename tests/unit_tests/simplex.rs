use refquad::simplex::{tetrahedron, triangle};
use refquad::{integrate, Error};

use matrixcompare::assert_scalar_eq;

macro_rules! assert_rule_size {
    ($rule_fn:ident, order = $order:expr, size = $size:expr) => {{
        let (weights, points) = $rule_fn($order).expect("expected a tabulated rule");
        assert_eq!(weights.len(), points.len());
        assert_eq!(weights.len(), $size);
    }};
}

macro_rules! assert_no_rule_for_order {
    ($rule_fn:ident, dim = $dim:expr, order = $order:expr) => {
        assert_eq!(
            $rule_fn($order),
            Err(Error::UnsupportedOrder {
                dim: $dim,
                order: $order
            })
        );
    };
}

fn factorial(n: i32) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Exact integral of x^a y^b over the unit triangle.
fn triangle_monomial_integral(a: i32, b: i32) -> f64 {
    factorial(a) * factorial(b) / factorial(a + b + 2)
}

/// Exact integral of x^a y^b z^c over the unit tetrahedron.
fn tetrahedron_monomial_integral(a: i32, b: i32, c: i32) -> f64 {
    factorial(a) * factorial(b) * factorial(c) / factorial(a + b + c + 3)
}

#[test]
fn triangle_rules_have_expected_numbers_of_points() {
    assert_rule_size!(triangle, order = 1, size = 1);
    assert_rule_size!(triangle, order = 2, size = 3);
    assert_rule_size!(triangle, order = 3, size = 4);
    assert_rule_size!(triangle, order = 4, size = 6);
    assert_rule_size!(triangle, order = 5, size = 7);

    assert_no_rule_for_order!(triangle, dim = 2, order = 0);
    for order in 6..=12 {
        assert_no_rule_for_order!(triangle, dim = 2, order = order);
    }
}

#[test]
fn tetrahedron_rules_have_expected_numbers_of_points() {
    assert_rule_size!(tetrahedron, order = 1, size = 1);
    assert_rule_size!(tetrahedron, order = 2, size = 4);
    assert_rule_size!(tetrahedron, order = 3, size = 5);
    assert_rule_size!(tetrahedron, order = 4, size = 11);

    assert_no_rule_for_order!(tetrahedron, dim = 3, order = 0);
    for order in 5..=12 {
        assert_no_rule_for_order!(tetrahedron, dim = 3, order = order);
    }
}

#[test]
fn triangle_rules_integrate_monomials_up_to_design_order() {
    for order in 1..=5 {
        let rule = triangle(order).unwrap();
        for a in 0..=order as i32 {
            for b in 0..=(order as i32 - a) {
                let estimated_integral = integrate(&rule, |&[x, y]| x.powi(a) * y.powi(b));
                assert_scalar_eq!(
                    estimated_integral,
                    triangle_monomial_integral(a, b),
                    comp = abs,
                    tol = 1e-13
                );
            }
        }
    }
}

#[test]
fn tetrahedron_rules_integrate_monomials_up_to_design_order() {
    for order in 1..=4 {
        let rule = tetrahedron(order).unwrap();
        for a in 0..=order as i32 {
            for b in 0..=(order as i32 - a) {
                for c in 0..=(order as i32 - a - b) {
                    let estimated_integral =
                        integrate(&rule, |&[x, y, z]| x.powi(a) * y.powi(b) * z.powi(c));
                    assert_scalar_eq!(
                        estimated_integral,
                        tetrahedron_monomial_integral(a, b, c),
                        comp = abs,
                        tol = 1e-13
                    );
                }
            }
        }
    }
}

#[test]
fn triangle_weights_sum_to_reference_area() {
    for order in 1..=5 {
        let (weights, _) = triangle(order).unwrap();
        let total: f64 = weights.iter().sum();
        assert_scalar_eq!(total, 0.5, comp = abs, tol = 1e-14);
    }
}

#[test]
fn tetrahedron_weights_sum_to_reference_volume() {
    for order in 1..=4 {
        let (weights, _) = tetrahedron(order).unwrap();
        let total: f64 = weights.iter().sum();
        assert_scalar_eq!(total, 1.0 / 6.0, comp = abs, tol = 1e-14);
    }
}

#[test]
fn first_order_triangle_rule_is_the_centroid_rule() {
    let (weights, points) = triangle(1).unwrap();
    assert_eq!(weights, vec![0.5]);
    assert_eq!(points, vec![[1.0 / 3.0, 1.0 / 3.0]]);
}

#[test]
fn all_simplex_points_lie_inside_the_reference_domain() {
    for order in 1..=5 {
        let (_, points) = triangle(order).unwrap();
        for &[x, y] in &points {
            assert!(x >= 0.0 && y >= 0.0 && x + y <= 1.0);
        }
    }
    for order in 1..=4 {
        let (_, points) = tetrahedron(order).unwrap();
        for &[x, y, z] in &points {
            assert!(x >= 0.0 && y >= 0.0 && z >= 0.0 && x + y + z <= 1.0);
        }
    }
}
