//! Table-driven quadrature rules for the reference triangle and tetrahedron.
//!
//! Simplex rules do not factor into tensor products, so they are taken from
//! published symmetric Gauss rules instead: Dunavant (1985) for the triangle
//! and the classical/Keast (1986) rules for the tetrahedron. Each table row
//! stores a quadrature point followed by its weight, with the weight already
//! scaled by the reference measure (1/2 for the triangle, 1/6 for the
//! tetrahedron).
//!
//! The reference domains are the unit triangle with vertices
//! `(0, 0), (1, 0), (0, 1)` and the unit tetrahedron with vertices
//! `(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)`.

use crate::{Error, Rule};

/// A quadrature rule for the reference triangle.
///
/// The returned rule integrates polynomials of total degree up to `order`
/// exactly. Only the tabulated orders are available; anything else fails
/// with [`Error::UnsupportedOrder`].
pub fn triangle(order: usize) -> Result<Rule<2>, Error> {
    let table: &[[f64; 3]] = match order {
        1 => &TRI_ORDER_1,
        2 => &TRI_ORDER_2,
        3 => &TRI_ORDER_3,
        4 => &TRI_ORDER_4,
        5 => &TRI_ORDER_5,
        _ => return Err(Error::UnsupportedOrder { dim: 2, order }),
    };

    let weights = table.iter().map(|&[_, _, w]| w).collect();
    let points = table.iter().map(|&[x, y, _]| [x, y]).collect();
    Ok((weights, points))
}

/// A quadrature rule for the reference tetrahedron.
///
/// The returned rule integrates polynomials of total degree up to `order`
/// exactly. Only the tabulated orders are available; anything else fails
/// with [`Error::UnsupportedOrder`].
pub fn tetrahedron(order: usize) -> Result<Rule<3>, Error> {
    let table: &[[f64; 4]] = match order {
        1 => &TET_ORDER_1,
        2 => &TET_ORDER_2,
        3 => &TET_ORDER_3,
        4 => &TET_ORDER_4,
        _ => return Err(Error::UnsupportedOrder { dim: 3, order }),
    };

    let weights = table.iter().map(|&[_, _, _, w]| w).collect();
    let points = table.iter().map(|&[x, y, z, _]| [x, y, z]).collect();
    Ok((weights, points))
}

// Rows are (x, y, weight). Midpoint rule at the centroid.
const TRI_ORDER_1: [[f64; 3]; 1] = [[0.3333333333333333, 0.3333333333333333, 0.5]];

// Degree 2, interior three-point rule.
const TRI_ORDER_2: [[f64; 3]; 3] = [
    [0.16666666666666666, 0.16666666666666666, 0.16666666666666666],
    [0.6666666666666666, 0.16666666666666666, 0.16666666666666666],
    [0.16666666666666666, 0.6666666666666666, 0.16666666666666666],
];

// Degree 3, four points with a negative centroid weight.
const TRI_ORDER_3: [[f64; 3]; 4] = [
    [0.3333333333333333, 0.3333333333333333, -0.28125],
    [0.2, 0.2, 0.2604166666666667],
    [0.6, 0.2, 0.2604166666666667],
    [0.2, 0.6, 0.2604166666666667],
];

// Degree 4, two symmetric three-point orbits.
const TRI_ORDER_4: [[f64; 3]; 6] = [
    [0.445948490915965, 0.445948490915965, 0.1116907948390055],
    [0.10810301816807, 0.445948490915965, 0.1116907948390055],
    [0.445948490915965, 0.10810301816807, 0.1116907948390055],
    [0.091576213509771, 0.091576213509771, 0.054975871827661],
    [0.816847572980458, 0.091576213509771, 0.054975871827661],
    [0.091576213509771, 0.816847572980458, 0.054975871827661],
];

// Degree 5, centroid plus two symmetric three-point orbits.
const TRI_ORDER_5: [[f64; 3]; 7] = [
    [0.3333333333333333, 0.3333333333333333, 0.1125],
    [0.470142064105115, 0.470142064105115, 0.066197076394253],
    [0.05971587178977, 0.470142064105115, 0.066197076394253],
    [0.470142064105115, 0.05971587178977, 0.066197076394253],
    [0.101286507323456, 0.101286507323456, 0.0629695902724135],
    [0.797426985353088, 0.101286507323456, 0.0629695902724135],
    [0.101286507323456, 0.797426985353088, 0.0629695902724135],
];

// Rows are (x, y, z, weight). Midpoint rule at the centroid.
const TET_ORDER_1: [[f64; 4]; 1] = [[0.25, 0.25, 0.25, 0.16666666666666666]];

// Degree 2, four interior points at (5 ∓ √5)/20.
const TET_ORDER_2: [[f64; 4]; 4] = [
    [
        0.1381966011250105,
        0.1381966011250105,
        0.1381966011250105,
        0.041666666666666664,
    ],
    [
        0.5854101966249685,
        0.1381966011250105,
        0.1381966011250105,
        0.041666666666666664,
    ],
    [
        0.1381966011250105,
        0.5854101966249685,
        0.1381966011250105,
        0.041666666666666664,
    ],
    [
        0.1381966011250105,
        0.1381966011250105,
        0.5854101966249685,
        0.041666666666666664,
    ],
];

// Degree 3, five points with a negative centroid weight.
const TET_ORDER_3: [[f64; 4]; 5] = [
    [0.25, 0.25, 0.25, -0.13333333333333333],
    [
        0.16666666666666666,
        0.16666666666666666,
        0.16666666666666666,
        0.075,
    ],
    [0.5, 0.16666666666666666, 0.16666666666666666, 0.075],
    [0.16666666666666666, 0.5, 0.16666666666666666, 0.075],
    [0.16666666666666666, 0.16666666666666666, 0.5, 0.075],
];

// Degree 4, eleven points: centroid, a vertex-like four-point orbit at 1/14,
// and the six-point edge orbit at (1 ± √(5/14))/4.
const TET_ORDER_4: [[f64; 4]; 11] = [
    [0.25, 0.25, 0.25, -0.013155555555555556],
    [
        0.07142857142857142,
        0.07142857142857142,
        0.07142857142857142,
        0.007622222222222222,
    ],
    [
        0.7857142857142857,
        0.07142857142857142,
        0.07142857142857142,
        0.007622222222222222,
    ],
    [
        0.07142857142857142,
        0.7857142857142857,
        0.07142857142857142,
        0.007622222222222222,
    ],
    [
        0.07142857142857142,
        0.07142857142857142,
        0.7857142857142857,
        0.007622222222222222,
    ],
    [
        0.3994035761667992,
        0.1005964238332008,
        0.1005964238332008,
        0.024888888888888887,
    ],
    [
        0.1005964238332008,
        0.3994035761667992,
        0.1005964238332008,
        0.024888888888888887,
    ],
    [
        0.1005964238332008,
        0.1005964238332008,
        0.3994035761667992,
        0.024888888888888887,
    ],
    [
        0.3994035761667992,
        0.3994035761667992,
        0.1005964238332008,
        0.024888888888888887,
    ],
    [
        0.3994035761667992,
        0.1005964238332008,
        0.3994035761667992,
        0.024888888888888887,
    ],
    [
        0.1005964238332008,
        0.3994035761667992,
        0.3994035761667992,
        0.024888888888888887,
    ],
];
