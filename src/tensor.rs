//! Tensor-product construction of multi-dimensional rules on hypercubes.
//!
//! A univariate rule on `[-1, 1]` induces a rule on the reference
//! quadrilateral or hexahedron by taking the Cartesian product of its
//! abscissas across all axes and multiplying the corresponding weights.

use crate::{Point, Rule};

/// Expand a univariate rule into a `D`-dimensional rule on `[-1, 1]^D`.
///
/// Every combination of per-axis abscissas appears exactly once, so a rule
/// with `n` univariate points yields `n^D` points. Combinations are
/// enumerated with the last axis varying fastest, i.e. in the same order as
/// `D` nested loops with axis 0 outermost. The weight of each point is the
/// product of the univariate weights selected along each axis.
pub fn tensor_product<const D: usize>(weights1d: &[f64], points1d: &[Point<1>]) -> Rule<D> {
    assert_eq!(
        weights1d.len(),
        points1d.len(),
        "univariate weights and points must have equal length"
    );
    let n = points1d.len();
    let num_points = n.pow(D as u32);

    let mut weights = Vec::with_capacity(num_points);
    let mut points = Vec::with_capacity(num_points);

    // Mixed-radix counter over the per-axis indices
    let mut indices = [0usize; D];
    for _ in 0..num_points {
        let mut weight = 1.0;
        let mut point = [0.0; D];
        for (axis, &index) in indices.iter().enumerate() {
            weight *= weights1d[index];
            point[axis] = points1d[index][0];
        }
        weights.push(weight);
        points.push(point);

        for axis in (0..D).rev() {
            indices[axis] += 1;
            if indices[axis] < n {
                break;
            }
            indices[axis] = 0;
        }
    }

    (weights, points)
}
