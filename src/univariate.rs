//! Quadrature rules for the one-dimensional reference interval `[-1, 1]`.

use crate::Rule;
use std::f64::consts::PI;

const MAX_NEWTON_ITER: usize = 100;
const NEWTON_TOL: f64 = 1e-15;

/// Evaluate the Legendre polynomial `P_n` and its derivative at `x`.
///
/// Uses the three-term recurrence
/// `m P_m(x) = (2m - 1) x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)`.
///
/// The derivative is recovered from `P_n` and `P_{n - 1}` through a formula
/// that divides by `x^2 - 1`, so it is only valid on the open interval
/// `(-1, 1)`. Root finding below never evaluates it at the endpoints.
fn legendre_value_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let mut current = 1.0;
    let mut previous = 0.0;
    for m in 1..=n {
        let m = m as f64;
        let next = ((2.0 * m - 1.0) * x * current - (m - 1.0) * previous) / m;
        previous = current;
        current = next;
    }
    let n = n as f64;
    let derivative = n * (x * current - previous) / (x * x - 1.0);
    (current, derivative)
}

/// Find a root of `P_n` by Newton iteration from the given initial guess.
fn legendre_root_near(n: usize, initial_guess: f64) -> f64 {
    let mut x = initial_guess;
    for _ in 0..MAX_NEWTON_ITER {
        let (p, dp) = legendre_value_and_derivative(n, x);
        let dx = -p / dp;
        x += dx;
        if dx.abs() <= NEWTON_TOL {
            break;
        }
    }
    x
}

/// Gauss-Legendre quadrature for the reference interval `[-1, 1]`.
///
/// Returns the rule with the given number of points. Given `n` points, the
/// rule integrates polynomials of degree up to `2n - 1` exactly. Abscissas
/// are listed in ascending order.
///
/// # Panics
///
/// Panics if zero points are requested.
pub fn gauss(num_points: usize) -> Rule<1> {
    let n = num_points;
    assert!(n > 0, "number of points must be positive");

    let mut weights = vec![0.0; n];
    let mut points = vec![[0.0]; n];

    // The roots of P_n are symmetric about the origin, so a Newton solve is
    // only needed for the first half; the rest are mirrored.
    for i in 0..(n + 1) / 2 {
        // Initial guess from the asymptotic root distribution, accurate
        // enough that Newton converges in a handful of iterations
        // (Numerical Recipes, 3rd ed., §4.6).
        let guess = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let x = legendre_root_near(n, guess);

        // Standard closed-form weight in terms of the derivative at the root
        let (_, dp) = legendre_value_and_derivative(n, x);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        // Guesses enumerate the positive roots from the right; for odd n the
        // middle root near the origin is simply written twice
        points[i] = [-x];
        weights[i] = w;
        points[n - 1 - i] = [x];
        weights[n - 1 - i] = w;
    }

    (weights, points)
}

/// Gauss-Lobatto quadrature for the reference interval `[-1, 1]`.
///
/// The abscissas include both endpoints `-1` and `1`, which appear exactly as
/// the first and last points; interior abscissas are listed in ascending
/// order between them. Given `n` points, the rule integrates polynomials of
/// degree up to `2n - 3` exactly.
///
/// Returns `None` if fewer than two points are requested, since a Lobatto
/// rule must contain both endpoints.
pub fn try_gauss_lobatto(num_points: usize) -> Option<Rule<1>> {
    let n = num_points;
    if n < 2 {
        return None;
    }

    // The n Lobatto nodes are the endpoints plus the n - 2 roots of P'_m,
    // where m = n - 1 is the Legendre degree of the rule.
    let m = n - 1;
    let endpoint_weight = 2.0 / ((m * n) as f64);

    let mut weights = vec![0.0; n];
    let mut points = vec![[0.0]; n];
    points[0] = [-1.0];
    points[n - 1] = [1.0];
    // P_m(±1) = (±1)^m, so the general weight formula collapses at the ends
    weights[0] = endpoint_weight;
    weights[n - 1] = endpoint_weight;

    for j in 1..m {
        // Chebyshev-Lobatto nodes are a good starting point for the interior
        // Newton solve
        let mut x = -(PI * j as f64 / m as f64).cos();
        for _ in 0..MAX_NEWTON_ITER {
            let (p, dp) = legendre_value_and_derivative(m, x);
            // Newton step for the roots of (1 - x^2) P'_m, whose derivative
            // reduces to -m (m + 1) P_m by the Legendre differential equation
            let dx = (1.0 - x * x) * dp / ((m * n) as f64 * p);
            if dx.abs() <= NEWTON_TOL {
                break;
            }
            x += dx;
        }

        let (p, _) = legendre_value_and_derivative(m, x);
        points[j] = [x];
        weights[j] = 2.0 / ((m * n) as f64 * p * p);
    }

    Some((weights, points))
}
