//! Quadrature rules for finite element reference domains.
//!
//! This crate constructs point/weight rules that approximate integrals over
//! the reference domains commonly used by finite element methods: the
//! reference hypercube `[-1, 1]^D` for `D = 1, 2, 3` (interval,
//! quadrilateral, hexahedron), the unit triangle with vertices
//! `(0, 0), (1, 0), (0, 1)` and the unit tetrahedron with vertices
//! `(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)`.
//!
//! Hypercube rules are tensor products of univariate Gauss-Legendre or
//! Gauss-Lobatto rules; simplex rules come from tabulated symmetric Gauss
//! rules at a fixed set of orders. The usual entry point is
//! [`QuadratureRule::gauss`] or [`QuadratureRule::with_family`], which
//! validate the requested combination and route to the appropriate
//! construction:
//!
//! ```
//! use refquad::{QuadratureRule, ReferenceShape};
//!
//! let rule = QuadratureRule::<2>::gauss(ReferenceShape::Hypercube, 2)?;
//! assert_eq!(rule.num_points(), 4);
//!
//! // Weights of a hypercube rule sum to the reference volume
//! let volume: f64 = rule.weights().iter().sum();
//! assert!((volume - 4.0).abs() < 1e-14);
//! # Ok::<(), refquad::Error>(())
//! ```
//!
//! Points are plain `[f64; D]` arrays so that the crate does not tie its
//! consumers to any particular linear algebra library; downstream evaluators
//! convert them into their own point types.

use std::fmt;
use std::fmt::{Display, Formatter};

pub mod simplex;
pub mod tensor;
pub mod univariate;

/// A D-dimensional point.
pub type Point<const D: usize> = [f64; D];

/// A one-dimensional point.
pub type Point1 = Point<1>;

/// A two-dimensional point.
pub type Point2 = Point<2>;

/// A three-dimensional point.
pub type Point3 = Point<3>;

/// A D-dimensional rule as a raw (weights, points) pair.
pub type Rule<const D: usize> = (Vec<f64>, Vec<Point<D>>);

/// The family of univariate rules underlying a hypercube rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFamily {
    /// Gauss-Legendre: all abscissas interior to the interval.
    Legendre,
    /// Gauss-Lobatto: abscissas include both interval endpoints.
    Lobatto,
}

impl Display for RuleFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legendre => write!(f, "Gauss-Legendre"),
            Self::Lobatto => write!(f, "Gauss-Lobatto"),
        }
    }
}

/// The reference domain a rule integrates over.
///
/// `Hypercube` denotes the interval, quadrilateral or hexahedron depending
/// on the dimension it is instantiated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceShape {
    Hypercube,
    Triangle,
    Tetrahedron,
}

impl Display for ReferenceShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypercube => write!(f, "hypercube"),
            Self::Triangle => write!(f, "triangle"),
            Self::Tetrahedron => write!(f, "tetrahedron"),
        }
    }
}

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested rule family cannot be combined with the requested shape.
    UnsupportedRule {
        family: RuleFamily,
        shape: ReferenceShape,
    },
    /// The requested shape does not exist in the requested dimension.
    UnsupportedShape { shape: ReferenceShape, dim: usize },
    /// No rule of the requested order is tabulated for the simplex.
    UnsupportedOrder { dim: usize, order: usize },
    /// The requested order is below the minimum for the rule family.
    InvalidOrder { family: RuleFamily, order: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRule { family, shape } => {
                write!(f, "the {family} family is not available for the reference {shape}")
            }
            Self::UnsupportedShape { shape, dim } => {
                write!(f, "the reference {shape} is not available in dimension {dim}")
            }
            Self::UnsupportedOrder { dim, order } => {
                write!(
                    f,
                    "no rule of order {order} is tabulated for the dimension-{dim} simplex"
                )
            }
            Self::InvalidOrder { family, order } => {
                let minimum = match family {
                    RuleFamily::Legendre => 1,
                    RuleFamily::Lobatto => 2,
                };
                write!(
                    f,
                    "a {family} rule requires order at least {minimum}, but order {order} was requested"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Approximate the integral of `f` over the rule's reference domain.
pub fn integrate<const D: usize, F>(rule: &Rule<D>, f: F) -> f64
where
    F: Fn(&Point<D>) -> f64,
{
    let (weights, points) = rule;
    weights.iter().zip(points).map(|(w, p)| w * f(p)).sum()
}

/// An immutable quadrature rule over a reference domain.
///
/// Owns its weights and points outright; `weights()[i]` is the weight of
/// `points()[i]`. A rule is fully constructed by [`QuadratureRule::gauss`] or
/// [`QuadratureRule::with_family`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<const D: usize> {
    weights: Vec<f64>,
    points: Vec<Point<D>>,
}

/// A one-dimensional quadrature rule.
pub type QuadratureRule1d = QuadratureRule<1>;

/// A two-dimensional quadrature rule.
pub type QuadratureRule2d = QuadratureRule<2>;

/// A three-dimensional quadrature rule.
pub type QuadratureRule3d = QuadratureRule<3>;

impl<const D: usize> QuadratureRule<D> {
    /// A Gauss-Legendre rule for the given shape and order.
    ///
    /// For the hypercube, `order` is the number of points per axis and the
    /// rule has `order^D` points; for the simplices it is the total
    /// polynomial degree the tabulated rule integrates exactly.
    pub fn gauss(shape: ReferenceShape, order: usize) -> Result<Self, Error> {
        Self::with_family(RuleFamily::Legendre, shape, order)
    }

    /// A rule of the given family for the given shape and order.
    ///
    /// The Lobatto family is only defined for hypercube shapes and requires
    /// `order >= 2`; all other invalid combinations are likewise rejected
    /// before any rule data is touched.
    pub fn with_family(family: RuleFamily, shape: ReferenceShape, order: usize) -> Result<Self, Error> {
        match shape {
            ReferenceShape::Hypercube => {
                if !(1..=3).contains(&D) {
                    return Err(Error::UnsupportedShape { shape, dim: D });
                }
            }
            ReferenceShape::Triangle => {
                if D != 2 {
                    return Err(Error::UnsupportedShape { shape, dim: D });
                }
            }
            ReferenceShape::Tetrahedron => {
                if D != 3 {
                    return Err(Error::UnsupportedShape { shape, dim: D });
                }
            }
        }

        if shape != ReferenceShape::Hypercube && family == RuleFamily::Lobatto {
            return Err(Error::UnsupportedRule { family, shape });
        }

        let min_order = match family {
            RuleFamily::Legendre => 1,
            RuleFamily::Lobatto => 2,
        };
        if order < min_order {
            return Err(Error::InvalidOrder { family, order });
        }

        let (weights, points) = match shape {
            ReferenceShape::Hypercube => {
                let (weights1d, points1d) = match family {
                    RuleFamily::Legendre => univariate::gauss(order),
                    RuleFamily::Lobatto => univariate::try_gauss_lobatto(order)
                        .ok_or(Error::InvalidOrder { family, order })?,
                };
                tensor::tensor_product::<D>(&weights1d, &points1d)
            }
            ReferenceShape::Triangle => {
                let (weights, points) = simplex::triangle(order)?;
                (weights, convert_points(points))
            }
            ReferenceShape::Tetrahedron => {
                let (weights, points) = simplex::tetrahedron(order)?;
                (weights, convert_points(points))
            }
        };

        Ok(Self { weights, points })
    }

    /// Assemble a rule from existing weights and points.
    ///
    /// # Panics
    ///
    /// Panics if the weights and points differ in length or are empty.
    pub fn from_parts(weights: Vec<f64>, points: Vec<Point<D>>) -> Self {
        assert_eq!(weights.len(), points.len(), "weights and points must have equal length");
        assert!(!weights.is_empty(), "a quadrature rule must have at least one point");
        Self { weights, points }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.weights.len()
    }

    /// Iterate over paired (weight, point) entries in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (&f64, &Point<D>)> {
        self.weights.iter().zip(&self.points)
    }

    /// Approximate the integral of `f` over the rule's reference domain.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(&Point<D>) -> f64,
    {
        self.iter().map(|(w, p)| w * f(p)).sum()
    }
}

// Re-dimension points after a shape/dimension check has already established
// that A == D.
fn convert_points<const A: usize, const D: usize>(points: Vec<Point<A>>) -> Vec<Point<D>> {
    points
        .into_iter()
        .map(|point| {
            let mut converted = [0.0; D];
            converted.copy_from_slice(&point);
            converted
        })
        .collect()
}
