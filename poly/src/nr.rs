use crate::error::{Error, Result};
use crate::polynomial::Polynomial;

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Root {
    pub x: f64,
    pub iterations: usize,
    pub residual: f64,
}

/// Newton-Raphson iteration on `polynomial`, starting from `b`.
///
/// The bracket `[a, b]` is accepted for callers that think in terms of an
/// interval, but only `b` seeds the iteration and `_a` is never read.
pub fn find_root(
    polynomial: &Polynomial,
    _a: f64,
    b: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<f64> {
    find_root_report(polynomial, _a, b, epsilon, max_iterations).map(|root| root.x)
}

pub fn find_root_with_default(
    polynomial: &Polynomial,
    _a: f64,
    b: f64,
    epsilon: f64,
) -> Result<f64> {
    find_root(polynomial, _a, b, epsilon, DEFAULT_MAX_ITERATIONS)
}

pub fn find_root_report(
    polynomial: &Polynomial,
    _a: f64,
    b: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<Root> {
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(Error::InvalidTolerance { epsilon });
    }

    let derivative = polynomial.derivative();

    let mut x = b;
    let mut value = polynomial.eval(x);
    let mut iteration = 0;

    if !value.is_finite() {
        return Err(Error::NonFinite { iteration, x });
    }

    while value.abs() > epsilon && iteration < max_iterations {
        let slope = derivative.eval(x);
        if slope == 0.0 {
            log::warn!("Zero derivative at x = {x} after {iteration} iterations");
            return Err(Error::ZeroDerivative { iteration, x });
        }

        x -= value / slope;
        value = polynomial.eval(x);
        iteration += 1;

        if !x.is_finite() || !value.is_finite() {
            log::warn!("Newton iterate diverged at iteration {iteration}");
            return Err(Error::NonFinite { iteration, x });
        }
        log::trace!("[{iteration}] x = {x}, p(x) = {value}");
    }

    if value.abs() > epsilon {
        log::warn!("No convergence after {iteration} iterations (x = {x})");
        return Err(Error::NoConvergence {
            iterations: iteration,
            x,
            residual: value.abs(),
        });
    }

    log::debug!("Converged to {x} in {iteration} iterations");
    Ok(Root {
        x,
        iterations: iteration,
        residual: value.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_polynomial() -> Polynomial {
        Polynomial::new(7, vec![-0.2, -3.0, 0.0, 17.0, -4.0, 0.0, 0.0, 5.0]).unwrap()
    }

    #[test]
    fn finds_root_in_bracket() {
        let epsilon = 0.0001;
        let x = find_root_with_default(&lab_polynomial(), 0.4, 0.6, epsilon).unwrap();
        assert!((x - 0.4721155).abs() < epsilon, "{x}");
        assert!(lab_polynomial().eval(x).abs() <= epsilon);
    }

    #[test]
    fn lower_bracket_is_ignored() {
        let p = lab_polynomial();
        let x1 = find_root(&p, 0.4, 0.6, 0.0001, 1000).unwrap();
        let x2 = find_root(&p, -100.0, 0.6, 0.0001, 1000).unwrap();
        assert_eq!(x1.to_bits(), x2.to_bits());
    }

    #[test]
    fn sqrt_two() {
        // x^2 - 2
        let p = Polynomial::new(2, vec![-2.0, 0.0, 1.0]).unwrap();
        let root = find_root_report(&p, 1.0, 2.0, 1.0e-10, 50).unwrap();
        assert!((root.x - std::f64::consts::SQRT_2).abs() < 1.0e-9);
        assert_eq!(root.iterations, 4);
        assert!(root.residual <= 1.0e-10);
    }

    #[test]
    fn already_converged_start_needs_no_iterations() {
        // x - 3, starting on the root
        let p = Polynomial::new(1, vec![-3.0, 1.0]).unwrap();
        let root = find_root_report(&p, 0.0, 3.0, 1.0e-12, 0).unwrap();
        assert_eq!(root.x, 3.0);
        assert_eq!(root.iterations, 0);
    }

    #[test]
    fn zero_iterations_fail_away_from_root() {
        let p = lab_polynomial();
        assert!(p.eval(0.6).abs() > 0.0001);
        match find_root(&p, 0.4, 0.6, 0.0001, 0) {
            Err(Error::NoConvergence { iterations, x, .. }) => {
                assert_eq!(iterations, 0);
                assert_eq!(x, 0.6);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn no_real_root_does_not_converge() {
        // x^2 + 1
        let p = Polynomial::new(2, vec![1.0, 0.0, 1.0]).unwrap();
        match find_root(&p, 0.0, 2.0, 0.0001, 50) {
            Err(Error::NoConvergence {
                iterations,
                residual,
                ..
            }) => {
                assert_eq!(iterations, 50);
                assert!(residual >= 1.0);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn vanishing_derivative_at_start() {
        // x^2 + 1 has p'(0) = 0
        let p = Polynomial::new(2, vec![1.0, 0.0, 1.0]).unwrap();
        assert_eq!(
            find_root(&p, -1.0, 0.0, 0.0001, 1000),
            Err(Error::ZeroDerivative {
                iteration: 0,
                x: 0.0
            })
        );
    }

    #[test]
    fn vanishing_derivative_after_a_step() {
        // From x = 1 the first step lands exactly on x = 0
        let p = Polynomial::new(2, vec![1.0, 0.0, 1.0]).unwrap();
        assert_eq!(
            find_root(&p, 0.0, 1.0, 0.0001, 1000),
            Err(Error::ZeroDerivative {
                iteration: 1,
                x: 0.0
            })
        );
    }

    #[test]
    fn nonzero_constant_has_zero_derivative() {
        let p = Polynomial::new(0, vec![2.0]).unwrap();
        assert!(matches!(
            find_root(&p, 0.0, 1.0, 0.0001, 1000),
            Err(Error::ZeroDerivative { iteration: 0, .. })
        ));
    }

    #[test]
    fn tolerance_must_be_finite_and_non_negative() {
        // x^2 + 1, p(2) = 5
        let p = Polynomial::new(2, vec![1.0, 0.0, 1.0]).unwrap();
        for epsilon in [f64::NAN, f64::INFINITY, -0.0001] {
            match find_root(&p, 0.0, 2.0, epsilon, 10) {
                Err(Error::InvalidTolerance { .. }) => {}
                other => panic!("unexpected result {other:?} for epsilon {epsilon}"),
            }
        }
    }

    #[test]
    fn zero_tolerance_needs_an_exact_root() {
        // x - 3
        let p = Polynomial::new(1, vec![-3.0, 1.0]).unwrap();
        let root = find_root_report(&p, 0.0, 5.0, 0.0, 10).unwrap();
        assert_eq!(root.x, 3.0);
        assert_eq!(root.residual, 0.0);
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let p = lab_polynomial();
        assert!(matches!(
            find_root(&p, 0.0, f64::NAN, 0.0001, 1000),
            Err(Error::NonFinite { iteration: 0, .. })
        ));
    }
}
