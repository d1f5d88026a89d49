use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Degree {degree} does not match {len} coefficients")]
    DegreeMismatch { degree: usize, len: usize },

    #[error("A polynomial needs at least one coefficient")]
    EmptyCoefficients,

    #[error("Could not parse polynomial: {0}")]
    Parse(String),

    #[error("Tolerance must be finite and non-negative, got {epsilon}")]
    InvalidTolerance { epsilon: f64 },

    /// Newton's method ran out of iterations before `|p(x)| <= epsilon`.
    #[error("Newton's method did not converge after {iterations} iterations (x = {x}, |p(x)| = {residual})")]
    NoConvergence {
        iterations: usize,
        x: f64,
        residual: f64,
    },

    /// The derivative vanished at `x`, so the Newton step is undefined.
    #[error("Derivative is zero at x = {x} (iteration {iteration})")]
    ZeroDerivative { iteration: usize, x: f64 },

    #[error("Newton iterate is no longer finite at iteration {iteration} (x = {x})")]
    NonFinite { iteration: usize, x: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
