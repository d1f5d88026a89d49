use crate::error::{Error, Result};

/// A real polynomial in one variable, stored as `coefficients[i]` for `x^i`.
///
/// The coefficient list always has `degree + 1` entries. A leading zero
/// coefficient is allowed, so the degree is the one the polynomial was built
/// with rather than the highest non-zero power.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPolynomial")]
pub struct Polynomial {
    degree: usize,
    coefficients: Vec<f64>,
}

#[derive(serde::Deserialize)]
struct RawPolynomial {
    degree: usize,
    coefficients: Vec<f64>,
}

impl TryFrom<RawPolynomial> for Polynomial {
    type Error = Error;

    fn try_from(raw: RawPolynomial) -> Result<Self> {
        Self::new(raw.degree, raw.coefficients)
    }
}

impl Polynomial {
    pub fn new(degree: usize, coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.len().checked_sub(1) != Some(degree) {
            return Err(Error::DegreeMismatch {
                degree,
                len: coefficients.len(),
            });
        }
        Ok(Self {
            degree,
            coefficients,
        })
    }

    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::EmptyCoefficients);
        }
        Ok(Self {
            degree: coefficients.len() - 1,
            coefficients,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The derivative of a constant is the constant zero polynomial.
    pub fn derivative(&self) -> Self {
        if self.degree == 0 {
            return Self {
                degree: 0,
                coefficients: vec![0.0],
            };
        }

        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| i as f64 * c)
            .collect::<Vec<_>>();

        Self {
            degree: self.degree - 1,
            coefficients,
        }
    }

    /// Evaluates the polynomial by accumulating powers of `x` in ascending
    /// order, so results are reproducible term by term.
    pub fn eval(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut term = 1.0;
        for c in self.coefficients.iter() {
            result += c * term;
            term *= x;
        }
        result
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }

            let sign = match (first, c < 0.0) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            first = false;
            write!(f, "{sign}")?;

            let c = c.abs();
            match power {
                0 => write!(f, "{c}")?,
                1 if c == 1.0 => write!(f, "x")?,
                1 => write!(f, "{c}x")?,
                _ if c == 1.0 => write!(f, "x^{power}")?,
                _ => write!(f, "{c}x^{power}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
