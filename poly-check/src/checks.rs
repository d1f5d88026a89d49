use poly::{Matrix, Polynomial};

const LAB_DEGREE: usize = 7;
const LAB_COEFFICIENTS: [f64; 8] = [-0.2, -3.0, 0.0, 17.0, -4.0, 0.0, 0.0, 5.0];
const EXPECTED_DERIVATIVE: [f64; 7] = [-3.0, 0.0, 51.0, -16.0, 0.0, 0.0, 35.0];
const EXPECTED_ZERO: f64 = 0.4721155;
const BRACKET: (f64, f64) = (0.4, 0.6);

#[derive(Debug, Clone, serde::Serialize)]
pub struct PolynomialReport {
    pub polynomial: String,
    pub derivative: String,
    pub root: poly::Root,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MatrixReport {
    pub rows: usize,
    pub columns: usize,
    pub rendered: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    pub polynomial: PolynomialReport,
    pub matrix: MatrixReport,
}

pub fn check_polynomial(epsilon: f64, max_iterations: usize) -> Result<PolynomialReport, String> {
    let polynomial =
        Polynomial::new(LAB_DEGREE, LAB_COEFFICIENTS.to_vec()).map_err(|e| e.to_string())?;
    let derivative = polynomial.derivative();

    if derivative.degree() != LAB_DEGREE - 1 {
        return Err(format!(
            "Derivative has degree {}, expected {}",
            derivative.degree(),
            LAB_DEGREE - 1
        ));
    }
    if derivative.coefficients() != &EXPECTED_DERIVATIVE[..] {
        return Err(format!(
            "Derivative has coefficients {:?}, expected {:?}",
            derivative.coefficients(),
            EXPECTED_DERIVATIVE
        ));
    }

    let root = poly::find_root_report(&polynomial, BRACKET.0, BRACKET.1, epsilon, max_iterations)
        .map_err(|e| e.to_string())?;
    if (root.x - EXPECTED_ZERO).abs() >= epsilon {
        return Err(format!("Found root {}, expected {EXPECTED_ZERO}", root.x));
    }

    Ok(PolynomialReport {
        polynomial: polynomial.to_string(),
        derivative: derivative.to_string(),
        root,
    })
}

pub fn check_matrix() -> Result<MatrixReport, String> {
    let matrix: Matrix = Matrix::new(3, 4);
    if matrix.rows() != 3 || matrix.columns() != 4 {
        return Err(format!(
            "Matrix is {}x{}, expected 3x4",
            matrix.rows(),
            matrix.columns()
        ));
    }
    Ok(MatrixReport {
        rows: matrix.rows(),
        columns: matrix.columns(),
        rendered: matrix.to_string(),
    })
}
