use std::str::FromStr;

use crate::error::{Error, Result};
use crate::polynomial::Polynomial;

/// Reads a polynomial from text in one of three shapes:
///
/// * a coefficient list, lowest power first: `[-2, 0, 1]`
/// * a JSON object: `{"degree": 2, "coefficients": [-2, 0, 1]}`
/// * a RON struct: `(degree: 2, coefficients: [-2, 0, 1])`
///
/// The shape is picked from the first non-blank character.
impl FromStr for Polynomial {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        match input.chars().next() {
            Some('[') => {
                let coefficients = ron::from_str::<Vec<f64>>(input)
                    .map_err(|e| Error::Parse(format!("coefficient list: {e}")))?;
                Self::from_coefficients(coefficients)
            }
            Some('{') => {
                serde_json::from_str(input).map_err(|e| Error::Parse(format!("JSON: {e}")))
            }
            Some('(') => ron::from_str(input).map_err(|e| Error::Parse(format!("RON: {e}"))),
            Some(c) => Err(Error::Parse(format!("unexpected '{c}' at start of input"))),
            None => Err(Error::Parse("empty input".to_owned())),
        }
    }
}
