//! Shapes exposing an area computation.
//!
//! Callers work with `&dyn Shape`; a new figure only needs a `Shape` impl.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEMO_SQUARE_SIDE, DEMO_TRIANGLE};

/// Capability shared by every geometric figure.
pub trait Shape {
    /// Area of the figure. Dimensions are not validated.
    fn area(&self) -> f64;

    /// Lowercase name used in reports.
    fn name(&self) -> &'static str;
}

/// Error raised when a shape cannot be read from command-line text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeParseError {
    /// A dimension is not a number.
    #[error("invalid dimension {0:?}")]
    Dimension(String),

    /// The text does not have the expected number of dimensions.
    #[error("expected {expected}, got {input:?}")]
    Format {
        expected: &'static str,
        input: String,
    },
}

fn parse_dimension(s: &str) -> Result<f64, ShapeParseError> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|_| ShapeParseError::Dimension(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub side_length: f64,
}

impl Square {
    #[must_use]
    pub fn new(side_length: f64) -> Self {
        Self { side_length }
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

impl FromStr for Square {
    type Err = ShapeParseError;

    /// Parse `SIDE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimension(s).map(Self::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    #[must_use]
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}

impl FromStr for Triangle {
    type Err = ShapeParseError;

    /// Parse `BASExHEIGHT` or `BASE,HEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((base, height)) = s.split_once(['x', 'X', ',']) else {
            return Err(ShapeParseError::Format {
                expected: "BASExHEIGHT",
                input: s.to_string(),
            });
        };
        Ok(Self::new(parse_dimension(base)?, parse_dimension(height)?))
    }
}

/// The figures printed when no shapes are requested.
#[must_use]
pub fn demo_shapes() -> Vec<Box<dyn Shape>> {
    let (base, height) = DEMO_TRIANGLE;
    vec![
        Box::new(Square::new(DEMO_SQUARE_SIDE)),
        Box::new(Triangle::new(base, height)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_area() {
        assert_eq!(Square::new(10.0).area(), 100.0);
        assert_eq!(Square::new(1.5).area(), 2.25);
    }

    #[test]
    fn triangle_area() {
        assert_eq!(Triangle::new(10.0, 11.0).area(), 55.0);
        assert_eq!(Triangle::new(3.0, 5.0).area(), 7.5);
    }

    #[test]
    fn dispatch_through_trait_object() {
        let shapes = demo_shapes();
        let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
        assert_eq!(areas, [100.0, 55.0]);
        let names: Vec<&str> = shapes.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["square", "triangle"]);
    }

    #[test]
    fn negative_dimensions_are_not_rejected() {
        assert_eq!(Square::new(-2.0).area(), 4.0);
        assert_eq!(Triangle::new(-2.0, 4.0).area(), -4.0);
    }

    #[test]
    fn parse_square() {
        assert_eq!("10".parse::<Square>().unwrap(), Square::new(10.0));
        assert_eq!(" 2.5 ".parse::<Square>().unwrap(), Square::new(2.5));
        assert!(matches!(
            "ten".parse::<Square>(),
            Err(ShapeParseError::Dimension(_))
        ));
    }

    #[test]
    fn parse_triangle() {
        assert_eq!(
            "10x11".parse::<Triangle>().unwrap(),
            Triangle::new(10.0, 11.0)
        );
        assert_eq!(
            "3,4.5".parse::<Triangle>().unwrap(),
            Triangle::new(3.0, 4.5)
        );
    }

    #[test]
    fn parse_triangle_errors() {
        assert!(matches!(
            "10".parse::<Triangle>(),
            Err(ShapeParseError::Format { .. })
        ));
        assert!(matches!(
            "10xfoo".parse::<Triangle>(),
            Err(ShapeParseError::Dimension(ref d)) if d == "foo"
        ));
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_string(&Triangle::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"base":1.0,"height":2.0}"#);
        let square: Square = serde_json::from_str(r#"{"side_length":3.0}"#).unwrap();
        assert_eq!(square, Square::new(3.0));
    }
}
