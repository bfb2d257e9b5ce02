//! Degree/radian conversion

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::{Result, VectraError};

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Unit an angle value is expressed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Interpret `value` in this unit and return it in radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees_to_radians(value),
            AngleUnit::Radians => value,
        }
    }

    /// Interpret `value` in this unit and return it in degrees
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => radians_to_degrees(value),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = VectraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            other => Err(VectraError::InvalidArgument(format!(
                "unknown angle unit '{}'; expected degrees or radians",
                other
            ))),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPS);
        assert!((degrees_to_radians(-360.0) + 2.0 * PI).abs() < EPS);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPS);
        assert!((radians_to_degrees(PI / 4.0) - 45.0).abs() < EPS);
    }

    #[test]
    fn test_conversion_inverse() {
        for deg in [-720.0, -45.5, 0.0, 12.25, 359.0, 1e6] {
            let back = radians_to_degrees(degrees_to_radians(deg));
            assert!((back - deg).abs() < 1e-9 * deg.abs().max(1.0));
        }
    }

    #[test]
    fn test_angle_unit() {
        assert!((AngleUnit::Degrees.to_radians(180.0) - PI).abs() < EPS);
        assert_eq!(AngleUnit::Radians.to_radians(1.5), 1.5);
        assert!((AngleUnit::Radians.to_degrees(PI) - 180.0).abs() < EPS);
        assert_eq!(AngleUnit::Degrees.to_degrees(30.0), 30.0);
    }

    #[test]
    fn test_angle_unit_parse() {
        assert_eq!("deg".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!(" Radians ".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert!(matches!(
            "gradians".parse::<AngleUnit>(),
            Err(VectraError::InvalidArgument(_))
        ));
        assert_eq!(AngleUnit::default(), AngleUnit::Degrees);
        assert_eq!(AngleUnit::Radians.to_string(), "radians");
    }
}
