//! CLI command implementations

pub mod combine;
pub mod inspect;
pub mod transform;

use vectra_core::{AngleUnit, Vector};

/// Parse any vector text form: components (`1,2,3` or `[1,2,3]`),
/// a point (`{"x":1,"y":2}`) or an angle in degrees (`45`)
pub fn parse_vector(s: &str) -> Result<Vector, String> {
    s.parse::<Vector>().map_err(|e| e.to_string())
}

pub fn parse_angle_unit(s: &str) -> Result<AngleUnit, String> {
    s.parse::<AngleUnit>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("-1,2").unwrap(), Vector::xy(-1.0, 2.0));
        assert_eq!(parse_vector(r#"{"x":1,"y":2,"z":3}"#).unwrap(), Vector::xyz(1.0, 2.0, 3.0));
        let err = parse_vector("north").unwrap_err();
        assert!(err.contains("Could not create Vector"));
    }

    #[test]
    fn test_parse_angle_unit() {
        assert_eq!(parse_angle_unit("rad").unwrap(), AngleUnit::Radians);
        assert!(parse_angle_unit("turns").is_err());
    }
}
