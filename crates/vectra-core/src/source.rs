//! Input shapes a [`Vector`] can be built from

use std::str::FromStr;

use crate::{Point, Result, Vector, VectraError};

/// Everything [`Vector::from_source`] accepts
#[derive(Clone, Debug, PartialEq)]
pub enum VectorSource {
    /// Angle in degrees, becomes a unit 2D vector
    Angle(f64),
    /// Point record, becomes a 2D or 3D vector
    Point(Point),
    /// Existing vector, copied
    Vector(Vector),
}

impl From<f64> for VectorSource {
    fn from(degrees: f64) -> Self {
        VectorSource::Angle(degrees)
    }
}

impl From<Point> for VectorSource {
    fn from(point: Point) -> Self {
        VectorSource::Point(point)
    }
}

impl From<Vector> for VectorSource {
    fn from(vector: Vector) -> Self {
        VectorSource::Vector(vector)
    }
}

impl From<&Vector> for VectorSource {
    fn from(vector: &Vector) -> Self {
        VectorSource::Vector(vector.clone())
    }
}

/// Parses the textual forms:
/// - a bare number: an angle in degrees (`45`)
/// - a JSON object with `x` and `y` and optional `z`: a point (`{"x": 1, "y": 2}`)
/// - a JSON array or comma-separated list: components (`[1, 2, 3]`, `1,2,3`)
impl FromStr for VectorSource {
    type Err = VectraError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(degrees) = s.parse::<f64>() {
            return Ok(VectorSource::Angle(degrees));
        }

        if s.starts_with('{') {
            let value: serde_json::Value = serde_json::from_str(s).map_err(|_| could_not_create())?;
            let is_point_like = value
                .as_object()
                .map(|obj| obj.contains_key("x") && obj.contains_key("y"))
                .unwrap_or(false);
            if !is_point_like {
                return Err(could_not_create());
            }
            let point: Point = serde_json::from_value(value).map_err(|e| {
                VectraError::InvalidArgument(format!("Could not create Vector: {}", e))
            })?;
            return Ok(VectorSource::Point(point));
        }

        if s.starts_with('[') {
            let components: Vec<f64> = serde_json::from_str(s).map_err(|_| could_not_create())?;
            return Vector::new(components).map(VectorSource::Vector);
        }

        if s.contains(',') {
            let components = s
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<f64>, _>>()
                .map_err(|_| could_not_create())?;
            return Vector::new(components).map(VectorSource::Vector);
        }

        Err(could_not_create())
    }
}

fn could_not_create() -> VectraError {
    VectraError::InvalidArgument("Could not create Vector".into())
}

impl FromStr for Vector {
    type Err = VectraError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Vector::from_source(s.parse::<VectorSource>()?))
    }
}
