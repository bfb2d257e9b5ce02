//! Plain point records exchanged with display/position consumers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D or 3D position record `{x, y, z?}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "{{x: {}, y: {}, z: {}}}", self.x, self.y, z),
            None => write!(f, "{{x: {}, y: {}}}", self.x, self.y),
        }
    }
}
