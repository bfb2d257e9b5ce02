//! Scaling, rotation and angle commands

use anyhow::{Context, Result};
use clap::Subcommand;
use vectra_core::{angle, AngleUnit, Vector};

use super::{parse_angle_unit, parse_vector};
use crate::config::VectraConfig;
use crate::output::Output;

#[derive(Subcommand)]
pub enum TransformCommands {
    /// Multiply every component by a factor
    Scale {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
        #[arg(allow_hyphen_values = true)]
        factor: f64,
    },

    /// Divide every component by a divisor
    Divide {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
        #[arg(allow_hyphen_values = true)]
        divisor: f64,
    },

    /// Rotate a 2D vector, optionally around an anchor point
    Rotate {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,

        /// Rotation angle
        #[arg(allow_hyphen_values = true)]
        angle: f64,

        /// Point to rotate around (defaults to the origin)
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        anchor: Option<Vector>,

        /// Unit of the angle (defaults to the configured unit)
        #[arg(long, value_parser = parse_angle_unit)]
        unit: Option<AngleUnit>,
    },

    /// Unit 2D vector pointing at an angle given in degrees
    FromAngle {
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },

    /// Convert an angle between degrees and radians
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Unit the value is given in; the result is in the other unit
        #[arg(long, value_parser = parse_angle_unit, default_value = "degrees")]
        from: AngleUnit,
    },
}

pub fn run(cmd: TransformCommands, config: &VectraConfig) -> Result<Output> {
    let output = match cmd {
        TransformCommands::Scale { vector, factor } => Output::Vector(vector.scale(factor)),
        TransformCommands::Divide { vector, divisor } => Output::Vector(vector.divide(divisor)),
        TransformCommands::Rotate {
            vector,
            angle,
            anchor,
            unit,
        } => {
            let radians = unit.unwrap_or(config.angle_unit).to_radians(angle);
            let rotated = match anchor {
                Some(anchor) => vector
                    .rotate_around_anchor(radians, &anchor)
                    .with_context(|| format!("Failed to rotate {} around {}", vector, anchor))?,
                None => vector
                    .rotate(radians)
                    .with_context(|| format!("Failed to rotate {}", vector))?,
            };
            Output::Vector(rotated)
        }
        TransformCommands::FromAngle { degrees } => Output::Vector(Vector::from_angle(degrees)),
        TransformCommands::Convert { value, from } => match from {
            AngleUnit::Degrees => Output::Scalar {
                name: "radians",
                value: angle::degrees_to_radians(value),
            },
            AngleUnit::Radians => Output::Scalar {
                name: "degrees",
                value: angle::radians_to_degrees(value),
            },
        },
    };
    Ok(output)
}
