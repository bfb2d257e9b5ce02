//! Single-vector commands

use anyhow::{Context, Result};
use clap::Subcommand;
use vectra_core::Vector;

use super::parse_vector;
use crate::output::Output;

#[derive(Subcommand)]
pub enum InspectCommands {
    /// Dump component count, magnitude and every component
    Info {
        /// Vector (e.g. "1,2,3", "[1,2]", '{"x":1,"y":2}' or an angle in degrees)
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,

        /// Also emit the dump through the logger
        #[arg(long)]
        log: bool,
    },

    /// Euclidean magnitude
    Length {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Unit vector in the same direction
    Normalize {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,

        /// Return a zero-length vector unchanged instead of failing
        #[arg(long)]
        or_remain: bool,
    },

    /// Bearing in degrees measured from "up" (0,-1), 2D only
    Angle {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Perpendicular (-y, x), 2D only
    Perpendicular {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Negate one component (1-based)
    Flip {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,

        /// Component number, starting at 1
        component: usize,
    },

    /// Project onto an {x, y, z?} point
    ToPoint {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },
}

pub fn run(cmd: InspectCommands) -> Result<Output> {
    match cmd {
        InspectCommands::Info { vector, log } => {
            if log {
                vector.log();
            }
            Ok(Output::Report(vector.report()))
        }
        InspectCommands::Length { vector } => Ok(Output::Scalar {
            name: "length",
            value: vector.length(),
        }),
        InspectCommands::Normalize { vector, or_remain } => {
            let unit = if or_remain {
                vector.normalize_or_remain()
            } else {
                vector
                    .normalize()
                    .with_context(|| format!("Failed to normalize {}", vector))?
            };
            Ok(Output::Vector(unit))
        }
        InspectCommands::Angle { vector } => {
            let angle = vector.angle().context("Failed to compute angle")?;
            Ok(Output::Scalar {
                name: "angle",
                value: angle,
            })
        }
        InspectCommands::Perpendicular { vector } => Ok(Output::Vector(
            vector
                .perpendicular_2d()
                .context("Failed to compute perpendicular")?,
        )),
        InspectCommands::Flip { vector, component } => Ok(Output::Vector(
            vector
                .flip_component(component)
                .context("Failed to flip component")?,
        )),
        InspectCommands::ToPoint { vector } => Ok(Output::Point(
            vector.to_point().context("Failed to convert to point")?,
        )),
    }
}
