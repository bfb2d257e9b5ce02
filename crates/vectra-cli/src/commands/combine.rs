//! Two-vector commands

use anyhow::{Context, Result};
use clap::Subcommand;
use vectra_core::Vector;

use super::parse_vector;
use crate::output::Output;

#[derive(Subcommand)]
pub enum CombineCommands {
    /// Component-wise sum
    Add {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Component-wise difference a - b
    Sub {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Dot product
    Dot {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Cross product, 3D only
    Cross {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Midpoint between two vectors
    Middle {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Euclidean distance, 2D only
    Distance {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
    },

    /// Bearing in degrees from one vector to another, 2D only
    AngleTo {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        from: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        to: Vector,
    },

    /// Whether two vectors lie within a radius of each other, 2D only
    Near {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector,
        /// Inclusive radius
        #[arg(allow_hyphen_values = true)]
        radius: f64,
    },

    /// Mirror a vector through a point, 2D only
    Reflect {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
        /// Point to reflect through
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        point: Vector,
    },
}

pub fn run(cmd: CombineCommands) -> Result<Output> {
    let output = match cmd {
        CombineCommands::Add { a, b } => Output::Vector(
            a.add(&b)
                .with_context(|| format!("Failed to add {} and {}", a, b))?,
        ),
        CombineCommands::Sub { a, b } => Output::Vector(
            a.subtract(&b)
                .with_context(|| format!("Failed to subtract {} from {}", b, a))?,
        ),
        CombineCommands::Dot { a, b } => Output::Scalar {
            name: "dot",
            value: a.dot(&b).context("Failed to compute dot product")?,
        },
        CombineCommands::Cross { a, b } => Output::Vector(
            a.cross(&b).context("Failed to compute cross product")?,
        ),
        CombineCommands::Middle { a, b } => {
            Output::Vector(a.middle(&b).context("Failed to compute midpoint")?)
        }
        CombineCommands::Distance { a, b } => Output::Scalar {
            name: "distance",
            value: a.distance(&b).context("Failed to compute distance")?,
        },
        CombineCommands::AngleTo { from, to } => Output::Scalar {
            name: "angle",
            value: from.angle_to(&to).context("Failed to compute bearing")?,
        },
        CombineCommands::Near { a, b, radius } => Output::Flag {
            name: "near",
            value: a.is_near(&b, radius).context("Failed to compare distance")?,
        },
        CombineCommands::Reflect { vector, point } => Output::Vector(
            vector
                .reflect_over_point(&point)
                .context("Failed to reflect over point")?,
        ),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectra_core::VectraError;

    #[test]
    fn test_add() {
        let out = run(CombineCommands::Add {
            a: Vector::xy(1.0, 2.0),
            b: Vector::xy(3.0, 4.0),
        })
        .unwrap();
        assert_eq!(out, Output::Vector(Vector::xy(4.0, 6.0)));
    }

    #[test]
    fn test_add_mismatch() {
        let err = run(CombineCommands::Add {
            a: Vector::xy(1.0, 2.0),
            b: Vector::xyz(3.0, 4.0, 5.0),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Failed to add"));
        assert!(matches!(
            err.downcast_ref::<VectraError>(),
            Some(VectraError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_cross() {
        let out = run(CombineCommands::Cross {
            a: Vector::xyz(1.0, 0.0, 0.0),
            b: Vector::xyz(0.0, 1.0, 0.0),
        })
        .unwrap();
        assert_eq!(out, Output::Vector(Vector::xyz(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_distance_and_near() {
        let out = run(CombineCommands::Distance {
            a: Vector::xy(0.0, 0.0),
            b: Vector::xy(3.0, 4.0),
        })
        .unwrap();
        assert_eq!(
            out,
            Output::Scalar {
                name: "distance",
                value: 5.0
            }
        );

        let out = run(CombineCommands::Near {
            a: Vector::xy(0.0, 0.0),
            b: Vector::xy(3.0, 4.0),
            radius: 4.0,
        })
        .unwrap();
        assert_eq!(
            out,
            Output::Flag {
                name: "near",
                value: false
            }
        );
    }

    #[test]
    fn test_middle() {
        let out = run(CombineCommands::Middle {
            a: Vector::xy(0.0, 0.0),
            b: Vector::xy(4.0, 4.0),
        })
        .unwrap();
        assert_eq!(out, Output::Vector(Vector::xy(2.0, 2.0)));
    }
}
