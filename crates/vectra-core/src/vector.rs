//! Variable-dimension vectors with 2D and 3D geometry helpers
//!
//! A [`Vector`] holds one or more `f64` components. The component count is
//! fixed once the vector is built. Everything that produces a new direction or
//! magnitude returns a fresh vector; only the `set_*` methods, `components_mut`
//! and `IndexMut` write into the receiver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul, Neg};

use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::{Point, Result, VectorReport, VectorSource, VectraError};

/// An ordered, non-empty tuple of real numbers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Create a vector from one or more components.
    ///
    /// Fails with [`VectraError::InvalidArgument`] when `components` is empty.
    pub fn new(components: impl Into<Vec<f64>>) -> Result<Self> {
        let components = components.into();
        if components.is_empty() {
            return Err(VectraError::InvalidArgument(
                "vector was given no components".into(),
            ));
        }
        Ok(Self { components })
    }

    /// Create a 2D vector
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            components: vec![x, y],
        }
    }

    /// Create a 3D vector
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            components: vec![x, y, z],
        }
    }

    /// Build a vector from a point record.
    ///
    /// The result is 3D only when `z` is present and non-zero (a NaN `z`
    /// also counts as absent); a zero `z` yields a 2D vector.
    pub fn from_point(point: &Point) -> Self {
        match point.z {
            Some(z) if z != 0.0 && !z.is_nan() => Self::xyz(point.x, point.y, z),
            _ => Self::xy(point.x, point.y),
        }
    }

    /// Unit 2D vector `(cos θ, sin θ)` for an angle given in degrees
    pub fn from_angle(degrees: f64) -> Self {
        let radians = degrees_to_radians(degrees);
        Self::xy(radians.cos(), radians.sin())
    }

    /// Independent copy of `other`
    pub fn from_vector(other: &Vector) -> Self {
        Self {
            components: other.components.clone(),
        }
    }

    /// Build a vector from any of the accepted input shapes
    pub fn from_source(source: impl Into<VectorSource>) -> Self {
        match source.into() {
            VectorSource::Vector(v) => Self::from_vector(&v),
            VectorSource::Angle(degrees) => Self::from_angle(degrees),
            VectorSource::Point(p) => Self::from_point(&p),
        }
    }

    /// Number of components
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Mutable access to the components. The slice cannot change the
    /// component count.
    pub fn components_mut(&mut self) -> &mut [f64] {
        &mut self.components
    }

    /// Component at a zero-based index
    pub fn component(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn set_x(&mut self, x: f64) {
        self.components[0] = x;
    }

    pub fn y(&self) -> Result<f64> {
        self.component(1)
            .ok_or_else(|| VectraError::DimensionError("vector has no y component".into()))
    }

    pub fn set_y(&mut self, y: f64) -> Result<()> {
        match self.components.get_mut(1) {
            Some(c) => {
                *c = y;
                Ok(())
            }
            None => Err(VectraError::DimensionError(
                "vector has no y component".into(),
            )),
        }
    }

    pub fn z(&self) -> Result<f64> {
        self.component(2)
            .ok_or_else(|| VectraError::DimensionError("vector has no z component".into()))
    }

    pub fn set_z(&mut self, z: f64) -> Result<()> {
        match self.components.get_mut(2) {
            Some(c) => {
                *c = z;
                Ok(())
            }
            None => Err(VectraError::DimensionError(
                "vector has no z component".into(),
            )),
        }
    }

    /// Euclidean magnitude, recomputed on every call
    pub fn length(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        self.map(|c| c * scalar)
    }

    /// Divide every component by `scalar`. Division by zero follows IEEE-754.
    pub fn divide(&self, scalar: f64) -> Vector {
        self.map(|c| c / scalar)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`VectraError::DegenerateVector`] when the length is zero.
    pub fn normalize(&self) -> Result<Vector> {
        let length = self.length();
        if length == 0.0 {
            return Err(VectraError::DegenerateVector);
        }
        Ok(self.divide(length))
    }

    /// Like [`normalize`](Self::normalize), but a zero-length vector comes
    /// back unchanged instead of failing.
    pub fn normalize_or_remain(&self) -> Vector {
        match self.normalize() {
            Ok(unit) => unit,
            Err(_) => {
                log::debug!("normalize_or_remain: {} is degenerate, keeping it", self);
                self.copy()
            }
        }
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.dimension() != other.dimension() {
            return Err(VectraError::DimensionMismatch(format!(
                "vectors must have the same amount of components ({} vs {})",
                self.dimension(),
                other.dimension()
            )));
        }
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Bearing in degrees, in `[0, 360)`, measured from "up" `(0, -1)`.
    ///
    /// The zero vector has no bearing and yields NaN.
    pub fn angle(&self) -> Result<f64> {
        ensure_planar("angle", &[self])?;
        let y = self.y()?;
        let origin = Vector::xy(0.0, -1.0);
        let radian = (self.dot(&origin)? / (self.length() * origin.length())).acos();

        let degrees = if y * origin.x() > self.x() * origin.y()? {
            radians_to_degrees(radian)
        } else {
            360.0 - radians_to_degrees(radian)
        };
        Ok(degrees.rem_euclid(360.0))
    }

    /// Bearing in degrees from `self` to `other`.
    ///
    /// Computed as `atan2(dx, dy)` of `self - other`: zero points along the
    /// screen's "up" and angles grow clockwise.
    pub fn angle_to(&self, other: &Vector) -> Result<f64> {
        ensure_planar("angle_to", &[self, other])?;
        let diff = self.subtract(other)?;
        Ok(radians_to_degrees(diff.x().atan2(diff.y()?)))
    }

    pub fn distance(&self, other: &Vector) -> Result<f64> {
        ensure_planar("distance", &[self, other])?;
        let dx = self.x() - other.x();
        let dy = self.y()? - other.y()?;
        Ok((dx * dx + dy * dy).sqrt())
    }

    /// Whether `other` lies within `radius` of `self` (inclusive)
    pub fn is_near(&self, other: &Vector, radius: f64) -> Result<bool> {
        Ok(other.distance(self)? <= radius)
    }

    /// Rotate counter-clockwise (in a y-up frame) by `radians`
    pub fn rotate(&self, radians: f64) -> Result<Vector> {
        ensure_planar("rotate", &[self])?;
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x(), self.y()?);
        Ok(Vector::xy(cos * x - sin * y, sin * x + cos * y))
    }

    /// Rotate around `anchor` instead of the origin
    pub fn rotate_around_anchor(&self, radians: f64, anchor: &Vector) -> Result<Vector> {
        let direction = self.subtract(anchor)?;
        direction.rotate(radians)?.add(anchor)
    }

    /// `(-y, x)`
    pub fn perpendicular_2d(&self) -> Result<Vector> {
        ensure_planar("perpendicular_2d", &[self])?;
        Ok(Vector::xy(-self.y()?, self.x()))
    }

    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.dimension() != 3 || other.dimension() != 3 {
            return Err(VectraError::DimensionMismatch(format!(
                "cross product can only be calculated for 3D vectors (got {} and {})",
                self.dimension(),
                other.dimension()
            )));
        }
        let (a, b) = (&self.components, &other.components);
        Ok(Vector::xyz(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ))
    }

    /// Mirror `self` through `point`.
    ///
    /// When `self == point` the direction is the zero vector and the result
    /// is `self`.
    pub fn reflect_over_point(&self, point: &Vector) -> Result<Vector> {
        let distance = self.distance(point)?;
        let direction = point.subtract(self)?.normalize_or_remain();
        self.add(&direction.scale(distance * 2.0))
    }

    /// Midpoint between `self` and `other`
    pub fn middle(&self, other: &Vector) -> Result<Vector> {
        Ok(self.add(other)?.divide(2.0))
    }

    /// Project onto a point record.
    ///
    /// Components past the third are dropped.
    pub fn to_point(&self) -> Result<Point> {
        if self.dimension() < 2 {
            return Err(VectraError::DimensionError(
                "not enough components for point".into(),
            ));
        }
        let (x, y) = (self.x(), self.y()?);
        Ok(match self.component(2) {
            Some(z) => Point::with_z(x, y, z),
            None => Point::new(x, y),
        })
    }

    /// Apply `f` to every component
    pub fn map<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector {
            components: self.components.iter().copied().map(f).collect(),
        }
    }

    pub fn copy(&self) -> Vector {
        Self::from_vector(self)
    }

    /// Copy with the `n`th component (1-based) negated
    pub fn flip_component(&self, n: usize) -> Result<Vector> {
        if n < 1 || n > self.dimension() {
            return Err(VectraError::InvalidArgument(format!(
                "vector does not have a component {} (it has {})",
                n,
                self.dimension()
            )));
        }
        let mut flipped = self.copy();
        flipped.components[n - 1] = -flipped.components[n - 1];
        Ok(flipped)
    }

    pub fn flip_x(&self) -> Result<Vector> {
        self.flip_component(1)
    }

    pub fn flip_y(&self) -> Result<Vector> {
        self.flip_component(2)
    }

    pub fn flip_z(&self) -> Result<Vector> {
        self.flip_component(3)
    }

    /// Component count, magnitude and values, for diagnostics
    pub fn report(&self) -> VectorReport {
        VectorReport::new(&self.components, self.length())
    }

    /// Emit [`report`](Self::report) through the `log` facade
    pub fn log(&self) {
        log::info!("vector dump:\n{}", self.report());
    }

    fn ensure_same_dimension(&self, other: &Vector, op: &str) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectraError::DimensionMismatch(format!(
                "cannot {} a {}-component vector and a {}-component vector",
                op,
                self.dimension(),
                other.dimension()
            )));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        Vector {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

fn ensure_planar(op: &str, operands: &[&Vector]) -> Result<()> {
    if let Some(v) = operands.iter().find(|v| v.dimension() > 2) {
        return Err(VectraError::DimensionMismatch(format!(
            "{} only works for two-dimensional vectors (got {} components)",
            op,
            v.dimension()
        )));
    }
    Ok(())
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectraError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        Self::new(components)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.components
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.components[index]
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        self.divide(scalar)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, c)?,
                None => write!(f, "{}", c)?,
            }
        }
        write!(f, ")")
    }
}
