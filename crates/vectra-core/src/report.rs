//! Diagnostic dump of a vector's contents

use serde::Serialize;
use std::fmt;

/// One labelled component value
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: f64,
}

/// Component count, magnitude and every component value of a vector.
///
/// Components are labelled `x`, `y`, `z` for vectors of up to three
/// components and by zero-based index beyond that.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorReport {
    pub components: usize,
    pub length: f64,
    pub values: Vec<ReportEntry>,
}

impl VectorReport {
    pub fn new(components: &[f64], length: f64) -> Self {
        const AXES: [&str; 3] = ["x", "y", "z"];

        let values = components
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let label = if components.len() <= AXES.len() {
                    AXES[i].to_string()
                } else {
                    i.to_string()
                };
                ReportEntry { label, value }
            })
            .collect();

        Self {
            components: components.len(),
            length,
            values,
        }
    }

    /// Look up a value by its label
    pub fn value(&self, label: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
    }
}

impl fmt::Display for VectorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        writeln!(f, "{:<12}{}", "components", self.components)?;
        write_row(f, "length", self.length, precision)?;
        for entry in &self.values {
            write_row(f, &entry.label, entry.value, precision)?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: f64,
    precision: Option<usize>,
) -> fmt::Result {
    match precision {
        Some(p) => writeln!(f, "{:<12}{:.*}", label, p, value),
        None => writeln!(f, "{:<12}{}", label, value),
    }
}
