//! Result formatting

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use vectra_core::{Point, Vector, VectorReport, VectraError};

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = VectraError;

    fn from_str(s: &str) -> vectra_core::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(VectraError::InvalidArgument(format!(
                "unknown output format '{}'; valid values: text, json, toml",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Vector(Vector),
    Scalar { name: &'static str, value: f64 },
    Flag { name: &'static str, value: bool },
    Point(Point),
    Report(VectorReport),
}

impl Output {
    fn key(&self) -> &'static str {
        match self {
            Output::Vector(_) => "vector",
            Output::Scalar { name, .. } | Output::Flag { name, .. } => *name,
            Output::Point(_) => "point",
            Output::Report(_) => "report",
        }
    }
}

/// Render an output in the requested format
pub fn render(output: &Output, format: OutputFormat, precision: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(output, precision)),
        OutputFormat::Json | OutputFormat::Toml => {
            let output = match precision {
                Some(p) => round_output(output, p),
                None => output.clone(),
            };
            if format == OutputFormat::Json {
                return wrap(output.key(), &json_value(&output), format);
            }
            match &output {
                Output::Vector(v) => wrap(output.key(), v, format),
                Output::Scalar { value, .. } => wrap(output.key(), value, format),
                Output::Flag { value, .. } => wrap(output.key(), value, format),
                Output::Point(p) => wrap(output.key(), p, format),
                Output::Report(r) => wrap(output.key(), r, format),
            }
        }
    }
}

fn format_text(output: &Output, precision: Option<usize>) -> String {
    match output {
        Output::Vector(v) => match precision {
            Some(p) => format!("{:.*}", p, v),
            None => v.to_string(),
        },
        Output::Scalar { value, .. } => format_number(*value, precision),
        Output::Flag { value, .. } => value.to_string(),
        Output::Point(p) => {
            let mut text = format!(
                "{{x: {}, y: {}",
                format_number(p.x, precision),
                format_number(p.y, precision)
            );
            if let Some(z) = p.z {
                text.push_str(&format!(", z: {}", format_number(z, precision)));
            }
            text.push('}');
            text
        }
        Output::Report(r) => match precision {
            Some(p) => format!("{:.*}", p, r).trim_end().to_string(),
            None => r.to_string().trim_end().to_string(),
        },
    }
}

fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// JSON has no literal for infinities or NaN; they are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"`, which `f64::from_str` accepts.
fn json_number(value: f64) -> Value {
    if value.is_nan() {
        Value::from("NaN")
    } else if value.is_infinite() {
        Value::from(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        Value::from(value)
    }
}

fn json_value(output: &Output) -> Value {
    match output {
        Output::Vector(v) => v.components().iter().copied().map(json_number).collect(),
        Output::Scalar { value, .. } => json_number(*value),
        Output::Flag { value, .. } => Value::from(*value),
        Output::Point(p) => {
            let mut obj = Map::new();
            obj.insert("x".into(), json_number(p.x));
            obj.insert("y".into(), json_number(p.y));
            if let Some(z) = p.z {
                obj.insert("z".into(), json_number(z));
            }
            Value::Object(obj)
        }
        Output::Report(r) => json!({
            "components": r.components,
            "length": json_number(r.length),
            "values": r
                .values
                .iter()
                .map(|entry| json!({ "label": entry.label, "value": json_number(entry.value) }))
                .collect::<Vec<_>>(),
        }),
    }
}

fn round_output(output: &Output, precision: usize) -> Output {
    let round = |v: f64| round_to(v, precision);
    match output {
        Output::Vector(v) => Output::Vector(v.map(round)),
        Output::Scalar { name, value } => Output::Scalar {
            name: *name,
            value: round(*value),
        },
        Output::Flag { .. } => output.clone(),
        Output::Point(p) => Output::Point(Point {
            x: round(p.x),
            y: round(p.y),
            z: p.z.map(round),
        }),
        Output::Report(r) => {
            let mut r = r.clone();
            r.length = round(r.length);
            for entry in &mut r.values {
                entry.value = round(entry.value);
            }
            Output::Report(r)
        }
    }
}

fn wrap<T: Serialize>(key: &str, value: &T, format: OutputFormat) -> Result<String> {
    let mut wrapper = BTreeMap::new();
    wrapper.insert(key, value);
    let text = match format {
        OutputFormat::Toml => toml::to_string_pretty(&wrapper)?,
        _ => serde_json::to_string_pretty(&wrapper)?,
    };
    Ok(text.trim_end().to_string())
}
