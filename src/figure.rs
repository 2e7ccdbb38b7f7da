//! Chart description consumed by the browser renderer.
//!
//! The types serialize to the figure JSON shape plotly.js expects:
//! `{"data": [trace, ...], "layout": {...}}`.

use crate::dataset::Cell;
use serde::Serialize;

/// Complete chart description: series plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

impl Figure {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|trace| trace.x.len()).sum()
    }

    /// Series names in display order.
    pub fn series_names(&self) -> Vec<&str> {
        self.data.iter().map(|trace| trace.name.as_str()).collect()
    }
}

/// How points of a series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Markers,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    /// Hover labels, one per point
    pub text: Vec<Cell>,
    pub mode: TraceMode,
    pub opacity: f64,
    pub marker: Marker,
}

impl ScatterTrace {
    /// Creates an unconnected marker series with the dashboard's fixed styling.
    pub fn markers(name: impl Into<String>) -> Self {
        ScatterTrace {
            trace_type: "scatter",
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            text: Vec::new(),
            mode: TraceMode::Markers,
            opacity: 0.7,
            marker: Marker::default(),
        }
    }

    pub fn push(&mut self, x: Option<f64>, y: Option<f64>, label: Cell) {
        self.x.push(x);
        self.y.push(y);
        self.text.push(label);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub line: MarkerLine,
}

impl Default for Marker {
    fn default() -> Self {
        Marker {
            size: 15.0,
            line: MarkerLine {
                width: 0.5,
                color: "white".to_string(),
            },
        }
    }
}

/// Marker outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

/// Axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub b: u32,
    pub t: u32,
    pub r: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin { l: 40, b: 40, t: 10, r: 10 }
    }
}

/// Legend anchor in normalized plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
}

impl Default for Legend {
    fn default() -> Self {
        Legend { x: 0.0, y: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// Hover label for the single nearest point
    Closest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
    pub legend: Legend,
    pub hovermode: HoverMode,
}

impl Layout {
    /// Layout with the dashboard's fixed margin, legend and hover settings.
    pub fn new(xaxis: Axis, yaxis: Axis) -> Self {
        Layout {
            xaxis,
            yaxis,
            margin: Margin::default(),
            legend: Legend::default(),
            hovermode: HoverMode::Closest,
        }
    }
}
