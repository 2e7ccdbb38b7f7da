//! Column bindings and static axis configuration for a dashboard.

use crate::dataset::{Dataset, DatasetError};
use crate::figure::{Axis, AxisType};
use crate::update::{ColumnIndices, DataContext};
use serde::Serialize;
use std::sync::Arc;

/// Gapminder five-year dataset hosted by plotly.
pub const GAPMINDER_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminderDataFiveYear.csv";

/// Local brain weight / head size dataset.
pub const BRAIN_PATH: &str = "brainheadclean.csv";

/// Static configuration of one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
    pub axis_type: Option<AxisType>,
    pub range: Option<[f64; 2]>,
    pub autorange: Option<bool>,
}

impl AxisSpec {
    pub fn new(title: impl Into<String>) -> Self {
        AxisSpec {
            title: title.into(),
            axis_type: None,
            range: None,
            autorange: None,
        }
    }

    pub fn with_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = Some(axis_type);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    pub fn with_autorange(mut self) -> Self {
        self.autorange = Some(true);
        self
    }

    pub(crate) fn to_axis(&self) -> Axis {
        Axis {
            axis_type: self.axis_type,
            title: self.title.clone(),
            range: self.range,
            autorange: self.autorange,
        }
    }
}

/// Which dataset columns feed the chart, and how its axes look.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSpec {
    /// Numeric column plotted on the x axis
    pub x: String,
    /// Numeric column plotted on the y axis
    pub y: String,
    /// Column used for per-point hover labels
    pub label: String,
    /// Categorical column splitting rows into series
    pub group: String,
    /// Numeric column driven by the slider
    pub filter: String,
    pub xaxis: AxisSpec,
    pub yaxis: AxisSpec,
}

impl ViewSpec {
    /// GDP per capita vs. life expectancy by continent, filtered by year.
    pub fn gapminder() -> Self {
        ViewSpec {
            x: "gdpPercap".to_string(),
            y: "lifeExp".to_string(),
            label: "country".to_string(),
            group: "continent".to_string(),
            filter: "year".to_string(),
            xaxis: AxisSpec::new("GDP Per Capita").with_type(AxisType::Log),
            yaxis: AxisSpec::new("Life Expectancy").with_range(20.0, 90.0),
        }
    }

    /// Head size vs. brain weight by gender, filtered by age group.
    pub fn brain() -> Self {
        ViewSpec {
            x: "headsize".to_string(),
            y: "brainwgt".to_string(),
            label: "gender".to_string(),
            group: "gender".to_string(),
            filter: "age".to_string(),
            xaxis: AxisSpec::new("Head Size")
                .with_type(AxisType::Linear)
                .with_autorange(),
            yaxis: AxisSpec::new("Brain Weight").with_autorange(),
        }
    }

    /// Validates the bindings against the dataset schema.
    ///
    /// Every referenced column must exist; x, y and filter columns must be
    /// numeric.
    ///
    /// # Errors
    /// Returns the first `MissingColumn` or `NotNumeric` violation found.
    pub fn bind(self, dataset: Arc<Dataset>) -> Result<DataContext, DatasetError> {
        dataset.numeric_column(&self.x)?;
        dataset.numeric_column(&self.y)?;
        dataset.numeric_column(&self.filter)?;

        let indices = ColumnIndices {
            x: dataset.column_index(&self.x)?,
            y: dataset.column_index(&self.y)?,
            label: dataset.column_index(&self.label)?,
            group: dataset.column_index(&self.group)?,
            filter: dataset.column_index(&self.filter)?,
        };

        tracing::debug!(
            x = %self.x,
            y = %self.y,
            group = %self.group,
            filter = %self.filter,
            rows = dataset.row_count(),
            "bound view to dataset"
        );

        Ok(DataContext::new(dataset, self, indices))
    }
}
