//! Slider derived from the filter column.

use crate::dataset::{format_number, DatasetError};
use crate::update::DataContext;
use serde::Serialize;

/// Slider bounds and stops derived from the filter column.
///
/// `step` is always `None`: the handle only rests on observed values, which
/// matches the exact-equality filter of the figure callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Initial selection
    pub value: f64,
    pub step: Option<f64>,
    /// Stop label for each distinct value, in first-seen order
    pub marks: Vec<SliderMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl SliderConfig {
    /// # Errors
    /// Returns `DatasetError::Empty` if the filter column has no values.
    pub fn from_context(context: &DataContext) -> Result<Self, DatasetError> {
        let column = context.dataset().numeric_column(&context.view().filter)?;
        let (min, max) = column.numeric_bounds().ok_or(DatasetError::Empty)?;

        let marks = column
            .distinct_values()
            .into_iter()
            .filter_map(|cell| cell.as_f64())
            .map(|value| SliderMark {
                value,
                label: format_number(value),
            })
            .collect();

        Ok(SliderConfig {
            min,
            max,
            value: min,
            step: None,
            marks,
        })
    }

    /// Mark values as a plain list.
    pub fn stops(&self) -> Vec<f64> {
        self.marks.iter().map(|mark| mark.value).collect()
    }
}
