//! The filter-and-render callback.

use crate::dataset::{Cell, Dataset};
use crate::figure::{Figure, Layout, ScatterTrace};
use crate::view::ViewSpec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolved positions of the bound columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndices {
    pub x: usize,
    pub y: usize,
    pub label: usize,
    pub group: usize,
    pub filter: usize,
}

/// Read-only context the callback runs against: the dataset plus a view
/// whose columns have been validated.
///
/// Built by [`ViewSpec::bind`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DataContext {
    dataset: Arc<Dataset>,
    view: Arc<ViewSpec>,
    indices: ColumnIndices,
}

impl DataContext {
    pub(crate) fn new(dataset: Arc<Dataset>, view: ViewSpec, indices: ColumnIndices) -> Self {
        DataContext {
            dataset,
            view: Arc::new(view),
            indices,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &ViewSpec {
        &self.view
    }

    /// Row indices whose filter value equals `selected` exactly.
    pub fn matching_rows(&self, selected: f64) -> Vec<usize> {
        let target = Cell::number(selected);
        self.dataset.columns()[self.indices.filter]
            .values
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == target)
            .map(|(row, _)| row)
            .collect()
    }

    /// Builds the chart for a slider value.
    ///
    /// Rows are selected by exact equality on the filter column, then split
    /// into one marker series per group value in first-seen order. A value
    /// matching no rows yields a figure with axes and no series.
    pub fn update_figure(&self, selected: f64) -> Figure {
        let columns = self.dataset.columns();
        let x = &columns[self.indices.x].values;
        let y = &columns[self.indices.y].values;
        let label = &columns[self.indices.label].values;
        let group = &columns[self.indices.group].values;

        let rows = self.matching_rows(selected);

        let mut traces: Vec<ScatterTrace> = Vec::new();
        let mut slots: HashMap<&Cell, usize> = HashMap::new();

        for row in &rows {
            let key = &group[*row];
            let slot = *slots.entry(key).or_insert_with(|| {
                traces.push(ScatterTrace::markers(key.to_string()));
                traces.len() - 1
            });
            traces[slot].push(x[*row].as_f64(), y[*row].as_f64(), label[*row].clone());
        }

        debug!(
            filter = %self.view.filter,
            selected,
            rows = rows.len(),
            series = traces.len(),
            "update_figure"
        );

        Figure {
            data: traces,
            layout: self.layout(),
        }
    }

    /// Static layout shared by every figure of this view.
    pub fn layout(&self) -> Layout {
        Layout::new(self.view.xaxis.to_axis(), self.view.yaxis.to_axis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(csv: &str) -> DataContext {
        let dataset = Arc::new(Dataset::from_csv_str(csv).unwrap());
        ViewSpec::gapminder().bind(dataset).unwrap()
    }

    const SAMPLE: &str = "\
country,year,continent,gdpPercap,lifeExp
Afghanistan,1952,Asia,779,28.8
Albania,1952,Europe,1601,59.6
Afghanistan,1957,Asia,820,30.3
";

    #[test]
    fn test_worked_example() {
        let ctx = context(SAMPLE);

        let figure = ctx.update_figure(1952.0);
        assert_eq!(figure.series_names(), vec!["Asia", "Europe"]);
        assert_eq!(figure.data[0].len(), 1);
        assert_eq!(figure.data[1].len(), 1);
        assert_eq!(figure.data[1].x, vec![Some(1601.0)]);
        assert_eq!(figure.data[1].y, vec![Some(59.6)]);
        assert_eq!(figure.data[1].text, vec![Cell::text("Albania")]);

        let figure = ctx.update_figure(1957.0);
        assert_eq!(figure.series_names(), vec!["Asia"]);
        assert_eq!(figure.point_count(), 1);

        let figure = ctx.update_figure(1999.0);
        assert!(figure.data.is_empty());
    }

    #[test]
    fn test_empty_selection_keeps_layout() {
        let ctx = context(SAMPLE);
        let figure = ctx.update_figure(2100.0);
        assert!(figure.data.is_empty());
        assert_eq!(figure.layout, ctx.layout());
        assert_eq!(figure.layout.xaxis.title, "GDP Per Capita");
    }

    #[test]
    fn test_exact_match_only() {
        let ctx = context(SAMPLE);
        assert!(ctx.update_figure(1954.5).data.is_empty());
        assert!(ctx.update_figure(1952.000001).data.is_empty());
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let ctx = context(
            "country,year,continent,gdpPercap,lifeExp\n\
             A,2007,Oceania,1,1\n\
             B,2007,Africa,2,2\n\
             C,2007,Oceania,3,3\n\
             D,2007,Americas,4,4\n",
        );
        let figure = ctx.update_figure(2007.0);
        assert_eq!(figure.series_names(), vec!["Oceania", "Africa", "Americas"]);
        assert_eq!(figure.data[0].x, vec![Some(1.0), Some(3.0)]);
    }

    #[test]
    fn test_point_count_matches_rows() {
        let ctx = context(
            "country,year,continent,gdpPercap,lifeExp\n\
             A,1952,Asia,1,1\n\
             B,1952,,2,2\n\
             C,1952,Asia,,3\n",
        );
        let figure = ctx.update_figure(1952.0);
        assert_eq!(figure.point_count(), ctx.matching_rows(1952.0).len());
        assert_eq!(figure.series_names(), vec!["Asia", ""]);
        assert_eq!(figure.data[0].x, vec![Some(1.0), None]);
    }

    #[test]
    fn test_idempotent() {
        let ctx = context(SAMPLE);
        assert_eq!(ctx.update_figure(1952.0), ctx.update_figure(1952.0));
    }

    #[test]
    fn test_marker_styling() {
        let ctx = context(SAMPLE);
        let figure = ctx.update_figure(1952.0);
        let trace = &figure.data[0];
        assert_eq!(trace.opacity, 0.7);
        assert_eq!(trace.marker.size, 15.0);
        assert_eq!(trace.marker.line.width, 0.5);
        assert_eq!(trace.marker.line.color, "white");
    }
}
