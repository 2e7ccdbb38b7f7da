//! Dashboard assembly: bound data, slider, layout and the figure callback.

use crate::callbacks::{CallbackError, CallbackRegistry, PropertyRef};
use crate::components::Component;
use crate::dataset::DatasetError;
use crate::figure::Figure;
use crate::slider::SliderConfig;
use crate::update::DataContext;
use serde_json::Value;

/// Id of the chart component every dashboard renders into.
pub const GRAPH_ID: &str = "graph-with-slider";

/// A dashboard: bound data, the slider derived from it, and the callback
/// table wiring the slider to the chart.
#[derive(Debug)]
pub struct DashboardApp {
    pub title: String,
    pub slider_id: String,
    context: DataContext,
    slider: SliderConfig,
    registry: CallbackRegistry,
}

impl DashboardApp {
    /// Assembles the dashboard and registers `<slider_id>.value -> graph-with-slider.figure`.
    ///
    /// # Errors
    /// Returns `AppError::Dataset` if the filter column has no values.
    pub fn new(
        title: impl Into<String>,
        slider_id: impl Into<String>,
        context: DataContext,
    ) -> Result<Self, AppError> {
        let slider_id = slider_id.into();
        let slider = SliderConfig::from_context(&context)?;

        let mut registry = CallbackRegistry::new();
        let handler_context = context.clone();
        registry
            .register(
                Self::figure_output(),
                vec![PropertyRef::new(slider_id.as_str(), "value")],
                Box::new(move |values: &[Value]| {
                    let selected = values
                        .first()
                        .and_then(Value::as_f64)
                        .ok_or_else(|| {
                            CallbackError::InvalidInput("slider value must be a number".to_string())
                        })?;
                    Ok(serde_json::to_value(handler_context.update_figure(selected))?)
                }),
            )?;

        Ok(DashboardApp {
            title: title.into(),
            slider_id,
            context,
            slider,
            registry,
        })
    }

    /// Gapminder dashboard with its year slider.
    pub fn gapminder(context: DataContext) -> Result<Self, AppError> {
        Self::new("Gapminder", "year-slider", context)
    }

    /// Brain weight dashboard with its age slider.
    pub fn brain(context: DataContext) -> Result<Self, AppError> {
        Self::new("Brain Weight vs Head Size", "age-slider", context)
    }

    pub fn figure_output() -> PropertyRef {
        PropertyRef::new(GRAPH_ID, "figure")
    }

    pub fn context(&self) -> &DataContext {
        &self.context
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// Layout tree: the chart above the slider.
    pub fn layout(&self) -> Component {
        Component::div(vec![
            Component::graph(GRAPH_ID),
            Component::slider(&self.slider_id, &self.slider),
        ])
    }

    /// Figure for the slider's initial position.
    pub fn initial_figure(&self) -> Figure {
        self.context.update_figure(self.slider.value)
    }
}

/// Errors raised while assembling a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Dataset(DatasetError),
    Callback(CallbackError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Dataset(err) => write!(f, "{}", err),
            AppError::Callback(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        AppError::Dataset(err)
    }
}

impl From<CallbackError> for AppError {
    fn from(err: CallbackError) -> Self {
        AppError::Callback(err)
    }
}
