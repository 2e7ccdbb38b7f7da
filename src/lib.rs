pub mod dataset;
pub mod source;
pub mod figure;
pub mod view;
pub mod update;
pub mod slider;
pub mod components;
pub mod callbacks;
pub mod app;
pub mod server;

pub use dataset::{Cell, Column, ColumnKind, Dataset, DatasetError};
pub use source::{DataSource, DatasetLoader, LoadError, LoaderConfig};
pub use figure::{Axis, AxisType, Figure, HoverMode, Layout, ScatterTrace};
pub use view::{AxisSpec, ViewSpec, BRAIN_PATH, GAPMINDER_URL};
pub use update::DataContext;
pub use slider::{SliderConfig, SliderMark};
pub use components::{Component, ComponentKind};
pub use callbacks::{
    CallbackError, CallbackRegistry, Dependency, InputValue, PropertyRef, UpdateRequest,
    UpdateResponse,
};
pub use app::{AppError, DashboardApp, GRAPH_ID};
pub use server::{create_router, run_server, ApiError, AppState, ServerConfig};
