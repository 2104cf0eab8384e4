mod data_controller;
mod plot_config;
mod plot_model;
mod render_coordinator;
mod render_report;

pub use plot_config::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfig, PlotConfigJsonContractV1};
pub use plot_model::PlotModel;
pub use render_report::{RenderOutput, RenderReport, RenderWarning};
