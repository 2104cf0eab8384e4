//! raster-plot: headless plotting into truecolor raster images.
//!
//! Series and functions are collected on a [`PlotModel`], rasterized onto a
//! [`render::Canvas`] and optionally written out as an uncompressed TGA file.
//!
//! ```no_run
//! use raster_plot::PlotModel;
//!
//! let mut plot = PlotModel::new();
//! plot.add_series(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0])?;
//! plot.add_function(f64::sin);
//! plot.write_tga("plot.tga")?;
//! # Ok::<(), raster_plot::PlotError>(())
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotModel, RenderReport};
pub use error::{PlotError, PlotResult};
