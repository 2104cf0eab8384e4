use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{
    CoordinateMapper, RangeComputer, ResolvedRange, Resolution, rasterize_function,
    rasterize_series,
};
use crate::error::PlotResult;
use crate::render::{Canvas, CanvasEncoder, TgaEncoder};

use super::{PlotModel, RenderOutput, RenderReport, RenderWarning};

impl PlotModel {
    /// Renders at the model's default resolution.
    pub fn render(&self) -> PlotResult<Canvas> {
        self.render_at(self.resolution.width, self.resolution.height)
    }

    /// Renders at a one-off resolution without changing the model's default.
    pub fn render_at(&self, width: u32, height: u32) -> PlotResult<Canvas> {
        self.render_with_report(width, height).map(|output| output.canvas)
    }

    /// Resolves ranges for a render `sampling_columns` wide.
    pub fn resolve_ranges(
        &self,
        sampling_columns: u32,
    ) -> PlotResult<(ResolvedRange, ResolvedRange)> {
        RangeComputer::new(self.range_policy).resolve(
            self.x_range,
            self.y_range,
            &self.series,
            &self.functions,
            sampling_columns,
        )
    }

    /// Renders and reports resolved ranges, sampling counters and warnings.
    ///
    /// Any error aborts the pass and no canvas is returned.
    pub fn render_with_report(&self, width: u32, height: u32) -> PlotResult<RenderOutput> {
        let resolution = Resolution::new(width, height).validate()?;
        let mut canvas = Canvas::new(resolution)?;
        let (x_range, y_range) = self.resolve_ranges(resolution.width)?;
        let mapper = CoordinateMapper::new(x_range, y_range, resolution)?;

        let series_writes: Vec<usize> = self
            .series
            .iter()
            .map(|series| rasterize_series(series, mapper, &mut canvas))
            .collect();

        let mut functions = Vec::with_capacity(self.functions.len());
        let mut warnings = Vec::new();
        for (function_index, entry) in self.functions.iter().enumerate() {
            let trace = rasterize_function(entry, mapper, self.sampling, &mut canvas);
            if let Some(truncated_at) = trace.truncated_at {
                warn!(
                    function_index,
                    truncated_at,
                    accepted = trace.accepted,
                    "function sampling budget exhausted; trace truncated"
                );
                warnings.push(RenderWarning::NonterminatingSample {
                    function_index,
                    truncated_at,
                    accepted: trace.accepted,
                });
            }
            functions.push(trace);
        }

        debug!(
            width,
            height,
            series = self.series.len(),
            functions = self.functions.len(),
            painted = canvas.painted_count(),
            "render complete"
        );

        Ok(RenderOutput {
            canvas,
            report: RenderReport {
                resolution,
                x_range,
                y_range,
                series_writes,
                functions,
                warnings,
            },
        })
    }

    /// Renders at `width` x `height` and encodes the canvas into `out`.
    pub fn encode_with<E: CanvasEncoder + ?Sized>(
        &self,
        encoder: &E,
        width: u32,
        height: u32,
        out: &mut dyn Write,
    ) -> PlotResult<RenderReport> {
        let RenderOutput { canvas, report } = self.render_with_report(width, height)?;
        encoder.encode(&canvas, out)?;
        Ok(report)
    }

    /// Writes a TGA image at the default resolution.
    pub fn write_tga(&self, path: impl AsRef<Path>) -> PlotResult<RenderReport> {
        self.write_tga_at(self.resolution.width, self.resolution.height, path)
    }

    /// Writes a TGA image at a one-off resolution.
    pub fn write_tga_at(
        &self,
        width: u32,
        height: u32,
        path: impl AsRef<Path>,
    ) -> PlotResult<RenderReport> {
        // Check the header and render before touching the file so any
        // failure leaves no output.
        TgaEncoder::header(width, height)?;
        let RenderOutput { canvas, report } = self.render_with_report(width, height)?;
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        TgaEncoder.encode(&canvas, &mut out)?;
        debug!(path = %path.display(), "wrote tga image");
        Ok(report)
    }
}
