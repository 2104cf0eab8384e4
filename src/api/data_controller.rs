use tracing::{debug, warn};

use crate::core::{FunctionEntry, Series, Style};
use crate::error::PlotResult;

use super::PlotModel;

impl PlotModel {
    /// Registers an (x, y) series with the next palette style.
    ///
    /// Returns the series index. The style cursor only advances when the
    /// series is accepted.
    pub fn add_series(
        &mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
    ) -> PlotResult<usize> {
        let series = Series::new(self.style_cursor.peek(), xs.into(), ys.into());
        let index = self.push_series(series)?;
        self.style_cursor.advance();
        Ok(index)
    }

    pub fn add_series_styled(
        &mut self,
        style: Style,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
    ) -> PlotResult<usize> {
        self.push_series(Series::new(style, xs.into(), ys.into()))
    }

    /// Registers y-values plotted against their indices, with the next palette style.
    pub fn add_values(&mut self, ys: impl Into<Vec<f64>>) -> PlotResult<usize> {
        let series = Series::from_values(self.style_cursor.peek(), ys.into());
        let index = self.push_series(series)?;
        self.style_cursor.advance();
        Ok(index)
    }

    pub fn add_values_styled(
        &mut self,
        style: Style,
        ys: impl Into<Vec<f64>>,
    ) -> PlotResult<usize> {
        self.push_series(Series::from_values(style, ys.into()))
    }

    /// Registers `f(x)` with the next palette style and returns its index.
    pub fn add_function<F>(&mut self, function: F) -> usize
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let style = self.style_cursor.advance();
        self.add_function_styled(style, function)
    }

    pub fn add_function_styled<F>(&mut self, style: Style, function: F) -> usize
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.functions.push(FunctionEntry::new(style, function));
        let index = self.functions.len() - 1;
        debug!(index, style = %style, "add function");
        index
    }

    fn push_series(&mut self, series: PlotResult<Series>) -> PlotResult<usize> {
        let series = series.inspect_err(|err| {
            warn!(error = %err, "rejecting series");
        })?;
        debug!(
            index = self.series.len(),
            points = series.len(),
            style = %series.style(),
            "add series"
        );
        self.series.push(series);
        Ok(self.series.len() - 1)
    }
}
