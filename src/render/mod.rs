mod canvas;
mod tga;

pub use canvas::Canvas;
pub use tga::{
    TGA_DESCRIPTOR_ALPHA8, TGA_HEADER_LEN, TGA_IMAGE_TYPE_TRUECOLOR, TGA_PIXEL_DEPTH, TgaEncoder,
};

use std::io::Write;

use crate::error::PlotResult;

/// Contract implemented by any image file encoder.
///
/// Encoders receive a fully rasterized `Canvas`, keeping file formats
/// isolated from range resolution and sampling.
pub trait CanvasEncoder {
    fn encode(&self, canvas: &Canvas, out: &mut dyn Write) -> PlotResult<()>;
}
