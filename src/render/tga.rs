use std::io::Write;

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::render::{Canvas, CanvasEncoder};

pub const TGA_HEADER_LEN: usize = 18;
/// Uncompressed truecolor image type.
pub const TGA_IMAGE_TYPE_TRUECOLOR: u8 = 2;
pub const TGA_PIXEL_DEPTH: u8 = 32;
/// Eight alpha bits, bottom-left origin.
pub const TGA_DESCRIPTOR_ALPHA8: u8 = 8;

/// Writes canvases as uncompressed 32-bit TGA.
///
/// Pixels are stored BGRA, bottom row first, matching the canvas row order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TgaEncoder;

impl TgaEncoder {
    /// Builds the fixed 18-byte header for a `width` x `height` image.
    pub fn header(width: u32, height: u32) -> PlotResult<[u8; TGA_HEADER_LEN]> {
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(PlotError::InvalidResolution { width, height });
        };
        if w == 0 || h == 0 {
            return Err(PlotError::InvalidResolution { width, height });
        }

        let mut header = [0_u8; TGA_HEADER_LEN];
        header[2] = TGA_IMAGE_TYPE_TRUECOLOR;
        header[12..14].copy_from_slice(&w.to_le_bytes());
        header[14..16].copy_from_slice(&h.to_le_bytes());
        header[16] = TGA_PIXEL_DEPTH;
        header[17] = TGA_DESCRIPTOR_ALPHA8;
        Ok(header)
    }
}

impl CanvasEncoder for TgaEncoder {
    fn encode(&self, canvas: &Canvas, out: &mut dyn Write) -> PlotResult<()> {
        let header = Self::header(canvas.width(), canvas.height())?;
        out.write_all(&header)?;

        let mut row_bytes = Vec::with_capacity(canvas.width() as usize * 4);
        for row in canvas.rows() {
            row_bytes.clear();
            for color in row {
                row_bytes.extend_from_slice(&[color.blue, color.green, color.red, color.alpha]);
            }
            out.write_all(&row_bytes)?;
        }
        out.flush()?;

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            bytes = TGA_HEADER_LEN + canvas.pixels().len() * 4,
            "encoded tga image"
        );
        Ok(())
    }
}
