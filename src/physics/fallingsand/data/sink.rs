//! The rendering side of the simulation, as a capability handed to the
//! field at construction time rather than a global the engine reaches for.
//! The simulation emits one paint or clear notification per affected cell;
//! what happens to them is the sink's business.

use bevy::render::color::Color;

use crate::physics::fallingsand::elements::element::VOID_COLOR;
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::XyVector;

/// Receives cell repaint notifications from the simulation
pub trait RenderSink {
    /// The cell at `pos` is now occupied by something of this color
    fn paint(&mut self, pos: XyVector, color: Color);
    /// The cell at `pos` is now empty
    fn clear(&mut self, pos: XyVector);
}

/// A sink that drops every notification
/// Used to run the simulation headless in unit tests and benchmarks
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn paint(&mut self, _pos: XyVector, _color: Color) {}
    fn clear(&mut self, _pos: XyVector) {}
}

/// A sink that keeps a full RGBA frame up to date, one pixel per cell
/// The windowed frontend copies the frame into a texture once per frame
pub struct FrameBufferSink {
    frame: RawImage,
}

impl FrameBufferSink {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: RawImage::new_filled(width as u32, height as u32, VOID_COLOR),
        }
    }

    pub fn get_frame(&self) -> &RawImage {
        &self.frame
    }
}

impl RenderSink for FrameBufferSink {
    fn paint(&mut self, pos: XyVector, color: Color) {
        self.frame.set_pixel(pos, color);
    }
    fn clear(&mut self, pos: XyVector) {
        self.frame.set_pixel(pos, VOID_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_paint_and_clear() {
        let mut sink = FrameBufferSink::new(4, 4);
        let pos = XyVector::new(2, 1);
        let red = Color::rgb_u8(255, 0, 0);

        sink.paint(pos, red);
        let idx = (1 * 4 + 2) * 4;
        assert_eq!(
            &sink.get_frame().pixels[idx..idx + 4],
            red.as_rgba_u8().as_slice()
        );

        sink.clear(pos);
        assert_eq!(
            &sink.get_frame().pixels[idx..idx + 4],
            VOID_COLOR.as_rgba_u8().as_slice()
        );
    }
}
