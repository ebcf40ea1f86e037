//! The frame-driving facade over the rendering core.
//!
//! [`Engine`] owns the loaded model and the rasterizer and turns a
//! caller-owned pixel buffer into one rendered frame per call. It does
//! not own pixel storage and keeps no per-frame state: the windowing
//! layer decides when frames happen and what they are presented to.

use std::collections::HashSet;
use std::path::Path;

use log::warn;

use crate::colors::Color;
use crate::model::{LoadError, Model};
use crate::render::{FrameBuffer, ScanlineRasterizer};

/// What gets drawn for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Flat-shaded solid triangles.
    #[default]
    Filled,
    /// Unshaded triangle outlines.
    Wireframe,
}

pub struct Engine {
    width: u32,
    height: u32,
    model: Model,
    rasterizer: ScanlineRasterizer,
    render_mode: RenderMode,
    clear_color: Color,
    wireframe_color: Color,
    // Faces already reported as undrawable, so a bad face warns once
    // instead of once per frame.
    reported_faces: HashSet<usize>,
}

impl Engine {
    /// Create an engine targeting buffers of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            model: Model::default(),
            rasterizer: ScanlineRasterizer::new(),
            render_mode: RenderMode::default(),
            clear_color: Color::BLACK,
            wireframe_color: Color::new(200, 200, 200),
            reported_faces: HashSet::new(),
        }
    }

    /// Load the model to render. Replaces any previously loaded model.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        self.model = Model::from_obj(path)?;
        self.reported_faces.clear();
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn face_count(&self) -> usize {
        self.model.face_count()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render one frame into `pixels`.
    ///
    /// The buffer must be `width * height * BYTES_PER_PIXEL` bytes. The
    /// frame is cleared, then every face is drawn in file order (no depth
    /// sorting). A face that fails to draw is skipped and the frame
    /// continues; the failure is logged the first time it is seen.
    pub fn render(&mut self, pixels: &mut [u8]) {
        let mut fb = FrameBuffer::new(pixels, self.width, self.height);
        fb.clear(self.clear_color);

        for face_index in 0..self.model.face_count() {
            let result = match self.render_mode {
                RenderMode::Filled => self.rasterizer.draw_face(&mut fb, &self.model, face_index),
                RenderMode::Wireframe => self.rasterizer.draw_wireframe(
                    &mut fb,
                    &self.model,
                    face_index,
                    self.wireframe_color,
                ),
            };

            if let Err(err) = result {
                if self.reported_faces.insert(face_index) {
                    warn!("skipping face {face_index}: {err}");
                }
            }
        }
    }
}
