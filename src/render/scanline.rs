//! Scanline triangle rasterization with flat shading.
//!
//! Triangles are drawn one horizontal row at a time: the three screen
//! points are sorted by Y, the triangle splits at the middle vertex into
//! an upper and a lower span, and each scanline is bounded by the long
//! edge on one side and the short edge covering that span on the other.
//! The horizontal fill reuses [`ScanlineRasterizer::draw_line`], which is
//! also the standalone wireframe primitive.

use thiserror::Error;

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::face::Face;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::model::Model;
use crate::sequence::IndexOutOfRange;
use crate::viewport::{ScreenPoint, Viewport};

/// Errors raised while drawing a single face.
///
/// These are recoverable per triangle: the frame loop skips the face and
/// carries on, so one malformed face never takes down a whole render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("face index out of range: {0}")]
    FaceIndex(IndexOutOfRange),

    #[error("face corner {corner} references vertex index {index} outside the model")]
    VertexIndex { corner: usize, index: i32 },
}

/// Rasterizer for points, lines, and flat-shaded triangles.
///
/// Holds no mutable state: every call is a pure function of its inputs
/// plus the pixels it writes, so a single instance can serve any number
/// of frames and framebuffers.
#[derive(Debug, Default)]
pub struct ScanlineRasterizer {
    light: DirectionalLight,
}

impl ScanlineRasterizer {
    /// Create a rasterizer shading against the fixed default light.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_light(light: DirectionalLight) -> Self {
        Self { light }
    }

    /// Draw a line between two pixel coordinates, endpoints inclusive.
    ///
    /// Integer Bresenham walk: one step along the driving axis (the
    /// larger delta) per iteration, stepping the other axis when the
    /// accumulated error crosses the driving delta. Endpoints are put in
    /// a canonical order first so the drawn pixel set is identical no
    /// matter which endpoint is passed first. A zero-length line draws
    /// exactly one pixel.
    pub fn draw_line(
        &self,
        fb: &mut FrameBuffer,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) {
        let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut x = x0;
        let mut y = y0;
        fb.set_pixel(x, y, color);

        if dx > dy {
            let mut error = dx / 2;
            for _ in 0..dx {
                x += 1;
                error += dy;
                if error >= dx {
                    error -= dx;
                    y += step_y;
                }
                fb.set_pixel(x, y, color);
            }
        } else {
            let mut error = dy / 2;
            for _ in 0..dy {
                y += step_y;
                error += dx;
                if error >= dy {
                    error -= dy;
                    x += 1;
                }
                fb.set_pixel(x, y, color);
            }
        }
    }

    /// Draw one face of the model, flat-shaded.
    ///
    /// Resolves the face's vertex positions, computes the face normal
    /// and its intensity against the light, culls the triangle outright
    /// if it faces away, then projects to screen space and fills. The
    /// framebuffer is untouched until all three vertices have resolved,
    /// so a bad index can never leave a partial triangle behind.
    pub fn draw_face(
        &self,
        fb: &mut FrameBuffer,
        model: &Model,
        face_index: usize,
    ) -> Result<(), DrawError> {
        let face = model.face(face_index).map_err(DrawError::FaceIndex)?;
        let [v0, v1, v2] = resolve_positions(model, face)?;

        let normal = (v0 - v1).cross(v1 - v2).normalize();
        let intensity = self.light.intensity(normal);
        if intensity < 0.0 {
            // Back-facing: the whole triangle is culled, nothing drawn.
            return Ok(());
        }
        let color = Color::gray((intensity * 255.0).round() as u8);

        let viewport = Viewport::new(fb.width(), fb.height());
        self.fill_triangle(
            fb,
            viewport.to_screen(v0),
            viewport.to_screen(v1),
            viewport.to_screen(v2),
            color,
        );
        Ok(())
    }

    /// Draw one face of the model as an unshaded outline.
    ///
    /// Same resolution and projection as [`draw_face`](Self::draw_face)
    /// but no culling: an outline view shows all geometry.
    pub fn draw_wireframe(
        &self,
        fb: &mut FrameBuffer,
        model: &Model,
        face_index: usize,
        color: Color,
    ) -> Result<(), DrawError> {
        let face = model.face(face_index).map_err(DrawError::FaceIndex)?;
        let [v0, v1, v2] = resolve_positions(model, face)?;

        let viewport = Viewport::new(fb.width(), fb.height());
        let p0 = viewport.to_screen(v0);
        let p1 = viewport.to_screen(v1);
        let p2 = viewport.to_screen(v2);

        self.draw_line(fb, p0.x, p0.y, p1.x, p1.y, color);
        self.draw_line(fb, p1.x, p1.y, p2.x, p2.y, color);
        self.draw_line(fb, p2.x, p2.y, p0.x, p0.y, color);
        Ok(())
    }

    /// Fill a screen-space triangle with a solid color.
    ///
    /// Vertices are sorted by ascending Y (stable, ties keep their
    /// original order), then the two spans `[p1.y, p2.y]` and
    /// `[p2.y, p3.y]` are filled scanline by scanline. The long edge
    /// `p1-p3` bounds both spans, `p1-p2` the upper and `p2-p3` the
    /// lower. Degenerate shapes collapse to lines or points in the same
    /// color; there is no special-case coloring.
    pub fn fill_triangle(
        &self,
        fb: &mut FrameBuffer,
        mut p1: ScreenPoint,
        mut p2: ScreenPoint,
        mut p3: ScreenPoint,
        color: Color,
    ) {
        if p2.y < p1.y {
            std::mem::swap(&mut p1, &mut p2);
        }
        if p3.y < p2.y {
            std::mem::swap(&mut p2, &mut p3);
        }
        if p2.y < p1.y {
            std::mem::swap(&mut p1, &mut p2);
        }

        // All three corners on one row: the fill collapses to a segment.
        if p1.y == p3.y {
            let min_x = p1.x.min(p2.x).min(p3.x);
            let max_x = p1.x.max(p2.x).max(p3.x);
            self.draw_line(fb, min_x, p1.y, max_x, p1.y, color);
            return;
        }

        for y in p1.y..=p2.y {
            let a = edge_x(p1, p3, y);
            let b = edge_x(p1, p2, y);
            self.draw_line(fb, a.min(b), y, a.max(b), y, color);
        }
        for y in p2.y..=p3.y {
            let a = edge_x(p1, p3, y);
            let b = edge_x(p2, p3, y);
            self.draw_line(fb, a.min(b), y, a.max(b), y, color);
        }
    }
}

/// X coordinate of edge `a`-`b` at scanline `y`.
///
/// A horizontal edge has no single x per row; it contributes its far
/// endpoint so a flat edge fills its whole row.
fn edge_x(a: ScreenPoint, b: ScreenPoint, y: i32) -> i32 {
    if a.y == b.y {
        return b.x;
    }
    a.x + ((y - a.y) as f32 * (b.x - a.x) as f32 / (b.y - a.y) as f32) as i32
}

/// Resolve a face's three 1-based vertex indices to positions.
fn resolve_positions(model: &Model, face: &Face) -> Result<[Vec3; 3], DrawError> {
    let mut positions = [Vec3::ZERO; 3];
    for (corner, position) in positions.iter_mut().enumerate() {
        let index = face.v[corner];
        if index < 1 {
            return Err(DrawError::VertexIndex { corner, index });
        }
        *position = *model
            .vertex((index - 1) as usize)
            .map_err(|_| DrawError::VertexIndex { corner, index })?;
    }
    Ok(positions)
}
