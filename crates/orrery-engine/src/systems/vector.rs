//! Lyon-based frame buffer.
//!
//! Every shape drawn during a frame is tessellated on the CPU into a flat,
//! non-indexed triangle list of [`VectorVertex`]. The host uploads the buffer
//! once per frame and draws it in order, so later shapes paint over earlier
//! ones.
//!
//! ```ignore
//! // In Game::update():
//! ctx.vectors.fill_rect(Vec2::ZERO, 800.0, 800.0, VectorColor::BLACK);
//! ctx.vectors.stroke_circle(center, 120.0, 1.0, VectorColor::rgb8(200, 200, 200));
//! ctx.vectors.fill_circle(planet, 8.0, VectorColor::BLUE);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Tessellation tolerance in pixels.
const TOLERANCE: f32 = 0.25;

/// Per-vertex data: position + RGBA.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(pos: lyon::math::Point, color: VectorColor) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from 0.0 - 1.0 components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully opaque color from 0-255 components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Stamps a flat color onto every vertex lyon emits, fill or stroke.
struct FlatColor(VectorColor);

impl FillVertexConstructor<VectorVertex> for FlatColor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex::at(vertex.position(), self.0)
    }
}

impl StrokeVertexConstructor<VectorVertex> for FlatColor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex::at(vertex.position(), self.0)
    }
}

/// Per-frame vector frame buffer.
///
/// Holds the lyon tessellators, an indexed scratch buffer, and the flat
/// output buffer. The output never grows past `max_vertices`; shapes that
/// would overflow it are dropped whole.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    scratch: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
    max_vertices: usize,
    dropped_shapes: usize,
}

impl VectorState {
    pub fn new(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            scratch: VertexBuffers::new(),
            vertices: Vec::with_capacity(max_vertices),
            max_vertices,
            dropped_shapes: 0,
        }
    }

    /// Start a new frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped_shapes = 0;
    }

    /// Number of vertices in the current frame.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Capacity in vertices.
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Shapes dropped this frame because the buffer was full.
    pub fn dropped_shapes(&self) -> usize {
        self.dropped_shapes
    }

    /// The current frame's triangle list.
    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// The current frame as flat floats (6 per vertex).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw pointer to the flat float buffer (read by the host from WASM memory).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }

    /// Move tessellated geometry from scratch into the frame as a triangle list.
    fn flush_scratch(&mut self) {
        let needed = self.scratch.indices.len();
        if self.vertices.len() + needed > self.max_vertices {
            self.dropped_shapes += 1;
            log::warn!(
                "vectors: frame buffer full ({} / {}), dropping shape",
                self.vertices.len(),
                self.max_vertices
            );
        } else {
            let scratch = &self.scratch;
            self.vertices
                .extend(scratch.indices.iter().map(|&i| scratch.vertices[i as usize]));
        }
        self.scratch.vertices.clear();
        self.scratch.indices.clear();
    }

    /// Fill an axis-aligned rectangle with its top-left corner at `pos`.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(pos.x, pos.y));
        builder.line_to(point(pos.x + width, pos.y));
        builder.line_to(point(pos.x + width, pos.y + height));
        builder.line_to(point(pos.x, pos.y + height));
        builder.close();
        self.fill_path(&builder.build(), color);
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        self.fill_path(&circle_path(center, radius), color);
    }

    /// Outline a circle with a stroke of `width` pixels.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        self.stroke_path(&circle_path(center, radius), width, color);
    }

    /// Fill an arbitrary lyon path.
    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.scratch, FlatColor(color)),
        );
        match result {
            Ok(()) => self.flush_scratch(),
            Err(err) => {
                log::warn!("vectors: fill tessellation failed: {err:?}");
                self.scratch.vertices.clear();
                self.scratch.indices.clear();
            }
        }
    }

    /// Stroke an arbitrary lyon path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.scratch, FlatColor(color)),
        );
        match result {
            Ok(()) => self.flush_scratch(),
            Err(err) => {
                log::warn!("vectors: stroke tessellation failed: {err:?}");
                self.scratch.vertices.clear();
                self.scratch.indices.clear();
            }
        }
    }
}

fn circle_path(center: Vec2, radius: f32) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn rgb8_scales_components() {
        let c = VectorColor::rgb8(255, 165, 0);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 0.647).abs() < 0.01);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn fill_rect_is_two_triangles() {
        let mut state = VectorState::new(1024);
        state.fill_rect(Vec2::ZERO, 100.0, 50.0, VectorColor::BLACK);
        assert_eq!(state.vertex_count(), 6);
        assert_eq!(state.as_floats().len(), 6 * VectorVertex::FLOATS);
    }

    #[test]
    fn fill_circle_stays_inside_radius() {
        let mut state = VectorState::new(4096);
        let center = Vec2::new(50.0, 50.0);
        state.fill_circle(center, 25.0, VectorColor::BLUE);
        assert!(state.vertex_count() > 0);
        assert_eq!(state.vertex_count() % 3, 0);
        for v in state.vertices() {
            let d = Vec2::new(v.x, v.y).distance(center);
            assert!(d <= 25.0 + 0.05, "vertex at distance {}", d);
            assert_eq!(v.b, 1.0);
        }
    }

    #[test]
    fn stroke_circle_straddles_radius() {
        let mut state = VectorState::new(8192);
        let center = Vec2::new(400.0, 400.0);
        state.stroke_circle(center, 120.0, 1.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
        for v in state.vertices() {
            let d = Vec2::new(v.x, v.y).distance(center);
            assert!((d - 120.0).abs() <= 0.5 + TOLERANCE, "vertex at distance {}", d);
        }
    }

    #[test]
    fn degenerate_shapes_draw_nothing() {
        let mut state = VectorState::new(1024);
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::RED);
        state.stroke_circle(Vec2::ZERO, 10.0, 0.0, VectorColor::RED);
        state.fill_rect(Vec2::ZERO, -1.0, 10.0, VectorColor::RED);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn overflow_drops_whole_shapes() {
        let mut state = VectorState::new(8);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::RED);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::RED);
        assert_eq!(state.vertex_count(), 6);
        assert_eq!(state.dropped_shapes(), 1);

        state.clear();
        assert_eq!(state.vertex_count(), 0);
        assert_eq!(state.dropped_shapes(), 0);
    }
}
