// This struct represents one triangular face of a model.
// Each array holds three 1-based indices into the corresponding model
// collection (vertices, normals, texture coordinates), one per corner.
// Indices are stored exactly as parsed; range checking happens when a
// face is resolved for drawing, so malformed files surface as draw-time
// errors rather than bad memory accesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub v: [i32; 3],
    pub vn: [i32; 3],
    pub vt: [i32; 3],
}
