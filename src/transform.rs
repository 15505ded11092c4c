//! Transformations

use std::ops::Mul;

/// Projective transformation as a 4x4 column-major matrix
///
/// Element `m[col*4 + row]` holds row `row` of column `col`, the
/// layout used by OpenGL-style math libraries.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Projective {
    pub m: [f64; 16],
}

impl Default for Projective {
    fn default() -> Self {
        Self::new()
    }
}

impl Projective {
    /// Creates a new identity transform
    pub fn new() -> Self {
        Self::from_elements([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }
    /// Creates a transform from a column-major element array
    pub fn from_elements(m: [f64; 16]) -> Self {
        Projective { m }
    }
    /// Creates a perspective projection onto the z = -near plane
    ///
    /// A 90 degree field-of-view frustum at unit aspect, mapping z in
    /// [-far,-near] into clip space. Points behind the near plane get
    /// w > 0 and can be dehomogenized.
    pub fn perspective(near: f64, far: f64) -> Self {
        let d = far - near;
        Self::from_elements([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, -(far + near) / d, -1.0,
            0.0, 0.0, -2.0 * far * near / d, 0.0,
        ])
    }
    /// Transform a homogeneous point
    pub fn transform(&self, v: [f64; 4]) -> [f64; 4] {
        let m = &self.m;
        [
            m[0]*v[0] + m[4]*v[1] + m[8]*v[2]  + m[12]*v[3],
            m[1]*v[0] + m[5]*v[1] + m[9]*v[2]  + m[13]*v[3],
            m[2]*v[0] + m[6]*v[1] + m[10]*v[2] + m[14]*v[3],
            m[3]*v[0] + m[7]*v[1] + m[11]*v[2] + m[15]*v[3],
        ]
    }
    /// Transform a 3D point with w = 1 and dehomogenize the result
    pub fn project(&self, p: [f64; 3]) -> [f64; 3] {
        dehomogenize(self.transform([p[0], p[1], p[2], 1.0]))
    }
    /// Compose two transforms; the right-hand side applies first
    pub fn mul_projective(&self, rhs: &Projective) -> Self {
        let mut m = [0.0; 16];
        for col in 0 .. 4 {
            for row in 0 .. 4 {
                let mut sum = 0.0;
                for k in 0 .. 4 {
                    sum += self.m[k*4 + row] * rhs.m[col*4 + k];
                }
                m[col*4 + row] = sum;
            }
        }
        Self::from_elements(m)
    }
}

impl Mul<Projective> for Projective {
    type Output = Projective;
    fn mul(self, rhs: Projective) -> Self {
        self.mul_projective(&rhs)
    }
}

/// Divide a homogeneous point by its w component
pub fn dehomogenize(v: [f64; 4]) -> [f64; 3] {
    [v[0] / v[3], v[1] / v[3], v[2] / v[3]]
}

/// Component-wise midpoint of two points
pub fn midpoint<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for i in 0 .. N {
        out[i] = 0.5 * (a[i] + b[i]);
    }
    out
}
