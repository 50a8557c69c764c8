use crate::geometry::primitives::Point;

#[derive(Clone, Debug, PartialEq)]
///Affine transformation in 3D, as a homogeneous 4x4 matrix acting on column vectors
pub struct Transformation {
    matrix: [[f64; 4]; 4],
}

impl Transformation {
    pub const fn identity() -> Self {
        Self {
            matrix: IDENTITY_MATRIX,
        }
    }

    pub fn from_translation(Point(tx, ty, tz): Point) -> Self {
        Self {
            matrix: transl_m((tx, ty, tz)),
        }
    }

    /// Counter-clockwise rotation around the z-axis, `angle` in radians
    pub fn from_z_rotation(angle: f64) -> Self {
        Self {
            matrix: z_rot_m(angle),
        }
    }

    /// Applies `other` after `self`
    pub fn then(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    pub fn translate(self, t: Point) -> Self {
        self.then(&Self::from_translation(t))
    }

    pub fn matrix(&self) -> &[[f64; 4]; 4] {
        &self.matrix
    }

    pub fn transform_point(&self, Point(x, y, z): Point) -> Point {
        let m = &self.matrix;
        Point(
            m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3],
            m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3],
            m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3],
        )
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

const IDENTITY_MATRIX: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

fn transl_m((tx, ty, tz): (f64, f64, f64)) -> [[f64; 4]; 4] {
    [
        [1.0, 0.0, 0.0, tx],
        [0.0, 1.0, 0.0, ty],
        [0.0, 0.0, 1.0, tz],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

fn z_rot_m(angle: f64) -> [[f64; 4]; 4] {
    let (sin, cos) = angle.sin_cos();
    [
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

#[inline(always)]
fn dot_prod(l: &[[f64; 4]; 4], r: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
    let mut m = [[0.0; 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).map(|k| l[i][k] * r[k][j]).sum();
        }
    }
    m
}
