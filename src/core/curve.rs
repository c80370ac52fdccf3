//! core/curve.rs: ordered 3D point sequences and surface grids.
//!
//! Curves are stored as parallel coordinate arrays; point order is the
//! line-drawing order along the curve parameter.

/// Generate `num` evenly spaced values between start and stop (inclusive).
pub fn linspace(start: f32, stop: f32, num: usize) -> Vec<f32> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![start];
    }
    (0..num)
        .map(|i| {
            let t = i as f32 / (num - 1) as f32;
            start + t * (stop - start)
        })
        .collect()
}

/// An ordered polyline in 3D.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve3 {
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
    pub zs: Vec<f32>,
}

impl Curve3 {
    pub fn new(xs: Vec<f32>, ys: Vec<f32>, zs: Vec<f32>) -> Self {
        assert_eq!(xs.len(), ys.len());
        assert_eq!(xs.len(), zs.len());
        Self { xs, ys, zs }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
            zs: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn push(&mut self, x: f32, y: f32, z: f32) {
        self.xs.push(x);
        self.ys.push(y);
        self.zs.push(z);
    }

    /// Mean height of the curve; 0.0 for an empty curve.
    pub fn mean_z(&self) -> f32 {
        if self.zs.is_empty() {
            return 0.0;
        }
        self.zs.iter().sum::<f32>() / self.zs.len() as f32
    }

    /// Append every point of `other`, preserving order.
    pub fn extend_from(&mut self, other: &Curve3) {
        self.xs.extend_from_slice(&other.xs);
        self.ys.extend_from_slice(&other.ys);
        self.zs.extend_from_slice(&other.zs);
    }
}

/// A rectangular grid of 3D points, row-major (`n_rows` × `n_cols`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceGrid {
    pub n_rows: usize,
    pub n_cols: usize,
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
    pub zs: Vec<f32>,
}

impl SurfaceGrid {
    pub fn with_capacity(n_rows: usize, n_cols: usize) -> Self {
        let n = n_rows * n_cols;
        Self {
            n_rows,
            n_cols,
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
            zs: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.n_rows && col < self.n_cols);
        row * self.n_cols + col
    }

    #[inline]
    pub fn point(&self, row: usize, col: usize) -> (f32, f32, f32) {
        let i = self.idx(row, col);
        (self.xs[i], self.ys[i], self.zs[i])
    }
}

/// Evenly spaced sample indices over a sequence of length `len`.
///
/// Indices are floor(frac * (len - 1)) for `count` fractions over [0, 1],
/// clamped to the valid range. A zero-length input yields no indices.
pub fn marker_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    let last = len - 1;
    linspace(0.0, 1.0, count)
        .into_iter()
        .map(|frac| ((frac * last as f32) as usize).min(last))
        .collect()
}
