//! Sampled curves.

use super::numeric::to_f64;
use crate::types::CurveError;
use num_traits::Float;

/// Location and value of a sampled extremum.
///
/// Produced by [`SampledCurve::argmin`] and [`SampledCurve::argmax`]. The
/// extremum is taken over the finite sample, not the underlying function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveExtremum<T> {
    /// Grid index of the extremum
    pub index: usize,
    /// x-coordinate at the extremum
    pub x: T,
    /// y-value at the extremum
    pub y: T,
}

/// An ordered sequence of `(x, y)` samples.
///
/// # Invariants
///
/// - `xs` and `ys` have the same length, at least 2
/// - `xs` is strictly increasing
/// - every coordinate is finite
///
/// The invariants are checked on construction, so downstream consumers
/// (envelopes, crossings, plotting) never see NaN or infinite values.
///
/// # Example
///
/// ```
/// use econ_core::math::curve::SampledCurve;
///
/// let curve = SampledCurve::new(vec![1.0, 2.0, 3.0], vec![4.0, 1.0, 9.0]).unwrap();
/// let lowest = curve.argmin();
/// assert_eq!(lowest.index, 1);
/// assert_eq!(lowest.x, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampledCurve<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> SampledCurve<T> {
    /// Construct a curve from x and y samples.
    ///
    /// # Errors
    ///
    /// * `CurveError::LengthMismatch` - `xs.len() != ys.len()`
    /// * `CurveError::InsufficientData` - fewer than 2 points
    /// * `CurveError::NonFinite` - a coordinate is NaN or infinite
    /// * `CurveError::NonIncreasing` - `xs` is not strictly increasing
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, CurveError> {
        if xs.len() != ys.len() {
            return Err(CurveError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        if xs.len() < 2 {
            return Err(CurveError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(index) = xs
            .iter()
            .zip(ys.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(CurveError::NonFinite { index });
        }

        if let Some(index) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
            return Err(CurveError::NonIncreasing { index });
        }

        Ok(Self { xs, ys })
    }

    /// Evaluate `f` at every grid point.
    ///
    /// The first error returned by `f` aborts the evaluation; curve
    /// invariant violations are converted into `E` through `From`.
    ///
    /// # Example
    ///
    /// ```
    /// use econ_core::math::curve::SampledCurve;
    /// use econ_core::types::CurveError;
    ///
    /// let grid = [1.0_f64, 2.0, 4.0];
    /// let curve = SampledCurve::from_fn(&grid, |q| Ok::<_, CurveError>(120.0 / q + 9.0)).unwrap();
    /// assert_eq!(curve.ys(), &[129.0, 69.0, 39.0]);
    /// ```
    pub fn from_fn<F, E>(grid: &[T], mut f: F) -> Result<Self, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<CurveError>,
    {
        let ys = grid.iter().map(|&x| f(x)).collect::<Result<Vec<T>, E>>()?;
        Ok(Self::new(grid.to_vec(), ys)?)
    }

    /// Returns the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// The `(x, y)` sample at `index`, if any.
    pub fn point(&self, index: usize) -> Option<(T, T)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// The last sample (the right edge of the grid).
    pub fn last(&self) -> (T, T) {
        let i = self.xs.len() - 1;
        (self.xs[i], self.ys[i])
    }

    /// Sampled minimum. Ties resolve to the first index.
    pub fn argmin(&self) -> CurveExtremum<T> {
        self.extremum(|candidate, best| candidate < best)
    }

    /// Sampled maximum. Ties resolve to the first index.
    pub fn argmax(&self) -> CurveExtremum<T> {
        self.extremum(|candidate, best| candidate > best)
    }

    /// Smallest sampled y-value.
    #[inline]
    pub fn min_y(&self) -> T {
        self.argmin().y
    }

    /// Largest sampled y-value.
    #[inline]
    pub fn max_y(&self) -> T {
        self.argmax().y
    }

    /// True if every y-value equals the first one.
    pub fn is_flat(&self) -> bool {
        let first = self.ys[0];
        self.ys.iter().all(|&y| y == first)
    }

    /// Returns true if `other` is sampled on the same x grid.
    pub fn same_grid(&self, other: &Self) -> bool {
        self.xs == other.xs
    }

    /// Checks that `other` is sampled on the same x grid.
    ///
    /// # Errors
    ///
    /// * `CurveError::GridMismatch` - lengths or any x-coordinate differ
    pub fn check_same_grid(&self, other: &Self) -> Result<(), CurveError> {
        if self.xs.len() != other.xs.len() {
            return Err(CurveError::GridMismatch(format!(
                "length {} vs {}",
                self.xs.len(),
                other.xs.len()
            )));
        }

        if let Some(index) = (0..self.xs.len()).find(|&i| self.xs[i] != other.xs[i]) {
            return Err(CurveError::GridMismatch(format!(
                "x differs at index {}: {} vs {}",
                index,
                to_f64(self.xs[index]),
                to_f64(other.xs[index])
            )));
        }

        Ok(())
    }

    /// Apply `f` to every y-value, keeping the grid.
    ///
    /// Fallible like [`SampledCurve::from_fn`]: the first error from `f`
    /// aborts, and curve invariant violations convert into `E`.
    ///
    /// # Errors
    ///
    /// * `CurveError::NonFinite` - `f` produced NaN or infinity
    pub fn map_y<F, E>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<CurveError>,
    {
        let ys = self.ys.iter().map(|&y| f(y)).collect::<Result<Vec<T>, E>>()?;
        Ok(Self::new(self.xs.clone(), ys)?)
    }

    /// Replace every y-value with `f(x, y)`, keeping the grid.
    ///
    /// # Errors
    ///
    /// * `CurveError::NonFinite` - `f` produced NaN or infinity
    pub fn map_points<F, E>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(T, T) -> Result<T, E>,
        E: From<CurveError>,
    {
        let ys = self
            .points()
            .map(|(x, y)| f(x, y))
            .collect::<Result<Vec<T>, E>>()?;
        Ok(Self::new(self.xs.clone(), ys)?)
    }

    /// Combine two curves on the same grid point by point.
    ///
    /// # Errors
    ///
    /// * `CurveError::GridMismatch` - the grids differ
    /// * `CurveError::NonFinite` - `f` produced NaN or infinity
    pub fn zip_with<F, E>(&self, other: &Self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(T, T) -> Result<T, E>,
        E: From<CurveError>,
    {
        self.check_same_grid(other)?;
        let ys = self
            .ys
            .iter()
            .zip(other.ys.iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Result<Vec<T>, E>>()?;
        Ok(Self::new(self.xs.clone(), ys)?)
    }

    fn extremum<F>(&self, better: F) -> CurveExtremum<T>
    where
        F: Fn(T, T) -> bool,
    {
        let mut index = 0;
        for i in 1..self.ys.len() {
            if better(self.ys[i], self.ys[index]) {
                index = i;
            }
        }
        CurveExtremum {
            index,
            x: self.xs[index],
            y: self.ys[index],
        }
    }
}
