//! Production surface over a capital × labour mesh.

use econ_core::types::DomainError;
use num_traits::Float;

use crate::production::CobbDouglas;

/// Output sampled on a `K × L` mesh.
///
/// `output[i][j]` is `Q(capital[j], labor[i])`: rows follow labour, columns
/// follow capital.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionSurface<T> {
    /// Capital axis
    pub capital: Vec<T>,
    /// Labour axis
    pub labor: Vec<T>,
    /// Output rows, one per labour value
    pub output: Vec<Vec<T>>,
}

impl<T: Float> ProductionSurface<T> {
    /// Evaluate `technology` on the mesh spanned by the two axes.
    ///
    /// # Examples
    /// ```
    /// use econ_models::production::CobbDouglas;
    /// use econ_models::surface::ProductionSurface;
    ///
    /// let tech = CobbDouglas::new(1.0_f64, 1.0, 1.0).unwrap();
    /// let surface = ProductionSurface::evaluate(&tech, &[1.0, 2.0], &[3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(surface.output.len(), 3);
    /// assert_eq!(surface.output[2][1], 10.0);
    /// ```
    pub fn evaluate(
        technology: &CobbDouglas<T>,
        capital: &[T],
        labor: &[T],
    ) -> Result<Self, DomainError> {
        let output = labor
            .iter()
            .map(|&l| {
                capital
                    .iter()
                    .map(|&k| technology.output(k, l))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            capital: capital.to_vec(),
            labor: labor.to_vec(),
            output,
        })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.labor.len(), self.capital.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::math::grid::linspace;

    #[test]
    fn test_surface_shape_and_monotonicity() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
        let k = linspace(1.0, 30.0, 40).unwrap();
        let l = linspace(1.0, 15.0, 40).unwrap();
        let surface = ProductionSurface::evaluate(&tech, &k, &l).unwrap();
        assert_eq!(surface.shape(), (40, 40));

        for row in &surface.output {
            assert!(row.windows(2).all(|w| w[1] > w[0]));
        }
        for j in 0..40 {
            assert!((1..40).all(|i| surface.output[i][j] > surface.output[i - 1][j]));
        }
    }

    #[test]
    fn test_surface_propagates_domain_error() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
        assert!(ProductionSurface::evaluate(&tech, &[0.0, 1.0], &[1.0, 2.0]).is_err());
    }
}
