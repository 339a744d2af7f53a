use crate::config::{C, F};
use ndarray::prelude::*;
use ndarray_npy::{ReadNpyError, ReadNpyExt};
use std::fs::File;
use std::path::Path;

/// Loads the complex wavefunction snapshot saved for one time step.
pub fn load_snapshot(path: &Path) -> Result<Array2<C>, ReadNpyError> {
    let reader = File::open(path)?;
    Array2::read_npy(reader)
}

/// Probability density |psi|² of a snapshot.
pub fn intensity(psi: &Array2<C>) -> Array2<F> {
    psi.mapv(|psi_elem| psi_elem.im.powi(2) + psi_elem.re.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn intensity_is_the_squared_magnitude() {
        let psi = array![
            [Complex::new(1.0, 0.0), Complex::new(0.0, 2.0)],
            [Complex::new(3.0, 4.0), Complex::new(0.0, 0.0)],
        ];
        let a = intensity(&psi);
        assert_eq!(a, array![[1.0, 4.0], [25.0, 0.0]]);
    }
}
