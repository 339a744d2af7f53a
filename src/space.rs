use crate::config::F;
use ndarray::{prelude::*, stack};
use ndarray_npy::{ReadNpyError, ReadNpyExt};
use std::fs::File;
use std::path::Path;

/// Spatial grid of the saved snapshots: the two axis arrays plus the 2-D
/// coordinate mesh built from them once at startup.
#[derive(Debug, Clone)]
pub struct Xgrid {
    pub x: Array1<F>,
    pub y: Array1<F>,
    pub x_mesh: Array2<F>,
    pub y_mesh: Array2<F>,
}

impl Xgrid {
    pub fn new(x: Array1<F>, y: Array1<F>) -> Self {
        let (x_mesh, y_mesh) = meshgrid(&x, &y);
        Self { x, y, x_mesh, y_mesh }
    }

    /// Loads the axis arrays saved by the simulation.
    pub fn load_from_npy(x_path: &Path, y_path: &Path) -> Result<Self, ReadNpyError> {
        let x = load_axis(x_path)?;
        let y = load_axis(y_path)?;
        Ok(Self::new(x, y))
    }

    /// Shape a snapshot on this grid must have.
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    /// Grid step along each axis; the saved grids are uniform.
    pub fn steps(&self) -> (F, F) {
        (axis_step(&self.x), axis_step(&self.y))
    }
}

fn axis_step(axis: &Array1<F>) -> F {
    if axis.len() > 1 {
        axis[1] - axis[0]
    } else {
        1.0
    }
}

pub fn load_axis(path: &Path) -> Result<Array1<F>, ReadNpyError> {
    let reader = File::open(path)?;
    Array1::read_npy(reader)
}

/// Loads the time stamps of the saved snapshots, one per step.
pub fn load_time_grid(path: &Path) -> Result<Array1<F>, ReadNpyError> {
    load_axis(path)
}

/// 2-D coordinate mesh from two 1-D axes, shape (x.len(), y.len()):
/// x_mesh[[i, j]] = x[i], y_mesh[[i, j]] = y[j].
pub fn meshgrid(x: &Array1<F>, y: &Array1<F>) -> (Array2<F>, Array2<F>) {
    (
        stack(Axis(1), &vec![x.view(); y.len()]).unwrap(),
        stack(Axis(0), &vec![y.view(); x.len()]).unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshgrid_uses_ij_indexing() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![10.0, 20.0];
        let (x_mesh, y_mesh) = meshgrid(&x, &y);
        assert_eq!(x_mesh.dim(), (3, 2));
        assert_eq!(y_mesh.dim(), (3, 2));
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(x_mesh[[i, j]], x[i]);
                assert_eq!(y_mesh[[i, j]], y[j]);
            }
        }
    }

    #[test]
    fn steps_come_from_the_first_two_points() {
        let grid = Xgrid::new(array![-1.0, -0.5, 0.0], array![0.0, 0.25]);
        let (dx, dy) = grid.steps();
        assert_eq!(dx, 0.5);
        assert_eq!(dy, 0.25);
        assert_eq!(grid.shape(), (3, 2));
    }
}
