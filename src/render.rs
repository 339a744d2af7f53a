use crate::config::{COLORBAR_MAX, F};
use crate::heatmap::{plot_frame, Colorbar};
use crate::layout::Layout;
use crate::snapshot;
use crate::space::{self, Xgrid};
use ndarray::Array1;
use std::error::Error;
use std::time::Instant;

/// Renders every saved snapshot of a run into a PNG frame.
///
/// The axis and time arrays are loaded once and kept for the whole run;
/// each snapshot is loaded, rendered and dropped within its own step.
pub struct FrameRenderer {
    layout: Layout,
    grid: Xgrid,
    t: Array1<F>,
}

impl FrameRenderer {
    pub fn init(layout: Layout) -> Result<Self, Box<dyn Error>> {
        let grid = Xgrid::load_from_npy(&layout.axis(0), &layout.axis(1))?;
        let t = space::load_time_grid(&layout.time_grid())?;
        Ok(Self { layout, grid, t })
    }

    pub fn n_steps(&self) -> usize {
        self.t.len()
    }

    /// Renders all frames in step order, one progress line per step.
    /// Frames written before a failing step stay on disk.
    pub fn render_all(&self) -> Result<(), Box<dyn Error>> {
        self.layout.ensure_frames_dir()?;
        let n = self.n_steps();
        for i in 0..n {
            let step_time = Instant::now();
            self.render_step(i)?;
            println!(
                "step {} of {}; time of step = {:.5}",
                i,
                n,
                step_time.elapsed().as_secs_f64()
            );
        }
        Ok(())
    }

    /// Loads the snapshot for step `i` and writes its frame, overwriting
    /// any previous one.
    pub fn render_step(&self, i: usize) -> Result<(), Box<dyn Error>> {
        let psi = snapshot::load_snapshot(&self.layout.snapshot(i))?;
        let a = snapshot::intensity(&psi);
        let colorbar = Colorbar::from_intensity(&a, COLORBAR_MAX);
        let title = frame_title(i, self.n_steps(), self.t[i]);
        plot_frame(&a, &self.grid, &colorbar, &title, &self.layout.frame(i))
    }
}

/// Title of frame `step`, quoting the physical time to 5 decimals.
fn frame_title(step: usize, n_steps: usize, t: F) -> String {
    format!("step={step} of {n_steps}; t = {t:.5} a.u.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_quotes_the_time_to_five_decimals() {
        assert_eq!(frame_title(0, 1, 0.0), "step=0 of 1; t = 0.00000 a.u.");
        assert_eq!(
            frame_title(12, 400, 0.123456789),
            "step=12 of 400; t = 0.12346 a.u."
        );
        assert_eq!(
            frame_title(399, 400, 25.5),
            "step=399 of 400; t = 25.50000 a.u."
        );
    }
}
