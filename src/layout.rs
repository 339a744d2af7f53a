use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed directory layout of a simulation run. Everything lives under the
/// parent of the working directory: the simulation leaves its arrays in
/// `<parent>/arrays_saved/`, rendered frames go to `<parent>/imgs/`.
#[derive(Debug, Clone)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Layout rooted at the parent of the current working directory.
    pub fn from_cwd() -> io::Result<Self> {
        let cwd = env::current_dir()?;
        let base = cwd.parent().map(Path::to_path_buf).unwrap_or(cwd);
        Ok(Self::new(base))
    }

    /// Path of the saved axis array `x{index}.npy`.
    pub fn axis(&self, index: usize) -> PathBuf {
        self.base.join("arrays_saved").join(format!("x{index}.npy"))
    }

    /// Path of the saved time grid.
    pub fn time_grid(&self) -> PathBuf {
        self.base.join("arrays_saved/time_evol/t.npy")
    }

    /// Path of the wavefunction snapshot saved for `step`.
    pub fn snapshot(&self, step: usize) -> PathBuf {
        self.base
            .join("arrays_saved/time_evol/psi_x")
            .join(format!("psi_t_{step}.npy"))
    }

    pub fn frames_dir(&self) -> PathBuf {
        self.base.join("imgs/time_evol/psi_x")
    }

    /// Path of the rendered frame for `step`.
    pub fn frame(&self, step: usize) -> PathBuf {
        self.frames_dir().join(format!("psi_t_{step}.png"))
    }

    /// Creates the frame directory with any missing intermediates.
    /// Does nothing if it already exists.
    pub fn ensure_frames_dir(&self) -> io::Result<()> {
        fs::create_dir_all(self.frames_dir())
    }
}
