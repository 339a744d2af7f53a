use psi_frames::layout::Layout;
use psi_frames::render::FrameRenderer;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    // the simulation run is laid out around the parent of the working
    // directory: arrays_saved/ in, imgs/ out
    let layout = Layout::from_cwd()?;

    let renderer = FrameRenderer::init(layout)?;

    let total_time = Instant::now();
    renderer.render_all()?;
    println!("total_time = {:.3}", total_time.elapsed().as_secs_f32());
    Ok(())
}
