use crate::config::{BASE_SIZE, COLORBAR_WIDTH, F};
use crate::space::Xgrid;
use colorous::{Gradient, TURBO};
use ndarray::{prelude::*, Zip};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

fn filled_style<Col: Into<RGBAColor>>(color: Col) -> ShapeStyle {
    ShapeStyle {
        color: color.into(),
        filled: true,
        stroke_width: 0,
    }
}

/// Color scale of a frame. Values outside [min, max] clamp to the ends of
/// the gradient, so anything at or above `max` takes the top color.
pub struct Colorbar {
    pub min: F,
    pub max: F,
    pub gradient: Gradient,
}

impl Colorbar {
    /// Scale with the fixed upper bound `max` and the frame's own minimum
    /// as lower bound. A degenerate range (whole frame at or above the
    /// cap, or no finite values) falls back to a lower bound of zero.
    pub fn from_intensity(intensity: &Array2<F>, max: F) -> Self {
        let mut min = intensity
            .iter()
            .cloned()
            .filter(|value| value.is_finite())
            .fold(F::INFINITY, F::min);
        if !min.is_finite() || min >= max {
            min = 0.0;
        }
        Self {
            min,
            max,
            gradient: TURBO,
        }
    }

    pub fn color(&self, value: F) -> RGBColor {
        let &Self {
            min,
            max,
            gradient: colormap,
        } = self;
        let value = value.max(min).min(max);
        let (r, g, b) = colormap
            .eval_continuous(((value - min) / (max - min)) as f64)
            .as_tuple();
        RGBColor(r, g, b)
    }

    /// Draws the gradient strip with a labelled axis on its right edge.
    fn draw(
        &self,
        area: &DrawingArea<BitMapBackend, Shift>,
        text_color: RGBColor,
    ) -> Result<(), Box<dyn Error>> {
        let &Self { min, max, .. } = self;
        let step = (max - min) / 256.0;
        let mut chart_context = ChartBuilder::on(area)
            .margin_top(10)
            .x_label_area_size(30)
            .y_label_area_size(0)
            .right_y_label_area_size(55)
            .build_cartesian_2d(0.0..1.0, min..max)?
            .set_secondary_coord(0.0..1.0, min..max);

        chart_context
            .configure_mesh()
            .set_all_tick_mark_size(0)
            .disable_x_axis()
            .disable_y_axis()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()?;

        chart_context
            .configure_secondary_axes()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()?;

        let plotting_area = chart_context.plotting_area();
        let values = Array1::range(min, max + step, step);
        for value in values {
            let color = self.color(value);
            let rectangle = Rectangle::new(
                [(0.0, value - step / 2.0), (1.0, value + step / 2.0)],
                filled_style(color),
            );
            plotting_area.draw(&rectangle)?;
        }
        Ok(())
    }
}

/// Draws one rectangle per mesh cell, colored by the intensity there.
fn heatmap(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    intensity: &Array2<F>,
    grid: &Xgrid,
    colorbar: &Colorbar,
) -> Result<(), Box<dyn Error>> {
    assert_eq!(
        intensity.dim(),
        grid.shape(),
        "snapshot shape does not match the grid"
    );

    let mut chart_context = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(25)
        .y_label_area_size(25)
        .build_cartesian_2d(
            grid.x[0]..grid.x[grid.x.len() - 1],
            grid.y[0]..grid.y[grid.y.len() - 1],
        )?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .set_all_tick_mark_size(5)
        .x_desc("x0")
        .y_desc("x1")
        .draw()?;

    let plotting_area = chart_context.plotting_area();
    let (x_step, y_step) = grid.steps();

    Zip::from(&grid.x_mesh)
        .and(&grid.y_mesh)
        .and(intensity)
        .for_each(|&x, &y, &f| {
            let rectangle = Rectangle::new(
                [
                    (x - x_step / 2.0, y - y_step / 2.0),
                    (x + x_step / 2.0, y + y_step / 2.0),
                ],
                filled_style(colorbar.color(f)),
            );
            plotting_area.draw(&rectangle).unwrap();
        });

    Ok(())
}

/// Renders one frame: an equal-aspect pseudocolor plot of the intensity
/// over the grid, with the color bar on the right. The drawing surface
/// lives only for this call.
pub fn plot_frame(
    intensity: &Array2<F>,
    grid: &Xgrid,
    colorbar: &Colorbar,
    title: &str,
    save_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let (plot_width, plot_height) = plot_size(grid);
    let drawing_area =
        BitMapBackend::new(save_path, (plot_width + COLORBAR_WIDTH, plot_height))
            .into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let (left, right) = drawing_area.split_horizontally(plot_width);
    colorbar.draw(&right, BLACK)?;
    heatmap(&left, title, intensity, grid, colorbar)?;

    drawing_area.present()?;
    Ok(())
}

/// Pixel size of the plot area so that a data unit spans the same number
/// of pixels along both axes.
fn plot_size(grid: &Xgrid) -> (u32, u32) {
    let x_range = grid.x[grid.x.len() - 1] - grid.x[0];
    let y_range = grid.y[grid.y.len() - 1] - grid.y[0];
    let aspect_ratio = if y_range > 0.0 { x_range / y_range } else { 1.0 };

    if aspect_ratio > 1.0 {
        (
            BASE_SIZE.round() as u32,
            (BASE_SIZE / aspect_ratio).round() as u32,
        )
    } else {
        (
            (BASE_SIZE * aspect_ratio).round() as u32,
            BASE_SIZE.round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COLORBAR_MAX;

    #[test]
    fn values_at_or_above_the_cap_saturate() {
        let colorbar = Colorbar {
            min: 0.0,
            max: COLORBAR_MAX,
            gradient: TURBO,
        };
        let top = colorbar.color(COLORBAR_MAX);
        assert_eq!(colorbar.color(2e-7), top);
        assert_eq!(colorbar.color(1.0), top);
        assert_ne!(colorbar.color(0.0), top);
    }

    #[test]
    fn saturated_frame_falls_back_to_zero_lower_bound() {
        let intensity = Array2::from_elem((2, 2), 1.0);
        let colorbar = Colorbar::from_intensity(&intensity, COLORBAR_MAX);
        assert_eq!(colorbar.min, 0.0);
        assert_eq!(colorbar.max, COLORBAR_MAX);
    }

    #[test]
    fn lower_bound_is_the_frame_minimum() {
        let intensity = array![[1e-9, 2e-9], [5e-8, 3e-9]];
        let colorbar = Colorbar::from_intensity(&intensity, COLORBAR_MAX);
        assert_eq!(colorbar.min, 1e-9);
    }

    #[test]
    fn writes_a_frame_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("frame.png");

        let grid = Xgrid::new(
            Array1::linspace(-1.0, 1.0, 8),
            Array1::linspace(-1.0, 1.0, 8),
        );
        let intensity = Array2::from_elem((8, 8), 5e-8);
        let colorbar = Colorbar::from_intensity(&intensity, COLORBAR_MAX);

        plot_frame(&intensity, &grid, &colorbar, "step=0 of 1; t = 0.00000 a.u.", &path)
            .unwrap();
        assert!(path.is_file());
        assert!(path.metadata().unwrap().len() > 0);
    }
}
