/// Chart rendering: success rate vs rejection threshold, one panel per
/// pool size, with the 1/e optimum overlaid as reference lines.
///
/// Strictly a downstream consumer of computed sweep data. A rendering
/// failure here never invalidates the simulation results — the caller
/// downgrades it to a warning.
use std::error::Error;
use std::path::Path;

use optstop_core::{SweepResult, TheoreticalSummary};
use plotters::prelude::*;

const PANEL_WIDTH: u32 = 700;
const PANEL_HEIGHT: u32 = 500;

/// Render all sweeps side by side and save the figure to `out_path`.
pub fn render(
    out_path: &Path,
    sweeps: &[SweepResult],
    theory: &TheoreticalSummary,
) -> Result<(), Box<dyn Error>> {
    assert!(!sweeps.is_empty(), "nothing to render");

    let width = PANEL_WIDTH * sweeps.len() as u32;
    let root = BitMapBackend::new(out_path, (width, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, sweeps.len()));

    for (panel, sweep) in panels.iter().zip(sweeps) {
        draw_panel(panel, sweep, theory)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, plotters::coord::Shift>,
    sweep: &SweepResult,
    theory: &TheoreticalSummary,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let optimal_pct = theory.optimal_fraction * 100.0;
    let optimal_rate = theory.optimal_success_probability;

    // Y range from the data (±SE), padded, always covering the 1/e line.
    let mut y_min = optimal_rate;
    let mut y_max = optimal_rate;
    for p in &sweep.points {
        y_min = y_min.min(p.success_rate - p.standard_error);
        y_max = y_max.max(p.success_rate + p.standard_error);
    }
    let pad = 0.1 * (y_max - y_min).max(0.05);
    let y_range = (y_min - pad)..(y_max + pad);

    let mut chart = ChartBuilder::on(panel)
        .caption(
            format!("Secretary Problem: {} Candidates", sweep.pool_size),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..100.0f64, y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("Rejection Threshold (%)")
        .y_desc("Success Rate (Probability of Picking Best)")
        .draw()?;

    // Theoretical optimum: vertical line at 1/e percent, horizontal at 1/e.
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(optimal_pct, y_range.start), (optimal_pct, y_range.end)],
            RED.mix(0.7).stroke_width(2),
        )))?
        .label(format!("Optimal: {optimal_pct:.1}%"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.7)));
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, optimal_rate), (100.0, optimal_rate)],
        RED.mix(0.35),
    )))?;

    // Simulated curve with ±SE error bars.
    let curve: Vec<(f64, f64)> = sweep
        .points
        .iter()
        .map(|p| (p.rejection_fraction * 100.0, p.success_rate))
        .collect();
    chart
        .draw_series(LineSeries::new(curve.clone(), BLUE.stroke_width(2)))?
        .label("Simulated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let cap = 0.8f64;
    for p in &sweep.points {
        let x = p.rejection_fraction * 100.0;
        let y0 = p.success_rate - p.standard_error;
        let y1 = p.success_rate + p.standard_error;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, y0), (x, y1)],
            BLUE.mix(0.8),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - cap, y0), (x + cap, y0)],
            BLUE.mix(0.8),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - cap, y1), (x + cap, y1)],
            BLUE.mix(0.8),
        )))?;
    }
    chart.draw_series(
        curve
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
