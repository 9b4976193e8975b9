use anyhow::Result;
use plotters::prelude::*;

pub const BAR_LABELS: [&str; 3] = ["Resume", "Job Description", "Matched"];

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const BAR_COLORS: [RGBColor; 3] = [BLUE, GREEN, PURPLE];

const CHART_SIZE: (u32, u32) = (640, 420);

/// Draws the three-bar skill comparison as an inline SVG document.
/// Bar heights are the sizes of the resume, job and matched skill sets.
pub fn render_skill_chart(resume: usize, job: usize, matched: usize) -> Result<String> {
    let counts = [resume as u32, job as u32, matched as u32];
    // Leave headroom above the tallest bar; keep a visible axis when all are zero.
    let y_max = counts.iter().copied().max().unwrap_or(0) + 1;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Skill Comparison", ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..2u32).into_segmented(), 0u32..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Number of Skills")
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => BAR_LABELS
                    .get(*i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()?;

        for (i, (count, color)) in counts.iter().zip(BAR_COLORS.iter()).enumerate() {
            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(color.filled())
                    .margin(20)
                    .data(std::iter::once((i as u32, *count))),
            )?;
        }

        root.present()?;
    }

    Ok(svg)
}
