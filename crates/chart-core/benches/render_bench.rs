use anyhow::Result;
use chart_core::{Chart, LineStyle, MarkerStyle, RenderOptions, Series, SeriesType};
use chart_core::skia::Color;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("bench");
    ch.legend = true;
    let line = |phase: f64| -> Vec<(f64, f64)> {
        (0..n).map(|i| (i as f64, ((i as f64) * 0.01 + phase).sin() * 10.0)).collect()
    };
    ch.add_series(Series::with_data(SeriesType::Line, line(0.0)).with_label("dashed").with_line(LineStyle::dashed(2.0)));
    for k in 1..=4 {
        ch.add_series(Series::with_data(SeriesType::Line, line(k as f64)).with_label(format!("line {k}")));
    }
    let every_third = line(0.0).into_iter().step_by(3).collect();
    ch.add_series(Series::with_data(SeriesType::Scatter, every_third).with_marker(MarkerStyle::circle(6.0, Color::RED)));
    ch.autoscale_axes(chart_core::DEFAULT_MARGIN);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 20_000usize] {
        group.bench_function(format!("perf_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
