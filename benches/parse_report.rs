// benches/parse_report.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use beach_report::{
    config::options::WidgetSize,
    specs::water_quality,
    widget,
};

fn load_sample() -> String {
    std::fs::read_to_string("tests/fixtures/water_quality.html")
        .expect("read tests/fixtures/water_quality.html")
}

fn bench_report(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("parse_report_first_row", |b| {
        b.iter(|| {
            let snap = water_quality::parse_report(black_box(&doc), black_box("Brighton"));
            black_box(snap.today.quality.len())
        })
    });

    c.bench_function("parse_report_last_table", |b| {
        b.iter(|| {
            let snap = water_quality::parse_report(black_box(&doc), black_box("Cowes"));
            black_box(snap.today.quality.len())
        })
    });

    c.bench_function("parse_report_missing", |b| {
        b.iter(|| {
            let snap = water_quality::parse_report(black_box(&doc), black_box("Frankston"));
            black_box(snap.updated.is_some())
        })
    });

    let snap = water_quality::parse_report(&doc, "Hampton");
    c.bench_function("render_widget", |b| {
        b.iter(|| {
            let w = widget::render_widget_for_year(black_box(&snap), "Hampton", WidgetSize::Large, 2026);
            black_box(w.root.children.len())
        })
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
