use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use housing_scrolly::api::{
    ChartConfig, ChartContext, ContainerSize, StepController, StepId, build_render_frame,
    parse_price_points, relayout,
};
use housing_scrolly::core::{LinearScale, PricePoint};
use housing_scrolly::render::svg_document;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const REGIONS: [&str; 10] = [
    "US",
    "New England",
    "Middle Atlantic",
    "East North Central",
    "West North Central",
    "South Atlantic",
    "East South Central",
    "West South Central",
    "Mountain",
    "Pacific",
];

/// Twenty years of monthly prices for every region.
fn generated_points() -> Vec<PricePoint> {
    let mut csv = String::from("month,region,price\n");
    for year in 0..20 {
        for (month_index, month) in MONTHS.iter().enumerate() {
            for (region_index, region) in REGIONS.iter().enumerate() {
                let price = 150_000 + region_index * 20_000 + year * 3_000 + month_index * 250;
                let _ = writeln!(csv, "{month}-{year:02},{region},{price}");
            }
        }
    }
    parse_price_points(csv.as_bytes()).expect("generated csv parses")
}

fn bench_parse_csv_2400_rows(c: &mut Criterion) {
    let mut csv = String::from("month,region,price\n");
    for year in 0..20 {
        for month in MONTHS {
            for region in REGIONS {
                let _ = writeln!(csv, "{month}-{year:02},{region},199500");
            }
        }
    }

    c.bench_function("parse_csv_2400_rows", |b| {
        b.iter(|| {
            let _ = parse_price_points(black_box(csv.as_bytes())).expect("parse");
        })
    });
}

fn bench_tick_generation(c: &mut Criterion) {
    let scale = LinearScale::new(144_000.0, 362_000.0).expect("valid scale");

    c.bench_function("linear_scale_ticks", |b| {
        b.iter(|| {
            let _ = black_box(scale).ticks(black_box(10));
        })
    });
}

fn bench_context_build(c: &mut Criterion) {
    let points = generated_points();

    c.bench_function("context_build_2400_points", |b| {
        b.iter(|| {
            let _ = ChartContext::new(ChartConfig::default(), black_box(&points)).expect("context");
        })
    });
}

fn bench_relayout(c: &mut Criterion) {
    let points = generated_points();
    let mut context = ChartContext::new(ChartConfig::default(), &points).expect("context");
    let sizes = [ContainerSize::new(800, 600), ContainerSize::new(1280, 900)];
    let mut toggle = 0;

    c.bench_function("relayout_2400_points", |b| {
        b.iter(|| {
            toggle ^= 1;
            let _ = relayout(&mut context, black_box(sizes[toggle])).expect("relayout");
        })
    });
}

fn bench_step_cycle(c: &mut Criterion) {
    let points = generated_points();
    let config = ChartConfig::default();
    let steps = StepController::from_config(&config);
    let mut context = ChartContext::new(config, &points).expect("context");

    c.bench_function("step_cycle_all_states", |b| {
        b.iter(|| {
            for step in StepId::ALL {
                let _ = steps.apply(&mut context, black_box(step)).expect("step");
            }
        })
    });
}

fn bench_svg_document(c: &mut Criterion) {
    let points = generated_points();
    let context = ChartContext::new(ChartConfig::default(), &points).expect("context");

    c.bench_function("svg_document_2400_points", |b| {
        b.iter(|| {
            let frame = build_render_frame(black_box(context.scene()));
            let _ = svg_document(&frame).expect("svg");
        })
    });
}

criterion_group!(
    benches,
    bench_parse_csv_2400_rows,
    bench_tick_generation,
    bench_context_build,
    bench_relayout,
    bench_step_cycle,
    bench_svg_document
);
criterion_main!(benches);
