use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scene_reflow::{format_scene_content, get_formatting_stats, validate_scene_formatting};

// One scene unit mixing an oversized description, clean description, and
// dialogue, so every pipeline stage does real work.
const SCENE_UNIT: &str = "The corridor stretched on. Dust settled in the light. Every door was shut. Nobody had passed this way in years. The air tasted of iron.\n\n\"Keep moving,\" she whispered. \"We are close now.\"\n\nDr. Hale checked the map again. The markings had faded.\n\n";

/// Build a scene of at least `target_bytes` of prose
fn build_scene(target_bytes: usize) -> String {
    let repeats = target_bytes / SCENE_UNIT.len() + 1;
    let mut scene = SCENE_UNIT.repeat(repeats);
    let trimmed = scene.trim_end().len();
    scene.truncate(trimmed);
    scene
}

fn bench_megabyte_scene(c: &mut Criterion) {
    let scene = build_scene(1024 * 1024);

    let mut group = c.benchmark_group("megabyte_scene");
    group.throughput(Throughput::Bytes(scene.len() as u64));
    group.sample_size(10);

    group.bench_function("format", |b| {
        b.iter(|| format_scene_content(black_box(&scene)))
    });
    group.bench_function("validate", |b| {
        b.iter(|| validate_scene_formatting(black_box(&scene)))
    });
    group.bench_function("stats", |b| {
        b.iter(|| get_formatting_stats(black_box(&scene)))
    });
    group.finish();
}

fn bench_short_scene(c: &mut Criterion) {
    let scene = build_scene(4 * 1024);

    let mut group = c.benchmark_group("short_scene");
    group.throughput(Throughput::Bytes(scene.len() as u64));
    group.bench_function("format", |b| {
        b.iter(|| format_scene_content(black_box(&scene)))
    });
    group.finish();
}

criterion_group!(benches, bench_megabyte_scene, bench_short_scene);
criterion_main!(benches);
