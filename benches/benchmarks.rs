criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        measuring_haversine_distance,
        estimating_sequential_threshold,
        clustering_archipelago_online,
        clustering_archipelago_batch,
        clustering_scatter_frontend,
        clustering_many_scatters,
}

fn measuring_haversine_distance(c: &mut criterion::Criterion) {
    let a = Point::random();
    let b = Point::random();
    c.bench_function("measure a haversine distance", |x| {
        x.iter(|| haversine(&a, &b))
    });
}

fn estimating_sequential_threshold(c: &mut criterion::Criterion) {
    let points = scatter(4096);
    c.bench_function("estimate threshold over 4096 points", |x| {
        x.iter(|| Threshold::estimate(&points, DEFAULT_BIAS))
    });
}

fn clustering_archipelago_online(c: &mut criterion::Criterion) {
    let points = archipelago(&ISLANDS, 256);
    let clusterer = Clusterer::default().with_bias(FRONTEND_BIAS);
    c.bench_function("cluster a 1024-point archipelago (online)", |x| {
        x.iter(|| clusterer.cluster_from(&points, 0))
    });
}

fn clustering_archipelago_batch(c: &mut criterion::Criterion) {
    let points = archipelago(&ISLANDS, 256);
    let clusterer = Clusterer::default()
        .with_bias(FRONTEND_BIAS)
        .with_visibility(Visibility::Batch);
    c.bench_function("cluster a 1024-point archipelago (batch)", |x| {
        x.iter(|| clusterer.cluster_from(&points, 0))
    });
}

fn clustering_scatter_frontend(c: &mut criterion::Criterion) {
    let points = scatter(50);
    let clusterer = Clusterer::default()
        .with_bias(FRONTEND_BIAS)
        .with_seed(Seed::Fixed(0));
    c.bench_function("cluster 50 scattered registry nodes", |x| {
        x.iter(|| clusterer.cluster(&points))
    });
}

fn clustering_many_scatters(c: &mut criterion::Criterion) {
    let sets = (0..32).map(|_| scatter(50)).collect::<Vec<_>>();
    let clusterer = Clusterer::default()
        .with_bias(FRONTEND_BIAS)
        .with_seed(Seed::Fixed(0));
    c.bench_function("cluster 32 independent sets in parallel", |x| {
        x.iter(|| clusterer.cluster_many(&sets))
    });
}

use geocluster::*;
