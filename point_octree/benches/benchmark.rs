use criterion::{AxisScale, BenchmarkGroup, BenchmarkId, Criterion, PlotConfiguration};

use point_octree::prelude::*;
use rand::prelude::*;

type Scalar = f32;
type Point = [Scalar; 3];

const HALF_EXTENT: Scalar = 5e3;

fn gen_range_point(rng: &mut StdRng, range: std::ops::RangeInclusive<Scalar>) -> Point {
    [0.0; 3].map(|_: Scalar| rng.gen_range(range.clone()))
}

pub fn random_points(rng: &mut StdRng, len: usize) -> Vec<Point> {
    (0..len)
        .map(|_| gen_range_point(rng, -HALF_EXTENT..=HALF_EXTENT))
        .collect()
}

pub fn random_boxes(rng: &mut StdRng, len: usize, size: Scalar) -> Vec<BoundingBox<Point>> {
    (0..len)
        .map(|_| {
            let min = gen_range_point(rng, -HALF_EXTENT..=HALF_EXTENT - size);
            BoundingBox::new(min, min.map(|c| c + size))
        })
        .collect()
}

fn build(points: &[Point]) -> Octree<Point, Scalar> {
    let mut octree = Octree::new([0.0; 3], [HALF_EXTENT; 3]);
    octree.insert_all(points.iter().copied()).unwrap();
    octree
}

#[inline]
fn bench_queries(
    octree: &Octree<Point, Scalar>,
    boxes: &[BoundingBox<Point>],
    len: usize,
    name: &str,
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
) {
    group.bench_function(BenchmarkId::new(name, len), |bencher| {
        let mut found = Vec::new();
        bencher.iter(|| {
            for bbox in boxes {
                found.clear();
                octree.query_box(bbox, &mut found).unwrap();
            }
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Octree");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(1))
        .sample_size(15);

    let point_count_iterator = (1..17).map(|i| 2usize.pow(i));

    let g = &mut group;
    for len in point_count_iterator {
        let rng = &mut StdRng::seed_from_u64(1808);
        let points = random_points(rng, len);

        g.bench_function(BenchmarkId::new("insert", len), |bencher| {
            bencher.iter(|| build(&points))
        });

        let octree = build(&points);
        let small = random_boxes(rng, 64, HALF_EXTENT / 50.0);
        let large = random_boxes(rng, 64, HALF_EXTENT / 2.0);

        bench_queries(&octree, &small, len, "query_box::small", g);
        bench_queries(&octree, &large, len, "query_box::large", g);

        #[cfg(feature = "parallel")]
        g.bench_function(BenchmarkId::new("par_query_boxes::small", len), |bencher| {
            bencher.iter(|| octree.par_query_boxes(&small).unwrap())
        });
    }

    group.finish();
}

criterion::criterion_group!(benches, criterion_benchmark);
criterion::criterion_main!(benches);
