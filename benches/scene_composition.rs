use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_viewer::camera::Steering;
use scene_viewer::draw::Painter;
use scene_viewer::renderer::pass_vertices;
use scene_viewer::texture::TextureSet;
use scene_viewer::traits::SceneProvider;
use scene_viewer::{create_house_scene, create_owl_scene, SceneKind, Session};

/// Benchmark: recording the 3D draw ops for each scene
fn bench_compose(c: &mut Criterion) {
    let house = create_house_scene();
    let owl = create_owl_scene();

    c.bench_function("compose_house", |b| {
        b.iter(|| {
            let mut painter = Painter::new();
            house.compose(&mut painter);
            black_box(painter.finish())
        })
    });

    c.bench_function("compose_owl", |b| {
        b.iter(|| {
            let mut painter = Painter::new();
            owl.compose(&mut painter);
            black_box(painter.finish())
        })
    });
}

/// Benchmark: full frame including triangulation to GPU vertices
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_vertices");
    for kind in [SceneKind::House, SceneKind::Owl] {
        let session = Session::new(kind.build(), Steering::default());
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", kind)), &session, |b, session| {
            b.iter(|| {
                let frame = session.render();
                let count: usize = frame.passes.iter().map(|p| pass_vertices(p).len()).sum();
                black_box(count)
            })
        });
    }
    group.finish();
}

/// Benchmark: texture synthesis at start-up
fn bench_textures(c: &mut Criterion) {
    c.bench_function("synthesize_textures", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(black_box(3));
            black_box(TextureSet::synthesize(&mut rng))
        })
    });
}

criterion_group!(benches, bench_compose, bench_frame, bench_textures);
criterion_main!(benches);
