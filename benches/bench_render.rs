use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use lissajous_lib::animation::{AnimationConfig, lissajous};
use lissajous_lib::palette::Palette;
use lissajous_lib::raster::rasterize;

fn bench_rasterize_frame(c: &mut Criterion) {
    let config = AnimationConfig::default();
    let palette = Palette::default();
    let params = config.curve(5.0, 1.3, 0.0);
    c.bench_function("rasterize_frame_5_cycles", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| rasterize(&params, &palette, &mut rng))
    });
}

fn bench_full_gif(c: &mut Criterion) {
    c.bench_function("lissajous_gif_5_cycles", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let mut buf = Vec::with_capacity(256 * 1024);
            let _ = lissajous(&mut buf, 5, &mut rng);
            buf
        })
    });
}

criterion_group!(benches, bench_rasterize_frame, bench_full_gif);
criterion_main!(benches);
