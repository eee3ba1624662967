use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use swatch_deflate::{calc_adler_hash, DeflateEncoder};

fn encode_writer_swatch(bytes: &[u8]) -> Vec<u8> {
    DeflateEncoder::new(bytes).encode_zlib()
}

fn encode_test(c: &mut Criterion) {
    // an 87x87 icon raster, and something a lot larger
    for (name, len) in [("icon@3x", 87 * (1 + 87 * 3)), ("1024x1024", 1024 * (1 + 1024 * 3))] {
        let data = vec![51_u8; len];

        let mut group = c.benchmark_group(format!("ZLIB stored encoding {name}"));
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_function("SWATCH", |b| {
            b.iter(|| black_box(encode_writer_swatch(data.as_slice())))
        });
        group.bench_function("ADLER", |b| {
            b.iter(|| black_box(calc_adler_hash(data.as_slice())))
        });
        group.finish();
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(5))
      };
    targets=encode_test);

criterion_main!(benches);
