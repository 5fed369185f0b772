//! Throughput of the core scans: validation, root length, extension and parent lookup.
//!
//! Every operation is a pure function of its input, so these numbers are the whole cost;
//! there is no I/O to amortize.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use portable_path::{
    change_extension, get_directory_name, get_extension, has_illegal_characters, root_length,
    SeparatorConfig,
};
use portable_path_benches::{deep_path, POSIX_PATHS, WINDOWS_PATHS};
use std::hint::black_box;

type Corpus = (&'static str, SeparatorConfig, &'static [&'static str]);

fn corpora() -> [Corpus; 2] {
    [
        ("windows", SeparatorConfig::WINDOWS, WINDOWS_PATHS),
        ("posix", SeparatorConfig::POSIX, POSIX_PATHS),
    ]
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    for (name, config, paths) in corpora() {
        group.throughput(Throughput::Elements(paths.len() as u64));

        group.bench_function(BenchmarkId::new("root_length", name), |b| {
            b.iter(|| {
                for p in paths {
                    black_box(root_length(black_box(p), &config).ok());
                }
            })
        });
        group.bench_function(BenchmarkId::new("get_extension", name), |b| {
            b.iter(|| {
                for p in paths {
                    black_box(get_extension(Some(black_box(*p)), &config).ok());
                }
            })
        });
        group.bench_function(BenchmarkId::new("change_extension", name), |b| {
            b.iter(|| {
                for p in paths {
                    black_box(change_extension(Some(black_box(*p)), Some(".out"), &config).ok());
                }
            })
        });
        group.bench_function(BenchmarkId::new("get_directory_name", name), |b| {
            b.iter(|| {
                for p in paths {
                    black_box(get_directory_name(Some(black_box(*p)), &config).ok());
                }
            })
        });
    }
    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let config = SeparatorConfig::POSIX;
    for depth in [4usize, 32, 256] {
        let path = deep_path(config.directory_separator, depth);
        group.throughput(Throughput::Bytes(path.len() as u64));
        group.bench_with_input(BenchmarkId::new("validate", depth), &path, |b, p| {
            b.iter(|| black_box(has_illegal_characters(black_box(p), true)))
        });
        group.bench_with_input(
            BenchmarkId::new("get_directory_name", depth),
            &path,
            |b, p| {
                b.iter(|| {
                    black_box(get_directory_name(Some(black_box(p.as_str())), &config).ok())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_operations, bench_scaling);
criterion_main!(benches);
