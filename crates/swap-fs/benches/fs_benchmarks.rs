use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use swap_fs::io;
use swap_fs::{NativeTree, NormalizedPath, TreeOps};
use tempfile::tempdir;

fn write_atomic_benchmark(c: &mut Criterion) {
    c.bench_function("io::write_atomic (pointer)", |b| {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join(".swap_for_current"));

        b.iter(|| {
            io::write_atomic(black_box(&path), black_box(b"work")).unwrap();
        })
    });
}

fn copy_tree_benchmark(c: &mut Criterion) {
    c.bench_function("tree::NativeTree::copy_tree (200 files)", |b| {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        for pkg in 0..20 {
            let pkg_dir = src.join("elpa").join(format!("pkg-{pkg}"));
            fs::create_dir_all(&pkg_dir).unwrap();
            for file in 0..10 {
                fs::write(pkg_dir.join(format!("f{file}.el")), ";; bench\n".repeat(64)).unwrap();
            }
        }
        let src = NormalizedPath::new(&src);
        let dst = NormalizedPath::new(dir.path().join("dst"));

        b.iter(|| {
            NativeTree.remove_tree(&dst).unwrap();
            NativeTree.copy_tree(black_box(&src), black_box(&dst)).unwrap();
        })
    });
}

criterion_group!(benches, write_atomic_benchmark, copy_tree_benchmark);
criterion_main!(benches);
