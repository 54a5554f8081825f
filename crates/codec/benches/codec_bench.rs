//! 코덱 벤치마크
//!
//! 인벤토리 인코딩/디코딩과 텍스트/바이너리 마샬링 성능을 측정합니다.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use scanwire_codec::io::{marshal, unmarshal};
use scanwire_codec::{FileFormat, InventoryCodec, wire};
use scanwire_core::metadata::{DpkgMetadata, PythonPackageMetadata};
use scanwire_core::model::{Inventory, Metadata, Package, PackageVuln, Vulnerability};

fn inventory(packages: usize) -> Inventory {
    let mut inventory = Inventory::default();
    for i in 0..packages {
        let metadata = if i % 2 == 0 {
            Metadata::new(DpkgMetadata {
                package_name: format!("lib{i}"),
                os_id: "debian".to_owned(),
                architecture: "amd64".to_owned(),
                ..Default::default()
            })
        } else {
            Metadata::new(PythonPackageMetadata {
                author: "PSF".to_owned(),
                author_email: "psf@python.org".to_owned(),
            })
        };
        inventory.packages.push(Arc::new(Package {
            name: format!("pkg-{i}"),
            version: "1.0.0".to_owned(),
            purl_type: if i % 2 == 0 { "deb" } else { "pypi" }.to_owned(),
            plugins: vec!["bench".to_owned()],
            metadata: Some(metadata),
            ..Default::default()
        }));
    }
    for pkg in inventory.packages.iter().step_by(10) {
        inventory.package_vulns.push(PackageVuln::new(
            Vulnerability {
                id: format!("CVE-2024-{}", pkg.name.len()),
                ..Default::default()
            },
            Arc::clone(pkg),
        ));
    }
    inventory
}

fn bench_inventory(c: &mut Criterion) {
    let codec = InventoryCodec::new().expect("codec");
    let mut group = c.benchmark_group("inventory");

    for size in [100usize, 1_000, 10_000] {
        let inv = inventory(size);
        let encoded = codec.encode_inventory(&inv).expect("encode");
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &inv, |b, inv| {
            b.iter(|| codec.encode_inventory(black_box(inv)).expect("encode"));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, wire| {
            b.iter(|| codec.decode_inventory(black_box(wire)));
        });
    }
    group.finish();
}

fn bench_marshal(c: &mut Criterion) {
    let codec = InventoryCodec::new().expect("codec");
    let message: wire::Inventory = codec.encode_inventory(&inventory(1_000)).expect("encode");
    let mut group = c.benchmark_group("marshal");

    for format in [
        FileFormat::TEXT,
        FileFormat::BINARY,
        FileFormat::TEXT.with_gzip(true),
        FileFormat::BINARY.with_gzip(true),
    ] {
        let bytes = marshal(&message, format).expect("marshal");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        let name = format.to_string();

        group.bench_function(BenchmarkId::new("marshal", &name), |b| {
            b.iter(|| marshal(black_box(&message), format).expect("marshal"));
        });
        group.bench_function(BenchmarkId::new("unmarshal", &name), |b| {
            b.iter(|| {
                unmarshal::<wire::Inventory>(black_box(&bytes), format).expect("unmarshal")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inventory, bench_marshal);
criterion_main!(benches);
