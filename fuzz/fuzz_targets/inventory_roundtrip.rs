#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scanwire_codec::io::{marshal, unmarshal};
use scanwire_codec::{FileFormat, wire};
use scanwire_core::metadata::DpkgMetadata;
use scanwire_core::model::{Inventory, Metadata, Package, PackageVuln, Vulnerability};

/// 퍼저용 구조적 인벤토리 입력
#[derive(Arbitrary, Debug)]
struct FuzzInventory {
    packages: Vec<FuzzPackage>,
    /// 취약점이 가리킬 패키지 위치 (패키지 수로 나눈 나머지)
    vulns: Vec<(u8, String)>,
    gzip: bool,
    text: bool,
}

#[derive(Arbitrary, Debug)]
struct FuzzPackage {
    name: String,
    version: String,
    purl_type: String,
    dpkg_source: Option<String>,
}

fuzz_target!(|input: FuzzInventory| {
    let mut inventory = Inventory::default();
    for p in input.packages.iter().take(64) {
        inventory.packages.push(Arc::new(Package {
            name: p.name.clone(),
            version: p.version.clone(),
            purl_type: p.purl_type.clone(),
            metadata: p.dpkg_source.as_ref().map(|source| {
                Metadata::new(DpkgMetadata {
                    package_name: p.name.clone(),
                    source_name: source.clone(),
                    ..Default::default()
                })
            }),
            ..Default::default()
        }));
    }
    if !inventory.packages.is_empty() {
        for (target, id) in input.vulns.iter().take(64) {
            let pkg = &inventory.packages[usize::from(*target) % inventory.packages.len()];
            inventory.package_vulns.push(PackageVuln::new(
                Vulnerability {
                    id: id.clone(),
                    ..Default::default()
                },
                Arc::clone(pkg),
            ));
        }
    }

    let codec = scanwire_codec::global();
    let encoded = codec.encode_inventory(&inventory).expect("well-formed inventory must encode");

    let format = if input.text { FileFormat::TEXT } else { FileFormat::BINARY }.with_gzip(input.gzip);
    let bytes = marshal(&encoded, format).expect("marshal");
    let read: wire::Inventory = unmarshal(&bytes, format).expect("unmarshal own output");
    assert_eq!(read, encoded);

    let decoded = codec.decode_inventory(&read);
    assert_eq!(decoded.packages.len(), inventory.packages.len());
    assert_eq!(decoded.package_vulns.len(), inventory.package_vulns.len());
    for (before, after) in inventory.package_vulns.iter().zip(&decoded.package_vulns) {
        assert_eq!(before.package.name, after.package.name);
        assert_eq!(before.package.version, after.package.version);
    }
});
