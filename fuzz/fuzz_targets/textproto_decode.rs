#![no_main]

use libfuzzer_sys::fuzz_target;
use scanwire_codec::io::unmarshal;
use scanwire_codec::{FileFormat, wire};

fuzz_target!(|data: &[u8]| {
    if let Ok(inventory) = unmarshal::<wire::Inventory>(data, FileFormat::TEXT) {
        let decoded = scanwire_codec::global().decode_inventory(&inventory);
        // 모든 취약점은 디코딩된 패키지 목록 안의 패키지를 가리켜야 함
        for vuln in &decoded.package_vulns {
            assert!(
                decoded
                    .packages
                    .iter()
                    .any(|pkg| std::sync::Arc::ptr_eq(pkg, &vuln.package)),
                "decoded vuln points outside the inventory"
            );
        }
    }
});
