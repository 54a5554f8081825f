#![no_main]

use libfuzzer_sys::fuzz_target;
use scanwire_codec::io::unmarshal;
use scanwire_codec::{FileFormat, wire};

fuzz_target!(|data: &[u8]| {
    // 압축 여부와 관계없이 임의 바이트는 에러로 끝나야 하며 패닉하면 안 됨
    for format in [FileFormat::BINARY, FileFormat::BINARY.with_gzip(true)] {
        if let Ok(message) = unmarshal::<wire::ScanResult>(data, format) {
            let result = scanwire_codec::global().decode_scan_result(&message);
            // 디코딩된 결과의 재인코딩은 거부될 수 있지만 패닉하면 안 됨
            let _ = scanwire_codec::global().encode_scan_result(&result);
        }
    }
});
