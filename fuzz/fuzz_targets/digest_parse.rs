#![no_main]

use libfuzzer_sys::fuzz_target;
use scanwire_core::model::Digest;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        if let Ok(digest) = Digest::parse(value) {
            // 파싱에 성공한 값은 문자열 표현이 보존되어야 함
            let reparsed = Digest::parse(&digest.to_string()).expect("display output must parse");
            assert_eq!(reparsed, digest);
        }
    }
});
