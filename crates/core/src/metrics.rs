//! 메트릭 상수 및 설명 등록
//!
//! 코덱이 기록하는 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 모듈은 이 상수를 사용하여 `metrics::counter!()`,
//! `metrics::histogram!()` 매크로를 호출합니다.
//! 익스포터는 설치하지 않으며, 레코더가 없으면 기록은 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `scanwire_`
//! - 모듈명: `codec_`
//! - 접미어: `_total` (counter), `_bytes` (histogram)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(scanwire_core::metrics::CODEC_PACKAGES_ENCODED_TOTAL).increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 사유 레이블 키 (degraded/rejected 분류)
pub const LABEL_REASON: &str = "reason";

/// 파일 형식 레이블 키 (textproto, binproto)
pub const LABEL_FORMAT: &str = "format";

// ─── 레이블 값 상수 (reason) ───────────────────────────────────────

/// 등록되지 않은 메타데이터/시크릿 와이어 변형
pub const REASON_UNKNOWN_VARIANT: &str = "unknown_variant";

/// 스키마에 없는 필드 (더 새로운 작성자의 파일)
pub const REASON_UNKNOWN_FIELD: &str = "unknown_field";

/// 범위를 벗어난 (컨테이너, 레이어) 인덱스 쌍
pub const REASON_LAYER_OUT_OF_RANGE: &str = "layer_out_of_range";

/// 중복 패키지 식별자
pub const REASON_DUPLICATE_PACKAGE_ID: &str = "duplicate_package_id";

/// 해석할 수 없는 패키지 식별자
pub const REASON_UNRESOLVED_PACKAGE_ID: &str = "unresolved_package_id";

/// 형식이 잘못된 다이제스트
pub const REASON_INVALID_DIGEST: &str = "invalid_digest";

/// 형식이 잘못된 시크릿 (위치 개수, 자격 증명 종류)
pub const REASON_MALFORMED_SECRET: &str = "malformed_secret";

// ─── Codec 메트릭 ──────────────────────────────────────────────────

/// Codec: 인코딩된 패키지 수 (counter)
pub const CODEC_PACKAGES_ENCODED_TOTAL: &str = "scanwire_codec_packages_encoded_total";

/// Codec: 디코딩된 패키지 수 (counter)
pub const CODEC_PACKAGES_DECODED_TOTAL: &str = "scanwire_codec_packages_decoded_total";

/// Codec: 인코딩 거부 횟수 (counter, label: reason)
pub const CODEC_ENCODE_REJECTED_TOTAL: &str = "scanwire_codec_encode_rejected_total";

/// Codec: 디코딩 중 값을 버리거나 대체한 횟수 (counter, label: reason)
pub const CODEC_DECODE_DEGRADED_TOTAL: &str = "scanwire_codec_decode_degraded_total";

/// Codec: 기록한 결과 파일 수 (counter, label: format)
pub const CODEC_FILES_WRITTEN_TOTAL: &str = "scanwire_codec_files_written_total";

/// Codec: 읽은 결과 파일 수 (counter, label: format)
pub const CODEC_FILES_READ_TOTAL: &str = "scanwire_codec_files_read_total";

/// Codec: 마샬링된 메시지 크기 (histogram, 바이트)
pub const CODEC_MARSHALED_BYTES: &str = "scanwire_codec_marshaled_bytes";

/// 모든 메트릭 이름 목록
pub const ALL_METRIC_NAMES: &[&str] = &[
    CODEC_PACKAGES_ENCODED_TOTAL,
    CODEC_PACKAGES_DECODED_TOTAL,
    CODEC_ENCODE_REJECTED_TOTAL,
    CODEC_DECODE_DEGRADED_TOTAL,
    CODEC_FILES_WRITTEN_TOTAL,
    CODEC_FILES_READ_TOTAL,
    CODEC_MARSHALED_BYTES,
];

/// 모든 메트릭의 설명을 등록합니다.
///
/// 레코더 설치 직후 한 번 호출합니다.
pub fn describe_all() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(
        CODEC_PACKAGES_ENCODED_TOTAL,
        "Total number of packages converted to the wire format"
    );
    describe_counter!(
        CODEC_PACKAGES_DECODED_TOTAL,
        "Total number of packages reconstructed from the wire format"
    );
    describe_counter!(
        CODEC_ENCODE_REJECTED_TOTAL,
        "Encode attempts rejected for structural reasons, by reason"
    );
    describe_counter!(
        CODEC_DECODE_DEGRADED_TOTAL,
        "Values dropped or defaulted while decoding, by reason"
    );
    describe_counter!(
        CODEC_FILES_WRITTEN_TOTAL,
        "Scan result files written, by format"
    );
    describe_counter!(CODEC_FILES_READ_TOTAL, "Scan result files read, by format");
    describe_histogram!(
        CODEC_MARSHALED_BYTES,
        "Size of marshaled scan result messages in bytes"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_metrics_start_with_scanwire_prefix() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.starts_with("scanwire_"),
                "Metric '{}' does not start with 'scanwire_' prefix",
                name
            );
        }
    }

    #[test]
    fn metric_names_are_unique() {
        let mut names = ALL_METRIC_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_METRIC_NAMES.len());
    }

    #[test]
    fn describe_all_does_not_panic() {
        // describe_all() should not panic even without a recorder installed
        describe_all();
    }

    #[test]
    fn label_keys_and_reasons_are_lowercase() {
        let labels = [
            LABEL_REASON,
            LABEL_FORMAT,
            REASON_UNKNOWN_VARIANT,
            REASON_UNKNOWN_FIELD,
            REASON_LAYER_OUT_OF_RANGE,
            REASON_DUPLICATE_PACKAGE_ID,
            REASON_UNRESOLVED_PACKAGE_ID,
            REASON_INVALID_DIGEST,
            REASON_MALFORMED_SECRET,
        ];
        for label in &labels {
            assert_eq!(
                label.to_lowercase(),
                *label,
                "Label '{}' should be lowercase",
                label
            );
        }
    }
}
