//! 콘텐츠 주소 다이제스트 (`algorithm:hex`)

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// 지원 알고리즘과 16진수 인코딩 길이
const ALGORITHMS: [(&str, usize); 3] = [("sha256", 64), ("sha384", 96), ("sha512", 128)];

/// 검증된 콘텐츠 다이제스트
///
/// 레이어 diff ID, 체인 ID 등에 사용됩니다.
/// 16진수는 소문자만 허용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// `algorithm:hex` 문자열을 파싱합니다.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let invalid = |reason: &str| ModelError::InvalidDigest {
            value: value.to_owned(),
            reason: reason.to_owned(),
        };

        let (algorithm, encoded) = value
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' separator"))?;

        let expected_len = ALGORITHMS
            .iter()
            .find(|(name, _)| *name == algorithm)
            .map(|(_, len)| *len)
            .ok_or_else(|| invalid("unsupported algorithm"))?;

        if encoded.len() != expected_len {
            return Err(invalid(&format!(
                "expected {expected_len} hex characters, got {}",
                encoded.len()
            )));
        }

        if !encoded
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(invalid("encoded part must be lowercase hex"));
        }

        Ok(Self(value.to_owned()))
    }

    /// 알고리즘 이름 (예: `sha256`)
    pub fn algorithm(&self) -> &str {
        self.0.split_once(':').map(|(a, _)| a).unwrap_or_default()
    }

    /// 16진수 인코딩 부분
    pub fn encoded(&self) -> &str {
        self.0.split_once(':').map(|(_, e)| e).unwrap_or_default()
    }

    /// 전체 문자열 표현
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
