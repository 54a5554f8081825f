//! 결과 파일 입출력
//!
//! 와이어 메시지를 `.textproto` 또는 `.binproto` 파일로 기록하고 읽습니다.
//! 파일 이름이 `.gz`로 끝나면 gzip으로 압축합니다.
//!
//! - 텍스트: protobuf 텍스트 형식 (여러 줄, [`crate::text`])
//! - 바이너리: protobuf 와이어 인코딩
//!
//! 확장자를 알 수 없는 경로는 파일을 만들기 전에 [`CodecError::InvalidFilename`]으로 거부합니다.

use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use metrics::{counter, histogram};
use scanwire_core::metrics::{
    CODEC_DECODE_DEGRADED_TOTAL, CODEC_FILES_READ_TOTAL, CODEC_FILES_WRITTEN_TOTAL,
    CODEC_MARSHALED_BYTES, LABEL_FORMAT, LABEL_REASON, REASON_UNKNOWN_FIELD,
};
use tracing::{debug, info, warn};

use crate::error::CodecError;
use crate::text;
use crate::wire::WireMessage;

const TEXTPROTO: &str = "textproto";
const BINPROTO: &str = "binproto";
const GZ: &str = "gz";

/// 메시지 인코딩 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// protobuf 텍스트 형식
    Text,
    /// protobuf 와이어 인코딩
    Binary,
}

impl Encoding {
    /// 형식 이름 (`textproto`, `binproto`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => TEXTPROTO,
            Self::Binary => BINPROTO,
        }
    }
}

/// 결과 파일 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileFormat {
    pub encoding: Encoding,
    pub gzipped: bool,
}

impl FileFormat {
    /// 압축하지 않은 텍스트 형식
    pub const TEXT: Self = Self {
        encoding: Encoding::Text,
        gzipped: false,
    };

    /// 압축하지 않은 바이너리 형식
    pub const BINARY: Self = Self {
        encoding: Encoding::Binary,
        gzipped: false,
    };

    /// 파일 경로의 확장자로 형식을 판별합니다.
    ///
    /// 허용: `.textproto`, `.binproto`, `.textproto.gz`, `.binproto.gz`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let invalid = |reason: &str| CodecError::InvalidFilename {
            path: path.display().to_string(),
            reason: reason.to_owned(),
        };

        let mut ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| invalid("missing file extension"))?;
        let mut gzipped = false;
        if ext == GZ {
            gzipped = true;
            ext = path
                .file_stem()
                .map(Path::new)
                .and_then(|stem| stem.extension())
                .and_then(|e| e.to_str())
                .ok_or_else(|| invalid("missing file extension before .gz"))?;
        }

        let encoding = match ext {
            TEXTPROTO => Encoding::Text,
            BINPROTO => Encoding::Binary,
            _ => {
                return Err(invalid(
                    "expected .textproto, .binproto, .textproto.gz or .binproto.gz",
                ));
            }
        };
        Ok(Self { encoding, gzipped })
    }

    /// 형식 이름(`textproto`, `binproto`)으로 압축하지 않은 형식을 만듭니다.
    pub fn from_name(format: &str) -> Result<Self, CodecError> {
        match format {
            TEXTPROTO => Ok(Self::TEXT),
            BINPROTO => Ok(Self::BINARY),
            other => Err(CodecError::UnknownFormat {
                format: other.to_owned(),
            }),
        }
    }

    /// 압축 여부를 바꾼 형식을 반환합니다.
    pub fn with_gzip(self, gzipped: bool) -> Self {
        Self { gzipped, ..self }
    }

    /// 이 형식에 맞는 파일 확장자 (`textproto`, `binproto.gz` 등)
    pub fn extension(&self) -> String {
        if self.gzipped {
            format!("{}.{GZ}", self.encoding.name())
        } else {
            self.encoding.name().to_owned()
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension())
    }
}

/// 경로의 확장자가 결과 파일 형식으로 인식되는지 확인합니다.
pub fn valid_extension(path: impl AsRef<Path>) -> Result<(), CodecError> {
    FileFormat::from_path(path).map(|_| ())
}

// ─── 마샬링 ────────────────────────────────────────────────────────

/// 메시지를 주어진 형식의 바이트로 변환합니다 (gzip 포함).
pub fn marshal<M: WireMessage>(message: &M, format: FileFormat) -> Result<Vec<u8>, CodecError> {
    let bytes = match format.encoding {
        Encoding::Text => text::to_text(message)?.into_bytes(),
        Encoding::Binary => message.encode_to_vec(),
    };
    histogram!(CODEC_MARSHALED_BYTES, LABEL_FORMAT => format.encoding.name())
        .record(bytes.len() as f64);

    if !format.gzipped {
        return Ok(bytes);
    }
    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 4), Compression::default());
    encoder
        .write_all(&bytes)
        .map_err(|e| CodecError::Encode(format!("gzip: {e}")))?;
    encoder
        .finish()
        .map_err(|e| CodecError::Encode(format!("gzip: {e}")))
}

/// 주어진 형식의 바이트를 메시지로 변환합니다 (gzip 포함).
///
/// 스키마에 없는 필드는 에러 없이 버립니다. 텍스트는 필드마다 경고를 남기고,
/// 바이너리는 prost가 건너뛴 바이트가 있으면 한 번 경고합니다.
pub fn unmarshal<M: WireMessage>(bytes: &[u8], format: FileFormat) -> Result<M, CodecError> {
    let mut inflated = Vec::new();
    let bytes = if format.gzipped {
        GzDecoder::new(bytes)
            .read_to_end(&mut inflated)
            .map_err(|e| CodecError::Decode(format!("gzip: {e}")))?;
        inflated.as_slice()
    } else {
        bytes
    };

    match format.encoding {
        Encoding::Text => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| CodecError::Decode(format!("text is not UTF-8: {e}")))?;
            text::from_text(text)
        }
        Encoding::Binary => {
            let message = M::decode(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
            // 정규 인코더의 출력이라면 다시 인코딩한 길이와 같다
            let skipped = bytes.len().saturating_sub(message.encoded_len());
            if skipped > 0 {
                warn!(
                    message = %M::full_name(),
                    skipped_bytes = skipped,
                    "binary input holds fields unknown to this schema, skipped"
                );
                counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_UNKNOWN_FIELD)
                    .increment(1);
            }
            Ok(message)
        }
    }
}

// ─── 파일 ──────────────────────────────────────────────────────────

/// 메시지를 파일로 기록합니다. 형식은 경로의 확장자로 정합니다.
pub fn write<M: WireMessage>(path: impl AsRef<Path>, message: &M) -> Result<(), CodecError> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    write_as(path, message, format)
}

/// 메시지를 형식 이름(`textproto`, `binproto`)에 따라 압축 없이 기록합니다.
///
/// 경로의 확장자는 검사하지 않습니다.
pub fn write_with_format<M: WireMessage>(
    path: impl AsRef<Path>,
    message: &M,
    format: &str,
) -> Result<(), CodecError> {
    write_as(path, message, FileFormat::from_name(format)?)
}

/// 메시지를 주어진 형식으로 기록합니다.
pub fn write_as<M: WireMessage>(
    path: impl AsRef<Path>,
    message: &M,
    format: FileFormat,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let bytes = marshal(message, format)?;
    info!(
        path = %path.display(),
        format = %format,
        bytes = bytes.len(),
        "writing scan result"
    );
    fs::write(path, &bytes).map_err(|source| CodecError::Io {
        path: path.display().to_string(),
        source,
    })?;
    counter!(CODEC_FILES_WRITTEN_TOTAL, LABEL_FORMAT => format.encoding.name()).increment(1);
    Ok(())
}

/// 파일에서 메시지를 읽습니다. 형식은 경로의 확장자로 정합니다.
pub fn read<M: WireMessage>(path: impl AsRef<Path>) -> Result<M, CodecError> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    read_as(path, format)
}

/// 형식 이름(`textproto`, `binproto`)에 따라 압축되지 않은 파일을 읽습니다.
pub fn read_with_format<M: WireMessage>(
    path: impl AsRef<Path>,
    format: &str,
) -> Result<M, CodecError> {
    read_as(path, FileFormat::from_name(format)?)
}

/// 주어진 형식으로 파일을 읽습니다.
pub fn read_as<M: WireMessage>(path: impl AsRef<Path>, format: FileFormat) -> Result<M, CodecError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CodecError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(
        path = %path.display(),
        format = %format,
        bytes = bytes.len(),
        "reading scan result"
    );
    let message = unmarshal(&bytes, format)?;
    counter!(CODEC_FILES_READ_TOTAL, LABEL_FORMAT => format.encoding.name()).increment(1);
    Ok(message)
}
