#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`wire`]: 와이어 메시지 (`ScanResult`, `Inventory`, `Package`, ...)
//! - [`registry`]: 도메인 타입 ↔ 와이어 변형 변환기 레지스트리 (`Registry`)
//! - [`convert`]: 내장 메타데이터 형태와 자격 증명 종류의 변환기
//! - [`tables`]: 양방향 enum 테이블 (`EnumTable`, `Tables`)
//! - [`identity`]: 패키지 식별자 발급/해석, 레이어 역참조 복원
//! - [`codec`]: 스캔 결과 코덱 (`InventoryCodec`, `global`)
//! - [`io`]: 결과 파일 기록/읽기 (`FileFormat`, `write`, `read`)
//! - `text`: protobuf 텍스트 형식 (`proto/scanwire.proto` 디스크립터 기반)
//! - [`error`]: 에러 타입 (`CodecError`, `RegistryError`, `TableError`)

pub mod codec;
pub mod convert;
pub mod error;
pub mod identity;
pub mod io;
pub mod registry;
pub mod tables;
mod text;
pub mod wire;

// --- Public API Re-exports ---

// Codec
pub use codec::{InventoryCodec, global};

// Error
pub use error::{CodecError, RegistryError, TableError};

// Registry
pub use registry::{Registry, WireVariant};

// Tables
pub use tables::{EnumTable, Tables};

// File I/O
pub use io::{
    Encoding, FileFormat, read, read_as, read_with_format, valid_extension, write, write_as,
    write_with_format,
};

// Wire
pub use wire::WireMessage;
