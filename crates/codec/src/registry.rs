//! 페이로드 레지스트리 — 도메인 타입 ↔ 와이어 변형 변환기 테이블
//!
//! [`Registry`]는 패키지 메타데이터와 시크릿 자격 증명에 공통으로 쓰입니다.
//! 도메인 값은 [`Payload`] trait 객체로 들어오며, 구체 타입의 `TypeId`로
//! 인코더를 찾습니다. 디코딩은 와이어 oneof에 채워진 변형 이름으로 디코더를 찾습니다.
//!
//! 새 형태를 추가하는 쪽은 도메인 구조체, 와이어 메시지, 변환기 한 쌍만 작성하면 되고
//! 코덱 본체는 수정하지 않습니다.
//!
//! # 등록 규칙
//! - 와이어 변형 이름 하나와 도메인 타입 하나가 정확히 한 쌍을 이룹니다.
//! - 같은 변형 이름이나 같은 도메인 타입을 다시 등록하면 [`RegistryError`]를 반환합니다.

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use metrics::counter;
use scanwire_core::metrics::{CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON, REASON_UNKNOWN_VARIANT};
use scanwire_core::payload::Payload;
use tracing::{debug, warn};

use crate::error::{CodecError, RegistryError};

/// 와이어 oneof enum이 어떤 변형으로 채워졌는지 알려주는 trait
pub trait WireVariant {
    /// 채워진 변형의 이름 (protobuf 필드 이름, snake_case)
    fn variant_name(&self) -> &'static str;
}

type Encoder<W> = Box<dyn Fn(&dyn Payload) -> Option<W> + Send + Sync>;
type Decoder<W> = Box<dyn Fn(&W) -> Option<Box<dyn Payload>> + Send + Sync>;

/// 도메인 타입 ↔ 와이어 변형 변환기 레지스트리
pub struct Registry<W> {
    kind: &'static str,
    encoders: HashMap<TypeId, (&'static str, Encoder<W>)>,
    decoders: HashMap<&'static str, Decoder<W>>,
}

impl<W: WireVariant + 'static> Registry<W> {
    /// 빈 레지스트리를 생성합니다. `kind`는 로그와 에러에 쓰이는 이름입니다.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            encoders: HashMap::new(),
            decoders: HashMap::new(),
        }
    }

    /// 변환기 한 쌍을 등록합니다.
    ///
    /// - `variant`: 와이어 변형 이름 ([`WireVariant::variant_name`]과 같아야 함)
    /// - `to_domain`: 와이어 값 -> 도메인 값. 다른 변형이면 `None`
    /// - `to_wire`: 도메인 값 -> 와이어 값
    pub fn register<T, D, E>(
        &mut self,
        variant: &'static str,
        to_domain: D,
        to_wire: E,
    ) -> Result<(), RegistryError>
    where
        T: Payload,
        D: Fn(&W) -> Option<T> + Send + Sync + 'static,
        E: Fn(&T) -> W + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        if self.encoders.contains_key(&type_id) {
            return Err(RegistryError::DuplicateDomainType {
                registry: self.kind,
                type_name: type_name::<T>(),
            });
        }
        if self.decoders.contains_key(variant) {
            return Err(RegistryError::DuplicateWireVariant {
                registry: self.kind,
                variant,
            });
        }

        let encoder: Encoder<W> = Box::new(move |value: &dyn Payload| {
            value.as_any().downcast_ref::<T>().map(&to_wire)
        });
        let decoder: Decoder<W> = Box::new(move |wire: &W| {
            to_domain(wire).map(|value| Box::new(value) as Box<dyn Payload>)
        });

        self.encoders.insert(type_id, (type_name::<T>(), encoder));
        self.decoders.insert(variant, decoder);
        debug!(
            registry = self.kind,
            variant,
            domain_type = type_name::<T>(),
            "registered converter"
        );
        Ok(())
    }

    /// 도메인 값을 와이어 변형으로 변환합니다.
    pub fn encode(&self, value: &dyn Payload) -> Result<W, CodecError> {
        let unregistered = || CodecError::UnregisteredType {
            registry: self.kind,
            type_name: value.payload_type_name(),
        };
        let (_, encoder) = self
            .encoders
            .get(&value.as_any().type_id())
            .ok_or_else(unregistered)?;
        encoder(value).ok_or_else(unregistered)
    }

    /// 와이어 변형을 도메인 값으로 변환합니다.
    ///
    /// 등록되지 않은 변형이면 `None`을 반환하고 경고를 남깁니다 (에러 아님).
    pub fn decode(&self, wire: &W) -> Option<Box<dyn Payload>> {
        let variant = wire.variant_name();
        let decoded = self.decoders.get(variant).and_then(|decoder| decoder(wire));
        if decoded.is_none() {
            warn!(
                registry = self.kind,
                variant, "no converter for wire variant, dropping value"
            );
            counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_UNKNOWN_VARIANT)
                .increment(1);
        }
        decoded
    }

    /// 레지스트리 이름
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// 등록된 변환기 쌍 개수
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// 등록된 변환기가 없으면 `true`
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// 와이어 변형 이름이 등록되어 있는지 확인합니다.
    pub fn has_variant(&self, variant: &str) -> bool {
        self.decoders.contains_key(variant)
    }

    /// 도메인 타입이 등록되어 있는지 확인합니다.
    pub fn has_type<T: Payload>(&self) -> bool {
        self.encoders.contains_key(&TypeId::of::<T>())
    }

    /// 등록된 도메인 타입 이름 목록 (정렬됨)
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.encoders.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}
