//! 타입 소거 페이로드
//!
//! 패키지 메타데이터와 시크릿 자격 증명은 플러그인마다 형태가 다르고,
//! 코어는 그 목록을 닫힌 enum으로 고정하지 않습니다.
//! 대신 [`Payload`] trait 객체로 보관하고, 코덱의 레지스트리가
//! 구체 타입(`TypeId`)으로 변환기를 찾습니다.
//!
//! `Clone + PartialEq + Debug + Send + Sync + 'static`을 만족하는 모든 타입은
//! 자동으로 [`Payload`]를 구현합니다.

use std::any::{Any, type_name};
use std::fmt;

/// 동적 복제/비교가 가능한 타입 소거 값
pub trait Payload: Any + fmt::Debug + Send + Sync {
    /// 다운캐스트용 `Any` 참조
    fn as_any(&self) -> &dyn Any;

    /// 값을 복제하여 새 trait 객체로 반환합니다.
    fn clone_boxed(&self) -> Box<dyn Payload>;

    /// 같은 구체 타입이고 값이 같으면 `true`
    fn eq_dyn(&self, other: &dyn Payload) -> bool;

    /// 구체 타입 이름 (로그 및 에러 메시지용)
    fn payload_type_name(&self) -> &'static str;
}

impl<T> Payload for T
where
    T: Any + fmt::Debug + Clone + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn payload_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Alpha {
        name: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Beta {
        name: String,
    }

    #[test]
    fn eq_dyn_compares_same_type_by_value() {
        let a: Box<dyn Payload> = Box::new(Alpha {
            name: "x".to_owned(),
        });
        let b: Box<dyn Payload> = Box::new(Alpha {
            name: "x".to_owned(),
        });
        let c: Box<dyn Payload> = Box::new(Alpha {
            name: "y".to_owned(),
        });
        assert!(a.eq_dyn(b.as_ref()));
        assert!(!a.eq_dyn(c.as_ref()));
    }

    #[test]
    fn eq_dyn_rejects_different_types_with_same_fields() {
        let a: Box<dyn Payload> = Box::new(Alpha {
            name: "x".to_owned(),
        });
        let b: Box<dyn Payload> = Box::new(Beta {
            name: "x".to_owned(),
        });
        assert!(!a.eq_dyn(b.as_ref()));
    }

    #[test]
    fn clone_boxed_preserves_concrete_type() {
        let a: Box<dyn Payload> = Box::new(Alpha {
            name: "x".to_owned(),
        });
        let cloned = a.clone_boxed();
        let alpha = cloned.as_any().downcast_ref::<Alpha>().unwrap();
        assert_eq!(alpha.name, "x");
    }

    #[test]
    fn payload_type_name_names_concrete_type() {
        let a: Box<dyn Payload> = Box::new(Beta {
            name: String::new(),
        });
        assert!(a.payload_type_name().ends_with("Beta"));
    }
}
