//! protobuf 텍스트 형식
//!
//! 빌드 시 `proto/scanwire.proto`에서 만든 파일 디스크립터로 [`DynamicMessage`]를 거쳐
//! prost 바이너리 인코딩과 텍스트 형식 사이를 변환합니다.
//! 출력은 필드 번호 순서의 여러 줄 텍스트이며 enum은 값 이름으로 기록됩니다.
//!
//! 읽을 때는 스키마에 없는 필드를 경고 로그와 함께 버립니다.
//! 더 새로운 작성자가 추가한 메타데이터 형태나 자격 증명 종류가 들어 있어도
//! 파일 전체가 아니라 해당 값만 빠집니다.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use metrics::counter;
use prost::Message as _;
use prost_reflect::text_format::FormatOptions;
use prost_reflect::{DescriptorPool, DynamicMessage, Kind, MessageDescriptor};
use scanwire_core::metrics::{CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON, REASON_UNKNOWN_FIELD};
use tracing::warn;

use crate::error::CodecError;
use crate::wire::WireMessage;

const FILE_DESCRIPTOR_SET: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/scanwire_descriptor.bin"));

fn descriptor_pool() -> Result<&'static DescriptorPool, CodecError> {
    static POOL: OnceLock<Result<DescriptorPool, String>> = OnceLock::new();
    POOL.get_or_init(|| DescriptorPool::decode(FILE_DESCRIPTOR_SET).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|reason| CodecError::Schema(reason.clone()))
}

fn descriptor<M: WireMessage>() -> Result<MessageDescriptor, CodecError> {
    let name = M::full_name();
    descriptor_pool()?
        .get_message_by_name(&name)
        .ok_or_else(|| CodecError::Schema(format!("no descriptor for message {name}")))
}

/// 메시지를 여러 줄 텍스트 형식으로 변환합니다.
pub(crate) fn to_text<M: WireMessage>(message: &M) -> Result<String, CodecError> {
    let dynamic = DynamicMessage::decode(descriptor::<M>()?, message.encode_to_vec().as_slice())
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(dynamic.to_text_format_with_options(&FormatOptions::new().pretty(true)))
}

/// 텍스트 형식을 메시지로 변환합니다. 스키마에 없는 필드는 버립니다.
pub(crate) fn from_text<M: WireMessage>(text: &str) -> Result<M, CodecError> {
    let desc = descriptor::<M>()?;
    let text = discard_unknown_fields(text, &desc);
    let dynamic = DynamicMessage::parse_text_format(desc, &text)
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    M::decode(dynamic.encode_to_vec().as_slice()).map_err(|e| CodecError::Decode(e.to_string()))
}

/// 스키마에 없는 필드를 값과 함께 텍스트에서 잘라냅니다.
///
/// 구조를 따라갈 수 없는 입력은 손대지 않고 돌려주어 파서가 오류를 보고하게 합니다.
fn discard_unknown_fields<'a>(text: &'a str, desc: &MessageDescriptor) -> Cow<'a, str> {
    let mut scanner = Scanner {
        src: text.as_bytes(),
        pos: 0,
        unknown: Vec::new(),
    };
    if scanner.message_body(Some(desc), None).is_none() || scanner.unknown.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut kept = String::with_capacity(text.len());
    let mut last = 0;
    for field in &scanner.unknown {
        warn!(
            message = %field.message,
            field = %field.name,
            "dropping field unknown to this schema"
        );
        counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_UNKNOWN_FIELD).increment(1);
        kept.push_str(&text[last..field.span.start]);
        last = field.span.end;
    }
    kept.push_str(&text[last..]);
    Cow::Owned(kept)
}

struct UnknownField {
    message: String,
    name: String,
    /// 필드 이름부터 값과 뒤따르는 구분자(`;`, `,`)까지
    span: Range<usize>,
}

/// 텍스트 형식의 필드 구조만 따라가는 스캐너
///
/// 값은 해석하지 않고 건너뜁니다. 스키마를 모르는 하위 메시지(`desc`가 `None`) 안에서는
/// 아무것도 기록하지 않습니다.
struct Scanner<'a> {
    src: &'a [u8],
    pos: usize,
    unknown: Vec<UnknownField>,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_trivia(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(b) = self.peek() {
                    self.pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// 필드를 `close`까지 읽습니다. `close`가 `None`이면 입력 끝까지 읽습니다.
    fn message_body(&mut self, desc: Option<&MessageDescriptor>, close: Option<u8>) -> Option<()> {
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return close.is_none().then_some(()),
                Some(b) if Some(b) == close => {
                    self.pos += 1;
                    return Some(());
                }
                Some(_) => self.field(desc)?,
            }
        }
    }

    fn field(&mut self, desc: Option<&MessageDescriptor>) -> Option<()> {
        let start = self.pos;
        let mut unknown_name = None;
        let mut child = None;

        if self.peek() == Some(b'[') {
            // 확장 또는 Any 타입 이름은 그대로 둔다
            while self.peek()? != b']' {
                self.pos += 1;
            }
            self.pos += 1;
        } else {
            let name = self.word()?;
            if let Some(desc) = desc {
                match desc.get_field_by_name(name) {
                    Some(field) => {
                        if let Kind::Message(message) = field.kind() {
                            child = Some(message);
                        }
                    }
                    None => unknown_name = Some((desc.full_name().to_owned(), name.to_owned())),
                }
            }
        }

        self.skip_trivia();
        if self.peek() == Some(b':') {
            self.pos += 1;
        }
        // 버릴 필드의 하위 메시지는 검사하지 않는다
        let child = if unknown_name.is_some() { None } else { child };
        self.value(child.as_ref())?;

        self.skip_trivia();
        if matches!(self.peek(), Some(b';' | b',')) {
            self.pos += 1;
        }

        if let Some((message, name)) = unknown_name {
            self.unknown.push(UnknownField {
                message,
                name,
                span: start..self.pos,
            });
        }
        Some(())
    }

    fn value(&mut self, child: Option<&MessageDescriptor>) -> Option<()> {
        self.skip_trivia();
        match self.peek()? {
            b'{' => {
                self.pos += 1;
                self.message_body(child, Some(b'}'))
            }
            b'<' => {
                self.pos += 1;
                self.message_body(child, Some(b'>'))
            }
            b'[' => {
                self.pos += 1;
                loop {
                    self.skip_trivia();
                    if self.peek()? == b']' {
                        self.pos += 1;
                        return Some(());
                    }
                    self.value(child)?;
                    self.skip_trivia();
                    if self.peek()? == b',' {
                        self.pos += 1;
                    }
                }
            }
            b'"' | b'\'' => {
                // 이웃한 문자열 리터럴은 하나의 값으로 이어진다
                while matches!(self.peek(), Some(b'"' | b'\'')) {
                    self.string()?;
                    self.skip_trivia();
                }
                Some(())
            }
            _ => {
                if self.word()? == "-" {
                    self.skip_trivia();
                    self.word()?;
                }
                Some(())
            }
        }
    }

    fn string(&mut self) -> Option<()> {
        let quote = self.peek()?;
        self.pos += 1;
        loop {
            match self.peek()? {
                b'\\' => self.pos += 2,
                b if b == quote => {
                    self.pos += 1;
                    return Some(());
                }
                _ => self.pos += 1,
            }
        }
    }

    /// 식별자, 숫자, enum 이름처럼 구분자가 아닌 문자의 연속
    fn word(&mut self) -> Option<&'a str> {
        let src = self.src;
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b"{}<>[]:;,#\"'".contains(&b) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        std::str::from_utf8(&src[start..self.pos]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire;

    fn inventory_descriptor() -> MessageDescriptor {
        descriptor::<wire::Inventory>().unwrap()
    }

    #[test]
    fn descriptors_exist_for_file_messages() {
        assert!(descriptor::<wire::ScanResult>().is_ok());
        assert!(descriptor::<wire::Inventory>().is_ok());
    }

    #[test]
    fn text_uses_field_and_enum_names() {
        let message = wire::ScanResult {
            version: "1.0.0".to_owned(),
            status: Some(wire::ScanStatus {
                status: wire::ScanStatusEnum::PartiallySucceeded as i32,
                failure_reason: String::new(),
            }),
            ..Default::default()
        };
        let text = to_text(&message).unwrap();
        assert!(text.starts_with("version: \"1.0.0\""), "{text}");
        assert!(text.contains("status: PARTIALLY_SUCCEEDED"), "{text}");
    }

    #[test]
    fn known_fields_are_left_alone() {
        let text = "packages { name: \"bash\" dpkg_metadata { package_name: \"bash\" } }";
        let kept = discard_unknown_fields(text, &inventory_descriptor());
        assert!(matches!(kept, Cow::Borrowed(_)));
    }

    #[test]
    fn unknown_oneof_variant_is_cut_out() {
        let text = "packages {\n  name: \"brew-thing\"\n  homebrew_metadata {\n    tap: \"core\" # comment }\n    urls: [\"a\", 'b']\n  }\n}\n";
        let kept = discard_unknown_fields(text, &inventory_descriptor());
        assert!(!kept.contains("homebrew_metadata"), "{kept}");
        assert!(!kept.contains("tap"), "{kept}");
        assert!(kept.contains("name: \"brew-thing\""), "{kept}");
    }

    #[test]
    fn unknown_scalar_fields_are_cut_out() {
        let text = "packages { name: \"x\" future_score: -1.5e3; future_note: \"a\" \"b\", version: \"1\" }";
        let kept = discard_unknown_fields(text, &inventory_descriptor());
        assert_eq!(kept, "packages { name: \"x\"   version: \"1\" }");
    }

    #[test]
    fn unbalanced_input_is_passed_through() {
        let text = "packages { name: \"x\" future { ";
        let kept = discard_unknown_fields(text, &inventory_descriptor());
        assert!(matches!(kept, Cow::Borrowed(_)));
        assert!(from_text::<wire::Inventory>(text).is_err());
    }

    #[test]
    fn unknown_secret_kind_parses_to_empty_secret() {
        let text = "secrets { secret { slack_app_token { token: \"xoxb\" } } }";
        let inventory: wire::Inventory = from_text(text).unwrap();
        assert_eq!(inventory.secrets.len(), 1);
        assert_eq!(inventory.secrets[0].secret.as_ref().and_then(|s| s.secret.as_ref()), None);
    }

    #[test]
    fn map_entries_are_checked_against_entry_schema() {
        let text = "container_image_metadata { os_info { key: \"ID\" value: \"debian\" } }";
        let inventory: wire::Inventory = from_text(text).unwrap();
        assert_eq!(
            inventory.container_image_metadata[0].os_info.get("ID").map(String::as_str),
            Some("debian")
        );
    }
}
