//! 언어 에코시스템 및 SBOM 메타데이터

use std::fmt;

use crate::purl::PackageUrl;

/// Python wheel/egg 패키지 (`METADATA`/`PKG-INFO`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonPackageMetadata {
    pub author: String,
    pub author_email: String,
}

/// Python `requirements.txt` 항목
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonRequirementsMetadata {
    /// `--hash` 값 목록
    pub hash_checking_mode_values: Vec<String>,
    /// 버전 비교 연산자 (예: `==`, `>=`)
    pub version_comparator: String,
    /// 원본 요구사항 문자열
    pub requirement: String,
}

/// Python `setup.py` 의존성
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonSetupMetadata {
    pub version_comparator: String,
}

/// `package.json`의 사람 필드 (작성자, 기여자, 관리자)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl Person {
    /// `Name <email> (url)` 형식 문자열을 파싱합니다.
    ///
    /// 이메일과 URL 부분은 생략될 수 있습니다. 이름은 처음 나오는 `<` 또는 `(`에서 끝나며,
    /// 백슬래시로 이스케이프된 구분 문자는 값의 일부로 읽습니다.
    pub fn parse(value: &str) -> Self {
        let (name, mut rest) = take_until(value.trim(), &['<', '(']);

        let mut email = String::new();
        if let Some(tail) = rest.strip_prefix('<') {
            let (part, after) = take_until(tail, &['>']);
            email = part;
            rest = after.strip_prefix('>').unwrap_or(after).trim_start();
        }

        let mut url = String::new();
        if let Some(tail) = rest.strip_prefix('(') {
            url = take_until(tail, &[')']).0;
        }

        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            url: url.trim().to_owned(),
        }
    }
}

const PERSON_DELIMITERS: [char; 5] = ['\\', '<', '>', '(', ')'];

/// 이스케이프를 풀면서 `stops` 중 하나가 나올 때까지 읽습니다.
/// 남은 문자열은 멈춘 구분 문자부터 시작합니다.
fn take_until<'a>(value: &'a str, stops: &[char]) -> (String, &'a str) {
    let mut out = String::new();
    let mut chars = value.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if let Some((_, escaped)) = chars.next() {
                out.push(escaped);
            }
        } else if stops.contains(&c) {
            return (out, &value[i..]);
        } else {
            out.push(c);
        }
    }
    (out, "")
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        if PERSON_DELIMITERS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if !self.name.is_empty() {
            push_escaped(&mut out, &self.name);
        }
        if !self.email.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push('<');
            push_escaped(&mut out, &self.email);
            out.push('>');
        }
        if !self.url.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push('(');
            push_escaped(&mut out, &self.url);
            out.push(')');
        }
        f.write_str(&out)
    }
}

/// npm `package.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavascriptPackageJsonMetadata {
    pub author: Option<Person>,
    pub contributors: Vec<Person>,
    pub maintainers: Vec<Person>,
}

/// Java 아카이브 (JAR/WAR/EAR)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaArchiveMetadata {
    pub artifact_id: String,
    pub group_id: String,
    /// 아카이브 파일의 SHA-1 (base64)
    pub sha1: String,
}

/// Java lockfile (Maven `pom.xml`, Gradle lockfile)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaLockfileMetadata {
    pub artifact_id: String,
    pub group_id: String,
    pub is_transitive: bool,
}

/// .NET `deps.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepsJsonMetadata {
    pub package_name: String,
    pub package_version: String,
    /// `project`, `package` 등
    pub package_type: String,
}

/// OSV 스키마를 따르는 일반 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsvMetadata {
    pub purl_type: String,
    pub commit: String,
    pub ecosystem: String,
    pub compare_as: String,
}

/// SPDX 문서에서 추출한 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpdxMetadata {
    pub purl: Option<PackageUrl>,
    pub cpes: Vec<String>,
}

/// CycloneDX 문서에서 추출한 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CdxMetadata {
    pub purl: Option<PackageUrl>,
    pub cpes: Vec<String>,
}
