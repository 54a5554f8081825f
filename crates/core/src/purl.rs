//! Package URL (purl) 생성
//!
//! 형식: `pkg:type/namespace/name@version?qualifiers#subpath`
//! 네임스페이스, 이름, 버전, 한정자 값은 퍼센트 인코딩됩니다.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::Package;

/// Package URL 타입 -> 에코시스템 이름 매핑
const ECOSYSTEMS: &[(&str, &str)] = &[
    ("alpm", "Arch Linux"),
    ("apk", "Alpine"),
    ("cargo", "crates.io"),
    ("composer", "Packagist"),
    ("cos", "COS"),
    ("deb", "Debian"),
    ("flatpak", "Flatpak"),
    ("gem", "RubyGems"),
    ("generic", ""),
    ("golang", "Go"),
    ("hex", "Hex"),
    ("maven", "Maven"),
    ("npm", "npm"),
    ("nuget", "NuGet"),
    ("pub", "Pub"),
    ("pypi", "PyPI"),
    ("rpm", "Red Hat"),
    ("snap", "Snap"),
];

/// Package URL 타입에 해당하는 에코시스템 이름을 반환합니다.
///
/// 알 수 없는 타입이면 빈 문자열입니다.
pub fn ecosystem_for_type(purl_type: &str) -> &'static str {
    ECOSYSTEMS
        .iter()
        .find(|(ty, _)| *ty == purl_type)
        .map(|(_, eco)| *eco)
        .unwrap_or_default()
}

/// Package URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageUrl {
    pub purl_type: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub qualifiers: BTreeMap<String, String>,
    pub subpath: String,
}

impl PackageUrl {
    /// 패키지에서 Package URL을 유도합니다.
    ///
    /// - `/`로 구분된 이름은 마지막 구성요소를 이름, 나머지를 네임스페이스로 나눕니다
    ///   (예: npm `@types/node`).
    /// - Maven은 `group:artifact` 형식의 이름을 나눕니다.
    pub fn for_package(pkg: &Package) -> Option<Self> {
        if pkg.purl_type.is_empty() || pkg.name.is_empty() {
            return None;
        }

        let separator = if pkg.purl_type == "maven" { ':' } else { '/' };
        let (namespace, name) = match pkg.name.rsplit_once(separator) {
            Some((ns, name)) if !name.is_empty() => (ns.to_owned(), name.to_owned()),
            _ => (String::new(), pkg.name.clone()),
        };

        Some(Self {
            purl_type: pkg.purl_type.to_lowercase(),
            namespace,
            name,
            version: pkg.version.clone(),
            qualifiers: BTreeMap::new(),
            subpath: String::new(),
        })
    }

    /// 한정자를 추가합니다. 빈 값은 무시됩니다.
    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.qualifiers.insert(key.into().to_lowercase(), value);
        }
        self
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", self.purl_type)?;
        if !self.namespace.is_empty() {
            for segment in self.namespace.split('/').filter(|s| !s.is_empty()) {
                write!(f, "{}/", urlencoding::encode(segment))?;
            }
        }
        write!(f, "{}", urlencoding::encode(&self.name))?;
        if !self.version.is_empty() {
            write!(f, "@{}", urlencoding::encode(&self.version))?;
        }
        // BTreeMap이므로 한정자는 키 순서로 정렬됨
        let mut separator = '?';
        for (key, value) in &self.qualifiers {
            write!(f, "{separator}{key}={}", urlencoding::encode(value))?;
            separator = '&';
        }
        if !self.subpath.is_empty() {
            write!(f, "#{}", self.subpath.trim_matches('/'))?;
        }
        Ok(())
    }
}
