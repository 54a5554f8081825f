//! 언어 에코시스템 및 SBOM 메타데이터 변환기

use scanwire_core::metadata::{
    CdxMetadata, DepsJsonMetadata, JavaArchiveMetadata, JavaLockfileMetadata,
    JavascriptPackageJsonMetadata, OsvMetadata, Person, PythonPackageMetadata,
    PythonRequirementsMetadata, PythonSetupMetadata, SpdxMetadata,
};

use super::{purl_to_domain, purl_to_wire};
use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire::{self, PackageMetadata as M};

/// 이 분류의 모든 메타데이터 형태를 등록합니다.
pub fn register(registry: &mut Registry<M>) -> Result<(), RegistryError> {
    registry.register(
        "python_metadata",
        |w| match w {
            M::PythonMetadata(m) => Some(python_to_domain(m)),
            _ => None,
        },
        |d: &PythonPackageMetadata| M::PythonMetadata(python_to_wire(d)),
    )?;
    registry.register(
        "python_requirements_metadata",
        |w| match w {
            M::PythonRequirementsMetadata(m) => Some(python_requirements_to_domain(m)),
            _ => None,
        },
        |d: &PythonRequirementsMetadata| M::PythonRequirementsMetadata(python_requirements_to_wire(d)),
    )?;
    registry.register(
        "python_setup_metadata",
        |w| match w {
            M::PythonSetupMetadata(m) => Some(python_setup_to_domain(m)),
            _ => None,
        },
        |d: &PythonSetupMetadata| M::PythonSetupMetadata(python_setup_to_wire(d)),
    )?;
    registry.register(
        "javascript_metadata",
        |w| match w {
            M::JavascriptMetadata(m) => Some(javascript_to_domain(m)),
            _ => None,
        },
        |d: &JavascriptPackageJsonMetadata| M::JavascriptMetadata(javascript_to_wire(d)),
    )?;
    registry.register(
        "java_archive_metadata",
        |w| match w {
            M::JavaArchiveMetadata(m) => Some(java_archive_to_domain(m)),
            _ => None,
        },
        |d: &JavaArchiveMetadata| M::JavaArchiveMetadata(java_archive_to_wire(d)),
    )?;
    registry.register(
        "java_lockfile_metadata",
        |w| match w {
            M::JavaLockfileMetadata(m) => Some(java_lockfile_to_domain(m)),
            _ => None,
        },
        |d: &JavaLockfileMetadata| M::JavaLockfileMetadata(java_lockfile_to_wire(d)),
    )?;
    registry.register(
        "depsjson_metadata",
        |w| match w {
            M::DepsjsonMetadata(m) => Some(depsjson_to_domain(m)),
            _ => None,
        },
        |d: &DepsJsonMetadata| M::DepsjsonMetadata(depsjson_to_wire(d)),
    )?;
    registry.register(
        "osv_metadata",
        |w| match w {
            M::OsvMetadata(m) => Some(osv_to_domain(m)),
            _ => None,
        },
        |d: &OsvMetadata| M::OsvMetadata(osv_to_wire(d)),
    )?;
    registry.register(
        "spdx_metadata",
        |w| match w {
            M::SpdxMetadata(m) => Some(spdx_to_domain(m)),
            _ => None,
        },
        |d: &SpdxMetadata| M::SpdxMetadata(spdx_to_wire(d)),
    )?;
    registry.register(
        "cdx_metadata",
        |w| match w {
            M::CdxMetadata(m) => Some(cdx_to_domain(m)),
            _ => None,
        },
        |d: &CdxMetadata| M::CdxMetadata(cdx_to_wire(d)),
    )?;
    Ok(())
}

fn python_to_wire(d: &PythonPackageMetadata) -> wire::PythonPackageMetadata {
    wire::PythonPackageMetadata {
        author: d.author.clone(),
        author_email: d.author_email.clone(),
    }
}

fn python_to_domain(w: &wire::PythonPackageMetadata) -> PythonPackageMetadata {
    PythonPackageMetadata {
        author: w.author.clone(),
        author_email: w.author_email.clone(),
    }
}

fn python_requirements_to_wire(d: &PythonRequirementsMetadata) -> wire::PythonRequirementsMetadata {
    wire::PythonRequirementsMetadata {
        hash_checking_mode_values: d.hash_checking_mode_values.clone(),
        version_comparator: d.version_comparator.clone(),
        requirement: d.requirement.clone(),
    }
}

fn python_requirements_to_domain(w: &wire::PythonRequirementsMetadata) -> PythonRequirementsMetadata {
    PythonRequirementsMetadata {
        hash_checking_mode_values: w.hash_checking_mode_values.clone(),
        version_comparator: w.version_comparator.clone(),
        requirement: w.requirement.clone(),
    }
}

fn python_setup_to_wire(d: &PythonSetupMetadata) -> wire::PythonSetupMetadata {
    wire::PythonSetupMetadata {
        version_comparator: d.version_comparator.clone(),
    }
}

fn python_setup_to_domain(w: &wire::PythonSetupMetadata) -> PythonSetupMetadata {
    PythonSetupMetadata {
        version_comparator: w.version_comparator.clone(),
    }
}

fn javascript_to_wire(d: &JavascriptPackageJsonMetadata) -> wire::JavascriptPackageJsonMetadata {
    wire::JavascriptPackageJsonMetadata {
        author: d.author.as_ref().map(ToString::to_string).unwrap_or_default(),
        contributors: people_to_wire(&d.contributors),
        maintainers: people_to_wire(&d.maintainers),
    }
}

fn javascript_to_domain(w: &wire::JavascriptPackageJsonMetadata) -> JavascriptPackageJsonMetadata {
    JavascriptPackageJsonMetadata {
        author: non_empty(&w.author).map(Person::parse),
        contributors: people_to_domain(&w.contributors),
        maintainers: people_to_domain(&w.maintainers),
    }
}

fn java_archive_to_wire(d: &JavaArchiveMetadata) -> wire::JavaArchiveMetadata {
    wire::JavaArchiveMetadata {
        artifact_id: d.artifact_id.clone(),
        group_id: d.group_id.clone(),
        sha1: d.sha1.clone(),
    }
}

fn java_archive_to_domain(w: &wire::JavaArchiveMetadata) -> JavaArchiveMetadata {
    JavaArchiveMetadata {
        artifact_id: w.artifact_id.clone(),
        group_id: w.group_id.clone(),
        sha1: w.sha1.clone(),
    }
}

fn java_lockfile_to_wire(d: &JavaLockfileMetadata) -> wire::JavaLockfileMetadata {
    wire::JavaLockfileMetadata {
        artifact_id: d.artifact_id.clone(),
        group_id: d.group_id.clone(),
        is_transitive: d.is_transitive,
    }
}

fn java_lockfile_to_domain(w: &wire::JavaLockfileMetadata) -> JavaLockfileMetadata {
    JavaLockfileMetadata {
        artifact_id: w.artifact_id.clone(),
        group_id: w.group_id.clone(),
        is_transitive: w.is_transitive,
    }
}

fn depsjson_to_wire(d: &DepsJsonMetadata) -> wire::DepsJsonMetadata {
    wire::DepsJsonMetadata {
        package_name: d.package_name.clone(),
        package_version: d.package_version.clone(),
        r#type: d.package_type.clone(),
    }
}

fn depsjson_to_domain(w: &wire::DepsJsonMetadata) -> DepsJsonMetadata {
    DepsJsonMetadata {
        package_name: w.package_name.clone(),
        package_version: w.package_version.clone(),
        package_type: w.r#type.clone(),
    }
}

fn osv_to_wire(d: &OsvMetadata) -> wire::OsvPackageMetadata {
    wire::OsvPackageMetadata {
        purl_type: d.purl_type.clone(),
        commit: d.commit.clone(),
        ecosystem: d.ecosystem.clone(),
        compare_as: d.compare_as.clone(),
    }
}

fn osv_to_domain(w: &wire::OsvPackageMetadata) -> OsvMetadata {
    OsvMetadata {
        purl_type: w.purl_type.clone(),
        commit: w.commit.clone(),
        ecosystem: w.ecosystem.clone(),
        compare_as: w.compare_as.clone(),
    }
}

fn spdx_to_wire(d: &SpdxMetadata) -> wire::SpdxPackageMetadata {
    wire::SpdxPackageMetadata {
        purl: d.purl.as_ref().map(purl_to_wire),
        cpes: d.cpes.clone(),
    }
}

fn spdx_to_domain(w: &wire::SpdxPackageMetadata) -> SpdxMetadata {
    SpdxMetadata {
        purl: w.purl.as_ref().map(purl_to_domain),
        cpes: w.cpes.clone(),
    }
}

fn cdx_to_wire(d: &CdxMetadata) -> wire::CdxPackageMetadata {
    wire::CdxPackageMetadata {
        purl: d.purl.as_ref().map(purl_to_wire),
        cpes: d.cpes.clone(),
    }
}

fn cdx_to_domain(w: &wire::CdxPackageMetadata) -> CdxMetadata {
    CdxMetadata {
        purl: w.purl.as_ref().map(purl_to_domain),
        cpes: w.cpes.clone(),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn people_to_wire(people: &[Person]) -> Vec<String> {
    people.iter().map(ToString::to_string).collect()
}

fn people_to_domain(people: &[String]) -> Vec<Person> {
    people.iter().map(|p| Person::parse(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwire_core::purl::PackageUrl;

    #[test]
    fn package_json_people_survive_string_form() {
        let domain = JavascriptPackageJsonMetadata {
            author: Some(Person {
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                url: String::new(),
            }),
            contributors: vec![Person {
                name: "Grace".to_owned(),
                email: String::new(),
                url: "https://grace.dev".to_owned(),
            }],
            maintainers: Vec::new(),
        };
        let wire = javascript_to_wire(&domain);
        assert_eq!(wire.author, "Ada <ada@example.com>");
        assert_eq!(wire.contributors, vec!["Grace (https://grace.dev)"]);
        assert_eq!(javascript_to_domain(&wire), domain);
    }

    #[test]
    fn package_json_empty_author_is_none() {
        let wire = wire::JavascriptPackageJsonMetadata::default();
        assert!(javascript_to_domain(&wire).author.is_none());
    }

    #[test]
    fn spdx_purl_roundtrip() {
        let domain = SpdxMetadata {
            purl: Some(PackageUrl {
                purl_type: "npm".to_owned(),
                namespace: "@babel".to_owned(),
                name: "core".to_owned(),
                version: "7.22.0".to_owned(),
                ..Default::default()
            }),
            cpes: vec!["cpe:2.3:a:babel:core:7.22.0:*:*:*:*:*:*:*".to_owned()],
        };
        let wire = spdx_to_wire(&domain);
        assert_eq!(
            wire.purl.as_ref().map(|p| p.purl.as_str()),
            Some("pkg:npm/%40babel/core@7.22.0")
        );
        assert_eq!(spdx_to_domain(&wire), domain);
    }
}
