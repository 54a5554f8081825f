//! 브라우저/에디터 확장 메타데이터

/// Chrome 확장 (`manifest.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeExtensionMetadata {
    pub name: String,
    pub description: String,
    pub author_email: String,
    pub host_permissions: Vec<String>,
    pub manifest_version: i32,
    pub minimum_chrome_version: String,
    pub permissions: Vec<String>,
    pub update_url: String,
}

/// VS Code 확장 (`extensions.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VscodeExtensionMetadata {
    pub id: String,
    pub publisher_name: String,
    pub publisher_display_name: String,
    pub target_platform: String,
    pub updated: bool,
    pub is_pre_release_version: bool,
    /// 설치 시각 (Unix epoch 밀리초)
    pub installed_timestamp: i64,
}
