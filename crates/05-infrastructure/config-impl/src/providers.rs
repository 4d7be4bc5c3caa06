//! 配置来源实现

use crate::validation::DefinitionValidator;
use async_trait::async_trait;
use config_abstractions::{ConfigValidator, DefinitionSource, DescriptorSource, FileSource};
use infrastructure_common::{ComponentDescriptor, ConfigError, ContainerDefinition};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 解析两行文本描述符
///
/// 第一行为数据访问组件名称，第二行为业务逻辑组件名称。
/// 每行去除首尾空白（包括 `\r`），多余的行被忽略。
pub fn parse_descriptor(content: &str, source_name: &str) -> Result<ComponentDescriptor, ConfigError> {
    let mut lines = content.lines().map(str::trim);

    let data_access = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ConfigError::missing(source_name, "第一行（数据访问组件名称）为空或缺失"))?;

    let business_logic = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ConfigError::missing(source_name, "第二行（业务逻辑组件名称）为空或缺失"))?;

    Ok(ComponentDescriptor::new(data_access, business_logic))
}

/// 读取文件内容，文件不存在时映射为配置缺失
async fn read_source_file(path: &Path) -> Result<String, ConfigError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ConfigError::missing(
            path.display().to_string(),
            "文件不存在",
        )),
        Err(e) => Err(ConfigError::FileReadError { source: e }),
    }
}

/// 文本文件描述符来源
#[derive(Debug, Clone)]
pub struct TextDescriptorSource {
    file_path: PathBuf,
}

impl TextDescriptorSource {
    /// 创建新的文本描述符来源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DescriptorSource for TextDescriptorSource {
    async fn load_descriptor(&self) -> Result<ComponentDescriptor, ConfigError> {
        debug!("加载文本描述符: {}", self.file_path.display());

        let content = read_source_file(&self.file_path).await?;
        let descriptor = parse_descriptor(&content, &self.file_path.display().to_string())?;

        debug!("文本描述符加载完成: {}", descriptor);
        Ok(descriptor)
    }

    fn name(&self) -> &str {
        "TextDescriptorSource"
    }
}

impl FileSource for TextDescriptorSource {
    fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// 环境变量描述符来源
///
/// 读取 `<PREFIX>_DATA_ACCESS` 和 `<PREFIX>_BUSINESS_LOGIC`
#[derive(Debug, Clone)]
pub struct EnvironmentDescriptorSource {
    prefix: String,
}

impl EnvironmentDescriptorSource {
    /// 数据访问组件变量后缀
    pub const DATA_ACCESS_KEY: &'static str = "DATA_ACCESS";
    /// 业务逻辑组件变量后缀
    pub const BUSINESS_LOGIC_KEY: &'static str = "BUSINESS_LOGIC";

    /// 创建新的环境变量描述符来源
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// 将键转换为环境变量名
    pub fn env_key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix.to_uppercase(), key)
    }

    fn read_var(&self, key: &str) -> Result<String, ConfigError> {
        let env_key = self.env_key(key);

        match std::env::var(&env_key) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) => Err(ConfigError::missing(env_key, "环境变量为空")),
            Err(_) => Err(ConfigError::missing(env_key, "环境变量未设置")),
        }
    }
}

#[async_trait]
impl DescriptorSource for EnvironmentDescriptorSource {
    async fn load_descriptor(&self) -> Result<ComponentDescriptor, ConfigError> {
        debug!("加载环境变量描述符，前缀: {}", self.prefix);

        let data_access = self.read_var(Self::DATA_ACCESS_KEY)?;
        let business_logic = self.read_var(Self::BUSINESS_LOGIC_KEY)?;

        Ok(ComponentDescriptor::new(data_access, business_logic))
    }

    fn name(&self) -> &str {
        "EnvironmentDescriptorSource"
    }
}

/// 校验并返回容器定义
fn validated(definition: ContainerDefinition) -> Result<ContainerDefinition, ConfigError> {
    let warnings = DefinitionValidator.validate(&definition).into_result()?;
    for warning in warnings {
        warn!("容器定义: {}", warning);
    }
    Ok(definition)
}

/// TOML 容器定义来源
#[derive(Debug, Clone)]
pub struct TomlDefinitionSource {
    file_path: PathBuf,
}

impl TomlDefinitionSource {
    /// 创建新的 TOML 容器定义来源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DefinitionSource for TomlDefinitionSource {
    async fn load_definition(&self) -> Result<ContainerDefinition, ConfigError> {
        debug!("加载 TOML 容器定义: {}", self.file_path.display());

        let content = read_source_file(&self.file_path).await?;
        let definition: ContainerDefinition =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;

        validated(definition)
    }

    fn name(&self) -> &str {
        "TomlDefinitionSource"
    }
}

impl FileSource for TomlDefinitionSource {
    fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// JSON 容器定义来源
#[derive(Debug, Clone)]
pub struct JsonDefinitionSource {
    file_path: PathBuf,
}

impl JsonDefinitionSource {
    /// 创建新的 JSON 容器定义来源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DefinitionSource for JsonDefinitionSource {
    async fn load_definition(&self) -> Result<ContainerDefinition, ConfigError> {
        debug!("加载 JSON 容器定义: {}", self.file_path.display());

        let content = read_source_file(&self.file_path).await?;
        let definition: ContainerDefinition =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;

        validated(definition)
    }

    fn name(&self) -> &str {
        "JsonDefinitionSource"
    }
}

impl FileSource for JsonDefinitionSource {
    fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// 按扩展名选择容器定义来源
pub fn definition_source_for_path<P: AsRef<Path>>(
    path: P,
) -> Result<Box<dyn DefinitionSource>, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(Box::new(TomlDefinitionSource::new(path))),
        Some("json") => Ok(Box::new(JsonDefinitionSource::new(path))),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
