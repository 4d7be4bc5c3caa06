//! 配置验证抽象接口

use infrastructure_common::ConfigError;

/// 配置验证器 trait
///
/// 定义配置验证的统一接口
pub trait ConfigValidator<T>: Send + Sync {
    /// 验证配置
    fn validate(&self, config: &T) -> ValidationResult;

    /// 获取验证器名称
    fn name(&self) -> &str;
}

/// 验证结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// 验证错误列表
    pub errors: Vec<String>,
    /// 验证警告列表
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// 创建成功的验证结果
    pub fn success() -> Self {
        Self::default()
    }

    /// 是否验证通过
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// 添加错误
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// 添加警告
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// 转换为 `Result`，存在错误时返回 [`ConfigError::ValidationFailed`]
    pub fn into_result(self) -> Result<Vec<String>, ConfigError> {
        if self.is_valid() {
            Ok(self.warnings)
        } else {
            Err(ConfigError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}
