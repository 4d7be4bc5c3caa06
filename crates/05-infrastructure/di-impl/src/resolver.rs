//! 组件解析器实现

use di_abstractions::{ComponentFactory, ComponentRegistration, ComponentRegistry, ComponentResolver};
use infrastructure_common::{
    BusinessLogicHandle, ComponentRole, DataAccessHandle, DependencyError,
    ResolutionStage,
};
use tracing::{debug, warn};

/// 基于注册表的组件解析器
///
/// 只借用注册表，不持有任何可变状态，可在多个线程中同时使用
#[derive(Clone, Copy)]
pub struct ComponentResolverImpl<'r> {
    registry: &'r dyn ComponentRegistry,
}

impl<'r> ComponentResolverImpl<'r> {
    /// 创建新的解析器
    pub fn new(registry: &'r dyn ComponentRegistry) -> Self {
        Self { registry }
    }

    /// 获取底层注册表
    pub fn registry(&self) -> &'r dyn ComponentRegistry {
        self.registry
    }

    fn lookup(
        &self,
        stage: ResolutionStage,
        name: &str,
    ) -> Result<&'r ComponentRegistration, DependencyError> {
        self.registry.lookup(name).ok_or_else(|| {
            warn!("[{}] 组件未注册: {}", stage, name);
            DependencyError::UnknownComponent {
                stage,
                name: name.to_string(),
            }
        })
    }
}

impl std::fmt::Debug for ComponentResolverImpl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentResolverImpl")
            .field("registered_components", &self.registry.len())
            .finish()
    }
}

fn incompatible(stage: ResolutionStage, name: &str, expected: ComponentRole) -> DependencyError {
    warn!("[{}] 组件 {} 缺少 {} 构造器", stage, name, expected);
    DependencyError::IncompatibleConstructor {
        stage,
        name: name.to_string(),
        expected: expected.constructor_signature().to_string(),
    }
}

impl ComponentResolver for ComponentResolverImpl<'_> {
    fn resolve_data_access(&self, name: &str) -> Result<DataAccessHandle, DependencyError> {
        let stage = ResolutionStage::DataAccess;
        let registration = self.lookup(stage, name)?;

        let ComponentFactory::DataAccess(factory) = &registration.factory else {
            return Err(incompatible(stage, name, ComponentRole::DataAccess));
        };

        debug!("构造数据访问组件: {}", name);
        factory().map_err(|source| DependencyError::ConstructionError {
            stage,
            name: name.to_string(),
            source,
        })
    }

    fn resolve_business_logic(
        &self,
        name: &str,
        data_access: DataAccessHandle,
    ) -> Result<BusinessLogicHandle, DependencyError> {
        let stage = ResolutionStage::BusinessLogic;
        let registration = self.lookup(stage, name)?;

        let ComponentFactory::BusinessLogic(factory) = &registration.factory else {
            return Err(incompatible(stage, name, ComponentRole::BusinessLogic));
        };

        debug!("构造业务逻辑组件: {} <- {}", name, data_access.name());
        factory(data_access).map_err(|source| DependencyError::ConstructionError {
            stage,
            name: name.to_string(),
            source,
        })
    }
}
