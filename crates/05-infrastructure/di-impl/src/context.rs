//! 应用上下文
//!
//! 在容器定义和注册表之上提供按 id 和按能力获取组件的容器。
//! 每次获取都会通过解析器构造新的实例，实例之间互不共享。

use crate::resolver::ComponentResolverImpl;
use crate::scanner::definition_from_metadata;
use di_abstractions::{ComponentRegistry, ComponentResolver, ComponentScanner};
use infrastructure_common::{
    BusinessLogicHandle, ComponentDefinition, ComponentDescriptor, ComponentRole,
    ContainerDefinition, DataAccessHandle, DependencyError, ResolutionStage,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// 应用上下文
pub struct ApplicationContext<'r> {
    resolver: ComponentResolverImpl<'r>,
    definition: ContainerDefinition,
    /// 组件 id 到角色的映射
    roles: HashMap<String, ComponentRole>,
}

impl<'r> ApplicationContext<'r> {
    /// 从容器定义创建上下文
    ///
    /// 定义中的每个类型都必须已在注册表中注册
    pub fn new(
        registry: &'r dyn ComponentRegistry,
        definition: ContainerDefinition,
    ) -> Result<Self, DependencyError> {
        let mut roles = HashMap::new();

        for component in &definition.components {
            let registration = registry.lookup(&component.type_name).ok_or_else(|| {
                DependencyError::UnknownComponent {
                    stage: ResolutionStage::ContainerDefinition,
                    name: component.type_name.clone(),
                }
            })?;
            debug!(
                "容器组件 {} -> {} ({})",
                component.id,
                registration.name(),
                registration.role()
            );
            if roles
                .insert(component.id.clone(), registration.role())
                .is_some()
            {
                return Err(DependencyError::DuplicateDefinition {
                    id: component.id.clone(),
                });
            }
        }

        info!("应用上下文创建完成，包含 {} 个组件", roles.len());
        Ok(Self {
            resolver: ComponentResolverImpl::new(registry),
            definition,
            roles,
        })
    }

    /// 扫描模块路径并创建上下文
    pub fn from_scan(
        registry: &'r dyn ComponentRegistry,
        scanner: &dyn ComponentScanner,
        base_path: &str,
    ) -> Result<Self, DependencyError> {
        info!("使用 {} 扫描组件: {}", scanner.name(), base_path);
        let components = scanner.scan(base_path);
        Self::new(registry, definition_from_metadata(&components))
    }

    /// 容器中的组件 id
    pub fn component_ids(&self) -> Vec<&str> {
        self.definition
            .components
            .iter()
            .map(|component| component.id.as_str())
            .collect()
    }

    /// 组件的角色
    pub fn role_of(&self, id: &str) -> Option<ComponentRole> {
        self.roles.get(id).copied()
    }

    /// 容器定义
    pub fn definition(&self) -> &ContainerDefinition {
        &self.definition
    }

    /// 按 id 获取数据访问组件
    pub fn get_data_access(&self, id: &str) -> Result<DataAccessHandle, DependencyError> {
        let component = self.find(id)?;
        self.resolver.resolve_data_access(&component.type_name)
    }

    /// 按能力获取业务逻辑组件
    ///
    /// 容器中只能有一个业务逻辑组件，或者恰有一个被标记为首选
    pub fn get_business_logic(&self) -> Result<BusinessLogicHandle, DependencyError> {
        let id = self.business_logic_id()?;
        self.get_business_logic_by_id(&id)
    }

    /// 按能力选出的业务逻辑组件 id
    pub fn business_logic_id(&self) -> Result<String, DependencyError> {
        self.select(ComponentRole::BusinessLogic)
    }

    /// 按 id 获取业务逻辑组件
    pub fn get_business_logic_by_id(&self, id: &str) -> Result<BusinessLogicHandle, DependencyError> {
        let descriptor = self.descriptor_for(id)?;
        info!("装配组件 {}: {}", id, descriptor);
        self.resolver.resolve(&descriptor)
    }

    /// 计算业务逻辑组件的描述符
    ///
    /// 依赖选择顺序: 显式注入 id，唯一的数据访问组件，唯一的首选数据访问组件
    pub fn descriptor_for(&self, id: &str) -> Result<ComponentDescriptor, DependencyError> {
        let component = self.find(id)?;
        self.expect_role(id, ComponentRole::BusinessLogic)?;

        let data_access_id = match &component.inject {
            Some(inject) => {
                self.find(inject)?;
                self.expect_role(inject, ComponentRole::DataAccess)?;
                inject.clone()
            }
            None => self.select(ComponentRole::DataAccess)?,
        };
        let data_access = self.find(&data_access_id)?;

        Ok(ComponentDescriptor::new(
            &data_access.type_name,
            &component.type_name,
        ))
    }

    fn find(&self, id: &str) -> Result<&ComponentDefinition, DependencyError> {
        self.definition
            .find(id)
            .ok_or_else(|| DependencyError::DefinitionNotFound { id: id.to_string() })
    }

    fn expect_role(&self, id: &str, role: ComponentRole) -> Result<(), DependencyError> {
        if self.role_of(id) == Some(role) {
            Ok(())
        } else {
            Err(DependencyError::IncompatibleConstructor {
                stage: ResolutionStage::ContainerDefinition,
                name: id.to_string(),
                expected: role.constructor_signature().to_string(),
            })
        }
    }

    fn select(&self, role: ComponentRole) -> Result<String, DependencyError> {
        let candidates: Vec<&ComponentDefinition> = self
            .definition
            .components
            .iter()
            .filter(|component| self.role_of(&component.id) == Some(role))
            .collect();

        if let [single] = candidates.as_slice() {
            return Ok(single.id.clone());
        }
        if candidates.is_empty() {
            return Err(DependencyError::NoCandidate { role });
        }

        let primaries: Vec<&&ComponentDefinition> =
            candidates.iter().filter(|component| component.primary).collect();
        match primaries.as_slice() {
            [primary] => Ok(primary.id.clone()),
            _ => Err(DependencyError::AmbiguousCandidates {
                role,
                candidates: candidates.iter().map(|component| component.id.clone()).collect(),
            }),
        }
    }
}

impl std::fmt::Debug for ApplicationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("definition", &self.definition)
            .field("roles", &self.roles)
            .finish()
    }
}
