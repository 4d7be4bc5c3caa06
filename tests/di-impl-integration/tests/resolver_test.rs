//! Centralized integration tests for the component resolver
use di_abstractions::ComponentResolver;
use di_impl::{ComponentRegistryBuilder, ComponentRegistryImpl, ComponentResolverImpl};
use infrastructure_common::{
    BusinessLogic, Component, ComponentDescriptor, DataAccess, DataAccessHandle, DependencyError,
    ResolutionStage,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 每次构造返回递增编号的数据访问组件
#[derive(Debug)]
struct SequenceDao {
    serial: f64,
}

impl Component for SequenceDao {
    fn name(&self) -> &'static str {
        "SequenceDao"
    }
}

impl DataAccess for SequenceDao {
    fn get_data(&self) -> f64 {
        self.serial
    }
}

/// 记录构造时收到的数据访问组件
#[derive(Debug)]
struct RecordingLogic {
    dao: DataAccessHandle,
}

impl Component for RecordingLogic {
    fn name(&self) -> &'static str {
        "RecordingLogic"
    }
}

impl BusinessLogic for RecordingLogic {
    fn calcul(&self) -> f64 {
        self.dao.get_data() * 2.0
    }
}

/// 构造记录：统计构造次数和业务逻辑组件收到的数据
#[derive(Debug, Default)]
struct ConstructionLog {
    data_access_built: AtomicUsize,
    business_logic_built: AtomicUsize,
    received: Mutex<Vec<f64>>,
}

fn counting_registry(log: &Arc<ConstructionLog>) -> ComponentRegistryImpl {
    let dao_log = Arc::clone(log);
    let logic_log = Arc::clone(log);

    ComponentRegistryBuilder::new()
        .register_data_access("SequenceDao", move || {
            let serial = dao_log.data_access_built.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Box::new(SequenceDao {
                serial: serial as f64,
            }))
        })
        .register_business_logic("RecordingLogic", move |dao| {
            logic_log.business_logic_built.fetch_add(1, Ordering::SeqCst);
            logic_log.received.lock().unwrap().push(dao.get_data());
            Ok(Box::new(RecordingLogic { dao }))
        })
        .register_data_access("BrokenDao", || Err("数据源不可用".into()))
        .register_business_logic("BrokenLogic", |_dao| Err("计算规则缺失".into()))
        .build()
        .unwrap()
}

#[test]
fn test_resolve_wires_exact_data_access_instance() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    let logic = resolver
        .resolve(&ComponentDescriptor::new("SequenceDao", "RecordingLogic"))
        .unwrap();

    assert_eq!(log.data_access_built.load(Ordering::SeqCst), 1);
    assert_eq!(log.business_logic_built.load(Ordering::SeqCst), 1);
    assert_eq!(*log.received.lock().unwrap(), vec![1.0]);
    assert_eq!(logic.name(), "RecordingLogic");
    assert_eq!(logic.calcul(), 2.0);
}

#[test]
fn test_unknown_data_access_never_builds_business_logic() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    let err = resolver
        .resolve(&ComponentDescriptor::new("Nonexistent", "RecordingLogic"))
        .unwrap_err();

    assert!(matches!(
        err,
        DependencyError::UnknownComponent { stage: ResolutionStage::DataAccess, ref name }
            if name == "Nonexistent"
    ));
    assert_eq!(err.stage(), Some(ResolutionStage::DataAccess));
    assert_eq!(log.business_logic_built.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_business_logic() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    let err = resolver
        .resolve(&ComponentDescriptor::new("SequenceDao", "Nonexistent"))
        .unwrap_err();

    assert!(matches!(
        err,
        DependencyError::UnknownComponent { stage: ResolutionStage::BusinessLogic, ref name }
            if name == "Nonexistent"
    ));
    assert_eq!(err.component_name(), Some("Nonexistent"));
}

#[test]
fn test_incompatible_constructors() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    // 第二个名称是数据访问组件，没有接收数据访问组件的构造器
    let err = resolver
        .resolve(&ComponentDescriptor::new("SequenceDao", "SequenceDao"))
        .unwrap_err();
    assert!(matches!(
        err,
        DependencyError::IncompatibleConstructor { stage: ResolutionStage::BusinessLogic, ref name, .. }
            if name == "SequenceDao"
    ));

    // 第一个名称是业务逻辑组件，没有无参构造器
    let err = resolver
        .resolve(&ComponentDescriptor::new("RecordingLogic", "RecordingLogic"))
        .unwrap_err();
    assert!(matches!(
        err,
        DependencyError::IncompatibleConstructor { stage: ResolutionStage::DataAccess, ref name, .. }
            if name == "RecordingLogic"
    ));
    assert_eq!(log.business_logic_built.load(Ordering::SeqCst), 0);
}

#[test]
fn test_construction_failure_is_reported() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    let err = resolver
        .resolve(&ComponentDescriptor::new("BrokenDao", "RecordingLogic"))
        .unwrap_err();

    assert!(matches!(
        err,
        DependencyError::ConstructionError { stage: ResolutionStage::DataAccess, ref name, .. }
            if name == "BrokenDao"
    ));
    assert!(err.to_string().contains("数据源不可用"));
    assert_eq!(log.business_logic_built.load(Ordering::SeqCst), 0);
}

#[test]
fn test_business_logic_construction_failure_is_reported() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);

    let result = resolver.resolve(&ComponentDescriptor::new("SequenceDao", "BrokenLogic"));

    let Err(err) = result else {
        panic!("业务逻辑组件构造失败时不应返回句柄");
    };
    assert!(matches!(
        err,
        DependencyError::ConstructionError { stage: ResolutionStage::BusinessLogic, ref name, .. }
            if name == "BrokenLogic"
    ));
    assert_eq!(err.stage(), Some(ResolutionStage::BusinessLogic));
    assert!(err.to_string().contains("计算规则缺失"));
    assert_eq!(log.data_access_built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_repeated_resolution_yields_independent_instances() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);
    let descriptor = ComponentDescriptor::new("SequenceDao", "RecordingLogic");

    let first = resolver.resolve(&descriptor).unwrap();
    let second = resolver.resolve(&descriptor).unwrap();

    assert_eq!(log.data_access_built.load(Ordering::SeqCst), 2);
    assert_eq!(*log.received.lock().unwrap(), vec![1.0, 2.0]);
    assert_eq!(first.calcul(), 2.0);
    assert_eq!(second.calcul(), 4.0);
}

#[test]
fn test_resolver_is_usable_across_threads() {
    let log = Arc::new(ConstructionLog::default());
    let registry = counting_registry(&log);
    let resolver = ComponentResolverImpl::new(&registry);
    let descriptor = ComponentDescriptor::new("SequenceDao", "RecordingLogic");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let logic = resolver.resolve(&descriptor).unwrap();
                assert!(logic.calcul() >= 2.0);
            });
        }
    });

    assert_eq!(log.data_access_built.load(Ordering::SeqCst), 4);
    assert_eq!(log.business_logic_built.load(Ordering::SeqCst), 4);
}
