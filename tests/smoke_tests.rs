use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use venturelink::components::calls::CallService;
use venturelink::components::connections::ConnectionInbox;
use venturelink::components::identity::{CurrentUser, UserRole};
use venturelink::components::payments::PaymentService;
use venturelink::components::scheduler::MeetingScheduler;
use venturelink::components::signing::SigningService;
use venturelink::components::ComponentManager;
use venturelink::config::Config;

/// Build a minimal config for testing
fn test_config() -> Config {
    let mut components = HashMap::new();
    components.insert("scheduler".to_string(), true);
    components.insert("payments".to_string(), true);
    components.insert("signing".to_string(), true);
    components.insert("calls".to_string(), true);
    components.insert("connections".to_string(), true);

    Config {
        user_id: "u-1".to_string(),
        user_name: "Maria Laine".to_string(),
        user_role: "entrepreneur".to_string(),
        slot_title: "Available".to_string(),
        slot_start_time: "09:00".to_string(),
        slot_end_time: "10:00".to_string(),
        starting_balance: 5420.75,
        call_connect_delay_secs: 0,
        components,
    }
}

/// Smoke test to verify that the config can be constructed
#[tokio::test]
async fn test_config_loads() {
    let config = test_config();

    assert_eq!(config.slot_start_time, "09:00");
    assert!(config.is_component_enabled("scheduler"));
    assert!(!config.is_component_enabled("unknown"));
}

/// Smoke test for the identity provider
#[tokio::test]
async fn test_current_user_from_config() {
    let config = test_config();
    let user = CurrentUser::from_config(&config);

    assert_eq!(user.id, "u-1");
    assert_eq!(user.name, "Maria Laine");
    assert_eq!(user.role, UserRole::Entrepreneur);

    let mut investor_config = test_config();
    investor_config.user_role = "Investor".to_string();
    let investor = CurrentUser::from_config(&investor_config);
    assert_eq!(investor.role, UserRole::Investor);
}

/// Full component lifecycle: register, init, look up, shut down
#[tokio::test]
async fn test_component_manager_lifecycle() {
    let config = Arc::new(RwLock::new(test_config()));

    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(MeetingScheduler::new());
    component_manager.register(PaymentService::new());
    component_manager.register(SigningService::new());
    component_manager.register(CallService::new());
    component_manager.register(ConnectionInbox::new());

    component_manager
        .init_all(Arc::clone(&config))
        .await
        .unwrap();

    let scheduler = component_manager
        .get_component_by_name("scheduler")
        .and_then(|c| c.as_any().downcast_ref::<MeetingScheduler>())
        .expect("scheduler component registered");
    assert!(scheduler.get_handle().await.is_some());

    assert!(component_manager.get_component_by_name("missing").is_none());

    component_manager.shutdown_all().await.unwrap();
    assert!(scheduler.get_handle().await.is_none());
}

/// Disabled components are skipped during init
#[tokio::test]
async fn test_disabled_component_is_skipped() {
    let mut raw_config = test_config();
    raw_config
        .components
        .insert("payments".to_string(), false);
    let config = Arc::new(RwLock::new(raw_config));

    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(PaymentService::new());

    component_manager
        .init_all(Arc::clone(&config))
        .await
        .unwrap();

    let payments = component_manager
        .get_component_by_name("payments")
        .and_then(|c| c.as_any().downcast_ref::<PaymentService>())
        .expect("payments component registered");
    assert!(payments.get_handle().await.is_none());

    component_manager.shutdown_all().await.unwrap();
}
