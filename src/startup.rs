use crate::shutdown;
use chrono::Local;
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use venturelink::components::calls::time::format_call_duration;
use venturelink::components::calls::{CallEvent, CallService};
use venturelink::components::connections::ConnectionInbox;
use venturelink::components::identity::CurrentUser;
use venturelink::components::payments::PaymentService;
use venturelink::components::scheduler::{MeetingScheduler, RequestStatus};
use venturelink::components::signing::SigningService;
use venturelink::components::ComponentManager;
use venturelink::config::Config;
use venturelink::error::Error;
use venturelink::render;

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Initialize components and run the session until a shutdown signal
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let user = {
        let config_read = config.read().await;
        CurrentUser::from_config(&config_read)
    };
    info!("Signed in as {} ({})", user.name, user.role.label());

    // Initialize component manager
    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(MeetingScheduler::new());
    component_manager.register(PaymentService::new());
    component_manager.register(SigningService::new());
    component_manager.register(CallService::new());
    component_manager.register(ConnectionInbox::new());

    let component_manager = Arc::new(component_manager);

    if let Err(e) = component_manager.init_all(Arc::clone(&config)).await {
        error!("Failed to initialize components: {:?}", e);
    }

    // Log call connect/disconnect events in the background
    if let Some(component) = component_manager.get_component_by_name("calls") {
        if let Some(calls) = component.as_any().downcast_ref::<CallService>() {
            if let Some(mut events) = calls.take_events().await {
                tokio::spawn(async move {
                    while let Some(event) = events.recv().await {
                        match event {
                            CallEvent::Connected { participant } => {
                                info!("Call connected with {}", participant);
                            }
                            CallEvent::Ended {
                                participant,
                                duration_secs,
                            } => {
                                info!(
                                    "Call with {} ended after {}",
                                    participant,
                                    format_call_duration(duration_secs)
                                );
                            }
                        }
                    }
                });
            }
        }
    }

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Clone component manager for shutdown handler
    let shutdown_components = Arc::clone(&component_manager);

    // Spawn signal handler task
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, shutdown_components).await;
    });

    // Show the scheduler in action before settling into the session
    run_scheduler_demo(&component_manager).await;

    info!("Session ready, press Ctrl-C to exit");
    let _ = shutdown_recv.await;
    info!("Session ended");

    Ok(())
}

/// Render the current month, accept the first pending meeting request and
/// render again so the accepted meeting shows up on the calendar
async fn run_scheduler_demo(component_manager: &Arc<ComponentManager>) {
    let scheduler = match component_manager.get_component_by_name("scheduler") {
        Some(component) => match component.as_any().downcast_ref::<MeetingScheduler>() {
            Some(scheduler) => scheduler,
            None => return,
        },
        None => return,
    };

    let handle = match scheduler.get_handle().await {
        Some(handle) => handle,
        None => return,
    };

    let today = Local::now().date_naive();
    let view = handle.render(today).await;
    println!("{}", render::format_month(&view));

    let pending_id = view
        .requests
        .iter()
        .find(|request| request.status == RequestStatus::Pending)
        .map(|request| request.id.clone());

    if let Some(id) = pending_id {
        handle.with_view(|v| v.accept_request(&id)).await;
        info!("Accepted meeting request {}", id);
        println!("{}", render::format_month(&handle.render(today).await));
    }
}
