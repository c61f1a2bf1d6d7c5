use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use vibecheck_core::{
    admin::{AdminSecret, AdminService},
    settings::{SettingsService, SettingsServiceTrait},
    vibes::{VibeRepositoryTrait, VoteService, VoteServiceTrait},
};
use vibecheck_storage_sqlite::{
    db::{self, write_actor},
    settings::SettingsRepository,
    vibes::VibeRepository,
};

use crate::{config::Config, domain_events::WebDomainEventSink, events::EventBus};

const EVENT_BUS_CAPACITY: usize = 256;

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub vote_service: Arc<dyn VoteServiceTrait>,
    pub admin_service: Arc<AdminService>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("VC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    // Phase 1: the sink buffers events until the worker is started below.
    let domain_event_sink = Arc::new(WebDomainEventSink::new());

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service: Arc<dyn SettingsServiceTrait> = Arc::new(SettingsService::new(
        settings_repo,
        domain_event_sink.clone(),
    ));

    let vibe_repo: Arc<dyn VibeRepositoryTrait> =
        Arc::new(VibeRepository::new(pool.clone(), writer.clone()));
    let vote_service: Arc<dyn VoteServiceTrait> = Arc::new(VoteService::new(
        vibe_repo.clone(),
        settings_service.clone(),
        domain_event_sink.clone(),
    ));

    let admin_secret = config.admin_password.as_deref().and_then(AdminSecret::new);
    let admin_service = Arc::new(AdminService::new(admin_secret, settings_service.clone()));
    if !admin_service.is_configured() {
        tracing::warn!("Admin secret not configured; censorship toggle will fail");
    }

    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);

    // Phase 2
    domain_event_sink.start_worker(vibe_repo, event_bus.clone());

    Ok(Arc::new(AppState {
        settings_service,
        vote_service,
        admin_service,
        event_bus,
    }))
}
