use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use meet::{Database, ScoringConfig};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{clubs, entries, events, results, swimmers, times};
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        swimmers::handlers::list_swimmers,
        swimmers::handlers::get_swimmer,
        swimmers::handlers::create_swimmer,
        swimmers::handlers::update_swimmer,
        swimmers::handlers::delete_swimmer,
        clubs::handlers::list_clubs,
        clubs::handlers::create_club,
        events::handlers::list_events,
        events::handlers::create_event,
        events::handlers::get_participants,
        events::handlers::get_eligible,
        events::handlers::get_top8,
        events::handlers::recalculate,
        entries::handlers::add_individual_entry,
        entries::handlers::add_relay_entry,
        entries::handlers::delete_individual_entry,
        entries::handlers::delete_relay_entry,
        entries::handlers::assign_lane,
        times::handlers::record_times,
        times::handlers::record_final_times,
        results::handlers::get_results,
        results::handlers::get_audit,
    ),
    components(
        schemas(
            meet::dto::swimmer::CreateSwimmerRequest,
            meet::dto::swimmer::UpdateSwimmerRequest,
            meet::dto::swimmer::SwimmerInfo,
            meet::dto::swimmer::SwimmerDetailResponse,
            meet::dto::swimmer::SwimmerEventInfo,
            meet::dto::swimmer::SwimmerRelayInfo,
            meet::dto::swimmer::RegistrationResponse,
            meet::dto::club::CreateClubRequest,
            meet::dto::event::CreateEventRequest,
            meet::dto::event::EventSummary,
            meet::dto::event::EventParticipants,
            meet::dto::event::ParticipantDetail,
            meet::dto::event::RelayParticipantDetail,
            meet::dto::entry::AddIndividualEntryRequest,
            meet::dto::entry::AddRelayEntryRequest,
            meet::dto::entry::AssignLaneRequest,
            meet::dto::entry::TimeUpdate,
            meet::dto::entry::FinalTimeUpdate,
            meet::dto::entry::IndividualEntryResponse,
            meet::dto::entry::RelayEntryResponse,
            meet::dto::entry::TimesRecordedResponse,
            meet::dto::results::ResultsResponse,
            meet::dto::results::EventResult,
            meet::dto::results::RankedParticipant,
            meet::dto::results::CohortStanding,
            meet::dto::results::SwimmerStanding,
            meet::dto::results::ClubStanding,
            meet::dto::audit::EntryAuditReport,
            meet::dto::audit::CapViolation,
            meet::dto::audit::ClubDuplicate,
            meet::models::Swimmer,
            meet::models::Club,
            meet::models::Event,
            meet::models::IndividualEntry,
            meet::models::FinalEntry,
            meet::models::RelayEntry,
            meet::models::EntryRef,
            meet::models::AgeGroup,
            meet::models::Gender,
            meet::models::ScoringMode,
        )
    ),
    tags(
        (name = "swimmers", description = "Swimmer registration"),
        (name = "clubs", description = "Clubs and their points"),
        (name = "events", description = "Events, seating and finalists"),
        (name = "entries", description = "Individual and relay entries"),
        (name = "times", description = "Heat, relay and final-round times"),
        (name = "results", description = "Medals, standings and entry audit"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting swim meet API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let scoring = match &config.scoring_config {
        Some(path) => {
            tracing::info!("Loading scoring rules from {}", path);
            ScoringConfig::from_file(path).context("Failed to load scoring rules")?
        }
        None => {
            tracing::info!("Using built-in scoring rules");
            ScoringConfig::default()
        }
    };

    let db = match &config.snapshot_path {
        Some(path) if Path::new(path).exists() => {
            tracing::info!("Restoring meet data from {}", path);
            Database::load_snapshot(path).context("Failed to load meet snapshot")?
        }
        _ => Database::new(),
    };

    let state = AppState::new(db, scoring);
    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::api_router(state.clone(), api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &config.snapshot_path {
        state
            .db
            .save_snapshot(path)
            .context("Failed to write meet snapshot")?;
        tracing::info!("Meet data saved to {}", path);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
