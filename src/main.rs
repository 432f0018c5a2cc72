use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use blueconserve::config::{AppConfig, ShareConfig};
use blueconserve::engine::{FactorImpacts, LifestyleProfile, PenaltyComponent, TransportMode};
use blueconserve::error::AppError;
use blueconserve::session::pledge::CommunityView;
use blueconserve::session::share::{share_payload, SharePayload, SharePlatform};
use blueconserve::session::{EcosystemView, SessionState, SessionSummaryView, TipsDashboardView, View};
use blueconserve::engine::AchievementView;
use blueconserve::telemetry;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
struct AppState {
    session: Arc<RwLock<SessionState>>,
    share: Arc<ShareConfig>,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "BlueConserve",
    about = "Score lifestyle habits against ocean health and serve the companion API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute an Ocean Health Score report on the command line
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Plastic bottles used per week (0-50)
    #[arg(long, default_value_t = 0)]
    plastic: u8,
    /// Seafood meals per week (0-20)
    #[arg(long, default_value_t = 0)]
    seafood: u8,
    /// Primary transportation mode: walk, bike, public, car, or plane
    #[arg(long, value_parser = TransportMode::parse, default_value = "car")]
    transport: TransportMode,
    /// Daily shower time in minutes (5-60)
    #[arg(long, default_value_t = 10)]
    shower: u8,
    /// Include the personalized tip cards in the output
    #[arg(long)]
    list_tips: bool,
}

#[derive(Debug, Serialize)]
struct CalculatorResponse {
    score: u8,
    components: Vec<PenaltyComponent>,
    impacts: FactorImpacts,
    current_view: View,
}

#[derive(Debug, Deserialize)]
struct CompleteTipRequest {
    tip_id: String,
}

#[derive(Debug, Serialize)]
struct CompleteTipResponse {
    tip_id: String,
    newly_completed: bool,
    completed_tips: usize,
    achievements: Vec<AchievementView>,
}

#[derive(Debug, Deserialize)]
struct PledgeRequest {
    name: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct PledgeResponse {
    pledged: bool,
    total_pledges: u64,
}

#[derive(Debug, Deserialize)]
struct ShareQuery {
    platform: SharePlatform,
}

#[derive(Debug, Deserialize)]
struct NavigateRequest {
    view: View,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => {
            run_score_report(args);
            Ok(())
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        session: Arc::new(RwLock::new(SessionState::default())),
        share: Arc::new(config.share.clone()),
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "blueconserve companion service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/session", get(session_endpoint))
        .route("/api/v1/calculator", post(calculator_endpoint))
        .route("/api/v1/ecosystem", get(ecosystem_endpoint))
        .route("/api/v1/tips", get(tips_endpoint))
        .route("/api/v1/tips/complete", post(complete_tip_endpoint))
        .route("/api/v1/community", get(community_endpoint))
        .route("/api/v1/community/pledge", post(pledge_endpoint))
        .route("/api/v1/community/share", get(share_endpoint))
        .route("/api/v1/navigate", post(navigate_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn session_endpoint(State(state): State<AppState>) -> Json<SessionSummaryView> {
    let session = state.session.read().await;
    Json(session.summary())
}

/// The "compute and continue" action: the one transition that overwrites
/// the profile and the score snapshot.
async fn calculator_endpoint(
    State(state): State<AppState>,
    Json(profile): Json<LifestyleProfile>,
) -> Json<CalculatorResponse> {
    let mut session = state.session.write().await;
    let assessment = session.submit_calculator(profile);
    Json(CalculatorResponse {
        score: assessment.score,
        components: assessment.components,
        impacts: FactorImpacts::of(session.profile()),
        current_view: session.current_view(),
    })
}

async fn ecosystem_endpoint(State(state): State<AppState>) -> Json<EcosystemView> {
    let session = state.session.read().await;
    Json(session.ecosystem())
}

async fn tips_endpoint(State(state): State<AppState>) -> Json<TipsDashboardView> {
    let session = state.session.read().await;
    Json(session.tips_dashboard())
}

async fn complete_tip_endpoint(
    State(state): State<AppState>,
    Json(request): Json<CompleteTipRequest>,
) -> Json<CompleteTipResponse> {
    let mut session = state.session.write().await;
    let newly_completed = session.complete_tip(&request.tip_id);
    Json(CompleteTipResponse {
        tip_id: request.tip_id,
        newly_completed,
        completed_tips: session.completed_tips().len(),
        achievements: session.achievements(),
    })
}

async fn community_endpoint(State(state): State<AppState>) -> Json<CommunityView> {
    let session = state.session.read().await;
    Json(session.community(Utc::now()))
}

async fn pledge_endpoint(
    State(state): State<AppState>,
    Json(request): Json<PledgeRequest>,
) -> Json<PledgeResponse> {
    let mut session = state.session.write().await;
    let pledged = session.pledge(&request.name, &request.message);
    let total_pledges = session.community(Utc::now()).total_pledges;
    Json(PledgeResponse {
        pledged,
        total_pledges,
    })
}

async fn share_endpoint(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Json<SharePayload> {
    Json(share_payload(query.platform, &state.share.public_url))
}

async fn navigate_endpoint(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<SessionSummaryView> {
    let mut session = state.session.write().await;
    session.navigate(request.view);
    Json(session.summary())
}

fn run_score_report(args: ScoreArgs) {
    let ScoreArgs {
        plastic,
        seafood,
        transport,
        shower,
        list_tips,
    } = args;

    let mut session = SessionState::default();
    let assessment = session.submit_calculator(LifestyleProfile {
        plastic_bottles_per_week: plastic,
        seafood_meals_per_week: seafood,
        transport,
        shower_minutes_per_day: shower,
    });
    let ecosystem = session.ecosystem();

    println!("Ocean Health Score: {}/100", assessment.score);
    println!(
        "Ecosystem status: {} ({} tier)",
        ecosystem.mood_label, ecosystem.visual_tier
    );

    println!("\nPenalty breakdown");
    for component in &assessment.components {
        println!(
            "- {}: -{:.1} ({})",
            component.factor.label(),
            component.penalty,
            component.note
        );
    }

    println!("\nEcosystem outlook");
    println!("- Coral health: {}", ecosystem.coral_health);
    println!("- Marine life: {}", ecosystem.marine_life);
    println!("- Water quality: {}", ecosystem.visibility);
    println!("- Pollution level: {}", ecosystem.debris);

    println!("\nImpact factors");
    println!("- Plastic use: {}", ecosystem.impacts.plastic.label());
    println!("- Seafood impact: {}", ecosystem.impacts.marine_life.label());
    println!("- Carbon footprint: {}", ecosystem.impacts.carbon.label());

    if list_tips {
        println!("\nPersonalized tips");
        for card in session.tips_dashboard().cards {
            println!(
                "- [{}] {} ({} impact): {}",
                card.tip.category,
                card.tip.title,
                card.tip.impact.label(),
                card.tip.description
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;
    use tower::util::ServiceExt;

    fn metrics_handle() -> PrometheusHandle {
        static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
        HANDLE
            .get_or_init(|| PrometheusMetricLayer::pair().1)
            .clone()
    }

    fn test_state() -> AppState {
        AppState {
            session: Arc::new(RwLock::new(SessionState::default())),
            share: Arc::new(ShareConfig {
                public_url: "https://blueconserve.org".to_string(),
            }),
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: metrics_handle(),
        }
    }

    #[tokio::test]
    async fn calculator_endpoint_snapshots_score_and_navigates() {
        let state = test_state();
        let profile = LifestyleProfile {
            plastic_bottles_per_week: 0,
            seafood_meals_per_week: 0,
            transport: TransportMode::Walk,
            shower_minutes_per_day: 5,
        };

        let Json(body) = calculator_endpoint(State(state.clone()), Json(profile)).await;
        assert_eq!(body.score, 100);
        assert_eq!(body.current_view, View::Simulator);
        assert_eq!(body.components.len(), 4);

        let Json(summary) = session_endpoint(State(state)).await;
        assert_eq!(summary.score, 100);
        assert_eq!(summary.current_view, View::Simulator);
    }

    #[tokio::test]
    async fn tips_endpoint_reflects_completions_idempotently() {
        let state = test_state();

        let request = CompleteTipRequest {
            tip_id: "beach-cleanup".to_string(),
        };
        let Json(first) = complete_tip_endpoint(State(state.clone()), Json(request)).await;
        assert!(first.newly_completed);
        assert_eq!(first.completed_tips, 1);

        let request = CompleteTipRequest {
            tip_id: "beach-cleanup".to_string(),
        };
        let Json(second) = complete_tip_endpoint(State(state.clone()), Json(request)).await;
        assert!(!second.newly_completed);
        assert_eq!(second.completed_tips, 1);

        let Json(dashboard) = tips_endpoint(State(state)).await;
        assert!(dashboard
            .cards
            .iter()
            .any(|card| card.tip.id == "beach-cleanup" && card.completed));
    }

    #[tokio::test]
    async fn pledge_endpoint_ignores_whitespace_names() {
        let state = test_state();

        let request = PledgeRequest {
            name: "   ".to_string(),
            message: String::new(),
        };
        let Json(body) = pledge_endpoint(State(state.clone()), Json(request)).await;
        assert!(!body.pledged);

        let request = PledgeRequest {
            name: "Jordan".to_string(),
            message: "No more plastic straws.".to_string(),
        };
        let Json(body) = pledge_endpoint(State(state.clone()), Json(request)).await;
        assert!(body.pledged);

        let Json(community) = community_endpoint(State(state)).await;
        assert_eq!(community.wall[0].name, "Jordan");
    }

    #[tokio::test]
    async fn share_endpoint_builds_platform_links() {
        let state = test_state();
        let Json(payload) = share_endpoint(
            State(state),
            Query(ShareQuery {
                platform: SharePlatform::Twitter,
            }),
        )
        .await;

        let url = payload.url.expect("twitter share opens a URL");
        assert!(url.contains("twitter.com/intent/tweet"));
        assert!(url.contains("https%3A%2F%2Fblueconserve.org"));
    }

    #[tokio::test]
    async fn router_serves_healthcheck() {
        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["status"], "ok");
    }
}
