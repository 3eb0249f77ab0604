use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use kink_test::config::AppConfig;
use kink_test::content::ArticleRegistry;
use kink_test::error::AppError;
use kink_test::quiz::QuizService;
use kink_test::store::FileResultStore;
use kink_test::telemetry;
use kink_test::vitals::VitalsLedger;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let store = Arc::new(FileResultStore::new(config.storage.result_dir.clone()));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        vitals: Arc::new(VitalsLedger::new()),
        articles: Arc::new(ArticleRegistry::standard()),
        store: store.clone(),
    };

    let quiz_service = Arc::new(QuizService::new(store));

    let app = with_service_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, result_dir = %config.storage.result_dir.display(), "quiz service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
