//! 스토어프론트 게이트웨이 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 시작 시점에 모든 라우트의 스키마 바인딩을 등록·검증하고,
//! 검증 게이트가 씌워진 스토어프론트/관리자 API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use storefront_gateway::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, ValidationConfig,
};
use storefront_gateway::core::errors::AppResult;
use storefront_gateway::core::registry::GateRegistry;
use storefront_gateway::routes::{build_gate_registry, configure_all_routes, ROUTES};
use storefront_gateway::validation::LogObserver;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let environment = Environment::current();
    info!("🚀 스토어프론트 게이트웨이 시작중... (환경: {:?})", environment);

    let validation_config = ValidationConfig::from_env().map_err(startup_error)?;
    let registry = initialize_gate_registry(&validation_config).map_err(startup_error)?;

    info!("✅ 검증 게이트 초기화 완료!");

    // HTTP 서버 시작
    start_http_server(Arc::new(registry), validation_config).await
}

/// 모든 라우트의 스키마 바인딩을 등록하고 빠진 바인딩이 없는지 확인합니다
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 중복/누락 바인딩, 잘못된 스키마 설정
fn initialize_gate_registry(config: &ValidationConfig) -> AppResult<GateRegistry> {
    info!("🧩 검증 게이트 등록 중... (로그 target: {})", config.log_target);

    let observer = Arc::new(LogObserver::new(config.log_target.clone()));
    let registry = build_gate_registry(observer)?;
    registry.require(ROUTES)?;

    for binding in registry.bindings() {
        info!("   {} [{}] → {}", binding.route, binding.origin, binding.schema);
    }

    Ok(registry)
}

/// 시작 시점 설정 에러를 로그로 남기고 프로세스 종료용 I/O 에러로 바꿉니다
fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    error!("❌ 서버 시작 실패: {}", err);
    std::io::Error::other(err.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화, 본문 크기 제한을 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    registry: Arc<GateRegistry>,
    validation_config: ValidationConfig,
) -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Schemas: http://{}/api/v1/schemas", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| startup_error("Rate Limiting 설정값은 0보다 커야 합니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();
    let max_body_bytes = validation_config.max_body_bytes;
    info!("📦 요청 본문 최대 크기: {} bytes", max_body_bytes);

    HttpServer::new(move || {
        let registry = registry.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 검증 미들웨어가 본문을 읽을 때 적용되는 크기 제한
            .app_data(web::PayloadConfig::new(max_body_bytes))
            // 라우트 설정
            .configure(move |cfg| configure_all_routes(cfg, registry))
    })
    .bind(bind_address)?
    .workers(server_config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 검증 게이트 호출까지 모두 보기
/// RUST_LOG=info,validation=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 스토어프론트와 관리자 화면의 Origin만 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
