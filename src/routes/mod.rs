//! API 라우트 설정 모듈
//!
//! 스토어프론트와 관리자 엔드포인트를 등록하고, 각 리소스에 검증 미들웨어를 씌웁니다.
//! 스키마 바인딩은 [`build_gate_registry`]에서 한 번만 정의하고, 라우트는 라우트 ID로
//! 바인딩을 참조합니다.
//!
//! # Features
//!
//! - 라우트 ID ↔ (출처, 스키마) 바인딩 정의
//! - 리소스 단위 `ValidationMiddleware` 적용 (경로 파라미터 검증 포함)
//! - 스키마 목록 조회, 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::App;
//!
//! let registry = Arc::new(build_gate_registry(Arc::new(LogObserver::default()))?);
//! registry.require(ROUTES)?;
//!
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, registry.clone()));
//! ```

use std::sync::Arc;

use actix_web::web;
use serde_json::json;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::GateRegistry;
use crate::domain::dto::{
    AddressRequest, ArticleParams, ArticleRequest, BlogRequest, ContactSubmissionQuery,
    ContactSubmissionRequest, MediaListQuery, NewsletterRequest, OrderListQuery,
    ProfileUpdateRequest, PublicationListQuery, PublicationRequest, SettingsUpdateRequest,
};
use crate::handlers;
use crate::validation::ValidationObserver;

/// 라우트 ID
///
/// 로그, 에러 응답, 스키마 목록에서 라우트를 가리키는 이름입니다.
pub mod route_ids {
    pub const STORE_PROFILE_UPDATE: &str = "store.profile.update";
    pub const STORE_ORDERS_LIST: &str = "store.orders.list";
    pub const STORE_ADDRESS_CREATE: &str = "store.addresses.create";
    pub const STORE_PUBLICATIONS_LIST: &str = "store.publications.list";
    pub const CONTACT_SUBMIT: &str = "contact.submit";

    pub const ADMIN_MEDIA_LIST: &str = "admin.media.list";
    pub const ADMIN_ARTICLE_CREATE: &str = "admin.articles.create";
    pub const ADMIN_ARTICLE_UPDATE: &str = "admin.articles.update";
    pub const ADMIN_BLOG_CREATE: &str = "admin.blogs.create";
    pub const ADMIN_NEWSLETTER_CREATE: &str = "admin.newsletters.create";
    pub const ADMIN_PUBLICATION_CREATE: &str = "admin.publications.create";
    pub const ADMIN_CONTACT_SUBMISSIONS_LIST: &str = "admin.contact_submissions.list";
    pub const ADMIN_SETTINGS_UPDATE: &str = "admin.settings.update";
}

use route_ids::*;

/// 검증 게이트가 반드시 바인딩되어 있어야 하는 라우트 목록
pub const ROUTES: &[&str] = &[
    STORE_PROFILE_UPDATE,
    STORE_ORDERS_LIST,
    STORE_ADDRESS_CREATE,
    STORE_PUBLICATIONS_LIST,
    CONTACT_SUBMIT,
    ADMIN_MEDIA_LIST,
    ADMIN_ARTICLE_CREATE,
    ADMIN_ARTICLE_UPDATE,
    ADMIN_BLOG_CREATE,
    ADMIN_NEWSLETTER_CREATE,
    ADMIN_PUBLICATION_CREATE,
    ADMIN_CONTACT_SUBMISSIONS_LIST,
    ADMIN_SETTINGS_UPDATE,
];

/// 모든 라우트의 스키마 바인딩을 등록합니다.
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 같은 라우트·출처에 스키마가 두 번 바인딩된 경우
pub fn build_gate_registry(observer: Arc<dyn ValidationObserver>) -> AppResult<GateRegistry> {
    let registry = GateRegistry::builder(observer)
        // Storefront
        .bind_body::<ProfileUpdateRequest>(STORE_PROFILE_UPDATE)?
        .bind_query::<OrderListQuery>(STORE_ORDERS_LIST)?
        .bind_body::<AddressRequest>(STORE_ADDRESS_CREATE)?
        .bind_query::<PublicationListQuery>(STORE_PUBLICATIONS_LIST)?
        .bind_body::<ContactSubmissionRequest>(CONTACT_SUBMIT)?
        // Admin
        .bind_query::<MediaListQuery>(ADMIN_MEDIA_LIST)?
        .bind_body::<ArticleRequest>(ADMIN_ARTICLE_CREATE)?
        .bind_params::<ArticleParams>(ADMIN_ARTICLE_UPDATE)?
        .bind_body::<ArticleRequest>(ADMIN_ARTICLE_UPDATE)?
        .bind_body::<BlogRequest>(ADMIN_BLOG_CREATE)?
        .bind_body::<NewsletterRequest>(ADMIN_NEWSLETTER_CREATE)?
        .bind_body::<PublicationRequest>(ADMIN_PUBLICATION_CREATE)?
        .bind_query::<ContactSubmissionQuery>(ADMIN_CONTACT_SUBMISSIONS_LIST)?
        .bind_body::<SettingsUpdateRequest>(ADMIN_SETTINGS_UPDATE)?
        .build();

    Ok(registry)
}

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `registry` - 스키마 바인딩 레지스트리 (스키마 목록 API에도 공유)
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, registry: Arc<GateRegistry>) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.app_data(web::Data::from(registry.clone()));
    cfg.service(web::resource("/api/v1/schemas").route(web::get().to(handlers::schemas::list_schemas)));

    configure_storefront_routes(cfg, &registry);
    configure_admin_routes(cfg, &registry);

    // 등록되지 않은 경로는 JSON 404
    cfg.default_service(web::route().to(route_not_found));
}

/// 스토어프론트 라우트를 설정합니다
///
/// 경로 파라미터 검증을 위해 scope가 아닌 resource 단위로 미들웨어를 씌웁니다.
///
/// ```bash
/// curl -X GET "http://localhost:8080/api/v1/store/orders?page=2&status=paid"
///
/// curl -X POST http://localhost:8080/api/v1/contact \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane","email":"jane@example.com","message":"Where is my order?"}'
/// ```
fn configure_storefront_routes(cfg: &mut web::ServiceConfig, registry: &GateRegistry) {
    cfg.service(
        web::scope("/api/v1/store")
            .service(
                web::resource("/profile")
                    .wrap(registry.middleware(STORE_PROFILE_UPDATE))
                    .route(web::put().to(handlers::storefront::update_profile)),
            )
            .service(
                web::resource("/orders")
                    .wrap(registry.middleware(STORE_ORDERS_LIST))
                    .route(web::get().to(handlers::storefront::list_orders)),
            )
            .service(
                web::resource("/addresses")
                    .wrap(registry.middleware(STORE_ADDRESS_CREATE))
                    .route(web::post().to(handlers::storefront::create_address)),
            )
            .service(
                web::resource("/publications")
                    .wrap(registry.middleware(STORE_PUBLICATIONS_LIST))
                    .route(web::get().to(handlers::storefront::list_publications)),
            ),
    );

    // Public contact form
    cfg.service(
        web::resource("/api/v1/contact")
            .wrap(registry.middleware(CONTACT_SUBMIT))
            .route(web::post().to(handlers::storefront::submit_contact)),
    );
}

/// 관리자 백오피스 라우트를 설정합니다
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/admin/articles/a-100 \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Spring Sale","slug":"spring-sale","body":"..."}'
/// ```
fn configure_admin_routes(cfg: &mut web::ServiceConfig, registry: &GateRegistry) {
    cfg.service(
        web::scope("/api/v1/admin")
            .service(
                web::resource("/media")
                    .wrap(registry.middleware(ADMIN_MEDIA_LIST))
                    .route(web::get().to(handlers::admin::list_media)),
            )
            .service(
                web::resource("/articles")
                    .wrap(registry.middleware(ADMIN_ARTICLE_CREATE))
                    .route(web::post().to(handlers::admin::create_article)),
            )
            .service(
                web::resource("/articles/{article_id}")
                    .wrap(registry.middleware(ADMIN_ARTICLE_UPDATE))
                    .route(web::put().to(handlers::admin::update_article)),
            )
            .service(
                web::resource("/blogs")
                    .wrap(registry.middleware(ADMIN_BLOG_CREATE))
                    .route(web::post().to(handlers::admin::create_blog)),
            )
            .service(
                web::resource("/newsletters")
                    .wrap(registry.middleware(ADMIN_NEWSLETTER_CREATE))
                    .route(web::post().to(handlers::admin::create_newsletter)),
            )
            .service(
                web::resource("/publications")
                    .wrap(registry.middleware(ADMIN_PUBLICATION_CREATE))
                    .route(web::post().to(handlers::admin::create_publication)),
            )
            .service(
                web::resource("/contact-submissions")
                    .wrap(registry.middleware(ADMIN_CONTACT_SUBMISSIONS_LIST))
                    .route(web::get().to(handlers::admin::list_contact_submissions)),
            )
            .service(
                web::resource("/settings")
                    .wrap(registry.middleware(ADMIN_SETTINGS_UPDATE))
                    .route(web::patch().to(handlers::admin::update_settings)),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "storefront_gateway",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "validation": "serde + validator",
///     "rate_limit": "actix-governor"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "storefront_gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "validation": "serde + validator",
            "rate_limit": "actix-governor"
        }
    }))
}

/// 등록되지 않은 경로에 대한 응답
async fn route_not_found(req: actix_web::HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}
