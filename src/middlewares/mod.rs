//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 핸들러보다 먼저 실행되는 미들웨어를 제공합니다.
//! NestJS의 Pipe, Spring Boot의 `@Valid`와 비슷한 자리에서 요청 페이로드를 검사합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 검증 미들웨어 (ValidationMiddleware)
//! - 라우트에 바인딩된 게이트로 body / query / path 파라미터 검사
//! - 실패 시 400 응답을 돌려주고 핸들러를 호출하지 않음
//! - 통과한 페이로드를 정규화하여 request extension에 저장
//!
//! ### 2. 추출자 (ValidBody / ValidQuery / ValidParams)
//! - request extension의 정규화된 페이로드를 핸들러 인자 타입으로 변환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! cfg.service(
//!     web::resource("/api/v1/admin/articles/{article_id}")
//!         .wrap(registry.middleware("admin.articles.update")) // param + body 게이트
//!         .route(web::put().to(handlers::admin::update_article))
//! );
//! ```
//!
//! 경로 파라미터 게이트를 쓰려면 `web::scope`가 아닌 `web::resource`에 씌워야 합니다.
//! 리소스 단위 미들웨어가 실행될 때에야 경로 매칭 결과가 채워집니다.

pub mod validated;
pub mod validation_middleware;
mod validation_inner;

// 미들웨어 재export
pub use validated::{normalized_payload, NormalizedPayloads, ValidBody, ValidParams, ValidQuery};
pub use validation_middleware::ValidationMiddleware;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use validator::Validate;

    use super::*;
    use crate::core::errors::AppError;
    use crate::core::registry::GateRegistry;
    use crate::utils::serde_helpers::deserialize_optional_i64;
    use crate::validation::observer::testing::RecordingObserver;

    #[derive(Debug, Deserialize, Serialize, Validate)]
    struct WidgetRequest {
        #[validate(length(min = 1))]
        name: String,
        #[serde(
            default,
            deserialize_with = "deserialize_optional_i64",
            skip_serializing_if = "Option::is_none"
        )]
        #[validate(range(min = 1))]
        limit: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize, Validate)]
    struct WidgetParams {
        #[validate(length(min = 3))]
        widget_id: String,
    }

    async fn echo_body(ValidBody(widget): ValidBody<WidgetRequest>) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().json(widget))
    }

    async fn echo_query(ValidQuery(widget): ValidQuery<WidgetRequest>) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().json(widget))
    }

    async fn echo_both(
        ValidParams(params): ValidParams<WidgetParams>,
        ValidBody(widget): ValidBody<WidgetRequest>,
    ) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().json(json!({"id": params.widget_id, "name": widget.name})))
    }

    async fn unreachable_handler() -> HttpResponse {
        HttpResponse::ImATeapot().finish()
    }

    fn registry(observer: Arc<RecordingObserver>) -> GateRegistry {
        GateRegistry::builder(observer)
            .bind_body::<WidgetRequest>("widgets.create")
            .and_then(|b| b.bind_query::<WidgetRequest>("widgets.list"))
            .and_then(|b| b.bind_params::<WidgetParams>("widgets.update"))
            .and_then(|b| b.bind_body::<WidgetRequest>("widgets.update"))
            .unwrap()
            .build()
    }

    macro_rules! widget_app {
        ($registry:expr) => {
            test::init_service(
                App::new()
                    .service(
                        web::resource("/widgets")
                            .wrap($registry.middleware("widgets.create"))
                            .route(web::post().to(echo_body)),
                    )
                    .service(
                        web::resource("/widgets/search")
                            .wrap($registry.middleware("widgets.list"))
                            .route(web::get().to(echo_query)),
                    )
                    .service(
                        web::resource("/widgets/{widget_id}")
                            .wrap($registry.middleware("widgets.update"))
                            .route(web::put().to(echo_both)),
                    )
                    .service(
                        web::resource("/guarded")
                            .wrap($registry.middleware("widgets.create"))
                            .route(web::post().to(unreachable_handler)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_invalid_body_is_rejected_with_field_errors() {
        let observer = Arc::new(RecordingObserver::default());
        let registry = registry(observer.clone());
        let app = widget_app!(registry);

        let req = test::TestRequest::post()
            .uri("/guarded")
            .set_json(json!({"name": "", "limit": 0}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["origin"], "body");
        assert!(body["details"]["name"].is_array());
        assert!(body["details"]["limit"].is_array());
        assert_eq!(observer.rejected_count(), 1);
    }

    #[actix_web::test]
    async fn test_valid_body_reaches_handler_normalized() {
        let registry = registry(Arc::new(RecordingObserver::default()));
        let app = widget_app!(registry);

        let req = test::TestRequest::post()
            .uri("/widgets")
            .set_json(json!({"name": "widget", "limit": "4"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"name": "widget", "limit": 4}));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_rejected() {
        let registry = registry(Arc::new(RecordingObserver::default()));
        let app = widget_app!(registry);

        let req = test::TestRequest::post()
            .uri("/widgets")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["details"]["_root"].is_array());
    }

    #[actix_web::test]
    async fn test_non_json_body_is_unsupported_media_type() {
        let observer = Arc::new(RecordingObserver::default());
        let registry = registry(observer.clone());
        let app = widget_app!(registry);

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header(("content-type", "text/plain"))
            .set_payload("{\"name\":\"widget\"}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(observer.invoked_count(), 0);
    }

    #[actix_web::test]
    async fn test_empty_body_passes_gate_but_handler_requires_fields() {
        let observer = Arc::new(RecordingObserver::default());
        let registry = registry(observer.clone());
        let app = widget_app!(registry);

        let req = test::TestRequest::post().uri("/widgets").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"]["_root"][0], "payload is required");
        assert_eq!(observer.invoked_count(), 1);
        assert_eq!(observer.rejected_count(), 0);
    }

    #[actix_web::test]
    async fn test_query_is_coerced_and_validated() {
        let registry = registry(Arc::new(RecordingObserver::default()));
        let app = widget_app!(registry);

        let req = test::TestRequest::get()
            .uri("/widgets/search?name=bolt&limit=10")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"name": "bolt", "limit": 10}));

        let req = test::TestRequest::get()
            .uri("/widgets/search?name=bolt&limit=0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["origin"], "query");
    }

    #[actix_web::test]
    async fn test_params_and_body_gates_on_one_route() {
        let registry = registry(Arc::new(RecordingObserver::default()));
        let app = widget_app!(registry);

        let req = test::TestRequest::put()
            .uri("/widgets/w-100")
            .set_json(json!({"name": "widget"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"id": "w-100", "name": "widget"}));

        let req = test::TestRequest::put()
            .uri("/widgets/w1")
            .set_json(json!({"name": "widget"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["origin"], "param");
        assert!(body["details"]["widget_id"].is_array());
    }

    #[actix_web::test]
    async fn test_missing_gate_is_internal_error() {
        let registry = registry(Arc::new(RecordingObserver::default()));
        let app = test::init_service(
            App::new().service(
                web::resource("/unwired")
                    .wrap(registry.middleware("no.such.route"))
                    .route(web::post().to(echo_body)),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/unwired")
            .set_json(json!({"name": "widget"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
