//! 스키마 바인딩 조회 핸들러

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::registry::GateRegistry;

/// 등록된 (라우트, 출처, 스키마) 바인딩 목록
///
/// ```bash
/// curl http://localhost:8080/api/v1/schemas
/// ```
///
/// Response:
/// ```json
/// {
///   "count": 14,
///   "bindings": [
///     { "route": "admin.articles.create", "origin": "body", "schema": "ArticleRequest" }
///   ]
/// }
/// ```
pub async fn list_schemas(registry: web::Data<GateRegistry>) -> HttpResponse {
    let bindings = registry.bindings();
    HttpResponse::Ok().json(json!({
        "count": bindings.len(),
        "bindings": bindings,
    }))
}
