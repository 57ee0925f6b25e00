//! # Application Error Handling System
//!
//! 게이트웨이 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러와 미들웨어에서 반환한 에러가 곧바로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 스키마 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConfigurationError` | 500 Internal Server Error | 잘못된 스키마 바인딩, 설정값 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 검증 실패 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_failed",
//!   "message": "요청 데이터가 유효하지 않습니다",
//!   "origin": "body",
//!   "details": {
//!     "name": ["length must be at least 1"],
//!     "limit": ["must be at least 1"]
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::validation::field_errors::FieldErrors;
use crate::validation::origin::PayloadOrigin;

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// - `ValidationError`: 요청 시점 에러. 클라이언트가 페이로드를 고쳐 다시 보내야 하며 재시도하지 않습니다.
/// - `ConfigurationError`: 시작 시점 에러. 스키마 바인딩이 잘못되면 서버가 뜨지 않습니다.
/// - `NotFound`, `InternalError`: 그 밖의 HTTP 계층 에러
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// `origin`은 게이트를 통과하지 못한 페이로드의 출처입니다.
    /// 핸들러 추출 단계에서 만들어진 에러는 출처가 없을 수 있습니다.
    #[error("Validation error: {errors}")]
    ValidationError {
        origin: Option<PayloadOrigin>,
        errors: FieldErrors,
    },

    /// 설정 에러 (500 Internal Server Error)
    ///
    /// # 발생 시나리오
    /// - 같은 라우트·출처에 스키마를 두 번 바인딩
    /// - 라우트 ID나 스키마 이름이 비어 있음
    /// - 본문 크기 제한이 0
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 메시지를 `details`에 담고, 나머지는 `{"error": "..."}` 형식입니다.
    /// 5xx 에러는 서버 로그에만 상세 내용을 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::ValidationError { origin, errors } => HttpResponse::build(status).json(json!({
                "error": "validation_failed",
                "message": "요청 데이터가 유효하지 않습니다",
                "origin": origin,
                "details": errors,
            })),
            AppError::NotFound(_) => HttpResponse::build(status).json(json!({
                "error": self.to_string()
            })),
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                log::error!("🔥 {}", self);
                HttpResponse::build(status).json(json!({
                    "error": "internal_error"
                }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let value: ArticleRequest = serde_json::from_value(normalized)
///     .with_context(|| format!("normalized {} payload does not match handler type", origin))?;
/// ```
pub trait ErrorContext<T> {
    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError {
            origin: None,
            errors: FieldErrors::root("payload is required"),
        };
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validation_error_body_carries_details() {
        let mut errors = FieldErrors::new();
        errors.add("name", "length must be at least 1");
        let error = AppError::ValidationError {
            origin: Some(PayloadOrigin::Body),
            errors,
        };

        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "validation_failed");
        assert_eq!(json["origin"], "body");
        assert_eq!(json["details"]["name"][0], "length must be at least 1");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("route not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_configuration_error_response() {
        let error = AppError::ConfigurationError("duplicate binding".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.with_context(|| "Additional context".to_string());

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(1);
        let value = ok.with_context(|| panic!("must not be evaluated")).unwrap();
        assert_eq!(value, 1);
    }
}
