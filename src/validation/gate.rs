//! 스키마 검증 게이트
//!
//! 라우트 하나와 페이로드 출처 하나에 묶인 스키마로 요청 페이로드를 검사합니다.
//! 게이트는 상태가 없으며, 호출은 `(스키마, 출처, 페이로드)`에 대한 순수 함수입니다.
//!
//! # 동작 순서
//!
//! ```text
//! transform(payload, meta)
//!   ├─ observer.validation_invoked()      ← 항상 먼저 기록
//!   ├─ meta.origin != target   → 그대로 통과
//!   ├─ payload 비어 있음        → 그대로 통과
//!   └─ schema.safe_parse()
//!        ├─ Ok(normalized)     → 정규화된 값 반환
//!        └─ Err(field errors)  → ValidationFailure (400)
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::core::errors::{AppError, AppResult};
use crate::validation::field_errors::FieldErrors;
use crate::validation::observer::ValidationObserver;
use crate::validation::origin::{PayloadMeta, PayloadOrigin};
use crate::validation::schema::Schema;

/// 게이트 검증 실패
///
/// 원본 페이로드는 포함하지 않습니다. 실패한 페이로드는 다음 단계로 전달되지 않습니다.
#[derive(Debug, Clone, Error)]
#[error("validation failed for {origin} payload on `{route}`: {errors}")]
pub struct ValidationFailure {
    pub route: String,
    pub origin: PayloadOrigin,
    pub errors: FieldErrors,
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        AppError::ValidationError {
            origin: Some(failure.origin),
            errors: failure.errors,
        }
    }
}

/// 라우트·출처 하나에 묶인 검증 게이트
pub struct ValidationGate {
    route: String,
    target: PayloadOrigin,
    schema: Arc<dyn Schema>,
    observer: Arc<dyn ValidationObserver>,
}

impl ValidationGate {
    /// 게이트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 라우트 ID가 비어 있거나, 커스텀 출처 이름이
    ///   비어 있거나, 스키마 이름이 비어 있는 경우. 서버 시작 시점에 드러나는 치명적 오류입니다.
    pub fn new(
        route: impl Into<String>,
        target: PayloadOrigin,
        schema: Arc<dyn Schema>,
        observer: Arc<dyn ValidationObserver>,
    ) -> AppResult<Self> {
        let route = route.into();
        if route.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "validation gate requires a route id".to_string(),
            ));
        }
        if let PayloadOrigin::Custom(name) = &target {
            if name.trim().is_empty() {
                return Err(AppError::ConfigurationError(format!(
                    "route `{}`: custom payload origin must have a name",
                    route
                )));
            }
        }
        if schema.name().trim().is_empty() {
            return Err(AppError::ConfigurationError(format!(
                "route `{}`: {} schema must have a name",
                route, target
            )));
        }

        Ok(Self {
            route,
            target,
            schema,
            observer,
        })
    }

    /// 요청 본문용 게이트
    pub fn body(
        route: impl Into<String>,
        schema: Arc<dyn Schema>,
        observer: Arc<dyn ValidationObserver>,
    ) -> AppResult<Self> {
        Self::new(route, PayloadOrigin::Body, schema, observer)
    }

    /// 쿼리 스트링용 게이트
    pub fn query(
        route: impl Into<String>,
        schema: Arc<dyn Schema>,
        observer: Arc<dyn ValidationObserver>,
    ) -> AppResult<Self> {
        Self::new(route, PayloadOrigin::Query, schema, observer)
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn target(&self) -> &PayloadOrigin {
        &self.target
    }

    pub fn schema_name(&self) -> &str {
        self.schema.name()
    }

    /// 페이로드를 검사하고 정규화된 값을 반환합니다.
    ///
    /// 출처가 다르거나 페이로드가 비어 있으면 입력을 그대로 돌려줍니다.
    pub fn transform(&self, payload: Value, meta: &PayloadMeta) -> Result<Value, ValidationFailure> {
        self.observer
            .validation_invoked(&self.route, self.schema.name(), meta);

        if meta.origin != self.target || is_empty_payload(&payload) {
            return Ok(payload);
        }

        self.schema.safe_parse(&payload).map_err(|errors| {
            self.observer
                .validation_rejected(&self.route, &self.target, &errors);
            ValidationFailure {
                route: self.route.clone(),
                origin: self.target.clone(),
                errors,
            }
        })
    }
}

impl fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationGate")
            .field("route", &self.route)
            .field("target", &self.target)
            .field("schema", &self.schema.name())
            .finish()
    }
}

/// 비어 있거나 없는 페이로드인지 확인합니다.
///
/// `null`, 빈 객체, 빈 배열, 공백뿐인 문자열을 비어 있는 것으로 봅니다.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
