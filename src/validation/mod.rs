//! # Request Validation Gate
//!
//! 라우트 핸들러가 실행되기 전에 요청 페이로드를 스키마로 검사하는 게이트입니다.
//! NestJS의 `ValidationPipe`나 Spring의 `@Valid`와 같은 자리에 위치합니다.
//!
//! ## 구성 요소
//!
//! - [`origin`] - 페이로드 출처 태그 (`body`, `query`, `param`, 커스텀)
//! - [`schema`] - `Schema` trait과 serde + `validator` 기반 `TypedSchema`
//! - [`field_errors`] - 필드 경로 → 메시지 목록 형태의 구조화된 에러
//! - [`observer`] - 게이트에 주입되는 관측 핸들
//! - [`gate`] - 출처 일치 → 빈 값 확인 → safe parse 순서로 동작하는 게이트
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_gateway::validation::{typed, LogObserver, PayloadMeta, ValidationGate};
//!
//! let gate = ValidationGate::body(
//!     "contact.submit",
//!     typed::<ContactSubmissionRequest>(),
//!     Arc::new(LogObserver::default()),
//! )?;
//!
//! match gate.transform(payload, &PayloadMeta::body()) {
//!     Ok(normalized) => forward(normalized),
//!     Err(failure) => return Err(failure.into()), // 400 Bad Request
//! }
//! ```

pub mod field_errors;
pub mod gate;
pub mod observer;
pub mod origin;
pub mod schema;

pub use field_errors::FieldErrors;
pub use gate::{is_empty_payload, ValidationFailure, ValidationGate};
pub use observer::{LogObserver, NoopObserver, ValidationObserver};
pub use origin::{PayloadMeta, PayloadOrigin};
pub use schema::{typed, Schema, TypedSchema};
