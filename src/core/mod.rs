//! # Core Framework Module
//!
//! 게이트웨이 전체가 공유하는 핵심 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 스키마 바인딩 레지스트리
//! - **GateRegistry**: 라우트·출처 → 검증 게이트
//! - **시작 시점 검증**: 중복 바인딩, 빠진 바인딩을 설정 에러로 보고
//! - **불변 공유**: 등록 후에는 읽기 전용, `Arc`로 워커 간 공유
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러에 컨텍스트를 붙여 변환
//!
//! ## Spring / NestJS와의 비교
//!
//! | Spring / NestJS | 이 프레임워크 |
//! |-----------------|---------------|
//! | `@Valid @RequestBody` / `@Body(pipe)` | `ValidBody<T>` + body 게이트 |
//! | `@Query(pipe)` | `ValidQuery<T>` + query 게이트 |
//! | `ValidationPipe` | `ValidationGate` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | `BadRequestException` | `AppError::ValidationError` |

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
