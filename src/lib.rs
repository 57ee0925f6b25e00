//! 스토어프론트 게이트웨이
//!
//! 멀티 테넌트 커머스/CMS 플랫폼의 요청 검증 게이트웨이입니다.
//! 스토어프론트와 관리자 백오피스로 들어오는 요청의 본문, 쿼리, 경로 파라미터를
//! 핸들러 실행 전에 스키마로 검사하고, 통과한 페이로드만 정규화하여 전달합니다.
//!
//! # Features
//!
//! - **검증 게이트**: 출처 일치 → 빈 값 통과 → safe parse 순서의 스키마 검사
//! - **구조화된 에러**: 필드 경로 → 메시지 목록 형태의 400 응답
//! - **게이트 레지스트리**: 라우트·출처별 스키마 바인딩, 시작 시점 설정 검증
//! - **ActixWeb 통합**: 리소스 단위 미들웨어와 `ValidBody`/`ValidQuery`/`ValidParams` 추출자
//! - **스키마 카탈로그**: 스토어프론트·관리자 엔드포인트 요청 DTO
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← ValidationMiddleware (게이트 실행)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← ValidationGate, Schema, FieldErrors
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 정규화된 페이로드 수신
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_gateway::routes::{build_gate_registry, ROUTES};
//! use storefront_gateway::validation::LogObserver;
//!
//! let registry = build_gate_registry(Arc::new(LogObserver::default()))?;
//! registry.require(ROUTES)?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod utils;
pub mod validation;
