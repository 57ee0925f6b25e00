//! # Domain Layer Module
//!
//! 스토어프론트와 관리자 백오피스의 요청 계약(DTO)을 담는 계층입니다.
//! 비즈니스 로직과 영속성은 하위 REST 백엔드가 담당하며,
//! 이 계층은 게이트가 검사할 스키마만 정의합니다.
//!
//! ```text
//! HTTP 요청
//!    │
//!    ▼
//! ValidationMiddleware ── dto 스키마로 safe parse
//!    │
//!    ▼
//! Handlers (ValidBody / ValidQuery / ValidParams)
//! ```

pub mod dto;

pub use dto::*;
