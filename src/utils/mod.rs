//! 공통 유틸리티 함수 모듈
//!
//! 요청 스키마 전반에서 사용하는 serde 도우미를 제공합니다.
//!
//! # Modules
//!
//! - [`serde_helpers`] - 문자열 정리, 쿼리 스트링 값의 숫자/불리언 강제 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::serde_helpers::deserialize_optional_string;
//!
//! #[derive(Deserialize)]
//! struct PublicationListQuery {
//!     #[serde(default, deserialize_with = "deserialize_optional_string")]
//!     search: Option<String>,
//! }
//! ```

pub mod serde_helpers;
