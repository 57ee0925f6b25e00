//! 공통 DTO 구성 요소
//!
//! 여러 요청 스키마가 함께 쓰는 기본값 함수와 커스텀 검증 함수입니다.

use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationError;

use crate::utils::serde_helpers::deserialize_optional_i64;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;

pub fn default_page() -> i64 {
    DEFAULT_PAGE
}

pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// 페이지 번호 deserializer
///
/// HTML 폼은 비어 있는 입력도 `?page=`로 보내므로, 빈 값과 `null`은 기본값 1이 됩니다.
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_i64(deserializer)?.unwrap_or(DEFAULT_PAGE))
}

/// 페이지 크기 deserializer. 빈 값과 `null`은 기본값 20이 됩니다.
pub fn deserialize_limit<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_i64(deserializer)?.unwrap_or(DEFAULT_LIMIT))
}

/// 게이트웨이 성공 응답
///
/// 핸들러는 비즈니스 로직 없이 검증을 통과한 정규화된 페이로드를 그대로 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayResponse<T> {
    /// 라우트 ID (예: `admin.articles.create`)
    pub route: String,
    /// 정규화된 페이로드
    pub data: T,
}

impl<T> GatewayResponse<T> {
    pub fn new(route: impl Into<String>, data: T) -> Self {
        Self {
            route: route.into(),
            data,
        }
    }
}

/// URL slug 형식 검증 (소문자, 숫자, 하이픈. 하이픈으로 시작하거나 끝날 수 없음)
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let allowed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !allowed || slug.starts_with('-') || slug.ends_with('-') {
        return Err(ValidationError::new("slug")
            .with_message("slug는 소문자, 숫자, 하이픈만 사용할 수 있으며 하이픈으로 시작하거나 끝날 수 없습니다".into()));
    }
    Ok(())
}

/// 대문자 ASCII 코드 검증 (국가 코드, 통화 코드 등)
fn validate_upper_code(code: &str, len: usize, name: &'static str) -> Result<(), ValidationError> {
    if code.len() != len || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::new(name)
            .with_message(format!("대문자 영문 {}자여야 합니다", len).into()));
    }
    Ok(())
}

/// ISO 3166-1 alpha-2 국가 코드 (예: `KR`, `US`)
pub fn validate_country_code(code: &str) -> Result<(), ValidationError> {
    validate_upper_code(code, 2, "country_code")
}

/// ISO 4217 통화 코드 (예: `KRW`, `USD`)
pub fn validate_currency(code: &str) -> Result<(), ValidationError> {
    validate_upper_code(code, 3, "currency")
}

/// 전화번호 형식 검증 (숫자, `+`, `-`, 공백만 허용)
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ');

    if !allowed || digits == 0 {
        return Err(ValidationError::new("phone")
            .with_message("전화번호는 숫자, +, -, 공백만 사용할 수 있습니다".into()));
    }
    Ok(())
}

/// RFC 3339 타임스탬프 검증 (예: `2026-11-01T09:00:00+09:00`)
pub fn validate_rfc3339(value: &str) -> Result<(), ValidationError> {
    chrono::DateTime::parse_from_rfc3339(value).map(|_| ()).map_err(|_| {
        ValidationError::new("rfc3339")
            .with_message("RFC 3339 형식의 시각이어야 합니다".into())
    })
}
