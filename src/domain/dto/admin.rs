//! 관리자 백오피스 요청 DTO
//!
//! 미디어 라이브러리, 게시글, 블로그, 뉴스레터, 발행물, 문의 내역, 사이트 설정 화면의
//! 요청 스키마입니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::dto::common::{
    default_limit, default_page, deserialize_limit, deserialize_page, validate_currency,
    validate_rfc3339, validate_slug,
};
use crate::utils::serde_helpers::{
    deserialize_optional_bool, deserialize_optional_i64, deserialize_optional_string,
    deserialize_trimmed_string,
};

/// 미디어 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

/// 미디어 라이브러리 조회 쿼리 (`GET /api/v1/admin/media`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MediaListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 200))]
    pub folder: Option<String>,
}

/// 게시글 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

/// 게시글 작성/수정 요청
///
/// 알 수 없는 필드가 포함되면 거부합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ArticleRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, max = 120), custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(min = 1, message = "본문을 입력해주세요"))]
    pub body: String,

    #[serde(default)]
    pub status: ArticleStatus,

    #[serde(default)]
    #[validate(length(max = 20), custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

/// 게시글 경로 파라미터 (`/api/v1/admin/articles/{article_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ArticleParams {
    #[validate(length(min = 1, max = 64))]
    pub article_id: String,
}

/// 블로그 생성 요청 (`POST /api/v1/admin/blogs`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "블로그 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 120), custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// 뉴스레터 발송 요청 (`POST /api/v1/admin/newsletters`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 150, message = "제목은 1-150자 사이여야 합니다"))]
    pub subject: String,

    #[validate(length(min = 1, message = "본문을 입력해주세요"))]
    pub body: String,

    /// 수신자 이메일 목록
    #[validate(
        length(min = 1, message = "수신자를 한 명 이상 지정해주세요"),
        custom(function = "validate_audience")
    )]
    pub audience: Vec<String>,

    /// 예약 발송 시각 (RFC 3339)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(custom(function = "validate_rfc3339"))]
    pub send_at: Option<String>,
}

/// 발행물 섹션
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublicationSection {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200))]
    pub heading: String,

    #[serde(default)]
    pub media_ids: Vec<String>,
}

/// 발행물 생성 요청 (`POST /api/v1/admin/publications`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublicationRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 50), nested)]
    pub sections: Vec<PublicationSection>,
}

/// 문의 접수 요청 (`POST /api/v1/contact`, 공개 엔드포인트)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmissionRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 200))]
    pub subject: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "문의 내용은 10-5000자 사이여야 합니다"))]
    pub message: String,
}

/// 문의 내역 조회 쿼리 (`GET /api/v1/admin/contact-submissions`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmissionQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,

    /// 처리 완료 여부 필터 (`?handled=true`)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub handled: Option<bool>,
}

/// 사이트 설정 부분 수정 요청 (`PATCH /api/v1/admin/settings`)
///
/// 모든 필드가 선택이지만 최소 하나는 있어야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_settings_not_empty"))]
pub struct SettingsUpdateRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, max = 100))]
    pub store_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(email)]
    pub support_email: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(custom(function = "validate_currency"))]
    pub currency: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 1, max = 100))]
    pub items_per_page: Option<i64>,
}

/// 태그 각각의 길이 검증 (1-40자)
fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if let Some(index) = tags
        .iter()
        .position(|tag| tag.trim().is_empty() || tag.chars().count() > 40)
    {
        return Err(ValidationError::new("tag_length")
            .with_message(format!("tags[{}]는 1-40자 사이여야 합니다", index).into()));
    }
    Ok(())
}

/// 수신자 이메일 형식 검증. 잘못된 항목의 위치를 메시지에 담습니다.
fn validate_audience(audience: &[String]) -> Result<(), ValidationError> {
    let invalid: Vec<String> = audience
        .iter()
        .enumerate()
        .filter(|(_, email)| !email.validate_email())
        .map(|(index, _)| format!("audience[{}]", index))
        .collect();

    if !invalid.is_empty() {
        return Err(ValidationError::new("email").with_message(
            format!("유효하지 않은 이메일 주소: {}", invalid.join(", ")).into(),
        ));
    }
    Ok(())
}

fn validate_settings_not_empty(req: &SettingsUpdateRequest) -> Result<(), ValidationError> {
    let empty = req.store_name.is_none()
        && req.support_email.is_none()
        && req.currency.is_none()
        && req.items_per_page.is_none();

    if empty {
        return Err(ValidationError::new("empty_update")
            .with_message("변경할 설정을 하나 이상 지정해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::validation::typed;

    fn article() -> serde_json::Value {
        json!({
            "title": "Spring Sale",
            "slug": "spring-sale",
            "body": "Everything is 20% off."
        })
    }

    #[test]
    fn test_media_list_query() {
        let schema = typed::<MediaListQuery>();

        assert_eq!(
            schema.safe_parse(&json!({"kind": "image", "limit": "10"})).unwrap(),
            json!({"page": 1, "limit": 10, "kind": "image"})
        );
        assert!(schema.safe_parse(&json!({"kind": "audio"})).unwrap_err().contains("kind"));
    }

    #[test]
    fn test_article_defaults() {
        let normalized = typed::<ArticleRequest>().safe_parse(&article()).unwrap();
        assert_eq!(normalized["status"], json!("draft"));
        assert_eq!(normalized["tags"], json!([]));
    }

    #[test]
    fn test_article_rejects_unknown_fields_and_bad_slug() {
        let schema = typed::<ArticleRequest>();

        let mut unknown = article();
        unknown["author"] = json!("someone");
        let errors = schema.safe_parse(&unknown).unwrap_err();
        assert_eq!(errors.get("author"), Some(&["unknown field".to_string()][..]));

        let mut bad = article();
        bad["slug"] = json!("-Spring Sale");
        bad["tags"] = json!(["ok", ""]);
        let errors = schema.safe_parse(&bad).unwrap_err();
        assert!(errors.contains("slug"));
        assert!(errors.contains("tags"));
    }

    #[test]
    fn test_article_params() {
        let schema = typed::<ArticleParams>();
        assert!(schema.safe_parse(&json!({"article_id": "a-1"})).is_ok());
        assert!(schema.safe_parse(&json!({"article_id": ""})).unwrap_err().contains("article_id"));
    }

    #[test]
    fn test_blog_request() {
        let schema = typed::<BlogRequest>();
        assert!(schema
            .safe_parse(&json!({"name": "Engineering", "slug": "engineering"}))
            .is_ok());

        let errors = schema
            .safe_parse(&json!({"name": "Engineering", "slug": "eng", "description": "x".repeat(501)}))
            .unwrap_err();
        assert!(errors.contains("description"));
    }

    #[test]
    fn test_newsletter_audience() {
        let schema = typed::<NewsletterRequest>();
        let newsletter = json!({
            "subject": "November news",
            "body": "Hello",
            "audience": ["a@example.com", "not-an-email"],
            "send_at": "2026-11-01T09:00:00+09:00"
        });

        let errors = schema.safe_parse(&newsletter).unwrap_err();
        let messages = errors.get("audience").unwrap();
        assert!(messages[0].contains("audience[1]"));

        let errors = schema
            .safe_parse(&json!({"subject": "s", "body": "b", "audience": [], "send_at": "tomorrow"}))
            .unwrap_err();
        assert!(errors.contains("audience"));
        assert!(errors.contains("send_at"));
    }

    #[test]
    fn test_publication_sections_are_nested() {
        let schema = typed::<PublicationRequest>();

        let errors = schema
            .safe_parse(&json!({
                "title": "Lookbook",
                "sections": [
                    {"heading": "Intro", "media_ids": ["m1"]},
                    {"heading": ""}
                ]
            }))
            .unwrap_err();
        assert!(errors.contains("sections[1].heading"));

        let errors = schema
            .safe_parse(&json!({"title": "Lookbook", "sections": []}))
            .unwrap_err();
        assert!(errors.contains("sections"));
    }

    #[test]
    fn test_contact_submission() {
        let schema = typed::<ContactSubmissionRequest>();
        assert!(schema
            .safe_parse(&json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Where is my order?"
            }))
            .is_ok());

        let errors = schema
            .safe_parse(&json!({"name": "Jane", "email": "jane", "message": "short"}))
            .unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("message"));
    }

    #[test]
    fn test_contact_submission_type_error_keeps_other_violations() {
        let errors = typed::<ContactSubmissionRequest>()
            .safe_parse(&json!({"name": "", "email": 5, "message": "hi"}))
            .unwrap_err();

        assert_eq!(errors.paths().collect::<Vec<_>>(), ["email", "message", "name"]);
        assert!(errors.get("email").unwrap()[0].contains("invalid type"));
        assert_eq!(errors.get("name").unwrap(), ["이름은 1-100자 사이여야 합니다"]);
    }

    #[test]
    fn test_contact_submission_query_coerces_handled() {
        let normalized = typed::<ContactSubmissionQuery>()
            .safe_parse(&json!({"handled": "false", "page": "2"}))
            .unwrap();
        assert_eq!(normalized, json!({"page": 2, "limit": 20, "handled": false}));
    }

    #[test]
    fn test_settings_update_requires_one_field() {
        let schema = typed::<SettingsUpdateRequest>();

        let errors = schema.safe_parse(&json!({"store_name": "  "})).unwrap_err();
        assert!(errors.contains("_root"));

        assert_eq!(
            schema.safe_parse(&json!({"items_per_page": "24"})).unwrap(),
            json!({"items_per_page": 24})
        );
        assert!(schema.safe_parse(&json!({"currency": "won"})).unwrap_err().contains("currency"));
    }
}
