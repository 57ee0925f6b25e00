//! 스토어프론트 요청 DTO
//!
//! 고객용 화면(프로필, 주문, 배송지, 발행물)에서 들어오는 요청 스키마입니다.
//! 쿼리 DTO의 숫자/불리언 필드는 문자열로 들어와도 강제 변환됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::common::{
    default_limit, default_page, deserialize_limit, deserialize_page, validate_country_code,
    validate_phone,
};
use crate::utils::serde_helpers::{
    deserialize_lenient_bool, deserialize_optional_bool, deserialize_optional_string,
    deserialize_trimmed_string,
};

/// 프로필 수정 요청 (`PUT /api/v1/store/profile`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    /// 표시 이름 (1-50자)
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 50, message = "표시 이름은 1-50자 사이여야 합니다"))]
    pub display_name: String,

    /// 연락처 (7-20자)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 7, max = 20), custom(function = "validate_phone"))]
    pub phone: Option<String>,

    /// 마케팅 수신 동의
    #[serde(
        default,
        deserialize_with = "deserialize_optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub marketing_opt_in: Option<bool>,
}

/// 주문 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// 주문 목록 조회 쿼리 (`GET /api/v1/store/orders`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// 배송지 등록 요청 (`POST /api/v1/store/addresses`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "수령인을 입력해주세요"))]
    pub recipient: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200, message = "주소를 입력해주세요"))]
    pub line1: String,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 200))]
    pub line2: Option<String>,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "도시를 입력해주세요"))]
    pub city: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 3, max = 10))]
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 국가 코드
    #[validate(custom(function = "validate_country_code"))]
    pub country_code: String,

    /// 기본 배송지 여부
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub is_default: bool,
}

/// 발행물 목록 조회 쿼리 (`GET /api/v1/store/publications`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublicationListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,

    /// 검색어 (공백뿐이면 없는 것으로 취급)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 100))]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::validation::typed;

    #[test]
    fn test_profile_update() {
        let schema = typed::<ProfileUpdateRequest>();

        let normalized = schema
            .safe_parse(&json!({"display_name": "  Jane  ", "marketing_opt_in": "true"}))
            .unwrap();
        assert_eq!(
            normalized,
            json!({"display_name": "Jane", "marketing_opt_in": true})
        );

        let errors = schema
            .safe_parse(&json!({"display_name": "", "phone": "call-me"}))
            .unwrap_err();
        assert!(errors.contains("display_name"));
        assert!(errors.contains("phone"));
    }

    #[test]
    fn test_order_list_defaults_and_coercion() {
        let schema = typed::<OrderListQuery>();

        assert_eq!(
            schema.safe_parse(&json!({"status": "paid"})).unwrap(),
            json!({"page": 1, "limit": 20, "status": "paid"})
        );
        assert_eq!(
            schema.safe_parse(&json!({"page": "3", "limit": "50"})).unwrap(),
            json!({"page": 3, "limit": 50})
        );

        // 빈 폼 입력(`?page=&limit=`)은 기본값
        assert_eq!(
            schema.safe_parse(&json!({"page": "", "limit": " "})).unwrap(),
            json!({"page": 1, "limit": 20})
        );

        let errors = schema
            .safe_parse(&json!({"limit": "500"}))
            .unwrap_err();
        assert!(errors.contains("limit"));

        let errors = schema
            .safe_parse(&json!({"status": "lost"}))
            .unwrap_err();
        assert!(errors.contains("status"));
    }

    #[test]
    fn test_address_request() {
        let schema = typed::<AddressRequest>();
        let address = json!({
            "recipient": "Jane Doe",
            "line1": "1 Market St",
            "city": "Seoul",
            "postal_code": "04524",
            "country_code": "KR"
        });

        let normalized = schema.safe_parse(&address).unwrap();
        assert_eq!(normalized["is_default"], json!(false));

        let mut invalid = address.clone();
        invalid["country_code"] = json!("kr");
        invalid["postal_code"] = json!("1");
        let errors = schema.safe_parse(&invalid).unwrap_err();
        assert!(errors.contains("country_code"));
        assert!(errors.contains("postal_code"));

        let errors = schema.safe_parse(&json!({"recipient": "Jane"})).unwrap_err();
        assert!(errors.contains("line1"));
    }

    #[test]
    fn test_publication_list_blank_search_is_dropped() {
        let schema = typed::<PublicationListQuery>();
        assert_eq!(
            schema.safe_parse(&json!({"search": "   "})).unwrap(),
            json!({"page": 1, "limit": 20})
        );
    }
}
