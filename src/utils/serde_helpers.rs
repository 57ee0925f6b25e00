//! # 관대한(lenient) serde 역직렬화 도우미
//!
//! 쿼리 스트링과 경로 파라미터는 모든 값이 문자열로 들어옵니다.
//! 이 모듈의 deserializer는 `"20"` → `20`, `"true"` → `true`처럼 값을 강제 변환하고,
//! 공백뿐인 문자열은 값이 없는 것으로 취급합니다.
//!
//! 정규화된 출력은 다시 숫자/불리언으로 직렬화되므로 두 번 통과시켜도 결과가 같습니다.
//!
//! # 예제
//!
//! ```rust,ignore
//! #[derive(Deserialize, Serialize, Validate)]
//! struct OrderListQuery {
//!     #[serde(default, deserialize_with = "deserialize_optional_i64")]
//!     #[validate(range(min = 1))]
//!     page: Option<i64>,
//!
//!     #[serde(default, deserialize_with = "deserialize_optional_string")]
//!     search: Option<String>,
//! }
//!
//! // ?page=2&search=%20%20  →  {"page": 2}
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

/// 빈 문자열/공백 문자열을 `None`으로 바꾸고 나머지는 trim합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드용 deserializer
///
/// * `"  Alice  "` → `Some("Alice")`
/// * `""`, `"   "`, `null` → `None`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 필수 문자열 필드용 deserializer. 앞뒤 공백만 제거합니다.
///
/// 빈 문자열 여부는 `#[validate(length(min = 1))]` 규칙이 판단합니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// 정수 또는 정수 문자열을 받는 선택 필드용 deserializer
///
/// 빈 문자열과 `null`은 `None`입니다. 기본값이 있는 필드는 호출 측에서 `unwrap_or`로 채웁니다.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI64Visitor)
}

/// 불리언 또는 `"true"`/`"false"`/`"1"`/`"0"`을 받는 필수 필드용 deserializer
pub fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(LenientBoolVisitor)?
        .ok_or_else(|| de::Error::invalid_type(Unexpected::Unit, &"a boolean"))
}

/// 불리언 문자열을 받는 선택 필드용 deserializer
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientBoolVisitor)
}

struct LenientI64Visitor;

impl<'de> Visitor<'de> for LenientI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
            Ok(Some(v as i64))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

struct LenientBoolVisitor;

impl<'de> Visitor<'de> for LenientBoolVisitor {
    type Value = Option<bool>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or one of \"true\", \"false\", \"1\", \"0\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().to_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Paging {
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        page: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        limit: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_bool")]
        handled: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        search: Option<String>,
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let paging: Paging =
            serde_json::from_value(json!({"page": "3", "limit": " 50 ", "handled": "true"})).unwrap();

        assert_eq!(paging.page, Some(3));
        assert_eq!(paging.limit, Some(50));
        assert_eq!(paging.handled, Some(true));
    }

    #[test]
    fn test_native_json_types_are_accepted() {
        let paging: Paging =
            serde_json::from_value(json!({"page": 2, "limit": 10, "handled": false})).unwrap();

        assert_eq!(paging.page, Some(2));
        assert_eq!(paging.limit, Some(10));
        assert_eq!(paging.handled, Some(false));
    }

    #[test]
    fn test_missing_and_blank_values() {
        let paging: Paging =
            serde_json::from_value(json!({"page": null, "limit": "", "handled": null, "search": "  "}))
                .unwrap();

        assert_eq!(paging.page, None);
        assert_eq!(paging.limit, None);
        assert_eq!(paging.handled, None);
        assert_eq!(paging.search, None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_value::<Paging>(json!({"page": "two"})).is_err());
        assert!(serde_json::from_value::<Paging>(json!({"page": 1.5})).is_err());
        assert!(serde_json::from_value::<Paging>(json!({"limit": true})).is_err());
        assert!(serde_json::from_value::<Paging>(json!({"handled": "maybe"})).is_err());
    }

    #[test]
    fn test_negative_numbers_survive_for_range_rules() {
        let paging: Paging = serde_json::from_value(json!({"limit": "-1"})).unwrap();
        assert_eq!(paging.limit, Some(-1));
    }

    #[test]
    fn test_trimmed_string() {
        #[derive(Deserialize)]
        struct Named {
            #[serde(deserialize_with = "deserialize_trimmed_string")]
            name: String,
        }

        let named: Named = serde_json::from_value(json!({"name": "  위젯  "})).unwrap();
        assert_eq!(named.name, "위젯");
    }
}
