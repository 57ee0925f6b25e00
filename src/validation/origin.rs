//! 페이로드 출처(origin) 태그
//!
//! 요청의 어느 부분(body, query, path 파라미터 등)에서 값을 꺼냈는지를 나타냅니다.
//! 게이트는 자신이 담당하는 출처와 태그가 일치할 때만 검증을 수행합니다.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// 요청 페이로드의 출처
///
/// 직렬화 시 소문자 이름(`"body"`, `"query"`, `"param"`)을 사용하며,
/// 그 외 출처는 `Custom`에 담긴 이름 그대로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PayloadOrigin {
    /// 요청 본문 (JSON)
    Body,
    /// 쿼리 스트링
    Query,
    /// 라우트 경로 파라미터
    Param,
    /// 그 밖의 출처 (헤더, 커스텀 데코레이터 등)
    Custom(String),
}

impl PayloadOrigin {
    /// 출처의 표기 이름을 반환합니다.
    pub fn as_str(&self) -> &str {
        match self {
            PayloadOrigin::Body => "body",
            PayloadOrigin::Query => "query",
            PayloadOrigin::Param => "param",
            PayloadOrigin::Custom(name) => name.as_str(),
        }
    }

    /// 미들웨어가 요청에서 직접 꺼낼 수 있는 출처인지 확인합니다.
    pub fn is_extractable(&self) -> bool {
        !matches!(self, PayloadOrigin::Custom(_))
    }
}

impl fmt::Display for PayloadOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadOrigin {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origin = match s.trim().to_lowercase().as_str() {
            "body" => PayloadOrigin::Body,
            "query" => PayloadOrigin::Query,
            "param" | "params" => PayloadOrigin::Param,
            _ => PayloadOrigin::Custom(s.trim().to_string()),
        };
        Ok(origin)
    }
}

impl Serialize for PayloadOrigin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// 게이트가 페이로드와 함께 전달받는 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadMeta {
    /// 페이로드 출처
    pub origin: PayloadOrigin,
}

impl PayloadMeta {
    pub fn new(origin: PayloadOrigin) -> Self {
        Self { origin }
    }

    pub fn body() -> Self {
        Self::new(PayloadOrigin::Body)
    }

    pub fn query() -> Self {
        Self::new(PayloadOrigin::Query)
    }

    pub fn param() -> Self {
        Self::new(PayloadOrigin::Param)
    }
}
