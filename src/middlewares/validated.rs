//! 검증된 페이로드 추출자
//!
//! `ValidationMiddleware`가 request extension에 남긴 정규화된 페이로드를
//! 핸들러 인자 타입으로 꺼냅니다. 핸들러는 원시 페이로드를 직접 보지 않습니다.
//!
//! ```rust,ignore
//! pub async fn update_article(
//!     ValidParams(params): ValidParams<ArticleParams>,
//!     ValidBody(article): ValidBody<ArticleRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     // ...
//! }
//! ```

use std::collections::BTreeMap;
use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::validation::{is_empty_payload, FieldErrors, PayloadOrigin};

/// 출처별 정규화된 페이로드 (request extension에 저장)
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NormalizedPayloads(BTreeMap<PayloadOrigin, Value>);

impl NormalizedPayloads {
    pub fn insert(&mut self, origin: PayloadOrigin, value: Value) {
        self.0.insert(origin, value);
    }

    pub fn get(&self, origin: &PayloadOrigin) -> Option<&Value> {
        self.0.get(origin)
    }
}

/// 요청에서 출처에 해당하는 정규화된 페이로드를 꺼내 `T`로 변환합니다.
///
/// 게이트를 그대로 통과한 빈 페이로드는 빈 객체로 간주하여 `T`의 기본값과
/// 검증 규칙을 적용합니다. 필수 필드가 있는 스키마라면 400 응답이 됩니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 라우트에 해당 출처의 게이트가 연결되지 않은 경우
/// * `AppError::ValidationError` - 빈 페이로드로는 `T`를 만들 수 없는 경우
pub fn normalized_payload<T>(req: &HttpRequest, origin: &PayloadOrigin) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value = req
        .extensions()
        .get::<NormalizedPayloads>()
        .and_then(|payloads| payloads.get(origin))
        .cloned()
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "route `{}` has no {} validation gate",
                req.path(),
                origin
            ))
        })?;

    if !is_empty_payload(&value) {
        return serde_json::from_value(value)
            .with_context(|| format!("normalized {} payload does not match handler type", origin));
    }

    let rejected = |errors: FieldErrors| AppError::ValidationError {
        origin: Some(origin.clone()),
        errors,
    };

    let parsed: T = serde_json::from_value(Value::Object(Map::new()))
        .map_err(|_| rejected(FieldErrors::root("payload is required")))?;
    parsed.validate().map_err(|errors| rejected(errors.into()))?;
    Ok(parsed)
}

macro_rules! validated_extractor {
    ($(#[$doc:meta])* $name:ident, $origin:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T> $name<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }

        impl<T> FromRequest for $name<T>
        where
            T: DeserializeOwned + Validate + 'static,
        {
            type Error = AppError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                ready(normalized_payload(req, &$origin).map($name))
            }
        }
    };
}

validated_extractor!(
    /// 검증된 요청 본문
    ValidBody,
    PayloadOrigin::Body
);

validated_extractor!(
    /// 검증된 쿼리 파라미터
    ValidQuery,
    PayloadOrigin::Query
);

validated_extractor!(
    /// 검증된 경로 파라미터
    ValidParams,
    PayloadOrigin::Param
);
