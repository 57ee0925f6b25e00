//! ValidationMiddleware 검증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::ErrorUnsupportedMediaType;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};

use crate::core::AppError;
use crate::middlewares::validated::NormalizedPayloads;
use crate::middlewares::validation_middleware::targeted_origins;
use crate::validation::{FieldErrors, PayloadMeta, PayloadOrigin, ValidationFailure, ValidationGate};

/// 실제 검증 로직을 수행하는 서비스
pub struct ValidationMiddlewareService<S> {
    pub service: Rc<S>,
    pub route: Rc<str>,
    pub gates: Rc<[Arc<ValidationGate>]>,
}

impl<S, B> Service<ServiceRequest> for ValidationMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let route = self.route.clone();
        let gates = self.gates.clone();

        Box::pin(async move {
            // 같은 리소스에 미들웨어가 여러 개 씌워진 경우 앞선 결과를 이어받음
            let mut payloads = req
                .extensions_mut()
                .remove::<NormalizedPayloads>()
                .unwrap_or_default();

            for origin in targeted_origins(&gates) {
                let raw = match read_payload(&mut req, &origin).await {
                    Ok(Ok(raw)) => raw,
                    // 크기 초과 등 본문 읽기 실패는 actix 에러 응답 그대로 (413 등)
                    Err(err) => return Ok(req.error_response(err).map_into_right_body()),
                    Ok(Err(errors)) => {
                        log::debug!("페이로드 해석 실패: route={} origin={}", route, origin);
                        let failure = ValidationFailure {
                            route: route.to_string(),
                            origin,
                            errors,
                        };
                        return Ok(reject(req, failure));
                    }
                };

                // 모든 게이트를 거치되, 출처가 다른 게이트는 값을 그대로 돌려줌
                let meta = PayloadMeta::new(origin.clone());
                let mut value = raw;
                for gate in gates.iter() {
                    value = match gate.transform(value, &meta) {
                        Ok(normalized) => normalized,
                        Err(failure) => return Ok(reject(req, failure)),
                    };
                }

                payloads.insert(origin, value);
            }

            req.extensions_mut().insert(payloads);

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 검증 실패 응답을 만들고 핸들러 호출을 중단합니다.
fn reject<B>(req: ServiceRequest, failure: ValidationFailure) -> ServiceResponse<EitherBody<B>> {
    let response = AppError::from(failure).error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 출처에 해당하는 원시 페이로드를 꺼냅니다.
///
/// 바깥 `Result`는 본문 읽기 실패(크기 초과, JSON이 아닌 Content-Type 등),
/// 안쪽 `Result`는 해석 실패입니다.
async fn read_payload(
    req: &mut ServiceRequest,
    origin: &PayloadOrigin,
) -> Result<Result<Value, FieldErrors>, Error> {
    match origin {
        PayloadOrigin::Body => {
            let bytes = req.extract::<web::Bytes>().await?;
            if !is_blank(&bytes) && !is_json_content_type(req.content_type()) {
                return Err(ErrorUnsupportedMediaType(format!(
                    "JSON 본문이 필요합니다 (Content-Type: {:?})",
                    req.content_type()
                )));
            }
            Ok(parse_body(&bytes))
        }
        PayloadOrigin::Query => Ok(parse_query(req.query_string())),
        PayloadOrigin::Param => Ok(Ok(collect_params(req))),
        PayloadOrigin::Custom(_) => Ok(Ok(Value::Null)),
    }
}

/// 요청 본문을 JSON으로 해석합니다. 빈 본문은 `null`입니다.
pub(crate) fn parse_body(bytes: &[u8]) -> Result<Value, FieldErrors> {
    if is_blank(bytes) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(bytes)
        .map_err(|err| FieldErrors::root(format!("payload is not valid JSON: {}", err)))
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// `application/json`과 `application/problem+json` 같은 `+json` 타입을 허용합니다.
pub(crate) fn is_json_content_type(content_type: &str) -> bool {
    let content_type = content_type.trim().to_ascii_lowercase();
    content_type == "application/json"
        || (content_type.starts_with("application/") && content_type.ends_with("+json"))
}

/// 쿼리 스트링을 문자열 값 객체로 바꿉니다. 반복된 키는 배열이 됩니다.
pub(crate) fn parse_query(query: &str) -> Result<Value, FieldErrors> {
    if query.trim().is_empty() {
        return Ok(Value::Null);
    }

    let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
        .map_err(|err| FieldErrors::root(format!("query string could not be decoded: {}", err)))?
        .into_inner();

    let mut map = Map::new();
    for (key, value) in pairs {
        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(key, Value::String(value));
            }
        }
    }
    Ok(Value::Object(map))
}

fn collect_params(req: &ServiceRequest) -> Value {
    let params: Map<String, Value> = req
        .match_info()
        .iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();

    if params.is_empty() {
        Value::Null
    } else {
        Value::Object(params)
    }
}
