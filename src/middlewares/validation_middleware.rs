//! 스키마 검증 미들웨어
//!
//! ActixWeb 리소스에 씌워 핸들러보다 먼저 요청 페이로드를 검사합니다.
//! 라우트 하나에 묶인 게이트 목록을 들고 있으며, 통과한 페이로드만
//! 정규화된 형태로 request extension에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::validation_inner::ValidationMiddlewareService;
use crate::validation::{PayloadOrigin, ValidationGate};

/// 스키마 검증 미들웨어
#[derive(Debug, Clone)]
pub struct ValidationMiddleware {
    /// 라우트 ID (진단 및 에러 응답용)
    route: String,
    /// 라우트에 바인딩된 게이트 목록
    gates: Vec<Arc<ValidationGate>>,
}

impl ValidationMiddleware {
    pub fn new(route: impl Into<String>, gates: Vec<Arc<ValidationGate>>) -> Self {
        Self {
            route: route.into(),
            gates,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// 요청에서 꺼내야 할 출처 목록 (중복 제거, 커스텀 출처 제외)
    pub fn origins(&self) -> Vec<PayloadOrigin> {
        targeted_origins(&self.gates)
    }
}

pub(crate) fn targeted_origins(gates: &[Arc<ValidationGate>]) -> Vec<PayloadOrigin> {
    let mut origins: Vec<PayloadOrigin> = gates
        .iter()
        .map(|gate| gate.target().clone())
        .filter(PayloadOrigin::is_extractable)
        .collect();
    origins.sort();
    origins.dedup();
    origins
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for ValidationMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ValidationMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        if self.gates.is_empty() {
            log::warn!("⚠️ 라우트 `{}`에 바인딩된 검증 스키마가 없습니다", self.route);
        }

        ready(Ok(ValidationMiddlewareService {
            service: Rc::new(service),
            route: Rc::from(self.route.as_str()),
            gates: Rc::from(self.gates.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use validator::Validate;

    use crate::validation::{typed, NoopObserver};

    #[derive(Debug, Deserialize, Serialize, Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
    }

    fn gate(origin: PayloadOrigin) -> Arc<ValidationGate> {
        Arc::new(
            ValidationGate::new("sample", origin, typed::<Sample>(), Arc::new(NoopObserver)).unwrap(),
        )
    }

    #[test]
    fn test_origins_are_deduplicated_and_sorted() {
        let middleware = ValidationMiddleware::new(
            "sample",
            vec![
                gate(PayloadOrigin::Param),
                gate(PayloadOrigin::Body),
                gate(PayloadOrigin::Body),
            ],
        );

        assert_eq!(
            middleware.origins(),
            vec![PayloadOrigin::Body, PayloadOrigin::Param]
        );
    }

    #[test]
    fn test_custom_origins_are_not_extracted() {
        let middleware = ValidationMiddleware::new(
            "sample",
            vec![gate(PayloadOrigin::Custom("tenant".to_string()))],
        );

        assert!(middleware.origins().is_empty());
        assert_eq!(middleware.route(), "sample");
    }
}
