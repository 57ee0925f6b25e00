//! # Gate Registry - 라우트별 스키마 바인딩
//!
//! 서버 시작 시점에 라우트·출처마다 스키마 하나를 묶고, 각 라우트의 게이트를 제공합니다.
//! 등록이 끝난 레지스트리는 불변이며 `Arc`로 모든 워커가 공유합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 시작 시점 (Registration)
//!    ├─ GateRegistry::builder(observer)
//!    ├─ .bind_body::<ArticleRequest>("admin.articles.create")?
//!    ├─ .bind_query::<MediaListQuery>("admin.media.list")?
//!    └─ .build()           ← 잘못된 바인딩은 여기서 ConfigurationError
//!
//! 2. 라우트 구성 (Wiring)
//!    └─ registry.middleware("admin.articles.create") → ValidationMiddleware
//!
//! 3. 요청 처리 (Per request)
//!    └─ 미들웨어가 게이트를 호출 (레지스트리는 더 이상 관여하지 않음)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = GateRegistry::builder(Arc::new(LogObserver::default()))
//!     .bind_body::<ContactSubmissionRequest>("contact.submit")?
//!     .build();
//!
//! registry.require(&["contact.submit"])?;
//!
//! web::resource("/contact")
//!     .wrap(registry.middleware("contact.submit"))
//!     .route(web::post().to(handlers::storefront::submit_contact));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::middlewares::ValidationMiddleware;
use crate::validation::{typed, PayloadOrigin, Schema, ValidationGate, ValidationObserver};

/// 등록된 바인딩 요약 (스키마 목록 API 응답용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateBinding {
    pub route: String,
    pub origin: PayloadOrigin,
    pub schema: String,
}

/// 라우트 ID → 게이트 목록
#[derive(Debug, Default)]
pub struct GateRegistry {
    gates: BTreeMap<String, Vec<Arc<ValidationGate>>>,
}

/// `GateRegistry` 빌더
///
/// 모든 게이트에 같은 관측 핸들을 주입합니다.
pub struct GateRegistryBuilder {
    observer: Arc<dyn ValidationObserver>,
    gates: BTreeMap<String, Vec<Arc<ValidationGate>>>,
}

impl GateRegistryBuilder {
    /// 라우트·출처에 스키마를 바인딩합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 이미 같은 출처에 스키마가 있거나,
    ///   게이트 생성 규칙을 위반한 경우
    pub fn bind(
        mut self,
        route: &str,
        origin: PayloadOrigin,
        schema: Arc<dyn Schema>,
    ) -> AppResult<Self> {
        let gate = ValidationGate::new(route, origin, schema, self.observer.clone())?;

        let gates = self.gates.entry(route.to_string()).or_default();
        if let Some(existing) = gates.iter().find(|g| g.target() == gate.target()) {
            return Err(AppError::ConfigurationError(format!(
                "route `{}` already has a {} schema ({})",
                route,
                gate.target(),
                existing.schema_name()
            )));
        }

        gates.push(Arc::new(gate));
        gates.sort_by(|a, b| a.target().cmp(b.target()));
        Ok(self)
    }

    pub fn bind_body<T>(self, route: &str) -> AppResult<Self>
    where
        T: DeserializeOwned + Serialize + Validate + 'static,
    {
        self.bind(route, PayloadOrigin::Body, typed::<T>())
    }

    pub fn bind_query<T>(self, route: &str) -> AppResult<Self>
    where
        T: DeserializeOwned + Serialize + Validate + 'static,
    {
        self.bind(route, PayloadOrigin::Query, typed::<T>())
    }

    pub fn bind_params<T>(self, route: &str) -> AppResult<Self>
    where
        T: DeserializeOwned + Serialize + Validate + 'static,
    {
        self.bind(route, PayloadOrigin::Param, typed::<T>())
    }

    pub fn build(self) -> GateRegistry {
        log::info!(
            "🧩 검증 게이트 등록 완료: 라우트 {}개, 게이트 {}개",
            self.gates.len(),
            self.gates.values().map(Vec::len).sum::<usize>()
        );
        GateRegistry { gates: self.gates }
    }
}

impl GateRegistry {
    pub fn builder(observer: Arc<dyn ValidationObserver>) -> GateRegistryBuilder {
        GateRegistryBuilder {
            observer,
            gates: BTreeMap::new(),
        }
    }

    /// 라우트의 게이트 목록 (출처 순 정렬). 바인딩이 없으면 빈 목록입니다.
    pub fn gates_for(&self, route: &str) -> Vec<Arc<ValidationGate>> {
        self.gates.get(route).cloned().unwrap_or_default()
    }

    pub fn contains(&self, route: &str) -> bool {
        self.gates.contains_key(route)
    }

    /// 라우트에 씌울 검증 미들웨어를 생성합니다.
    pub fn middleware(&self, route: &str) -> ValidationMiddleware {
        ValidationMiddleware::new(route, self.gates_for(route))
    }

    /// 라우트 구성에 필요한 바인딩이 모두 있는지 확인합니다.
    ///
    /// 서버 시작 전에 호출하여 빠진 바인딩을 설정 에러로 드러냅니다.
    pub fn require(&self, routes: &[&str]) -> AppResult<()> {
        let missing: Vec<&str> = routes
            .iter()
            .copied()
            .filter(|route| !self.contains(route))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ConfigurationError(format!(
                "no validation schema bound for routes: {}",
                missing.join(", ")
            )))
        }
    }

    /// 등록된 모든 바인딩 (라우트, 출처 순)
    pub fn bindings(&self) -> Vec<GateBinding> {
        self.gates
            .iter()
            .flat_map(|(route, gates)| {
                gates.iter().map(move |gate| GateBinding {
                    route: route.clone(),
                    origin: gate.target().clone(),
                    schema: gate.schema_name().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    use crate::validation::NoopObserver;

    #[derive(Debug, Deserialize, Serialize, Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
    }

    fn builder() -> GateRegistryBuilder {
        GateRegistry::builder(Arc::new(NoopObserver))
    }

    #[test]
    fn test_bind_and_list_bindings() {
        let registry = builder()
            .bind_body::<Sample>("sample.update")
            .and_then(|b| b.bind_params::<Sample>("sample.update"))
            .and_then(|b| b.bind_query::<Sample>("sample.list"))
            .unwrap()
            .build();

        let bindings = registry.bindings();
        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings[0].route, "sample.list");
        assert_eq!(bindings[0].origin, PayloadOrigin::Query);
        assert_eq!(bindings[1].origin, PayloadOrigin::Body);
        assert_eq!(bindings[2].origin, PayloadOrigin::Param);
        assert_eq!(bindings[2].schema, "Sample");
    }

    #[test]
    fn test_duplicate_binding_is_configuration_error() {
        let result = builder()
            .bind_body::<Sample>("sample.create")
            .and_then(|b| b.bind_body::<Sample>("sample.create"));

        match result {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("sample.create")),
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_require_reports_missing_routes() {
        let registry = builder().bind_body::<Sample>("sample.create").unwrap().build();

        assert!(registry.require(&["sample.create"]).is_ok());
        match registry.require(&["sample.create", "sample.delete"]) {
            Err(AppError::ConfigurationError(msg)) => {
                assert!(msg.contains("sample.delete"));
                assert!(!msg.contains("sample.create,"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_unknown_route_has_no_gates() {
        let registry = builder().build();
        assert!(registry.gates_for("missing").is_empty());
        assert!(!registry.contains("missing"));
    }
}
