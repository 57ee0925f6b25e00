//! 검증 게이트 관측(observability) 핸들
//!
//! 게이트는 전역 로거 상태에 직접 의존하지 않고, 생성 시 주입받은
//! `ValidationObserver`로만 진단 이벤트를 남깁니다.

use crate::validation::field_errors::FieldErrors;
use crate::validation::origin::{PayloadMeta, PayloadOrigin};

/// 게이트가 발생시키는 진단 이벤트 수신자
pub trait ValidationObserver: Send + Sync {
    /// 게이트가 호출되었을 때 (검사 전, 출처 일치 여부와 무관)
    fn validation_invoked(&self, route: &str, schema: &str, meta: &PayloadMeta);

    /// 페이로드가 스키마 검증에 실패했을 때
    fn validation_rejected(&self, _route: &str, _origin: &PayloadOrigin, _errors: &FieldErrors) {}
}

/// `LogObserver`의 기본 로그 target
pub const DEFAULT_LOG_TARGET: &str = "validation";

/// `log` 파사드로 이벤트를 기록하는 기본 관측자
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: String,
}

impl LogObserver {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}

impl ValidationObserver for LogObserver {
    fn validation_invoked(&self, route: &str, schema: &str, meta: &PayloadMeta) {
        log::debug!(
            target: self.target.as_str(),
            "🔎 검증 호출: route={} schema={} origin={}",
            route,
            schema,
            meta.origin
        );
    }

    fn validation_rejected(&self, route: &str, origin: &PayloadOrigin, errors: &FieldErrors) {
        log::info!(
            target: self.target.as_str(),
            "❌ 검증 실패: route={} origin={} fields=[{}]",
            route,
            origin,
            errors.paths().collect::<Vec<_>>().join(", ")
        );
    }
}

/// 아무것도 기록하지 않는 관측자
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {
    fn validation_invoked(&self, _route: &str, _schema: &str, _meta: &PayloadMeta) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// 테스트에서 이벤트를 수집하는 관측자
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub invoked: Mutex<Vec<(String, PayloadOrigin)>>,
        pub rejected: Mutex<Vec<(String, FieldErrors)>>,
    }

    impl RecordingObserver {
        pub fn invoked_count(&self) -> usize {
            self.invoked.lock().map(|events| events.len()).unwrap_or(0)
        }

        pub fn rejected_count(&self) -> usize {
            self.rejected.lock().map(|events| events.len()).unwrap_or(0)
        }
    }

    impl ValidationObserver for RecordingObserver {
        fn validation_invoked(&self, route: &str, _schema: &str, meta: &PayloadMeta) {
            if let Ok(mut events) = self.invoked.lock() {
                events.push((route.to_string(), meta.origin.clone()));
            }
        }

        fn validation_rejected(&self, route: &str, _origin: &PayloadOrigin, errors: &FieldErrors) {
            if let Ok(mut events) = self.rejected.lock() {
                events.push((route.to_string(), errors.clone()));
            }
        }
    }
}
