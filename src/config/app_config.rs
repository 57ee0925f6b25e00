//! 서버 및 게이트웨이 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS, 검증 게이트 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 잘못된 값은 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::core::errors::{AppError, AppResult};
use crate::validation::observer::DEFAULT_LOG_TARGET;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;

    /// # Environment Variables
    ///
    /// - `HOST` (기본값: `127.0.0.1`)
    /// - `PORT` (기본값: `8080`)
    /// - `WORKERS` (기본값: `4`)
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string()),
            port: parse_or_default("PORT", env::var("PORT").ok(), Self::DEFAULT_PORT),
            workers: parse_or_default("WORKERS", env::var("WORKERS").ok(), Self::DEFAULT_WORKERS)
                .max(1),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정 (`actix-governor`)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// # Environment Variables
    ///
    /// - `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// - `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                100,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                200,
            ),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 허용 Origin 설정 (`actix-cors`)
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// 스토어프론트/관리자 화면 개발 서버 기본값
    pub const DEFAULT_ORIGINS: &'static [&'static str] = &[
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn from_env() -> Self {
        Self::from_value(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn from_value(raw: Option<&str>) -> Self {
        let origins: Vec<String> = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if origins.is_empty() {
            return Self {
                allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
            };
        }

        Self {
            allowed_origins: origins,
        }
    }
}

/// 검증 게이트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// 요청 본문 최대 크기 (바이트)
    pub max_body_bytes: usize,
    /// 검증 이벤트 로그 target
    pub log_target: String,
}

impl ValidationConfig {
    pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

    /// # Environment Variables
    ///
    /// - `VALIDATION_MAX_BODY_BYTES` (기본값: 262144)
    /// - `VALIDATION_LOG_TARGET` (기본값: `validation`)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 본문 크기 제한이 0인 경우
    pub fn from_env() -> AppResult<Self> {
        Self::from_values(
            env::var("VALIDATION_MAX_BODY_BYTES").ok(),
            env::var("VALIDATION_LOG_TARGET").ok(),
        )
    }

    pub fn from_values(max_body_bytes: Option<String>, log_target: Option<String>) -> AppResult<Self> {
        let max_body_bytes = parse_or_default(
            "VALIDATION_MAX_BODY_BYTES",
            max_body_bytes,
            Self::DEFAULT_MAX_BODY_BYTES,
        );
        if max_body_bytes == 0 {
            return Err(AppError::ConfigurationError(
                "VALIDATION_MAX_BODY_BYTES must be greater than 0".to_string(),
            ));
        }

        let log_target = log_target
            .map(|target| target.trim().to_string())
            .filter(|target| !target.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_TARGET.to_string());

        Ok(Self {
            max_body_bytes,
            log_target,
        })
    }
}

/// 환경 변수 값을 파싱하고, 실패하면 에러 로그를 남긴 뒤 기본값을 사용합니다.
fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
    }
}
