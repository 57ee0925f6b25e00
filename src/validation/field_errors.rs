//! 구조화된 검증 에러
//!
//! 필드 경로를 키로, 사람이 읽을 수 있는 메시지 목록을 값으로 가지는 맵입니다.
//! `validator`의 `ValidationErrors`와 serde 역직렬화 에러를 모두 이 형태로 변환합니다.
//!
//! # 경로 표기
//!
//! ```text
//! name                 최상위 필드
//! address.city         중첩 구조체
//! sections[1].heading  리스트 원소
//! _root                특정 필드에 귀속되지 않는 에러
//! ```
//!
//! # 응답 예시
//!
//! ```json
//! {
//!   "name": ["length must be at least 1"],
//!   "limit": ["must be at least 1"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_path_to_error::Segment;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// 필드 경로 → 메시지 목록
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// 필드에 귀속되지 않는 에러의 키
    pub const ROOT: &'static str = "_root";

    pub fn new() -> Self {
        Self::default()
    }

    /// 루트 에러 하나만 가진 값을 생성합니다.
    pub fn root(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(Self::ROOT, message);
        errors
    }

    /// 경로에 메시지를 추가합니다. 같은 메시지는 중복 저장하지 않습니다.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let messages = self.0.entry(path.into()).or_default();
        let message = message.into();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (path, messages) in other.0 {
            for message in messages {
                self.add(path.clone(), message);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 에러가 기록된 경로 수
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    /// 정렬된 경로 목록
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// serde 역직렬화 에러를 필드 경로 에러로 변환합니다.
    ///
    /// `missing field`/`unknown field` 에러는 메시지에 담긴 필드 이름까지 경로에 붙입니다.
    pub fn from_deserialize_error(error: &DeserializeError) -> Self {
        let (path, message) = locate_deserialize_error(error);
        let mut errors = Self::new();
        errors.add(path, message);
        errors
    }
}

/// serde_json 값 역직렬화 에러 (실패한 경로 포함)
pub type DeserializeError = serde_path_to_error::Error<serde_json::Error>;

/// 역직렬화 에러가 가리키는 필드 경로와 메시지를 구합니다.
pub(crate) fn locate_deserialize_error(error: &DeserializeError) -> (String, String) {
    let path = error.path();
    let base = match path.to_string().as_str() {
        "." => String::new(),
        rendered => rendered.to_string(),
    };
    let message = error.inner().to_string();

    if let Some(field) = quoted_field(&message, "missing field `") {
        (join_path(&base, field), "is required".to_string())
    } else if let Some(field) = quoted_field(&message, "unknown field `") {
        let already_in_path = matches!(
            path.iter().last(),
            Some(Segment::Map { key }) if key == field
        );
        let key = if already_in_path {
            base
        } else {
            join_path(&base, field)
        };
        (key, "unknown field".to_string())
    } else if base.is_empty() {
        (FieldErrors::ROOT.to_string(), message)
    } else {
        (base, message)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        collect(errors, "", &mut collected);
        collected
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        FieldErrors::from(&errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", path, messages.join(", "))?;
        }
        Ok(())
    }
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let field: &str = field;
        let path = if field == "__all__" {
            if prefix.is_empty() {
                FieldErrors::ROOT.to_string()
            } else {
                prefix.to_string()
            }
        } else {
            join_path(prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.add(path.clone(), describe(error));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

pub(crate) fn quoted_field<'a>(message: &'a str, marker: &str) -> Option<&'a str> {
    let start = message.find(marker)? + marker.len();
    let rest = &message[start..];
    let end = rest.find('`')?;
    Some(&rest[..end])
}

/// 검증 실패 하나를 메시지로 바꿉니다.
///
/// 스키마에 메시지가 지정되어 있으면 그대로 사용하고,
/// 없으면 규칙 코드와 파라미터로 메시지를 만듭니다.
fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let min = error.params.get("min");
    let max = error.params.get("max");
    let equal = error.params.get("equal");

    match &*error.code {
        "length" => match (equal, min, max) {
            (Some(equal), _, _) => format!("length must be exactly {}", equal),
            (None, Some(min), Some(max)) => format!("length must be between {} and {}", min, max),
            (None, Some(min), None) => format!("length must be at least {}", min),
            (None, None, Some(max)) => format!("length must be at most {}", max),
            (None, None, None) => "invalid length".to_string(),
        },
        "range" => match (min, max) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "out of range".to_string(),
        },
        "email" => "must be a valid email address".to_string(),
        "url" => "must be a valid URL".to_string(),
        "required" => "is required".to_string(),
        "must_match" => "does not match".to_string(),
        code => format!("failed `{}` check", code),
    }
}
