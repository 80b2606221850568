use std::borrow::Cow;

pub mod models;
pub mod repositories;

use enum_display::EnumDisplay;

/// ドメインエラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay)]
pub enum DomainErrorKind {
    /// 検証エラー
    Validation,
    /// エンティティが存在しない
    NotFound,
}

/// ドメインエラー
#[derive(Debug, thiserror::Error)]
#[error("{}", .messages.join(", "))]
pub struct DomainError {
    /// エラー種別
    pub kind: DomainErrorKind,
    /// エラーメッセージ
    pub messages: Vec<Cow<'static, str>>,
    /// エラーの原因
    #[source]
    pub source: anyhow::Error,
}

/// 単一のメッセージを持つドメインエラーを作成する。
pub fn domain_error(kind: DomainErrorKind, message: &'static str) -> DomainError {
    DomainError {
        kind,
        messages: vec![message.into()],
        source: anyhow::anyhow!(message),
    }
}

/// ドメイン結果
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_its_message() {
        let error = domain_error(DomainErrorKind::Validation, "invalid document type");
        assert_eq!(error.kind, DomainErrorKind::Validation);
        assert_eq!(error.to_string(), "invalid document type");
    }
}
