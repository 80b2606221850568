use serde::{Deserialize, Serialize};

/// 身分証明書の種別
///
/// 検索を受け付ける身分証明書の種別を列挙する。
/// この集合が種別コード検証の唯一の情報源である。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// パスポート
    Passport,
    /// 国民ID（セドゥラ）
    NationalId,
}

/// 身分証明書の種別のリスト
pub const DOCUMENT_TYPES: [DocumentType; 2] = [DocumentType::Passport, DocumentType::NationalId];

impl DocumentType {
    /// 種別コードを返す。
    pub fn code(self) -> &'static str {
        match self {
            Self::Passport => "P",
            Self::NationalId => "C",
        }
    }

    /// 種別の説明を返す。
    pub fn description(self) -> &'static str {
        match self {
            Self::Passport => "PASAPORTE",
            Self::NationalId => "CEDULA DE CIUDADANIA",
        }
    }

    /// 種別コードから種別を検索する。
    ///
    /// 種別コードは大文字小文字を区別しないで照合する。
    pub fn by_code(code: &str) -> Option<Self> {
        DOCUMENT_TYPES
            .into_iter()
            .find(|document_type| document_type.code().eq_ignore_ascii_case(code))
    }
}

/// 人物検索クエリ
///
/// 種別コードと番号が同じクエリは等価として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonQuery {
    /// 身分証明書の種別コード
    pub document_type: String,
    /// 身分証明書の番号
    pub document_number: String,
}

/// 人物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// 名
    pub first_name: String,
    /// セカンドネーム
    pub second_name: String,
    /// 第一姓
    pub first_last_name: String,
    /// 第二姓
    pub second_last_name: String,
    /// 電話番号
    pub phone: String,
    /// 住所
    pub address: String,
    /// 居住都市
    pub residence_city: String,
}
