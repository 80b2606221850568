use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use domain::models::{Person, PersonQuery};

use crate::{
    AppState,
    http::{ApiError, ApiResult},
};

use super::person_use_case;

/// 人物検索リクエストのクエリパラメータ
///
/// 指定されなかったパラメータは空文字列として扱う。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindPersonParams {
    /// 身分証明書の種別コード
    document_type: String,
    /// 身分証明書の番号
    document_number: String,
}

impl From<FindPersonParams> for PersonQuery {
    fn from(params: FindPersonParams) -> Self {
        Self {
            document_type: params.document_type,
            document_number: params.document_number,
        }
    }
}

/// 人物レスポンスボディ
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponseBody {
    /// 名
    first_name: String,
    /// セカンドネーム
    second_name: String,
    /// 第一姓
    first_last_name: String,
    /// 第二姓
    second_last_name: String,
    /// 電話番号
    phone: String,
    /// 住所
    address: String,
    /// 居住都市
    residence_city: String,
}

impl From<Person> for PersonResponseBody {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            second_name: person.second_name,
            first_last_name: person.first_last_name,
            second_last_name: person.second_last_name,
            phone: person.phone,
            address: person.address,
            residence_city: person.residence_city,
        }
    }
}

/// 人物検索ハンドラ
#[tracing::instrument(skip(app_state))]
pub async fn find_by_document(
    State(app_state): State<AppState>,
    Query(params): Query<FindPersonParams>,
) -> ApiResult<Json<PersonResponseBody>> {
    let query = PersonQuery::from(params);
    let use_case = person_use_case(&app_state);
    let person = use_case
        .find_by_document(&query)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(PersonResponseBody::from(person)))
}
