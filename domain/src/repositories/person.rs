use crate::{
    DomainResult,
    models::{Person, PersonQuery},
};

/// 人物リポジトリ
///
/// 人物の検索を実装する具象リポジトリをDIして使用する。
/// 同じ検索クエリに対しては、バックエンドのデータが変わらない限り、
/// 同じ種類の結果を返さなければならない。
#[async_trait::async_trait]
pub trait PersonRepository {
    /// 身分証明書の種別コードと番号で人物を検索する。
    ///
    /// 一致する人物が存在しない場合、実装は`Ok(None)`を返すか、
    /// `NotFound`のドメインエラーを返す。どちらを返すかは実装の選択である。
    async fn find_by_document(&self, query: &PersonQuery) -> DomainResult<Option<Person>>;
}
