use std::sync::Arc;

use domain::{
    DomainErrorKind, DomainResult, domain_error,
    models::{DocumentType, Person, PersonQuery},
    repositories::PersonRepository,
};

/// 人物が存在しない場合のエラーメッセージ
pub const PERSON_NOT_FOUND_MESSAGE: &str = "No existe el usuario.";

/// 人物ディレクトリのエントリ
///
/// 身分証明書と、その持ち主を関連付ける。
#[derive(Debug, Clone)]
pub struct PersonEntry {
    /// 身分証明書の種別
    pub document_type: DocumentType,
    /// 身分証明書の番号
    pub document_number: String,
    /// 人物
    pub person: Person,
}

/// インメモリ人物リポジトリ
///
/// 固定の人物ディレクトリを検索クエリと照合する。照合は種別コードと
/// 番号の完全一致（大文字小文字を区別する）で行う。一致するエントリが
/// 存在しない場合、`NotFound`のドメインエラーを返す。
#[derive(Debug, Clone)]
pub struct MemoryPersonRepository {
    /// 人物ディレクトリ
    entries: Arc<Vec<PersonEntry>>,
}

impl MemoryPersonRepository {
    /// インメモリ人物リポジトリを作成する。
    pub fn new(entries: Vec<PersonEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// サンプルの人物ディレクトリを持つリポジトリを作成する。
    pub fn with_sample_directory() -> Self {
        Self::new(vec![PersonEntry {
            document_type: DocumentType::NationalId,
            document_number: String::from("23445322"),
            person: sample_person(),
        }])
    }
}

#[async_trait::async_trait]
impl PersonRepository for MemoryPersonRepository {
    async fn find_by_document(&self, query: &PersonQuery) -> DomainResult<Option<Person>> {
        let entry = self.entries.iter().find(|entry| {
            entry.document_type.code() == query.document_type
                && entry.document_number == query.document_number
        });
        match entry {
            Some(entry) => Ok(Some(entry.person.clone())),
            None => {
                tracing::error!("{}", PERSON_NOT_FOUND_MESSAGE);
                Err(domain_error(
                    DomainErrorKind::NotFound,
                    PERSON_NOT_FOUND_MESSAGE,
                ))
            }
        }
    }
}

/// サンプルの人物を返す。
pub fn sample_person() -> Person {
    Person {
        first_name: String::from("Daniel"),
        second_name: String::from("Ricardo"),
        first_last_name: String::from("Buritica"),
        second_last_name: String::from("Junco"),
        phone: String::from("3217570485"),
        address: String::from("Calle falsa 123"),
        residence_city: String::from("Bogota"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(document_type: &str, document_number: &str) -> PersonQuery {
        PersonQuery {
            document_type: String::from(document_type),
            document_number: String::from(document_number),
        }
    }

    #[tokio::test]
    async fn person_is_found_by_its_document() -> anyhow::Result<()> {
        let repository = MemoryPersonRepository::with_sample_directory();

        let person = repository
            .find_by_document(&query("C", "23445322"))
            .await?
            .unwrap();

        assert_eq!(person.first_name, "Daniel");
        assert_eq!(person.second_name, "Ricardo");
        assert_eq!(person.first_last_name, "Buritica");
        assert_eq!(person.second_last_name, "Junco");
        assert_eq!(person.phone, "3217570485");
        assert_eq!(person.address, "Calle falsa 123");
        assert_eq!(person.residence_city, "Bogota");
        Ok(())
    }

    #[rstest::rstest]
    #[case("C", "99999999")]
    #[case("P", "23445322")]
    #[case("c", "23445322")]
    #[case("", "")]
    #[tokio::test]
    async fn unknown_document_is_not_found(
        #[case] document_type: &str,
        #[case] document_number: &str,
    ) {
        let repository = MemoryPersonRepository::with_sample_directory();

        let result = repository
            .find_by_document(&query(document_type, document_number))
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.kind, DomainErrorKind::NotFound);
        assert_eq!(error.to_string(), PERSON_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn empty_directory_never_finds_a_person() {
        let repository = MemoryPersonRepository::new(Vec::new());

        let result = repository.find_by_document(&query("C", "23445322")).await;

        assert_eq!(result.unwrap_err().kind, DomainErrorKind::NotFound);
    }
}
