use domain::{
    DomainErrorKind, DomainResult, domain_error,
    models::{DocumentType, Person, PersonQuery},
    repositories::PersonRepository,
};

/// 身分証明書の種別コードが不正な場合のエラーメッセージ
///
/// リポジトリが人物を返さなかった場合も、現行の挙動を維持するため、
/// このメッセージを持つ検証エラーを返す。
pub const DOCUMENT_TYPE_ERROR_MESSAGE: &str =
    "El valor del campo documentType tiene que estar entre (C y P).";

/// 人物が見つかった場合のログメッセージ
pub const PERSON_FOUND_MESSAGE: &str = "El usuario fue encontrado";

/// 検索クエリの身分証明書の種別コードを検証する。
///
/// 種別コードは大文字小文字を区別しないで照合する。
pub fn document_type_is_valid(query: &PersonQuery) -> bool {
    DocumentType::by_code(&query.document_type).is_some()
}

/// 人物ユースケース
pub struct PersonUseCase<R>
where
    R: PersonRepository,
{
    /// 人物リポジトリ
    pub repository: R,
}

impl<R> PersonUseCase<R>
where
    R: PersonRepository,
{
    /// 人物ユースケースを作成する。
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 身分証明書の種別コードと番号で人物を検索する。
    ///
    /// 種別コードを検証してから、リポジトリに検索を委譲する。
    /// 種別コードが不正な場合、リポジトリを呼び出さずに検証エラーを返す。
    /// リポジトリが人物を返した場合、その人物をそのまま返す。
    /// リポジトリが`Ok(None)`を返した場合、検証エラーと同じエラーを返す。
    /// リポジトリがエラーを返した場合、そのエラーをそのまま返す。
    pub async fn find_by_document(&self, query: &PersonQuery) -> DomainResult<Person> {
        if !document_type_is_valid(query) {
            tracing::error!("{}", DOCUMENT_TYPE_ERROR_MESSAGE);
            return Err(domain_error(
                DomainErrorKind::Validation,
                DOCUMENT_TYPE_ERROR_MESSAGE,
            ));
        }
        match self.repository.find_by_document(query).await {
            Ok(Some(person)) => {
                tracing::info!("{}", PERSON_FOUND_MESSAGE);
                Ok(person)
            }
            Ok(None) => {
                tracing::error!("{}", DOCUMENT_TYPE_ERROR_MESSAGE);
                Err(domain_error(
                    DomainErrorKind::Validation,
                    DOCUMENT_TYPE_ERROR_MESSAGE,
                ))
            }
            Err(e) => {
                tracing::error!("{}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use domain::DomainError;

    use super::*;

    /// リポジトリの検索結果を固定したスタブ
    enum StubOutcome {
        Found(Person),
        Empty,
        Failed(DomainErrorKind, &'static str),
    }

    struct StubPersonRepository {
        outcome: StubOutcome,
        calls: Arc<AtomicUsize>,
    }

    impl StubPersonRepository {
        /// スタブと、そのリポジトリの呼び出し回数のカウンターを作成する。
        fn new(outcome: StubOutcome) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Self {
                outcome,
                calls: calls.clone(),
            };
            (stub, calls)
        }
    }

    #[async_trait::async_trait]
    impl PersonRepository for StubPersonRepository {
        async fn find_by_document(&self, _query: &PersonQuery) -> DomainResult<Option<Person>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                StubOutcome::Found(person) => Ok(Some(person.clone())),
                StubOutcome::Empty => Ok(None),
                StubOutcome::Failed(kind, message) => Err(domain_error(*kind, *message)),
            }
        }
    }

    fn sample_person() -> Person {
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

    fn query(document_type: &str, document_number: &str) -> PersonQuery {
        PersonQuery {
            document_type: String::from(document_type),
            document_number: String::from(document_number),
        }
    }

    fn assert_validation_error(error: &DomainError) {
        assert_eq!(error.kind, DomainErrorKind::Validation);
        assert_eq!(error.to_string(), DOCUMENT_TYPE_ERROR_MESSAGE);
    }

    #[rstest::rstest]
    #[case("C", true)]
    #[case("c", true)]
    #[case("P", true)]
    #[case("p", true)]
    #[case("A", false)]
    #[case("Z", false)]
    #[case("", false)]
    fn document_type_validation(#[case] document_type: &str, #[case] expected: bool) {
        let query = query(document_type, "23445322");
        assert_eq!(document_type_is_valid(&query), expected);
    }

    #[tokio::test]
    async fn found_person_is_returned_unmodified() -> anyhow::Result<()> {
        let (repository, calls) = StubPersonRepository::new(StubOutcome::Found(sample_person()));
        let use_case = PersonUseCase::new(repository);

        let person = use_case.find_by_document(&query("C", "23445322")).await?;

        assert_eq!(person, sample_person());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_document_type_fails_without_calling_the_repository() {
        let (repository, calls) = StubPersonRepository::new(StubOutcome::Found(sample_person()));
        let use_case = PersonUseCase::new(repository);

        let result = use_case.find_by_document(&query("A", "12345")).await;

        assert_validation_error(&result.unwrap_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_result_folds_into_the_validation_error() {
        // リポジトリが人物を返さなかった場合、NotFoundではなく、
        // 種別コードの検証と同じエラーを返す。
        let (repository, calls) = StubPersonRepository::new(StubOutcome::Empty);
        let use_case = PersonUseCase::new(repository);

        let result = use_case.find_by_document(&query("C", "99999999")).await;

        assert_validation_error(&result.unwrap_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repository_error_is_propagated_unchanged() {
        let (repository, _calls) = StubPersonRepository::new(StubOutcome::Failed(
            DomainErrorKind::NotFound,
            "No existe el usuario.",
        ));
        let use_case = PersonUseCase::new(repository);

        let result = use_case.find_by_document(&query("C", "12345")).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind, DomainErrorKind::NotFound);
        assert_eq!(error.to_string(), "No existe el usuario.");
    }

    #[tokio::test]
    async fn identical_queries_yield_identical_outcomes() -> anyhow::Result<()> {
        let (repository, calls) = StubPersonRepository::new(StubOutcome::Found(sample_person()));
        let use_case = PersonUseCase::new(repository);
        let query = query("c", "23445322");

        let first = use_case.find_by_document(&query).await?;
        let second = use_case.find_by_document(&query).await?;

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }
}
