pub mod person;

use use_case::person::PersonUseCase;

use crate::{AppState, memory::repositories::MemoryPersonRepository};

/// ヘルスチェックハンドラ
#[tracing::instrument()]
pub async fn health_check() -> &'static str {
    "Ok, the server is running!"
}

type PersonUseCaseImpl = PersonUseCase<MemoryPersonRepository>;

fn person_use_case(app_state: &AppState) -> PersonUseCaseImpl {
    let person_repo = app_state.person_repository.clone();
    PersonUseCase::new(person_repo)
}
