pub mod http;
pub mod memory;

use settings::AppSettings;

use crate::memory::repositories::MemoryPersonRepository;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// アプリケーション設定
    pub app_settings: AppSettings,
    /// 人物リポジトリ
    pub person_repository: MemoryPersonRepository,
}
