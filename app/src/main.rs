use anyhow::Context as _;

use infra::{AppState, memory::repositories::MemoryPersonRepository};

use app::{bind_address, get_subscriber, init_subscriber, load_app_settings, routes::create_router};

/// アプリケーションエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // アプリケーション設定を読み込み
    let app_settings = load_app_settings("app_settings.toml")?;

    // ログサブスクライバーを登録
    let subscriber = get_subscriber(
        String::from("person-lookup"),
        app_settings.logging.level,
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // ルーターを作成
    let app_state = AppState {
        app_settings: app_settings.clone(),
        person_repository: MemoryPersonRepository::with_sample_directory(),
    };
    let router = create_router(app_state);

    // HTTPサーバーを起動
    let (listener, port) = bind_address(&app_settings.http).await?;
    tracing::info!("HTTP server is running on port {}", port);
    axum::serve(listener, router)
        .await
        .context("Failed to start the HTTP server")?;

    Ok(())
}
