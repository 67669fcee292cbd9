//! # Customer Service サーバー
//!
//! 顧客レコードの登録・取得を提供する HTTP サービス。
//!
//! ## 構成
//!
//! ```text
//! HTTP リクエスト
//!   → handler（バインド・直列化）
//!   → usecase（委譲）
//!   → repository（SQL）
//!   → PostgreSQL `customer` テーブル
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 説明 |
//! |--------|------|
//! | `API_HOST` | バインドアドレス |
//! | `API_PORT` | ポート番号 |
//! | `DB_HOST` | PostgreSQL ホスト |
//! | `DB_PORT` | PostgreSQL ポート |
//! | `DB_NAME` | データベース名 |
//! | `DB_USER` | ユーザー名 |
//! | `DB_PASSWORD` | パスワード |
//! | `LOG_FORMAT` | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | ログレベル（デフォルト: `info,customer=debug`） |
//!
//! `.env` ファイルが存在する場合はそちらも読み込む。
//!
//! ## 起動方法
//!
//! ```bash
//! DB_HOST=127.0.0.1 DB_PORT=5432 DB_NAME=contohDb DB_USER=postgres DB_PASSWORD=12345678 \
//!     API_HOST=localhost API_PORT=8888 cargo run -p customer-service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use customer_infra::{
    db,
    repository::{CustomerRepository, PostgresCustomerRepository},
};
use customer_service::{
    app_builder::build_app,
    config::AppConfig,
    handler::{CustomerState, ReadinessState},
    usecase::{CustomerUseCase, CustomerUseCaseImpl},
};
use customer_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Customer Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("customer-service");
    let service_name = tracing_config.service_name.clone();
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = %service_name).entered();

    // 設定読み込み（以降は不変）
    let config = AppConfig::from_env();

    tracing::info!(
        "Customer Service サーバーを起動します: {}:{}",
        config.api.host,
        config.api.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(config.db.connect_options()?)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    // 依存コンポーネントを初期化
    let customer_repository: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(pool));
    let customer_usecase: Arc<dyn CustomerUseCase> =
        Arc::new(CustomerUseCaseImpl::new(customer_repository));
    let customer_state = Arc::new(CustomerState {
        usecase: customer_usecase,
    });

    let app = build_app(customer_state, readiness_state);

    // サーバー起動
    let listener = TcpListener::bind(config.api.listen_addr()?)
        .await
        .context("アドレスのバインドに失敗しました")?;
    tracing::info!(
        "Customer Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Customer Service サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
