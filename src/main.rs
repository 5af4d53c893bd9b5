//! Postline - 帖子与用户 HTTP API

use std::sync::Arc;

use postline::application::{SessionRepositoryPort, UserRepositoryPort};
use postline::config::{load_config, print_config, AppConfig};
use postline::domain::{Metadata, User, UserRef};
use postline::infrastructure::http::{AppState, CorsPolicy, HttpServer, ServerConfig};
use postline::infrastructure::memory::{
    InMemoryPostRepository, InMemorySessionRepository, InMemoryUserRepository,
    StaticMetadataRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Postline v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 Repository 适配器
    let mut metadata = Metadata::new(&config.service.name, env!("CARGO_PKG_VERSION"));
    if let Some(description) = &config.service.description {
        metadata = metadata.with_description(description);
    }
    let metadata_repo = Arc::new(StaticMetadataRepository::new(metadata));
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let post_repo = Arc::new(InMemoryPostRepository::new());
    let session_repo = Arc::new(InMemorySessionRepository::new());

    // 预置用户与会话
    for seed in &config.seed.users {
        let user_ref = UserRef::new(&seed.id);
        user_repo.save(&User::new(user_ref.clone(), &seed.name)).await?;
        session_repo.register(&seed.token, &user_ref).await?;
    }

    let state = AppState::new(metadata_repo, user_repo, post_repo, session_repo);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_api_prefix(&config.server.api_prefix)
        .with_max_body_bytes(config.server.max_body_bytes)
        .with_cors(CorsPolicy {
            handle_preflight: config.cors.handle_preflight,
        });

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},postline={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
