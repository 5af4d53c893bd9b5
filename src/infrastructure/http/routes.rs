//! HTTP Routes
//!
//! API Endpoints（相对 API 前缀，默认 `/api`）:
//! - /            GET   服务元信息
//! - /users/:id   GET   获取用户（需认证）
//! - /posts/:id   GET   获取帖子（需认证）
//! - /posts       POST  发帖（需认证）
//! - 其它路径或方法     404 `not found`

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::auth::require_auth;
use super::cors::{cors_middleware, CorsPolicy};
use super::handlers;
use super::middleware::envelope_middleware;
use super::state::AppState;

/// 创建所有路由，API 挂载在 `api_prefix` 下
///
/// 前缀之外（以及 nest 匹配不到的 `{prefix}/`）的路径同样返回信封格式的 404
pub fn create_routes(state: Arc<AppState>, api_prefix: &str, cors: CorsPolicy) -> Router {
    let api = api_routes(state.clone(), cors);

    let router = if api_prefix == "/" {
        Router::new().merge(api)
    } else {
        Router::new()
            .nest(api_prefix, api)
            .fallback_service(not_found_routes(cors))
    };

    router.with_state(state)
}

/// API 路由，执行顺序为 envelope -> cors -> auth -> handler
fn api_routes(state: Arc<AppState>, cors: CorsPolicy) -> Router<Arc<AppState>> {
    let api = Router::new()
        .route("/", with_not_found(get(handlers::get_metadata)))
        .route("/users/:id", protected(get(handlers::get_user), &state))
        .route("/posts/:id", protected(get(handlers::get_post), &state))
        .route("/posts", protected(post(handlers::create_post), &state))
        .fallback(handlers::not_found);

    with_api_layers(api, cors)
}

/// 未匹配路径的兜底路由，与 API 共用信封和 CORS
fn not_found_routes(cors: CorsPolicy) -> Router {
    with_api_layers(Router::new().fallback(handlers::not_found), cors)
}

/// 需要认证的路由
///
/// 认证只包住已注册的方法，未注册的方法先落到 404，不经过认证
fn protected(
    method_router: MethodRouter<Arc<AppState>>,
    state: &Arc<AppState>,
) -> MethodRouter<Arc<AppState>> {
    with_not_found(
        method_router.route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
    )
}

/// 路径匹配但方法不匹配时返回 404 `not found`，而不是 405
fn with_not_found(method_router: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    method_router.fallback(handlers::not_found)
}

/// 全局中间件：`layer` 后添加的在外层，执行顺序为 envelope -> cors
fn with_api_layers<S>(router: Router<S>, cors: CorsPolicy) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn_with_state(cors, cors_middleware))
        .layer(middleware::from_fn(envelope_middleware))
}
