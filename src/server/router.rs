//! Route registration and in-process dispatch.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower::ServiceExt;
use tower_sessions::{SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::fake_auth,
        friend::{get_friends_ids, list_friends_pos, remove_friend},
        invitation::{accept_invitation, decline_invitation, get_invitations, invite_friend},
        user::{find_users, get_user_info, update_pos},
    },
    doc::ApiDoc,
    error::AppError,
    middleware::{debug::expose_error_detail, request_log::log_request},
    state::AppState,
};

/// Registers the routes. `/fakeAuth` and the API docs only exist in debug mode.
pub fn router(debug: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/getUserInfo", post(get_user_info))
        .route("/inviteFriend", post(invite_friend))
        .route("/getInvitations", post(get_invitations))
        .route("/acceptInvitation", post(accept_invitation))
        .route("/declineInvitation", post(decline_invitation))
        .route("/removeFriend", post(remove_friend))
        .route("/getFriendsIds", post(get_friends_ids))
        .route("/listFriendsPos", post(list_friends_pos))
        .route("/updatePos", post(update_pos))
        .route("/findUsers", post(find_users));

    let router = if debug {
        router
            .route("/fakeAuth", post(fake_auth))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

/// Builds the complete application: routes, sessions, debug error details and request logging.
pub fn app<Store>(state: AppState, session: SessionManagerLayer<Store>) -> Router
where
    Store: SessionStore + Clone,
{
    let debug = state.debug;
    let router = router(debug).layer(session);

    let router = if debug {
        router.layer(middleware::from_fn(expose_error_detail))
    } else {
        router
    };

    router
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.to_string())
}

/// Produces the response for a URI without going through the network.
#[async_trait]
pub trait UriRouter: Send + Sync {
    async fn get_response(&self, uri: &str) -> Response;
}

/// Dispatches an empty POST form for the URI through the application router.
#[derive(Clone)]
pub struct AppRouter {
    router: Router,
}

impl AppRouter {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl UriRouter for AppRouter {
    async fn get_response(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::empty());

        let request = match request {
            Ok(request) => request,
            Err(_) => return AppError::RouteNotFound(uri.to_string()).into_response(),
        };

        match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}
