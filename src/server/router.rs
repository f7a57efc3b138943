//! Route configuration and API documentation.
//!
//! All API routes live under `/api/v1` and require a bearer token except
//! registration and login. `/health` answers liveness probes, and the
//! generated OpenAPI document is browsable at `/swagger-ui`.

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, application, auth, chat, notification, pet, rescue, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        rescue::create_rescue,
        rescue::get_rescues,
        rescue::get_rescue,
        rescue::update_rescue,
        rescue::delete_rescue,
        rescue::get_staff,
        rescue::add_staff,
        rescue::update_staff,
        rescue::remove_staff,
        pet::get_pets,
        pet::discover,
        pet::get_liked_pets,
        pet::get_pet,
        pet::create_pet,
        pet::update_pet,
        pet::delete_pet,
        pet::rate_pet,
        application::create_application,
        application::get_applications,
        application::get_application,
        application::decide_application,
        application::withdraw_application,
        chat::open_chat,
        chat::get_chats,
        chat::get_chat,
        chat::get_messages,
        chat::post_message,
        chat::mark_read,
        chat::set_typing,
        chat::get_typing,
        notification::get_notifications,
        notification::mark_read,
        notification::mark_all_read,
        admin::setup,
        admin::get_audit_logs,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::auth::RegisterDto,
        crate::model::auth::LoginDto,
        crate::model::auth::TokenDto,
        crate::model::user::UserDto,
        crate::model::user::UpdateUserDto,
        crate::model::user::PaginatedUsersDto,
        crate::model::rescue::RescueDto,
        crate::model::rescue::CreateRescueDto,
        crate::model::rescue::UpdateRescueDto,
        crate::model::rescue::PaginatedRescuesDto,
        crate::model::rescue::StaffMemberDto,
        crate::model::rescue::AddStaffDto,
        crate::model::rescue::UpdateStaffDto,
        crate::model::pet::PetDto,
        crate::model::pet::CreatePetDto,
        crate::model::pet::UpdatePetDto,
        crate::model::pet::PaginatedPetsDto,
        crate::model::pet::RatePetDto,
        crate::model::pet::RatingDto,
        crate::model::application::ApplicationDto,
        crate::model::application::CreateApplicationDto,
        crate::model::application::UpdateApplicationStatusDto,
        crate::model::application::PaginatedApplicationsDto,
        crate::model::chat::ChatDto,
        crate::model::chat::ChatParticipantDto,
        crate::model::chat::OpenChatDto,
        crate::model::chat::MessageDto,
        crate::model::chat::PostMessageDto,
        crate::model::chat::ChatListDto,
        crate::model::chat::TypingDto,
        crate::model::notification::NotificationDto,
        crate::model::notification::PaginatedNotificationsDto,
        crate::model::admin::SetupDto,
        crate::model::admin::AuditLogDto,
        crate::model::admin::PaginatedAuditLogsDto,
    )),
    tags(
        (name = "auth", description = "Registration and sign-in"),
        (name = "user", description = "User accounts"),
        (name = "rescue", description = "Rescue organizations and staff"),
        (name = "pet", description = "Pet listings, discovery, and ratings"),
        (name = "application", description = "Adoption applications"),
        (name = "chat", description = "Conversations, typing, read receipts"),
        (name = "notification", description = "Notification inbox"),
        (name = "admin", description = "Platform administration"),
    )
)]
struct ApiDoc;

/// Liveness probe.
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Builds the application router with all routes and layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/users", get(user::get_users))
        .route(
            "/api/v1/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/v1/rescues",
            post(rescue::create_rescue).get(rescue::get_rescues),
        )
        .route(
            "/api/v1/rescues/{id}",
            get(rescue::get_rescue)
                .put(rescue::update_rescue)
                .delete(rescue::delete_rescue),
        )
        .route(
            "/api/v1/rescues/{id}/staff",
            get(rescue::get_staff).post(rescue::add_staff),
        )
        .route(
            "/api/v1/rescues/{id}/staff/{user_id}",
            put(rescue::update_staff).delete(rescue::remove_staff),
        )
        .route("/api/v1/pets", get(pet::get_pets).post(pet::create_pet))
        .route("/api/v1/pets/discover", get(pet::discover))
        .route("/api/v1/pets/liked", get(pet::get_liked_pets))
        .route(
            "/api/v1/pets/{id}",
            get(pet::get_pet).put(pet::update_pet).delete(pet::delete_pet),
        )
        .route("/api/v1/pets/{id}/rating", post(pet::rate_pet))
        .route(
            "/api/v1/applications",
            post(application::create_application).get(application::get_applications),
        )
        .route("/api/v1/applications/{id}", get(application::get_application))
        .route(
            "/api/v1/applications/{id}/status",
            put(application::decide_application),
        )
        .route(
            "/api/v1/applications/{id}/withdraw",
            put(application::withdraw_application),
        )
        .route("/api/v1/chats", post(chat::open_chat).get(chat::get_chats))
        .route("/api/v1/chats/{id}", get(chat::get_chat))
        .route(
            "/api/v1/chats/{id}/messages",
            get(chat::get_messages).post(chat::post_message),
        )
        .route("/api/v1/chats/{id}/read", put(chat::mark_read))
        .route(
            "/api/v1/chats/{id}/typing",
            post(chat::set_typing).get(chat::get_typing),
        )
        .route(
            "/api/v1/notifications",
            get(notification::get_notifications),
        )
        .route(
            "/api/v1/notifications/read-all",
            put(notification::mark_all_read),
        )
        .route(
            "/api/v1/notifications/{id}/read",
            put(notification::mark_read),
        )
        .route("/api/v1/admin/setup", post(admin::setup))
        .route("/api/v1/admin/audit-logs", get(admin::get_audit_logs))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use super::router;
    use crate::server::{service::admin::code::SetupCodeService, state::AppState};
    use test_utils::builder::TestBuilder;

    /// Tests that the health endpoint answers without authentication.
    ///
    /// Expected: 200 OK
    #[tokio::test]
    async fn health_responds_ok() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let state = AppState::new(db, "test-secret".to_string(), SetupCodeService::new());

        let app = router().with_state(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests that protected endpoints reject anonymous requests.
    ///
    /// Expected: 401 Unauthorized
    #[tokio::test]
    async fn protected_route_requires_token() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();
        let state = AppState::new(db, "test-secret".to_string(), SetupCodeService::new());

        let app = router().with_state(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auth/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
