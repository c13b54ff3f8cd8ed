use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, SignupRequest, UserResponse};
use crate::modules::tasks::model::{
    CreateTaskRequest, MessageResponse, Task, TaskListResponse, UpdateTaskRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::tasks::controller::create_task,
        crate::modules::tasks::controller::list_tasks,
        crate::modules::tasks::controller::get_task,
        crate::modules::tasks::controller::update_task,
        crate::modules::tasks::controller::delete_task,
        crate::modules::tasks::controller::toggle_task_completion,
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            LoginResponse,
            UserResponse,
            Task,
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskListResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Tasks", description = "Per-user task management")
    ),
    info(
        title = "Taskpad API",
        version = "0.1.0",
        description = "A task-tracking REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
