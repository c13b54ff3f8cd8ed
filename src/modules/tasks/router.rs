use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_task, delete_task, get_task, list_tasks, toggle_task_completion, update_task,
};

pub fn init_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .route("/{id}/complete", post(toggle_task_completion))
}
