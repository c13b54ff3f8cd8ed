use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateTaskRequest, Task, UpdateTaskRequest};

pub struct TaskService;

impl TaskService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        dto: CreateTaskRequest,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, user_id) VALUES ($1, $2, $3) \
             RETURNING id, title, description, completed, user_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("failed to insert task")?;

        Ok(task)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &PgPool, user_id: i64) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, user_id, created_at, updated_at \
             FROM tasks WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("failed to fetch tasks")?;

        Ok(tasks)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, user_id: i64, task_id: i64) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, user_id, created_at, updated_at \
             FROM tasks WHERE id = $1 AND user_id = $2",
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("failed to fetch task")?
        .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        Ok(task)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: i64,
        task_id: i64,
        dto: UpdateTaskRequest,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET \
                 title = COALESCE($3, title), \
                 description = COALESCE($4, description), \
                 completed = COALESCE($5, completed), \
                 updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING id, title, description, completed, user_id, created_at, updated_at",
        )
        .bind(task_id)
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.completed)
        .fetch_optional(db)
        .await
        .context("failed to update task")?
        .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        Ok(task)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: i64, task_id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(db)
            .await
            .context("failed to delete task")?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound("task not found".to_string()));
        }

        Ok(())
    }

    /// Flips the completion flag, mirroring a checkbox toggle in the client.
    #[instrument(skip(db))]
    pub async fn toggle_completion(
        db: &PgPool,
        user_id: i64,
        task_id: i64,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET completed = NOT completed, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING id, title, description, completed, user_id, created_at, updated_at",
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("failed to toggle task completion")?
        .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        Ok(task)
    }
}
