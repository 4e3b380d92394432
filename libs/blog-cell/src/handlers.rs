use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;
use shared_utils::{AppState, ValidatedJson};

use crate::models::{Comment, CreateCommentRequest, Post, PostFilters, PostSearchQuery};
use crate::services::{CommentService, PostService};

#[axum::debug_handler]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostSearchQuery>,
) -> Result<Json<Vec<Post>>, AppError> {
    let post_service = PostService::new(&state.supabase);

    let posts = post_service.list_posts(&PostFilters::from(query)).await?;

    Ok(Json(posts))
}

#[axum::debug_handler]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post_service = PostService::new(&state.supabase);

    let post = post_service.view_post(&slug).await?;

    Ok(Json(post))
}

#[axum::debug_handler]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment_service = CommentService::new(&state.supabase);

    let comment = comment_service.create_comment(&post_id, request).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
