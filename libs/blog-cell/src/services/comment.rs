use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::SupabaseClient;

use crate::models::{BlogError, Comment, CreateCommentRequest, COMMENTS_TABLE};

pub struct CommentService {
    supabase: SupabaseClient,
}

impl CommentService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    /// Attach a comment to `post_id`. The post is not looked up first.
    pub async fn create_comment(
        &self,
        post_id: &str,
        request: CreateCommentRequest,
    ) -> Result<Comment, BlogError> {
        debug!("Creating comment on post {}", post_id);

        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.to_string(),
            name: request.name,
            email: request.email,
            content: request.content,
            created_at: now,
            updated_at: now,
        };

        let created: Vec<Comment> = self.supabase.insert(COMMENTS_TABLE, &comment).await?;
        let comment = created
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Failed to create comment"))?;

        info!("Comment {} added to post {}", comment.id, post_id);
        Ok(comment)
    }
}
