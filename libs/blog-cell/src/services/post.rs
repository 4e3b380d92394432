use chrono::Utc;
use tracing::{debug, warn};

use shared_database::{RestQuery, SupabaseClient};

use crate::models::{BlogError, Post, PostFilters, ViewCount, POSTS_TABLE, POST_WITH_RELATIONS};

pub struct PostService {
    supabase: SupabaseClient,
}

impl PostService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    pub async fn list_posts(&self, filters: &PostFilters) -> Result<Vec<Post>, BlogError> {
        debug!("Listing posts with filters: {:?}", filters);

        let posts: Vec<Post> = self
            .supabase
            .select::<Post>(POSTS_TABLE, &filters.to_query())
            .await?
            .into_iter()
            .filter(|post| filters.matches(post))
            .collect();

        debug!("Found {} posts", posts.len());
        Ok(posts)
    }

    /// Fetch a post by slug and count the view.
    ///
    /// The new count is computed from the value just read and written back
    /// in a second request, so concurrent reads of one slug can under-count.
    pub async fn view_post(&self, slug: &str) -> Result<Post, BlogError> {
        debug!("Fetching post by slug: {}", slug);

        let query = RestQuery::new()
            .select(POST_WITH_RELATIONS)
            .param("comments.order", "created_at.asc")
            .eq("slug", slug)
            .limit(1);
        let posts: Vec<Post> = self.supabase.select(POSTS_TABLE, &query).await?;
        let mut post = posts.into_iter().next().ok_or(BlogError::PostNotFound)?;

        let change = ViewCount {
            views: post.views + 1,
            updated_at: Utc::now(),
        };
        let by_id = RestQuery::new().eq("id", &post.id);
        let updated: Vec<ViewCount> = self.supabase.update(POSTS_TABLE, &by_id, &change).await?;

        match updated.into_iter().next() {
            Some(stored) => {
                post.views = stored.views;
                post.updated_at = stored.updated_at;
            }
            None => {
                warn!("Post {} disappeared before its view count was saved", post.id);
                return Err(BlogError::PostNotFound);
            }
        }

        Ok(post)
    }
}
