use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use blog_cell::models::{Comment, NewPost, Post, COMMENTS_TABLE, POSTS_TABLE};
use doctor_cell::models::{Doctor, Service, DOCTORS_TABLE, SERVICES_TABLE};
use shared_database::{RestQuery, SupabaseClient};
use shared_models::error::AppError;

use crate::fixtures::{COMMENTS, DOCTORS, POSTS, SERVICES};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("No doctors found. Please seed doctors first")]
    NoDoctors,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::NoDoctors => AppError::BadRequest(err.to_string()),
            SeedError::Database(e) => AppError::from_store(e),
        }
    }
}

/// Replaces whole tables with the fixture data. Each routine deletes every
/// existing row of its table first; dependants go with it through the
/// cascading foreign keys.
pub struct SeedService {
    supabase: SupabaseClient,
}

// Rows of one batch get distinct creation times so "oldest first" and
// "newest first" follow fixture order.
fn stagger(base: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    base + Duration::milliseconds(index as i64)
}

impl SeedService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    pub async fn seed_doctors(&self) -> Result<Vec<Doctor>, SeedError> {
        let now = Utc::now();
        let doctors: Vec<Doctor> = DOCTORS
            .iter()
            .enumerate()
            .map(|(i, fixture)| Doctor {
                id: Uuid::new_v4().to_string(),
                name: fixture.name.to_string(),
                specialty: fixture.specialty.to_string(),
                image: fixture.image.to_string(),
                experience: fixture.experience,
                bio: None,
                created_at: stagger(now, i),
                updated_at: stagger(now, i),
            })
            .collect();

        self.supabase.delete_all(DOCTORS_TABLE).await?;
        let stored: Vec<Doctor> = self.supabase.insert(DOCTORS_TABLE, &doctors).await?;

        info!("Seeded {} doctors", stored.len());
        Ok(stored)
    }

    pub async fn seed_services(&self) -> Result<Vec<Service>, SeedError> {
        let now = Utc::now();
        let services: Vec<Service> = SERVICES
            .iter()
            .enumerate()
            .map(|(i, fixture)| Service {
                id: Uuid::new_v4().to_string(),
                name: fixture.name.to_string(),
                description: fixture.description.to_string(),
                icon: fixture.icon.to_string(),
                created_at: stagger(now, i),
                updated_at: stagger(now, i),
            })
            .collect();

        self.supabase.delete_all(SERVICES_TABLE).await?;
        let stored: Vec<Service> = self.supabase.insert(SERVICES_TABLE, &services).await?;

        info!("Seeded {} services", stored.len());
        Ok(stored)
    }

    /// Needs doctors in place. Authors are taken from the doctors in
    /// creation order; with fewer doctors than posts they are reused.
    pub async fn seed_posts(&self) -> Result<Vec<Post>, SeedError> {
        let oldest_first = RestQuery::new().select("*").order_asc("created_at");
        let doctors: Vec<Doctor> = self.supabase.select(DOCTORS_TABLE, &oldest_first).await?;
        if doctors.is_empty() {
            return Err(SeedError::NoDoctors);
        }
        if doctors.len() < DOCTORS.len() {
            warn!("Only {} doctors found, post authors will repeat", doctors.len());
        }

        let now = Utc::now();
        let posts: Vec<NewPost> = POSTS
            .iter()
            .enumerate()
            .map(|(i, fixture)| NewPost {
                id: Uuid::new_v4().to_string(),
                title: fixture.title.to_string(),
                slug: fixture.slug.to_string(),
                content: fixture.content.to_string(),
                summary: Some(fixture.summary.to_string()),
                author_id: doctors[fixture.author % doctors.len()].id.clone(),
                category: fixture.category.to_string(),
                image: Some(fixture.image.to_string()),
                published: true,
                views: 0,
                created_at: stagger(now, i),
                updated_at: stagger(now, i),
            })
            .collect();

        self.supabase.delete_all(POSTS_TABLE).await?;
        let stored: Vec<Post> = self.supabase.insert(POSTS_TABLE, &posts).await?;

        let comments: Vec<Comment> = COMMENTS
            .iter()
            .map(|fixture| Comment {
                id: Uuid::new_v4().to_string(),
                post_id: posts[fixture.post].id.clone(),
                name: fixture.name.to_string(),
                email: fixture.email.to_string(),
                content: fixture.content.to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();
        let _: Vec<Comment> = self.supabase.insert(COMMENTS_TABLE, &comments).await?;

        info!("Seeded {} posts and {} comments", stored.len(), comments.len());
        Ok(stored)
    }
}
