use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::SupabaseClient;

use crate::models::{ContactError, ContactMessage, CreateContactRequest, CONTACT_MESSAGES_TABLE, UNREAD};

pub struct ContactIntakeService {
    supabase: SupabaseClient,
}

impl ContactIntakeService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    pub async fn submit(&self, request: CreateContactRequest) -> Result<ContactMessage, ContactError> {
        debug!("Storing contact message from {}", request.email);

        let now = Utc::now();
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            status: UNREAD.to_string(),
            created_at: now,
            updated_at: now,
        };

        let created: Vec<ContactMessage> = self.supabase.insert(CONTACT_MESSAGES_TABLE, &message).await?;
        let message = created
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Failed to store contact message"))?;

        info!("Contact message {} received", message.id);
        Ok(message)
    }
}
