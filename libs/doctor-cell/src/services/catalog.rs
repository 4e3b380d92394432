use tracing::debug;

use shared_database::{RestQuery, SupabaseClient};

use crate::models::{DoctorError, Service, SERVICES_TABLE};

/// Read access to the clinic's service catalog.
pub struct CatalogService {
    supabase: SupabaseClient,
}

impl CatalogService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, DoctorError> {
        debug!("Listing services");

        let services = self
            .supabase
            .select(SERVICES_TABLE, &RestQuery::new().select("*"))
            .await?;
        Ok(services)
    }
}
