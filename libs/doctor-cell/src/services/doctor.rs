use tracing::debug;

use shared_database::SupabaseClient;

use crate::models::{Doctor, DoctorError, DoctorFilters, DOCTORS_TABLE};

pub struct DoctorService {
    supabase: SupabaseClient,
}

impl DoctorService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
        }
    }

    /// List doctors matching every supplied filter. No match is an empty list.
    ///
    /// The store pattern can be looser than the search term, so rows are
    /// checked again here.
    pub async fn list_doctors(&self, filters: &DoctorFilters) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing doctors with filters: {:?}", filters);

        let doctors: Vec<Doctor> = self
            .supabase
            .select::<Doctor>(DOCTORS_TABLE, &filters.to_query())
            .await?
            .into_iter()
            .filter(|doctor| filters.matches(doctor))
            .collect();

        debug!("Found {} doctors", doctors.len());
        Ok(doctors)
    }
}
