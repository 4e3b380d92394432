use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_database::RestQuery;
use shared_models::error::AppError;

pub const DOCTORS_TABLE: &str = "doctors";
pub const SERVICES_TABLE: &str = "services";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub experience: i32,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A medical service offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Query parameters of GET /doctors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub search: Option<String>,
    pub specialty: Option<String>,
}

/// Normalised doctor filters. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilters {
    pub name_contains: Option<String>,
    pub specialty: Option<String>,
}

impl From<DoctorSearchQuery> for DoctorFilters {
    fn from(query: DoctorSearchQuery) -> Self {
        Self {
            name_contains: non_blank(query.search),
            specialty: non_blank(query.specialty),
        }
    }
}

impl DoctorFilters {
    /// Name clause first, then specialty; both are ANDed by PostgREST.
    pub fn to_query(&self) -> RestQuery {
        let mut query = RestQuery::new().select("*");
        if let Some(term) = &self.name_contains {
            query = query.ilike("name", term);
        }
        if let Some(specialty) = &self.specialty {
            query = query.eq("specialty", specialty);
        }
        query
    }

    /// In-process check of the same predicates the store applies.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        let name_ok = self
            .name_contains
            .as_ref()
            .map(|term| doctor.name.to_lowercase().contains(&term.to_lowercase()))
            .unwrap_or(true);
        let specialty_ok = self
            .specialty
            .as_ref()
            .map(|specialty| &doctor.specialty == specialty)
            .unwrap_or(true);
        name_ok && specialty_ok
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::Database(e) => AppError::from_store(e),
        }
    }
}
