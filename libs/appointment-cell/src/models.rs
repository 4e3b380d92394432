// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shared_database::RestQuery;
use shared_models::error::AppError;

pub const APPOINTMENTS_TABLE: &str = "appointments";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase literals are accepted.
impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppointmentError::InvalidStatus(s.to_string()))
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Body of POST /appointments. Any client-supplied `status` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookAppointmentRequest {
    pub fn validate(&self) -> Result<(), AppointmentError> {
        for (field, value) in [
            ("doctor_id", &self.doctor_id),
            ("patient_name", &self.patient_name),
            ("date", &self.date),
            ("time", &self.time),
        ] {
            if value.trim().is_empty() {
                return Err(AppointmentError::ValidationError(format!("{} is required", field)));
            }
        }

        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(AppointmentError::ValidationError(
                "date must be formatted as YYYY-MM-DD".to_string(),
            ));
        }

        let time = self.time.trim();
        if NaiveTime::parse_from_str(time, "%H:%M").is_err()
            && NaiveTime::parse_from_str(time, "%H:%M:%S").is_err()
        {
            return Err(AppointmentError::ValidationError(
                "time must be formatted as HH:MM".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// Query parameters of GET /appointments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentSearchQuery {
    #[serde(rename = "doctorId", alias = "doctor_id")]
    pub doctor_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilters {
    pub doctor_id: Option<String>,
    pub date: Option<String>,
}

impl From<AppointmentSearchQuery> for AppointmentFilters {
    fn from(query: AppointmentSearchQuery) -> Self {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            doctor_id: non_blank(query.doctor_id),
            date: non_blank(query.date),
        }
    }
}

impl AppointmentFilters {
    pub fn to_query(&self) -> RestQuery {
        let mut query = RestQuery::new().select("*");
        if let Some(doctor_id) = &self.doctor_id {
            query = query.eq("doctor_id", doctor_id);
        }
        if let Some(date) = &self.date {
            query = query.eq("date", date);
        }
        query
    }
}

/// Row written when only the status changes.
#[derive(Debug, Clone, Serialize)]
pub struct StatusChange {
    pub status: AppointmentStatus,
    pub updated_at: DateTime<Utc>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid status")]
    InvalidStatus(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] anyhow::Error),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::InvalidStatus(_) => AppError::BadRequest(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::BadRequest(msg),
            AppointmentError::DatabaseError(e) => AppError::from_store(e),
        }
    }
}
