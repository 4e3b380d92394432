// libs/appointment-cell/src/services/booking.rs
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{RestQuery, SupabaseClient};

use crate::models::{
    Appointment, AppointmentError, AppointmentFilters, BookAppointmentRequest, StatusChange,
    APPOINTMENTS_TABLE,
};
use crate::services::lifecycle::AppointmentLifecycleService;

pub struct AppointmentBookingService {
    supabase: SupabaseClient,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new(supabase: &SupabaseClient) -> Self {
        Self {
            supabase: supabase.clone(),
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Book an appointment. The id and timestamps are assigned here and the
    /// status is always the initial one.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        request.validate()?;
        debug!("Booking appointment with doctor {} for {}", request.doctor_id, request.patient_name);

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            doctor_id: request.doctor_id.trim().to_string(),
            patient_name: request.patient_name.trim().to_string(),
            date: request.date.trim().to_string(),
            time: request.time.trim().to_string(),
            status: self.lifecycle.initial_status(),
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        let mut created: Vec<Appointment> = self.supabase.insert(APPOINTMENTS_TABLE, &appointment).await?;
        if created.is_empty() {
            return Err(anyhow::anyhow!("Failed to create appointment").into());
        }

        let appointment = created.swap_remove(0);
        info!("Appointment {} booked", appointment.id);
        Ok(appointment)
    }

    pub async fn list_appointments(
        &self,
        filters: &AppointmentFilters,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Listing appointments with filters: {:?}", filters);

        let appointments = self
            .supabase
            .select(APPOINTMENTS_TABLE, &filters.to_query())
            .await?;
        Ok(appointments)
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment {}", appointment_id);

        let query = RestQuery::new().select("*").eq("id", appointment_id);
        let appointments: Vec<Appointment> = self.supabase.select(APPOINTMENTS_TABLE, &query).await?;

        appointments.into_iter().next().ok_or(AppointmentError::NotFound)
    }

    /// Validate, read, then write the new status. The read and the write are
    /// separate requests; a concurrent update to the same row can be lost.
    pub async fn update_status(
        &self,
        appointment_id: &str,
        requested_status: &str,
    ) -> Result<Appointment, AppointmentError> {
        let status = self.lifecycle.parse_requested_status(requested_status)?;

        let current = self.get_appointment(appointment_id).await?;
        debug!("Changing appointment {} status {} -> {}", current.id, current.status, status);

        let change = StatusChange {
            status,
            updated_at: Utc::now(),
        };
        let query = RestQuery::new().eq("id", &current.id);
        let updated: Vec<Appointment> = self.supabase.update(APPOINTMENTS_TABLE, &query, &change).await?;

        let appointment = updated.into_iter().next().ok_or(AppointmentError::NotFound)?;
        info!("Appointment {} is now {}", appointment.id, appointment.status);
        Ok(appointment)
    }
}
