//! Booking records.

use crate::model;

/// An appointment with one or more team members at a location.
#[model]
pub struct Booking {
    pub id: Option<String>,
    pub version: Option<i32>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub start_at: Option<String>,
    pub location_id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_note: Option<String>,
    /// Visible only to the seller.
    pub seller_note: Option<String>,
    pub appointment_segments: Option<Vec<AppointmentSegment>>,
}

/// One service performed by one team member within a [`Booking`].
#[model]
pub struct AppointmentSegment {
    pub duration_minutes: i32,
    pub service_variation_id: String,
    pub team_member_id: String,
    pub service_variation_version: i64,
}
