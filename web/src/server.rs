use leptos::prelude::*;
use leptos::server;
use shared_types::{BookingSubmission, ContactSubmission, IntakeReply};

#[cfg(feature = "ssr")]
use crate::intake::{accept_booking, accept_contact, get_intake};

/// Earliest appointment date the server will accept. One day of slack so a
/// visitor whose clock is behind the server's still gets their "today".
#[cfg(feature = "ssr")]
fn booking_date_floor() -> chrono::NaiveDate {
    let today = chrono::Local::now().date_naive();
    today.pred_opt().unwrap_or(today)
}

#[server]
pub async fn submit_booking_request(
    submission: BookingSubmission,
) -> Result<IntakeReply, ServerFnError> {
    Ok(accept_booking(get_intake(), submission, booking_date_floor()).await)
}

#[server]
pub async fn submit_contact_inquiry(
    submission: ContactSubmission,
) -> Result<IntakeReply, ServerFnError> {
    Ok(accept_contact(get_intake(), submission).await)
}

#[server]
pub async fn log_client_error(
    component: String,
    message: String,
    detail: Option<String>,
    url: Option<String>,
) -> Result<(), ServerFnError> {
    if message.len() > 2_000 {
        return Err(ServerFnError::new("Error message too long".to_string()));
    }

    tracing::warn!(
        %component,
        %message,
        detail = detail.as_deref().unwrap_or(""),
        url = url.as_deref().unwrap_or(""),
        "client reported an error"
    );
    Ok(())
}
