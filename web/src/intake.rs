//! Server side of the booking and contact forms: re-validates what the
//! browser sent, stamps a reference and hands the request on.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared_types::{BookingSubmission, ContactSubmission, IntakeReply, Rejection};
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

use crate::config::SiteConfig;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook answered with status {0}")]
    Status(u16),
    #[error("failed to encode intake request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IntakeRequest {
    Booking(BookingSubmission),
    Contact(ContactSubmission),
}

impl IntakeRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            IntakeRequest::Booking(_) => "booking",
            IntakeRequest::Contact(_) => "contact",
        }
    }
}

/// What gets forwarded for an accepted request.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeRecord {
    pub reference: String,
    pub kind: &'static str,
    pub received_at: chrono::DateTime<Utc>,
    pub request: IntakeRequest,
}

/// Destination for accepted requests.
#[derive(Debug, Clone)]
pub enum IntakeForwarder {
    /// Record the request in the server log only.
    Log,
    Webhook { client: reqwest::Client, url: String },
}

impl IntakeForwarder {
    pub fn from_config(config: &SiteConfig) -> Result<Self, IntakeError> {
        match &config.intake_webhook {
            None => Ok(IntakeForwarder::Log),
            Some(url) => {
                let client = reqwest::Client::builder()
                    .timeout(config.intake_timeout)
                    .build()
                    .map_err(IntakeError::Client)?;
                Ok(IntakeForwarder::Webhook {
                    client,
                    url: url.clone(),
                })
            }
        }
    }

    pub async fn forward(&self, record: &IntakeRecord) -> Result<(), IntakeError> {
        match self {
            IntakeForwarder::Log => {
                let payload = serde_json::to_string(&record.request)?;
                tracing::info!(
                    reference = %record.reference,
                    kind = record.kind,
                    %payload,
                    "intake request recorded"
                );
                Ok(())
            }
            IntakeForwarder::Webhook { client, url } => {
                let response = client.post(url).json(record).send().await?;
                let status = response.status();
                if status.is_success() {
                    tracing::debug!(reference = %record.reference, %url, "intake request forwarded");
                    Ok(())
                } else {
                    Err(IntakeError::Status(status.as_u16()))
                }
            }
        }
    }
}

static INTAKE: OnceLock<IntakeForwarder> = OnceLock::new();

pub fn init_intake(config: &SiteConfig) -> Result<(), IntakeError> {
    let forwarder = IntakeForwarder::from_config(config)?;
    match &forwarder {
        IntakeForwarder::Log => tracing::info!("intake requests will be logged only"),
        IntakeForwarder::Webhook { url, .. } => {
            tracing::info!(%url, "intake requests will be forwarded")
        }
    }
    if INTAKE.set(forwarder).is_err() {
        tracing::warn!("intake forwarder already initialized; keeping the first one");
    }
    Ok(())
}

pub fn get_intake() -> &'static IntakeForwarder {
    INTAKE.get_or_init(|| IntakeForwarder::Log)
}

async fn accept(forwarder: &IntakeForwarder, request: IntakeRequest) -> IntakeReply {
    let record = IntakeRecord {
        reference: Uuid::now_v7().to_string(),
        kind: request.kind(),
        received_at: Utc::now(),
        request,
    };

    match forwarder.forward(&record).await {
        Ok(()) => IntakeReply::Accepted {
            reference: record.reference,
        },
        Err(e) => {
            tracing::error!(reference = %record.reference, error = %e, "failed to forward intake request");
            IntakeReply::Rejected(Rejection::service_unavailable(
                "We couldn't send your request right now. Please try again in a few minutes.",
            ))
        }
    }
}

pub async fn accept_booking(
    forwarder: &IntakeForwarder,
    submission: BookingSubmission,
    today: NaiveDate,
) -> IntakeReply {
    let submission = submission.normalized();
    let errors = submission.validate(today);
    if !errors.is_empty() {
        tracing::warn!(?errors, "booking request rejected");
        return IntakeReply::Rejected(Rejection::from_field_errors(errors));
    }

    tracing::info!(
        service = submission.service.as_str(),
        artist = submission.artist.as_str(),
        date = %submission.preferred_date,
        slot = %submission.preferred_time,
        images = submission.reference_images.len(),
        "booking request received"
    );
    accept(forwarder, IntakeRequest::Booking(submission)).await
}

pub async fn accept_contact(forwarder: &IntakeForwarder, submission: ContactSubmission) -> IntakeReply {
    let errors = submission.validate();
    if !errors.is_empty() {
        tracing::warn!(?errors, "contact inquiry rejected");
        return IntakeReply::Rejected(Rejection::from_field_errors(errors));
    }

    tracing::info!(inquiry_type = ?submission.inquiry_type, "contact inquiry received");
    accept(forwarder, IntakeRequest::Contact(submission)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_types::catalog::{ArtistId, InquiryType, ServiceId, TimeSlot};
    use shared_types::{Field, RejectionReason};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn booking() -> BookingSubmission {
        BookingSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            is_first_tattoo: true,
            has_allergies: false,
            allergy_details: None,
            artist: ArtistId::Any,
            service: ServiceId::Medium,
            preferred_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            preferred_time: TimeSlot::TwoPm,
            description: "Pine branch".to_string(),
            reference_images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn valid_booking_gets_a_reference() {
        let reply = accept_booking(&IntakeForwarder::Log, booking(), today()).await;
        assert_matches!(reply, IntakeReply::Accepted { reference } if Uuid::parse_str(&reference).is_ok());
    }

    #[tokio::test]
    async fn closed_slot_is_reported_as_unavailable() {
        let mut submission = booking();
        submission.preferred_time = TimeSlot::NineAm;
        let reply = accept_booking(&IntakeForwarder::Log, submission, today()).await;
        assert_matches!(
            reply,
            IntakeReply::Rejected(r) if r.reason == RejectionReason::SlotUnavailable
        );
    }

    #[tokio::test]
    async fn past_booking_is_a_validation_rejection() {
        let mut submission = booking();
        submission.preferred_date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let reply = accept_booking(&IntakeForwarder::Log, submission, today()).await;
        assert_matches!(
            reply,
            IntakeReply::Rejected(r)
                if r.reason == RejectionReason::Validation
                    && r.field_errors[0].field == Field::PreferredDate
        );
    }

    #[tokio::test]
    async fn contact_inquiry_round_trip() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            inquiry_type: Some(InquiryType::Pricing),
            subject: "Sleeve quote".to_string(),
            message: "Roughly how much for a half sleeve?".to_string(),
        };
        let reply = accept_contact(&IntakeForwarder::Log, submission.clone()).await;
        assert_matches!(reply, IntakeReply::Accepted { .. });

        let reply = accept_contact(
            &IntakeForwarder::Log,
            ContactSubmission {
                message: " ".to_string(),
                ..submission
            },
        )
        .await;
        assert_matches!(reply, IntakeReply::Rejected(r) if r.field_errors.len() == 1);
    }

    #[tokio::test]
    async fn unflagged_allergy_details_are_not_forwarded() {
        use axum::{extract::State, routing::post, Json, Router};
        use std::sync::{Arc, Mutex};

        type Received = Arc<Mutex<Vec<serde_json::Value>>>;

        let received: Received = Arc::default();
        let app = Router::new()
            .route(
                "/intake",
                post(|State(received): State<Received>, Json(body): Json<serde_json::Value>| async move {
                    received.lock().unwrap().push(body);
                }),
            )
            .with_state(received.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let config = SiteConfig {
            intake_webhook: Some(format!("http://{addr}/intake")),
            ..SiteConfig::default()
        };
        let forwarder = IntakeForwarder::from_config(&config).unwrap();
        let mut submission = booking();
        submission.allergy_details = Some("Nickel".to_string());

        let reply = accept_booking(&forwarder, submission, today()).await;
        assert_matches!(reply, IntakeReply::Accepted { .. });

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["kind"], "booking");
        assert!(received[0]["request"].get("allergy_details").is_none());
    }

    #[test]
    fn records_carry_the_request_kind() {
        let record = IntakeRecord {
            reference: "ref".to_string(),
            kind: "booking",
            received_at: Utc::now(),
            request: IntakeRequest::Booking(booking()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "booking");
        assert_eq!(json["request"]["service"], "medium");
        assert_eq!(json["reference"], "ref");
    }

    #[tokio::test]
    async fn logged_requests_carry_the_payload() {
        let record = IntakeRecord {
            reference: "ref".to_string(),
            kind: "contact",
            received_at: Utc::now(),
            request: IntakeRequest::Contact(ContactSubmission {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: None,
                inquiry_type: None,
                subject: "Hours".to_string(),
                message: "Open on Sunday?".to_string(),
            }),
        };
        assert_matches!(IntakeForwarder::Log.forward(&record).await, Ok(()));

        let error = IntakeError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_matches!(error, IntakeError::Encode(_));
        assert!(error.to_string().starts_with("failed to encode intake request"));
    }

    #[test]
    fn forwarder_follows_config() {
        let forwarder = IntakeForwarder::from_config(&SiteConfig::default()).unwrap();
        assert_matches!(forwarder, IntakeForwarder::Log);

        let config = SiteConfig {
            intake_webhook: Some("http://127.0.0.1:9/intake".to_string()),
            ..SiteConfig::default()
        };
        assert_matches!(
            IntakeForwarder::from_config(&config),
            Ok(IntakeForwarder::Webhook { .. })
        );
    }
}
