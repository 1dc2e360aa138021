use async_trait::async_trait;
use chrono::Local;
use serde_json::json;

use super::{NotificationError, Notifier};
use crate::{config::EmailConfig, data_connector::Inquiry};

const API_BASE: &str = "https://api.resend.com";
const FROM: &str = "Bright Loop Media <enquiries@brightloop.co.uk>";
const TO: &str = "chris@brightloop.co.uk";

/// Sends one notification email per inquiry to the operations address.
pub struct EmailNotifier {
    client: reqwest::Client,
    config: EmailConfig,
    api_base: String,
}

impl EmailNotifier {
    pub fn new(client: reqwest::Client, config: EmailConfig) -> Self {
        Self {
            client,
            config,
            api_base: API_BASE.to_string(),
        }
    }

    /// Point the notifier at an alternative endpoint, used by tests.
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }
}

fn subject(inquiry: &Inquiry) -> String {
    format!("New Enquiry from {} - {}", inquiry.name, inquiry.service)
}

fn body_text(inquiry: &Inquiry, date: &str) -> String {
    format!(
        "New Enquiry Details:\n\
         --------------------\n\
         Date: {}\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Postcode: {}\n\
         Service Interest: {}\n\
         \n\
         Message:\n\
         {}",
        date,
        inquiry.name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        inquiry.postcode.as_deref().unwrap_or("Not provided"),
        inquiry.service,
        inquiry.message,
    )
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn notify(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        let date = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
        let body = json!({
            "from": FROM,
            "to": TO,
            "subject": subject(inquiry),
            "text": body_text(inquiry, &date),
        });

        let response = self
            .client
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(NotificationError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_connector::NewInquiry;
    use chrono::Utc;

    fn sample_inquiry(phone: Option<&str>, postcode: Option<&str>) -> Inquiry {
        Inquiry::from_parts(
            3,
            Utc::now(),
            NewInquiry {
                name: "Jane Smith".to_string(),
                email: "jane@example.co.uk".to_string(),
                phone: phone.map(str::to_string),
                postcode: postcode.map(str::to_string),
                service: "booking".to_string(),
                message: "We take bookings by phone only at the moment.".to_string(),
            },
        )
    }

    #[test]
    fn subject_carries_name_and_service() {
        let inquiry = sample_inquiry(None, None);
        assert_eq!(subject(&inquiry), "New Enquiry from Jane Smith - booking");
    }

    #[test]
    fn body_contains_all_fields() {
        let inquiry = sample_inquiry(Some("0151 000 000"), Some("CH41 5EU"));
        let body = body_text(&inquiry, "01/02/2026 09:30:00");
        assert!(body.starts_with("New Enquiry Details:"));
        assert!(body.contains("Date: 01/02/2026 09:30:00"));
        assert!(body.contains("Name: Jane Smith"));
        assert!(body.contains("Email: jane@example.co.uk"));
        assert!(body.contains("Phone: 0151 000 000"));
        assert!(body.contains("Postcode: CH41 5EU"));
        assert!(body.contains("Service Interest: booking"));
        assert!(body.ends_with("Message:\nWe take bookings by phone only at the moment."));
    }

    #[test]
    fn absent_optionals_use_placeholder() {
        let inquiry = sample_inquiry(None, None);
        let body = body_text(&inquiry, "01/02/2026 09:30:00");
        assert!(body.contains("Phone: Not provided"));
        assert!(body.contains("Postcode: Not provided"));
    }
}
