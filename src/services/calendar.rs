/// Google Calendar client driven by service-account credentials.
///
/// Event creation is not wired up yet; the booking handler only calls this
/// when both credentials are configured and a schedule was composed, and it
/// treats any failure as non-fatal.
pub struct GoogleCalendar {
    service_account_email: String,
    private_key: String,
}

impl GoogleCalendar {
    pub fn new(service_account_email: String, private_key: String) -> Self {
        Self {
            service_account_email,
            private_key,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.service_account_email.is_empty() && !self.private_key.is_empty()
    }

    /// Returns the created event id.
    ///
    /// TODO: exchange the service-account key for an OAuth token and call the
    /// Calendar API; until then this always fails and the caller swallows it.
    pub async fn create_event(&self, summary: &str, start: &str) -> anyhow::Result<String> {
        tracing::info!(
            account = %self.service_account_email,
            summary,
            start,
            "calendar credentials found, creating event"
        );
        anyhow::bail!("Google Calendar integration not implemented")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_credentials_requires_both() {
        assert!(!GoogleCalendar::new(String::new(), String::new()).has_credentials());
        assert!(!GoogleCalendar::new("svc@example.iam".into(), String::new()).has_credentials());
        assert!(!GoogleCalendar::new(String::new(), "key".into()).has_credentials());
        assert!(GoogleCalendar::new("svc@example.iam".into(), "key".into()).has_credentials());
    }

    #[tokio::test]
    async fn test_create_event_is_a_stub() {
        let cal = GoogleCalendar::new("svc@example.iam".into(), "key".into());
        let err = cal
            .create_event("Walk for Rex", "2025-07-01T10:30:00")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not implemented"));
    }
}
