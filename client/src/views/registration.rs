use crate::api::ApiClient;
use crate::error::ClientError;
use crate::types::{Acknowledgement, EventRow, RegistrationRequest};

/// Fetches the events and renders the `<option>`s of the event selector.
pub async fn load_event_options(client: &ApiClient) -> Result<String, ClientError> {
    let events = client.list_events().await?;
    Ok(render_event_options(&events))
}

pub fn render_event_options(events: &[EventRow]) -> String {
    let mut html = String::from(r#"<option value="">Choose an event...</option>"#);
    for event in events {
        html.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            event.event_id, event.title
        ));
    }
    html
}

/// Values of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub event_id: Option<i64>,
    pub student_id: Option<i64>,
    pub student_name: String,
    pub student_email: String,
}

impl RegistrationForm {
    pub fn to_request(&self) -> Result<RegistrationRequest, ClientError> {
        let event_id = self
            .event_id
            .ok_or(ClientError::IncompleteForm("Choose an event"))?;
        let student_id = self
            .student_id
            .ok_or(ClientError::IncompleteForm("Student ID is required"))?;

        Ok(RegistrationRequest {
            event_id,
            student_id,
            student_name: self.student_name.clone(),
            student_email: self.student_email.clone(),
        })
    }

    /// Submits the form and clears it when the API accepts the
    /// registration. Nothing else is refreshed.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<Acknowledgement, ClientError> {
        let request = self.to_request()?;
        let ack = client.register(&request).await?;

        if ack.success {
            *self = Self::default();
        }
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::events::tests::event;

    #[test]
    fn test_options_start_with_placeholder() {
        let html = render_event_options(&[event(1, "RustConf Campus"), event(2, "Hack Night")]);

        assert!(html.starts_with(r#"<option value="">Choose an event...</option>"#));
        assert!(html.contains(r#"<option value="2">Hack Night</option>"#));
    }

    #[test]
    fn test_form_requires_event() {
        let form = RegistrationForm {
            event_id: None,
            student_id: Some(42),
            student_name: "Ada".to_string(),
            student_email: "ada@x.com".to_string(),
        };

        assert!(matches!(
            form.to_request(),
            Err(ClientError::IncompleteForm(_))
        ));
    }

    #[test]
    fn test_complete_form_builds_request() {
        let form = RegistrationForm {
            event_id: Some(1),
            student_id: Some(42),
            student_name: "Ada".to_string(),
            student_email: "ada@x.com".to_string(),
        };

        let request = form.to_request().unwrap();
        assert_eq!(request.event_id, 1);
        assert_eq!(request.student_name, "Ada");
    }
}
