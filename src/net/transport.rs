use gloo_net::http::Request;
use log::{error, info, warn};
use web_sys::FormData;

use crate::error::PageError;
use crate::state::form::ContactForm;
use crate::state::submission::Delivery;

/// Something that can post the contact form and report the HTTP status it got back.
pub trait FormTransport {
    async fn post(&self, fields: &[(&'static str, String)]) -> Result<u16, PageError>;
}

/// Posts the form as multipart data to a Formspree-style endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FormspreeTransport {
    endpoint: String,
}

impl FormspreeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl FormTransport for FormspreeTransport {
    async fn post(&self, fields: &[(&'static str, String)]) -> Result<u16, PageError> {
        let body = FormData::new()?;
        for (name, value) in fields {
            body.append_with_str(name, value)?;
        }

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(response.status())
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Sends the form and folds every outcome, including transport errors, into a `Delivery`.
pub async fn deliver<T: FormTransport>(transport: &T, form: &ContactForm) -> Delivery {
    match transport.post(&form.fields()).await {
        Ok(status) if is_success(status) => {
            info!("Contact form accepted with status {}", status);
            Delivery::Accepted(status)
        }
        Ok(status) => {
            warn!("Contact form rejected with status {}", status);
            Delivery::Rejected(status)
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            Delivery::Failed(e.to_string())
        }
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use log::Level;

    use super::mock::MockTransport;
    use super::*;
    use crate::test_support::logs;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ciara".into(),
            email: "ciara@example.ie".into(),
            phone: "0871234567".into(),
            message: "Garden fence, about 20m.".into(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(500));
    }

    #[test]
    fn posts_every_field() {
        let transport = MockTransport::status(200);
        assert_eq!(block_on(deliver(&transport, &form())), Delivery::Accepted(200));
        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        let names: Vec<&str> = requests[0].iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["name", "email", "phone", "message"]);
    }

    #[test]
    fn non_2xx_is_rejected() {
        let transport = MockTransport::status(500);
        assert_eq!(block_on(deliver(&transport, &form())), Delivery::Rejected(500));
    }

    #[test]
    fn transport_failure_is_logged_once_and_absorbed() {
        logs::install();
        let transport = MockTransport::failing("dns lookup failed for deliver-test");
        let delivery = block_on(deliver(&transport, &form()));
        assert!(matches!(delivery, Delivery::Failed(ref detail) if detail.contains("dns lookup failed")));
        assert_eq!(logs::count(Level::Error, "dns lookup failed for deliver-test"), 1);
    }
}
