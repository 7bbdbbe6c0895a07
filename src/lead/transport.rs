use gloo_net::http::Request;
use thiserror::Error;

use super::LeadRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
}

/// Sends a lead to a remote form endpoint.
pub trait LeadTransport {
    async fn submit(&self, endpoint: &str, lead: &LeadRequest) -> Result<(), DeliveryError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

/// JSON `POST` of `lead` to `endpoint`, ready to send.
pub fn build_request(endpoint: &str, lead: &LeadRequest) -> Result<Request, DeliveryError> {
    Request::post(endpoint)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(lead)
        .map_err(|e| DeliveryError::Request(e.to_string()))
}

impl LeadTransport for HttpTransport {
    async fn submit(&self, endpoint: &str, lead: &LeadRequest) -> Result<(), DeliveryError> {
        let response = build_request(endpoint, lead)?
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(DeliveryError::Status(response.status()))
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_net::http::Method;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn lead() -> LeadRequest {
        LeadRequest {
            service: "Office cleaning".to_string(),
            frequency: "Weekly".to_string(),
            area_size: "(optional)".to_string(),
            start_date: "(via contact form)".to_string(),
            notes: "(no notes)".to_string(),
            contact_name: "B. Kunde".to_string(),
            contact_phone: "0391 1234".to_string(),
            contact_email: "b@kunde.de".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn request_is_a_json_post() {
        let request = build_request("https://forms.example/f/lead", &lead()).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url(), "https://forms.example/f/lead");
        let headers = request.headers();
        assert_eq!(headers.get("Content-Type").as_deref(), Some("application/json"));
        assert_eq!(headers.get("Accept").as_deref(), Some("application/json"));
    }

    #[wasm_bindgen_test]
    async fn request_body_is_the_camel_case_lead() {
        let request = build_request("https://forms.example/f/lead", &lead()).unwrap();
        let body = request.text().await.unwrap();

        assert!(body.contains(r#""startDate":"(via contact form)""#));
        assert!(body.contains(r#""contactName":"B. Kunde""#));
    }
}
