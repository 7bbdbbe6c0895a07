use log::{info, warn};

use super::composer::{compose_message, subject};
use super::{LeadRequest, LeadTransport};
use crate::config::SiteConfig;
use crate::links;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your request has been sent. We will get back to you shortly.";

/// Browser side effects the dispatcher needs.
#[cfg_attr(test, mockall::automock)]
pub trait DispatchSurface {
    fn notify_success(&self, message: &str);
    fn navigate(&self, target: &str);
    fn reset_form(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    FallbackDispatched,
}

/// `mailto:` target carrying the lead's subject and rendered message.
pub fn fallback_target(config: &SiteConfig, lead: &LeadRequest) -> String {
    links::mailto(&config.email, &subject(lead), Some(&compose_message(lead)))
}

/// Delivers the lead remotely when an endpoint is configured. Any failure,
/// and a missing endpoint, ends in the mail fallback.
pub async fn dispatch<T, S>(
    config: &SiteConfig,
    transport: &T,
    surface: &S,
    lead: &LeadRequest,
) -> DispatchOutcome
where
    T: LeadTransport,
    S: DispatchSurface,
{
    if let Some(endpoint) = config.form_endpoint.as_deref().filter(|e| !e.is_empty()) {
        match transport.submit(endpoint, lead).await {
            Ok(()) => {
                info!("Lead delivered to form endpoint");
                surface.notify_success(SUCCESS_MESSAGE);
                surface.reset_form();
                return DispatchOutcome::Delivered;
            }
            Err(e) => {
                warn!("Form endpoint failed, using mail fallback: {}", e);
            }
        }
    }

    info!("Opening mail client for lead");
    surface.navigate(&fallback_target(config, lead));
    surface.reset_form();
    DispatchOutcome::FallbackDispatched
}
