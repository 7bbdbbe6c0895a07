use std::rc::Rc;

use log::warn;
use yew::prelude::*;

/// Business contact data and delivery settings, built once in `main` and
/// handed to components through a `ContextProvider`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub business_name: String,
    pub phone_display: String,
    /// Phone number as used in `tel:` links.
    pub phone_tel: String,
    pub email: String,
    /// International number without the leading `+`, as `wa.me` expects it.
    pub whatsapp_number: String,
    /// Remote lead endpoint. `None` means every submission goes to the mail fallback.
    pub form_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "PrimaClean".to_string(),
            phone_display: "+49 391 000 000 0".to_string(),
            phone_tel: "+493910000000".to_string(),
            email: "info@primaclean-magdeburg.de".to_string(),
            whatsapp_number: "493910000000".to_string(),
            form_endpoint: None,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by whatever `PRIMACLEAN_*` variables were set at build time.
    pub fn load() -> Self {
        Self::from_overrides(|key| match key {
            "PRIMACLEAN_FORM_ENDPOINT" => option_env!("PRIMACLEAN_FORM_ENDPOINT"),
            "PRIMACLEAN_EMAIL" => option_env!("PRIMACLEAN_EMAIL"),
            "PRIMACLEAN_PHONE_DISPLAY" => option_env!("PRIMACLEAN_PHONE_DISPLAY"),
            "PRIMACLEAN_PHONE_TEL" => option_env!("PRIMACLEAN_PHONE_TEL"),
            "PRIMACLEAN_WHATSAPP" => option_env!("PRIMACLEAN_WHATSAPP"),
            _ => None,
        })
    }

    fn from_overrides<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        config.form_endpoint = non_empty("PRIMACLEAN_FORM_ENDPOINT");
        if let Some(email) = non_empty("PRIMACLEAN_EMAIL") {
            config.email = email;
        }
        if let Some(phone) = non_empty("PRIMACLEAN_PHONE_DISPLAY") {
            config.phone_display = phone;
        }
        if let Some(phone) = non_empty("PRIMACLEAN_PHONE_TEL") {
            config.phone_tel = phone;
        }
        if let Some(number) = non_empty("PRIMACLEAN_WHATSAPP") {
            config.whatsapp_number = number.trim_start_matches('+').to_string();
        }
        config
    }

    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }
}

/// The `SiteConfig` provided by `App`.
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    config_or_default(use_context::<Rc<SiteConfig>>())
}

fn config_or_default(provided: Option<Rc<SiteConfig>>) -> Rc<SiteConfig> {
    provided.unwrap_or_else(|| {
        warn!("No SiteConfig provided, rendering with the default contact data");
        Rc::new(SiteConfig::default())
    })
}

#[cfg(debug_assertions)]
pub fn describe_delivery(config: &SiteConfig) -> String {
    match &config.form_endpoint {
        Some(endpoint) => format!("leads go to {}", endpoint),
        None => format!("no form endpoint, leads open a mail to {}", config.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_endpoint() {
        let config = SiteConfig::from_overrides(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert!(config.form_endpoint.is_none());
    }

    #[test]
    fn blank_endpoint_counts_as_unset() {
        let config = SiteConfig::from_overrides(|key| match key {
            "PRIMACLEAN_FORM_ENDPOINT" => Some("   "),
            _ => None,
        });
        assert!(config.form_endpoint.is_none());
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = SiteConfig::from_overrides(|key| match key {
            "PRIMACLEAN_FORM_ENDPOINT" => Some("https://forms.example/f/abc"),
            "PRIMACLEAN_EMAIL" => Some("hello@example.org"),
            "PRIMACLEAN_WHATSAPP" => Some("+4915100000"),
            _ => None,
        });
        assert_eq!(config.form_endpoint.as_deref(), Some("https://forms.example/f/abc"));
        assert_eq!(config.email, "hello@example.org");
        assert_eq!(config.whatsapp_number, "4915100000");
        assert_eq!(config.phone_tel, "+493910000000");
    }

    #[test]
    fn provided_config_is_used_as_is() {
        let provided = SiteConfig {
            email: "hello@example.org".to_string(),
            ..SiteConfig::default()
        }
        .into_shared();
        let used = config_or_default(Some(provided.clone()));
        assert!(Rc::ptr_eq(&used, &provided));
    }

    #[test]
    fn missing_provider_falls_back_to_defaults() {
        assert_eq!(*config_or_default(None), SiteConfig::default());
    }
}
