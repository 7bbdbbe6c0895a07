use urlencoding::encode;

use crate::config::SiteConfig;

pub const QUICK_CONTACT_GREETING: &str = "Hello PrimaClean, I would like to request a cleaning.";
pub const GENERAL_MAIL_SUBJECT: &str = "Cleaning request – PrimaClean";

pub fn mailto(address: &str, subject: &str, body: Option<&str>) -> String {
    let mut link = format!("mailto:{}?subject={}", address, encode(subject));
    if let Some(body) = body {
        link.push_str("&body=");
        link.push_str(&encode(body));
    }
    link
}

pub fn tel(config: &SiteConfig) -> String {
    format!("tel:{}", config.phone_tel)
}

/// WhatsApp chat link with the fixed greeting pre-filled.
pub fn whatsapp(config: &SiteConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_number,
        encode(QUICK_CONTACT_GREETING)
    )
}

pub fn general_mail(config: &SiteConfig) -> String {
    mailto(&config.email, GENERAL_MAIL_SUBJECT, None)
}
