//! Contact details of the studio.

use serde::{Deserialize, Serialize};

/// A link to one of the studio's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Studio-wide constants consumed by the order composer and the contact
/// surfaces (contact page, footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    pub name: String,
    /// Number used in `https://wa.me/<number>` when handing off an order.
    pub order_whatsapp_number: String,
    pub phone_display: String,
    pub phone_dial: String,
    pub email: String,
    /// WhatsApp catalog with sample work.
    pub catalog_url: String,
    pub chat_url: String,
    /// Registration form behind the home page promotion.
    pub promo_form_url: String,
    pub socials: Vec<SocialLink>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "Chalz Art".to_string(),
            order_whatsapp_number: "9176425811".to_string(),
            phone_display: "+91 9176425811".to_string(),
            phone_dial: "+919176425811".to_string(),
            email: "thechalzart@gmail.com".to_string(),
            catalog_url: "https://wa.me/c/919176425811".to_string(),
            chat_url: "https://wa.me/919176425811".to_string(),
            promo_form_url: "https://docs.google.com/forms/d/e/1FAIpQLSdMIwpn-dDLV7gFdx37V8jv59ChZkLil0ot1W0ikCRc19HxvQ/viewform?usp=header".to_string(),
            socials: vec![
                social("Facebook", "https://www.facebook.com/share/1LAPsZ2U25/"),
                social(
                    "Instagram",
                    "https://www.instagram.com/chalzart?igsh=MTdhaWliZnFmYng3Mg==",
                ),
                social("Twitter", "https://twitter.com"),
                social("YouTube", "https://youtube.com/@chalzart?si=Ai52HlwzsftDoGH4"),
            ],
        }
    }
}

fn social(label: &str, url: &str) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

impl StudioConfig {
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
