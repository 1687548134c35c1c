//! Outbound contact links for a selected lead.
//!
//! Escaping is deliberately narrow and matches the links already in use:
//! the WhatsApp text only turns spaces into `%20`, and the Maps query only
//! turns spaces into `+` and drops commas. Other reserved characters such as
//! `&`, `#` or `?` pass through unencoded, so a company name or address
//! containing them produces a truncated or malformed link.

use super::domain::Lead;
use serde::Serialize;

const WHATSAPP_BASE: &str = "https://wa.me/";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadLinks {
    pub whatsapp_link: Option<String>,
    pub maps_link: String,
}

pub fn build_links(lead: &Lead, pitch: &str) -> LeadLinks {
    LeadLinks {
        whatsapp_link: lead
            .phone_normalized
            .as_deref()
            .map(|phone| whatsapp_link(phone, pitch)),
        maps_link: maps_link(&lead.full_address),
    }
}

pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE}{phone}?text={}", text.replace(' ', "%20"))
}

pub fn maps_link(address: &str) -> String {
    let query = address.replace(' ', "+").replace(',', "");
    format!("{MAPS_SEARCH_BASE}{query}")
}
