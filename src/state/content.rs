//! Course details shown on the page and the outbound links built from them

use crate::config::CourseConfig;
use anyhow::Result;
use reqwest::Url;

const DEFAULT_PHONE: &str = "+34657683223";
const DEFAULT_PHONE_DISPLAY: &str = "657 683 223";
const DEFAULT_WHATSAPP: &str = "34657683223";
const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hola, me gustaría recibir información sobre el curso gratuito para padres y educadores.";

const MAP_EMBED_BASE: &str = "https://www.google.com/maps";
const WHATSAPP_BASE: &str = "https://wa.me/";

/// Static facts about the course plus the contact data of this edition
#[derive(Debug, Clone)]
pub struct CourseDetails {
    pub title: &'static str,
    pub badge: &'static str,
    pub instructor: &'static str,
    pub instructor_initials: &'static str,
    pub instructor_bio: &'static str,
    pub day: &'static str,
    pub schedule: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    /// Query string the embedded map is keyed by
    pub map_query: &'static str,
    pub phone: String,
    pub phone_display: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
}

impl Default for CourseDetails {
    fn default() -> Self {
        Self {
            title: "Curso para Padres y Educadores",
            badge: "CW",
            instructor: "Zhinuzh Watson",
            instructor_initials: "ZW",
            instructor_bio: "Experta en temas educativos y formadora de familias y docentes.",
            day: "Todos los martes",
            schedule: "12:30 – 13:45",
            venue: "Centro Cívico de Parquesol",
            city: "Valladolid",
            map_query: "Centro Cívico Parquesol, Valladolid",
            phone: DEFAULT_PHONE.to_string(),
            phone_display: DEFAULT_PHONE_DISPLAY.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP.to_string(),
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
        }
    }
}

impl CourseDetails {
    pub fn from_config(config: &CourseConfig) -> Self {
        let defaults = Self::default();
        Self {
            phone: config.contact_phone.clone().unwrap_or(defaults.phone),
            phone_display: config
                .contact_phone_display
                .clone()
                .unwrap_or(defaults.phone_display),
            whatsapp_number: config
                .whatsapp_number
                .clone()
                .unwrap_or(defaults.whatsapp_number),
            whatsapp_message: config
                .whatsapp_message
                .clone()
                .unwrap_or(defaults.whatsapp_message),
            ..defaults
        }
    }

    /// Telephone deep link
    pub fn tel_link(&self) -> String {
        let number: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{number}")
    }

    /// Messaging deep link carrying the pre-composed message
    pub fn whatsapp_link(&self) -> Result<Url> {
        let base = Url::parse(WHATSAPP_BASE)?.join(&self.whatsapp_number)?;
        Ok(Url::parse_with_params(
            base.as_str(),
            &[("text", self.whatsapp_message.as_str())],
        )?)
    }

    /// Embedded map view for the venue
    pub fn map_embed_url(&self) -> Result<Url> {
        Ok(Url::parse_with_params(
            MAP_EMBED_BASE,
            &[("q", self.map_query), ("output", "embed")],
        )?)
    }
}
