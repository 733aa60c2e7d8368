use serde::Serialize;

/// One item of a reply or broadcast payload, in the platform's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text {
        text: String,
    },
    Location {
        title: String,
        address: String,
        latitude: f64,
        longitude: f64,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn location(title: impl Into<String>, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::Location {
            title: title.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }
}
