//! Content entries

use serde::{Deserialize, Serialize};

/// Marker prepended to titles served in preview mode.
pub const PREVIEW_PREFIX: &str = "[PREVIEW] ";

fn default_content_type() -> String {
    "Entry".to_string()
}

/// A static content record addressable by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: String,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default)]
    pub fields: EntryFields,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: default_content_type(),
            fields: EntryFields::default(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.fields.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    pub fn with_cta(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.fields.cta_text = Some(text.into());
        self.fields.cta_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.fields.image = Some(Asset {
            url: url.into(),
            title: title.into(),
        });
        self
    }

    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.fields.content = Some(content);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.title.as_deref()
    }

    /// Derived copy marked for preview.
    ///
    /// The title, when present, gains [`PREVIEW_PREFIX`]; everything else is
    /// copied as is. `self` is left untouched.
    pub fn preview(&self) -> Self {
        let mut copy = self.clone();
        if let Some(title) = &self.fields.title {
            copy.fields.title = Some(format!("{PREVIEW_PREFIX}{title}"));
        }
        copy
    }

    /// `self` cloned, or its preview copy when `preview` is set.
    pub fn rendered(&self, preview: bool) -> Self {
        if preview { self.preview() } else { self.clone() }
    }
}

/// Entry fields. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,

    /// Opaque structured content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Linked media asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_prefixes_title_only() {
        let entry = ContentEntry::new("hero-control")
            .with_title("Scale with confidence")
            .with_description("Ship safely")
            .with_cta("Start free trial", "/signup");

        let preview = entry.preview();
        assert_eq!(preview.title(), Some("[PREVIEW] Scale with confidence"));
        assert_eq!(preview.fields.description, entry.fields.description);
        assert_eq!(preview.fields.cta_url.as_deref(), Some("/signup"));
        assert_eq!(entry.title(), Some("Scale with confidence"));
    }

    #[test]
    fn test_preview_without_title() {
        let entry = ContentEntry::new("untitled").with_description("No title here");

        assert_eq!(entry.preview(), entry);
        assert_eq!(entry.rendered(false), entry);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let entry: ContentEntry = serde_json::from_value(serde_json::json!({
            "id": "promo-summer",
            "fields": {
                "title": "Summer Special",
                "ctaText": "Claim offer",
                "badge": "limited"
            }
        }))
        .unwrap();

        assert_eq!(entry.content_type, "Entry");
        assert_eq!(entry.fields.cta_text.as_deref(), Some("Claim offer"));
        assert_eq!(entry.fields.extra["badge"], "limited");

        let json = serde_json::to_value(entry.preview()).unwrap();
        assert_eq!(json["fields"]["title"], "[PREVIEW] Summer Special");
        assert_eq!(json["fields"]["badge"], "limited");
    }
}
