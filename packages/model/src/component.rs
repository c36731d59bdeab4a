//! # Components
//!
//! A page is an ordered list of components. List order is render order.
//!
//! Each component type owns its own content fields; there is no shared
//! schema, so content is kept as a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field name → value payload of a component
pub type Content = Map<String, Value>;

/// Style overrides of a component
pub type Styles = Map<String, Value>;

/// Kind of page block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Hero,
    Features,
    Content,
    Testimonials,
    Pricing,
    Faq,
    Contact,
}

impl ComponentType {
    /// Every block type, in palette order
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Hero,
        ComponentType::Features,
        ComponentType::Content,
        ComponentType::Testimonials,
        ComponentType::Pricing,
        ComponentType::Faq,
        ComponentType::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Hero => "hero",
            ComponentType::Features => "features",
            ComponentType::Content => "content",
            ComponentType::Testimonials => "testimonials",
            ComponentType::Pricing => "pricing",
            ComponentType::Faq => "faq",
            ComponentType::Contact => "contact",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown component type: {0}")]
pub struct ParseComponentTypeError(pub String);

impl FromStr for ComponentType {
    type Err = ParseComponentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseComponentTypeError(s.to_string()))
    }
}

/// One content block placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique within a page, fixed for the component's lifetime
    id: String,

    #[serde(rename = "type")]
    pub component_type: ComponentType,

    #[serde(default)]
    pub content: Content,

    /// Template the content was seeded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
}

impl Component {
    /// Create an empty component of the given type
    pub fn new(id: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            id: id.into(),
            component_type,
            content: Content::new(),
            template: None,
            styles: None,
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Copy of this component under a different id
    pub fn duplicate_as(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Shallow-merge `partial` over the content fields.
    ///
    /// Returns `true` if any field actually changed.
    pub fn merge_content(&mut self, partial: &Content) -> bool {
        merge_fields(&mut self.content, partial)
    }

    /// Shallow-merge `partial` over the style overrides, creating them if absent.
    ///
    /// Returns `true` if any override actually changed.
    pub fn merge_styles(&mut self, partial: &Styles) -> bool {
        if partial.is_empty() {
            return false;
        }
        let styles = self.styles.get_or_insert_with(Styles::new);
        merge_fields(styles, partial)
    }
}

fn merge_fields(target: &mut Map<String, Value>, partial: &Map<String, Value>) -> bool {
    let mut changed = false;
    for (key, value) in partial {
        if target.get(key) != Some(value) {
            target.insert(key.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: Value) -> Content {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_component_serialization_shape() {
        let component = Component::new("hero-1", ComponentType::Hero)
            .with_content(content(json!({ "heading": "Welcome" })))
            .with_template("hero-centered");

        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "hero-1",
                "type": "hero",
                "content": { "heading": "Welcome" },
                "template": "hero-centered"
            })
        );

        let back: Component = serde_json::from_value(value).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn test_content_defaults_when_missing() {
        let component: Component =
            serde_json::from_value(json!({ "id": "faq-1", "type": "faq" })).unwrap();
        assert!(component.content.is_empty());
        assert!(component.styles.is_none());
    }

    #[test]
    fn test_merge_content_is_shallow() {
        let mut component = Component::new("c", ComponentType::Content).with_content(content(
            json!({ "heading": "Old", "body": "Text", "meta": { "a": 1 } }),
        ));

        let changed = component.merge_content(&content(json!({ "heading": "New", "meta": { "b": 2 } })));

        assert!(changed);
        assert_eq!(component.content["heading"], json!("New"));
        assert_eq!(component.content["body"], json!("Text"));
        // Nested objects are replaced, not merged
        assert_eq!(component.content["meta"], json!({ "b": 2 }));
    }

    #[test]
    fn test_merge_identical_values_reports_unchanged() {
        let mut component = Component::new("c", ComponentType::Content)
            .with_content(content(json!({ "heading": "Same" })));

        assert!(!component.merge_content(&content(json!({ "heading": "Same" }))));
        assert!(!component.merge_content(&Content::new()));
    }

    #[test]
    fn test_merge_styles_creates_overrides() {
        let mut component = Component::new("p", ComponentType::Pricing);
        assert!(!component.merge_styles(&Styles::new()));
        assert!(component.styles.is_none());

        assert!(component.merge_styles(&content(json!({ "background": "#fff" }))));
        assert_eq!(component.styles.as_ref().unwrap()["background"], json!("#fff"));
    }

    #[test]
    fn test_duplicate_keeps_everything_but_id() {
        let original = Component::new("a", ComponentType::Features)
            .with_content(content(json!({ "heading": "Why us" })))
            .with_styles(content(json!({ "padding": "2rem" })))
            .with_template("features-grid");

        let copy = original.duplicate_as("b");
        assert_eq!(copy.id(), "b");
        assert_eq!(copy.component_type, original.component_type);
        assert_eq!(copy.content, original.content);
        assert_eq!(copy.styles, original.styles);
        assert_eq!(copy.template, original.template);
    }

    #[test]
    fn test_component_type_from_str() {
        assert_eq!("pricing".parse::<ComponentType>(), Ok(ComponentType::Pricing));
        assert_eq!("FAQ".parse::<ComponentType>(), Ok(ComponentType::Faq));
        assert!("footer".parse::<ComponentType>().is_err());
    }
}
