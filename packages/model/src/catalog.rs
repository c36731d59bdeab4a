//! # Template Catalog
//!
//! Templates seed the content of newly added components. The catalog is
//! keyed by component type: the first template registered for a type is
//! that type's default.

use crate::component::{Component, ComponentType, Content, Styles};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Template not found: {0}")]
    UnknownTemplate(String),

    #[error("Template {template} is for {found} blocks, not {expected}")]
    TypeMismatch {
        template: String,
        expected: ComponentType,
        found: ComponentType,
    },

    #[error("No template registered for {0} blocks")]
    NoTemplate(ComponentType),
}

/// Starting content for one kind of block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub component_type: ComponentType,
    #[serde(default)]
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
        content: Content,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            content,
            styles: None,
        }
    }

    /// Build a component seeded from this template
    pub fn instantiate(&self, id: impl Into<String>) -> Component {
        let mut component = Component::new(id, self.component_type)
            .with_content(self.content.clone())
            .with_template(self.id.clone());
        component.styles = self.styles.clone();
        component
    }
}

/// Templates available to the editor, in registration order
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with a default template for every block type
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for template in builtin_templates() {
            catalog.register(template);
        }
        catalog
    }

    /// Add a template, replacing any template with the same id in place
    pub fn register(&mut self, template: Template) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn default_for(&self, component_type: ComponentType) -> Option<&Template> {
        self.for_type(component_type).next()
    }

    pub fn for_type(&self, component_type: ComponentType) -> impl Iterator<Item = &Template> {
        self.templates
            .iter()
            .filter(move |t| t.component_type == component_type)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Find the template a new `component_type` block would be seeded from.
    ///
    /// With no template id the type's default is used.
    pub fn resolve(
        &self,
        component_type: ComponentType,
        template_id: Option<&str>,
    ) -> Result<&Template, CatalogError> {
        match template_id {
            Some(template_id) => {
                let template = self
                    .get(template_id)
                    .ok_or_else(|| CatalogError::UnknownTemplate(template_id.to_string()))?;
                if template.component_type != component_type {
                    return Err(CatalogError::TypeMismatch {
                        template: template.id.clone(),
                        expected: component_type,
                        found: template.component_type,
                    });
                }
                Ok(template)
            }
            None => self
                .default_for(component_type)
                .ok_or(CatalogError::NoTemplate(component_type)),
        }
    }

    /// Resolve the template for a new block and build the component
    pub fn instantiate(
        &self,
        id: impl Into<String>,
        component_type: ComponentType,
        template_id: Option<&str>,
    ) -> Result<Component, CatalogError> {
        Ok(self.resolve(component_type, template_id)?.instantiate(id))
    }
}

fn fields(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        _ => Content::new(),
    }
}

fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "hero-centered",
            "Centered hero",
            ComponentType::Hero,
            fields(json!({
                "heading": "Build something people want",
                "subheading": "Launch your landing page in minutes.",
                "ctaText": "Get started",
                "ctaLink": "#"
            })),
        ),
        Template::new(
            "hero-split",
            "Hero with image",
            ComponentType::Hero,
            fields(json!({
                "heading": "Your product, front and center",
                "subheading": "Pair a strong message with a product shot.",
                "ctaText": "Try it free",
                "ctaLink": "#",
                "imageUrl": ""
            })),
        ),
        Template::new(
            "features-grid",
            "Feature grid",
            ComponentType::Features,
            fields(json!({
                "heading": "Features",
                "items": [
                    { "title": "Fast", "description": "Pages load in a blink." },
                    { "title": "Simple", "description": "No code required." },
                    { "title": "Flexible", "description": "Rearrange anything." }
                ]
            })),
        ),
        Template::new(
            "content-text",
            "Text section",
            ComponentType::Content,
            fields(json!({
                "heading": "About us",
                "body": "Tell your story here."
            })),
        ),
        Template::new(
            "testimonials-cards",
            "Testimonial cards",
            ComponentType::Testimonials,
            fields(json!({
                "heading": "What our customers say",
                "quotes": [
                    { "author": "Jane Doe", "role": "Founder", "quote": "It just works." }
                ]
            })),
        ),
        Template::new(
            "pricing-tiers",
            "Pricing tiers",
            ComponentType::Pricing,
            fields(json!({
                "heading": "Pricing",
                "plans": [
                    { "name": "Starter", "price": "$0", "features": ["1 page"] },
                    { "name": "Pro", "price": "$12", "features": ["Unlimited pages", "Custom domain"] }
                ]
            })),
        ),
        Template::new(
            "faq-list",
            "Question list",
            ComponentType::Faq,
            fields(json!({
                "heading": "Frequently asked questions",
                "items": [
                    { "question": "Can I cancel anytime?", "answer": "Yes." }
                ]
            })),
        ),
        Template::new(
            "contact-form",
            "Contact form",
            ComponentType::Contact,
            fields(json!({
                "heading": "Get in touch",
                "email": "hello@example.com",
                "submitText": "Send"
            })),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_type() {
        let catalog = TemplateCatalog::builtin();
        for ty in ComponentType::ALL {
            let template = catalog.default_for(ty);
            assert!(template.is_some(), "missing default for {}", ty);
            assert_eq!(template.unwrap().component_type, ty);
        }
    }

    #[test]
    fn test_default_is_first_registered() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.default_for(ComponentType::Hero).unwrap().id, "hero-centered");
        assert_eq!(catalog.for_type(ComponentType::Hero).count(), 2);
    }

    #[test]
    fn test_instantiate_seeds_content_and_template() {
        let catalog = TemplateCatalog::builtin();
        let component = catalog
            .instantiate("p-1", ComponentType::Pricing, None)
            .unwrap();

        assert_eq!(component.id(), "p-1");
        assert_eq!(component.template.as_deref(), Some("pricing-tiers"));
        assert_eq!(component.content["heading"], json!("Pricing"));
    }

    #[test]
    fn test_instantiate_named_template() {
        let catalog = TemplateCatalog::builtin();
        let component = catalog
            .instantiate("h", ComponentType::Hero, Some("hero-split"))
            .unwrap();
        assert!(component.content.contains_key("imageUrl"));
    }

    #[test]
    fn test_instantiate_rejects_unknown_and_mismatched() {
        let catalog = TemplateCatalog::builtin();

        assert_eq!(
            catalog.instantiate("x", ComponentType::Hero, Some("nope")),
            Err(CatalogError::UnknownTemplate("nope".to_string()))
        );
        assert!(matches!(
            catalog.instantiate("x", ComponentType::Hero, Some("faq-list")),
            Err(CatalogError::TypeMismatch { found: ComponentType::Faq, .. })
        ));
        assert_eq!(
            TemplateCatalog::new().instantiate("x", ComponentType::Faq, None),
            Err(CatalogError::NoTemplate(ComponentType::Faq))
        );
    }

    #[test]
    fn test_resolve_picks_default_or_named() {
        let catalog = TemplateCatalog::builtin();

        assert_eq!(catalog.resolve(ComponentType::Hero, None).unwrap().id, "hero-centered");
        assert_eq!(
            catalog.resolve(ComponentType::Hero, Some("hero-split")).unwrap().id,
            "hero-split"
        );
        assert!(catalog.resolve(ComponentType::Pricing, Some("hero-split")).is_err());
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut catalog = TemplateCatalog::builtin();
        let before = catalog.len();

        catalog.register(Template::new(
            "faq-list",
            "Short FAQ",
            ComponentType::Faq,
            Content::new(),
        ));

        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.get("faq-list").unwrap().name, "Short FAQ");
    }
}
