//! Template engine for rendering the HTML views
//!
//! All page templates are parsed once when the engine is built, so a broken
//! template fails at startup instead of on the first request that needs it.

use crate::error::{Result, TemplatingError};
use crate::partials::{collect_partials, is_partial, BuiltinTemplates, TemplateContentProvider};

use serde::Serialize;
use std::collections::HashMap;

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    templates: HashMap<String, liquid::Template>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.templates.keys().collect();
        names.sort();
        f.debug_struct("TemplateEngine")
            .field("templates", &names)
            .finish()
    }
}

impl TemplateEngine {
    /// Build an engine over the views compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::with_provider(&BuiltinTemplates)
    }

    /// Build an engine over any template provider
    pub fn with_provider<P: TemplateContentProvider + ?Sized>(provider: &P) -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(collect_partials(provider))
            .build()
            .map_err(|e| TemplatingError::Parse {
                name: "partials".to_string(),
                message: e.to_string(),
            })?;

        let mut templates = HashMap::new();
        for name in provider.list_template_names() {
            if is_partial(&name) {
                continue;
            }
            let content = provider
                .get_template_content(&name)
                .ok_or_else(|| TemplatingError::NotFound(name.clone()))?;
            let template = parser.parse(&content).map_err(|e| TemplatingError::Parse {
                name: name.clone(),
                message: e.to_string(),
            })?;
            tracing::debug!("Compiled template '{}'", name);
            templates.insert(name, template);
        }

        Ok(Self { templates })
    }

    /// Names of the renderable (non-partial) templates
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render a template with a liquid object as context
    pub fn render(&self, name: &str, context: &liquid::Object) -> Result<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| TemplatingError::NotFound(name.to_string()))?;

        template
            .render(context)
            .map_err(|e| TemplatingError::Render {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Render a template with any serializable value as context
    ///
    /// The value must serialize to a map; its keys become template variables.
    pub fn render_serialized<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let object =
            liquid::to_object(context).map_err(|e| TemplatingError::Context(e.to_string()))?;
        self.render(name, &object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct FixedTemplates(Vec<(&'static str, &'static str)>);

    impl TemplateContentProvider for FixedTemplates {
        fn get_template_content(&self, name: &str) -> Option<String> {
            self.0
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, c)| c.to_string())
        }

        fn list_template_names(&self) -> Vec<String> {
            self.0.iter().map(|(n, _)| n.to_string()).collect()
        }
    }

    #[test]
    fn test_builtin_engine_compiles_all_pages() {
        let engine = TemplateEngine::builtin().unwrap();
        assert_eq!(
            engine.template_names(),
            vec!["edit_list", "list", "lists", "new_list"]
        );
    }

    #[test]
    fn test_render_with_partial() {
        let provider = FixedTemplates(vec![
            ("_greeting", "Hello {{ name }}"),
            ("page", "{% include '_greeting' %}!"),
        ]);
        let engine = TemplateEngine::with_provider(&provider).unwrap();

        let html = engine
            .render_serialized("page", &json!({"name": "Alice"}))
            .unwrap();
        assert_eq!(html, "Hello Alice!");
    }

    #[test]
    fn test_escape_filter() {
        let provider = FixedTemplates(vec![("page", "{{ title | escape }}")]);
        let engine = TemplateEngine::with_provider(&provider).unwrap();

        let html = engine
            .render_serialized("page", &json!({"title": "<b>Tom & Jerry</b>"}))
            .unwrap();
        assert_eq!(html, "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::builtin().unwrap();
        let result = engine.render("nope", &liquid::Object::new());
        assert!(matches!(result, Err(TemplatingError::NotFound(_))));
    }

    #[test]
    fn test_parse_error_names_template() {
        let provider = FixedTemplates(vec![("broken", "{% if %}")]);
        let error = TemplateEngine::with_provider(&provider).unwrap_err();
        assert!(matches!(error, TemplatingError::Parse { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_missing_variable_is_render_error() {
        let provider = FixedTemplates(vec![("page", "{{ missing }}")]);
        let engine = TemplateEngine::with_provider(&provider).unwrap();
        let result = engine.render("page", &liquid::Object::new());
        assert!(matches!(result, Err(TemplatingError::Render { .. })));
    }
}
