//! Template sources and partial loading
//!
//! Templates come from a [`TemplateContentProvider`]. Names starting with an
//! underscore are partials: they are registered with liquid so pages can
//! `{% include '_flash' %}` them, and are never rendered on their own.

use liquid::partials::{EagerCompiler, InMemorySource};

/// Prefix marking a template as a partial
pub const PARTIAL_PREFIX: char = '_';

/// Trait for types that can provide template content by name.
pub trait TemplateContentProvider: Send + Sync + std::fmt::Debug {
    /// Get the template content for a given name.
    fn get_template_content(&self, name: &str) -> Option<String>;

    /// List all available template names.
    fn list_template_names(&self) -> Vec<String>;
}

/// Whether a template name denotes a partial
pub fn is_partial(name: &str) -> bool {
    name.starts_with(PARTIAL_PREFIX)
}

/// Partial store handed to the liquid parser
pub type Partials = EagerCompiler<InMemorySource>;

/// Collect every partial the provider offers into a liquid partial store
pub fn collect_partials<P: TemplateContentProvider + ?Sized>(provider: &P) -> Partials {
    let mut source = InMemorySource::new();
    for name in provider
        .list_template_names()
        .into_iter()
        .filter(|name| is_partial(name))
    {
        if let Some(content) = provider.get_template_content(&name) {
            tracing::trace!("Registering partial '{}'", name);
            source.add(name, content);
        }
    }
    EagerCompiler::new(source)
}

/// The HTML views compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    const TEMPLATES: &'static [(&'static str, &'static str)] = &[
        ("_header", include_str!("templates/_header.liquid")),
        ("_footer", include_str!("templates/_footer.liquid")),
        ("_flash", include_str!("templates/_flash.liquid")),
        ("lists", include_str!("templates/lists.liquid")),
        ("new_list", include_str!("templates/new_list.liquid")),
        ("list", include_str!("templates/list.liquid")),
        ("edit_list", include_str!("templates/edit_list.liquid")),
    ];
}

impl TemplateContentProvider for BuiltinTemplates {
    fn get_template_content(&self, name: &str) -> Option<String> {
        Self::TEMPLATES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, content)| content.to_string())
    }

    fn list_template_names(&self) -> Vec<String> {
        Self::TEMPLATES
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_partial() {
        assert!(is_partial("_flash"));
        assert!(!is_partial("lists"));
    }

    #[test]
    fn test_builtin_templates_listed_and_loadable() {
        let builtins = BuiltinTemplates;
        let names = builtins.list_template_names();

        for page in ["lists", "new_list", "list", "edit_list"] {
            assert!(names.contains(&page.to_string()), "missing {page}");
        }
        for name in &names {
            let content = builtins.get_template_content(name).unwrap();
            assert!(!content.trim().is_empty(), "{name} is empty");
        }
        assert!(builtins.get_template_content("missing").is_none());
    }
}
