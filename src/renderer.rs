//! Template rendering for featgen.
//! Renders the built-in skeletons with MiniJinja.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps trailing newlines and fails on
    /// undefined variables.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_keeps_trailing_newline() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "user-profile" });

        let result = renderer.render("// {{ name }}\n", &context).unwrap();
        assert_eq!(result, "// user-profile\n");
    }

    #[test]
    fn test_render_does_not_evaluate_values() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "{{ 1 + 1 }}" });

        let result = renderer.render("{{ name }}", &context).unwrap();
        assert_eq!(result, "{{ 1 + 1 }}");
    }

    #[test]
    fn test_render_rejects_undefined_variable() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{{ missing }}", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }
}
