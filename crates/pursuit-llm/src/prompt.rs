//! Prompt template loading and rendering via `minijinja`.
//!
//! Templates live on disk (default: `templates/`) so the tone of the game
//! can be tuned without recompiling. One shared system template frames
//! every call; each request kind has its own user template rendered from
//! the serialized request struct.

use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::error::LlmError;

/// The kinds of content the generator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Cast and itinerary of a new case.
    Case,
    /// Raw pool of travel candidates.
    Destinations,
    /// Witness clues.
    Clues,
}

impl PromptKind {
    /// Template name registered in the environment.
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Case => "case",
            Self::Destinations => "destinations",
            Self::Clues => "clues",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::Case => "case.j2",
            Self::Destinations => "destinations.j2",
            Self::Clues => "clues.j2",
        }
    }
}

const ALL_KINDS: [PromptKind; 3] = [PromptKind::Case, PromptKind::Destinations, PromptKind::Clues];

/// Loaded prompt templates.
///
/// The directory must contain `system.j2`, `case.j2`, `destinations.j2`
/// and `clues.j2`. Edits on disk are picked up the next time a
/// [`PromptEngine`] is built.
pub struct PromptEngine {
    env: Environment<'static>,
}

impl std::fmt::Debug for PromptEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptEngine").finish_non_exhaustive()
    }
}

/// A rendered prompt ready to send to an LLM backend.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    /// System message.
    pub system: String,
    /// User message.
    pub user: String,
}

impl PromptEngine {
    /// Load every template from `templates_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Template`] if a file is missing or does not
    /// compile.
    pub fn new(templates_dir: impl AsRef<Path>) -> Result<Self, LlmError> {
        let dir = templates_dir.as_ref();
        let mut env = Environment::new();

        add_template(&mut env, dir, "system", "system.j2")?;
        for kind in ALL_KINDS {
            add_template(&mut env, dir, kind.template_name(), kind.file_name())?;
        }

        Ok(Self { env })
    }

    /// Render the system and user messages for `kind` from `request`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Template`] if rendering fails.
    pub fn render<T: Serialize>(
        &self,
        kind: PromptKind,
        request: &T,
    ) -> Result<RenderedPrompt, LlmError> {
        let ctx = minijinja::Value::from_serialize(request);
        Ok(RenderedPrompt {
            system: self.render_named("system", &ctx)?,
            user: self.render_named(kind.template_name(), &ctx)?,
        })
    }

    fn render_named(&self, name: &str, ctx: &minijinja::Value) -> Result<String, LlmError> {
        self.env
            .get_template(name)
            .map_err(|e| LlmError::Template(format!("missing {name} template: {e}")))?
            .render(ctx)
            .map_err(|e| LlmError::Template(format!("{name} render failed: {e}")))
    }
}

fn add_template(
    env: &mut Environment<'static>,
    dir: &Path,
    name: &'static str,
    file: &str,
) -> Result<(), LlmError> {
    let path = dir.join(file);
    let source = std::fs::read_to_string(&path)
        .map_err(|e| LlmError::Template(format!("failed to read {}: {e}", path.display())))?;
    env.add_template_owned(name, source)
        .map_err(|e| LlmError::Template(format!("failed to add {name} template: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pursuit_core::{ClueRequest, DestinationRequest};

    use super::*;

    fn shipped_templates() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }

    #[test]
    fn shipped_templates_render_destinations() {
        let engine = PromptEngine::new(shipped_templates()).unwrap();

        let request = DestinationRequest {
            previous_city: Some(String::from("Rome")),
            next_city: String::from("Cairo"),
            current_city: String::from("Chennai"),
            exclude_list: vec![String::from("Paris"), String::from("Rome")],
            count: 4,
        };
        let prompt = engine.render(PromptKind::Destinations, &request).unwrap();
        assert!(!prompt.system.is_empty());
        assert!(prompt.user.contains("Cairo"));
        assert!(prompt.user.contains("Chennai"));
        assert!(prompt.user.contains("Paris"));
    }

    #[test]
    fn shipped_templates_render_clues() {
        let engine = PromptEngine::new(shipped_templates()).unwrap();

        let heading_on = ClueRequest {
            suspect_name: String::from("Madame Mirage"),
            current_city: String::from("Cairo"),
            next_city: Some(String::from("Tokyo")),
            count: 3,
        };
        let prompt = engine.render(PromptKind::Clues, &heading_on).unwrap();
        assert!(prompt.user.contains("left for Tokyo"));
        assert!(prompt.user.contains('3'));

        let last_stop = ClueRequest {
            next_city: None,
            ..heading_on
        };
        let prompt = engine.render(PromptKind::Clues, &last_stop).unwrap();
        assert!(prompt.user.contains("last stop"));
        assert!(prompt.user.contains("Madame Mirage"));
        assert!(!prompt.user.contains("Tokyo"));
    }

    #[test]
    fn missing_directory_is_template_error() {
        let dir = std::env::temp_dir().join(format!("pursuit_no_templates_{}", std::process::id()));
        let result = PromptEngine::new(dir);
        assert!(matches!(result, Err(LlmError::Template(_))));
    }
}
