//! Page template registry
//!
//! The four template kinds are a closed set: each one references its
//! siblings by name, so none can be added or dropped on its own.

use std::fmt;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::error::{ScaffoldError, ScaffoldResult};

pub mod files;
pub use files::*;

/// Role of a generated file within a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Widget tree (`<Class>View`)
    View,
    /// Dependency registration (`<Class>Binding`)
    Binding,
    /// Controller (`<Class>Logic`)
    Logic,
    /// Page variables (`<Class>State`)
    State,
}

impl TemplateKind {
    /// All kinds, in write order
    pub const ALL: [Self; 4] = [Self::View, Self::Binding, Self::Logic, Self::State];

    /// File name suffix and template name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Binding => "binding",
            Self::Logic => "logic",
            Self::State => "state",
        }
    }

    /// Template source for this kind
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::View => VIEW_TEMPLATE,
            Self::Binding => BINDING_TEMPLATE,
            Self::Logic => LOGIC_TEMPLATE,
            Self::State => STATE_TEMPLATE,
        }
    }

    /// Short description for user feedback
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::View => "page widget",
            Self::Binding => "dependency binding",
            Self::Logic => "GetX controller",
            Self::State => "page state",
        }
    }

    /// File name for a page, e.g. `user_profile_view.dart`
    #[must_use]
    pub fn file_name(self, page_name: &str, extension: &str) -> String {
        format!("{page_name}_{}.{extension}", self.as_str())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values substituted into every template
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Page name as given, e.g. `user_profile`
    pub page_name: String,
    /// `PascalCase` class prefix, e.g. `UserProfile`
    pub class_name: String,
    /// Display title, e.g. `User Profile`
    pub title: String,
    /// Extension used in import lines
    pub extension: String,
}

/// Registry holding the compiled page templates
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// Create a registry with all page templates loaded
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new() -> ScaffoldResult<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        for kind in TemplateKind::ALL {
            env.add_template(kind.as_str(), kind.source())
                .map_err(|source| ScaffoldError::Template { kind, source })?;
        }

        Ok(Self { env })
    }

    /// Render one template kind
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, kind: TemplateKind, context: &PageContext) -> ScaffoldResult<String> {
        self.env
            .get_template(kind.as_str())
            .and_then(|template| template.render(context))
            .map_err(|source| ScaffoldError::Template { kind, source })
    }
}
