//! Page rendering with embedded `minijinja` templates.

use crate::task::services::TaskPage;
use minijinja::{Environment, context};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("manage.html", include_str!("../../templates/manage.html")),
    ("create.html", include_str!("../../templates/create.html")),
    ("show.html", include_str!("../../templates/show.html")),
    ("delete_conf.html", include_str!("../../templates/delete_conf.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Template environment holding every task page.
#[derive(Debug)]
pub struct PageRenderer {
    environment: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        for (name, source) in TEMPLATES {
            environment.add_template(name, source)?;
        }
        Ok(Self { environment })
    }

    /// Renders a workflow page, showing `flash` above the content.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn render(&self, page: &TaskPage, flash: Option<&str>) -> Result<String, minijinja::Error> {
        self.environment
            .get_template(page.template_name())?
            .render(context! { page => page, flash => flash })
    }
}
