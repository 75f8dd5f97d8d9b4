use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render a Tera template against any serializable value.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// fields of `data` become the template context variables. Template names
/// without an `.html`/`.xml` suffix are rendered without autoescaping.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the data to a Tera context via serde_json
    let value = serde_json::to_value(data)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
