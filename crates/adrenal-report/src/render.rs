use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use adrenal_core::Assessment;

use crate::error::ReportError;

const TEMPLATE_NAME: &str = "assessment.md";
const TEMPLATE: &str = include_str!("../templates/assessment.md");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Render an assessment as the two-section Markdown report: the diagnostic
/// approach (every finding, in rule order) and the final conclusion.
pub fn render_markdown(assessment: &Assessment) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(assessment)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

pub fn render(assessment: &Assessment, format: ReportFormat) -> Result<String, ReportError> {
    tracing::debug!(%format, findings = assessment.findings.len(), "rendering report");
    match format {
        ReportFormat::Markdown => render_markdown(assessment),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
    }
}
