use adrenal_core::{Assessment, ObservationForm};
use adrenal_report::ReportFormat;
use eyre::WrapErr;

/// Input document: one form, or an array of independent forms.
#[derive(Debug)]
pub enum FormBatch {
    Many(Vec<ObservationForm>),
    One(ObservationForm),
}

fn form_from_value(value: serde_json::Value, case: usize) -> eyre::Result<ObservationForm> {
    serde_json::from_value(value).wrap_err_with(|| format!("case {case}"))
}

impl FormBatch {
    /// Parse a JSON document. Each form is decoded on its own so a bad field
    /// is reported against its case number.
    pub fn parse(input: &str) -> eyre::Result<Self> {
        let document: serde_json::Value =
            serde_json::from_str(input).wrap_err("input is not valid JSON")?;
        match document {
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| form_from_value(item, i + 1))
                .collect::<eyre::Result<Vec<_>>>()
                .map(FormBatch::Many),
            item => form_from_value(item, 1).map(FormBatch::One),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FormBatch::Many(forms) => forms.len(),
            FormBatch::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and assess every form. Stops at the first invalid form.
    pub fn assess(&self) -> eyre::Result<Vec<Assessment>> {
        let forms: &[ObservationForm] = match self {
            FormBatch::Many(forms) => forms,
            FormBatch::One(form) => std::slice::from_ref(form),
        };
        forms
            .iter()
            .enumerate()
            .map(|(i, form)| -> eyre::Result<Assessment> {
                let obs = form
                    .validate()
                    .wrap_err_with(|| format!("case {}", i + 1))?;
                Ok(adrenal_rules::assess(&obs))
            })
            .collect()
    }
}

/// Assess `input` and render the result. A single form renders as a single
/// report; a batch renders as a JSON array or as Markdown sections.
pub fn assess_document(input: &str, format: ReportFormat) -> eyre::Result<String> {
    let batch = FormBatch::parse(input)?;
    let assessments = batch.assess()?;
    tracing::info!(cases = batch.len(), %format, "assessed input");

    match (&batch, format) {
        (FormBatch::Many(_), ReportFormat::Json) => Ok(serde_json::to_string_pretty(&assessments)?),
        _ => {
            let reports = assessments
                .iter()
                .map(|a| adrenal_report::render(a, format))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(reports.join("\n---\n\n"))
        }
    }
}
