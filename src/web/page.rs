//! Server-rendered form page.
//!
//! One page: the form, then either the latest assessment or an error. All
//! dynamic text goes through [`escape`].

use std::fmt::Write;

use crate::domain::{choice_labels, FeatureColumn, FeatureKind, PredictionRequest, CANONICAL_ORDER};
use crate::report::{RiskAssessment, APP_INTRO, APP_TITLE, DISCLAIMER, PROBABILITY_CAPTION};

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
.cols{display:flex;gap:2rem}.cols>fieldset{flex:1}label{display:block;margin-top:.6rem}\
input,select{width:100%;padding:.3rem}button{margin-top:1rem;padding:.5rem 1.2rem}\
.high{color:#b00020}.low{color:#1b7f3a}.error{color:#b00020;font-weight:bold}\
table{border-collapse:collapse;margin-top:1rem}td,th{border:1px solid #ccc;padding:.3rem .6rem}\
.disclaimer{color:#666;font-size:.9rem;margin-top:2rem}";

/// Everything the page shows for one response.
#[derive(Debug, Clone)]
pub struct PageView {
    pub values: PredictionRequest,
    pub assessment: Option<RiskAssessment>,
    pub error: Option<String>,
}

impl PageView {
    pub fn new(values: PredictionRequest) -> Self {
        Self {
            values,
            assessment: None,
            error: None,
        }
    }

    pub fn with_assessment(mut self, assessment: RiskAssessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head><body>\
         <h1>{title}</h1><p>{intro}</p>",
        title = escape(APP_TITLE),
        intro = escape(APP_INTRO),
    );

    html.push_str("<form method=\"post\" action=\"/predict\"><div class=\"cols\">");
    render_section(&mut html, "Data Umum &amp; Klinis", FeatureKind::Continuous, &view.values);
    render_section(&mut html, "Data Kategorikal", FeatureKind::Discrete, &view.values);
    html.push_str(
        "</div><button type=\"submit\" name=\"submit\" value=\"predict\">Prediksi Risiko</button></form>",
    );

    if let Some(error) = &view.error {
        let _ = write!(html, "<p class=\"error\">{}</p>", escape(error));
    }
    if let Some(assessment) = &view.assessment {
        render_assessment(&mut html, assessment);
    }

    let _ = write!(
        html,
        "<p class=\"disclaimer\">{}</p></body></html>",
        escape(DISCLAIMER)
    );
    html
}

fn render_section(html: &mut String, title: &str, kind: FeatureKind, values: &PredictionRequest) {
    let _ = write!(html, "<fieldset><legend>{title}</legend>");
    for column in CANONICAL_ORDER.iter().filter(|c| c.kind() == kind) {
        render_control(html, *column, values);
    }
    html.push_str("</fieldset>");
}

fn render_control(html: &mut String, column: FeatureColumn, values: &PredictionRequest) {
    let name = column.name();
    let _ = write!(html, "<label for=\"{name}\">{}</label>", escape(column.label()));

    if let Some(spec) = column.numeric_spec() {
        let _ = write!(
            html,
            "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{}\" max=\"{}\" \
             step=\"{}\" value=\"{}\" required>",
            spec.format(spec.min),
            spec.format(spec.max),
            spec.step,
            escape(&values.display_value(column)),
        );
        return;
    }

    let current = values.display_value(column);
    let _ = write!(html, "<select id=\"{name}\" name=\"{name}\">");
    for label in choice_labels(column).unwrap_or_default() {
        let selected = if label == current { " selected" } else { "" };
        let label = escape(label);
        let _ = write!(html, "<option value=\"{label}\"{selected}>{label}</option>");
    }
    html.push_str("</select>");
}

fn render_assessment(html: &mut String, assessment: &RiskAssessment) {
    let class = if assessment.level.is_high() { "high" } else { "low" };
    let _ = write!(
        html,
        "<section id=\"result\"><h2>Hasil Prediksi</h2>\
         <p>{caption}: <strong>{percent}</strong></p>\
         <h3 class=\"{class}\">{label}</h3><p>{advisory}</p>\
         <table><thead><tr><th>Kolom</th><th>Data</th><th>Nilai</th><th>Kode</th></tr></thead><tbody>",
        caption = escape(PROBABILITY_CAPTION),
        percent = escape(&assessment.percent),
        label = escape(assessment.label),
        advisory = escape(assessment.advisory),
    );
    for row in &assessment.inputs {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.column),
            escape(&row.label),
            escape(&row.value),
            escape(&row.code)
        );
    }
    html.push_str("</tbody></table></section>");
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("< 120 mg/dl"), "&lt; 120 mg/dl");
        assert_eq!(escape("a\"b'&"), "a&quot;b&#39;&amp;");
    }

    #[test]
    fn default_page_has_every_control_and_no_result() {
        let html = render_page(&PageView::new(PredictionRequest::default()));
        for column in CANONICAL_ORDER {
            assert!(html.contains(&format!("name=\"{}\"", column.name())));
        }
        assert!(html.contains("<option value=\"Pria\" selected>Pria</option>"));
        assert!(html.contains("<option value=\"&lt; 120 mg/dl (Salah)\" selected>"));
        assert!(html.contains("step=\"0.1\" value=\"1.0\""));
        assert!(!html.contains("id=\"result\""));
    }

    #[test]
    fn result_and_error_sections() {
        let request = PredictionRequest::default();
        let view = PageView::new(request.clone())
            .with_assessment(RiskAssessment::new(0.75, &request));
        let html = render_page(&view);
        assert!(html.contains("75.00%"));
        assert!(html.contains("class=\"high\">Risiko Tinggi"));
        assert!(html.contains("<td>cp</td><td>Tipe Nyeri Dada</td><td>Asymptomatic (Tipe 4)</td><td>4</td>"));

        let html = render_page(&PageView::new(request).with_error("Invalid value for age: <x>"));
        assert!(html.contains("class=\"error\">Invalid value for age: &lt;x&gt;"));
    }
}
