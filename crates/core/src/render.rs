//! Results page markup.
//!
//! The results section is plain string templating: the web crate drops the
//! output into `resultsSection` via `inner_html`. All report text is escaped
//! before interpolation.

use std::fmt::Write as _;

use crate::fmt::{fmt_timestamp, scalar_text};
use crate::report::AnalysisReport;

pub const NO_DATA_HTML: &str = "<p>No data found.</p>";

const BLOCK_STYLE: &str = "margin-bottom:18px;";

pub fn render_no_data() -> String {
    NO_DATA_HTML.to_string()
}

/// Escapes text for use inside element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect()
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut html = String::new();
    push_rag(&mut html, report);
    push_cross_check(&mut html, report);
    push_heuristics(&mut html, report);
    push_technical(&mut html, report);
    push_red_flags(&mut html, report);
    push_entities(&mut html, report);
    push_summary(&mut html, report);
    push_footer(&mut html, report);
    html
}

fn push_rag(html: &mut String, report: &AnalysisReport) {
    let rag = report.rag();
    let _ = write!(
        html,
        "<div style=\"text-align:center; margin-bottom:24px;\">\
         <span class=\"rag-dot\" style=\"display:inline-block; width:24px; height:24px; \
         background:{color}; border-radius:50%; margin-bottom:8px;\"></span>\
         <h2 style=\"margin:4px 0;\">{label}</h2></div>",
        color = rag.color(),
        label = rag.label(),
    );
}

fn push_cross_check(html: &mut String, report: &AnalysisReport) {
    let sources = &report.source_cross_check;
    let _ = write!(
        html,
        "<div style=\"{BLOCK_STYLE}\"><h3>🔗 Source Cross-Check</h3>\
         <p>Checked top {checked} Armenian sources; found matches in:</p>\
         <ul class=\"matches\">{items}</ul></div>",
        checked = escape_html(&scalar_text(sources.checked.as_ref())),
        items = list_items(sources.matches.iter().map(String::as_str)),
    );
}

fn push_heuristics(html: &mut String, report: &AnalysisReport) {
    let h = &report.heuristic;
    let terms = match &h.loaded_terms {
        Some(terms) => terms.join(", "),
        None => "none".to_string(),
    };
    let _ = write!(
        html,
        "<div style=\"{BLOCK_STYLE}\"><h3>🧩 Heuristic Indicators</h3><ul>\
         <li>Loaded Terms: {terms}</li>\
         <li>Emotion Density: {emotion}%</li>\
         <li>Subjectivity: {subjectivity}</li>\
         <li>Passive Voice: {passive}%</li>\
         </ul></div>",
        terms = escape_html(&terms),
        emotion = escape_html(&scalar_text(h.emotion_density_pct.as_ref())),
        subjectivity = escape_html(&scalar_text(h.subjectivity_score.as_ref())),
        passive = escape_html(&scalar_text(h.passive_voice_pct.as_ref())),
    );
}

fn push_technical(html: &mut String, report: &AnalysisReport) {
    let t = &report.technical;
    let _ = write!(
        html,
        "<div style=\"{BLOCK_STYLE}\"><h3>⚙️ Technical Metadata</h3><ul>\
         <li>Method: {method}</li>\
         <li>Sources Checked: {checked}</li>\
         </ul></div>",
        method = escape_html(&scalar_text(t.method.as_ref())),
        checked = escape_html(&scalar_text(t.sources_checked.as_ref())),
    );
}

fn push_red_flags(html: &mut String, report: &AnalysisReport) {
    let _ = write!(
        html,
        "<div style=\"{BLOCK_STYLE}\"><h3>🚩 Red Flags ({count})</h3>\
         <ul class=\"red-flags\">{items}</ul></div>",
        count = report.red_flags.len(),
        items = list_items(report.red_flags.iter().map(String::as_str)),
    );
}

fn push_entities(html: &mut String, report: &AnalysisReport) {
    let items: String = report
        .displayable_entities()
        .map(|e| {
            let name = escape_html(e.name.as_deref().unwrap_or_default().trim());
            match e.kind.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
                Some(kind) => format!("<li><strong>{name}</strong> ({})</li>", escape_html(kind)),
                None => format!("<li><strong>{name}</strong></li>"),
            }
        })
        .collect();
    if items.is_empty() {
        return;
    }
    let _ = write!(
        html,
        "<div class=\"entities\" style=\"{BLOCK_STYLE}\"><h3>👥 Key Entities</h3><ul>{items}</ul></div>"
    );
}

fn push_summary(html: &mut String, report: &AnalysisReport) {
    let score = scalar_text(
        report
            .credibility_score
            .as_ref()
            .or(report.credibility.score.as_ref()),
    );
    let summary = report.summary.as_deref().unwrap_or_default();
    let _ = write!(
        html,
        "<div style=\"{BLOCK_STYLE}\"><h3>📝 Summary</h3>\
         <p><b>Credibility Score:</b> {score}<br>{summary}</p>",
        score = escape_html(&score),
        summary = escape_html(summary),
    );
    if let Some(explanation) = report
        .credibility
        .explanation
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let _ = write!(
            html,
            "<p class=\"explanation\">{}</p>",
            escape_html(explanation)
        );
    }
    html.push_str("</div>");
}

fn push_footer(html: &mut String, report: &AnalysisReport) {
    let Some(processed_at) = report.metadata.processed_at.as_deref() else {
        return;
    };
    let mut line = format!("Analyzed at: {}", fmt_timestamp(processed_at));
    if let Some(domain) = report
        .metadata
        .domain
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        let _ = write!(line, " · {}", domain.trim());
    }
    let _ = write!(
        html,
        "<div style=\"text-align:right; color:#718096; font-size:0.9em;\">{}</div>",
        escape_html(&line)
    );
}
