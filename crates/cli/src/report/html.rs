// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML document rendering.

use chrono::{DateTime, Local};

use crate::aggregator::RunOutcome;
use crate::result::{CategoryResult, FailureRecord};

use super::timestamp;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full report document.
pub fn render_html(outcome: &RunOutcome, generated_at: DateTime<Local>) -> String {
    let summary = &outcome.summary;
    let rate = summary.success_rate();

    let cards = [
        render_card("Total Categories", &summary.total_categories.to_string(), ""),
        render_card("Passed", &summary.passed_categories.to_string(), "passed"),
        render_card("Failed", &summary.failed_categories.to_string(), "failed"),
        render_card(
            "Duration",
            &format!("{}s", (summary.total_duration_ms + 500) / 1000),
            "",
        ),
    ]
    .join("\n");

    let results: String = outcome.results.iter().map(render_result).collect();

    render_document(
        &timestamp(outcome.started_at),
        rate,
        &cards,
        &format!(
            "{} passing, {} failing, {} pending",
            summary.total_passing_tests, summary.total_failing_tests, summary.total_pending_tests
        ),
        &results,
        &generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

fn css(rate: u32) -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: #f5f7fa;
      color: #2d3748;
      line-height: 1.6;
    }}
    .container {{ max-width: 1200px; margin: 0 auto; padding: 20px; }}
    header {{
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 30px;
      border-radius: 12px;
      margin-bottom: 30px;
      text-align: center;
    }}
    header h1 {{ font-size: 2.5em; margin-bottom: 10px; }}
    .progress-bar {{ height: 8px; background: #e2e8f0; border-radius: 4px; overflow: hidden; margin: 10px 0; }}
    .progress-fill {{ height: 100%; width: {rate}%; background: linear-gradient(90deg, #38a169, #48bb78); }}
    .cards {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 20px;
      margin-bottom: 30px;
    }}
    .card {{
      background: white;
      padding: 25px;
      border-radius: 12px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      text-align: center;
      border-left: 4px solid #3182ce;
    }}
    .card.passed {{ border-left-color: #38a169; }}
    .card.failed {{ border-left-color: #e53e3e; }}
    .card-title {{ color: #4a5568; margin-bottom: 10px; }}
    .card-value {{ font-size: 2.5em; font-weight: bold; }}
    .results {{ background: white; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); overflow: hidden; }}
    .results h2 {{ background: #4a5568; color: white; padding: 20px; font-size: 1.2em; }}
    .result {{ padding: 20px; border-bottom: 1px solid #e2e8f0; }}
    .result:last-child {{ border-bottom: none; }}
    .result-header {{ display: flex; justify-content: space-between; align-items: center; }}
    .result-name {{ font-weight: bold; font-size: 1.1em; }}
    .status {{ padding: 4px 12px; border-radius: 20px; font-size: 0.9em; font-weight: bold; }}
    .status.passed {{ background: #c6f6d5; color: #22543d; }}
    .status.failed {{ background: #fed7d7; color: #822727; }}
    .duration, .counts {{ color: #718096; font-size: 0.9em; }}
    .failures {{ margin: 10px 0 0 20px; }}
    .failures li {{ margin-bottom: 6px; }}
    .expected {{ color: #22543d; font-family: monospace; }}
    .actual {{ color: #822727; font-family: monospace; }}
    .output {{
      background: #f7fafc;
      border: 1px solid #e2e8f0;
      border-radius: 6px;
      padding: 15px;
      margin-top: 10px;
      font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
      font-size: 0.9em;
      white-space: pre-wrap;
      max-height: 300px;
      overflow-y: auto;
    }}
    footer {{ text-align: center; margin-top: 30px; padding: 20px; color: #718096; font-size: 0.9em; }}"#
    )
}

fn render_card(title: &str, value: &str, class: &str) -> String {
    format!(
        r#"      <div class="card {class}">
        <div class="card-title">{title}</div>
        <div class="card-value">{value}</div>
      </div>"#
    )
}

fn render_result(result: &CategoryResult) -> String {
    let status = if result.success { "passed" } else { "failed" };
    let name = escape_html(&result.category);

    let mut details = String::new();
    if !result.success {
        if !result.failures.is_empty() {
            let items: String = result.failures.iter().map(render_failure).collect();
            details.push_str(&format!("\n        <ul class=\"failures\">{items}\n        </ul>"));
        }
        if !result.raw_output.is_empty() {
            details.push_str(&format!(
                "\n        <pre class=\"output\">{}</pre>",
                escape_html(&result.raw_output)
            ));
        }
    }

    format!(
        r#"
      <div class="result">
        <div class="result-header">
          <span class="result-name">{name}</span>
          <span>
            <span class="status {status}">{status}</span>
            <span class="duration">{duration}ms</span>
          </span>
        </div>
        <div class="counts">{passing} passing, {failing} failing, {pending} pending</div>{details}
      </div>"#,
        duration = result.duration_ms,
        passing = result.passing_count,
        failing = result.failing_count,
        pending = result.pending_count,
    )
}

fn render_failure(failure: &FailureRecord) -> String {
    let mut item = format!(
        "\n          <li><strong>{}</strong>",
        escape_html(&failure.test_name)
    );
    if !failure.error_message.is_empty() {
        item.push_str(&format!("<br>{}", escape_html(&failure.error_message)));
    }
    if let Some(expected) = &failure.expected {
        item.push_str(&format!(
            "<br><span class=\"expected\">+ expected: {}</span>",
            escape_html(expected)
        ));
    }
    if let Some(actual) = &failure.actual {
        item.push_str(&format!(
            "<br><span class=\"actual\">- actual: {}</span>",
            escape_html(actual)
        ));
    }
    if !failure.file.is_empty() {
        let line = failure
            .line
            .as_deref()
            .map(|l| format!(":{}", escape_html(l)))
            .unwrap_or_default();
        item.push_str(&format!("<br><code>{}{line}</code>", escape_html(&failure.file)));
    }
    item.push_str("</li>");
    item
}

fn render_document(
    stamp: &str,
    rate: u32,
    cards: &str,
    tests: &str,
    results: &str,
    generated: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Sharon Test Report - {stamp}</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>Sharon Test Report</h1>
      <p>Planet Nine Ecosystem Test Results</p>
      <p><strong>{stamp}</strong></p>
      <div class="progress-bar"><div class="progress-fill"></div></div>
      <p>{rate}% Success Rate</p>
      <p>{tests}</p>
    </header>
    <section class="cards">
{cards}
    </section>
    <section class="results">
      <h2>Test Results</h2>{results}
    </section>
    <footer>
      <p>Generated by Sharon</p>
      <p>Run completed at {generated}</p>
    </footer>
  </div>
</body>
</html>
"#,
        css = css(rate),
    )
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
