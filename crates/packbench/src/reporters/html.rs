// Dweve PackBench - Compression Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart.js HTML report.
//!
//! One line chart per enabled pass (timing per parameter, one dataset per
//! test), a ratio chart for passes ranked by percentage, and a summary chart.
//! Tables with the rankings follow each chart.

use crate::core::{PassConfig, SortMode};
use crate::error::{BenchError, Result};
use crate::harness::{Ranked, TestResults};
use crate::reporters::Printer;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@2.9.4/dist/Chart.min.js";

const PALETTE: &[&str] = &[
    "rgba(75,192,192,0.8)",
    "rgba(255,99,132,0.8)",
    "rgba(54,162,235,0.8)",
    "rgba(255,159,64,0.8)",
    "rgba(153,102,255,0.8)",
    "rgba(201,203,207,0.8)",
    "rgba(255,205,86,0.8)",
];

/// Printer writing a standalone HTML page with Chart.js charts.
pub struct ChartJsPrinter {
    path: PathBuf,
}

impl ChartJsPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Printer for ChartJsPrinter {
    fn print_results(&mut self, results: &TestResults) -> Result<()> {
        let html = render_html(results);
        fs::write(&self.path, html).map_err(|e| BenchError::io(&self.path, e))
    }

    fn open(&self) -> Result<()> {
        let status = viewer_command(&self.path)
            .status()
            .map_err(|e| BenchError::Report(format!("failed to launch viewer: {}", e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(BenchError::Report(format!(
                "viewer exited with {} for '{}'",
                status,
                self.path.display()
            )))
        }
    }
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Renders the full page.
pub fn render_html(results: &TestResults) -> String {
    let title = escape_html(results.suite_name());
    let labels: Vec<&str> = results
        .parameters()
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    let mut body = String::new();
    let mut charts: Vec<Value> = Vec::new();

    for (pass_index, pass) in results.enabled_passes() {
        body.push_str(&format!("<h2>{}</h2>\n", escape_html(&pass.name)));

        let id = format!("pass-{}-time", pass_index);
        body.push_str(&canvas(&id));
        charts.push(chart_config(
            &id,
            &format!("{}: best time", pass.name),
            "ms",
            &labels,
            &pass.config,
            results,
            |i| results.ranking(&pass.name, i),
            |row| json!(row.best_millis()),
        ));

        if pass.config.sort == SortMode::Percentage {
            let id = format!("pass-{}-ratio", pass_index);
            body.push_str(&canvas(&id));
            charts.push(chart_config(
                &id,
                &format!("{}: size ratio", pass.name),
                "%",
                &labels,
                &pass.config,
                results,
                |i| results.ranking(&pass.name, i),
                |row| row.ratio.map_or(Value::Null, |r| json!(r * 100.0)),
            ));
        }

        for (i, label) in labels.iter().enumerate() {
            body.push_str(&ranking_table(label, &results.ranking(&pass.name, i)));
        }
    }

    let summary = *results.summary_config();
    if summary.enabled && !results.is_empty() {
        body.push_str("<h2>Summary</h2>\n");
        body.push_str(&canvas("summary"));
        charts.push(chart_config(
            "summary",
            "all passes: total best time",
            "ms",
            &labels,
            &summary,
            results,
            |i| results.summary(i),
            |row| json!(row.best_millis()),
        ));
        for (i, label) in labels.iter().enumerate() {
            body.push_str(&ranking_table(label, &results.summary(i)));
        }
    }

    let mut script = String::new();
    for chart in &charts {
        script.push_str(&format!("renderChart({});\n", script_safe(&chart.to_string())));
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("<style>\n");
    html.push_str(include_str!("styles.css"));
    html.push_str("</style>\n");
    html.push_str(&format!("<script src=\"{}\"></script>\n", CHART_JS_CDN));
    html.push_str("<script>\n");
    html.push_str(include_str!("chart.js"));
    html.push_str("</script>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(&format!(
        "<p>{} tests, {} parameters, {} measurements</p>\n",
        results.tests().len(),
        results.parameters().len(),
        results.len()
    ));
    html.push_str(&body);
    html.push_str("<script>\n");
    html.push_str(&script);
    html.push_str("</script>\n</body>\n</html>");
    html
}

#[allow(clippy::too_many_arguments)]
fn chart_config<R, V>(
    id: &str,
    title: &str,
    unit: &str,
    labels: &[&str],
    config: &PassConfig,
    results: &TestResults,
    ranking: R,
    value: V,
) -> Value
where
    R: Fn(usize) -> Vec<Ranked>,
    V: Fn(&Ranked) -> Value,
{
    let per_parameter: Vec<Vec<Ranked>> = (0..labels.len()).map(&ranking).collect();

    let datasets: Vec<Value> = results
        .tests()
        .iter()
        .enumerate()
        .map(|(test, name)| {
            let data: Vec<Value> = per_parameter
                .iter()
                .map(|rows| {
                    rows.iter()
                        .find(|r| r.test == test)
                        .map_or(Value::Null, &value)
                })
                .collect();
            json!({
                "label": name,
                "color": PALETTE[test % PALETTE.len()],
                "data": data,
            })
        })
        .collect();

    json!({
        "id": id,
        "title": title,
        "unit": unit,
        "labels": labels,
        "scale": if config.logarithmic { "logarithmic" } else { "linear" },
        "datasets": datasets,
    })
}

fn canvas(id: &str) -> String {
    format!("<div class=\"chart\"><canvas id=\"{}\"></canvas></div>\n", id)
}

fn ranking_table(parameter: &str, ranked: &[Ranked]) -> String {
    if ranked.is_empty() {
        return String::new();
    }
    let mut table = format!(
        "<table>\n<caption>{}</caption>\n<tr><th>#</th><th>Test</th><th>Value</th><th>Ratio</th><th>Best (ms)</th></tr>\n",
        escape_html(parameter)
    );
    for row in ranked {
        let ratio = row
            .ratio
            .map(|r| format!("{:.2}%", r * 100.0))
            .unwrap_or_else(|| "N/A".to_string());
        table.push_str(&format!(
            "<tr><td>{}</td><td class=\"name\">{}</td><td>{}</td><td>{}</td><td>{:.3}</td></tr>\n",
            row.rank,
            escape_html(&row.name),
            row.value,
            ratio,
            row.best_millis()
        ));
    }
    table.push_str("</table>\n");
    table
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON embedded in a script block must not close the block.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
