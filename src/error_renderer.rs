//! Error rendering using ariadne
//!
//! Errors that point into the source (parse errors) are shown with a
//! snippet; the others are rendered as a plain report.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use verba::{Engine, VerbRegistry, render_error};
///
/// let engine = Engine::new(VerbRegistry::empty());
/// if let Err(e) = engine.compile("track(name=") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diagnostic = error.to_diagnostic();
    match (error.source_text(), &diagnostic.span) {
        (Some(source), Some(_)) => render_diagnostic(source, &diagnostic, writer, use_color),
        _ => render_plain(&diagnostic, writer),
    }
}

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let span = diag
        .span
        .as_ref()
        .map(|span| span.0.clone())
        .unwrap_or(0..0);

    let mut report = Report::build(report_kind(diag.severity), (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn render_plain(diag: &Diagnostic, writer: &mut dyn Write) -> std::io::Result<()> {
    match &diag.code {
        Some(code) => writeln!(writer, "{}[{}]: {}", diag.severity, code, diag.message)?,
        None => writeln!(writer, "{}: {}", diag.severity, diag.message)?,
    }
    if let Some(help) = &diag.help {
        writeln!(writer, "  help: {help}")?;
    }
    Ok(())
}
