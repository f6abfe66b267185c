//! Handler for the `sqreport render` command.

use anyhow::{Context, Result};
use sqreport_config::{InputSources, RenderArgs, RenderPlan, ReportConfig};
use sqreport_core::{CoberturaOptions, HtmlOptions, PreparedReport, RenderOptions, ReportInputs};
use sqreport_html::DEFAULT_TITLE;
use sqreport_types::InputKind;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::io::{read_document, write_streamed, write_text};

/// Exit code when `--fail-on-gate` is set and the gate is not OK.
const EXIT_GATE_FAILED: i32 = 2;

/// Handle the render command.
pub(crate) fn handle(args: RenderArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReportConfig::default(),
    };
    let plan = RenderPlan::resolve(&args, &config)?;

    let inputs = read_inputs(&plan.inputs)?;
    let prepared = PreparedReport::new(&inputs)?;
    let options = render_options(&plan);

    if let Some(path) = &plan.outputs.html {
        write_text(path, &prepared.render_html(&options.html))?;
        info!(path = %path.display(), "wrote html dashboard");
    }

    if let Some(path) = &plan.outputs.cobertura {
        write_streamed(path, |w| prepared.write_cobertura(&options.cobertura, w))?;
        info!(path = %path.display(), "wrote cobertura report");
    }

    if let Some(path) = &plan.outputs.checkstyle {
        if prepared.issues.is_some() {
            write_streamed(path, |w| prepared.write_checkstyle(w).map(|_| ()))?;
            info!(path = %path.display(), "wrote checkstyle report");
        } else {
            warn!(path = %path.display(), "no issues input configured; skipping checkstyle report");
        }
    }

    if plan.fail_on_gate && !prepared.gate.passed() {
        eprintln!("Quality gate {}", prepared.gate.status);
        std::process::exit(EXIT_GATE_FAILED);
    }

    Ok(())
}

fn read_inputs(sources: &InputSources) -> Result<ReportInputs> {
    Ok(ReportInputs {
        quality_gate: read_document(InputKind::QualityGate, &sources.quality_gate)?,
        measures: read_document(InputKind::Measures, &sources.measures)?,
        issues: sources
            .issues
            .as_deref()
            .map(|path| read_document(InputKind::Issues, path))
            .transpose()?,
    })
}

fn render_options(plan: &RenderPlan) -> RenderOptions {
    let defaults = CoberturaOptions::default();
    let names = &plan.cobertura;
    RenderOptions {
        html: HtmlOptions {
            title: plan.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            generated_at: plan.timestamp.then(OffsetDateTime::now_utc),
        },
        cobertura: CoberturaOptions {
            source: names.source.clone().unwrap_or(defaults.source),
            package: names.package.clone().unwrap_or(defaults.package),
            class_name: names.class_name.clone().unwrap_or(defaults.class_name),
            filename: names.filename.clone().unwrap_or(defaults.filename),
        },
    }
}
