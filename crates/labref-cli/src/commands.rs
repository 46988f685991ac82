use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use labref_cli::logging::redact_value;
use labref_cli::report::{Report, ReportOptions, build_report};
use labref_ingest::{read_catalog, read_result_sheet};
use labref_model::RangeDescriptor;
use labref_range::{classify, parse_measurement, parse_range, presentation_for};

use crate::cli::{ClassifyArgs, ParseArgs, ReportArgs};
use crate::types::ClassifiedValue;

pub fn run_parse(args: &ParseArgs) -> Option<RangeDescriptor> {
    let descriptor = parse_range(&args.text);
    debug!(
        structured = descriptor.is_some(),
        kind = descriptor.as_ref().map(|range| range.kind().as_str()),
        "parsed reference text"
    );
    descriptor
}

pub fn run_classify(args: &ClassifyArgs) -> (Option<RangeDescriptor>, Vec<ClassifiedValue>) {
    let descriptor = parse_range(&args.reference);
    if descriptor.is_none() {
        info!(
            reference = %args.reference,
            "reference has no structured range; every value is NORMAL"
        );
    }
    let classified = args
        .values
        .iter()
        .map(|value| {
            let status = classify(value.as_str(), descriptor.as_ref());
            debug!(value = redact_value(value), %status, "classified value");
            ClassifiedValue {
                value: value.clone(),
                measurement: parse_measurement(value),
                status,
                presentation: presentation_for(status),
            }
        })
        .collect();
    (descriptor, classified)
}

pub fn run_report(args: &ReportArgs) -> Result<Report> {
    let span = info_span!("report", sheet = %args.sheet.display());
    let _guard = span.enter();

    let sheet = read_result_sheet(&args.sheet)
        .with_context(|| format!("load result sheet {}", args.sheet.display()))?;
    let catalog = match &args.catalog {
        Some(path) => {
            read_catalog(path).with_context(|| format!("load catalog {}", path.display()))?
        }
        None => Vec::new(),
    };
    debug!(
        results = sheet.results.len(),
        catalog = catalog.len(),
        "inputs loaded"
    );

    let report = build_report(
        &sheet,
        &catalog,
        ReportOptions {
            sex: args.sex,
            flagged_only: args.flagged_only,
        },
    );
    info!(
        total = report.summary.total,
        flagged = report.summary.flagged(),
        high = report.summary.high,
        low = report.summary.low,
        boundary = report.summary.boundary,
        "report evaluated"
    );
    Ok(report)
}
