use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::{Result, TicketError};
use std::fmt::Write;

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => render_csv(report),
    }
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    // String 寫入不會失敗
    let _ = writeln!(
        out,
        "Minimum flight times from {} for each carrier:",
        report.route
    );
    for summary in &report.carriers {
        let _ = writeln!(
            out,
            "Carrier: {}, Minimum Flight Time: {} minutes",
            summary.carrier, summary.min_flight_minutes
        );
    }

    match &report.prices {
        Some(prices) => {
            let _ = writeln!(out, "Average Price: {:.2}", prices.mean);
            let _ = writeln!(out, "Median Price: {:.2}", prices.median);
            let _ = writeln!(
                out,
                "Difference between average price and median: {:.2}",
                prices.difference
            );
        }
        None => {
            let _ = writeln!(out, "No prices available for calculation.");
        }
    }

    out
}

fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for summary in &report.carriers {
        writer.serialize(summary)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TicketError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| TicketError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
