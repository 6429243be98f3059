use crate::core::{OutputFormat, OutputRecord};
use crate::utils::error::Result;
use std::io::Write;

/// Renders the full report into memory so nothing is emitted on failure.
pub fn render(records: &[OutputRecord], format: OutputFormat) -> Result<Vec<u8>> {
    tracing::debug!("--- Printing {} records as {:?} ---", records.len(), format);
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Text => write_text(&mut buffer, records)?,
        OutputFormat::Json => write_json(&mut buffer, records)?,
        OutputFormat::Csv => write_csv(&mut buffer, records)?,
    }
    Ok(buffer)
}

pub fn write_text<W: Write>(out: &mut W, records: &[OutputRecord]) -> Result<()> {
    for record in records {
        writeln!(out)?;
        writeln!(out, "{}", record.section)?;
        for item in &record.items {
            writeln!(out, "{} {:.1}%", item.name, item.rate)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, records: &[OutputRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, records: &[OutputRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["section", "name", "rate"])?;
    for record in records {
        let section = record.section.to_string();
        for item in &record.items {
            writer.write_record([
                section.as_str(),
                item.name.as_str(),
                format!("{:.1}", item.rate).as_str(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
