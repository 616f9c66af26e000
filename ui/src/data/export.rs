//! Serialization of the filtered view for download.

use super::loader::DataError;
use super::record::{SalaryRecord, CSV_HEADERS};

/// UTF-8 CSV bytes of the filtered rows in the original column order.
/// Re-parsing the output with `loader::parse_dataset` reproduces the rows.
pub fn filtered_csv(records: &[SalaryRecord]) -> Result<Vec<u8>, DataError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        if records.is_empty() {
            // serialize() only emits headers alongside the first row; an empty
            // export should still carry the schema.
            writer.write_record(CSV_HEADERS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Pretty-printed JSON array of the filtered rows, same field names as the CSV.
pub fn filtered_json(records: &[SalaryRecord]) -> Result<String, DataError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_dataset;

    fn sample() -> Vec<SalaryRecord> {
        vec![
            SalaryRecord {
                year: 2020,
                seniority: "junior".into(),
                contract: "full-time".into(),
                company_size: "M".into(),
                title: "Data Scientist".into(),
                remote: "remoto".into(),
                residence_iso3: "BRA".into(),
                usd: 45_000.0,
            },
            SalaryRecord {
                year: 2023,
                seniority: "senior".into(),
                contract: "contract".into(),
                company_size: "L".into(),
                title: "ML Engineer, Platform".into(), // comma forces quoting
                remote: "hibrido".into(),
                residence_iso3: "USA".into(),
                usd: 210_500.25,
            },
        ]
    }

    #[test]
    fn csv_round_trips_through_the_loader() {
        let records = sample();
        let bytes = filtered_csv(&records).expect("export should serialize");
        let text = String::from_utf8(bytes).expect("export is UTF-8");
        let reparsed = parse_dataset(&text).expect("export should re-parse");
        assert_eq!(reparsed, records);
    }

    #[test]
    fn csv_header_matches_the_source_schema() {
        let bytes = filtered_csv(&sample()).expect("export should serialize");
        let text = String::from_utf8(bytes).expect("export is UTF-8");
        let header = text.lines().next().expect("header line present");
        assert_eq!(header, CSV_HEADERS.join(","));
    }

    #[test]
    fn empty_export_still_carries_the_schema() {
        let bytes = filtered_csv(&[]).expect("empty export should serialize");
        let text = String::from_utf8(bytes).expect("export is UTF-8");
        assert_eq!(text.trim_end(), CSV_HEADERS.join(","));
        assert!(parse_dataset(&text)
            .expect("header-only export re-parses")
            .is_empty());
    }

    #[test]
    fn json_exports_one_object_per_row() {
        let json = filtered_json(&sample()).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let rows = value.as_array().expect("array of rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["cargo"], "Data Scientist");
        assert_eq!(rows[1]["usd"], 210_500.25);
    }
}
