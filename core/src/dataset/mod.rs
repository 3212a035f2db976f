//! The loaded launch-record table.
//!
//! One launch attempt per row, parsed from a fixed-schema delimited file.
//! Required columns are located by header name (`Launch Site`,
//! `Payload Mass (kg)`, `class`) so column order and extra columns do not
//! matter. The table is immutable after load; every view the dashboard
//! renders is derived from it on demand.

use memchr::{memchr, memchr_iter};

use launchboard_types::PayloadRange;

use crate::error::LoadError;

#[cfg(not(target_arch = "wasm32"))]
mod reader;
#[cfg(not(target_arch = "wasm32"))]
pub use reader::load_dataset;

/// One row of the dataset: a single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// `None` when the source row left the payload cell empty. Such rows
    /// still count for site/outcome aggregation but are excluded from
    /// payload-bounded views and from the global bounds.
    pub payload_mass_kg: Option<f64>,
    /// Outcome indicator as logged: 1 = success, 0 = failure. Stored raw
    /// so an out-of-domain value is counted as neither.
    pub outcome: u8,
}

/// Header positions of the required columns.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndices {
    site: usize,
    payload: usize,
    outcome: usize,
}

const SITE_COLUMN: &str = "Launch Site";
const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
const OUTCOME_COLUMN: &str = "class";

impl ColumnIndices {
    pub(crate) fn from_header(header: &str) -> Result<Self, LoadError> {
        let fields = split_fields(header);
        let find = |name: &'static str| {
            fields
                .iter()
                .position(|f| *f == name)
                .ok_or(LoadError::MissingColumn { name })
        };
        Ok(Self {
            site: find(SITE_COLUMN)?,
            payload: find(PAYLOAD_COLUMN)?,
            outcome: find(OUTCOME_COLUMN)?,
        })
    }
}

/// The immutable in-memory table plus the aggregates derived at load
/// time: the sorted distinct site list and the global payload bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: Option<(f64, f64)>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        let mut bounds: Option<(f64, f64)> = None;
        for mass in records.iter().filter_map(|r| r.payload_mass_kg) {
            bounds = Some(match bounds {
                None => (mass, mass),
                Some((lo, hi)) => (lo.min(mass), hi.max(mass)),
            });
        }

        Self { records, sites, payload_bounds: bounds }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct site identifiers present in the table, sorted.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Min/max of all defined payload masses; `[0, 0]` for a table with
    /// no defined payloads.
    pub fn payload_bounds(&self) -> PayloadRange {
        let (low, high) = self.payload_bounds.unwrap_or((0.0, 0.0));
        PayloadRange::new(low, high)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse delimited text into a dataset.
///
/// The first non-empty line is the header. Malformed data rows are
/// skipped with a debug log; only a missing header or a missing required
/// column fails the load.
pub fn parse_records(input: &str) -> Result<LaunchDataset, LoadError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = line_ranges(input.as_bytes())
        .into_iter()
        .map(|(s, e)| input[s..e].trim_end_matches('\r'));

    let header = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .ok_or(LoadError::MissingHeader)?;
    let columns = ColumnIndices::from_header(header)?;

    let records: Vec<LaunchRecord> = lines
        .filter_map(|line| {
            let parsed = parse_record(line, &columns);
            if parsed.is_none() && !line.trim().is_empty() {
                tracing::debug!(line, "skipping malformed dataset row");
            }
            parsed
        })
        .collect();

    Ok(LaunchDataset::from_records(records))
}

/// Byte ranges of the non-empty lines of `bytes`.
pub(crate) fn line_ranges(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        if end > start {
            ranges.push((start, end));
        }
        start = end + 1;
    }
    if start < bytes.len() {
        ranges.push((start, bytes.len()));
    }
    ranges
}

/// Parse one data row against the resolved column positions.
///
/// Returns `None` for rows that cannot yield a valid record: too few
/// fields, empty site, unparseable or negative payload, unparseable
/// outcome.
pub(crate) fn parse_record(line: &str, columns: &ColumnIndices) -> Option<LaunchRecord> {
    let fields = split_fields(line);

    let site = fields.get(columns.site)?.trim();
    if site.is_empty() {
        return None;
    }

    let raw_payload = fields.get(columns.payload)?.trim();
    let payload_mass_kg = if raw_payload.is_empty() {
        None
    } else {
        let mass = raw_payload.parse::<f64>().ok()?;
        if !mass.is_finite() || mass < 0.0 {
            return None;
        }
        Some(mass)
    };

    let outcome = fields.get(columns.outcome)?.trim().parse::<u8>().ok()?;

    Some(LaunchRecord {
        site: site.to_string(),
        payload_mass_kg,
        outcome,
    })
}

/// Split a delimited line into trimmed fields.
///
/// Commas inside double-quoted fields do not split; the surrounding
/// quotes are stripped from the field value.
fn split_fields(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => match memchr(b'"', &bytes[i + 1..]) {
                Some(off) => i += off + 2,
                None => break,
            },
            b',' => {
                fields.push(line[start..i].trim().trim_matches('"'));
                start = i + 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    fields.push(line[start..].trim().trim_matches('"'));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Unnamed: 0,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
";

    #[test]
    fn parses_rows_and_derives_aggregates() {
        let dataset = parse_records(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);

        let bounds = dataset.payload_bounds();
        assert_eq!(bounds.low, 0.0);
        assert_eq!(bounds.high, 525.0);
    }

    #[test]
    fn header_order_does_not_matter() {
        let input = "class,Payload Mass (kg),Launch Site\n1,2500.0,KSC LC-39A\n";
        let dataset = parse_records(input).unwrap();
        assert_eq!(
            dataset.records(),
            [LaunchRecord {
                site: "KSC LC-39A".to_string(),
                payload_mass_kg: Some(2500.0),
                outcome: 1,
            }]
        );
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let input = "Launch Site,class\nKSC LC-39A,1\n";
        let err = parse_records(input).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { name: "Payload Mass (kg)" }
        ));
    }

    #[test]
    fn empty_input_is_a_missing_header() {
        assert!(matches!(parse_records(""), Err(LoadError::MissingHeader)));
        assert!(matches!(parse_records("\n\n"), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let input = "Launch Site,class,Payload Mass (kg)\n\
                     KSC LC-39A,1,2500.0\n\
                     ,1,100.0\n\
                     KSC LC-39A,not-a-number,100.0\n\
                     KSC LC-39A,1,-5.0\n";
        let dataset = parse_records(input).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn missing_payload_is_kept_but_excluded_from_bounds() {
        let input = "Launch Site,class,Payload Mass (kg)\n\
                     KSC LC-39A,1,\n\
                     KSC LC-39A,0,600.0\n";
        let dataset = parse_records(input).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].payload_mass_kg, None);

        let bounds = dataset.payload_bounds();
        assert_eq!((bounds.low, bounds.high), (600.0, 600.0));
    }

    #[test]
    fn quoted_fields_and_crlf_are_handled() {
        let input = "Launch Site,class,Payload Mass (kg)\r\n\
                     \"CCAFS LC-40\",1,\"3,170\"\r\n";
        // The quoted payload contains a comma and is not a plain number;
        // the row is skipped rather than mis-split.
        let dataset = parse_records(input).unwrap();
        assert_eq!(dataset.len(), 0);

        let input = "Launch Site,class,Payload Mass (kg)\r\n\"CCAFS LC-40\",1,3170.0\r\n";
        let dataset = parse_records(input).unwrap();
        assert_eq!(dataset.records()[0].site, "CCAFS LC-40");
        assert_eq!(dataset.records()[0].payload_mass_kg, Some(3170.0));
    }

    #[test]
    fn bom_prefix_is_stripped() {
        let input = "\u{feff}Launch Site,class,Payload Mass (kg)\nKSC LC-39A,1,100.0\n";
        let dataset = parse_records(input).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
