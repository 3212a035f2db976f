//! Native dataset file loading.
//!
//! Memory-maps the file, decodes it tolerantly (UTF-8 with BOM
//! handling), and parses data rows in parallel. Only the startup path
//! uses this; the wasm build embeds its dataset and goes through
//! [`super::parse_records`] directly.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use memmap2::Mmap;
use rayon::prelude::*;

use super::{line_ranges, parse_record, ColumnIndices, LaunchDataset, LaunchRecord};
use crate::error::LoadError;

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<LaunchDataset, LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io { path: path.to_path_buf(), source };

    let file = fs::File::open(path).map_err(io_err)?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
    let (text, _, _) = UTF_8.decode(mmap.as_ref());

    let ranges = line_ranges(text.as_bytes());
    let header_pos = ranges
        .iter()
        .position(|&(s, e)| !text[s..e].trim().is_empty())
        .ok_or(LoadError::MissingHeader)?;
    let (hs, he) = ranges[header_pos];
    let columns = ColumnIndices::from_header(text[hs..he].trim_end_matches('\r'))?;

    let records: Vec<LaunchRecord> = ranges[header_pos + 1..]
        .par_iter()
        .filter_map(|&(s, e)| parse_record(text[s..e].trim_end_matches('\r'), &columns))
        .collect();

    tracing::debug!(rows = records.len(), path = %path.display(), "dataset loaded");
    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_a_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Launch Site,class,Payload Mass (kg)\n\
             CCAFS LC-40,1,500.0\n\
             VAFB SLC-4E,0,9600.0\n"
        )
        .unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);

        let bounds = dataset.payload_bounds();
        assert_eq!((bounds.low, bounds.high), (500.0, 9600.0));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_dataset("/nonexistent/launches.csv").unwrap_err();
        match err {
            LoadError::Io { path, .. } => {
                assert_eq!(path.to_string_lossy(), "/nonexistent/launches.csv");
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
