use std::path::Path;

use csv::{Terminator, WriterBuilder};

use super::row::{HEADER, ResultRow};
use crate::error::CloudIpError;

#[cfg(windows)]
const LINE_TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const LINE_TERMINATOR: Terminator = Terminator::Any(b'\n');

/// Write a header row followed by one tab-separated line per result
pub fn write_tsv(path: &Path, rows: &[ResultRow]) -> Result<(), CloudIpError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(LINE_TERMINATOR)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{Provider, Remark};
    use std::fs;

    fn sample_rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                domain: "storage.googleapis.com".to_string(),
                address: Some("34.1.210.1".parse().unwrap()),
                remark: Remark::Cloud(Provider::Gcp),
            },
            ResultRow {
                domain: "example.com".to_string(),
                address: Some("192.0.2.1".parse().unwrap()),
                remark: Remark::NotCloud,
            },
            ResultRow {
                domain: "bogus.invalid-tld".to_string(),
                address: None,
                remark: Remark::Unresolved,
            },
        ]
    }

    #[test]
    fn written_file_reads_back_as_same_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        let rows = sample_rows();

        write_tsv(&path, &rows).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let records: Vec<[String; 3]> = reader
            .records()
            .map(|record| {
                let record = record.unwrap();
                [
                    record[0].to_string(),
                    record[1].to_string(),
                    record[2].to_string(),
                ]
            })
            .collect();
        let expected: Vec<[String; 3]> = rows.iter().map(ResultRow::cells).collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn lines_are_tab_separated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");

        write_tsv(&path, &sample_rows()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Domain\tIP\tRemark");
        assert_eq!(
            lines[1],
            "storage.googleapis.com\t34.1.210.1\tGoogle Cloud Platform"
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("result.txt");
        assert!(write_tsv(&path, &sample_rows()).is_err());
    }
}
