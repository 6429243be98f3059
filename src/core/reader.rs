use crate::core::{Dataset, IntervalRecord, SamplePoint, Storage};
use crate::utils::error::{Result, UtilizationError};

/// Reads `path` through `storage` and parses it into a [`Dataset`].
pub fn read_dataset<S: Storage>(storage: &S, path: &str) -> Result<Dataset> {
    tracing::debug!("--- Reading {} ---", path);
    let bytes = storage.read_file(path)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        UtilizationError::parse(
            line,
            format!("input is not valid UTF-8: {}", e.utf8_error()),
        )
    })?;
    parse(&text)
}

/// Parses the line-oriented input format.
///
/// The first non-empty line lists the sample points. Every following non-empty
/// line is an interval record: `name start stop count`.
pub fn parse(text: &str) -> Result<Dataset> {
    let mut series: Option<Vec<SamplePoint>> = None;
    let mut intervals = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        tracing::debug!(">>> {}", line);

        if series.is_none() {
            series = Some(parse_series(line_no, line)?);
        } else {
            intervals.push(parse_record(line_no, line)?);
        }
    }

    let series = series.unwrap_or_default();
    tracing::debug!(
        "Read {} sample points and {} interval records",
        series.len(),
        intervals.len()
    );

    Ok(Dataset { series, intervals })
}

fn parse_series(line_no: usize, line: &str) -> Result<Vec<SamplePoint>> {
    line.split_whitespace()
        .map(|token| parse_int(line_no, "sample point", token))
        .collect()
}

fn parse_record(line_no: usize, line: &str) -> Result<IntervalRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [name, start, stop, count] = tokens.as_slice() else {
        return Err(UtilizationError::parse(
            line_no,
            format!(
                "expected 4 tokens 'name start stop count', found {}",
                tokens.len()
            ),
        ));
    };

    let record = IntervalRecord::new(
        *name,
        parse_int(line_no, "start", start)?,
        parse_int(line_no, "stop", stop)?,
        parse_int(line_no, "count", count)?,
    );

    if record.stop <= record.start {
        tracing::warn!(
            "Interval '{}' at line {} has stop {} <= start {} and is never active",
            record.name,
            line_no,
            record.stop,
            record.start
        );
    }
    tracing::debug!(
        "Data: {} = {}-{} : {}",
        record.name,
        record.start,
        record.stop,
        record.count
    );

    Ok(record)
}

fn parse_int(line_no: usize, field: &str, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| {
        UtilizationError::parse(line_no, format!("invalid {} '{}': {}", field, token, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_and_records() {
        let dataset = parse("5 15\nA 0 10 5\nB 10 20 10\n").unwrap();

        assert_eq!(dataset.series, vec![5, 15]);
        assert_eq!(
            dataset.intervals,
            vec![
                IntervalRecord::new("A", 0, 10, 5),
                IntervalRecord::new("B", 10, 20, 10),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dataset = parse("\n\n  3 1 3  \n\nA 0 4 2\n\t\nB 1 2 1").unwrap();

        assert_eq!(dataset.series, vec![3, 1, 3]);
        assert_eq!(dataset.intervals.len(), 2);
        assert_eq!(dataset.intervals[1].name, "B");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let dataset = parse("1\nA 0 2 1\nA 0 2 3").unwrap();
        assert_eq!(dataset.intervals.len(), 2);
    }

    #[test]
    fn test_empty_input_gives_empty_dataset() {
        assert_eq!(parse("").unwrap(), Dataset::default());
        assert_eq!(parse("\n  \n").unwrap(), Dataset::default());
    }

    #[test]
    fn test_missing_token_reports_line() {
        let err = parse("5\nA 0 10 5\nB 10 20\n").unwrap_err();
        match err {
            UtilizationError::ParseError { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("found 3"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extra_token_is_rejected() {
        let err = parse("5\nA 0 10 5 7\n").unwrap_err();
        assert!(matches!(err, UtilizationError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_non_integer_tokens_are_rejected() {
        assert!(matches!(
            parse("5 x\nA 0 10 5").unwrap_err(),
            UtilizationError::ParseError { line: 1, .. }
        ));
        assert!(matches!(
            parse("5\nA 0 1.5 5").unwrap_err(),
            UtilizationError::ParseError { line: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_utf8_reports_offending_line() {
        struct BytesStorage(Vec<u8>);

        impl Storage for BytesStorage {
            fn read_file(&self, _path: &str) -> Result<Vec<u8>> {
                Ok(self.0.clone())
            }

            fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
                Ok(())
            }
        }

        let storage = BytesStorage(b"5 15\nA 0 10 5\nB\xff 10 20 10\n".to_vec());
        let err = read_dataset(&storage, "input.txt").unwrap_err();

        match err {
            UtilizationError::ParseError { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_inverted_interval_is_accepted() {
        let dataset = parse("5\nZ 9 3 4").unwrap();
        assert_eq!(dataset.intervals, vec![IntervalRecord::new("Z", 9, 3, 4)]);
    }
}
