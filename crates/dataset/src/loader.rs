use crate::error::DataError;
use core_types::PriceBar;
use std::path::Path;

/// Decodes an input file into an in-memory price table.
///
/// The pipeline treats the decoder as opaque: any implementation that
/// returns time-ordered rows (or the contract's failure modes) works. The
/// runner holds a `Box<dyn TableLoader>`, which also gives tests an
/// injection point for failures.
pub trait TableLoader {
    fn load(&self, path: &Path) -> Result<Vec<PriceBar>, DataError>;
}

/// The production decoder: CSV with a header row.
///
/// Columns are matched by name; anything beyond `close` is ignored.
pub struct CsvTableLoader;

impl TableLoader for CsvTableLoader {
    fn load(&self, path: &Path) -> Result<Vec<PriceBar>, DataError> {
        if !path.is_file() {
            return Err(DataError::NotFound(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        if headers.len() == 0 {
            return Err(DataError::EmptyFile);
        }
        if !headers.iter().any(|h| h == "close") {
            return Err(DataError::MissingColumn {
                found: headers.iter().map(String::from).collect(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<PriceBar>() {
            rows.push(record?);
        }
        if rows.is_empty() {
            return Err(DataError::NoRows);
        }

        tracing::info!("Data loaded: {} rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_close_column_in_row_order() {
        let file = write_csv("close\n1\n2.5\n3\n");
        let rows = CsvTableLoader.load(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].close, dec!(1));
        assert_eq!(rows[1].close, dec!(2.5));
        assert_eq!(rows[2].close, dec!(3));
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_csv("open,close,volume\n1,2,100\n3,4,200\n");
        let rows = CsvTableLoader.load(file.path()).unwrap();
        assert_eq!(rows[1].close, dec!(4));
    }

    #[test]
    fn rejects_missing_file() {
        let err = CsvTableLoader.load(Path::new("/no/such/input.csv")).unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn rejects_empty_file() {
        let file = write_csv("");
        assert!(matches!(
            CsvTableLoader.load(file.path()).unwrap_err(),
            DataError::EmptyFile
        ));
    }

    #[test]
    fn rejects_missing_close_column() {
        let file = write_csv("price,volume\n1,100\n");
        let err = CsvTableLoader.load(file.path()).unwrap_err();
        match err {
            DataError::MissingColumn { found } => {
                assert_eq!(found, vec!["price".to_string(), "volume".to_string()]);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_message_names_what_was_found() {
        let file = write_csv("price\n1\n");
        let message = CsvTableLoader.load(file.path()).unwrap_err().to_string();
        assert!(message.contains("close"));
        assert!(message.contains("price"));
    }

    #[test]
    fn rejects_header_only_file() {
        let file = write_csv("close\n");
        assert!(matches!(
            CsvTableLoader.load(file.path()).unwrap_err(),
            DataError::NoRows
        ));
    }

    #[test]
    fn rejects_non_numeric_close() {
        let file = write_csv("close\nabc\n");
        assert!(matches!(
            CsvTableLoader.load(file.path()).unwrap_err(),
            DataError::Malformed(_)
        ));
    }
}
