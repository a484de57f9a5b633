// crates/swiftdb-core/src/loader/common_io.rs
use crate::error::{Result, SwiftDbError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, transparently unzipping `*.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SwiftDbError::DataUnavailable(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(SwiftDbError::DataUnavailable(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Reads a whole dataset file into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut stream = open_stream(path)?;
    let mut data = Vec::new();
    stream.read_to_end(&mut data).map_err(|e| {
        SwiftDbError::DataUnavailable(format!("failed to read {}: {}", path.display(), e))
    })?;
    Ok(data)
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_data_unavailable() {
        let err = read_all(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SwiftDbError::DataUnavailable(_)));
    }

    #[test]
    fn reads_plain_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        assert_eq!(read_all(file.path()).unwrap(), b"[]");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_file() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swift-data.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"{\"US\":\"United States\"}").unwrap();
        enc.finish().unwrap();

        assert_eq!(read_all(&path).unwrap(), b"{\"US\":\"United States\"}");
    }
}
