// Matrix file codec tests

#[cfg(test)]
mod tests {
    use crate::{read_matrix, write_matrix, MatrixFile, MTX_VERSION};
    use odkit_types::{MatrixData, MatrixKind};

    fn demand_matrix() -> MatrixFile {
        let zones = [1u32, 2, 3, 4];
        let mut file = MatrixFile::new(
            MatrixKind::Full,
            "demand",
            MatrixData::full_from_fn(&zones, |o, d| (o + d) as f64 * 0.5),
        );
        file.description = "morning peak demand".to_string();
        file
    }

    #[test]
    fn test_write_read_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Test.mtx");

        let matrix = demand_matrix();
        write_matrix(&path, &matrix).unwrap();

        let loaded = read_matrix(&path).unwrap();
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_write_read_gzipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Test.mtx.gz");

        let matrix = demand_matrix();
        write_matrix(&path, &matrix).unwrap();

        let loaded = read_matrix(&path).unwrap();
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_rejects_wrong_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.mtx");
        std::fs::write(&path, b"MTRXsomething").unwrap();
        assert!(read_matrix(&path).is_err());
    }

    #[test]
    fn test_rejects_truncated_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.mtx");

        let matrix = demand_matrix();
        write_matrix(&path, &matrix).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        assert!(read_matrix(&path).is_err());
    }

    #[test]
    fn test_rejects_missing_file() {
        let missing = std::path::Path::new("/nonexistent/Test.mtx");
        assert!(read_matrix(missing).is_err());
    }

    #[test]
    fn test_rejects_kind_shape_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conflict.mtx");

        let file = MatrixFile {
            version: MTX_VERSION,
            kind: MatrixKind::Scalar,
            name: "oops".to_string(),
            description: String::new(),
            data: MatrixData::Vector {
                zones: vec![1, 2],
                values: vec![0.0, 1.0],
            },
        };
        assert!(write_matrix(&path, &file).is_err());
    }
}
