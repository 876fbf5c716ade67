// Cross-type tests for the shared toolkit types

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn test_matrix_id_display_parse() {
        let id = MatrixId::full(10);
        assert_eq!(id.to_string(), "mf10");
        assert_eq!(MatrixId::parse("mf10").unwrap(), id);

        let id = MatrixId::new(MatrixKind::Scalar, 3);
        assert_eq!(id.to_string(), "ms3");
        assert_eq!(MatrixId::parse("ms3").unwrap(), id);
    }

    #[test]
    fn test_matrix_id_rejects_garbage() {
        assert!(MatrixId::parse("").is_err());
        assert!(MatrixId::parse("mf").is_err());
        assert!(MatrixId::parse("zz10").is_err());
        assert!(MatrixId::parse("mf-1").is_err());
    }

    #[test]
    fn test_matrix_id_rejects_non_ascii() {
        assert!(MatrixId::parse("mé10").is_err());
        assert!(MatrixId::parse("é").is_err());
        // Corrupt snapshot keys surface as errors, not panics
        assert!(serde_json::from_str::<MatrixId>("\"mé10\"").is_err());
    }

    #[test]
    fn test_kind_type_numbers() {
        for kind in MatrixKind::all() {
            assert_eq!(
                MatrixKind::from_type_number(kind.type_number()).unwrap(),
                *kind
            );
        }
        assert!(MatrixKind::from_type_number(0).is_err());
        assert!(MatrixKind::from_type_number(5).is_err());
    }

    #[test]
    fn test_zone_system_differences() {
        let a = ZoneSystem::from_zones([1, 2, 3]);
        let b = ZoneSystem::from_zones([2, 3, 4]);

        assert!(!a.matches(&b));
        assert_eq!(a.missing_from(&b), vec![1]);
        assert_eq!(b.missing_from(&a), vec![4]);

        let c = ZoneSystem::from_zones([3, 2, 1]);
        assert!(a.matches(&c));
    }

    #[test]
    fn test_full_matrix_shape_and_lookup() {
        let zones = [1u32, 2, 3];
        let data = MatrixData::full_from_fn(&zones, |o, d| (o * 10 + d) as f64);

        data.check_shape().unwrap();
        assert!(data.is_square());
        assert_eq!(data.value_count(), 9);
        assert_eq!(data.get(2, 3), Some(23.0));
        assert_eq!(data.get(2, 9), None);
    }

    #[test]
    fn test_asymmetric_full_matrix_detected() {
        let data = MatrixData::Full {
            origins: vec![1, 2],
            destinations: vec![1, 3],
            values: vec![0.0; 4],
        };
        assert!(!data.is_square());
    }

    #[test]
    fn test_bad_value_buffer_rejected() {
        let data = MatrixData::Full {
            origins: vec![1, 2],
            destinations: vec![1, 2],
            values: vec![0.0; 3],
        };
        assert!(data.check_shape().is_err());

        let data = MatrixData::Vector {
            zones: vec![1, 2, 3],
            values: vec![0.0; 2],
        };
        assert!(data.check_shape().is_err());
    }

    #[test]
    fn test_matrix_data_serialization_roundtrip() {
        let data = MatrixData::full_uniform(&[1, 2, 3, 4], 0.25);
        let json = serde_json::to_string(&data).unwrap();
        let back: MatrixData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }

    proptest! {
        #[test]
        fn prop_matrix_id_roundtrip(number in 0u16..1000) {
            for kind in MatrixKind::all() {
                let id = MatrixId::new(*kind, number);
                let parsed = MatrixId::parse(&id.to_string()).unwrap();
                prop_assert_eq!(parsed, id);
            }
        }
    }
}
