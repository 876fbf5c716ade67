// Snapshot serialization tests for the databank

#[cfg(test)]
mod tests {
    use crate::{BankSnapshot, Databank, MemoryBank};
    use odkit_network::fixtures::frabitztown;
    use odkit_types::{MatrixData, MatrixId};

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let mut bank = MemoryBank::new();
        bank.create_scenario(1, "base", frabitztown()).unwrap();
        let id = MatrixId::full(10);
        bank.init_matrix(id, "demand", "peak demand").unwrap();
        bank.set_matrix_data(id, MatrixData::full_uniform(&[1, 2, 3, 4], 2.5))
            .unwrap();

        let snapshot = bank.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BankSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = MemoryBank::new();
        restored.restore(&back).unwrap();
        assert_eq!(restored.scenario(1), bank.scenario(1));
        assert_eq!(restored.matrix_data(id), bank.matrix_data(id));
    }
}
