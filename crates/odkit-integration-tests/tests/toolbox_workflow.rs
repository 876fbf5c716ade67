//! A fuller session workflow: export and re-import artifacts, reverse
//! transit lines, and check the failure diagnostics along the way.

use odkit_bank::Databank;
use odkit_integration_tests::write_frabitztown_matrix;
use odkit_modules::{
    ExportBinaryMatrix, ExportNetworkPackage, Helper, ImportNetworkPackage, ReverseTransitLines,
};
use odkit_mtx::MatrixFile;
use odkit_session::Parameter;
use odkit_types::{MatrixData, MatrixId, MatrixKind, OdkitError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn matrix_survives_export_import_cycle() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let source = write_frabitztown_matrix(dir.path(), "Test.mtx");

    let mut helper = Helper::new();
    helper.import_frabitztown_network(1).unwrap();
    helper.import_binary_matrix(1, 10, &source).unwrap();

    let exported = dir.path().join("roundtrip.mtx.gz");
    let export = ExportBinaryMatrix {
        matrix_number: Parameter::new(10, "Matrix Number"),
        file_location: Parameter::new(exported.clone(), "File Location"),
        ..ExportBinaryMatrix::default()
    };
    helper.modeller().invoke(&export).unwrap();

    helper.import_binary_matrix(1, 11, &exported).unwrap();

    let bank = helper.modeller().bank();
    assert_eq!(
        bank.matrix_data(MatrixId::full(10)),
        bank.matrix_data(MatrixId::full(11))
    );
}

#[test]
fn network_package_moves_scenario_between_sessions() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("frabitztown.nwp");

    let mut origin = Helper::new();
    origin.import_frabitztown_network(1).unwrap();
    let export = ExportNetworkPackage {
        scenario_number: Parameter::new(1, "Scenario Number"),
        file_location: Parameter::new(package.clone(), "File Location"),
        comment: Parameter::new("moving day".to_string(), "Export Comment"),
        ..ExportNetworkPackage::default()
    };
    origin.modeller().invoke(&export).unwrap();

    let mut target = Helper::new();
    let import = ImportNetworkPackage {
        scenario_number: Parameter::new(5, "Scenario Number"),
        file_location: Parameter::new(package, "File Location"),
        ..ImportNetworkPackage::default()
    };
    target.modeller().invoke(&import).unwrap();

    let imported = target.modeller().bank().scenario(5).unwrap();
    assert_eq!(imported.network.zone_system().len(), 4);
    assert_eq!(imported.network.transit_line_count(), 3);
    assert_eq!(imported.title, "Frabitztown");
}

#[test]
fn reversed_lines_can_carry_matrices_afterwards() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let source = write_frabitztown_matrix(dir.path(), "Test.mtx");

    let mut helper = Helper::new();
    helper.import_frabitztown_network(1).unwrap();

    let reverse = ReverseTransitLines {
        line_selector_expression: Parameter::new("all".to_string(), "Line Selector"),
        ..ReverseTransitLines::default()
    };
    let report = helper.modeller().invoke(&reverse).unwrap();
    assert_eq!(report.message, "Done. 3 lines reversed.");

    // The network is still a valid import target afterwards
    helper.import_binary_matrix(1, 10, &source).unwrap();
    assert_eq!(
        helper.modeller().bank().scenario(1).unwrap().network.transit_line_count(),
        6
    );
}

#[test]
fn zone_mismatch_is_diagnosed_in_the_logbook() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.mtx");
    let file = MatrixFile::new(
        MatrixKind::Full,
        "foreign demand",
        MatrixData::full_uniform(&[1, 2, 3, 4, 5], 1.0),
    );
    odkit_mtx::write_matrix(&path, &file).unwrap();

    let mut helper = Helper::new();
    helper.import_frabitztown_network(1).unwrap();
    let err = helper.import_binary_matrix(1, 10, &path).unwrap_err();
    assert!(matches!(err, OdkitError::ZoneMismatch(_)));
    assert!(err.to_string().contains("Check logbook"));

    let logbook = helper.modeller().logbook();
    assert!(!logbook.find("Zones in matrix file but not in scenario").is_empty());
    assert!(!logbook.find("5").is_empty());
}
