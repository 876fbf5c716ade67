//! The two call styles for importing a binary matrix: through the
//! helper facade and through a parameterized module object.

use odkit_bank::Databank;
use odkit_integration_tests::write_frabitztown_matrix;
use odkit_modules::{Helper, ImportBinaryMatrix};
use odkit_session::{Module, Parameter};
use odkit_types::MatrixId;

#[test]
fn import_binary_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_frabitztown_matrix(dir.path(), "Test.mtx");

    let mut helper = Helper::new();
    helper.import_frabitztown_network(1).unwrap();
    helper.import_binary_matrix(1, 10, &path).unwrap();
}

#[test]
fn import_binary_matrix_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_frabitztown_matrix(dir.path(), "test.mtx");

    let mut helper = Helper::new();
    helper.import_frabitztown_network(1).unwrap();

    let import_module = ImportBinaryMatrix {
        name: "Importer".to_string(),
        scenario_number: Helper::create_parameter(1, "Const Number"),
        matrix_number: Helper::create_parameter(10, "Matrix Number"),
        file_location: Helper::create_parameter(path, "Matrix File Name"),
        description: Helper::create_parameter("Module Loaded".to_string(), "Description"),
        ..ImportBinaryMatrix::default()
    };
    import_module.invoke(helper.modeller()).unwrap();
}

#[test]
fn both_call_styles_are_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_frabitztown_matrix(dir.path(), "Test.mtx");

    let mut direct = Helper::new();
    direct.import_frabitztown_network(1).unwrap();
    direct.import_binary_matrix(1, 10, &path).unwrap();

    let mut via_module = Helper::new();
    via_module.import_frabitztown_network(1).unwrap();
    let module = ImportBinaryMatrix {
        name: "Importer".to_string(),
        scenario_number: Parameter::new(1, "Const Number"),
        matrix_number: Parameter::new(10, "Matrix Number"),
        file_location: Parameter::new(path, "Matrix File Name"),
        ..ImportBinaryMatrix::default()
    };
    via_module.modeller().invoke(&module).unwrap();

    let id = MatrixId::full(10);
    assert_eq!(
        direct.modeller().bank().matrix_data(id),
        via_module.modeller().bank().matrix_data(id)
    );
}
