mod export_binary_matrix;
mod export_network_package;
mod helper;
mod import_binary_matrix;
mod import_network_package;
mod reverse_transit_lines;
mod scenario;

pub use export_binary_matrix::ExportBinaryMatrix;
pub use export_network_package::ExportNetworkPackage;
pub use helper::Helper;
pub use import_binary_matrix::ImportBinaryMatrix;
pub use import_network_package::ImportNetworkPackage;
pub use reverse_transit_lines::ReverseTransitLines;
