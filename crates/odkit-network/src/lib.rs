mod network;
mod package;
mod selector;
pub mod fixtures;

pub use network::{Link, Mode, ModeKind, Network, Node, NodeId, TransitLine};
pub use package::{NetworkPackage, PackageInfo, PACKAGE_VERSION};
pub use selector::LineSelector;
