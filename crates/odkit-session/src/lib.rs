mod config;
mod logbook;
mod module;
mod parameter;
mod session;

pub use config::SessionConfig;
pub use logbook::{Logbook, LogbookEntry};
pub use module::{Module, ModuleReport};
pub use parameter::Parameter;
pub use session::ModellerSession;
