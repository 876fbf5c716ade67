mod bank;
mod memory;

pub use bank::{BankSnapshot, Databank, Matrix, Scenario};
pub use memory::MemoryBank;

#[cfg(test)]
mod tests;
