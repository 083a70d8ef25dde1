mod export;
mod import;

/// External (serializable) representations of instances and solutions.
pub mod ext_repr;

/// Exports a solution out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;
