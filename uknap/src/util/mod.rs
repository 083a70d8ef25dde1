/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::BnbConfig;
#[doc(inline)]
pub use config::MemoConfig;
