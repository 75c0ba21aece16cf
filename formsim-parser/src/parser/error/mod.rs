pub mod kind;

pub use formsim_error::Error;
