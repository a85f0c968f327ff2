pub mod info;
pub mod run;

pub use info::*;
pub use run::*;
