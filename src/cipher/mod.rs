pub mod columnar;
pub mod disrupted_count;
pub mod disrupted_line;
pub mod grid;
pub mod key;
pub mod myszkowski;
pub mod route;
pub mod simple;
pub mod walk;

pub use columnar::*;
pub use disrupted_count::*;
pub use disrupted_line::*;
pub use grid::*;
pub use key::*;
pub use myszkowski::*;
pub use route::*;
pub use simple::*;
pub use walk::*;
