pub mod paths;
pub mod shutdown;

pub use paths::*;
pub use shutdown::*;
