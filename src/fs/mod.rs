mod error;
mod local;
mod ops;

pub use error::IoError;
pub use local::LocalFs;
pub use ops::FileOps;
