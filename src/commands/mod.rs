mod delete;
mod read;
mod write;

pub use delete::delete;
pub use read::read;
pub use write::write;
