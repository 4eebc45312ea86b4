use crate::fs::IoError;

/// Blocking file access. Each call is a single native filesystem operation
/// with no state shared between calls.
pub trait FileOps {
    fn read_file_content(&self, path: &str) -> Result<String, IoError>;
    fn write_file_content(&self, path: &str, content: &str) -> Result<(), IoError>;
    fn unlink(&self, path: &str) -> Result<(), IoError>;
}
