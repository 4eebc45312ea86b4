use crate::fs::{FileOps, IoError};

pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOps for LocalFs {
    fn read_file_content(&self, path: &str) -> Result<String, IoError> {
        std::fs::read_to_string(path).map_err(IoError::from)
    }

    fn write_file_content(&self, path: &str, content: &str) -> Result<(), IoError> {
        std::fs::write(path, content).map_err(IoError::from)
    }

    fn unlink(&self, path: &str) -> Result<(), IoError> {
        std::fs::remove_file(path).map_err(IoError::from)
    }
}
