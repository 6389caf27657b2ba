pub mod applications;
pub mod storage_path;
