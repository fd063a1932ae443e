mod app_error;
mod database_converter;
mod storage_error;

pub use app_error::{AppError, AppResult, ErrorKind};
pub use database_converter::DatabaseErrorConverter;
pub use storage_error::{StorageError, StorageResult};
