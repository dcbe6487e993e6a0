mod record;
mod storage;
mod storage_json;
mod storage_memory;

pub use record::TaskRecord;
pub use storage::Storage;
pub use storage_json::JsonStorage;
pub use storage_memory::MemoryStorage;
