pub mod command;

pub use command::kv_store::KeyValueStoreImpl;
