pub mod db_data;
pub mod kv_store;
