pub mod lyrics;
pub mod offset;
pub mod provider;
pub mod track;
pub mod value;
