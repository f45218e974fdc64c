pub mod cipher;
pub mod crack;
