pub mod config;
pub mod generate;
pub mod layout;
pub mod render;
pub mod scratch;
pub mod skin;
pub mod tree;
