pub mod build;
pub mod catalog;
pub mod init;

pub use build::{build, BuildArgs};
pub use catalog::{catalog, CatalogArgs};
pub use init::{init, InitArgs};
