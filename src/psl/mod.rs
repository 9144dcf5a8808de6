#[cfg(feature = "download")]
pub mod auto_loader;
pub mod list;
pub mod loader;

#[cfg(feature = "download")]
pub use auto_loader::AutoPslLoader;
pub use list::{Section, SuffixList};
pub use loader::{
    FilePslLoader, MemoryPslLoader, NilPslLoader, PslLoader, DEFAULT_PSL_FILENAME,
    DEFAULT_PSL_URL, DEFAULT_UPDATE_INTERVAL,
};
