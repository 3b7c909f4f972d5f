mod edit_store;
mod text_patcher;

pub use edit_store::FileSystemEditStore;
pub use text_patcher::SectionTextPatcher;
