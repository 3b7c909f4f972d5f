mod edit_store;
mod text_patcher;

pub use edit_store::EditStore;
pub use text_patcher::TextPatcher;
