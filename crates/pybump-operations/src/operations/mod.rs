mod bump;
mod transaction;

pub use bump::{BumpOperation, bump_project};
pub use transaction::{TransactionalWriter, backup_path_for};
