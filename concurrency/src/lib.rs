//! Small synchronization primitives shared by the spanning-forest engines.

pub(crate) mod lock_table;
pub(crate) mod notification;

pub use lock_table::LockTable;
pub use notification::Notification;
