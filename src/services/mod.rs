pub mod detect;
pub mod fs_ops;
pub mod identity;
pub mod listing;
pub mod urls;
