pub mod use_remote;

pub use use_remote::use_remote;
pub use use_remote::Remote;
