pub mod init;
pub mod push;

pub use init::*;
pub use push::*;
