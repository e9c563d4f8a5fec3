//! Icon Packer Implementations

mod windows_ico;

pub use windows_ico::{IcoPacker, ICO_MAX_SIZE};
