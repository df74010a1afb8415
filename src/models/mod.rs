pub mod asset;
pub mod request;
pub mod wire;

pub use asset::*;
pub use request::*;
pub use wire::*;
