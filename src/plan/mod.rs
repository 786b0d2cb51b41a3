/// Plan domain layer: local validation rules and the wire codec.
pub mod codec;
pub mod validate;

pub use codec::{decode_routers, encode_plan};
pub use validate::{Violation, validate};
