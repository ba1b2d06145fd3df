// Core modules implementing decoding and error modeling.
pub mod decode;
pub mod error;
