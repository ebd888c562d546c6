//! Various commands that can be executed by svg2jsx
mod convert;
mod serve;

pub use convert::Convert;
pub use serve::Serve;
