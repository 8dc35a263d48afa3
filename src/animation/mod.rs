//! Offset generators pulled once per rendered frame.
//!
//! Both generators are infinite: once their motion is over they keep
//! returning their resting offset. Restarting means building a new one.

pub mod shake;
pub mod transpose;

pub use shake::Shake;
pub use transpose::Transpose;
