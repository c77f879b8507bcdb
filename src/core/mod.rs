pub mod directory;
pub mod engine;
pub mod session;

pub use crate::domain::model::{Entry, Person, Pet, SessionSignal};
pub use crate::domain::ports::{ConfigProvider, InputSource, Keyed, OutputSink};
pub use crate::utils::error::Result;
