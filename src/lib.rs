pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{StdinSource, StdoutSink},
    CliConfig,
};

pub use core::{
    directory::{seed_entries, Directory},
    engine::SessionEngine,
    session::QuerySession,
};
pub use domain::model::{Entry, Person, Pet, SessionSignal};
pub use utils::error::{Result, SessionError};
