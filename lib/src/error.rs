use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("couldn't read the providers prelude from {path}")]
    ReadPrelude { path: &'static str, source: io::Error },
    #[error("couldn't write the generated config to {path}")]
    WriteConfig { path: &'static str, source: io::Error },
}
