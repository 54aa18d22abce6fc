mod setup;

pub use setup::Cli;
