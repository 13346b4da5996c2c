mod args;

pub use args::{CliArgs, Command, CompressionLevel, ExtractArgs, NormalizeArgs};
