pub mod commands;
pub mod output;

pub use commands::{
    CliArgs, Commands, ConfigsArgs, GenerateArgs, ListArgs, ListTable, PathArgs, ScriptsArgs,
    ShowConfigArgs,
};
pub use output::{OutputFormat, OutputFormatter};
