use crate::config::GeneratorConfig;
use crate::prefix::AnalysisPrefix;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Config and driver-script generator for drug-resistance catalogue analyses
#[derive(Parser, Debug)]
#[command(
    name = "resistgen",
    about = "Config and driver-script generator for drug-resistance catalogue analyses",
    version,
    long_about = "resistgen writes one numbered YAML config per analysis parameter \
                  combination and one shell driver per drug that runs the analysis \
                  steps over those configs."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Write all driver scripts and all config files",
        long_about = "Writes one binary driver script per drug into the script directory, \
                      then one config file per parameter combination into the config \
                      directory.\n\n\
                      Examples:\n  \
                      resistgen generate\n  \
                      resistgen generate --root /work/catalogue --dry-run"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Write driver scripts only",
        long_about = "Writes one driver script per drug. The script directory must exist.\n\n\
                      Examples:\n  \
                      resistgen scripts\n  \
                      resistgen scripts --prefix mic --count 8\n  \
                      resistgen scripts --drug INH --drug Rifampicin"
    )]
    Scripts(ScriptsArgs),

    #[command(
        about = "Write config files only",
        long_about = "Loads the base config and writes one config per parameter combination, \
                      creating the config directory if needed.\n\n\
                      Examples:\n  \
                      resistgen configs\n  \
                      resistgen configs --base-config templates/config.yaml"
    )]
    Configs(ConfigsArgs),

    #[command(about = "List the drug or parameter-combination table")]
    List(ListArgs),

    #[command(about = "Show the effective configuration")]
    ShowConfig(ShowConfigArgs),
}

/// Path overrides shared by every command that touches the file system
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    #[arg(long, value_name = "DIR", help = "Directory other paths resolve against")]
    pub root: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Base config template")]
    pub base_config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Config output directory (relative)")]
    pub config_dir: Option<String>,

    #[arg(long, value_name = "DIR", help = "Script output directory")]
    pub script_dir: Option<String>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Analysis output directory passed to the summary step"
    )]
    pub analysis_dir: Option<String>,
}

impl PathArgs {
    /// Applies the flags that were given on top of `config`
    pub fn apply(&self, config: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            root: self.root.clone().unwrap_or(config.root),
            base_config: self.base_config.clone().unwrap_or(config.base_config),
            config_dir: self.config_dir.clone().unwrap_or(config.config_dir),
            script_dir: self.script_dir.clone().unwrap_or(config.script_dir),
            analysis_dir: self.analysis_dir.clone().unwrap_or(config.analysis_dir),
            ..config
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[arg(long, help = "Report the files that would be written without writing them")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ScriptsArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[arg(
        short = 'p',
        long,
        value_parser = parse_prefix,
        default_value = "binary",
        help = "Analysis prefix: binary, atu or mic"
    )]
    pub prefix: AnalysisPrefix,

    #[arg(
        short = 'n',
        long,
        value_name = "N",
        help = "Config files per script (defaults to the combination table size)"
    )]
    pub count: Option<usize>,

    #[arg(
        short = 'd',
        long = "drug",
        value_name = "NAME|ABBR",
        help = "Only write scripts for these drugs (repeatable)"
    )]
    pub drugs: Vec<String>,

    #[arg(long, help = "Report the files that would be written without writing them")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigsArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[arg(long, help = "Report the files that would be written without writing them")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(value_enum, help = "Table to list")]
    pub table: ListTable,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowConfigArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTable {
    Drugs,
    Combinations,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_prefix(s: &str) -> Result<AnalysisPrefix, String> {
    s.parse::<AnalysisPrefix>().map_err(|e| e.to_string())
}
