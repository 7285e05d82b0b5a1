use resistgen::catalog::{resolve_drugs, COMBINATIONS, DRUGS};
use resistgen::cli::commands::{
    CliArgs, Commands, ConfigsArgs, GenerateArgs, ListArgs, ListTable, PathArgs, ScriptsArgs,
    ShowConfigArgs,
};
use resistgen::cli::output::{OutputFormat, OutputFormatter};
use resistgen::util::logging::{config_from_env, init_logging, parse_level};
use resistgen::{
    GenerationReport, Generator, GeneratorConfig, RealFileSystem, ScriptRequest, NAME, VERSION,
};

use anyhow::Result;
use clap::Parser;
use std::process;
use tracing::{debug, error, info, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, args.quiet),
        Commands::Scripts(scripts_args) => handle_scripts(scripts_args, args.quiet),
        Commands::Configs(configs_args) => handle_configs(configs_args, args.quiet),
        Commands::List(list_args) => handle_list(list_args),
        Commands::ShowConfig(show_args) => handle_show_config(show_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        Some(parse_level(level_str))
    } else if args.verbose {
        Some(Level::DEBUG)
    } else if args.quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    init_logging(config_from_env(level));
}

/// Environment, then flags, then validation
fn load_config(paths: &PathArgs) -> Option<GeneratorConfig> {
    let config = paths.apply(GeneratorConfig::default());
    debug!("Effective configuration: {:?}", config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your environment variables and command-line arguments.");
        return None;
    }
    Some(config)
}

fn print_formatted(
    format: OutputFormat,
    render: impl FnOnce(&OutputFormatter) -> Result<String>,
) -> i32 {
    let formatter = OutputFormatter::new(format);
    match render(&formatter) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            1
        }
    }
}

fn finish(result: Result<GenerationReport>, format: OutputFormat, quiet: bool) -> i32 {
    match result {
        Ok(report) => {
            info!(files = report.total(), "Generation finished");
            if quiet {
                return 0;
            }
            print_formatted(format, |f| f.format_report(&report))
        }
        Err(e) => {
            error!("Generation failed: {:#}", e);
            1
        }
    }
}

fn handle_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    info!("Generating driver scripts and config files");

    let Some(config) = load_config(&args.paths) else {
        return 1;
    };
    let fs = RealFileSystem::new();

    let result = Generator::new(&fs, &config)
        .with_dry_run(args.dry_run)
        .run(&ScriptRequest::default());

    finish(result, args.format.into(), quiet)
}

fn handle_scripts(args: &ScriptsArgs, quiet: bool) -> i32 {
    info!("Generating driver scripts");

    let Some(config) = load_config(&args.paths) else {
        return 1;
    };

    let drugs = match resolve_drugs(&args.drugs) {
        Ok(drugs) => drugs,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let request = ScriptRequest {
        drugs,
        prefix: args.prefix,
        count: args.count.unwrap_or(COMBINATIONS.len()),
    };
    let fs = RealFileSystem::new();

    let result = Generator::new(&fs, &config)
        .with_dry_run(args.dry_run)
        .emit_scripts(&request);

    finish(result, args.format.into(), quiet)
}

fn handle_configs(args: &ConfigsArgs, quiet: bool) -> i32 {
    info!("Generating config files");

    let Some(config) = load_config(&args.paths) else {
        return 1;
    };
    let fs = RealFileSystem::new();

    let result = Generator::new(&fs, &config)
        .with_dry_run(args.dry_run)
        .emit_configs();

    finish(result, args.format.into(), quiet)
}

fn handle_list(args: &ListArgs) -> i32 {
    match args.table {
        ListTable::Drugs => print_formatted(args.format.into(), |f| f.format_drugs(&DRUGS)),
        ListTable::Combinations => {
            print_formatted(args.format.into(), |f| f.format_combinations(&COMBINATIONS))
        }
    }
}

fn handle_show_config(args: &ShowConfigArgs) -> i32 {
    let config = args.paths.apply(GeneratorConfig::default());
    let code = print_formatted(args.format.into(), |f| f.format_config(&config));

    // Printed even when invalid
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    code
}
