use std::path::PathBuf;

use barblocks::{
    config::{build_output_config, config_path, default_config_toml, load_config, read_config},
    BlockRunner,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
barblocks - render memory and path status blocks for i3bar

USAGE:
    barblocks [OPTIONS]

OPTIONS:
    -c, --config <PATH>   Read blocks from PATH instead of the default config
        --print           Print the default config and exit
    -h, --help            Print this help
    -V, --version         Print version

ENVIRONMENT:
    BARBLOCKS_CONFIG      Config path (default: $XDG_CONFIG_HOME/barblocks/config.toml)
    BARBLOCKS_LOG         Log filter for stderr diagnostics (default: barblocks=warn)
    NO_COLOR              Disable colors regardless of config
";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("BARBLOCKS_LOG")
                .unwrap_or_else(|_| EnvFilter::new("barblocks=warn")),
        )
        .init();

    let mut explicit_config: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                return;
            }
            "-V" | "--version" => {
                println!("barblocks {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--print" => {
                print!("{}", default_config_toml());
                return;
            }
            "-c" | "--config" => match args.next() {
                Some(path) => explicit_config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("barblocks: {arg} requires a path");
                    std::process::exit(2);
                }
            },
            other => {
                eprintln!("barblocks: unknown argument {other}\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    // An explicitly named config must be valid; the default one may be absent.
    let config = match explicit_config {
        Some(path) => match read_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("barblocks: {err}");
                std::process::exit(1);
            }
        },
        None => load_config(&config_path()),
    };

    let mut output = build_output_config(&config.general);
    if std::env::var_os("NO_COLOR").is_some() {
        output.color_enabled = false;
    }

    match <BlockRunner>::default().run(&config, &output) {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("barblocks: {err}");
            std::process::exit(1);
        }
    }
}
