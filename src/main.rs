// SPDX-License-Identifier: MPL-2.0
use simple_gallery::app::{self, Flags};
use simple_gallery::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Simple Gallery

USAGE:
  simple_gallery [OPTIONS] [DIRECTORY]

OPTIONS:
  --lang <ID>          UI language, e.g. en-US or fr
  --config-dir <DIR>   Directory holding settings.toml
  --full-screen        Start in full-screen mode
  -h, --help           Print this help

ARGS:
  <DIRECTORY>          Folder to browse (defaults to the last one opened)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let full_screen = args.contains("--full-screen");

    config::paths::init_cli_override(config_dir);

    let flags = Flags {
        lang,
        directory: args.finish().into_iter().next().map(PathBuf::from),
        full_screen,
    };

    app::run(flags)
}
