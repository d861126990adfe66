// SPDX-License-Identifier: MPL-2.0
use salary_guard::app::{self, paths, Flags};
use salary_guard::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Salary Guard prototype

USAGE:
  salary-guard [OPTIONS]

OPTIONS:
  --name <NAME>        Display name shown in the home banner
  --theme <MODE>       light, dark, or system
  --config-dir <DIR>   Directory containing settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  SALARY_GUARD_CONFIG_DIR   Same as --config-dir
  RUST_LOG                  Log filter (default: warn,salary_guard=info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,salary_guard=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let name: Option<String> = args.opt_value_from_str("--name").unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring --name");
        None
    });
    let theme: Option<ThemeMode> = args.opt_value_from_str("--theme").unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring --theme");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring --config-dir");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { name, theme })
}
