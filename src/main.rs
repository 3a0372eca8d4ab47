// SPDX-License-Identifier: MPL-2.0
use iced_swatch::app::{self, Flags};
use iced_swatch::config::paths;
use pico_args::Arguments;

const HELP: &str = "\
iced_swatch - button, spinner and overlay showcase

USAGE:
  iced_swatch [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --size <token>       tiny, small, medium, large or giant
  --catalog <kind>     showcase or minimal
  --theme <mode>       light, dark or system
  --config-dir <path>  Directory holding settings.toml
  -h, --help           Print this help
";

fn parse_flags(args: &mut Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        size: args.opt_value_from_str("--size")?,
        catalog: args.opt_value_from_str("--catalog")?,
        theme: args.opt_value_from_str("--theme")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
