// SPDX-License-Identifier: MPL-2.0
use iced_bulletin::app::{self, Flags};
use iced_bulletin::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Bulletin demo

USAGE:
  iced_bulletin [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml
  --theme <MODE>        light, dark or system
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_bulletin=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let theme = args
        .opt_value_from_str::<_, String>("--theme")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --theme");
            None
        })
        .and_then(|raw| {
            let mode = ThemeMode::parse(&raw);
            if mode.is_none() {
                tracing::warn!(theme = %raw, "unknown theme, using configured one");
            }
            mode
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "unused arguments");
    }

    app::run(Flags { config_dir, theme })
}
