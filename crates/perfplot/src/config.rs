// File: crates/perfplot/src/config.rs
// Summary: Command-line configuration; every flag defaults to the fixed file names and canvas size.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{RenderOptions, Theme};
use clap::{ArgAction, Parser, ValueEnum};

pub const DEFAULT_INPUT: &str = "performance_data.csv";
pub const DEFAULT_OUTPUT: &str = "download_time_vs_latency.png";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// The chart preset registered under this flag value.
    pub fn theme(self) -> Theme {
        let name = self.to_possible_value().map(|v| v.get_name().to_owned()).unwrap_or_default();
        chart_core::theme::find(&name)
    }
}

#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "perfplot")]
#[command(about = "Plot download time against per-peer latency", long_about = None)]
pub struct Config {
    /// Measurement table to read
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// PNG to write (replaced if it exists)
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(1..=16384))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(1..=16384))]
    pub height: i32,

    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    pub theme: ThemeName,

    /// Write the PNG only, do not open a window
    #[arg(long = "no-show", action = ArgAction::SetFalse)]
    pub show: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: WIDTH,
            height: HEIGHT,
            theme: ThemeName::default(),
            show: true,
        }
    }
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: self.theme.theme(),
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_defaults() {
        let cfg = Config::try_parse_from(["perfplot"]).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.show);
    }

    #[test]
    fn flags_override() {
        let cfg = Config::try_parse_from([
            "perfplot", "--input", "a.csv", "-o", "out/b.png", "--width", "800", "--height", "500", "--theme", "dark",
            "--no-show",
        ])
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.csv"));
        assert_eq!(cfg.output, PathBuf::from("out/b.png"));
        assert!(!cfg.show);

        let opts = cfg.render_options();
        assert_eq!((opts.width, opts.height), (800, 500));
        assert_eq!(opts.theme.name, "dark");
    }

    #[test]
    fn every_flag_value_maps_to_its_preset() {
        for name in ThemeName::value_variants() {
            let flag = name.to_possible_value().unwrap();
            assert_eq!(name.theme().name, flag.get_name());
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Config::try_parse_from(["perfplot", "--width", "0"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
