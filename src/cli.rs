// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every setting can come from an environment variable instead of a flag, so
// running the binary with no arguments at all works:
//
//   FILE_PATH=./urls.txt href-harvest                              # preview
//   SINK_MODE=hrefs OUTPUT_PATH=./found.txt href-harvest           # hrefs
//   href-harvest hrefs --output ./found.txt                        # same
//
// Precedence (handled by clap): flag > environment variable > default.
// A subcommand, when given, wins over --mode / SINK_MODE.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - ValueEnum: Turns an enum into a fixed set of accepted strings
// - Option<T>: The subcommand is optional; None falls back to --mode
// =============================================================================

use crate::pipeline::DEFAULT_CAPACITY;
use crate::sink::{Sink, DEFAULT_PREVIEW_CHARS};
use clap::{Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "href-harvest",
    version,
    about = "Fetch a list of URLs concurrently, then preview the pages or harvest their href values",
    long_about = "href-harvest reads one URL per line from a file, fetches every URL at the same time \
                  and hands each page to a single consumer. The consumer either prints a short preview \
                  of each page or appends every href=\"...\" value it finds to an output file."
)]
pub struct Cli {
    /// File with one URL per line
    #[arg(long, env = "FILE_PATH", default_value = "./urls.txt", global = true)]
    pub input: PathBuf,

    /// How many fetched pages may wait for the consumer
    #[arg(long, env = "QUEUE_CAPACITY", default_value_t = DEFAULT_CAPACITY, global = true)]
    pub queue_capacity: NonZeroUsize,

    /// What to do with each page when no subcommand is given
    #[arg(long, env = "SINK_MODE", value_enum, default_value_t = SinkMode::Preview, global = true)]
    pub mode: SinkMode,

    /// File href values are appended to, one per line (hrefs mode)
    #[arg(long, env = "OUTPUT_PATH", default_value = "./foundurls.txt", global = true)]
    pub output: PathBuf,

    /// Print the final run summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// What to do with each page (default: --mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Sink selection for runs configured without a subcommand
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// Print the first characters of every page
    Preview,
    /// Append every href value to the output file
    Hrefs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the first characters of every fetched page
    ///
    /// Example: href-harvest preview --chars 80
    Preview {
        /// Number of characters to print per page
        #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
        chars: usize,
    },

    /// Append every href="..." value found to the output file
    ///
    /// Example: href-harvest hrefs --output ./foundurls.txt
    Hrefs,
}

impl Cli {
    /// The sink this invocation asks for
    pub fn sink(&self) -> Sink {
        let hrefs = || Sink::Hrefs {
            output: self.output.clone(),
        };

        match &self.command {
            Some(Commands::Preview { chars }) => Sink::Preview { chars: *chars },
            Some(Commands::Hrefs) => hrefs(),
            None => match self.mode {
                SinkMode::Preview => Sink::Preview {
                    chars: DEFAULT_PREVIEW_CHARS,
                },
                SinkMode::Hrefs => hrefs(),
            },
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does env = "FILE_PATH" do?
//    - Needs clap's "env" feature (see Cargo.toml)
//    - If --input isn't given, clap looks at the FILE_PATH variable
//    - If that isn't set either, default_value is used
//
// 2. Why NonZeroUsize for the queue capacity?
//    - A queue that holds zero items makes no sense (tokio would panic)
//    - NonZeroUsize implements FromStr, so clap rejects "0" for us
//
// 3. What does global = true do?
//    - Lets the flag appear after the subcommand too:
//      href-harvest hrefs --input list.txt
//
// 4. Why both a subcommand and --mode?
//    - Subcommands read well when typing by hand
//    - An environment variable can't pick a subcommand, so SINK_MODE covers
//      runs configured only through the environment
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hrefs_subcommand() {
        let cli = Cli::try_parse_from([
            "href-harvest",
            "hrefs",
            "--output",
            "out.txt",
            "--input",
            "list.txt",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("list.txt"));
        assert_eq!(
            cli.sink(),
            Sink::Hrefs {
                output: PathBuf::from("out.txt")
            }
        );
    }

    #[test]
    fn test_preview_chars() {
        let cli = Cli::try_parse_from(["href-harvest", "preview", "--chars", "12"]).unwrap();
        assert_eq!(cli.sink(), Sink::Preview { chars: 12 });
    }

    #[test]
    fn test_no_subcommand_means_preview() {
        let cli = Cli::try_parse_from(["href-harvest", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.sink(),
            Sink::Preview {
                chars: DEFAULT_PREVIEW_CHARS
            }
        );
    }

    #[test]
    fn test_mode_selects_hrefs_without_subcommand() {
        let cli = Cli::try_parse_from(["href-harvest", "--mode", "hrefs", "--output", "o.txt"]).unwrap();
        assert_eq!(
            cli.sink(),
            Sink::Hrefs {
                output: PathBuf::from("o.txt")
            }
        );
    }

    #[test]
    fn test_subcommand_wins_over_mode() {
        let cli = Cli::try_parse_from(["href-harvest", "--mode", "hrefs", "preview"]).unwrap();
        assert_eq!(
            cli.sink(),
            Sink::Preview {
                chars: DEFAULT_PREVIEW_CHARS
            }
        );
    }

    #[test]
    fn test_hrefs_defaults() {
        let cli = Cli::try_parse_from(["href-harvest", "hrefs"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("./urls.txt"));
        assert_eq!(cli.queue_capacity, DEFAULT_CAPACITY);
        assert_eq!(cli.queue_capacity.get(), 100);
        assert_eq!(
            cli.sink(),
            Sink::Hrefs {
                output: PathBuf::from("./foundurls.txt")
            }
        );
    }

    #[test]
    fn test_env_names_and_defaults() {
        let cmd = Cli::command();
        let expected = [
            ("input", "FILE_PATH", "./urls.txt"),
            ("output", "OUTPUT_PATH", "./foundurls.txt"),
            ("queue_capacity", "QUEUE_CAPACITY", "100"),
            ("mode", "SINK_MODE", "preview"),
        ];

        for (id, env, default) in expected {
            let arg = cmd
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .unwrap_or_else(|| panic!("missing argument {}", id));
            assert_eq!(arg.get_env(), Some(OsStr::new(env)), "env of {}", id);
            let defaults: Vec<&str> = arg
                .get_default_values()
                .iter()
                .filter_map(|value| value.to_str())
                .collect();
            assert_eq!(defaults, vec![default], "default of {}", id);
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = Cli::try_parse_from(["href-harvest", "--queue-capacity", "0"]);
        assert!(result.is_err());
    }
}
