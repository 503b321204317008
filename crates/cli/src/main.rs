mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numrepr_gcd::Algorithm;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use self::output::{Layout, render_bits};

#[derive(Parser)]
#[command(name = "numrepr", version, about)]
struct Cli {
    /// Log filter, used when `RUST_LOG` is not set
    #[arg(long, global = true, env = "NUMREPR_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the IEEE 754 binary64 bit string of each value
    Bits {
        #[arg(long, value_enum, env = "NUMREPR_LAYOUT", default_value_t)]
        layout: Layout,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Print the greatest common divisor of two or more values
    Gcd {
        /// `euclid` or `stein`
        #[arg(long, env = "NUMREPR_GCD_ALGORITHM", default_value_t)]
        algorithm: Algorithm,
        #[arg(required = true, num_args = 2..)]
        values: Vec<u64>,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter: {level}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Bits { layout, values } => {
            debug!(?layout, count = values.len(), "rendering bit strings");
            for value in values {
                writeln!(out, "{}", render_bits(value, layout)?)?;
            }
        }
        Commands::Gcd { algorithm, values } => {
            debug!(%algorithm, count = values.len(), "computing gcd");
            let gcd = algorithm
                .gcd_all(&values)
                .with_context(|| format!("{algorithm} gcd of {values:?}"))?;
            writeln!(out, "{gcd}")?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    run(cli.command, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[rstest]
    #[case(&["numrepr", "gcd", "12", "18", "8"], "2\n")]
    #[case(&["numrepr", "gcd", "--algorithm", "stein", "48", "180"], "12\n")]
    #[case(
        &["numrepr", "bits", "1", "-0.5"],
        "0011111111110000000000000000000000000000000000000000000000000000\n\
         1011111111100000000000000000000000000000000000000000000000000000\n"
    )]
    #[case(
        &["numrepr", "bits", "--layout", "grouped", "2"],
        "0 10000000000 0000000000000000000000000000000000000000000000000000\n"
    )]
    fn run_prints(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(run_args(args).unwrap(), expected);
    }

    #[test]
    fn run_bits_json_one_line_per_value() {
        let out = run_args(&["numrepr", "bits", "--layout", "json", "1", "2", "3"]).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.starts_with('{') && l.ends_with('}')));
    }

    #[rstest]
    #[case(&["numrepr", "gcd", "0", "5"], "euclid gcd of [0, 5]", "zero operand")]
    #[case(
        &["numrepr", "gcd", "--algorithm", "stein", "4", "0", "2"],
        "stein gcd of [4, 0, 2]",
        "zero operand"
    )]
    #[case(&["numrepr", "bits", "1", "inf"], "failed to encode inf", "unsupported input class: infinite")]
    fn run_fails_with_context(#[case] args: &[&str], #[case] context: &str, #[case] cause: &str) {
        let err = run_args(args).unwrap_err();
        assert_eq!(err.to_string(), context);
        assert_eq!(err.root_cause().to_string(), cause);
    }

    #[test]
    fn run_gcd_zero_keeps_source_error() {
        let err = run_args(&["numrepr", "gcd", "0", "5"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<numrepr_gcd::GcdError>(),
            Some(&numrepr_gcd::GcdError::Zero)
        );
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["numrepr", "bits", "1.5", "-2"], 2)]
    #[case(&["numrepr", "bits", "--layout", "json", "nan"], 1)]
    fn parse_bits(#[case] args: &[&str], #[case] count: usize) {
        let Commands::Bits { values, .. } = Cli::try_parse_from(args).unwrap().command else {
            panic!("expected bits command");
        };
        assert_eq!(values.len(), count);
    }

    #[test]
    fn parse_gcd() {
        let cli =
            Cli::try_parse_from(["numrepr", "gcd", "--algorithm", "stein", "12", "18"]).unwrap();
        let Commands::Gcd { algorithm, values } = cli.command else {
            panic!("expected gcd command");
        };
        assert_eq!(algorithm, Algorithm::Stein);
        assert_eq!(values, [12, 18]);
    }

    #[rstest]
    #[case(&["numrepr", "gcd", "12"])]
    #[case(&["numrepr", "gcd", "--algorithm", "binary", "12", "18"])]
    #[case(&["numrepr", "bits"])]
    fn parse_rejects(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }
}
