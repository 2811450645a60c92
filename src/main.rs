/*!
*   Utility that decodes an S-GUID and prints its integer value, timestamp and randomness to STDOUT.
*/

use anyhow::{Context, Result};
use clap::Parser;
use sguid::{HexWidth, Inspection};
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help(true))]
struct Args {
    /// S-GUID to decode
    #[arg(required_unless_present = "generate")]
    sguid: Option<String>,

    /// Print a newly generated S-GUID instead
    #[arg(short, long, conflicts_with = "sguid")]
    generate: bool,

    /// Pad the random component to 21 hex digits like historical tooling
    #[arg(long)]
    legacy_hex: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    if args.generate {
        let generated = sguid::Sguid::generate().context("system clock is outside the S-GUID time range")?;
        debug!(?generated, "generated S-GUID");
        println!("{generated}");
        return Ok(());
    }

    let width = hex_width(&args);
    let text = args.sguid.unwrap_or_default();

    let inspection = sguid::inspect_with(&text, width).with_context(|| format!("cannot decode S-GUID {text:?}"))?;
    debug!(
        raw_timestamp = %inspection.raw_timestamp,
        bits = inspection.value.bits(),
        "decoded S-GUID"
    );

    print!("{}", report(&text, &inspection));

    Ok(())
}

const fn hex_width(args: &Args) -> HexWidth {
    if args.legacy_hex { HexWidth::Legacy } else { HexWidth::Full }
}

fn report(text: &str, inspection: &Inspection) -> String {
    format!(
        "SGUID: {text}\n\
         SGUID as int: {}\n\
         40 Bit DateTime component in GMT: {} GMT\n\
         88 Bit Random component as Hex String: {}\n",
        inspection.value, inspection.timestamp, inspection.randomness
    )
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        // cspell:disable-next-line
        let text = "DgqEUGAFoqzwVk9XE4fkeF";
        let inspection = sguid::inspect(text).unwrap();

        assert_eq!(
            report(text, &inspection),
            "SGUID: DgqEUGAFoqzwVk9XE4fkeF\n\
             SGUID as int: 136564651282539218026219342010643681852\n\
             40 Bit DateTime component in GMT: 2018-10-29 01:16:54.889 GMT\n\
             88 Bit Random component as Hex String: 35682747349bc66424923c\n" // cspell:disable-line
        );
    }

    #[test]
    fn test_legacy_hex_flag() {
        let full = Args::try_parse_from(["sguid", "2"]).unwrap();
        let legacy = Args::try_parse_from(["sguid", "--legacy-hex", "2"]).unwrap();

        assert!(!full.legacy_hex);
        assert!(legacy.legacy_hex);

        let full = sguid::inspect_with("2", hex_width(&full)).unwrap();
        let legacy = sguid::inspect_with("2", hex_width(&legacy)).unwrap();

        assert!(report("2", &full).ends_with("Hex String: 0000000000000000000001\n"));
        assert!(report("2", &legacy).ends_with("Hex String: 000000000000000000001\n"));
        assert!(report("2", &legacy).contains("2004-11-03 19:53:47.776 GMT"));
    }

    #[test]
    fn test_args() {
        assert!(Args::try_parse_from(["sguid", "--generate"]).unwrap().generate);
        assert!(Args::try_parse_from(["sguid", "--generate", "2"]).is_err());
    }
}
