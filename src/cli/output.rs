//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexiscanArgs, OutputFormat};
use crate::error::Result;
use crate::inspect::report::InspectionReport;

/// Classification of a single checked token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClassification {
    /// The raw token as given on the command line.
    pub token: String,
    /// The canonical form used for the lookup, if the token is a word.
    pub canonical: Option<String>,
    /// The classification: "ignored" (not a word), "numeric", "known", or
    /// "unknown".
    pub classification: String,
}

/// Output an inspection report in the configured format.
pub fn output_report(report: &InspectionReport, args: &LexiscanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{report}");
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output token classifications in the configured format.
pub fn output_classifications(
    classifications: &[TokenClassification],
    args: &LexiscanArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for c in classifications {
                match &c.canonical {
                    Some(canonical) if canonical != &c.token => {
                        println!("{} ({}): {}", c.token, canonical, c.classification)
                    }
                    _ => println!("{}: {}", c.token, c.classification),
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(classifications, args),
    }
}

/// Output any serializable value as JSON.
fn output_json<T: Serialize + ?Sized>(value: &T, args: &LexiscanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
