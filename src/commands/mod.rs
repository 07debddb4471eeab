pub mod fetch;
pub mod pull;
pub mod tracking;

pub use fetch::*;
pub use pull::*;
pub use tracking::*;

use crate::core::{menu::Outcome, print_command_output, print_success};

/// Print what a menu command did. Cancelled commands print nothing.
pub fn report_outcome(program: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Ran(result) => {
            print_success(&command_line(program, &result.args));
            print_command_output(&result.combined_output());
        }
        Outcome::Cancelled => log::debug!("Command cancelled"),
    }
}

/// The invocation as the user would type it, naming the configured executable
fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
