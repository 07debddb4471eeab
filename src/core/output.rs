//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, bright_black for git's own output
//! - **Standardized spacing**: Newline before and after all command outputs

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Prints captured git output indented under the success line.
/// Empty output prints only the trailing blank line.
pub fn print_command_output(output: &str) {
    for line in output.lines() {
        println!("   {}", line.bright_black());
    }
    println!();
}
