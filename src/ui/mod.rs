//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::config::Config;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_releases, display_status, display_success, format_releases,
    format_tag_menu,
};

/// Prompts user to pick one or more tags defined in the config.
///
/// Tags may be entered by menu number or by name (case-insensitive).
/// An empty line finishes once at least one tag has been entered.
///
/// # Returns
/// * `Ok(Vec<String>)` - Selected tags, spelled as declared in the config
/// * `Err` - If input cannot be read or ends before a tag was chosen
pub fn select_tags(config: &Config) -> Result<Vec<String>> {
    let stdin = io::stdin();
    select_tags_from(config, &mut stdin.lock(), &mut io::stdout())
}

/// Prompts user for a non-empty description.
pub fn prompt_description() -> Result<String> {
    let stdin = io::stdin();
    prompt_description_from(&mut stdin.lock(), &mut io::stdout())
}

/// [`select_tags`] over arbitrary input and output streams.
pub fn select_tags_from<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    let all_tags = config.all_tags();
    writeln!(
        output,
        "Select one or more tags from:\n\n{}\n",
        format_tag_menu(&all_tags)
    )?;

    let mut entered: Vec<String> = Vec::new();
    loop {
        if entered.is_empty() {
            write!(output, "Enter a tag: ")?;
        } else {
            write!(output, "Enter another tag, or press enter if done: ")?;
        }
        output.flush()?;

        let Some(line) = read_line(input)? else {
            if entered.is_empty() {
                return Err(anyhow::anyhow!("No tag selected"));
            }
            return Ok(entered);
        };

        if line.is_empty() {
            if entered.is_empty() {
                writeln!(output, "Please enter a tag.")?;
                continue;
            }
            return Ok(entered);
        }

        if let Ok(number) = line.parse::<usize>() {
            match all_tags.get(number) {
                Some(tag) => entered.push(tag.to_string()),
                None => writeln!(output, "{} is not a valid entry.", number)?,
            }
        } else if let Some(tag) = config.defined_tag(&line) {
            entered.push(tag.to_string());
        } else {
            writeln!(output, "{} is not a valid tag", line)?;
        }
    }
}

/// [`prompt_description`] over arbitrary input and output streams.
pub fn prompt_description_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    loop {
        write!(output, "Enter a description for this change: ")?;
        output.flush()?;

        match read_line(input)? {
            Some(line) if !line.is_empty() => return Ok(line),
            Some(_) => writeln!(output, "Please enter a description.")?,
            None => return Err(anyhow::anyhow!("No description entered")),
        }
    }
}

/// Reads one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
