//! Interactive menu driving a [`VersionStore`] for a single tracked file.
//!
//! The loop is generic over its input and output so the binary can run it on
//! stdin/stdout and tests can script it.

use crate::snapshot::VersionStore;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Update,
    Commit,
    Rollback,
    Exit,
}

impl Choice {
    /// Parses a menu answer, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Update),
            "2" => Some(Choice::Commit),
            "3" => Some(Choice::Rollback),
            "4" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Runs the menu loop until the user exits or input ends.
///
/// Store failures are reported on `output` and logged, then the loop carries
/// on; only I/O errors on `input`/`output` themselves end it early.
///
/// # Arguments
///
/// * `store` - The snapshot store to operate on.
/// * `file_path` - The tracked file.
/// * `input` - Source of menu answers, one per line.
/// * `output` - Destination for prompts and results.
///
/// # Returns
///
/// * `Ok(())` - The user chose Exit or input was exhausted.
/// * `Err(io::Error)` - Reading or writing the terminal failed.
pub fn run_menu<R: BufRead, W: Write>(
    store: &VersionStore,
    file_path: &Path,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Menu:")?;
        writeln!(output, "1. Update File Content")?;
        writeln!(output, "2. Commit Changes")?;
        writeln!(output, "3. Rollback to Previous Version")?;
        writeln!(output, "4. Exit")?;

        let Some(answer) = prompt(&mut input, &mut output, "Enter your choice (1-4): ")? else {
            return exit_at_end_of_input(&mut output);
        };

        match Choice::parse(&answer) {
            Some(Choice::Update) => {
                let Some(content) = prompt(&mut input, &mut output, "Enter the new content for the file: ")? else {
                    return exit_at_end_of_input(&mut output);
                };
                match store.update_file(file_path, &content) {
                    Ok(()) => writeln!(output, "File content updated.")?,
                    Err(e) => report(&mut output, &e)?,
                }
            }
            Some(Choice::Commit) => match store.commit(file_path) {
                Ok(snapshot) => {
                    writeln!(output, "Version created: {}", snapshot.name)?;
                    writeln!(output, "Changes committed. New version created.")?;
                }
                Err(e) => report(&mut output, &e)?,
            },
            Some(Choice::Rollback) => {
                let Some(version_name) = prompt(&mut input, &mut output, "Enter the version name to rollback to: ")? else {
                    return exit_at_end_of_input(&mut output);
                };
                let version_name = version_name.trim();
                match store.rollback(file_path, version_name) {
                    Ok(()) => writeln!(output, "File rolled back to version: {}", version_name)?,
                    Err(e) => report(&mut output, &e)?,
                }
            }
            Some(Choice::Exit) => {
                writeln!(output, "Exiting the program.")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice. Please enter a number between 1 and 4.")?,
        }
    }
}

/// Writes `message`, then reads one line with its line ending stripped.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Input ended mid-session: leave the file as it is and stop like Exit.
fn exit_at_end_of_input<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Exiting the program.")
}

fn report<W: Write>(output: &mut W, err: &crate::error::VersioningError) -> io::Result<()> {
    error!("{}", err);
    writeln!(output, "Error: {}", err)
}
