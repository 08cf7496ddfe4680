//! Interactive prompts for the book title and description

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

use crate::types::book::BookInput;

/// Prompt on stdin/stdout for the title and description.
pub fn read_book_input() -> Result<BookInput> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_book_input_from(&mut stdin.lock(), &mut stdout.lock())
}

/// Prompt for the title and description over explicit streams.
pub fn read_book_input_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<BookInput> {
    let title = prompt_line(input, output, "Input Book title: ")?;
    let description = prompt_line(input, output, "Input Book description: ")?;
    Ok(BookInput::new(title, description))
}

/// Write a prompt, flush, and read one line of input.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input line")?;
    if read == 0 {
        bail!("Input stream closed before a line was entered");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
