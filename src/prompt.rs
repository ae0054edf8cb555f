//! Interactive input for the crawl request
//!
//! Asks for the novel title and the chapter range, re-asking until the range
//! is usable. Readers and writers are generic so the dialogue can be driven
//! from tests.

use crate::crawler::CrawlRequest;
use std::io::{self, BufRead, Write};

/// Asks for the title, then for the chapter range
pub fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<CrawlRequest> {
    let title = prompt_title(input, output)?;
    let (start, end) = prompt_range(input, output)?;

    CrawlRequest::new(title, start, end)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
}

/// Asks for the novel title
///
/// The title is taken as typed, minus the line ending.
pub fn prompt_title<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(
        output,
        "Enter the name of the novel (e.g., Emperor's Domination): "
    )?;
    output.flush()?;
    let line = read_line(input)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for the starting and ending chapter until `start >= 1` and `end >= start`
///
/// A start answer that is not a number is re-asked right away, without
/// reading an end answer for it.
pub fn prompt_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(u32, u32)> {
    loop {
        let Some(start) = ask_number(input, output, "Enter the starting chapter number: ")? else {
            writeln!(output, "[ERROR] Please enter valid numbers for chapters.")?;
            continue;
        };
        let Some(end) = ask_number(input, output, "Enter the ending chapter number: ")? else {
            writeln!(output, "[ERROR] Please enter valid numbers for chapters.")?;
            continue;
        };

        if start <= 0 || end < start {
            writeln!(
                output,
                "[ERROR] Invalid chapter range. Please ensure start > 0 and end >= start."
            )?;
            continue;
        }

        match (u32::try_from(start), u32::try_from(end)) {
            (Ok(start), Ok(end)) => return Ok((start, end)),
            _ => {
                writeln!(output, "[ERROR] Chapter numbers are too large.")?;
            }
        }
    }
}

/// Prints `question` and parses the answer; `None` if it is not an integer
fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<i64>> {
    write!(output, "{}", question)?;
    output.flush()?;
    let line = read_line(input)?;
    Ok(line.trim().parse::<i64>().ok())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the crawl request was complete",
        ));
    }
    Ok(line)
}
