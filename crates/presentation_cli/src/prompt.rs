//! Interactive place name prompts

use std::io::{self, BufRead, Write};

use domain::value_objects::PlaceName;

/// Question asked for the start of the trip
pub const START_QUESTION: &str = "Enter name of a city where you started your travels: ";
/// Shown when the start answer is blank
pub const START_EMPTY: &str = "Start city cannot be empty. Try again.";
/// Question asked for the end of the trip
pub const END_QUESTION: &str = "Enter name of a city where you ended your travels: ";
/// Shown when the end answer is blank
pub const END_EMPTY: &str = "End city cannot be empty. Try again.";

/// Ask `question` until a non-blank answer arrives
///
/// Answers are trimmed. End of input is an error.
pub fn prompt_place<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    empty_message: &str,
) -> io::Result<PlaceName> {
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a city was entered",
            ));
        }

        match PlaceName::new(&line) {
            Ok(place) => return Ok(place),
            Err(_) => writeln!(output, "{empty_message}")?,
        }
    }
}

/// Use `given` when it holds a place name, otherwise ask for one
pub fn place_or_prompt<R: BufRead, W: Write>(
    given: Option<&str>,
    input: &mut R,
    output: &mut W,
    question: &str,
    empty_message: &str,
) -> io::Result<PlaceName> {
    match given.map(PlaceName::new) {
        Some(Ok(place)) => Ok(place),
        _ => prompt_place(input, output, question, empty_message),
    }
}
