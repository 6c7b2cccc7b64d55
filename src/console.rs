use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// ANSI styling for the interactive console. Every helper resets at the
/// end of its own output.
pub mod style {
    pub const RESET: &str = "\u{1b}[0m";
    pub const CYAN: &str = "\u{1b}[1;96m";
    pub const GREEN: &str = "\u{1b}[1;92m";
    pub const PURPLE: &str = "\u{1b}[1;95m";
    pub const BLUE: &str = "\u{1b}[1;94m";
    pub const RED: &str = "\u{1b}[1;91m";
    pub const YELLOW: &str = "\u{1b}[1;93m";
}

pub fn banner(title: &str) {
    let rule = "-=".repeat(20);
    println!(
        "{}{}{} {}{}{} {}{}{}",
        style::PURPLE,
        rule,
        style::RESET,
        style::YELLOW,
        title,
        style::RESET,
        style::PURPLE,
        rule,
        style::RESET
    );
}

pub fn subtitle(text: &str) {
    println!("{}-=-=-=-=->{} {}", style::YELLOW, style::RESET, text);
}

pub fn option(code: &str, text: &str) {
    println!("{}{}>{} {}", style::GREEN, code, style::RESET, text);
}

pub fn report_error(text: &str) {
    println!("{}[Error]{}: {}", style::RED, style::RESET, text);
}

/// One row of a two-column table, both values to two decimal places.
pub fn pair_row(first: f64, second: f64) {
    println!(
        "{}{:<20.2}{} {}{:>20.2}{}",
        style::PURPLE,
        first,
        style::RESET,
        style::BLUE,
        second,
        style::RESET
    );
}

/// Prompts until the operator supplies a value that parses as `T`. Invalid
/// text is reported and the same field is asked again; a closed input
/// stream surfaces as `UnexpectedEof` instead of looping.
pub fn prompt<T: FromStr, R: BufRead>(input: &mut R, message: &str) -> io::Result<T> {
    loop {
        print!("{}{}{} ", style::CYAN, message, style::RESET);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => report_error("Input mismatch! Enter a number"),
        }
    }
}

/// A request count. Zero is rejected and re-asked: an empty workload has no
/// defined mean completion time.
pub fn prompt_count<R: BufRead>(input: &mut R, message: &str) -> io::Result<usize> {
    loop {
        let count: usize = prompt(input, message)?;
        if count == 0 {
            report_error("At least one request is required");
            continue;
        }
        return Ok(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_retries_until_the_input_parses() {
        let mut input = Cursor::new(&b"not a number\n12.5\n"[..]);

        let value: f64 = prompt(&mut input, "Cylinder:").unwrap();
        assert_eq!(value, 12.5);
    }

    #[test]
    fn prompt_count_rejects_zero() {
        let mut input = Cursor::new(&b"0\n4\n"[..]);

        let count = prompt_count(&mut input, "Count:").unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn prompt_surfaces_a_closed_input_stream() {
        let mut input = Cursor::new(&b""[..]);

        let result: io::Result<f64> = prompt(&mut input, "Cylinder:");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
