//! Interactive capture session.
//!
//! # Responsibility
//! - Prompt for month, day, year and description, and record each event.
//! - Print the stored events in insertion order when input ends.
//!
//! # Invariants
//! - Bad input never aborts the session; the field or event is retried.
//! - Only `io::Error` from the terminal ends the session early.

use event_ledger_core::EventLedger;
use std::io::{self, BufRead, Write};

/// Session settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Year used when the year prompt is answered with an empty line.
    pub default_year: Option<i64>,
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub recorded: usize,
    pub rejected: usize,
}

enum Answer {
    Value(i64),
    Blank,
    Quit,
}

/// Runs the prompt loop until end of input, an empty month, or `q`.
pub fn run_session<R: BufRead, W: Write>(
    ledger: &EventLedger,
    config: &SessionConfig,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let year_prompt = match config.default_year {
        Some(year) => format!("Select Year [{year}]: "),
        None => "Select Year: ".to_string(),
    };

    loop {
        let Answer::Value(month) = prompt_number(&mut input, &mut output, "Select Month: ")? else {
            break;
        };
        let Answer::Value(day) = prompt_number(&mut input, &mut output, "Select Day: ")? else {
            break;
        };
        let answer = prompt_number(&mut input, &mut output, &year_prompt)?;
        let year = match (answer, config.default_year) {
            (Answer::Value(year), _) => year,
            (Answer::Blank, Some(year)) => year,
            _ => break,
        };
        let Some(description) =
            prompt_line(&mut input, &mut output, "Describe the Event to be saved: ")?
        else {
            break;
        };

        match ledger.record_event(month, day, year, &description) {
            Ok(event) => {
                summary.recorded += 1;
                writeln!(output, "Saved {} {}", event.date(), event.description())?;
            }
            Err(err) => {
                summary.rejected += 1;
                writeln!(output, "Not saved: {err}")?;
            }
        }
    }

    writeln!(output, "Saved events:")?;
    for event in ledger.list_events() {
        writeln!(output, "{}  {}", event.date(), event.description())?;
    }
    output.flush()?;
    Ok(summary)
}

/// Prompts until the answer is a number, blank, or quit.
///
/// End of input counts as quit.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Answer> {
    loop {
        let Some(line) = prompt_line(input, output, prompt)? else {
            return Ok(Answer::Quit);
        };
        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Please enter a whole number.")?,
        }
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn parse_answer(line: &str) -> Option<Answer> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(Answer::Blank);
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Some(Answer::Quit);
    }
    trimmed.parse::<i64>().ok().map(Answer::Value)
}

#[cfg(test)]
mod tests {
    use super::{run_session, SessionConfig, SessionSummary};
    use event_ledger_core::EventLedger;

    fn run(input: &str, config: &SessionConfig) -> (EventLedger, SessionSummary, String) {
        let ledger = EventLedger::new();
        let mut output = Vec::new();
        let summary = run_session(&ledger, config, input.as_bytes(), &mut output).unwrap();
        (ledger, summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn records_events_until_end_of_input() {
        let input = "2\n29\n2024\nLeap day check\n12\n25\n2025\nHolidays\n";
        let (ledger, summary, output) = run(input, &SessionConfig::default());

        assert_eq!(summary, SessionSummary { recorded: 2, rejected: 0 });
        assert_eq!(ledger.len(), 2);
        assert!(output.contains("2024-02-29  Leap day check\n2025-12-25  Holidays\n"));
    }

    #[test]
    fn rejected_events_are_reported_and_skipped() {
        let input = "2\n29\n2023\nbad\n4\n1\n2025\n   \nq\n";
        let (ledger, summary, output) = run(input, &SessionConfig::default());

        assert_eq!(summary, SessionSummary { recorded: 0, rejected: 2 });
        assert!(ledger.is_empty());
        assert!(output.contains("Not saved: invalid date"));
        assert!(output.contains("Not saved: invalid description"));
    }

    #[test]
    fn non_numeric_answers_reprompt_the_field() {
        let input = "May\n5\n5\n2025\nCinco\n";
        let (ledger, _, output) = run(input, &SessionConfig::default());

        assert_eq!(output.matches("Select Month: ").count(), 3);
        assert!(output.contains("Please enter a whole number."));
        assert_eq!(ledger.list_events()[0].date().to_string(), "2025-05-05");
    }

    #[test]
    fn empty_year_uses_configured_default() {
        let config = SessionConfig {
            default_year: Some(2025),
        };
        let (ledger, _, output) = run("1\n2\n\nStandup\n", &config);

        assert!(output.contains("Select Year [2025]: "));
        assert_eq!(ledger.list_events()[0].date().to_string(), "2025-01-02");
    }

    #[test]
    fn quit_at_year_prompt_ignores_default() {
        let config = SessionConfig {
            default_year: Some(2025),
        };
        let (ledger, _, _) = run("1\n2\nq\nStandup\n", &config);

        assert!(ledger.is_empty());
    }

    #[test]
    fn empty_month_ends_session() {
        let (ledger, summary, output) = run("\n3\n3\n", &SessionConfig::default());

        assert_eq!(summary, SessionSummary::default());
        assert!(ledger.is_empty());
        assert!(output.ends_with("Saved events:\n"));
    }
}
