//! Line-oriented prompt loop that walks one person through the form: name,
//! ZIP lookup, contact, issue checklist, representative choice, generation.

use std::io::Write;

use callrep_core::Issue;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::lookup::{load_representatives, print_details, print_script, RepresentativeSource};
use crate::session::Session;

const HELP: &str = "\
Commands:
  name <your name>        set your name
  zip <zip code>          look up your representatives
  contact <email|phone>   where you'd like a response (blank clears it)
  issues                  show the issue checklist
  issue <number|slug>     check or uncheck an issue
  reps                    list loaded representatives
  select <n>              choose the representative to contact
  generate                generate your message script
  help                    show this help
  quit                    exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Name(String),
    Zip(String),
    Contact(String),
    Issues,
    ToggleIssue(Issue),
    Reps,
    Select(usize),
    Generate,
    Help,
    Quit,
    Blank,
}

/// Parse one line of user input.
///
/// # Errors
///
/// Returns a user-facing message for unknown commands or bad arguments.
pub(crate) fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    match command.to_ascii_lowercase().as_str() {
        "name" => Ok(Input::Name(rest.to_string())),
        "zip" => Ok(Input::Zip(rest.to_string())),
        "contact" => Ok(Input::Contact(rest.to_string())),
        "issues" => Ok(Input::Issues),
        "issue" => parse_issue(rest).map(Input::ToggleIssue),
        "reps" => Ok(Input::Reps),
        "select" => rest
            .parse::<usize>()
            .map(Input::Select)
            .map_err(|_| format!("expected a representative number, got '{rest}'")),
        "generate" => Ok(Input::Generate),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        other => Err(format!("unknown command '{other}' (type 'help')")),
    }
}

/// Accepts the checklist number (1-4) or the issue slug.
fn parse_issue(raw: &str) -> Result<Issue, String> {
    if let Ok(n) = raw.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Issue::ALL.get(i).copied())
            .ok_or_else(|| format!("issue number must be 1 to {}", Issue::ALL.len()));
    }
    raw.parse::<Issue>().map_err(|e| e.to_string())
}

fn print_checklist<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    writeln!(out, "What do you want to say?")?;
    for (i, issue) in Issue::ALL.into_iter().enumerate() {
        let mark = if session.issues().is_selected(issue) {
            'x'
        } else {
            ' '
        };
        writeln!(out, "  {}. [{mark}] {} ({})", i + 1, issue.label(), issue.slug())?;
    }
    Ok(())
}

async fn handle<S, W>(
    source: &S,
    session: &mut Session,
    input: Input,
    out: &mut W,
) -> std::io::Result<()>
where
    S: RepresentativeSource,
    W: Write,
{
    match input {
        Input::Name(name) => {
            session.set_name(&name);
            writeln!(out, "Name set.")?;
        }
        Input::Zip(zip) => {
            if load_representatives(source, session, &zip, out).await?
                && !session.representatives().is_empty()
            {
                writeln!(out, "Use 'select <n>' to choose who to contact.")?;
            }
        }
        Input::Contact(contact) => {
            session.set_contact(&contact);
            if session.form().contact.is_empty() {
                writeln!(out, "Contact cleared.")?;
            } else {
                writeln!(out, "Contact set.")?;
            }
        }
        Input::Issues => print_checklist(out, session)?,
        Input::ToggleIssue(issue) => {
            let checked = session.toggle_issue(issue);
            let verb = if checked { "Checked" } else { "Unchecked" };
            writeln!(out, "{verb}: {}", issue.label())?;
        }
        Input::Reps => {
            if session.representatives().is_empty() {
                writeln!(out, "No representatives loaded; enter 'zip <zip code>' first.")?;
            } else {
                crate::lookup::print_representatives(out, session.representatives())?;
                if let Some(i) = session.selected_index() {
                    writeln!(out, "Selected: [{i}]")?;
                }
            }
        }
        Input::Select(index) => match session.select(index) {
            Ok(rep) => print_details(out, rep)?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Input::Generate => {
            let script = match session.generate() {
                Ok(script) => script.to_string(),
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    return Ok(());
                }
            };
            if let Some(rep) = session.selected_representative() {
                print_script(out, &script, rep)?;
            }
        }
        Input::Help => writeln!(out, "{HELP}")?,
        Input::Quit | Input::Blank => {}
    }
    Ok(())
}

/// Run the prompt loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only when reading input or writing output fails; form
/// and lookup problems are printed and the loop continues.
pub(crate) async fn run_interactive<S, R, W>(
    source: &S,
    reader: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: RepresentativeSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new();
    let mut lines = reader.lines();

    writeln!(out, "Contact Congress for Gaza and Justice")?;
    writeln!(out, "{HELP}")?;
    writeln!(out)?;
    print_checklist(out, &session)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(input) => handle(source, &mut session, input, out).await?,
            Err(message) => writeln!(out, "error: {message}")?,
        }
    }

    tracing::debug!(stage = ?session.stage(), "interactive session ended");
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "interactive_test.rs"]
mod tests;
