//! Lookup and one-shot script command handlers.
//!
//! Both commands drive a [`Session`] the same way the interactive loop does,
//! so validation and state rules live in one place.

use std::io::Write;

use callrep_core::{Issue, Representative};
use callrep_fivecalls::{FiveCallsClient, LookupError, LookupOutcome};

use crate::session::Session;

pub(crate) const ADDITIONAL_RESOURCES: &str = "\
Additional Resources
If you need to double-check your representatives' information:
- Official House Directory: https://www.house.gov/representatives/find-your-representative
- Senate Directory: https://www.senate.gov/senators/senators-contact.htm
- Common Cause - Contact Congress: https://www.commoncause.org/find-your-representative/";

/// Anything that can resolve a ZIP code to representatives.
pub(crate) trait RepresentativeSource {
    async fn lookup(&self, zip_code: &str) -> Result<LookupOutcome, LookupError>;
}

impl RepresentativeSource for FiveCallsClient {
    async fn lookup(&self, zip_code: &str) -> Result<LookupOutcome, LookupError> {
        FiveCallsClient::lookup(self, zip_code).await
    }
}

/// Arguments for the one-shot `script` command.
#[derive(Debug)]
pub(crate) struct ScriptArgs<'a> {
    pub zip: &'a str,
    pub name: &'a str,
    pub contact: &'a str,
    pub issues: &'a [Issue],
    pub rep: usize,
}

/// Submit `zip` to the session, run the lookup and print the outcome.
///
/// Validation and lookup failures are printed inline; the return value says
/// whether the lookup itself succeeded (an empty result still counts).
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub(crate) async fn load_representatives<S, W>(
    source: &S,
    session: &mut Session,
    zip: &str,
    out: &mut W,
) -> std::io::Result<bool>
where
    S: RepresentativeSource,
    W: Write,
{
    let zip_code = match session.submit_zip(zip) {
        Ok(zip_code) => zip_code.to_string(),
        Err(e) => {
            writeln!(out, "error: {e}")?;
            return Ok(false);
        }
    };

    let result = source.lookup(&zip_code).await;
    match session.apply_lookup(result) {
        Ok(warning) => {
            if let Some(warning) = warning {
                writeln!(out, "warning: {warning}")?;
            }
            if session.representatives().is_empty() {
                writeln!(out, "No representatives found for {zip_code}.")?;
            } else {
                print_representatives(out, session.representatives())?;
            }
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, transport = e.is_transport(), "lookup failed");
            writeln!(out, "error: {e}")?;
            Ok(false)
        }
    }
}

pub(crate) fn print_representatives<W: Write>(
    out: &mut W,
    representatives: &[Representative],
) -> std::io::Result<()> {
    writeln!(out, "Your Representatives")?;
    for (i, rep) in representatives.iter().enumerate() {
        writeln!(out, "  [{i}] {}", rep.display_name())?;
    }
    Ok(())
}

pub(crate) fn print_details<W: Write>(out: &mut W, rep: &Representative) -> std::io::Result<()> {
    writeln!(out, "Representative Details: {}", rep.display_name())?;
    for line in rep.details() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

pub(crate) fn print_script<W: Write>(
    out: &mut W,
    script: &str,
    rep: &Representative,
) -> std::io::Result<()> {
    writeln!(out, "---")?;
    writeln!(out, "Your Message Script")?;
    writeln!(out)?;
    writeln!(out, "{script}")?;
    writeln!(out)?;
    writeln!(out, "{}", rep.contact_summary())?;
    writeln!(out, "---")?;
    writeln!(out, "{ADDITIONAL_RESOURCES}")
}

/// `callrep lookup --zip Z`: list every representative with details.
///
/// Returns `false` when the ZIP was blank or the lookup failed; the reason
/// has already been printed.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub(crate) async fn run_lookup<S, W>(source: &S, zip: &str, out: &mut W) -> anyhow::Result<bool>
where
    S: RepresentativeSource,
    W: Write,
{
    let mut session = Session::new();
    if !load_representatives(source, &mut session, zip, out).await? {
        return Ok(false);
    }

    for rep in session.representatives() {
        writeln!(out)?;
        print_details(out, rep)?;
    }
    Ok(true)
}

/// `callrep script ...`: lookup, select and generate in one go.
///
/// Returns `false` when any step fails (blank ZIP, failed lookup, bad
/// selection, no issues); the reason has already been printed.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub(crate) async fn run_script<S, W>(
    source: &S,
    args: &ScriptArgs<'_>,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: RepresentativeSource,
    W: Write,
{
    let mut session = Session::new();
    session.set_name(args.name);
    session.set_contact(args.contact);
    for issue in args.issues {
        session.set_issue(*issue, true);
    }

    if !load_representatives(source, &mut session, args.zip, out).await? {
        return Ok(false);
    }

    // An empty lookup result surfaces here as RepresentativesNotLoaded.
    if let Err(e) = session.select(args.rep) {
        writeln!(out, "error: {e}")?;
        return Ok(false);
    }

    let script = match session.generate() {
        Ok(script) => script.to_string(),
        Err(e) => {
            writeln!(out, "error: {e}")?;
            return Ok(false);
        }
    };

    if let Some(rep) = session.selected_representative() {
        writeln!(out)?;
        print_details(out, rep)?;
        print_script(out, &script, rep)?;
    }
    Ok(true)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
