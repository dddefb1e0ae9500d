//! Per-session form state for one person working through the lookup and
//! script flow.
//!
//! `Session` holds everything the form collects plus the representatives from
//! the latest lookup. It does no I/O: callers perform the lookup and hand the
//! result to [`Session::apply_lookup`].

use callrep_core::{generate_script, Issue, IssueSelection, Representative, ValidationError};
use callrep_fivecalls::{LookupError, LookupOutcome, LookupWarning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Idle,
    RepresentativesLoaded,
    RepresentativeSelected,
    ScriptGenerated,
}

#[derive(Debug, Default)]
pub(crate) struct ContactForm {
    pub name: String,
    pub zip_code: String,
    /// Email address or phone number for a reply; empty when not given.
    pub contact: String,
}

#[derive(Debug)]
pub(crate) struct Session {
    form: ContactForm,
    issues: IssueSelection,
    representatives: Vec<Representative>,
    selected: Option<usize>,
    stage: Stage,
    script: Option<String>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            form: ContactForm::default(),
            issues: IssueSelection::new(),
            representatives: Vec::new(),
            selected: None,
            stage: Stage::Idle,
            script: None,
        }
    }

    pub(crate) fn stage(&self) -> Stage {
        self.stage
    }

    pub(crate) fn form(&self) -> &ContactForm {
        &self.form
    }

    pub(crate) fn issues(&self) -> &IssueSelection {
        &self.issues
    }

    pub(crate) fn representatives(&self) -> &[Representative] {
        &self.representatives
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn selected_representative(&self) -> Option<&Representative> {
        self.selected.and_then(|i| self.representatives.get(i))
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.form.name = name.trim().to_string();
    }

    pub(crate) fn set_contact(&mut self, contact: &str) {
        self.form.contact = contact.trim().to_string();
    }

    pub(crate) fn set_issue(&mut self, issue: Issue, selected: bool) {
        self.issues.set(issue, selected);
    }

    pub(crate) fn toggle_issue(&mut self, issue: Issue) -> bool {
        self.issues.toggle(issue)
    }

    /// Record a new ZIP code ahead of a lookup.
    ///
    /// Any previously loaded representatives and selection are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingZip`] for a blank ZIP; the session
    /// is left untouched.
    pub(crate) fn submit_zip(&mut self, zip_code: &str) -> Result<&str, ValidationError> {
        let zip_code = zip_code.trim();
        if zip_code.is_empty() {
            return Err(ValidationError::MissingZip);
        }
        self.form.zip_code = zip_code.to_string();
        self.clear_lookup();
        Ok(&self.form.zip_code)
    }

    /// Store the result of a lookup for the current ZIP code.
    ///
    /// A failed or empty lookup leaves the session idle with no
    /// representatives.
    ///
    /// # Errors
    ///
    /// Passes the lookup error back to the caller for display.
    pub(crate) fn apply_lookup(
        &mut self,
        result: Result<LookupOutcome, LookupError>,
    ) -> Result<Option<LookupWarning>, LookupError> {
        self.clear_lookup();
        let outcome = result?;
        if !outcome.representatives.is_empty() {
            self.representatives = outcome.representatives;
            self.stage = Stage::RepresentativesLoaded;
        }
        Ok(outcome.warning)
    }

    /// Choose which loaded representative the script addresses.
    ///
    /// # Errors
    ///
    /// [`ValidationError::RepresentativesNotLoaded`] before a successful
    /// lookup, [`ValidationError::SelectionOutOfRange`] for a bad index.
    pub(crate) fn select(&mut self, index: usize) -> Result<&Representative, ValidationError> {
        if self.representatives.is_empty() {
            return Err(ValidationError::RepresentativesNotLoaded);
        }
        if index >= self.representatives.len() {
            return Err(ValidationError::SelectionOutOfRange {
                index,
                available: self.representatives.len(),
            });
        }
        self.selected = Some(index);
        self.script = None;
        self.stage = Stage::RepresentativeSelected;
        Ok(&self.representatives[index])
    }

    /// Render the script for the selected representative.
    ///
    /// # Errors
    ///
    /// Checks run in this order: ZIP present, representatives loaded, at
    /// least one issue, a representative selected. A failed check leaves the
    /// stage unchanged.
    pub(crate) fn generate(&mut self) -> Result<&str, ValidationError> {
        if self.form.zip_code.is_empty() {
            return Err(ValidationError::MissingZip);
        }
        if self.representatives.is_empty() {
            return Err(ValidationError::RepresentativesNotLoaded);
        }
        if self.issues.is_empty() {
            return Err(ValidationError::NoIssuesSelected);
        }
        let representative = self
            .selected_representative()
            .ok_or(ValidationError::NoRepresentativeSelected)?;

        let statements = self.issues.statements();
        let script = generate_script(
            &self.form.name,
            &self.form.zip_code,
            &self.form.contact,
            &statements,
            representative,
        );
        tracing::debug!(
            representative = %representative.name,
            issues = statements.len(),
            "script generated"
        );

        self.stage = Stage::ScriptGenerated;
        Ok(self.script.insert(script).as_str())
    }

    fn clear_lookup(&mut self) {
        self.representatives.clear();
        self.selected = None;
        self.script = None;
        self.stage = Stage::Idle;
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
