//! Fixed-template advocacy script rendering.
//!
//! Rendering is pure: the same inputs always yield the same text, and missing
//! identity fields are filled with bracketed placeholders instead of failing.

use crate::representative::Representative;

const NAME_PLACEHOLDER: &str = "[NAME]";
const ZIP_PLACEHOLDER: &str = "[ZIP CODE]";

/// How the constituent is reaching out, inferred from their contact value.
///
/// Anything containing `@` counts as an email address; every other value is
/// treated as a phone contact. This is a heuristic, not validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Call,
}

impl ContactMethod {
    #[must_use]
    pub fn from_contact(contact: &str) -> Self {
        if contact.contains('@') {
            ContactMethod::Email
        } else {
            ContactMethod::Call
        }
    }

    /// Opening clause, e.g. `I'm calling` in "... and I'm calling from 94110".
    #[must_use]
    pub fn intro(self) -> &'static str {
        match self {
            ContactMethod::Email => "I'm emailing you",
            ContactMethod::Call => "I'm calling",
        }
    }

    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            ContactMethod::Email => "emailing you",
            ContactMethod::Call => "calling",
        }
    }
}

/// Inputs for a single script render.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRequest<'a> {
    pub name: &'a str,
    pub zip_code: &'a str,
    /// Optional email address or phone number for a reply. Empty means none.
    pub contact: &'a str,
    pub selected_issues: &'a [&'a str],
    pub representative: &'a Representative,
}

impl ScriptRequest<'_> {
    #[must_use]
    pub fn contact_method(&self) -> ContactMethod {
        ContactMethod::from_contact(self.contact)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let method = self.contact_method();
        let title = self.representative.title();
        let name = or_placeholder(self.name, NAME_PLACEHOLDER);
        let zip_code = or_placeholder(self.zip_code, ZIP_PLACEHOLDER);

        let mut script = format!(
            "Dear {title} {rep_name},\n\
             \n\
             Hi, my name is {name} and {intro} from {zip_code}. \
             I'm {verb} to ask for your support on the following issues:\n\
             \n\
             {issues}\n\
             \n\
             As my {title_lower} in Congress, I urge you to take action on these critical matters.\n\
             \n\
             Thank you for your time and consideration.",
            rep_name = self.representative.name,
            intro = method.intro(),
            verb = method.verb(),
            issues = self.selected_issues.join("\n"),
            title_lower = title.to_lowercase(),
        );

        if !self.contact.is_empty() {
            script.push_str("\n\nI would kindly appreciate a response at ");
            script.push_str(self.contact);
            script.push('.');
        }

        script.trim().to_string()
    }
}

/// Render the advocacy script for one representative.
///
/// `selected_issues` should already be in catalog order; see
/// [`IssueSelection::statements`](crate::IssueSelection::statements).
#[must_use]
pub fn generate_script(
    name: &str,
    zip_code: &str,
    contact: &str,
    selected_issues: &[&str],
    representative: &Representative,
) -> String {
    ScriptRequest {
        name,
        zip_code,
        contact,
        selected_issues,
        representative,
    }
    .render()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
