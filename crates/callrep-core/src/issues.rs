//! The fixed catalog of advocacy statements a caller can raise.

use std::str::FromStr;

use crate::CoreError;

/// One entry in the issue catalog. Variant order is the catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    Ceasefire,
    EthnicCleansing,
    HumanitarianAid,
    MilitaryAid,
}

impl Issue {
    pub const ALL: [Issue; 4] = [
        Issue::Ceasefire,
        Issue::EthnicCleansing,
        Issue::HumanitarianAid,
        Issue::MilitaryAid,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Issue::Ceasefire => "ceasefire",
            Issue::EthnicCleansing => "ethnic-cleansing",
            Issue::HumanitarianAid => "humanitarian-aid",
            Issue::MilitaryAid => "military-aid",
        }
    }

    /// Short checkbox text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Issue::Ceasefire => "Call for immediate ceasefire in Gaza",
            Issue::EthnicCleansing => "Condemn Trump's ethnic cleansing proposal",
            Issue::HumanitarianAid => "Demand humanitarian aid access to Gaza",
            Issue::MilitaryAid => "Stop military aid to Israel",
        }
    }

    /// Numbered sentence inserted into the script body.
    #[must_use]
    pub fn statement(self) -> &'static str {
        match self {
            Issue::Ceasefire => "1. Implementing and upholding a ceasefire in Gaza.",
            Issue::EthnicCleansing => {
                "2. Condemning Trump's proposal to ethnically cleanse the Palestinian Territories."
            }
            Issue::HumanitarianAid => "3. Allowing unrestricted humanitarian aid into Gaza.",
            Issue::MilitaryAid => {
                "4. Ending the use of U.S. tax dollars for military aid to Israel."
            }
        }
    }

    fn index(self) -> usize {
        match self {
            Issue::Ceasefire => 0,
            Issue::EthnicCleansing => 1,
            Issue::HumanitarianAid => 2,
            Issue::MilitaryAid => 3,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Issue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Issue::ALL
            .into_iter()
            .find(|issue| issue.slug() == normalized)
            .ok_or_else(|| CoreError::UnknownIssue(s.to_string()))
    }
}

/// Which catalog entries are checked.
///
/// Output order always follows the catalog, never the order in which issues
/// were ticked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueSelection {
    flags: [bool; 4],
}

impl IssueSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, issue: Issue, selected: bool) {
        self.flags[issue.index()] = selected;
    }

    /// Flip an issue and return its new state.
    pub fn toggle(&mut self, issue: Issue) -> bool {
        let flag = &mut self.flags[issue.index()];
        *flag = !*flag;
        *flag
    }

    #[must_use]
    pub fn is_selected(&self, issue: Issue) -> bool {
        self.flags[issue.index()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|f| *f)
    }

    #[must_use]
    pub fn selected(&self) -> Vec<Issue> {
        Issue::ALL
            .into_iter()
            .filter(|issue| self.is_selected(*issue))
            .collect()
    }

    #[must_use]
    pub fn statements(&self) -> Vec<&'static str> {
        self.selected().into_iter().map(Issue::statement).collect()
    }
}

impl FromIterator<Issue> for IssueSelection {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        let mut selection = Self::new();
        for issue in iter {
            selection.set(issue, true);
        }
        selection
    }
}
