//! Federal legislator records as returned by the 5 Calls representatives
//! endpoint, plus the display helpers used when listing them.

use serde::{Deserialize, Deserializer, Serialize};

/// A district or state office with its own phone line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOffice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    House,
    Senate,
    Other,
}

impl Chamber {
    #[must_use]
    pub fn from_area(area: &str) -> Self {
        match area {
            "US House" => Chamber::House,
            "US Senate" => Chamber::Senate,
            _ => Chamber::Other,
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chamber::House => write!(f, "US House"),
            Chamber::Senate => write!(f, "US Senate"),
            Chamber::Other => write!(f, "other"),
        }
    }
}

/// A federal legislator matched to a location.
///
/// Every field tolerates absence in the upstream JSON; the API omits keys
/// freely (senators have no district, vacant seats have no phone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Chamber label, `"US House"` or `"US Senate"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_district")]
    pub district: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_offices: Vec<FieldOffice>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    /// Free-text explanation of why this legislator matched the location.
    #[serde(default)]
    pub reason: Option<String>,
}

impl Representative {
    #[must_use]
    pub fn chamber(&self) -> Chamber {
        Chamber::from_area(&self.area)
    }

    /// Salutation title used in the script greeting.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.chamber() {
            Chamber::Senate => "Senator",
            Chamber::House | Chamber::Other => "Representative",
        }
    }

    /// One-line label for a selection list, e.g.
    /// `Jane Doe (Democrat) - US House - CA District 12`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let party = present(self.party.as_deref()).unwrap_or("N/A");
        let mut title = format!("{} - {}", self.area, self.state);
        if let Some(district) = present(self.district.as_deref()) {
            title.push_str(" District ");
            title.push_str(district);
        }
        format!("{} ({party}) - {title}", self.name)
    }

    /// Detail lines for the currently selected representative. Absent fields
    /// produce no line at all.
    #[must_use]
    pub fn details(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(reason) = present(self.reason.as_deref()) {
            lines.push(reason.to_string());
        }
        if let Some(phone) = present(self.phone.as_deref()) {
            lines.push(format!("DC Office: {phone}"));
        }
        if !self.field_offices.is_empty() {
            lines.push("Local Offices:".to_string());
            for office in &self.field_offices {
                lines.push(format!("  \u{2022} {}: {}", office.city, office.phone));
            }
        }
        if let Some(url) = present(self.url.as_deref()) {
            lines.push(format!("Official Website: {url}"));
        }
        lines
    }

    /// Reminder of how to reach this legislator, shown next to a generated script.
    #[must_use]
    pub fn contact_summary(&self) -> String {
        format!(
            "To contact {}:\n- DC Office: {}\n- Website: {}",
            self.name,
            present(self.phone.as_deref()).unwrap_or("N/A"),
            present(self.url.as_deref()).unwrap_or("N/A"),
        )
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Treats an explicit JSON `null` the same as a missing key.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither `null` nor a
/// valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Districts arrive as strings (`"12"`, `"AL"`) but some payloads carry bare
/// numbers; accept both.
fn deserialize_district<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(i64),
    }

    let raw = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(|v| match v {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
#[path = "representative_test.rs"]
mod tests;
