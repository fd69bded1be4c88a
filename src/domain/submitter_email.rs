use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: local part, a single `@`, a dotted domain,
// no whitespace anywhere. Not an RFC validator.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !EMAIL_PATTERN.is_match(&s) {
            return Err(format!("{s} is not a valid submitter email."));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubmitterEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubmitterEmail::parse(value)
    }
}
