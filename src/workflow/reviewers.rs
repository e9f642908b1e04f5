//! Parsing of the comma-separated reviewer input.

/// Reviewer logins to request on the created pull request.
///
/// # Example
///
/// ```
/// use autopr::workflow::ReviewerList;
///
/// let reviewers = ReviewerList::parse(" user1, ,user2,");
/// assert_eq!(reviewers.as_slice(), ["user1", "user2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerList(Vec<String>);

impl ReviewerList {
    /// Splits `input` on commas, trimming whitespace and dropping empty
    /// entries. Duplicate logins are collapsed, keeping first occurrence.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut reviewers: Vec<String> = Vec::new();
        for login in input.split(',').map(str::trim) {
            if login.is_empty() || reviewers.iter().any(|seen| seen == login) {
                continue;
            }
            reviewers.push(login.to_owned());
        }
        Self(reviewers)
    }

    /// Returns `true` when no reviewer should be requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the logins.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
