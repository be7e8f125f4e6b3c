//! The Report type: the three artifacts of one analysis.

/// The output of analyzing one text.
///
/// All three fields are always populated. Degenerate inputs (empty text,
/// no rankable words, no task language) produce fixed fallback text in
/// the corresponding field rather than an empty or missing value, so a
/// `Report` can be rendered unconditionally.
///
/// ```rust
/// use gist::analyze;
///
/// let report = analyze("");
/// assert_eq!(report.summary, "Please paste some text first.");
/// assert_eq!(report.insights.len(), 1);
/// assert_eq!(report.actions.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Short summary built from the leading sentences.
    pub summary: String,
    /// Ranked keyword insight lines, most frequent first.
    pub insights: Vec<String>,
    /// Task-like sentences (or the fallback checklist), at most five.
    pub actions: Vec<String>,
}

impl std::fmt::Display for Report {
    /// Renders the three numbered sections with bulleted lists:
    ///
    /// ```text
    /// 1) Short Summary
    /// ...
    ///
    /// 2) Key Insights
    /// - ...
    ///
    /// 3) Action Items
    /// - ...
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "1) Short Summary")?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;

        writeln!(f, "2) Key Insights")?;
        for insight in &self.insights {
            writeln!(f, "- {insight}")?;
        }
        writeln!(f)?;

        writeln!(f, "3) Action Items")?;
        for (i, action) in self.actions.iter().enumerate() {
            if i + 1 < self.actions.len() {
                writeln!(f, "- {action}")?;
            } else {
                write!(f, "- {action}")?;
            }
        }
        Ok(())
    }
}
