use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Removed,
    Added,
}

impl LineChange {
    pub fn marker(&self) -> &'static str {
        match self {
            LineChange::Removed => "-",
            LineChange::Added => "+",
        }
    }
}

/// One reported line; `number` is 1-based
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffLine {
    pub number: usize,
    pub change: LineChange,
    pub text: String,
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.change.marker(), self.text)
    }
}

/// Diff of one staged file against its working copy
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileDiff {
    pub name: String,
    pub lines: Vec<DiffLine>,
}

/// Compare `staged` and `working` line by line up to the longer of the two.
///
/// Differing lines at the same index yield a removal followed by an addition.
/// Indices past the end of the shorter side yield a one-sided change.
pub fn positional_diff(staged: &str, working: &str) -> Vec<DiffLine> {
    let staged = staged.lines().collect::<Vec<_>>();
    let working = working.lines().collect::<Vec<_>>();

    (0..staged.len().max(working.len()))
        .flat_map(|i| {
            let number = i + 1;
            let removed = |text: &str| DiffLine::new(number, LineChange::Removed, text.to_string());
            let added = |text: &str| DiffLine::new(number, LineChange::Added, text.to_string());

            match (staged.get(i), working.get(i)) {
                (Some(old), Some(new)) if old == new => vec![],
                (Some(old), Some(new)) => vec![removed(old), added(new)],
                (Some(old), None) => vec![removed(old)],
                (None, Some(new)) => vec![added(new)],
                (None, None) => unreachable!("index is bounded by the longer side"),
            }
        })
        .collect()
}
