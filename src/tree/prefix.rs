/// Connector for an entry with later siblings
pub const BRANCH: &str = "├── ";
/// Connector for the last entry of a sibling group
pub const LAST_BRANCH: &str = "└── ";
/// Indent under a non-last ancestor
pub const PIPE: &str = "│   ";
/// Indent under a last ancestor
pub const BLANK: &str = "    ";

/// Continuation token for one ancestor level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Pipe,
    Blank,
}

impl Indent {
    pub fn as_str(self) -> &'static str {
        match self {
            Indent::Pipe => PIPE,
            Indent::Blank => BLANK,
        }
    }
}

/// Indentation accumulated from the ancestors of the entries being printed.
///
/// Each recursion level gets its own copy via [`PrefixState::child`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixState {
    tokens: Vec<Indent>,
    rendered: String,
}

impl PrefixState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for the children of an entry printed under `self`.
    pub fn child(&self, parent_is_last: bool) -> Self {
        let indent = if parent_is_last {
            Indent::Blank
        } else {
            Indent::Pipe
        };

        let mut next = self.clone();
        next.tokens.push(indent);
        next.rendered.push_str(indent.as_str());
        next
    }

    pub fn tokens(&self) -> &[Indent] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}
