//! Tree display utilities.

use std::fmt;

/// An owned tree of labels, built up and then rendered with `DisplayTree`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextTree {
    label: String,
    details: Option<String>,
    children: Vec<TextTree>,
}

impl TextTree {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            details: None,
            children: Vec::new(),
        }
    }

    /// Attach a parenthesized detail shown after the label.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: TextTree) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place.
    pub fn push(&mut self, child: TextTree) {
        self.children.push(child);
    }

    /// The node label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Child nodes.
    pub fn children(&self) -> &[TextTree] {
        &self.children
    }

    /// Borrow this tree as a `Display` value.
    pub fn display(&self) -> DisplayTree<'_> {
        DisplayTree::new(self)
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        writeln!(f)
    }
}

/// Helper for displaying tree structures with box-drawing connectors.
pub struct DisplayTree<'a> {
    root: &'a TextTree,
}

impl<'a> DisplayTree<'a> {
    /// Create a new display tree.
    pub fn new(root: &'a TextTree) -> Self {
        Self { root }
    }

    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &TextTree,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let connector = if is_last { "└─ " } else { "├─ " };
        write!(f, "{prefix}{connector}")?;
        node.write_line(f)?;

        let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
        for (i, child) in node.children.iter().enumerate() {
            Self::fmt_node(f, child, &child_prefix, i == node.children.len() - 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_line(f)?;

        let children = &self.root.children;
        for (i, child) in children.iter().enumerate() {
            Self::fmt_node(f, child, "", i == children.len() - 1)?;
        }

        Ok(())
    }
}
