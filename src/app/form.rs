//! src/app/form.rs
//!
//! Edge form and endpoint selectors: focus order, text editing, selector cycling.

/// Focusable inputs, in Tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    NodeA,
    NodeB,
    Weight,
    Source,
    Target,
}

impl Field {
    const ORDER: [Field; 5] = [
        Field::NodeA,
        Field::NodeB,
        Field::Weight,
        Field::Source,
        Field::Target,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, Field::NodeA | Field::NodeB | Field::Weight)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::NodeA => "Node 1",
            Field::NodeB => "Node 2",
            Field::Weight => "Weight",
            Field::Source => "Source",
            Field::Target => "Target",
        }
    }
}

/// Text of the three edge inputs.
#[derive(Debug, Default)]
pub struct EdgeForm {
    pub node_a: String,
    pub node_b: String,
    pub weight: String,
}

impl EdgeForm {
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::NodeA => Some(&self.node_a),
            Field::NodeB => Some(&self.node_b),
            Field::Weight => Some(&self.weight),
            Field::Source | Field::Target => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::NodeA => Some(&mut self.node_a),
            Field::NodeB => Some(&mut self.node_b),
            Field::Weight => Some(&mut self.weight),
            Field::Source | Field::Target => None,
        }
    }

    pub fn push(&mut self, field: Field, c: char) {
        if let Some(t) = self.text_mut(field) {
            t.push(c);
        }
    }

    pub fn pop(&mut self, field: Field) {
        if let Some(t) = self.text_mut(field) {
            t.pop();
        }
    }

    pub fn clear(&mut self) {
        self.node_a.clear();
        self.node_b.clear();
        self.weight.clear();
    }
}

/// Step a selector through `nodes`, wrapping at both ends.
///
/// An empty selection starts at the first node going forward and the last
/// going backward. Returns `None` only when there are no nodes.
pub fn cycle(current: Option<&str>, nodes: &[&str], forward: bool) -> Option<String> {
    if nodes.is_empty() {
        return None;
    }
    let len = nodes.len();
    let next = match current.and_then(|c| nodes.iter().position(|n| *n == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(nodes[next].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(Field::Target.next(), Field::NodeA);
        assert_eq!(Field::NodeA.prev(), Field::Target);
        assert_eq!(Field::Weight.next(), Field::Source);
    }

    #[test]
    fn editing_only_touches_text_fields() {
        let mut form = EdgeForm::default();
        form.push(Field::NodeA, 'x');
        form.push(Field::Source, 'y');
        form.push(Field::Weight, '4');
        form.pop(Field::Weight);
        form.pop(Field::NodeB);
        assert_eq!(form.node_a, "x");
        assert_eq!(form.weight, "");
        assert_eq!(form.text(Field::Source), None);
    }

    #[test]
    fn selector_cycles_through_nodes() {
        let nodes = ["A", "B", "C"];
        assert_eq!(cycle(None, &nodes, true).as_deref(), Some("A"));
        assert_eq!(cycle(None, &nodes, false).as_deref(), Some("C"));
        assert_eq!(cycle(Some("C"), &nodes, true).as_deref(), Some("A"));
        assert_eq!(cycle(Some("A"), &nodes, false).as_deref(), Some("C"));
        assert_eq!(cycle(Some("gone"), &nodes, true).as_deref(), Some("A"));
        assert_eq!(cycle(Some("A"), &[], true), None);
    }
}
