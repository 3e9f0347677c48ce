//! Row accumulation and rendering.

use std::collections::HashMap;

/// An ordered collection of `(label, value)` rows rendered one per line.
///
/// Rows added with [`RowSet::push`] keep insertion order. Rows added from
/// an unordered mapping with [`RowSet::push_map`] are sorted by label
/// first, so output never depends on a map's iteration order.
///
/// # Examples
///
/// ```
/// use finfo::output::RowSet;
///
/// let mut rows = RowSet::new();
/// rows.push("file", "/home/user/notes.txt");
/// rows.push("size", "12 B");
/// assert_eq!(rows.render(), "FILE: /home/user/notes.txt\nSIZE: 12 B\n");
/// ```
#[derive(Debug, Default)]
pub struct RowSet {
    rows: Vec<(String, String)>,
}

impl RowSet {
    /// Create an empty row set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single row.
    ///
    /// An empty label is allowed; such a row renders as the bare value
    /// with no label prefix.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Append every entry of an unordered mapping, sorted by label.
    ///
    /// The sort is lexicographic ascending and happens here, explicitly,
    /// so two runs over the same mapping always render identically.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use finfo::output::RowSet;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("b".to_string(), "2".to_string());
    /// values.insert("a".to_string(), "1".to_string());
    ///
    /// let mut rows = RowSet::new();
    /// rows.push_map(&values);
    /// assert_eq!(rows.render(), "A: 1\nB: 2\n");
    /// ```
    pub fn push_map(&mut self, values: &HashMap<String, String>) {
        let mut labels: Vec<&String> = values.keys().collect();
        labels.sort();

        for label in labels {
            self.rows.push((label.clone(), values[label].clone()));
        }
    }

    /// Render every row as `"LABEL: value"` lines.
    ///
    /// Labels are uppercased; a row with an empty label renders as just
    /// its value.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, value) in &self.rows {
            if label.is_empty() {
                out.push_str(value);
            } else {
                out.push_str(&label.to_uppercase());
                out.push_str(": ");
                out.push_str(value);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let mut rows = RowSet::new();
        rows.push("FILE", "bar");
        assert_eq!(rows.render(), "FILE: bar\n");
    }

    #[test]
    fn test_label_uppercased() {
        let mut rows = RowSet::new();
        rows.push("size", "1.0 kB");
        assert_eq!(rows.render(), "SIZE: 1.0 kB\n");
    }

    #[test]
    fn test_empty_label_renders_bare_value() {
        let mut rows = RowSet::new();
        rows.push("", "/home/user/project");
        assert_eq!(rows.render(), "/home/user/project\n");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut rows = RowSet::new();
        rows.push("zeta", "1");
        rows.push("alpha", "2");
        assert_eq!(rows.render(), "ZETA: 1\nALPHA: 2\n");
    }

    #[test]
    fn test_push_map_sorts_by_label() {
        let mut values = HashMap::new();
        values.insert("b".to_string(), "2".to_string());
        values.insert("a".to_string(), "1".to_string());

        let mut rows = RowSet::new();
        rows.push_map(&values);
        assert_eq!(rows.render(), "A: 1\nB: 2\n");
    }

    #[test]
    fn test_push_map_appends_after_ordered_rows() {
        let mut values = HashMap::new();
        values.insert("MD5".to_string(), "x".to_string());
        values.insert("SHA256".to_string(), "z".to_string());
        values.insert("SHA1".to_string(), "y".to_string());

        let mut rows = RowSet::new();
        rows.push("FILE", "/f");
        rows.push_map(&values);

        assert_eq!(rows.render(), "FILE: /f\nMD5: x\nSHA1: y\nSHA256: z\n");
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        assert_eq!(RowSet::new().render(), "");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Map insertion order never affects the rendered output.
            #[test]
            fn push_map_is_order_invariant(
                entries in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{1,8}", 0..10)
            ) {
                let forward: HashMap<String, String> =
                    entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                let reverse: HashMap<String, String> =
                    entries.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();

                let mut first = RowSet::new();
                first.push_map(&forward);
                let mut second = RowSet::new();
                second.push_map(&reverse);

                prop_assert_eq!(first.render(), second.render());
            }

            /// Rendering emits exactly one line per row.
            #[test]
            fn one_line_per_row(
                labels in proptest::collection::vec("[a-z]{1,8}", 0..10)
            ) {
                let mut rows = RowSet::new();
                for label in &labels {
                    rows.push(label.clone(), "v");
                }
                let rendered = rows.render();
                prop_assert_eq!(rendered.matches('\n').count(), labels.len());
            }
        }
    }
}
