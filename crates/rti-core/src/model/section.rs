use serde::{Deserialize, Serialize};

/// A category of department names for one jurisdiction's directory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSection {
    pub category: String,
    pub items: Vec<String>,
}

impl DepartmentSection {
    pub fn new<I, S>(category: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All items of `sections`, section order then item order.
pub fn flatten_sections(sections: &[DepartmentSection]) -> Vec<&str> {
    sections
        .iter()
        .flat_map(|s| s.items.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_keeps_order() {
        let sections = vec![
            DepartmentSection::new("A", ["a1", "a2"]),
            DepartmentSection::new("B", ["b1"]),
        ];
        assert_eq!(flatten_sections(&sections), vec!["a1", "a2", "b1"]);
        assert_eq!(sections[0].len(), 2);
    }
}
