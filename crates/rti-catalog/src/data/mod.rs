//! Literal content compiled into the catalog.
//!
//! Each state or jurisdiction lives in its own module as `const` tables of
//! string slices. The helpers here turn those tables into owned model records
//! once, when the catalog snapshot is first built.

use rti_core::model::{DepartmentSection, ProcessStep, StateData, StateFaq, StateProcess};

mod jammu_and_kashmir;
mod nagaland;
mod rajasthan;
mod telangana;

/// Every built-in state record.
pub(crate) fn states() -> Vec<StateData> {
    vec![telangana::record(), nagaland::record()]
}

/// Every built-in sectioned directory, keyed by jurisdiction slug.
pub(crate) fn department_sections() -> Vec<(&'static str, Vec<DepartmentSection>)> {
    vec![
        ("nagaland", nagaland::department_sections()),
        ("jammu-and-kashmir", jammu_and_kashmir::department_sections()),
        ("rajasthan", rajasthan::department_sections()),
    ]
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn faqs(items: &[(&str, &str)]) -> Vec<StateFaq> {
    items
        .iter()
        .map(|(q, a)| StateFaq {
            q: q.to_string(),
            a: a.to_string(),
        })
        .collect()
}

fn process(steps: &[(u32, &str, &str)]) -> StateProcess {
    StateProcess {
        steps: steps
            .iter()
            .map(|(step, title, description)| ProcessStep {
                step: *step,
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn sections(table: &[(&str, &[&str])]) -> Vec<DepartmentSection> {
    table
        .iter()
        .map(|(category, items)| DepartmentSection::new(*category, items.iter().copied()))
        .collect()
}
