//! Jammu and Kashmir department directory.
//!
//! The labels below still name Nagaland departments; they were authored as a
//! placeholder copy of the Nagaland directory and are kept as a separate
//! table so they can be replaced without touching other jurisdictions.

use rti_core::model::DepartmentSection;

use super::sections;

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "RTI Nagaland General Administration Department",
        &[
            "RTI Nagaland General Administration Department",
            "RTI Nagaland Home Department",
            "RTI Nagaland Police Department",
            "RTI Nagaland Law & Justice Department",
            "RTI Nagaland Election Department",
        ],
    ),
    (
        "RTI Nagaland Finance Department",
        &[
            "RTI Nagaland Finance Department",
            "RTI Nagaland Revenue Department",
            "RTI Nagaland Registration & Stamps Department",
        ],
    ),
    (
        "RTI Nagaland Education & Skill Development",
        &[
            "RTI Nagaland School Education Department",
            "RTI Nagaland Higher Education Department",
            "RTI Nagaland Technical Education Department",
            "RTI Nagaland Youth Resources & Sports Department",
        ],
    ),
    (
        "RTI Nagaland Health & Medical Services",
        &[
            "RTI Nagaland Health & Family Welfare Department",
        ],
    ),
    (
        "RTI Nagaland Infrastructure & Development",
        &[
            "RTI Nagaland Public Works Department",
            "RTI Nagaland Urban Development Department",
            "RTI Nagaland Transport Department",
            "RTI Nagaland Rural Development Department",
        ],
    ),
    (
        "RTI Nagaland Agriculture & Rural Economy",
        &[
            "RTI Nagaland Horticulture Department",
            "RTI Nagaland Animal Husbandry & Veterinary Department",
        ],
    ),
    (
        "RTI Nagaland Industries, Commerce & Tourism",
        &[
            "RTI Nagaland Industries & Commerce Department",
            "RTI Nagaland Tourism Department",
        ],
    ),
    (
        "RTI Nagaland Environment & Forest",
        &[
            "RTI Nagaland Forest, Environment & Climate Change Department",
        ],
    ),
    (
        "RTI Nagaland Social Welfare & Employment",
        &[
            "RTI Nagaland Social Welfare Department",
            "RTI Nagaland Labour & Employment Department",
            "RTI Nagaland Tribal Affairs Department",
        ],
    ),
    (
        "RTI Nagaland Information Technology & Culture",
        &[
            "RTI Nagaland Information Technology & Communication Department",
            "RTI Nagaland Information & Public Relations Department",
        ],
    ),
];

pub(crate) fn department_sections() -> Vec<DepartmentSection> {
    sections(SECTIONS)
}
