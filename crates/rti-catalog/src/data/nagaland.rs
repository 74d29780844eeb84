//! Nagaland content.

use rti_core::model::{DepartmentSection, DesignTheme, StateData, StateHero};

use super::{faqs, owned, process, sections};

const DEPARTMENTS: &[&str] = &[
    "RTI Nagaland General Administration Department",
    "RTI Nagaland Home Department",
    "RTI Nagaland Police Department",
    "RTI Nagaland Finance Department",
    "RTI Nagaland Planning & Coordination Department",
    "RTI Nagaland Revenue Department",
    "RTI Nagaland Taxation Department",
    "RTI Nagaland Registration & Stamps Department",
    "RTI Nagaland School Education Department",
    "RTI Nagaland Higher Education Department",
    "RTI Nagaland Technical Education Department",
    "RTI Nagaland Health & Family Welfare Department",
    "RTI Nagaland Public Works Department",
    "RTI Nagaland Rural Development Department",
    "RTI Nagaland Urban Development Department",
    "RTI Nagaland Transport Department",
    "RTI Nagaland Agriculture Department",
    "RTI Nagaland Horticulture Department",
    "RTI Nagaland Animal Husbandry & Veterinary Department",
    "RTI Nagaland Forest, Environment & Climate Change Department",
    "RTI Nagaland Industries & Commerce Department",
    "RTI Nagaland Tourism Department",
    "RTI Nagaland Social Welfare Department",
    "RTI Nagaland Labour & Employment Department",
    "RTI Nagaland Tribal Affairs Department",
    "RTI Nagaland Women Resource Development Department",
    "RTI Nagaland Youth Resources & Sports Department",
    "RTI Nagaland Information & Public Relations Department",
    "RTI Nagaland Information Technology & Communication Department",
    "RTI Nagaland Power Department",
    "RTI Nagaland Public Health Engineering Department",
    "RTI Nagaland Law & Justice Department",
    "RTI Nagaland Election Department",
];

const HIGHLIGHTS: &[&str] = &[
    "Covered: Nagaland Secretariat & State Departments",
    "Expert-drafted RTI questions",
    "Online filing and tracking support",
    "Service across all districts of Nagaland",
];

const FAQS: &[(&str, &str)] = &[
    (
        "Can I file RTI online in Nagaland?",
        "Yes, you can file RTI applications for Nagaland state departments online through FileMyRTI without visiting government offices.",
    ),
    (
        "Do I need to visit any government office to file RTI?",
        "No. The RTI filing process can be completed fully online with assistance from FileMyRTI.",
    ),
    (
        "What is the fee for filing an RTI application?",
        "The RTI application fee in Nagaland is ₹10 for state departments. BPL cardholders are exempted from paying fees.",
    ),
    (
        "How long does it take to receive a response?",
        "As per the RTI Act, the Public Information Officer must provide information within 30 days from the date of receipt. For matters concerning life and liberty, the response must be given within 48 hours.",
    ),
    (
        "Can RTI be filed for state government departments in Nagaland?",
        "Yes, RTI can be filed for Nagaland state government departments and public authorities.",
    ),
    (
        "Is RTI filing available for individual citizens?",
        "Yes, any Indian citizen can file an RTI application.",
    ),
];

const STEPS: &[(u32, &str, &str)] = &[
    (
        1,
        "Share your RTI details for Nagaland department or office",
        "Tell us what information you need from any Nagaland Government department or office.",
    ),
    (
        2,
        "Our team drafts your RTI as per RTI Act, 2005 and Nagaland rules",
        "Our experts draft a professional RTI application compliant with RTI Act 2005 and Nagaland Information Commission guidelines.",
    ),
    (
        3,
        "We file, track, and help you with replies or appeals",
        "We handle submission, fee payment, tracking, and assist with first/second appeals to Nagaland Information Commission if needed.",
    ),
];

/// Directory sections for the Nagaland department listing page.
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

pub(crate) fn record() -> StateData {
    StateData {
        name: "Nagaland".to_string(),
        slug: "nagaland".to_string(),
        languages: owned(&["English", "Hindi"]),
        hero: StateHero {
            title: "File RTI Online for Nagaland Government Departments".to_string(),
            subtitle: "Get expert-drafted RTI applications for Revenue, Police, Education, Transport and more – without visiting offices.".to_string(),
            image: "/images/hero.webp".to_string(),
            cta: "File RTI for Nagaland".to_string(),
        },
        departments: owned(DEPARTMENTS),
        highlights: owned(HIGHLIGHTS),
        faqs: faqs(FAQS),
        description: None,
        rti_portal_url: None,
        process: Some(process(STEPS)),
        commission: Some("Nagaland Information Commission".to_string()),
        fee: Some("₹10".to_string()),
        design_theme: Some(DesignTheme::Default),
    }
}

pub(crate) fn department_sections() -> Vec<DepartmentSection> {
    sections(SECTIONS)
}
