//! Telangana content.

use rti_core::model::{DesignTheme, StateData, StateHero};

use super::{faqs, owned, process};

const DEPARTMENTS: &[&str] = &[
    "Telangana Secretariat",
    "Telangana Revenue Department",
    "Telangana Police Department",
    "Telangana Education Department",
    "Telangana Health & Family Welfare Department",
    "Telangana Transport Department",
    "Telangana Public Works Department (PWD)",
    "Telangana Irrigation & CAD Department",
    "Telangana Rural Development Department",
    "Telangana Municipal Administration & Urban Development Department",
    "Telangana Registration & Stamps Department",
    "Telangana Commercial Taxes Department",
    "Telangana Labour Department",
    "Telangana Social Welfare Department",
    "Telangana Scheduled Castes Development Department",
    "Telangana Scheduled Tribes Welfare Department",
    "Telangana Women & Child Development Department",
    "Telangana Backward Classes Welfare Department",
    "Telangana Minority Welfare Department",
    "Telangana Youth & Sports Department",
    "Telangana Information & Public Relations Department",
    "Telangana Finance Department",
    "Telangana Planning Department",
    "Telangana Home Department",
    "Telangana Law Department",
    "Telangana Forest Department",
    "Telangana Environment Department",
    "Telangana Mines & Geology Department",
    "Telangana Industries & Commerce Department",
    "Telangana Information Technology Department",
    "Telangana Tourism & Culture Department",
    "Telangana Housing Department",
    "Telangana Water Resources Department",
    "Telangana Energy Department",
    "Telangana Agriculture & Cooperation Department",
    "Telangana Food & Civil Supplies Department",
    "Telangana Panchayat Raj & Rural Development Department",
    "Telangana Urban Development Department",
    "Telangana Medical & Health Department",
    "Telangana School Education Department",
    "Telangana Higher Education Department",
    "Telangana Technical Education Department",
    "Telangana Animal Husbandry Department",
    "Telangana Fisheries Department",
    "Telangana Horticulture Department",
    "Telangana Sericulture Department",
    "Telangana Handlooms & Textiles Department",
    "Telangana Endowments Department",
    "Telangana BC Welfare Department",
];

const HIGHLIGHTS: &[&str] = &[
    "Covered: Telangana Secretariat & State Departments",
    "Expert-drafted RTI questions",
    "Online filing and tracking support",
];

const FAQS: &[(&str, &str)] = &[
    (
        "Can I file RTI to Telangana Secretariat online?",
        "Yes, you can file RTI applications to Telangana Secretariat and all state departments online through FileMyRTI. We handle drafting, submission, and tracking for you.",
    ),
    (
        "How long does RTI reply take in Telangana?",
        "As per RTI Act 2005, government departments in Telangana must respond within 30 days. In case of information concerning life or liberty, the response must be provided within 48 hours.",
    ),
    (
        "Can I file RTI for land records and property disputes in Telangana?",
        "Yes, you can file RTI applications for land records, property documents, and related information from Telangana Revenue Department, Registration & Stamps Department, and other relevant authorities.",
    ),
    (
        "Can I file RTI without visiting Meeseva or government offices?",
        "Yes, with FileMyRTI, you can file RTI applications completely online without visiting Meeseva centers or government offices. We handle all the paperwork and submission for you.",
    ),
];

const STEPS: &[(u32, &str, &str)] = &[
    (
        1,
        "Share your RTI details for Telangana department or office",
        "Tell us what information you need from any Telangana Government department or office.",
    ),
    (
        2,
        "Our team drafts your RTI as per RTI Act, 2005 and Telangana rules",
        "Our experts draft a professional RTI application compliant with RTI Act 2005 and Telangana state rules.",
    ),
    (
        3,
        "We file, track, and help you with replies or appeals",
        "We handle submission, fee payment, tracking, and assist with first/second appeals if needed.",
    ),
];

pub(crate) fn record() -> StateData {
    StateData {
        name: "Telangana".to_string(),
        slug: "telangana".to_string(),
        languages: owned(&["English", "Telugu", "Urdu"]),
        hero: StateHero {
            title: "File RTI Online in Telangana — Simplest Way to Get Government Information"
                .to_string(),
            subtitle: "Draft and file RTI applications to Telangana Government departments and offices without visiting in person.".to_string(),
            image: "/images/telangana-banner.jpg".to_string(),
            cta: "Start RTI for Telangana".to_string(),
        },
        departments: owned(DEPARTMENTS),
        highlights: owned(HIGHLIGHTS),
        faqs: faqs(FAQS),
        description: None,
        rti_portal_url: None,
        process: Some(process(STEPS)),
        commission: Some("Telangana State Information Commission (TSIC)".to_string()),
        fee: Some("₹10".to_string()),
        design_theme: Some(DesignTheme::Telangana),
    }
}
