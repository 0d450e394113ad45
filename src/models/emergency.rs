//! Static emergency directory: hostel wardens and safety/medical contacts.
//! These numbers are not published through a sheet.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostelBlock {
    pub blocks: &'static str,
    pub landline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hostel {
    pub name: &'static str,
    pub blocks: &'static [HostelBlock],
    pub emergency: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyContact {
    pub title: &'static str,
    pub mobile: &'static str,
    pub landline: &'static str,
}

const fn block(blocks: &'static str, landline: &'static str) -> HostelBlock {
    HostelBlock { blocks, landline }
}

pub const HOSTELS: &[Hostel] = &[
    Hostel {
        name: "BH-1",
        blocks: &[
            block("A", "01824-444521"),
            block("B", "01824-444522"),
            block("C", "01824-444523"),
        ],
        emergency: "9915020442",
    },
    Hostel {
        name: "BH-2",
        blocks: &[block("A, B", "01824-444524")],
        emergency: "9888598705",
    },
    Hostel {
        name: "BH-3",
        blocks: &[block("A, B", "01824-444526"), block("C, D", "01824-444527")],
        emergency: "9915710553",
    },
    Hostel {
        name: "BH-4",
        blocks: &[block("A, B, C, D, E", "01824-444529")],
        emergency: "9876015107",
    },
    Hostel {
        name: "BH-5",
        blocks: &[block("A, B", "01824-444530"), block("C", "01824-444531")],
        emergency: "9780036434",
    },
    Hostel {
        name: "BH-6",
        blocks: &[block("A", "01824-444532"), block("B, C", "01824-444533")],
        emergency: "9501110445",
    },
    Hostel {
        name: "BH-7",
        blocks: &[block("---", "01824-444536")],
        emergency: "7508182896",
    },
    Hostel {
        name: "BH-8",
        blocks: &[block("---", "01824-444528")],
        emergency: "9780005942",
    },
    Hostel {
        name: "Apartment",
        blocks: &[block("A, B, C, D", "01824-444520")],
        emergency: "9878977900",
    },
    Hostel {
        name: "GH-1",
        blocks: &[block("---", "01824-444081")],
        emergency: "9915020443",
    },
    Hostel {
        name: "GH-2",
        blocks: &[block("---", "01824-444082")],
        emergency: "9876644335",
    },
    Hostel {
        name: "GH-3",
        blocks: &[block("---", "01824-444083")],
        emergency: "9876740090",
    },
    Hostel {
        name: "GH-4",
        blocks: &[block("---", "01824-444084")],
        emergency: "9915020444",
    },
    Hostel {
        name: "GH-5",
        blocks: &[block("A, B", "01824-444303")],
        emergency: "9876015106",
    },
    Hostel {
        name: "GH-6",
        blocks: &[block("A, B", "01824-444301")],
        emergency: "9915020439",
    },
];

pub const SAFETY_CONTACTS: &[SafetyContact] = &[
    SafetyContact {
        title: "Hospital Reception",
        mobile: "---",
        landline: "01824-444079 / 501227",
    },
    SafetyContact {
        title: "Mr. Jagdeep Singh",
        mobile: "9780036450",
        landline: "---",
    },
    SafetyContact {
        title: "Hospital Male Ward",
        mobile: "---",
        landline: "01824-444066",
    },
    SafetyContact {
        title: "Hospital Female Ward",
        mobile: "---",
        landline: "01824-444067",
    },
    SafetyContact {
        title: "Medical Laboratory",
        mobile: "---",
        landline: "01824-444069",
    },
    SafetyContact {
        title: "Dr. N. K. Gupta",
        mobile: "9878426871",
        landline: "01824-444071",
    },
    SafetyContact {
        title: "Women Help Center (Dr. Monica)",
        mobile: "9915020408",
        landline: "01824-444040",
    },
    SafetyContact {
        title: "Fire Office (Mr. Kuldeep)",
        mobile: "9780036402",
        landline: "---",
    },
    SafetyContact {
        title: "Fire Tender",
        mobile: "7508183870",
        landline: "---",
    },
];

/// Keep only what a dialer accepts: digits and dashes.
pub fn dialable(number: &str) -> String {
    number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

pub fn search_hostels(term: &str) -> Vec<&'static Hostel> {
    let term = term.to_lowercase();
    HOSTELS
        .iter()
        .filter(|h| h.name.to_lowercase().contains(&term))
        .collect()
}

pub fn search_safety(term: &str) -> Vec<&'static SafetyContact> {
    let term = term.to_lowercase();
    SAFETY_CONTACTS
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&term))
        .collect()
}
