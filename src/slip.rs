//! Printable salary fixation slip
//!
//! Fixed-layout plain-text rendering of the record: office header,
//! PRAN line, the 21 numbered bilingual field rows in the published
//! order, and the signature blocks. Absent values render as a dotted
//! placeholder. Presentation only; the contract tests care that every
//! persisted field appears.

use chrono::NaiveDate;

use crate::record::{format_date, TeacherRecord};

/// Placeholder shown for any absent value
pub const PLACEHOLDER: &str = "..............................";

fn text(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        PLACEHOLDER
    } else {
        trimmed
    }
}

fn date(value: Option<NaiveDate>) -> String {
    value.map(format_date).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn row(out: &mut String, number: &str, label: &str, value: &str) {
    out.push_str(&format!("{:<4} {} : {}\n", number, label, value));
}

/// Render the record as the printable fixation slip
pub fn render(record: &TeacherRecord) -> String {
    let mut out = String::new();

    out.push_str("कार्यालय, जिला शिक्षा पदाधिकारी, मुजफ्फरपुर\n");
    out.push_str("(स्थापना-शाखा)\n");
    out.push_str("विशिष्ट शिक्षकों का वेतन निर्धारण प्रपत्र\n");
    out.push('\n');
    out.push_str(&format!("PRAN NO.:- {}\n", text(&record.pran)));
    out.push_str(&format!(
        "सक्षमता आवेदन संख्या :- {}\n",
        text(&record.competency_application_number)
    ));
    out.push('\n');

    row(&mut out, "1.", "शिक्षक का नाम", text(&record.teacher_name));
    row(&mut out, "2.", "विद्यालय का नाम", text(&record.school_name));
    row(&mut out, "3.", "विद्यालय का यू-डायस कोड", text(&record.udise_code));
    row(&mut out, "4.", "वर्ग", text(&record.class_name));
    row(&mut out, "5.", "विषय", text(&record.subject));
    row(
        &mut out,
        "6.",
        "नियुक्ति की कोटि (UR/BC/EBC/SC/EWS)",
        text(&record.appointment_category),
    );
    row(&mut out, "7.", "जन्म तिथि", &date(record.date_of_birth));
    row(
        &mut out,
        "8.",
        "विशिष्ट शिक्षक के रूप में योगदान तिथि",
        &date(record.date_of_joining_as_specific_teacher),
    );
    row(&mut out, "9.", "प्रशिक्षण तिथि", &date(record.date_of_training));
    row(
        &mut out,
        "10.",
        "दक्षता/BTET/CTET/STET का प्रकार",
        text(&record.efficiency_type),
    );
    row(
        &mut out,
        "11.",
        "दक्षता/BTET/CTET/STET उतीर्णता तिथि",
        &date(record.date_of_passing_efficiency),
    );
    row(&mut out, "12.", "बैंक का नाम", text(&record.bank_name));
    row(
        &mut out,
        "13.",
        "बैंक खाता संख्या",
        text(&record.bank_account_number),
    );
    row(&mut out, "14.", "IFSC कोड", text(&record.ifsc_code));
    row(
        &mut out,
        "15.",
        "स्थानीय निकाय शिक्षक के रूप में प्रथम योगदान की तिथि",
        &date(record.date_of_first_joining_as_local_body_teacher),
    );
    row(
        &mut out,
        "16.",
        "प्रशिक्षित वेतनमान प्राप्त करने की तिथि",
        &date(record.date_of_receiving_trained_pay_scale),
    );
    row(
        &mut out,
        "17.",
        "क्या सेवा में कोई टूट हैं (हाँ / नहीं)?",
        text(&record.service_break),
    );
    row(
        &mut out,
        "18.",
        "माह दिसम्बर 2024 में प्राप्त मूल वेतन",
        text(&record.december_2024_salary),
    );
    row(
        &mut out,
        "19.",
        "अनुमान्य वेतन वृद्धि के साथ प्राप्त होने वाला मूल वेतन",
        text(&record.new_salary_with_increment),
    );
    row(
        &mut out,
        "20.",
        "पे-मैट्रिक के अनुरूप मूल वेतन",
        text(&record.pay_matrix_salary),
    );
    row(
        &mut out,
        "21.",
        "अगली वेतन वृद्धि तिथि",
        &date(record.next_increment_date),
    );

    out.push('\n');
    out.push_str(&format!("{}\n", PLACEHOLDER));
    out.push_str("शिक्षक का हस्ताक्षर\n\n");
    out.push_str(&format!("{}\n", PLACEHOLDER));
    out.push_str("प्रधानाध्यापक का हस्ताक्षर एवं मुहर\n\n");
    out.push_str(&format!("{}\n", PLACEHOLDER));
    out.push_str("प्रखण्ड शिक्षा पदाधिकारी\n\n");
    out.push_str(&format!("{}\n", PLACEHOLDER));
    out.push_str("जिला कार्यक्रम पदाधिकारी, स्थापना\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_fields_appear() {
        let record = TeacherRecord {
            teacher_name: "सीता देवी".to_string(),
            class_name: "6-8".to_string(),
            december_2024_salary: "10800".to_string(),
            new_salary_with_increment: "11130".to_string(),
            pay_matrix_salary: "28000".to_string(),
            next_increment_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..TeacherRecord::default()
        };
        let slip = render(&record);

        assert!(slip.contains("सीता देवी"));
        assert!(slip.contains("11130"));
        assert!(slip.contains("28000"));
        assert!(slip.contains("01-01-2026"));
    }

    #[test]
    fn test_absent_fields_render_placeholder() {
        let slip = render(&TeacherRecord::default());

        // every one of the 21 numbered rows is present
        for number in 1..=21 {
            assert!(slip.contains(&format!("{}.", number)), "row {}", number);
        }
        assert!(slip.contains(PLACEHOLDER));
        // no absent date leaks a formatting artifact
        assert!(!slip.contains("01-01-1970"));
    }
}
