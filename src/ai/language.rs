//! Per-language formatting metadata used to steer generated emails
//!
//! The catalog is a compile-time table. Lookups never fail: unknown codes
//! resolve to English.

use serde::Serialize;

/// Titles grouped by the addressee's gender category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Honorifics {
    pub male: &'static [&'static str],
    pub female: &'static [&'static str],
    pub neutral: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub code: &'static str,
    /// Display name, with the native name in parentheses for non-English entries
    pub name: &'static str,
    pub formal_greeting: &'static str,
    pub closing: &'static str,
    pub date_format: &'static str,
    /// Pattern with `{honorific}`/`{title}`, `{firstName}` and `{lastName}` slots
    pub name_format: &'static str,
    pub honorifics: Honorifics,
    pub cultural_notes: &'static [&'static str],
}

static LANGUAGES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "en",
        name: "English",
        formal_greeting: "Dear",
        closing: "Best regards,",
        date_format: "MM/DD/YYYY",
        name_format: "{title} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Mr.", "Dr.", "Prof."],
            female: &["Ms.", "Mrs.", "Dr.", "Prof."],
            neutral: &["Mx.", "Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use titles unless explicitly asked to use first names",
            "Keep paragraphs concise and well-spaced",
            "Be direct but polite",
        ],
    },
    LanguageProfile {
        code: "es",
        name: "Spanish (Español)",
        formal_greeting: "Estimado/a",
        closing: "Atentamente,",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Sr.", "Dr.", "Prof."],
            female: &["Sra.", "Srita.", "Dr.", "Prof."],
            neutral: &["Sr.", "Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use titles unless explicitly asked to use first names",
            "Keep paragraphs concise and well-spaced",
            "Be direct but polite",
        ],
    },
    LanguageProfile {
        code: "fr",
        name: "French (Français)",
        formal_greeting: "Cher/Chère",
        closing: "Cordialement,",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["M.", "Dr.", "Prof."],
            female: &["Mme.", "Mlle.", "Dr.", "Prof."],
            neutral: &["Mx.", "Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Keep paragraphs concise",
            "Be polite and respectful",
            "Use proper French punctuation and spacing",
        ],
    },
    LanguageProfile {
        code: "de",
        name: "German (Deutsch)",
        formal_greeting: "Sehr geehrte(r)",
        closing: "Mit freundlichen Grüßen,",
        date_format: "DD.MM.YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Herr", "Dr.", "Prof."],
            female: &["Frau", "Dr.", "Prof."],
            neutral: &["Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be precise and structured",
            "Maintain professional distance",
            "Use proper German punctuation",
        ],
    },
    LanguageProfile {
        code: "it",
        name: "Italian (Italiano)",
        formal_greeting: "Gentile",
        closing: "Cordiali saluti,",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Sig.", "Dott.", "Prof."],
            female: &["Sig.ra", "Dott.ssa", "Prof.ssa"],
            neutral: &["Dott.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be warm but professional",
            "Use proper Italian punctuation",
            "Maintain respectful tone",
        ],
    },
    LanguageProfile {
        code: "pt",
        name: "Portuguese (Português)",
        formal_greeting: "Prezado(a)",
        closing: "Atenciosamente,",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Sr.", "Dr.", "Prof."],
            female: &["Sra.", "Dra.", "Profa."],
            neutral: &["Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be polite and respectful",
            "Use proper Portuguese punctuation",
            "Maintain professional tone",
        ],
    },
    LanguageProfile {
        code: "nl",
        name: "Dutch (Nederlands)",
        formal_greeting: "Geachte",
        closing: "Met vriendelijke groet,",
        date_format: "DD-MM-YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Dhr.", "Dr.", "Prof."],
            female: &["Mevr.", "Dr.", "Prof."],
            neutral: &["Dr.", "Prof."],
        },
        cultural_notes: &[
            "Be direct but polite",
            "Use formal language in business context",
            "Keep communication clear and concise",
            "Maintain professional distance",
        ],
    },
    LanguageProfile {
        code: "ru",
        name: "Russian (Русский)",
        formal_greeting: "Уважаемый(ая)",
        closing: "С уважением,",
        date_format: "DD.MM.YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Господин", "Доктор", "Профессор"],
            female: &["Госпожа", "Доктор", "Профессор"],
            neutral: &["Доктор", "Профессор"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and professional",
            "Use proper Russian punctuation",
            "Maintain formal tone",
        ],
    },
    LanguageProfile {
        code: "zh",
        name: "Chinese (中文)",
        formal_greeting: "尊敬的",
        closing: "此致",
        date_format: "YYYY/MM/DD",
        name_format: "{honorific}{lastName}{firstName}",
        honorifics: Honorifics {
            male: &["先生", "博士", "教授"],
            female: &["女士", "博士", "教授"],
            neutral: &["博士", "教授"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and humble",
            "Use proper Chinese punctuation",
            "Maintain hierarchical respect",
        ],
    },
    LanguageProfile {
        code: "ja",
        name: "Japanese (日本語)",
        formal_greeting: "拝啓",
        closing: "敬具",
        date_format: "YYYY/MM/DD",
        name_format: "{lastName}{honorific} {firstName}",
        honorifics: Honorifics {
            male: &["様", "博士", "教授"],
            female: &["様", "博士", "教授"],
            neutral: &["様", "博士", "教授"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be extremely polite and respectful",
            "Use proper Japanese punctuation",
            "Maintain hierarchical respect",
        ],
    },
    LanguageProfile {
        code: "ko",
        name: "Korean (한국어)",
        formal_greeting: "존경하는",
        closing: "감사합니다",
        date_format: "YYYY/MM/DD",
        name_format: "{lastName}{honorific} {firstName}",
        honorifics: Honorifics {
            male: &["님", "박사", "교수"],
            female: &["님", "박사", "교수"],
            neutral: &["님", "박사", "교수"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be extremely polite and respectful",
            "Use proper Korean punctuation",
            "Maintain hierarchical respect",
        ],
    },
    LanguageProfile {
        code: "ar",
        name: "Arabic (العربية)",
        formal_greeting: "عزيزي/عزيزتي",
        closing: "مع تحياتي",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["السيد", "الدكتور", "الأستاذ"],
            female: &["السيدة", "الدكتورة", "الأستاذة"],
            neutral: &["الدكتور", "الأستاذ"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and polite",
            "Use proper Arabic punctuation",
            "Maintain cultural sensitivity",
        ],
    },
    LanguageProfile {
        code: "hi",
        name: "Hindi (हिन्दी)",
        formal_greeting: "प्रिय",
        closing: "सादर",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["श्री", "डॉ.", "प्रो."],
            female: &["श्रीमती", "डॉ.", "प्रो."],
            neutral: &["डॉ.", "प्रो."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and polite",
            "Use proper Hindi punctuation",
            "Maintain cultural sensitivity",
        ],
    },
    LanguageProfile {
        code: "tr",
        name: "Turkish (Türkçe)",
        formal_greeting: "Sayın",
        closing: "Saygılarımla,",
        date_format: "DD.MM.YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Bay", "Dr.", "Prof."],
            female: &["Bayan", "Dr.", "Prof."],
            neutral: &["Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and polite",
            "Use proper Turkish punctuation",
            "Maintain professional tone",
        ],
    },
    LanguageProfile {
        code: "pl",
        name: "Polish (Polski)",
        formal_greeting: "Szanowny(a)",
        closing: "Z poważaniem,",
        date_format: "DD.MM.YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["Pan", "Dr.", "Prof."],
            female: &["Pani", "Dr.", "Prof."],
            neutral: &["Dr.", "Prof."],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and polite",
            "Use proper Polish punctuation",
            "Maintain professional tone",
        ],
    },
    LanguageProfile {
        code: "he",
        name: "Hebrew (עברית)",
        formal_greeting: "יקר/ה",
        closing: "בברכה,",
        date_format: "DD/MM/YYYY",
        name_format: "{honorific} {firstName} {lastName}",
        honorifics: Honorifics {
            male: &["מר", "ד\"ר", "פרופ'"],
            female: &["גב'", "ד\"ר", "פרופ'"],
            neutral: &["ד\"ר", "פרופ'"],
        },
        cultural_notes: &[
            "Use formal language in business context",
            "Be respectful and polite",
            "Use proper Hebrew punctuation",
            "Maintain cultural sensitivity",
        ],
    },
];

/// All known languages, in catalog order
pub fn all() -> &'static [LanguageProfile] {
    LANGUAGES
}

/// Resolve a language code to its profile.
///
/// Matching ignores case and any region subtag, so `"en-US"` and `"PT_br"`
/// resolve. Anything unknown gets the English profile.
pub fn lookup(code: &str) -> &'static LanguageProfile {
    find(&primary_subtag(code)).unwrap_or_else(english)
}

/// Whether `code` has its own catalog entry rather than the English fallback
pub fn is_supported(code: &str) -> bool {
    find(&primary_subtag(code)).is_some()
}

fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn find(code: &str) -> Option<&'static LanguageProfile> {
    LANGUAGES.iter().find(|profile| profile.code == code)
}

fn english() -> &'static LanguageProfile {
    // English is always the first entry
    &LANGUAGES[0]
}
