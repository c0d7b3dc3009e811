//! Sample vCard documents shared by the integration tests.

/// One contact with a duplicated phone in two spellings.
pub const DUPLICATE_PHONE: &str = "BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Old Name\n\
N:Doe;Jane;;;\n\
TEL;TYPE=CELL:555-111-2222\n\
TEL;TYPE=CELL:5551112222\n\
END:VCARD\n\
\n\
\n";

/// Expected cleaned form of [`DUPLICATE_PHONE`].
pub const DUPLICATE_PHONE_CLEANED: &str = "BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Jane Doe\n\
N:Doe;Jane;;;\n\
TEL;TYPE=CELL:5551112222\n\
END:VCARD\n\
\n";

/// An address book export with mixed content: merged categories, an empty
/// contact, malformed lines, passthrough properties and an unterminated tail.
pub const MIXED_EXPORT: &str = "BEGIN:VCARD\n\
VERSION:2.1\n\
FN:John\n\
N:Smith;John;;;\n\
CATEGORIES:Work,Friends\n\
TEL;TYPE=WORK:+1 (555) 000-1111\n\
TEL;TYPE=HOME:555 999 8888\n\
EMAIL;TYPE=INTERNET:john@example.com\n\
CATEGORIES:Friends,Family\n\
TEL;TYPE=X\n\
END:VCARD\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
N:Nobody;No;;;\n\
CATEGORIES:Ghosts\n\
END:VCARD\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
N:Lee;Ann;Marie;Dr.;\n\
NOTE:prefers text\n\
TEL;TYPE=cell:(555) 123-4567\n\
END:VCARD\n\
BEGIN:VCARD\n\
N:Half;Written;;;\n\
TEL;TYPE=CELL:1\n";

/// Split rendered output into lines.
#[allow(dead_code)]
pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Lines of `text` that are phone lines, in output order.
#[allow(dead_code)]
pub fn phone_lines(text: &str) -> Vec<&str> {
    lines(text)
        .into_iter()
        .filter(|line| line.starts_with("TEL;"))
        .collect()
}
