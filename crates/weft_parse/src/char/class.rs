use super::CharTest;

/// The ASCII character classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alpha,
    Alnum,
    Digit,
    XDigit,
    Upper,
    Lower,
    Space,
    Blank,
    Punct,
    Graph,
    Print,
    Cntrl,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::XDigit => c.is_ascii_hexdigit(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Space => c.is_ascii_whitespace() || c == '\x0b',
            CharClass::Blank => c == ' ' || c == '\t',
            CharClass::Punct => c.is_ascii_punctuation(),
            CharClass::Graph => c.is_ascii_graphic(),
            CharClass::Print => c.is_ascii_graphic() || c == ' ',
            CharClass::Cntrl => c.is_ascii_control(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            CharClass::Alpha => "alpha",
            CharClass::Alnum => "alnum",
            CharClass::Digit => "digit",
            CharClass::XDigit => "xdigit",
            CharClass::Upper => "upper",
            CharClass::Lower => "lower",
            CharClass::Space => "space",
            CharClass::Blank => "blank",
            CharClass::Punct => "punct",
            CharClass::Graph => "graph",
            CharClass::Print => "print",
            CharClass::Cntrl => "cntrl",
        }
    }
}

impl CharTest for CharClass {
    fn test(&self, c: char, no_case: bool) -> bool {
        match self {
            // Case-insensitive `upper` and `lower` both mean "a letter".
            CharClass::Upper | CharClass::Lower if no_case => c.is_ascii_alphabetic(),
            _ => self.contains(c),
        }
    }

    fn what(&self) -> String {
        self.name().to_owned()
    }
}
