use crate::error::FormatError;

/// The (thousands, decimal) separator pair used to display amounts.
///
/// An empty thousands separator disables digit grouping. The two characters
/// are never equal, and neither may be a digit or a minus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    thousands: Option<char>,
    decimal: char,
}

impl Separators {
    pub const CANONICAL: Self = Self {
        thousands: None,
        decimal: '.',
    };

    pub fn new(thousands: Option<char>, decimal: char) -> Result<Self, FormatError> {
        if thousands == Some(decimal) {
            return Err(FormatError::InvalidSeparators(format!(
                "thousands and decimal separators are both {decimal:?}"
            )));
        }
        for sep in thousands.into_iter().chain(Some(decimal)) {
            if sep.is_ascii_digit() || sep == '-' {
                return Err(FormatError::InvalidSeparators(format!(
                    "{sep:?} cannot be used as a separator"
                )));
            }
        }
        Ok(Self { thousands, decimal })
    }

    pub fn thousands(&self) -> Option<char> {
        self.thousands
    }

    pub fn decimal(&self) -> char {
        self.decimal
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            thousands: Some(','),
            decimal: '.',
        }
    }
}
