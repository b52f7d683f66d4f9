use crate::{
    constants::{DEFAULT_DIMENSION_CM, DIMENSION_OPTIONS_CM},
    error::QuoteError,
};
use std::fmt;

/// One side of a rug, restricted to the sizes offered in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimension(u32);

impl Dimension {
    pub const ALL: [Dimension; DIMENSION_OPTIONS_CM.len()] = {
        let mut all = [Dimension(0); DIMENSION_OPTIONS_CM.len()];
        let mut i = 0;
        while i < all.len() {
            all[i] = Dimension(DIMENSION_OPTIONS_CM[i]);
            i += 1;
        }
        all
    };

    /// Returns `None` if `cm` is not one of the offered sizes.
    pub fn new(cm: u32) -> Option<Self> {
        DIMENSION_OPTIONS_CM
            .contains(&cm)
            .then_some(Dimension(cm))
    }

    pub fn cm(self) -> u32 {
        self.0
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension(DEFAULT_DIMENSION_CM)
    }
}

impl TryFrom<u32> for Dimension {
    type Error = QuoteError;

    fn try_from(cm: u32) -> Result<Self, Self::Error> {
        Dimension::new(cm).ok_or(QuoteError::UnsupportedDimension(cm))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cm", self.0)
    }
}
