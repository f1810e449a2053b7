/// Per-axis scroll enablement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: bool,
    pub y: bool,
}

impl Direction {
    pub const BOTH: Direction = Direction { x: true, y: true };
    pub const HORIZONTAL: Direction = Direction { x: true, y: false };
    pub const VERTICAL: Direction = Direction { x: false, y: true };
    pub const NONE: Direction = Direction { x: false, y: false };

    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    /// Resolves a partially specified direction.
    ///
    /// A single given axis makes the other its complement, so `{x: true}`
    /// means horizontal only and `{x: false}` means vertical only.
    pub fn from_partial(x: Option<bool>, y: Option<bool>) -> Self {
        match (x, y) {
            (Some(x), Some(y)) => Self { x, y },
            (Some(x), None) => Self { x, y: !x },
            (None, Some(y)) => Self { x: !y, y },
            (None, None) => Self::BOTH,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::BOTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_axis_defaults_other_to_complement() {
        assert_eq!(Direction::from_partial(Some(true), None), Direction::HORIZONTAL);
        assert_eq!(Direction::from_partial(Some(false), None), Direction::VERTICAL);
        assert_eq!(Direction::from_partial(None, Some(true)), Direction::VERTICAL);
        assert_eq!(Direction::from_partial(None, Some(false)), Direction::HORIZONTAL);
    }

    #[test]
    fn unspecified_enables_both_and_explicit_is_verbatim() {
        assert_eq!(Direction::from_partial(None, None), Direction::BOTH);
        assert_eq!(Direction::from_partial(Some(false), Some(false)), Direction::NONE);
        assert_eq!(Direction::from_partial(Some(true), Some(true)), Direction::BOTH);
    }
}
