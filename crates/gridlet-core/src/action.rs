//! The discrete action set.

use crate::error::ActionError;

/// Cardinal move for the agent.
///
/// The canonical integer encoding is `0..4` in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell up (y - 1).
    Up = 0,
    /// Move one cell down (y + 1).
    Down = 1,
    /// Move one cell left (x - 1).
    Left = 2,
    /// Move one cell right (x + 1).
    Right = 3,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 4;

    /// All actions in canonical order.
    pub const ALL: [Action; Self::COUNT] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Returns the `(dx, dy)` offset for this action.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    /// The canonical integer code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Action {
    type Error = ActionError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            _ => Err(ActionError::InvalidAction { code }),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::try_from(code as i64)
    }
}

impl TryFrom<i32> for Action {
    type Error = ActionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(code))
    }
}

impl TryFrom<usize> for Action {
    type Error = ActionError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        let code = i64::try_from(code).unwrap_or(i64::MAX);
        Self::try_from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_round_trip() {
        for a in Action::ALL {
            assert_eq!(Action::try_from(a.code()), Ok(a));
        }
    }

    #[test]
    fn offsets_are_unit_steps() {
        assert_eq!(Action::Up.offset(), (0, -1));
        assert_eq!(Action::Down.offset(), (0, 1));
        assert_eq!(Action::Left.offset(), (-1, 0));
        assert_eq!(Action::Right.offset(), (1, 0));
    }

    #[test]
    fn out_of_range_code_rejected() {
        assert_eq!(
            Action::try_from(4i64),
            Err(ActionError::InvalidAction { code: 4 })
        );
        assert_eq!(
            Action::try_from(-1i64),
            Err(ActionError::InvalidAction { code: -1 })
        );
        assert!(Action::try_from(200u8).is_err());
        assert_eq!(Action::try_from(2i32), Ok(Action::Left));
        assert!(Action::try_from(usize::MAX).is_err());
    }

    proptest! {
        #[test]
        fn only_four_codes_are_valid(code in any::<i64>()) {
            let parsed = Action::try_from(code);
            prop_assert_eq!(parsed.is_ok(), (0..4).contains(&code));
        }
    }
}
