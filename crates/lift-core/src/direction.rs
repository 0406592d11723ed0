//! Travel directions and the per-car heading label.

use std::fmt;

use crate::error::DispatchError;
use crate::id::Floor;

/// Direction requested by a hall call, or travelled by a moving car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher floor numbers.
    Up,
    /// Towards lower floor numbers.
    Down,
}

impl Direction {
    /// The reverse direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Single-character token: `U` or `D`.
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Whether `target` lies strictly ahead of `from` when travelling
    /// in this direction.
    pub fn is_ahead(self, from: Floor, target: Floor) -> bool {
        match self {
            Direction::Up => target > from,
            Direction::Down => target < from,
        }
    }

    /// The direction leading from `from` to `to`, or `None` if equal.
    pub fn toward(from: Floor, to: Floor) -> Option<Direction> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = DispatchError;

    /// Parse a `U`/`D` token. Any other character is rejected.
    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            other => Err(DispatchError::UnknownDirection { token: other }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// State label of a car: idle, or moving in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// No destinations and no pending requests.
    Idle,
    /// Sweeping upward.
    Up,
    /// Sweeping downward.
    Down,
}

impl Heading {
    /// Single-character label used in state strings: `I`, `U` or `D`.
    pub fn as_char(self) -> char {
        match self {
            Heading::Idle => 'I',
            Heading::Up => 'U',
            Heading::Down => 'D',
        }
    }

    /// Parse a state-string label.
    pub fn from_char(c: char) -> Option<Heading> {
        match c {
            'I' => Some(Heading::Idle),
            'U' => Some(Heading::Up),
            'D' => Some(Heading::Down),
            _ => None,
        }
    }

    /// The direction of travel, or `None` when idle.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Heading::Idle => None,
            Heading::Up => Some(Direction::Up),
            Heading::Down => Some(Direction::Down),
        }
    }
}

impl From<Direction> for Heading {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Heading::Up,
            Direction::Down => Heading::Down,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_up_and_down_tokens() {
        assert_eq!(Direction::try_from('U'), Ok(Direction::Up));
        assert_eq!(Direction::try_from('D'), Ok(Direction::Down));
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ['X', 'u', 'd', 'I', ' '] {
            assert_eq!(
                Direction::try_from(token),
                Err(DispatchError::UnknownDirection { token })
            );
        }
    }

    #[test]
    fn ahead_is_strict() {
        assert!(Direction::Up.is_ahead(Floor(2), Floor(3)));
        assert!(!Direction::Up.is_ahead(Floor(2), Floor(2)));
        assert!(!Direction::Up.is_ahead(Floor(2), Floor(1)));
        assert!(Direction::Down.is_ahead(Floor(2), Floor(1)));
        assert!(!Direction::Down.is_ahead(Floor(2), Floor(2)));
    }

    #[test]
    fn toward_picks_direction_or_none() {
        assert_eq!(Direction::toward(Floor(1), Floor(4)), Some(Direction::Up));
        assert_eq!(Direction::toward(Floor(4), Floor(1)), Some(Direction::Down));
        assert_eq!(Direction::toward(Floor(4), Floor(4)), None);
    }

    #[test]
    fn heading_labels_round_trip() {
        for h in [Heading::Idle, Heading::Up, Heading::Down] {
            assert_eq!(Heading::from_char(h.as_char()), Some(h));
        }
        assert_eq!(Heading::from_char('X'), None);
    }

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Up.opposite().opposite(), Direction::Up);
    }
}
