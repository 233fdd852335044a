//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// Faces on the die that was rolled.
    pub sides: u32,
    /// The value rolled (1 to `sides`).
    pub value: u32,
}

/// The result of rolling a dice expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.dice
            .iter()
            .map(|d| d.value)
            .fold(0, u32::saturating_add)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult { sides: 6, value })
                .collect(),
        }
    }

    #[test]
    fn total() {
        assert_eq!(make_result(&[5, 2, 6]).total(), 13);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
        assert_eq!(r.to_string(), "[] = 0");
    }

    #[test]
    fn total_saturates() {
        let r = RollResult {
            dice: vec![
                DieResult {
                    sides: u32::MAX,
                    value: 4_000_000_000,
                };
                2
            ],
        };
        assert_eq!(r.total(), u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(make_result(&[3, 5]).to_string(), "[3, 5] = 8");
    }
}
