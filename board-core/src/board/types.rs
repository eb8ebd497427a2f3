//! Shared types for the pickup board

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Stage
// ============================================================================

/// 订单所处阶段
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// 制作中
    Preparing,
    /// 待取餐
    Ready,
}

impl Stage {
    /// User-facing list name, identical to the persisted field name
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Preparing => "PREPARING",
            Stage::Ready => "READY",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Order Board
// ============================================================================

/// 取餐看板 - the whole persisted state
///
/// Two ordered lists of order numbers. Element order is meaningful:
/// arrival order for `preparing`, promotion order for `ready`. A number
/// lives in at most one list and appears at most once within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBoard {
    /// Orders currently being prepared
    #[serde(rename = "PREPARING")]
    pub preparing: Vec<u32>,
    /// Orders waiting for pickup
    #[serde(rename = "READY")]
    pub ready: Vec<u32>,
}

impl OrderBoard {
    /// Which list holds `number`, if any (never both)
    pub fn stage_of(&self, number: u32) -> Option<Stage> {
        if self.preparing.contains(&number) {
            Some(Stage::Preparing)
        } else if self.ready.contains(&number) {
            Some(Stage::Ready)
        } else {
            None
        }
    }

    /// Invariant check applied to loaded state: every number is >= 1,
    /// unique within its list, and never present in both lists.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::new();
        self.preparing
            .iter()
            .chain(self.ready.iter())
            .all(|&n| n >= 1 && seen.insert(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_layout() {
        let board = OrderBoard {
            preparing: vec![5, 12, 7],
            ready: vec![3],
        };

        // Field names and element order must survive verbatim
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"PREPARING":[5,12,7],"READY":[3]}"#);

        let back: OrderBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert!(serde_json::from_str::<OrderBoard>(r#"{"PREPARING":[1]}"#).is_err());
        assert!(serde_json::from_str::<OrderBoard>(r#"{"READY":[1]}"#).is_err());
        assert!(serde_json::from_str::<OrderBoard>(r#"{}"#).is_err());
    }

    #[test]
    fn test_stage_of() {
        let board = OrderBoard {
            preparing: vec![5, 12],
            ready: vec![3],
        };

        assert_eq!(board.stage_of(5), Some(Stage::Preparing));
        assert_eq!(board.stage_of(12), Some(Stage::Preparing));
        assert_eq!(board.stage_of(3), Some(Stage::Ready));
        assert_eq!(board.stage_of(99), None);
    }

    #[test]
    fn test_well_formed() {
        assert!(OrderBoard::default().is_well_formed());
        assert!(
            OrderBoard {
                preparing: vec![5, 12],
                ready: vec![3],
            }
            .is_well_formed()
        );

        // Duplicate within a list
        assert!(
            !OrderBoard {
                preparing: vec![5, 5],
                ready: vec![],
            }
            .is_well_formed()
        );

        // Same number in both lists
        assert!(
            !OrderBoard {
                preparing: vec![5],
                ready: vec![5],
            }
            .is_well_formed()
        );

        // Zero is not a valid order number
        assert!(
            !OrderBoard {
                preparing: vec![0],
                ready: vec![],
            }
            .is_well_formed()
        );
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Preparing.to_string(), "PREPARING");
        assert_eq!(Stage::Ready.to_string(), "READY");
    }
}
