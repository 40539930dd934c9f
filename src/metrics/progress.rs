use serde::{Deserialize, Serialize};

/// Severity bucket for a progress bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressColor {
    Success,
    Warning,
    Danger,
}

impl ProgressColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressColor::Success => "success",
            ProgressColor::Warning => "warning",
            ProgressColor::Danger => "danger",
        }
    }
}

/// Which side of the bar the fill is anchored to: overflowing bars grow
/// from the right, normal bars from the left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverflowSide {
    Left,
    Right,
}

impl OverflowSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowSide::Left => "left",
            OverflowSide::Right => "right",
        }
    }
}

/// Derived usage indicator for one account within one budget window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Always within 0..=100. When overflowing this is the amount spent
    /// beyond the allocation, re-based from zero as a fraction of the
    /// allocation, so the bar stays visually bounded.
    pub percentage: f64,
    pub is_overflow: bool,
    pub color: ProgressColor,
    pub overflow_class: OverflowSide,
}

/// Converts an expense/allocation pair into a bounded progress indicator.
///
/// Within budget the percentage is the plain usage ratio. Past the
/// allocation it switches to the overflow ratio `(expense - allocation) /
/// allocation`, clamped to 100. Warning color starts above 75% usage.
///
/// A zero allocation cannot be divided through: zero expense against it
/// reads as 0% success, any spend reads as full overflow.
pub fn compute_progress(expense: i64, allocation: i64) -> Progress {
    if allocation == 0 {
        return if expense == 0 {
            Progress {
                percentage: 0.0,
                is_overflow: false,
                color: ProgressColor::Success,
                overflow_class: OverflowSide::Left,
            }
        } else {
            Progress {
                percentage: 100.0,
                is_overflow: true,
                color: ProgressColor::Danger,
                overflow_class: OverflowSide::Right,
            }
        };
    }

    let expense = expense as f64;
    let allocation = allocation as f64;

    let base = expense / allocation * 100.0;
    let overflow = if base > 100.0 {
        (expense - allocation) / allocation * 100.0
    } else {
        0.0
    };
    let rebased = if base > 100.0 { overflow } else { base };
    let percentage = rebased.min(100.0);
    let is_overflow = overflow > 0.0;

    let color = if is_overflow {
        ProgressColor::Danger
    } else if percentage > 75.0 {
        ProgressColor::Warning
    } else {
        ProgressColor::Success
    };
    let overflow_class = if is_overflow {
        OverflowSide::Right
    } else {
        OverflowSide::Left
    };

    Progress {
        percentage,
        is_overflow,
        color,
        overflow_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_spent_reads_as_success() {
        let progress = compute_progress(50, 100);
        assert_eq!(progress.percentage, 50.0);
        assert!(!progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Success);
        assert_eq!(progress.overflow_class, OverflowSide::Left);
    }

    #[test]
    fn above_seventy_five_percent_reads_as_warning() {
        let progress = compute_progress(80, 100);
        assert_eq!(progress.percentage, 80.0);
        assert!(!progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Warning);
        assert_eq!(progress.overflow_class, OverflowSide::Left);
    }

    #[test]
    fn exactly_spent_is_full_but_not_overflowing() {
        let progress = compute_progress(100, 100);
        assert_eq!(progress.percentage, 100.0);
        assert!(!progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Warning);
    }

    #[test]
    fn overflow_rebases_the_percentage_from_zero() {
        // 150 against 100: 50% past the allocation.
        let progress = compute_progress(150, 100);
        assert_eq!(progress.percentage, 50.0);
        assert!(progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Danger);
        assert_eq!(progress.overflow_class, OverflowSide::Right);
    }

    #[test]
    fn overflow_percentage_is_clamped_at_one_hundred() {
        // 300 against 100 overflows by 200%, clamped.
        let progress = compute_progress(300, 100);
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Danger);
        assert_eq!(progress.overflow_class, OverflowSide::Right);
    }

    #[test]
    fn zero_allocation_with_no_spend_is_empty_success() {
        let progress = compute_progress(0, 0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Success);
        assert_eq!(progress.overflow_class, OverflowSide::Left);
    }

    #[test]
    fn zero_allocation_with_any_spend_is_full_overflow() {
        let progress = compute_progress(1, 0);
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_overflow);
        assert_eq!(progress.color, ProgressColor::Danger);
        assert_eq!(progress.overflow_class, OverflowSide::Right);
    }

    #[test]
    fn style_strings_match_presentation_classes() {
        assert_eq!(ProgressColor::Success.as_str(), "success");
        assert_eq!(ProgressColor::Warning.as_str(), "warning");
        assert_eq!(ProgressColor::Danger.as_str(), "danger");
        assert_eq!(OverflowSide::Left.as_str(), "left");
        assert_eq!(OverflowSide::Right.as_str(), "right");
    }
}
