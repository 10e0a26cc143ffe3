//! Bulk-select dialog state.

use serde::{Deserialize, Serialize};

pub const MIN_ROW_COUNT: u32 = 1;
pub const MAX_ROW_COUNT: u32 = 100;

/// Rows below the click point at which the dialog opens.
pub const DIALOG_OFFSET_ROWS: u16 = 1;

/// Requested number of rows, always within `[MIN_ROW_COUNT, MAX_ROW_COUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowCount(u32);

impl RowCount {
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(MIN_ROW_COUNT as i64, MAX_ROW_COUNT as i64) as u32)
    }

    /// Value for a possibly-cleared input field. Cleared means one row.
    pub fn from_input(raw: Option<i64>) -> Self {
        raw.map(Self::clamped).unwrap_or_default()
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for RowCount {
    fn default() -> Self {
        Self(MIN_ROW_COUNT)
    }
}

/// Terminal cell the dialog is anchored at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub top: u16,
    pub left: u16,
}

impl Position {
    /// Anchor for a click at `(column, row)`.
    pub fn from_click(column: u16, row: u16) -> Self {
        Self {
            top: row.saturating_add(DIALOG_OFFSET_ROWS),
            left: column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState {
    pub visible: bool,
    pub anchor: Position,
    input: String,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            visible: false,
            anchor: Position::default(),
            input: MIN_ROW_COUNT.to_string(),
        }
    }

    pub fn open(&mut self, anchor: Position) {
        self.visible = true;
        self.anchor = anchor;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Raw text of the number field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn row_count(&self) -> RowCount {
        RowCount::from_input(self.input.parse::<i64>().ok())
    }

    /// Type a digit. Values above the maximum snap to the maximum.
    pub fn push_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        if self.input == "0" {
            self.input.clear();
        }
        self.input.push(char::from(b'0' + digit));
        match self.input.parse::<i64>() {
            Ok(value) if value > MAX_ROW_COUNT as i64 => {
                self.set_row_count(RowCount::clamped(value))
            }
            Ok(_) => {}
            Err(_) => self.set_row_count(RowCount::clamped(MAX_ROW_COUNT as i64)),
        }
    }

    pub fn pop_digit(&mut self) {
        self.input.pop();
    }

    pub fn increment(&mut self) {
        let next = self.row_count().get() as i64 + 1;
        self.set_row_count(RowCount::clamped(next));
    }

    pub fn decrement(&mut self) {
        let next = self.row_count().get() as i64 - 1;
        self.set_row_count(RowCount::clamped(next));
    }

    pub fn set_row_count(&mut self, count: RowCount) {
        self.input = count.get().to_string();
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_count_clamps_examples() {
        assert_eq!(RowCount::clamped(0).get(), 1);
        assert_eq!(RowCount::clamped(500).get(), 100);
        assert_eq!(RowCount::clamped(42).get(), 42);
        assert_eq!(RowCount::from_input(None).get(), 1);
    }

    #[test]
    fn test_cleared_input_means_one_row() {
        let mut dialog = DialogState::new();
        dialog.pop_digit();
        assert_eq!(dialog.input(), "");
        assert_eq!(dialog.row_count().get(), 1);
    }

    #[test]
    fn test_typing_digits_builds_number() {
        let mut dialog = DialogState::new();
        dialog.pop_digit();
        dialog.push_digit(1);
        dialog.push_digit(5);
        assert_eq!(dialog.row_count().get(), 15);
    }

    #[test]
    fn test_typing_past_maximum_snaps_to_maximum() {
        let mut dialog = DialogState::new();
        dialog.push_digit(0);
        dialog.push_digit(0);
        dialog.push_digit(0);
        assert_eq!(dialog.input(), "100");
        assert_eq!(dialog.row_count().get(), 100);
    }

    #[test]
    fn test_zero_input_reads_as_one() {
        let mut dialog = DialogState::new();
        dialog.pop_digit();
        dialog.push_digit(0);
        assert_eq!(dialog.row_count().get(), 1);
    }

    #[test]
    fn test_increment_and_decrement_stay_in_bounds() {
        let mut dialog = DialogState::new();
        dialog.decrement();
        assert_eq!(dialog.row_count().get(), 1);

        dialog.set_row_count(RowCount::clamped(100));
        dialog.increment();
        assert_eq!(dialog.row_count().get(), 100);
    }

    #[test]
    fn test_click_anchor_uses_click_coordinates() {
        let anchor = Position::from_click(17, 4);
        assert_eq!(anchor.left, 17);
        assert_eq!(anchor.top, 4 + DIALOG_OFFSET_ROWS);
    }

    proptest! {
        #[test]
        fn prop_row_count_always_in_range(raw in any::<i64>()) {
            let count = RowCount::clamped(raw).get();
            prop_assert!((MIN_ROW_COUNT..=MAX_ROW_COUNT).contains(&count));
        }

        #[test]
        fn prop_any_keystrokes_keep_row_count_in_range(
            digits in prop::collection::vec(0u8..10, 0..8),
            pops in 0usize..4,
        ) {
            let mut dialog = DialogState::new();
            for digit in digits {
                dialog.push_digit(digit);
            }
            for _ in 0..pops {
                dialog.pop_digit();
            }
            let count = dialog.row_count().get();
            prop_assert!((MIN_ROW_COUNT..=MAX_ROW_COUNT).contains(&count));
        }
    }
}
