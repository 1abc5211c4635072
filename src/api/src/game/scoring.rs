use crate::game::board::{Board, Bonus};

const DOUBLE_LETTER_FACTOR: u32 = 2;
const TRIPLE_WORD_FACTOR: u32 = 3;

/// Scores whatever is on the board: the sum of letter values (doubled on
/// double-letter slots) times 3 for every occupied triple-word slot. Gaps are
/// not considered; every placed tile counts. Saturates at `u32::MAX`.
pub fn score(board: &Board) -> u32 {
    let mut letter_sum: u32 = 0;
    let mut word_multiplier: u32 = 1;

    for slot in board.slots() {
        let Some(tile) = &slot.tile else {
            continue;
        };
        let points = match slot.bonus {
            Some(Bonus::DoubleLetter) => tile.value.saturating_mul(DOUBLE_LETTER_FACTOR),
            Some(Bonus::TripleWord) => {
                word_multiplier = word_multiplier.saturating_mul(TRIPLE_WORD_FACTOR);
                tile.value
            }
            _ => tile.value,
        };
        letter_sum = letter_sum.saturating_add(points);
    }

    letter_sum.saturating_mul(word_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{self, tile};

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(score(&Board::default()), 0);
    }

    #[test]
    fn test_double_letter_doubles_only_that_tile() {
        let mut board = Board::new(3).with_bonus(0, Bonus::DoubleLetter);
        board.put(0, tile(0, 'C', 3)).unwrap();
        board.put(1, tile(1, 'A', 1)).unwrap();

        assert_eq!(score(&board), 3 * 2 + 1);
    }

    #[test]
    fn test_triple_word_multiplies_total() {
        let mut board = Board::new(3)
            .with_bonus(0, Bonus::DoubleLetter)
            .with_bonus(1, Bonus::TripleWord);
        board.put(0, tile(0, 'C', 3)).unwrap();
        board.put(1, tile(1, 'A', 1)).unwrap();

        assert_eq!(score(&board), 21);
    }

    #[test]
    fn test_empty_triple_word_slot_has_no_effect() {
        let mut board = Board::new(3).with_bonus(2, Bonus::TripleWord);
        board.put(0, tile(0, 'C', 3)).unwrap();
        board.put(1, tile(1, 'A', 1)).unwrap();

        assert_eq!(score(&board), 4);
    }

    #[test]
    fn test_two_triple_words_stack() {
        let mut board = Board::from_layout("triple-word,,triple-word").unwrap();
        board.put(0, tile(0, 'C', 3)).unwrap();
        board.put(1, tile(1, 'A', 1)).unwrap();
        board.put(2, tile(2, 'T', 1)).unwrap();

        assert_eq!(score(&board), 5 * 9);
    }

    #[test]
    fn test_unrecognized_bonus_scores_as_plain() {
        let mut board = Board::from_layout("double-word,triple-letter").unwrap();
        board.put(0, tile(0, 'Q', 10)).unwrap();
        board.put(1, tile(1, 'I', 1)).unwrap();

        assert_eq!(score(&board), 11);
    }

    #[test]
    fn test_every_placed_tile_counts_even_across_a_gap() {
        let board = test_utils::create_test_board("AB_C");
        assert_eq!(board.current_word(), "AB");
        assert_eq!(score(&board), 1 + 3 + 3);
    }

    #[test]
    fn test_huge_letter_values_saturate() {
        let mut board = Board::from_layout("double-letter,triple-word").unwrap();
        board.put(0, tile(0, 'Q', 3_000_000_000)).unwrap();
        board.put(1, tile(1, 'A', 1)).unwrap();

        assert_eq!(score(&board), u32::MAX);
    }
}
