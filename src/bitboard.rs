use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::position::Position;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// One of the eight compass directions. Up is toward row 0, left is toward column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Unit step as `(row delta, column delta)`.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// An 8×8 occupancy mask. Bit `row * 8 + col` stands for the square at (`col`, `row`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    /// Column 0 ("a").
    pub const COL_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    /// Column 7 ("h").
    pub const COL_H: Bitboard = Bitboard(0x8080_8080_8080_8080);
    /// Row 0, printed as "1".
    pub const ROW_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    /// Row 7, printed as "8".
    pub const ROW_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Single bit set at `index`.
    #[inline]
    pub const fn single(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Bitboard(1u64 << index)
    }

    /// Single bit set at (`col`, `row`).
    #[inline]
    pub const fn from_square(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE && row < BOARD_SIZE);
        Bitboard((1u64 << col) << (row * BOARD_SIZE))
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub const fn get(&self, index: usize) -> bool {
        debug_assert!(index < NUM_SQUARES);
        (self.0 >> index) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < NUM_SQUARES);
        self.0 |= 1u64 << index;
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < NUM_SQUARES);
        self.0 &= !(1u64 << index);
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonzero(&self) -> bool {
        self.0 != 0
    }

    /// True if exactly one bit is set.
    #[inline]
    pub const fn is_single(&self) -> bool {
        self.0.is_power_of_two()
    }

    /// Population count.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// True if `self` and `other` share at least one square.
    #[inline]
    pub const fn intersects(&self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub const fn lowest_bit_index(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// One step in `dir`. Diagonals apply the horizontal step and then the
    /// vertical step, each masked at its own edge.
    #[inline]
    pub const fn shift(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        let horizontal = match dc {
            -1 => self.shift_left(),
            1 => self.shift_right(),
            _ => self,
        };
        match dr {
            -1 => horizontal.shift_up(),
            1 => horizontal.shift_down(),
            _ => horizontal,
        }
    }

    /// Every square one step away (in any of the eight directions) from a set bit.
    #[inline]
    pub fn neighbors(self) -> Self {
        Direction::ALL
            .iter()
            .fold(Bitboard::EMPTY, |acc, &dir| acc | self.shift(dir))
    }

    /// Iterate over indices of set bits, lowest first. Since the index is
    /// `row * 8 + col`, this is row-major order.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }

    /// Iterate over the set bits as single-bit boards, in row-major order.
    #[inline]
    pub fn squares(&self) -> impl Iterator<Item = Bitboard> {
        self.iter_ones().map(Bitboard::single)
    }

    /// Iterate over the set bits as positions, in row-major order.
    #[inline]
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.iter_ones().map(Position::from_index)
    }
}

macro_rules! edge_masked_shifts {
    ($($dir:ident => ($edge:expr) $op:tt $amount:literal;)+) => {
        paste::paste! {
            impl Bitboard {
                $(
                    #[doc = "One step " $dir ", dropping bits that would leave the board."]
                    #[inline]
                    pub const fn [<shift_ $dir>](self) -> Self {
                        Bitboard((self.0 & !$edge.0) $op $amount)
                    }
                )+
            }
        }
    };
}

edge_masked_shifts! {
    up => (Bitboard::ROW_1) >> 8;
    down => (Bitboard::ROW_8) << 8;
    left => (Bitboard::COL_A) >> 1;
    right => (Bitboard::COL_H) << 1;
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl From<Position> for Bitboard {
    fn from(pos: Position) -> Self {
        pos.to_bitboard()
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: u8, row: u8) -> Bitboard {
        Bitboard::from_square(col, row)
    }

    #[test]
    fn test_empty() {
        let bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        assert_eq!(bb.count(), 0);
        assert!(bb.lowest_bit_index().is_none());
    }

    #[test]
    fn test_single() {
        let bb = Bitboard::single(0);
        assert!(bb.get(0));
        assert!(!bb.get(1));
        assert!(bb.is_single());
        assert_eq!(bb.lowest_bit_index(), Some(0));

        let bb2 = Bitboard::single(63);
        assert!(bb2.get(63));
        assert!(!bb2.get(62));
        assert_eq!(bb2.count(), 1);
    }

    #[test]
    fn test_from_square() {
        assert_eq!(sq(0, 0), Bitboard(1));
        assert_eq!(sq(4, 0), Bitboard(1 << 4));
        assert_eq!(sq(0, 1), Bitboard(1 << 8));
        assert_eq!(sq(7, 7), Bitboard(1 << 63));
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(sq(col, row).count(), 1);
                assert_eq!(
                    sq(col, row).lowest_bit_index(),
                    Some(row as usize * 8 + col as usize)
                );
            }
        }
    }

    #[test]
    fn test_set_clear() {
        let mut bb = Bitboard::EMPTY;
        bb.set(42);
        assert!(bb.get(42));
        assert_eq!(bb.count(), 1);
        bb.clear(42);
        assert!(!bb.get(42));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_is_single() {
        assert!(!Bitboard::EMPTY.is_single());
        assert!(sq(3, 3).is_single());
        assert!(!(sq(3, 3) | sq(4, 4)).is_single());
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Bitboard::single(5) | Bitboard::single(10);
        let b = Bitboard::single(10) | Bitboard::single(20);

        let and = a & b;
        assert!(and.get(10));
        assert!(!and.get(5));
        assert!(!and.get(20));

        let or = a | b;
        assert!(or.get(5));
        assert!(or.get(10));
        assert!(or.get(20));

        assert!(a.intersects(b));
        assert!(!Bitboard::single(5).intersects(Bitboard::single(20)));
    }

    #[test]
    fn test_cardinal_shifts_interior() {
        let center = sq(3, 3);
        assert_eq!(center.shift_up(), sq(3, 2));
        assert_eq!(center.shift_down(), sq(3, 4));
        assert_eq!(center.shift_left(), sq(2, 3));
        assert_eq!(center.shift_right(), sq(4, 3));
    }

    #[test]
    fn test_shift_matches_delta() {
        let center = sq(4, 4);
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let expected = sq((4 + dc) as u8, (4 + dr) as u8);
            assert_eq!(center.shift(dir), expected, "{:?}", dir);
        }
    }

    #[test]
    fn test_full_board_shifts_never_wrap() {
        let full = Bitboard::FULL;
        assert!((full.shift_left() & Bitboard::COL_H).is_empty());
        assert!((full.shift_right() & Bitboard::COL_A).is_empty());
        assert!((full.shift_up() & Bitboard::ROW_8).is_empty());
        assert!((full.shift_down() & Bitboard::ROW_1).is_empty());

        assert_eq!(full.shift_left().count(), 56);
        assert_eq!(full.shift_right().count(), 56);
        assert_eq!(full.shift_up().count(), 56);
        assert_eq!(full.shift_down().count(), 56);

        for dir in [
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ] {
            assert_eq!(full.shift(dir).count(), 49, "{:?}", dir);
        }
    }

    #[test]
    fn test_edge_bits_are_dropped() {
        // Right edge shifting right would land on column a of the next row
        assert!(sq(7, 1).shift_right().is_empty());
        // Left edge shifting left would land on column h of the previous row
        assert!(sq(0, 1).shift_left().is_empty());
        assert!(sq(3, 0).shift_up().is_empty());
        assert!(sq(3, 7).shift_down().is_empty());
    }

    #[test]
    fn test_diagonal_shift_no_wrap() {
        // h2 up-right must vanish instead of reappearing on column a
        assert!(sq(7, 1).shift(Direction::UpRight).is_empty());
        assert!(sq(7, 1).shift(Direction::DownRight).is_empty());
        assert!(sq(0, 1).shift(Direction::UpLeft).is_empty());
        assert!(sq(0, 1).shift(Direction::DownLeft).is_empty());
        assert_eq!(sq(7, 1).shift(Direction::UpLeft), sq(6, 0));
        assert_eq!(sq(0, 6).shift(Direction::DownRight), sq(1, 7));
    }

    #[test]
    fn test_opposite_direction_round_trip() {
        let center = sq(4, 3);
        for dir in Direction::ALL {
            assert_eq!(center.shift(dir).shift(dir.opposite()), center);
        }
    }

    #[test]
    fn test_neighbors_center() {
        let nbrs = sq(4, 4).neighbors();
        assert_eq!(nbrs.count(), 8);
        assert!(!nbrs.intersects(sq(4, 4)));
        assert!(nbrs.intersects(sq(3, 3)));
        assert!(nbrs.intersects(sq(5, 5)));
    }

    #[test]
    fn test_neighbors_corner() {
        let nbrs = sq(0, 0).neighbors();
        assert_eq!(nbrs, sq(1, 0) | sq(0, 1) | sq(1, 1));
    }

    #[test]
    fn test_neighbors_no_wrap() {
        // h2: neighbors are g1, h1, g2, g3, h3 and nothing on column a
        let nbrs = sq(7, 1).neighbors();
        assert_eq!(nbrs.count(), 5);
        assert!((nbrs & Bitboard::COL_A).is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let bb = sq(2, 5) | sq(7, 0) | sq(0, 3);
        let indices: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(indices, vec![7, 24, 42]);

        let positions: Vec<Position> = bb.positions().collect();
        assert_eq!(
            positions,
            vec![Position::new(7, 0), Position::new(0, 3), Position::new(2, 5)]
        );
        assert_eq!(bb.iter_ones().len(), 3);
    }

    #[test]
    fn test_squares_are_single_bits() {
        let bb = sq(1, 1) | sq(6, 6);
        let squares: Vec<Bitboard> = bb.squares().collect();
        assert_eq!(squares, vec![sq(1, 1), sq(6, 6)]);
    }

    #[test]
    fn test_not() {
        let notbb = !Bitboard::single(5);
        assert!(!notbb.get(5));
        assert!(notbb.get(0));
        assert_eq!(notbb.count(), 63);
    }

    #[test]
    fn test_assign_ops() {
        let mut bb = Bitboard::single(1);
        bb |= Bitboard::single(2);
        assert!(bb.get(1));
        assert!(bb.get(2));

        bb &= Bitboard::single(2);
        assert!(!bb.get(1));
        assert!(bb.get(2));
    }
}
