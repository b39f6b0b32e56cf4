use crate::position::square_set::SquareSet;
use crate::position::types::{Color, Role, Square};

/// 初期配置のビショップ。
const START_BISHOPS: u64 = 0x2400_0000_0000_0024;

/// 初期配置の黒駒。
const START_BLACK: u64 = 0xffff_0000_0000_0000;

/// 初期配置のキング。
const START_KINGS: u64 = 0x1000_0000_0000_0010;

/// 初期配置のナイト。
const START_KNIGHTS: u64 = 0x4200_0000_0000_0042;

/// 初期配置の全駒。
const START_OCCUPIED: u64 = 0xffff_0000_0000_ffff;

/// 初期配置のポーン。
const START_PAWNS: u64 = 0x00ff_0000_0000_ff00;

/// 初期配置のクイーン。
const START_QUEENS: u64 = 0x0800_0000_0000_0008;

/// 初期配置のルーク。
const START_ROOKS: u64 = 0x8100_0000_0000_0081;

/// 初期配置の白駒。
const START_WHITE: u64 = 0x0000_0000_0000_ffff;

/// 盤面（駒配置のビットボード集合）。
///
/// 各フィールドは独立したビットボードであり、フィールド間の整合性は
/// この層では強制しない（呼び出し側が保証する）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// ビショップのあるマス。
    bishop: SquareSet,
    /// 黒駒のあるマス。
    black: SquareSet,
    /// キングのあるマス。
    king: SquareSet,
    /// ナイトのあるマス。
    knight: SquareSet,
    /// 駒のあるマス全体。
    occupied: SquareSet,
    /// ポーンのあるマス。
    pawn: SquareSet,
    /// 成駒マーカーのあるマス。
    promoted: SquareSet,
    /// クイーンのあるマス。
    queen: SquareSet,
    /// ルークのあるマス。
    rook: SquareSet,
    /// 白駒のあるマス。
    white: SquareSet,
}

impl Board {
    /// 指定色の駒のあるマス集合を返す。
    #[inline]
    #[must_use]
    pub const fn color(self, color: Color) -> SquareSet {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 指定マスにある駒の色を返す（駒が無ければ `None`）。
    #[inline]
    #[must_use]
    pub fn color_at(self, square: Square) -> Option<Color> {
        if self.black.contains(square) {
            Some(Color::Black)
        } else if self.white.contains(square) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bishop: SquareSet::EMPTY,
            black: SquareSet::EMPTY,
            king: SquareSet::EMPTY,
            knight: SquareSet::EMPTY,
            occupied: SquareSet::EMPTY,
            pawn: SquareSet::EMPTY,
            promoted: SquareSet::EMPTY,
            queen: SquareSet::EMPTY,
            rook: SquareSet::EMPTY,
            white: SquareSet::EMPTY,
        }
    }

    /// チェスの初期配置を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            bishop: SquareSet::from_raw(START_BISHOPS),
            black: SquareSet::from_raw(START_BLACK),
            king: SquareSet::from_raw(START_KINGS),
            knight: SquareSet::from_raw(START_KNIGHTS),
            occupied: SquareSet::from_raw(START_OCCUPIED),
            pawn: SquareSet::from_raw(START_PAWNS),
            promoted: SquareSet::EMPTY,
            queen: SquareSet::from_raw(START_QUEENS),
            rook: SquareSet::from_raw(START_ROOKS),
            white: SquareSet::from_raw(START_WHITE),
        }
    }

    /// 駒のあるマス全体の集合を返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> SquareSet {
        self.occupied
    }

    /// 成駒マーカーのあるマス集合を返す。
    #[inline]
    #[must_use]
    pub const fn promoted(self) -> SquareSet {
        self.promoted
    }

    /// 指定マスへ駒を置く（occupied・色・駒種の各フィールドへ加える）。
    #[inline]
    pub fn put(&mut self, square: Square, color: Color, role: Role) {
        let bit = SquareSet::from_square(square);
        let colors = self.color(color).union(bit);
        let roles = self.role(role).union(bit);

        self.occupied = self.occupied.union(bit);
        self.set_color(color, colors);
        self.set_role(role, roles);
    }

    /// 指定駒種のあるマス集合を返す。
    #[inline]
    #[must_use]
    pub const fn role(self, role: Role) -> SquareSet {
        match role {
            Role::Bishop => self.bishop,
            Role::King => self.king,
            Role::Knight => self.knight,
            Role::Pawn => self.pawn,
            Role::Queen => self.queen,
            Role::Rook => self.rook,
        }
    }

    /// 指定マスにある駒の種類を返す（駒が無ければ `None`）。
    #[must_use]
    pub fn role_at(self, square: Square) -> Option<Role> {
        for role in Role::ALL {
            if self.role(role).contains(square) {
                return Some(role);
            }
        }

        None
    }

    /// 指定色のマス集合を設定する。
    #[inline]
    pub fn set_color(&mut self, color: Color, squares: SquareSet) {
        match color {
            Color::Black => self.black = squares,
            Color::White => self.white = squares,
        }
    }

    /// occupied のマス集合を設定する。
    #[inline]
    pub fn set_occupied(&mut self, squares: SquareSet) {
        self.occupied = squares;
    }

    /// 成駒マーカーのマス集合を設定する。
    #[inline]
    pub fn set_promoted(&mut self, squares: SquareSet) {
        self.promoted = squares;
    }

    /// 指定駒種のマス集合を設定する。
    #[inline]
    pub fn set_role(&mut self, role: Role, squares: SquareSet) {
        match role {
            Role::Bishop => self.bishop = squares,
            Role::King => self.king = squares,
            Role::Knight => self.knight = squares,
            Role::Pawn => self.pawn = squares,
            Role::Queen => self.queen = squares,
            Role::Rook => self.rook = squares,
        }
    }
}
