use crate::position::board::Board;
use crate::position::square_set::SquareSet;
use crate::position::types::{Color, Role, Square};

/// 初期状態の残りチェック回数（スリーチェック）。
const INITIAL_CHECKS: u8 = 3;

/// 初期局面のフルムーブ数。
const INITIAL_FULLMOVES: u32 = 1;

/// 持ち駒（1色分の駒種別カウント）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Pocket {
    /// ビショップの枚数。
    bishop: u8,
    /// キングの枚数。
    king: u8,
    /// ナイトの枚数。
    knight: u8,
    /// ポーンの枚数。
    pawn: u8,
    /// クイーンの枚数。
    queen: u8,
    /// ルークの枚数。
    rook: u8,
}

impl Pocket {
    /// 指定駒種を1枚加える（飽和加算）。
    #[inline]
    pub fn add(&mut self, role: Role) {
        match role {
            Role::Bishop => self.bishop = self.bishop.saturating_add(1),
            Role::King => self.king = self.king.saturating_add(1),
            Role::Knight => self.knight = self.knight.saturating_add(1),
            Role::Pawn => self.pawn = self.pawn.saturating_add(1),
            Role::Queen => self.queen = self.queen.saturating_add(1),
            Role::Rook => self.rook = self.rook.saturating_add(1),
        }
    }

    /// 指定駒種の枚数を返す。
    #[inline]
    #[must_use]
    pub const fn count(self, role: Role) -> u8 {
        match role {
            Role::Bishop => self.bishop,
            Role::King => self.king,
            Role::Knight => self.knight,
            Role::Pawn => self.pawn,
            Role::Queen => self.queen,
            Role::Rook => self.rook,
        }
    }

    /// 空の持ち駒を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bishop: u8::MIN,
            king: u8::MIN,
            knight: u8::MIN,
            pawn: u8::MIN,
            queen: u8::MIN,
            rook: u8::MIN,
        }
    }

    /// 総枚数を返す。
    #[must_use]
    pub fn total(self) -> u32 {
        let mut sum: u32 = u32::MIN;
        for role in Role::ALL {
            sum = sum.wrapping_add(u32::from(self.count(role)));
        }

        sum
    }
}

/// 持ち駒（両色分）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Pockets {
    /// 黒の持ち駒。
    black: Pocket,
    /// 白の持ち駒。
    white: Pocket,
}

impl Pockets {
    /// 指定色の持ち駒へ1枚加える（飽和加算）。
    #[inline]
    pub fn add(&mut self, color: Color, role: Role) {
        match color {
            Color::Black => self.black.add(role),
            Color::White => self.white.add(role),
        }
    }

    /// 指定色・駒種の枚数を返す。
    #[inline]
    #[must_use]
    pub const fn count(self, color: Color, role: Role) -> u8 {
        match color {
            Color::Black => self.black.count(role),
            Color::White => self.white.count(role),
        }
    }

    /// 空の持ち駒を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            black: Pocket::empty(),
            white: Pocket::empty(),
        }
    }
}

/// 残りチェック回数（スリーチェック系バリアント用）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RemainingChecks {
    /// 黒の残り回数。
    black: u8,
    /// 白の残り回数。
    white: u8,
}

impl RemainingChecks {
    /// 黒の残り回数を返す。
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// 初期値（双方3回）を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            black: INITIAL_CHECKS,
            white: INITIAL_CHECKS,
        }
    }

    /// 指定値で生成する。
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// 白の残り回数を返す。
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }
}

/// 局面（盤面＋対局情報のスナップショット）。
///
/// 単なる値のレコードであり、フィールド間の整合性はこの層では強制しない
/// （呼び出し側が保証する）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct Setup {
    /// 盤面。
    pub board: Board,
    /// キャスリング権（該当ルークのマス集合）。
    pub castling_rights: SquareSet,
    /// アンパッサン可能なマス。
    pub ep_square: Option<Square>,
    /// フルムーブ数。
    pub fullmoves: u32,
    /// ハーフムーブクロック。
    pub halfmoves: u32,
    /// 持ち駒（該当バリアントのみ）。
    pub pockets: Option<Pockets>,
    /// 残りチェック回数（該当バリアントのみ）。
    pub remaining_checks: Option<RemainingChecks>,
    /// 手番。
    pub turn: Color,
}

impl Setup {
    /// チェスの初期局面を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::initial(),
            castling_rights: SquareSet::CORNERS,
            ep_square: None,
            fullmoves: INITIAL_FULLMOVES,
            halfmoves: u32::MIN,
            pockets: None,
            remaining_checks: None,
            turn: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Pocket, Pockets, RemainingChecks, Setup};
    use crate::position::board::Board;
    use crate::position::square_set::SquareSet;
    use crate::position::types::{Color, Role};

    #[test]
    fn initial_setup_matches_standard_game() {
        let setup = Setup::initial();

        assert_eq!(setup.board, Board::initial());
        assert_eq!(setup.castling_rights, SquareSet::CORNERS);
        assert_eq!(setup.ep_square, None);
        assert_eq!(setup.fullmoves, 1);
        assert_eq!(setup.halfmoves, u32::MIN);
        assert_eq!(setup.pockets, None);
        assert_eq!(setup.remaining_checks, None);
        assert_eq!(setup.turn, Color::White);
    }

    #[test]
    fn pockets_count_added_pieces() {
        let mut pockets = Pockets::empty();

        pockets.add(Color::Black, Role::Pawn);
        pockets.add(Color::Black, Role::Pawn);
        pockets.add(Color::White, Role::Queen);

        assert_eq!(pockets.count(Color::Black, Role::Pawn), 2);
        assert_eq!(pockets.count(Color::White, Role::Queen), 1);
        assert_eq!(pockets.count(Color::White, Role::Pawn), u8::MIN);
    }

    #[test]
    fn pocket_total_sums_all_roles() {
        let mut pocket = Pocket::empty();

        pocket.add(Role::Rook);
        pocket.add(Role::Rook);
        pocket.add(Role::Queen);

        assert_eq!(pocket.count(Role::Rook), 2);
        assert_eq!(pocket.total(), 3);
        assert_eq!(Pocket::empty().total(), u32::MIN);
    }

    #[test]
    fn remaining_checks_start_at_three() {
        let checks = RemainingChecks::initial();

        assert_eq!(checks.black(), 3);
        assert_eq!(checks.white(), 3);
    }
}
