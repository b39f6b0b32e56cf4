use crate::position::board::Board;
use crate::position::setup::Setup;
use crate::position::square_set::SquareSet;
use crate::position::types::{Color, Role, Square};

/// 斜め反転の第1段（ニブル粒度）で対角線をまたぐビットのマスク。
const DIAGONAL_MASK_28: SquareSet = SquareSet::from_raw(0x0f0f_0f0f_0000_0000);

/// 斜め反転の第2段（2ビット粒度）で対角線をまたぐビットのマスク。
const DIAGONAL_MASK_14: SquareSet = SquareSet::from_raw(0x3333_0000_3333_0000);

/// 斜め反転の第3段（1ビット粒度）で対角線をまたぐビットのマスク。
const DIAGONAL_MASK_7: SquareSet = SquareSet::from_raw(0x5500_5500_5500_5500);

/// 左右反転の第1段（隣接ビット対の交換）のマスク。
const HORIZONTAL_MASK_1: SquareSet = SquareSet::from_raw(0x5555_5555_5555_5555);

/// 左右反転の第2段（隣接2ビット組の交換）のマスク。
const HORIZONTAL_MASK_2: SquareSet = SquareSet::from_raw(0x3333_3333_3333_3333);

/// 左右反転の第3段（隣接ニブルの交換）のマスク。
const HORIZONTAL_MASK_4: SquareSet = SquareSet::from_raw(0x0f0f_0f0f_0f0f_0f0f);

/// 1ビット分のシフト量。
const SHIFT_1: u32 = 1;

/// 2ビット分のシフト量。
const SHIFT_2: u32 = 2;

/// 4ビット分のシフト量。
const SHIFT_4: u32 = 4;

/// 7ビット分のシフト量。
const SHIFT_7: u32 = 7;

/// 14ビット分のシフト量。
const SHIFT_14: u32 = 14;

/// 28ビット分のシフト量。
const SHIFT_28: u32 = 28;

/// マス集合を主対角線（a1–h8）で転置する。
///
/// (file, rank) のマスは (rank, file) へ移る。自己逆変換。
#[inline]
#[must_use]
pub const fn flip_diagonal(s: SquareSet) -> SquareSet {
    let mut result = s;

    let mut t = result.xor(result.shl(SHIFT_28)).intersect(DIAGONAL_MASK_28);
    result = result.xor(t.xor(t.shr(SHIFT_28)));

    t = result.xor(result.shl(SHIFT_14)).intersect(DIAGONAL_MASK_14);
    result = result.xor(t.xor(t.shr(SHIFT_14)));

    t = result.xor(result.shl(SHIFT_7)).intersect(DIAGONAL_MASK_7);
    result = result.xor(t.xor(t.shr(SHIFT_7)));

    result
}

/// マス集合を左右（ファイル方向）に反転する。
///
/// (file, rank) のマスは (7 - file, rank) へ移る。自己逆変換。
#[inline]
#[must_use]
pub const fn flip_horizontal(s: SquareSet) -> SquareSet {
    let mut result = s;

    result = result
        .shr(SHIFT_1)
        .intersect(HORIZONTAL_MASK_1)
        .union(result.intersect(HORIZONTAL_MASK_1).shl(SHIFT_1));
    result = result
        .shr(SHIFT_2)
        .intersect(HORIZONTAL_MASK_2)
        .union(result.intersect(HORIZONTAL_MASK_2).shl(SHIFT_2));
    result = result
        .shr(SHIFT_4)
        .intersect(HORIZONTAL_MASK_4)
        .union(result.intersect(HORIZONTAL_MASK_4).shl(SHIFT_4));

    result
}

/// マス集合を上下（ランク方向）に反転する。
///
/// (file, rank) のマスは (file, 7 - rank) へ移る。自己逆変換。
#[inline]
#[must_use]
pub const fn flip_vertical(s: SquareSet) -> SquareSet {
    s.swap_bytes()
}

/// マス集合を180度回転する。
///
/// (file, rank) のマスは (7 - file, 7 - rank) へ移る。自己逆変換であり、
/// 上下反転と左右反転の合成と一致する。
#[inline]
#[must_use]
pub const fn rotate_180(s: SquareSet) -> SquareSet {
    s.reverse_bits()
}

/// 盤面の全ビットボードフィールドへ変換 `f` を適用した盤面を返す。
///
/// occupied・promoted・各色・各駒種のフィールドそれぞれが、元の同名
/// フィールドの `f` による像になる。入力は変更しない。
#[inline]
#[must_use]
pub fn transform_board<F>(board: Board, f: F) -> Board
where
    F: Fn(SquareSet) -> SquareSet,
{
    let mut result = Board::empty();

    result.set_occupied(f(board.occupied()));
    result.set_promoted(f(board.promoted()));

    for color in Color::ALL {
        result.set_color(color, f(board.color(color)));
    }

    for role in Role::ALL {
        result.set_role(role, f(board.role(role)));
    }

    result
}

/// 変換後のアンパッサンマスを求める。
///
/// 像が単集合でない場合は警告を記録し、像の最小インデックスのマス
/// （像が空なら `None`）へ落とす。
fn transform_ep_square<F>(square: Square, f: &F) -> Option<Square>
where
    F: Fn(SquareSet) -> SquareSet,
{
    let image = f(SquareSet::from_square(square));
    if image.count() != 1 {
        tracing::warn!(
            count = image.count(),
            "en passant image must be a singleton"
        );
    }

    image.first()
}

/// 局面の各マス集合フィールドへ変換 `f` を適用した局面を返す。
///
/// 盤面とキャスリング権には `f` を適用し、アンパッサンマスは単集合として
/// 変換してから取り出す。持ち駒・残りチェック回数・手番・手数はそのまま
/// コピーする。入力は変更しない。
///
/// `f` にはマスの全単射（本モジュールの4変換のような剛体変換）を渡すこと。
/// 単集合を単集合へ写さない `f` に対するアンパッサンマスの結果は未規定。
#[inline]
#[must_use]
pub fn transform_setup<F>(setup: Setup, f: F) -> Setup
where
    F: Fn(SquareSet) -> SquareSet,
{
    let ep_square = match setup.ep_square {
        Some(square) => transform_ep_square(square, &f),
        None => None,
    };

    Setup {
        board: transform_board(setup.board, &f),
        castling_rights: f(setup.castling_rights),
        ep_square,
        fullmoves: setup.fullmoves,
        halfmoves: setup.halfmoves,
        pockets: setup.pockets,
        remaining_checks: setup.remaining_checks,
        turn: setup.turn,
    }
}
