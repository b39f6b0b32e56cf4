/// 盤面（駒配置のビットボード集合）の実装。
pub mod board;
/// 局面（盤面＋対局情報）と付随レコードの実装。
pub mod setup;
/// マス集合（ビットボード）の実装。
pub mod square_set;
pub mod types;

pub type Board = board::Board;
pub type Color = types::Color;
pub type Pocket = setup::Pocket;
pub type Pockets = setup::Pockets;
pub type RemainingChecks = setup::RemainingChecks;
pub type Role = types::Role;
pub type Setup = setup::Setup;
pub type Square = types::Square;
pub type SquareSet = square_set::SquareSet;
