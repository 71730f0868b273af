/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Generation of pseudo-legal moves, with an ordering score attached to each.
//!
//! Generation does not check that the mover's king is safe afterwards, with
//! two exceptions: castling never passes through an attacked square, and
//! check evasions only move the king to squares which are not attacked.

use crate::{AttackTables, Bitboard, Color, History, Move, MoveList, Piece, Position, Square};

/// The lowest base score given to any capture. Every capture scores at least
/// `CAPTURE_BASE + 16`, which is above any quiet move.
pub const CAPTURE_BASE: i32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The category of moves to generate.
pub enum GenType {
    /// Every pseudo-legal move.
    All,
    /// Captures only, including en passant and capturing promotions.
    Captures,
    /// Non-captures only, including castles and promotions by push.
    Quiets,
    /// Moves which respond to check. If the side to move is not in check,
    /// this is the same as `GenType::All`.
    Evasions,
}

/// The types of move generation. These are used in const generics, as enums are
/// not supported in const generics.
type GenMode = u8;

/// The mode identifier to generate all moves.
const ALL: GenMode = 0;
/// The mode identifier to generate captures only.
const CAPTURES: GenMode = 1;
/// The mode identifier to generate non-captures only.
const QUIETS: GenMode = 2;
/// The mode identifier to generate check evasions.
const EVASIONS: GenMode = 3;

/// The squares involved in one castling move.
struct Castle {
    king_from: Square,
    king_to: Square,
    rook: Square,
    /// Squares which must be empty.
    empty: Bitboard,
    /// Squares which must not be attacked, including the king's origin.
    safe: [Square; 3],
}

/// Castles by color, kingside first.
const CASTLES: [[Castle; 2]; 2] = [
    [
        Castle {
            king_from: Square::E1,
            king_to: Square::G1,
            rook: Square::H1,
            empty: Bitboard::new(0x0000_0000_0000_0060),
            safe: [Square::E1, Square::F1, Square::G1],
        },
        Castle {
            king_from: Square::E1,
            king_to: Square::C1,
            rook: Square::A1,
            empty: Bitboard::new(0x0000_0000_0000_000E),
            safe: [Square::E1, Square::D1, Square::C1],
        },
    ],
    [
        Castle {
            king_from: Square::E8,
            king_to: Square::G8,
            rook: Square::H8,
            empty: Bitboard::new(0x6000_0000_0000_0000),
            safe: [Square::E8, Square::F8, Square::G8],
        },
        Castle {
            king_from: Square::E8,
            king_to: Square::C8,
            rook: Square::A8,
            empty: Bitboard::new(0x0E00_0000_0000_0000),
            safe: [Square::E8, Square::D8, Square::C8],
        },
    ],
];

/// A move generator bound to one position and one set of attack tables.
///
/// The generator owns the list its results are written to, and reuses it on
/// every call to `generate`. It cannot be cloned, so two callers can never
/// share one in-flight list:
///
/// ```compile_fail
/// use fiddler_movegen::{initialize_tables, Board, MoveGenerator};
///
/// let board = Board::default();
/// let generator = MoveGenerator::new(initialize_tables(), &board);
/// let copy = generator.clone();
/// ```
///
/// # Examples
///
/// ```
/// use fiddler_movegen::{initialize_tables, Board, GenType, MoveGenerator};
///
/// let tables = initialize_tables();
/// let board = Board::default();
/// let mut generator = MoveGenerator::new(tables, &board);
/// assert_eq!(generator.generate(GenType::All).len(), 20);
/// assert!(generator.generate(GenType::Captures).is_empty());
/// ```
pub struct MoveGenerator<'a, P: Position> {
    pos: &'a P,
    tables: &'a AttackTables,
    history: Option<&'a History>,
    moves: MoveList,
}

/// Facts about the position computed once per generation call.
struct GenContext {
    player: Color,
    allies: Bitboard,
    enemies: Bitboard,
    occupancy: Bitboard,
    king_sq: Option<Square>,
}

impl<'a, P: Position> MoveGenerator<'a, P> {
    #[must_use]
    /// Bind a new generator to `pos`. Quiet moves will score zero (plus a
    /// small bonus for promotions) until a history table is attached.
    pub fn new(tables: &'a AttackTables, pos: &'a P) -> MoveGenerator<'a, P> {
        MoveGenerator {
            pos,
            tables,
            history: None,
            moves: MoveList::new(),
        }
    }

    #[must_use]
    /// Score quiet moves with `history`.
    pub fn with_history(mut self, history: &'a History) -> MoveGenerator<'a, P> {
        self.history = Some(history);
        self
    }

    /// Bind this generator to a different position, keeping its move list.
    pub fn rebind(&mut self, pos: &'a P) {
        self.pos = pos;
        self.moves.clear();
    }

    #[must_use]
    /// Get the position this generator is bound to.
    pub fn position(&self) -> &'a P {
        self.pos
    }

    #[must_use]
    /// Get the result of the most recent call to `generate`.
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Generate the moves of category `gen_type` in the bound position, in
    /// generation order. The previous result is discarded.
    pub fn generate(&mut self, gen_type: GenType) -> &MoveList {
        self.moves.clear();
        match gen_type {
            GenType::All => self.generate_mode::<ALL>(),
            GenType::Captures => self.generate_mode::<CAPTURES>(),
            GenType::Quiets => self.generate_mode::<QUIETS>(),
            GenType::Evasions => self.generate_mode::<EVASIONS>(),
        }

        &self.moves
    }

    fn generate_mode<const M: GenMode>(&mut self) {
        let pos = self.pos;
        let player = pos.side_to_move();
        let allies = pos.color(player);
        let enemies = pos.color(!player);
        let ctx = GenContext {
            player,
            allies,
            enemies,
            occupancy: allies | enemies,
            king_sq: pos.king_square(player),
        };

        if M == EVASIONS {
            if let Some(king_sq) = ctx.king_sq {
                let checkers = pos.checkers(self.tables);
                if !checkers.is_empty() {
                    self.evasions(&ctx, king_sq, checkers);
                    return;
                }
            }
        }
        self.non_evasions::<M>(&ctx);
    }

    /// Generate moves for a player who is not in check. `EVASIONS` behaves
    /// like `ALL` here.
    fn non_evasions<const M: GenMode>(&mut self, ctx: &GenContext) {
        let target = match M {
            CAPTURES => ctx.enemies,
            QUIETS => !ctx.occupancy,
            _ => !ctx.allies,
        };

        let mut pawn_target = target;
        if M != QUIETS {
            if let Some(ep_sq) = self.pos.en_passant_square() {
                pawn_target.insert(ep_sq);
            }
        }
        self.pawn_moves::<M>(ctx, pawn_target);
        self.piece_moves(ctx, target);

        if M != CAPTURES {
            self.castles(ctx);
        }
        if let Some(king_sq) = ctx.king_sq {
            let to_bb = self.tables.king_attacks(king_sq) & target;
            self.append_normal(ctx, king_sq, Piece::King, to_bb);
        }
    }

    /// Generate the responses to check from the king on `king_sq`, given by
    /// `checkers`. With one checker, other pieces may capture it or block its
    /// line; with two, only the king may move. The king never steps onto a
    /// square that is attacked once it has left its own square.
    fn evasions(&mut self, ctx: &GenContext, king_sq: Square, checkers: Bitboard) {
        let pos = self.pos;
        let tables = self.tables;

        if checkers.has_single_bit() {
            #[allow(clippy::cast_possible_truncation)]
            let checker_sq = Square::from_index(checkers.trailing_zeros() as u8);
            let target = (tables.between(king_sq, checker_sq) | checkers) & !ctx.allies;

            let mut pawn_target = target;
            if let Some(ep_sq) = pos.en_passant_square() {
                // can en passant remove the checker?
                if checkers.contains(step_back(ep_sq, ctx.player.pawn_push())) {
                    pawn_target.insert(ep_sq);
                }
            }
            self.pawn_moves::<ALL>(ctx, pawn_target);
            self.piece_moves(ctx, target);
        }

        let occupancy_without_king = ctx.occupancy ^ Bitboard::from(king_sq);
        let safe_sqs = tables.king_attacks(king_sq) & !ctx.allies;
        for to_sq in safe_sqs {
            if tables
                .square_attackers(pos, to_sq, !ctx.player, occupancy_without_king)
                .is_empty()
            {
                let victim = self.victim_at(ctx, to_sq);
                self.push_scored(ctx, Move::normal(king_sq, to_sq), Piece::King, victim);
            }
        }
    }

    /// Generate the moves all pawns can make which end on `target`.
    /// En passant is generated only when the en passant square is in
    /// `target`.
    fn pawn_moves<const M: GenMode>(&mut self, ctx: &GenContext, target: Bitboard) {
        let pos = self.pos;
        let player = ctx.player;
        let pawns = pos.colored(player, Piece::Pawn);
        let push = player.pawn_push();
        let promote_rank = player.pawn_promote_rank();
        let empty = !ctx.occupancy;

        if M != QUIETS {
            let capture_mask = ctx.enemies & target;
            // prevent pawns from capturing by wraparound
            let west_capturers = pawns & !Bitboard::FILE_A;
            let east_capturers = pawns & !Bitboard::FILE_H;
            for (capturers, offset) in [(west_capturers, push - 1), (east_capturers, push + 1)] {
                for to_sq in capturers.shift(offset) & capture_mask {
                    let from_sq = step_back(to_sq, offset);
                    let victim = pos.piece_at(to_sq);
                    if promote_rank.contains(to_sq) {
                        for pt in Piece::PROMOTING {
                            let m = Move::promoting(from_sq, to_sq, pt);
                            self.push_scored(ctx, m, Piece::Pawn, victim);
                        }
                    } else {
                        self.push_scored(ctx, Move::normal(from_sq, to_sq), Piece::Pawn, victim);
                    }
                }
            }

            if let Some(ep_sq) = pos.en_passant_square() {
                if target.contains(ep_sq) {
                    let from_sqs = self.tables.pawn_attacks(!player, ep_sq) & pawns;
                    for from_sq in from_sqs {
                        let m = Move::en_passant(from_sq, ep_sq);
                        self.push_scored(ctx, m, Piece::Pawn, Some(Piece::Pawn));
                    }
                }
            }
        }

        if M != CAPTURES {
            let singles = pawns.shift(push) & empty;
            let doubles = (singles & player.pawn_double_push_rank()).shift(push) & empty & target;
            let singles = singles & target;

            for to_sq in singles {
                let from_sq = step_back(to_sq, push);
                if promote_rank.contains(to_sq) {
                    for pt in Piece::PROMOTING {
                        let m = Move::promoting(from_sq, to_sq, pt);
                        self.push_scored(ctx, m, Piece::Pawn, None);
                    }
                } else {
                    self.push_scored(ctx, Move::normal(from_sq, to_sq), Piece::Pawn, None);
                }
            }
            for to_sq in doubles {
                let m = Move::double_push(step_back(to_sq, 2 * push), to_sq);
                self.push_scored(ctx, m, Piece::Pawn, None);
            }
        }
    }

    /// Generate all the moves for a knight, bishop, rook, or queen which end
    /// up on the target.
    fn piece_moves(&mut self, ctx: &GenContext, target: Bitboard) {
        let pos = self.pos;
        let tables = self.tables;
        for sq in pos.colored(ctx.player, Piece::Knight) {
            self.append_normal(ctx, sq, Piece::Knight, tables.knight_attacks(sq) & target);
        }
        for sq in pos.colored(ctx.player, Piece::Bishop) {
            let to_bb = tables.bishop_attacks(sq, ctx.occupancy) & target;
            self.append_normal(ctx, sq, Piece::Bishop, to_bb);
        }
        for sq in pos.colored(ctx.player, Piece::Rook) {
            let to_bb = tables.rook_attacks(sq, ctx.occupancy) & target;
            self.append_normal(ctx, sq, Piece::Rook, to_bb);
        }
        for sq in pos.colored(ctx.player, Piece::Queen) {
            let to_bb = tables.queen_attacks(sq, ctx.occupancy) & target;
            self.append_normal(ctx, sq, Piece::Queen, to_bb);
        }
    }

    /// Generate the castles available to the player. A castle needs its
    /// right, its king and rook on their home squares, the squares between
    /// them empty, and the king's origin, crossing, and landing squares
    /// unattacked.
    fn castles(&mut self, ctx: &GenContext) {
        let pos = self.pos;
        let player = ctx.player;
        let rights = pos.castle_rights();
        let kings = pos.colored(player, Piece::King);
        let rooks = pos.colored(player, Piece::Rook);
        let allowed = [rights.has_kingside(player), rights.has_queenside(player)];

        for (castle, allowed) in CASTLES[player as usize].iter().zip(allowed) {
            if allowed
                && kings.contains(castle.king_from)
                && rooks.contains(castle.rook)
                && (ctx.occupancy & castle.empty).is_empty()
                && castle.safe.iter().all(|&sq| {
                    self.tables
                        .square_attackers(pos, sq, !player, ctx.occupancy)
                        .is_empty()
                })
            {
                let m = Move::castling(castle.king_from, castle.king_to);
                self.push_scored(ctx, m, Piece::King, None);
            }
        }
    }

    #[inline(always)]
    /// Append a normal move from `from_sq` to each square of `to_bb`.
    fn append_normal(&mut self, ctx: &GenContext, from_sq: Square, mover: Piece, to_bb: Bitboard) {
        for to_sq in to_bb {
            let victim = self.victim_at(ctx, to_sq);
            self.push_scored(ctx, Move::normal(from_sq, to_sq), mover, victim);
        }
    }

    #[inline(always)]
    /// Get the type of the enemy piece on `sq`, if any.
    fn victim_at(&self, ctx: &GenContext, sq: Square) -> Option<Piece> {
        if ctx.enemies.contains(sq) {
            self.pos.piece_at(sq)
        } else {
            None
        }
    }

    #[inline(always)]
    /// Score `m` and append it to the move list. Captures are ordered by most
    /// valuable victim, then least valuable aggressor; quiet moves take their
    /// history score. Promotions get a small bonus by promote type.
    fn push_scored(&mut self, ctx: &GenContext, m: Move, mover: Piece, victim: Option<Piece>) {
        let promote_bonus = m.promote_type().map_or(0, |pt| pt.ordering_value() - 1);
        let score = match victim {
            Some(v) => {
                CAPTURE_BASE + 64 * v.ordering_value() - 8 * mover.ordering_value() + promote_bonus
            }
            None => self.history.map_or(0, |h| h.score(ctx.player, m)) + promote_bonus,
        };
        self.moves.add(m, score);
    }
}

#[inline(always)]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
/// Get the square `offset` indices before `sq`.
fn step_back(sq: Square, offset: i8) -> Square {
    Square::from_index((sq as i8 - offset) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{initialize_tables, Board, MoveKind, ScoredMove};

    /// Kiwipete, a position with many captures, castles, and pins.
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn generate(fen: &str, gen_type: GenType) -> Vec<ScoredMove> {
        let b = Board::from_fen(fen).unwrap();
        let mut generator = MoveGenerator::new(initialize_tables(), &b);
        generator.generate(gen_type).as_slice().to_vec()
    }

    fn moves_of(fen: &str, gen_type: GenType) -> Vec<Move> {
        generate(fen, gen_type).into_iter().map(|sm| sm.m).collect()
    }

    fn assert_no_duplicates(moves: &[Move]) {
        for (i, m) in moves.iter().enumerate() {
            assert!(!moves[i + 1..].contains(m), "duplicate move {m}");
        }
    }

    #[test]
    /// Test that the start position has exactly its 20 moves.
    fn start_position() {
        let b = Board::default();
        let moves = moves_of(Board::START_FEN, GenType::All);
        assert_eq!(moves.len(), 20);
        assert_no_duplicates(&moves);

        let pawn_moves = moves
            .iter()
            .filter(|m| b[Piece::Pawn].contains(m.from_square()))
            .count();
        let knight_moves = moves
            .iter()
            .filter(|m| b[Piece::Knight].contains(m.from_square()))
            .count();
        let double_pushes = moves
            .iter()
            .filter(|m| m.kind() == MoveKind::DoublePush)
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);
        assert_eq!(double_pushes, 8);
        assert!(moves.iter().all(|m| !m.is_castle() && !m.is_en_passant()));
        assert!(moves.contains(&Move::double_push(Square::E2, Square::E4)));
        assert!(moves.contains(&Move::normal(Square::G1, Square::F3)));
    }

    #[test]
    /// Test that captures and quiets split all moves between them.
    fn captures_and_quiets_partition_all() {
        for fen in [
            Board::START_FEN,
            KIWIPETE,
            "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "r1bqk2r/pP3ppp/2n2n2/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
        ] {
            let all = moves_of(fen, GenType::All);
            let captures = moves_of(fen, GenType::Captures);
            let quiets = moves_of(fen, GenType::Quiets);
            assert_no_duplicates(&all);
            assert_eq!(captures.len() + quiets.len(), all.len(), "{fen}");
            for m in captures.iter().chain(&quiets) {
                assert!(all.contains(m), "{m} missing from all moves in {fen}");
            }
            for m in &captures {
                assert!(!quiets.contains(m), "{m} is both a capture and quiet in {fen}");
            }
        }
    }

    #[test]
    /// Test that every capture outscores every quiet move.
    fn captures_before_quiets() {
        let moves = generate(KIWIPETE, GenType::All);
        let captures = moves_of(KIWIPETE, GenType::Captures);
        assert!(!captures.is_empty());

        let min_capture = moves
            .iter()
            .filter(|sm| captures.contains(&sm.m))
            .map(|sm| sm.score)
            .min()
            .unwrap();
        let max_quiet = moves
            .iter()
            .filter(|sm| !captures.contains(&sm.m))
            .map(|sm| sm.score)
            .max()
            .unwrap();
        assert!(min_capture > max_quiet);
    }

    #[test]
    /// Test that saturated history still leaves quiet moves below captures.
    fn history_stays_below_captures() {
        let b = Board::from_fen(KIWIPETE).unwrap();
        let tables = initialize_tables();
        let mut history = History::new();
        let quiets: Vec<Move> = MoveGenerator::new(tables, &b)
            .generate(GenType::Quiets)
            .iter()
            .map(|sm| sm.m)
            .collect();
        for &m in &quiets {
            for _ in 0..100 {
                history.record_cutoff(Color::White, m, u8::MAX);
            }
        }

        let mut generator = MoveGenerator::new(tables, &b).with_history(&history);
        let moves = generator.generate(GenType::All);
        for sm in moves {
            if quiets.contains(&sm.m) {
                assert!(sm.score < CAPTURE_BASE);
            } else {
                assert!(sm.score > CAPTURE_BASE);
            }
        }
    }

    #[test]
    fn history_scores_quiets() {
        let b = Board::default();
        let mut history = History::new();
        let nf3 = Move::normal(Square::G1, Square::F3);
        history.record_cutoff(Color::White, nf3, 3);

        let mut generator = MoveGenerator::new(initialize_tables(), &b).with_history(&history);
        let moves = generator.generate(GenType::All);
        assert_eq!(moves.score_of(nf3), Some(9));
        assert_eq!(moves.score_of(Move::normal(Square::B1, Square::C3)), Some(0));
    }

    #[test]
    /// Test most-valuable-victim, least-valuable-aggressor ordering.
    fn mvv_lva() {
        // exd5 and Qxd5 both take the queen; exf5 takes a rook
        let moves = generate("4k3/8/8/3q1r2/4P3/8/8/3QK3 w - - 0 1", GenType::Captures);
        let score = |m: Move| moves.iter().find(|sm| sm.m == m).unwrap().score;
        let pxq = score(Move::normal(Square::E4, Square::D5));
        let qxq = score(Move::normal(Square::D1, Square::D5));
        let pxr = score(Move::normal(Square::E4, Square::F5));
        assert!(pxq > qxq);
        assert!(qxq > pxr);
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn castling_allowed() {
        let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", GenType::All);
        assert!(moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::castling(Square::E1, Square::C1)));

        let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", GenType::Quiets);
        assert!(moves.contains(&Move::castling(Square::E8, Square::G8)));
        assert!(moves.contains(&Move::castling(Square::E8, Square::C8)));

        let captures = moves_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", GenType::Captures);
        assert!(captures.iter().all(|m| !m.is_castle()));
    }

    #[test]
    /// Test that removing rights removes castles.
    fn castling_needs_rights() {
        let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", GenType::All);
        assert!(moves.iter().all(|m| !m.is_castle()));

        let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1", GenType::All);
        assert!(!moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::castling(Square::E1, Square::C1)));
    }

    #[test]
    /// Test that a piece between king and rook prevents castling on that side.
    fn castling_needs_empty_squares() {
        let moves = moves_of("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", GenType::All);
        assert!(!moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::castling(Square::E1, Square::C1)));

        // the B1 square must be empty even though the king never visits it
        let moves = moves_of("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", GenType::All);
        assert!(moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(!moves.contains(&Move::castling(Square::E1, Square::C1)));
    }

    #[test]
    /// Test that castling through an attacked square is not generated.
    fn castling_needs_safe_path() {
        // the rook on f8 attacks f1
        let moves = moves_of("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1", GenType::All);
        assert!(!moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::castling(Square::E1, Square::C1)));

        // the rook on d8 attacks d1
        let moves = moves_of("3rk2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", GenType::All);
        assert!(moves.contains(&Move::castling(Square::E1, Square::G1)));
        assert!(!moves.contains(&Move::castling(Square::E1, Square::C1)));

        // B1 may be attacked, since the king never crosses it
        let moves = moves_of("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", GenType::All);
        assert!(moves.contains(&Move::castling(Square::E1, Square::C1)));

        // no castling out of check
        let moves = moves_of("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", GenType::All);
        assert!(moves.iter().all(|m| !m.is_castle()));
    }

    #[test]
    /// Test evasions against a single checker: block, capture, or step away.
    fn single_check_evasions() {
        let fen = "4k3/8/8/8/4r3/8/R7/4K2B w - - 0 1";
        let moves = moves_of(fen, GenType::Evasions);
        assert_no_duplicates(&moves);

        let mut expected = vec![
            Move::normal(Square::A2, Square::E2),
            Move::normal(Square::H1, Square::E4),
            Move::normal(Square::E1, Square::D1),
            Move::normal(Square::E1, Square::D2),
            Move::normal(Square::E1, Square::F1),
            Move::normal(Square::E1, Square::F2),
        ];
        let mut actual = moves.clone();
        expected.sort_by_key(|m| m.value());
        actual.sort_by_key(|m| m.value());
        assert_eq!(actual, expected);

        // the full move list still contains pseudo-legal non-evasions
        assert!(moves_of(fen, GenType::All).len() > moves.len());
    }

    #[test]
    /// Test that only the king moves in double check.
    fn double_check_evasions() {
        let moves = moves_of("4k3/8/8/8/4r3/3n4/R7/4K2B w - - 0 1", GenType::Evasions);
        let mut to_sqs: Vec<Square> = moves.iter().map(|m| m.to_square()).collect();
        to_sqs.sort();
        assert!(moves.iter().all(|m| m.from_square() == Square::E1));
        assert_eq!(to_sqs, vec![Square::D1, Square::F1, Square::D2]);
    }

    #[test]
    /// Test that a king cannot evade by stepping back along the checking line.
    fn king_cannot_retreat_along_check() {
        let moves = moves_of("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", GenType::Evasions);
        assert!(!moves.contains(&Move::normal(Square::E1, Square::F1)));
        assert!(!moves.contains(&Move::normal(Square::E1, Square::D1)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::E2)));
    }

    #[test]
    /// Test that en passant can capture a checking pawn.
    fn en_passant_evasion() {
        let moves = moves_of("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1", GenType::Evasions);
        assert!(moves.contains(&Move::en_passant(Square::E4, Square::D3)));
        assert!(moves.contains(&Move::normal(Square::C5, Square::D4)));
    }

    #[test]
    /// Test that en passant can block a slider's check by landing between it
    /// and the king.
    fn en_passant_blocks_check() {
        let moves = moves_of("4kb2/8/8/3pP3/8/K7/8/8 w - d6 0 1", GenType::Evasions);
        assert!(moves.contains(&Move::en_passant(Square::E5, Square::D6)));
        assert!(!moves.contains(&Move::normal(Square::E5, Square::E6)));
    }

    #[test]
    /// Test that evasions are all moves when not in check.
    fn evasions_without_check() {
        for fen in [Board::START_FEN, KIWIPETE] {
            assert_eq!(
                generate(fen, GenType::Evasions),
                generate(fen, GenType::All)
            );
        }
    }

    #[test]
    fn en_passant_generated() {
        let fen = "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        let ep = Move::en_passant(Square::E5, Square::F6);
        assert!(moves_of(fen, GenType::All).contains(&ep));
        assert!(moves_of(fen, GenType::Captures).contains(&ep));
        assert!(!moves_of(fen, GenType::Quiets).contains(&ep));
    }

    #[test]
    /// Test that a pawn reaching the last rank promotes to each of four
    /// types, and that queens are preferred.
    fn promotions() {
        let quiets = generate("8/5P2/2k5/4K3/8/8/8/8 w - - 0 1", GenType::Quiets);
        let promotions: Vec<&ScoredMove> = quiets.iter().filter(|sm| sm.m.is_promotion()).collect();
        assert_eq!(promotions.len(), 4);
        for pt in Piece::PROMOTING {
            assert!(quiets
                .iter()
                .any(|sm| sm.m == Move::promoting(Square::F7, Square::F8, pt)));
        }
        let score = |pt| {
            promotions
                .iter()
                .find(|sm| sm.m.promote_type() == Some(pt))
                .unwrap()
                .score
        };
        assert!(score(Piece::Queen) > score(Piece::Knight));
        assert!(generate("8/5P2/2k5/4K3/8/8/8/8 w - - 0 1", GenType::Captures).is_empty());

        let captures = moves_of("6n1/5P2/2k5/4K3/8/8/8/8 w - - 0 1", GenType::Captures);
        assert_eq!(captures.len(), 4);
        assert!(captures.contains(&Move::promoting(Square::F7, Square::G8, Piece::Queen)));
    }

    #[test]
    fn black_pawns_move_down() {
        let b = Board::from_fen("4k3/p7/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        let mut generator = MoveGenerator::new(initialize_tables(), &b);
        let moves = generator.generate(GenType::Quiets);
        assert!(moves.contains(Move::normal(Square::A7, Square::A6)));
        assert!(moves.contains(Move::double_push(Square::A7, Square::A5)));
    }

    #[test]
    /// Test that pawns on the edge files do not capture around the board.
    fn no_wraparound_captures() {
        // a4 must not take h4
        let captures = moves_of("4k3/8/8/8/P6p/8/8/4K3 w - - 0 1", GenType::Captures);
        assert!(captures.is_empty());
        // h4 must not take a6
        let captures = moves_of("4k3/8/p7/8/7P/8/8/4K3 w - - 0 1", GenType::Captures);
        assert!(captures.is_empty());
    }

    #[test]
    fn rebind_reuses_generator() {
        let tables = initialize_tables();
        let start = Board::default();
        let kiwipete = Board::from_fen(KIWIPETE).unwrap();
        let mut generator = MoveGenerator::new(tables, &start);
        assert_eq!(generator.generate(GenType::All).len(), 20);

        generator.rebind(&kiwipete);
        assert!(generator.moves().is_empty());
        assert_eq!(generator.position(), &kiwipete);
        assert_eq!(generator.generate(GenType::All).len(), 48);
        assert_eq!(generator.moves().len(), 48);
    }
}
