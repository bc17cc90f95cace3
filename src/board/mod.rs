pub mod error;
pub mod position;
pub mod types;

pub use error::{MoveError, SetupError};
pub use position::Position;
pub use types::{Color, GameStatus, Move, Piece, PieceId, PieceKind, RuleSet, Square, FILES, NUM_SQUARES, RANKS};

use std::fmt;

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot, PieceKind::Horse, PieceKind::Elephant, PieceKind::Advisor, PieceKind::General,
    PieceKind::Advisor, PieceKind::Elephant, PieceKind::Horse, PieceKind::Chariot,
];
const CANNON_FILES: [i8; 2] = [1, 7];
const SOLDIER_FILES: [i8; 5] = [0, 2, 4, 6, 8];

/// Immutable-by-convention snapshot of a position.
///
/// Pieces are stored on a square-indexed grid, so no two pieces can share a
/// square. Identity lives in `Piece::id` and survives moves; it disappears
/// only when the piece is captured. Every operation that makes a move returns
/// a fresh `Board` and leaves `self` untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; NUM_SQUARES],
    rules: RuleSet,
    next_id: u8,
}

impl Default for Board {
    fn default() -> Self { Self::empty() }
}

impl Board {
    pub fn empty() -> Self {
        Self { grid: [None; NUM_SQUARES], rules: RuleSet::default(), next_id: 0 }
    }

    /// Standard 32-piece setup. Red ids are 0..16 and Black ids 16..32, each
    /// side numbered back rank first, then cannons, then soldiers.
    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for color in [Color::Red, Color::Black] {
            let (back, cannon, soldier) = match color { Color::Red => (9, 7, 6), Color::Black => (0, 2, 3) };
            let rows = BACK_RANK.iter().enumerate().map(|(x, &k)| (k, Square::new(x as i8, back)))
                .chain(CANNON_FILES.iter().map(|&x| (PieceKind::Cannon, Square::new(x, cannon))))
                .chain(SOLDIER_FILES.iter().map(|&x| (PieceKind::Soldier, Square::new(x, soldier))));
            for (kind, sq) in rows {
                let id = PieceId(b.next_id);
                b.next_id += 1;
                b.put(Piece { id, kind, color, square: sq });
            }
        }
        b
    }

    /// Builds a board from `(kind, color, (x, y))` triples, ids assigned in order.
    pub fn from_pieces(pieces: &[(PieceKind, Color, (i8, i8))]) -> Result<Self, SetupError> {
        let mut b = Self::empty();
        for &(kind, color, (x, y)) in pieces {
            b.place(kind, color, Square::new(x, y))?;
        }
        Ok(b)
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> RuleSet { self.rules }

    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> Result<PieceId, SetupError> {
        let idx = square.index().ok_or(SetupError::OffBoard(square))?;
        if self.grid[idx].is_some() { return Err(SetupError::Occupied(square)); }
        if self.next_id == u8::MAX { return Err(SetupError::TooManyPieces); }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.grid[idx] = Some(Piece { id, kind, color, square });
        Ok(id)
    }

    /// Removes and returns whatever stands on `square`.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        square.index().and_then(|i| self.grid[i].take())
    }

    fn put(&mut self, piece: Piece) {
        if let Some(i) = piece.square.index() { self.grid[i] = Some(piece); }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|i| self.grid[i])
    }

    pub fn is_occupied(&self, square: Square) -> bool { self.piece_at(square).is_some() }

    pub fn piece(&self, id: PieceId) -> Option<Piece> { self.pieces().find(|p| p.id == id) }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ { self.grid.iter().flatten().copied() }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn general(&self, color: Color) -> Option<Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::General)
    }

    pub fn len(&self) -> usize { self.pieces().count() }

    pub fn is_empty(&self) -> bool { self.grid.iter().all(Option::is_none) }

    /// Number of pieces strictly between two squares sharing a file or rank;
    /// `None` when they are not aligned or are the same square.
    pub fn pieces_between(&self, a: Square, b: Square) -> Option<usize> {
        if a == b || (a.x != b.x && a.y != b.y) { return None; }
        let dx = (b.x - a.x).signum();
        let dy = (b.y - a.y).signum();
        let mut count = 0;
        let mut cur = Square::new(a.x + dx, a.y + dy);
        while cur != b {
            if self.is_occupied(cur) { count += 1; }
            cur = Square::new(cur.x + dx, cur.y + dy);
        }
        Some(count)
    }

    /// Returns the board after `mv`: the mover relocated with its identity
    /// kept, the captured piece (if any) gone. `self` is not modified.
    ///
    /// A stale move (mover no longer on `mv.from`, or `mv.to` holding
    /// something other than `mv.captured`) yields an unchanged copy.
    pub fn apply(&self, mv: &Move) -> Board {
        let Some(mover) = self.piece_at(mv.from).filter(|p| p.id == mv.piece.id) else { return self.clone() };
        if self.piece_at(mv.to).map(|p| p.id) != mv.captured.map(|c| c.id) { return self.clone(); }
        let mut next = self.clone();
        next.remove(mv.from);
        next.remove(mv.to);
        next.put(Piece { square: mv.to, ..mover });
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7 8")?;
        for y in 0..RANKS {
            write!(f, "{y:>2}")?;
            for x in 0..FILES {
                let c = self.piece_at(Square::new(x, y)).map_or('.', |p| p.symbol());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
            if y == 4 { writeln!(f, "   ~~~~~~~~~~~~~~~~~")?; }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board").field("rules", &self.rules).field("pieces", &self.pieces().collect::<Vec<_>>()).finish()
    }
}

/// Free-function form of [`Board::apply`].
pub fn apply_move(mv: &Move, board: &Board) -> Board { board.apply(mv) }
