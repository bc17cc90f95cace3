use serde::{Deserialize, Serialize};
use std::fmt;

pub const FILES: i8 = 9;
pub const RANKS: i8 = 10;
pub const NUM_SQUARES: usize = (FILES as usize) * (RANKS as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    pub fn opposite(self) -> Color {
        match self { Color::Red => Color::Black, Color::Black => Color::Red }
    }

    /// Rank delta of a forward step: Red advances towards y = 0.
    pub fn forward(self) -> i8 {
        match self { Color::Red => -1, Color::Black => 1 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::Red => f.write_str("red"), Color::Black => f.write_str("black") }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General, PieceKind::Advisor, PieceKind::Elephant, PieceKind::Horse,
        PieceKind::Chariot, PieceKind::Cannon, PieceKind::Soldier,
    ];

    pub fn letter(self) -> char {
        match self {
            PieceKind::General => 'g',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 's',
        }
    }
}

/// A board intersection. Coordinates are signed so that step offsets can be
/// computed before bounds filtering; only on-board squares ever reach a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub const fn new(x: i8, y: i8) -> Self { Self { x, y } }

    pub fn is_on_board(self) -> bool { self.x >= 0 && self.x < FILES && self.y >= 0 && self.y < RANKS }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let sq = Square::new(self.x + dx, self.y + dy);
        if sq.is_on_board() { Some(sq) } else { None }
    }

    /// Grid index, `None` off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() { Some(self.y as usize * FILES as usize + self.x as usize) } else { None }
    }

    pub fn from_index(idx: usize) -> Square {
        Square::new((idx % FILES as usize) as i8, (idx / FILES as usize) as i8)
    }

    /// Palace of `color`: files 3..=5, ranks 0..=2 for Black and 7..=9 for Red.
    pub fn in_palace(self, color: Color) -> bool {
        let ranks = match color { Color::Red => 7..=9, Color::Black => 0..=2 };
        (3..=5).contains(&self.x) && ranks.contains(&self.y)
    }

    /// True on `color`'s own side of the river.
    pub fn on_home_side(self, color: Color) -> bool {
        match color { Color::Red => self.y >= 5, Color::Black => self.y <= 4 }
    }

    pub fn across_river(self, color: Color) -> bool { !self.on_home_side(color) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({},{})", self.x, self.y) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

impl Piece {
    /// Red pieces upper-case, Black lower-case.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        if self.color == Color::Red { c.to_ascii_uppercase() } else { c }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool { self.captured.is_some() }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.piece.symbol(), self.from, self.to)?;
        if let Some(c) = self.captured { write!(f, "x{}", c.symbol())?; }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// Reserved for session-level adjudication; the classifier never returns it.
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool { matches!(self, GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw) }
}

/// Rule variants a board is played under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    /// Generals facing each other on an open file may capture one another.
    pub flying_general: bool,
}

impl Default for RuleSet {
    fn default() -> Self { Self { flying_general: true } }
}
