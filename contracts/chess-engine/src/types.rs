#![allow(dead_code)]
use soroban_sdk::{contracttype, BytesN, Env, Map, Vec};

/// Board size. The engine only ever addresses `[0, BOARD_SIZE)` rows/columns.
pub const BOARD_SIZE: u32 = 8;

/// Piece kind magnitudes, as laid out in the data model: the board stores
/// signed integers whose magnitude is one of these and whose sign is color.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub fn from_magnitude(value: i32) -> Option<PieceKind> {
        match value.abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign applied to a piece's magnitude on the board for this color.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The board row a pawn of this color starts on.
    pub fn pawn_start_row(self) -> u32 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// The board row a pawn of this color promotes on.
    pub fn promotion_row(self) -> u32 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Direction (in rows) a pawn of this color advances.
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The back rank a king/rook of this color starts on.
    pub fn back_rank(self) -> u32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Promotion choice, consulted only when a pawn move reaches the far rank.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Promotion {
    None,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub fn to_kind(self) -> Option<PieceKind> {
        match self {
            Promotion::None => None,
            Promotion::Queen => Some(PieceKind::Queen),
            Promotion::Rook => Some(PieceKind::Rook),
            Promotion::Bishop => Some(PieceKind::Bishop),
            Promotion::Knight => Some(PieceKind::Knight),
        }
    }
}

/// A move as submitted by a caller: `(fromRow, fromCol, toRow, toCol, promotion)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChessMove {
    pub from_row: u32,
    pub from_col: u32,
    pub to_row: u32,
    pub to_col: u32,
    pub promotion: Promotion,
}

/// Whether an illegal move (one leaving the mover's own king in check)
/// forfeits the game outright or is simply rejected.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Tournament,
    Friendly,
}

/// Classification of the position after a move has been applied.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

/// The full mutable position: piece placement plus every piece of derived
/// state needed to apply the next move and classify termination.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// Flattened 8x8 grid, `squares[row * 8 + col]`. Zero is empty; sign is
    /// color, magnitude is `PieceKind`.
    pub squares: Vec<i32>,

    pub side_to_move: Color,

    pub white_king_moved: bool,
    pub white_a_rook_moved: bool,
    pub white_h_rook_moved: bool,
    pub black_king_moved: bool,
    pub black_a_rook_moved: bool,
    pub black_h_rook_moved: bool,

    /// `-1` when there is no en-passant target.
    pub en_passant_row: i32,
    pub en_passant_col: i32,

    pub white_king_row: u32,
    pub white_king_col: u32,
    pub black_king_row: u32,
    pub black_king_col: u32,

    /// Half-moves since the last pawn move or capture.
    pub half_move_clock: u32,

    /// Position fingerprint -> number of times seen.
    pub repetition: Map<BytesN<32>, u32>,
    pub max_repetition: u32,
}

impl Board {
    pub fn index(row: u32, col: u32) -> u32 {
        row * BOARD_SIZE + col
    }

    pub fn get(&self, row: u32, col: u32) -> i32 {
        self.squares.get(Board::index(row, col)).unwrap_or(0)
    }

    pub fn set(&mut self, row: u32, col: u32, value: i32) {
        self.squares.set(Board::index(row, col), value);
    }

    pub fn king_position(&self, color: Color) -> (u32, u32) {
        match color {
            Color::White => (self.white_king_row, self.white_king_col),
            Color::Black => (self.black_king_row, self.black_king_col),
        }
    }

    pub fn set_king_position(&mut self, color: Color, row: u32, col: u32) {
        match color {
            Color::White => {
                self.white_king_row = row;
                self.white_king_col = col;
            }
            Color::Black => {
                self.black_king_row = row;
                self.black_king_col = col;
            }
        }
    }

    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn set_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub fn a_rook_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_a_rook_moved,
            Color::Black => self.black_a_rook_moved,
        }
    }

    pub fn set_a_rook_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_a_rook_moved = true,
            Color::Black => self.black_a_rook_moved = true,
        }
    }

    pub fn h_rook_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_h_rook_moved,
            Color::Black => self.black_h_rook_moved,
        }
    }

    pub fn set_h_rook_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_h_rook_moved = true,
            Color::Black => self.black_h_rook_moved = true,
        }
    }

    /// The standard chess starting position, White to move.
    pub fn initial(env: &Env) -> Board {
        let back_rank = [4, 2, 3, 5, 6, 3, 2, 4]; // rook, knight, bishop, queen, king, bishop, knight, rook
        let mut squares = Vec::new(env);
        for _ in 0..64u32 {
            squares.push_back(0);
        }
        let mut board = Board {
            squares,
            side_to_move: Color::White,
            white_king_moved: false,
            white_a_rook_moved: false,
            white_h_rook_moved: false,
            black_king_moved: false,
            black_a_rook_moved: false,
            black_h_rook_moved: false,
            en_passant_row: -1,
            en_passant_col: -1,
            white_king_row: 0,
            white_king_col: 4,
            black_king_row: 7,
            black_king_col: 4,
            half_move_clock: 0,
            repetition: Map::new(env),
            max_repetition: 0,
        };
        for col in 0..8u32 {
            board.set(0, col, back_rank[col as usize]);
            board.set(1, col, PieceKind::Pawn as i32);
            board.set(6, col, -(PieceKind::Pawn as i32));
            board.set(7, col, -back_rank[col as usize]);
        }
        board
    }
}

/// The result of successfully applying a move: the new board, the
/// structured move record for the `MoveMade` event, and the post-move
/// termination classification.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveApplied {
    pub board: Board,
    pub piece: i32,
    pub captured_piece: i32,
    pub promotion_piece: i32,
    pub is_check: bool,
    pub is_mate: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
    /// Set when the mover's move was pseudo-legal but left their own king in
    /// check and `Mode::Tournament` forfeits the game rather than erroring.
    pub is_forced_forfeit: bool,
    pub outcome: Outcome,
}

/// Errors the engine can return. `chess-game` maps each of these onto its
/// own contract error codes (see its `errors.rs`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    GameNotInProgress,
    OutOfBounds,
    WrongTurn,
    NotYourPiece,
    EmptySourceSquare,
    InvalidPattern,
    InvalidPromotion,
    CastlingThroughAttack,
    CastlingRightsLost,
    CastlingPathBlocked,
    MoveLeavesKingInCheck,
    NoRepetitionClaim,
    NoFiftyMoveClaim,
}
