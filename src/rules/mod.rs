pub mod movegen;
pub mod status;

pub use movegen::{attacks, generate_moves, pseudo_moves};
pub use status::{
    classify, has_legal_move, is_check_safe, is_checkmate, is_in_check, is_legal_move, is_stalemate,
    legal_moves, legal_moves_for, make_move, pseudo_legal_moves,
};
