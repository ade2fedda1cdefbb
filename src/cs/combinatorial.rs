pub mod gray_code;

pub use gray_code::{
    gray_code, gray_decode, gray_encode, gray_transition_positions, integer_log2,
    reconstruct_gray_codes, GrayTransitions, MAX_BITS,
};
