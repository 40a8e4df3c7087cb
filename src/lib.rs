//! Core logic for the blockgen parameter block generator.
//!
//! A hex template is parsed into a byte buffer with an optional sequence
//! field ([`template`]), then expanded once per index and written out as
//! numbered `.bin` files ([`expand`]). The whole pipeline is sequential
//! and every failure is fatal ([`error`]).

pub mod error;
pub mod expand;
pub mod io_utils;
pub mod template;

pub use error::BlockgenError;
pub use expand::{output_path, write_files, write_sequence, OUTPUT_EXT};
pub use template::{SeqField, Template, PLACEHOLDER};
