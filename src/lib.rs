//! Transposition - classical permutation ciphers
//!
//! Every cipher in this crate reorders symbols without changing them. Each
//! one reduces to a *walk*: the order in which plaintext positions are
//! emitted. Encryption gathers along the walk and decryption scatters back
//! along the same walk, so the two are exact inverses by construction.
//!
//! ```text
//! key ──► KeyOrder ──► ColumnGrid ──► walk ──► apply_walk(Encrypt | Decrypt)
//! width + route ───► route path ──┘
//! ```
//!
//! - **Columnar**: rows under a key, read column by column in key order
//! - **Myszkowski**: like columnar, equal key symbols read together row-wise
//! - **Disrupted count**: a second key punches gaps into the grid
//! - **Disrupted line**: the grid is filled in staircase blocks
//! - **Route**: spiral or serpent path through a fixed-width grid
//! - **Rail fence, scytale, reverse, magnet, elastic**: unkeyed or line-count walks
//!
//! ## Example
//!
//! ```
//! use transposition::cipher::{Myszkowski, Transposition};
//!
//! let cipher = Myszkowski::new("TETE".chars());
//! let ciphertext = cipher.encrypt_str("YOUCANTSEEME").unwrap();
//! assert_eq!(ciphertext, "OCNSEEYUATEM");
//! assert_eq!(cipher.decrypt_str(&ciphertext).unwrap(), "YOUCANTSEEME");
//! ```
//!
//! The free functions work over any symbol type:
//!
//! ```
//! use transposition::cipher::{decrypt_route, encrypt_route, Route, RouteKind};
//!
//! let text: Vec<u8> = b"WEAREDISCOVEREDFLEEATONCE".to_vec();
//! let sealed = encrypt_route(&text, 6, Route::TLR, RouteKind::Spiral).unwrap();
//! assert_eq!(sealed, b"WEAREDEECEERISCOVLNOTAEDF");
//! assert_eq!(decrypt_route(&sealed, 6, Route::TLR, RouteKind::Spiral).unwrap(), text);
//! ```

pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;

pub use cipher::{Mode, Route, RouteKind, Transposition};
pub use config::{CipherKind, CipherSpec, SpecParts};
pub use error::{Result, TranspositionError};
