#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// Functionality map, per IEEE Std 1363.1 section numbers where applicable:
//
// §4.1 SVES codec (from_sves/to_sves)          --> sves.rs
// §4.1 mod-q and 2-bit encodings (to_arr/...)  --> byte_fns.rs
// IGF (seeded index stream)                    --> igf.rs
// MGF (seeded pseudo-random polynomial)         --> mgf.rs
// §4.2 ternary sampler, §4.3 blinding poly      --> sampler.rs
// §3 polynomial ring arithmetic and inversion   --> poly.rs
// §3 Params, named EESS#1 presets, max_msg_len  --> params.rs
// §3 data model (IntPoly/TernPoly/PrivPoly/...) --> types.rs
// §7 error kinds                                --> error.rs
// random source contract                        --> rand.rs
// §4.4 seed assembly, repetition weight check   --> seed.rs
// §4.4 key generation                           --> keygen.rs
// §4.5 encrypt                                  --> encrypt.rs
// §4.6 decrypt                                  --> decrypt.rs
//
// All functionality is covered by traits, such that consumers can utilize
// trait objects as desired.

mod byte_fns;
mod igf;
mod mgf;
mod poly;
mod sampler;
mod seed;
mod sves;

/// Error kinds surfaced by key generation, encryption, and decryption (IEEE 1363.1 §7).
pub mod error;

/// Key generation (IEEE 1363.1 §4.4).
pub mod keygen;

/// Encryption (IEEE 1363.1 §4.5).
pub mod encrypt;

/// Decryption (IEEE 1363.1 §4.6).
pub mod decrypt;

/// Parameter sets, named presets, and derived sizes (IEEE 1363.1 §3, §4.7, §6).
pub mod params;

/// The random-source contract encryption and key generation draw from.
pub mod rand;

/// Data types: dense and sparse polynomials, keys, and key pairs (IEEE 1363.1 §3).
pub mod types;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;
