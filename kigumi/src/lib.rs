//! # kigumi
//!
//! Core trait for the decoding pipeline shared by the kigumi crates.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! PEM text → PemBlock → Vec<u8> → encoded TLV element → Node tree → PrivateKey
//! ```
//!
//! Each step that converts one representation into the next implements the
//! [`decoder::Decoder`] trait, so the whole pipeline reads as a chain of
//! `decode()` calls. There is deliberately no encoder counterpart: the
//! toolkit reads ASN.1, it never writes it.

#![forbid(unsafe_code)]

pub mod decoder;
