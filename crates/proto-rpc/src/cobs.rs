// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! COBS (Consistent Overhead Byte Stuffing) framing.
//!
//! The device delimits every RPC message on the stream as
//! `0x00 | COBS(payload) | 0x00`. COBS guarantees the encoded payload holds
//! no zero bytes, so `0x00` is unambiguous as a delimiter. Encoding costs at
//! most one byte per 254 bytes of payload, plus one.

use crate::FrameError;

/// Byte used to delimit frames on the stream.
pub const FRAME_DELIMITER: u8 = 0x00;

/// Largest COBS block: code byte `0xFF` followed by 254 data bytes.
const MAX_BLOCK_CODE: u8 = 0xFF;

/// Upper bound on the encoded length of a payload of `len` bytes.
pub fn max_encoded_len(len: usize) -> usize {
    len + len / 254 + 1
}

/// COBS-encodes `data`. The result contains no zero bytes and no delimiters.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_len(data.len()));
    let mut code_idx = 0;
    let mut code: u8 = 1;
    out.push(0);

    for &byte in data {
        if byte == 0 {
            out[code_idx] = code;
            code_idx = out.len();
            out.push(0);
            code = 1;
            continue;
        }

        out.push(byte);
        code += 1;
        if code == MAX_BLOCK_CODE {
            out[code_idx] = code;
            code_idx = out.len();
            out.push(0);
            code = 1;
        }
    }

    out[code_idx] = code;
    out
}

/// Decodes a COBS block sequence (without delimiters).
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::with_capacity(encoded.len());
    let mut idx = 0;

    while idx < encoded.len() {
        let code = encoded[idx];
        if code == 0 {
            return Err(FrameError::UnexpectedZero { offset: idx });
        }

        let start = idx + 1;
        let end = idx + code as usize;
        if end > encoded.len() {
            return Err(FrameError::Truncated { offset: idx });
        }

        let block = &encoded[start..end];
        if let Some(pos) = block.iter().position(|&b| b == 0) {
            return Err(FrameError::UnexpectedZero { offset: start + pos });
        }
        out.extend_from_slice(block);

        idx = end;
        // A full block carries no implicit zero; neither does the last block.
        if code != MAX_BLOCK_CODE && idx < encoded.len() {
            out.push(0);
        }
    }

    Ok(out)
}

/// Encodes `payload` and wraps it in leading and trailing delimiters.
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let encoded = encode(payload);
    let mut out = Vec::with_capacity(encoded.len() + 2);
    out.push(FRAME_DELIMITER);
    out.extend_from_slice(&encoded);
    out.push(FRAME_DELIMITER);
    out
}

/// Incremental deframer for a delimited COBS byte stream.
///
/// Feed it whatever the socket returns with [`Deframer::push`], then drain
/// complete payloads with [`Deframer::next_frame`]. Bytes before the first
/// delimiter are discarded; empty frames (back-to-back delimiters) are
/// skipped.
#[derive(Debug)]
pub struct Deframer {
    buf: Vec<u8>,
    synced: bool,
    max_frame_size: usize,
}

impl Deframer {
    /// Creates a deframer that rejects payloads larger than `max_frame_size`.
    pub fn new(max_frame_size: usize) -> Self {
        Self {
            buf: Vec::new(),
            synced: false,
            max_frame_size,
        }
    }

    /// Appends newly received bytes.
    pub fn push(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Number of buffered bytes not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Drops buffered data and waits for the next delimiter.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.synced = false;
    }

    /// Returns the next complete decoded payload, if one is buffered.
    ///
    /// A decode error consumes the offending frame, so the caller may keep
    /// reading afterwards.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>, FrameError> {
        loop {
            if !self.synced {
                match self.buf.iter().position(|&b| b == FRAME_DELIMITER) {
                    Some(pos) => {
                        if pos > 0 {
                            tracing::debug!(discarded = pos, "skipping bytes before frame start");
                        }
                        self.buf.drain(..=pos);
                        self.synced = true;
                    }
                    None => {
                        self.buf.clear();
                        return Ok(None);
                    }
                }
            }

            match self.buf.iter().position(|&b| b == FRAME_DELIMITER) {
                Some(0) => {
                    self.buf.drain(..1);
                }
                Some(end) => {
                    let encoded: Vec<u8> = self.buf.drain(..=end).take(end).collect();
                    let payload = decode(&encoded)?;
                    if payload.len() > self.max_frame_size {
                        return Err(FrameError::TooLarge {
                            max: self.max_frame_size,
                        });
                    }
                    tracing::trace!(bytes = payload.len(), "deframed payload");
                    return Ok(Some(payload));
                }
                None => {
                    if self.buf.len() > max_encoded_len(self.max_frame_size) {
                        self.reset();
                        return Err(FrameError::TooLarge {
                            max: self.max_frame_size,
                        });
                    }
                    return Ok(None);
                }
            }
        }
    }
}
