//! The inter-rank wire format: a flat encoding of a sequence of
//! [`SearchResult`]s, grounded in `original_source`'s
//! `Result::serialize`/`deserialize` (`MPIEngine.h`). The record count is
//! carried out-of-band (by the transport's own length-then-payload gather,
//! §4.12) rather than embedded in the stream, so a payload is just
//! `record+` — each record decoded until the buffer is exhausted.
//!
//! Per result: `order:u64_le` (combination length) · `indices:u32_le[order]`
//! · `score:f32_le`.

use crate::result::SearchResult;

/// Appends the wire encoding of one result to `out`.
pub fn encode_result(result: &SearchResult, out: &mut Vec<u8>) {
    out.extend_from_slice(&(result.combination.len() as u64).to_le_bytes());
    for &idx in &result.combination {
        out.extend_from_slice(&(idx as u32).to_le_bytes());
    }
    out.extend_from_slice(&result.score.to_le_bytes());
}

/// Encodes a full slice of results as each result's encoding back to back,
/// with no count prefix — the payload one rank sends to the root.
pub fn encode_results(results: &[SearchResult]) -> Vec<u8> {
    let mut out = Vec::new();
    for r in results {
        encode_result(r, &mut out);
    }
    out
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated wire payload: needed {needed} more bytes, had {available}")]
    Truncated { needed: usize, available: usize },
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() - self.pos < n {
            return Err(DecodeError::Truncated {
                needed: n,
                available: self.buf.len() - self.pos,
            });
        }
        let s = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    fn take_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.take(8)?.try_into().unwrap()))
    }

    fn take_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn take_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }
}

fn decode_one(cur: &mut Cursor) -> Result<SearchResult, DecodeError> {
    let order = cur.take_u64()? as usize;
    let mut combination = Vec::with_capacity(order);
    for _ in 0..order {
        combination.push(cur.take_u32()? as usize);
    }
    let score = cur.take_f32()?;
    Ok(SearchResult::new(combination, score))
}

/// Decodes a buffer produced by [`encode_results`]: one record after
/// another until the buffer is exhausted.
pub fn decode_results(buf: &[u8]) -> Result<Vec<SearchResult>, DecodeError> {
    let mut cur = Cursor { buf, pos: 0 };
    let mut out = Vec::new();
    while cur.pos < cur.buf.len() {
        out.push(decode_one(&mut cur)?);
    }
    Ok(out)
}
