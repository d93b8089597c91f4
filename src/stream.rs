use crate::error::TruncatedField;
use crate::{CborError, ErrorCode};

/// Forward-only cursor over the immutable input slice.
#[derive(Clone, Copy)]
pub struct CborStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CborStream<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume one byte. Callers check [`Self::is_at_end`] first; at the end this yields `None`
    /// and leaves the cursor in place.
    pub fn next_u8(&mut self) -> Option<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip `n` bytes already inspected with [`Self::peek_u8`]; clamps at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Consume exactly `n` bytes, reporting `field` at `err_off` when fewer remain.
    pub fn read_exact(
        &mut self,
        n: usize,
        field: TruncatedField,
        err_off: usize,
    ) -> Result<&'a [u8], CborError> {
        let available = self.remaining();
        if n > available {
            return Err(CborError::new(
                ErrorCode::InsufficientLength {
                    field,
                    needed: n as u64,
                    available,
                },
                err_off,
            ));
        }
        let s = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    /// Read an `N`-byte big-endian length argument.
    pub fn read_be_arg<const N: usize>(&mut self, err_off: usize) -> Result<u64, CborError> {
        let s = self.read_exact(N, TruncatedField::Length, err_off)?;
        Ok(s.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
    }
}
