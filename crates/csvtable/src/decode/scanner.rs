//! Record splitting: raw CSV text to non-blank records.
//!
//! Quote characters are kept verbatim in each record; only the in-quotes state is tracked so that
//! line terminators inside a quoted field stay part of the record. Unescaping happens per field in
//! [`crate::decode::parser`].

/// Position of the terminator ending the first record of `s` and where the next record starts.
#[inline]
#[cfg(feature = "perf_memchr")]
fn find_record_end(s: &str) -> Option<(usize, usize)> {
    let b = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0usize;
    while i < b.len() {
        if in_quotes {
            let idx = i + memchr::memchr(b'"', &b[i..])?;
            if b.get(idx + 1) == Some(&b'"') {
                i = idx + 2;
            } else {
                in_quotes = false;
                i = idx + 1;
            }
            continue;
        }
        let idx = i + memchr::memchr3(b'"', b'\n', b'\r', &b[i..])?;
        match b[idx] {
            b'"' => {
                in_quotes = true;
                i = idx + 1;
            }
            b'\n' => return Some((idx, idx + 1)),
            b'\r' => {
                if b.get(idx + 1) != Some(&b'\n') {
                    return Some((idx, idx + 1));
                }
                i = idx + 1;
            }
            _ => unreachable!(),
        }
    }
    None
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_record_end(s: &str) -> Option<(usize, usize)> {
    find_record_end_bytewise(s)
}

/// Byte-at-a-time record end search; the reference the memchr variant must agree with.
#[inline]
#[cfg(any(not(feature = "perf_memchr"), test))]
fn find_record_end_bytewise(s: &str) -> Option<(usize, usize)> {
    let b = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0usize;
    while i < b.len() {
        match b[i] {
            b'"' => {
                if in_quotes && b.get(i + 1) == Some(&b'"') {
                    // escaped quote, kept as-is
                    i += 1;
                } else {
                    in_quotes = !in_quotes;
                }
            }
            b'\n' if !in_quotes => return Some((i, i + 1)),
            b'\r' if !in_quotes && b.get(i + 1) != Some(&b'\n') => return Some((i, i + 1)),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Split `source` into records, dropping blank and whitespace-only ones.
pub fn records(source: &str) -> Vec<&str> {
    iter(source).collect()
}

pub struct RecordIter<'a> {
    rest: &'a str,
}

pub fn iter(source: &str) -> RecordIter<'_> {
    RecordIter { rest: source }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let record = match find_record_end(self.rest) {
                Some((end, next)) => {
                    let record = &self.rest[..end];
                    self.rest = &self.rest[next..];
                    record
                }
                None => core::mem::take(&mut self.rest),
            };
            if !record.trim().is_empty() {
                return Some(record);
            }
        }
        None
    }
}
