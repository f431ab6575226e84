//! Single byte-range parsing (RFC 7233, `bytes` unit only)

/// Inclusive byte range already clamped to the file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of looking at a `Range` header
#[derive(Debug, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Serve this slice with 206
    Partial(ByteRange),
    /// Answer 416
    NotSatisfiable,
    /// Absent, multi-range or malformed: serve the whole body
    Full,
}

/// Parse `bytes=start-end`, `bytes=start-` or `bytes=-suffix`
pub fn parse_range_header(header: Option<&str>, file_size: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };
    if spec.contains(',') {
        return RangeOutcome::Full;
    }
    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        let Ok(suffix) = end_str.parse::<usize>() else {
            return RangeOutcome::Full;
        };
        if suffix == 0 || file_size == 0 {
            return RangeOutcome::NotSatisfiable;
        }
        return RangeOutcome::Partial(ByteRange {
            start: file_size.saturating_sub(suffix),
            end: file_size - 1,
        });
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= file_size {
        return RangeOutcome::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        file_size - 1
    } else {
        match end_str.parse::<usize>() {
            Ok(end) => end.min(file_size - 1),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if start > end {
        return RangeOutcome::NotSatisfiable;
    }

    RangeOutcome::Partial(ByteRange { start, end })
}
