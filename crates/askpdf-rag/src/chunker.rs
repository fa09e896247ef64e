//! Character-window chunking with overlap

use askpdf_core::ChunkParams;

/// Split text into overlapping character windows
///
/// The trailing `chunk_overlap` characters of one window reappear at the
/// start of the next so context is not lost at boundaries. The window step
/// is clamped to at least one character; the config is permissive and an
/// overlap at or above the chunk size must not stall ingestion.
pub fn chunk_text(content: &str, params: ChunkParams) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let size = params.chunk_size.max(1);
    let step = size.saturating_sub(params.chunk_overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());

        if end >= chars.len() {
            break;
        }
        start += step;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: usize, overlap: usize) -> ChunkParams {
        ChunkParams {
            chunk_size: size,
            chunk_overlap: overlap,
        }
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = chunk_text("hello", params(256, 15));
        assert_eq!(chunks, vec!["hello".to_string()]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", params(256, 15)).is_empty());
    }

    #[test]
    fn windows_overlap_by_the_configured_amount() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = chunk_text(text, params(10, 3));

        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 3).collect();
            assert!(pair[1].starts_with(&tail));
        }
        // every character survives chunking
        let rejoined: String = chunks
            .iter()
            .enumerate()
            .map(|(i, c)| if i == 0 { c.clone() } else { c.chars().skip(3).collect() })
            .collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn oversized_overlap_still_terminates() {
        let chunks = chunk_text("abcdef", params(3, 10));
        assert!(!chunks.is_empty());
        assert_eq!(chunks[0], "abc");
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let chunks = chunk_text("héllo wörld écho", params(5, 1));
        assert!(chunks.iter().all(|c| c.chars().count() <= 5));
    }
}
