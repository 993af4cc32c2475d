//! Token-level text comparison using Myers' alignment

use regex::Regex;
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::str::FromStr;
use std::sync::OnceLock;

/// Granularity of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    #[default]
    Lines,
    Words,
    Chars,
}

impl FromStr for DiffMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(DiffMode::Lines),
            "words" | "word" => Ok(DiffMode::Words),
            "chars" | "char" | "characters" => Ok(DiffMode::Chars),
            _ => Err(format!(
                "Invalid diff mode: '{}'. Valid modes are: lines, words, chars",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Equal,
    Added,
    Removed,
}

/// A run of consecutive tokens sharing the same kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk {
    pub kind: ChunkKind,
    pub text: String,
    /// Number of tokens merged into this chunk
    pub tokens: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_chunks(chunks: &[DiffChunk]) -> Self {
        let mut stats = DiffStats::default();
        for chunk in chunks {
            match chunk.kind {
                ChunkKind::Equal => stats.unchanged += chunk.tokens,
                ChunkKind::Added => stats.added += chunk.tokens,
                ChunkKind::Removed => stats.removed += chunk.tokens,
            }
        }
        stats
    }

    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+|\S+").unwrap())
}

/// Split text into tokens. Concatenating the tokens yields the input.
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<&str> {
    match mode {
        DiffMode::Lines => text.split_inclusive('\n').collect(),
        DiffMode::Words => word_regex().find_iter(text).map(|m| m.as_str()).collect(),
        DiffMode::Chars => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}

/// Compare two texts and return merged chunks in document order. Within a
/// changed region removals come before additions.
pub fn diff(old: &str, new: &str, mode: DiffMode) -> Vec<DiffChunk> {
    let old_tokens = tokenize(old, mode);
    let new_tokens = tokenize(new, mode);

    let prefix = old_tokens
        .iter()
        .zip(&new_tokens)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_tokens[prefix..]
        .iter()
        .rev()
        .zip(new_tokens[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_mid = &old_tokens[prefix..old_tokens.len() - suffix];
    let new_mid = &new_tokens[prefix..new_tokens.len() - suffix];

    let mut builder = ChunkBuilder::default();
    for token in &old_tokens[..prefix] {
        builder.push(ChunkKind::Equal, token);
    }
    align(old_mid, new_mid, &mut builder);
    for token in &old_tokens[old_tokens.len() - suffix..] {
        builder.push(ChunkKind::Equal, token);
    }

    builder.chunks
}

// Myers runs in linear memory, so input size is bounded only by time.
fn align(old: &[&str], new: &[&str], builder: &mut ChunkBuilder) {
    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for token in &old[old_range] {
                    builder.push(ChunkKind::Equal, token);
                }
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                for token in &old[old_range] {
                    builder.push(ChunkKind::Removed, token);
                }
                for token in &new[new_range] {
                    builder.push(ChunkKind::Added, token);
                }
            }
        }
    }
}

#[derive(Default)]
struct ChunkBuilder {
    chunks: Vec<DiffChunk>,
}

impl ChunkBuilder {
    fn push(&mut self, kind: ChunkKind, token: &str) {
        match self.chunks.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push_str(token);
                last.tokens += 1;
            }
            _ => self.chunks.push(DiffChunk {
                kind,
                text: token.to_string(),
                tokens: 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(chunks: &[DiffChunk]) -> Vec<(ChunkKind, &str)> {
        chunks.iter().map(|c| (c.kind, c.text.as_str())).collect()
    }

    #[test]
    fn test_tokenize_round_trips() {
        let text = "héllo  world\nsecond line\n";
        for mode in [DiffMode::Lines, DiffMode::Words, DiffMode::Chars] {
            assert_eq!(tokenize(text, mode).concat(), text);
        }
    }

    #[test]
    fn test_identical_inputs() {
        let chunks = diff("a\nb\n", "a\nb\n", DiffMode::Lines);
        assert_eq!(kinds(&chunks), vec![(ChunkKind::Equal, "a\nb\n")]);
        assert!(DiffStats::from_chunks(&chunks).is_identical());
    }

    #[test]
    fn test_line_change() {
        let chunks = diff("a\nb\nc\n", "a\nx\nc\n", DiffMode::Lines);
        assert_eq!(
            kinds(&chunks),
            vec![
                (ChunkKind::Equal, "a\n"),
                (ChunkKind::Removed, "b\n"),
                (ChunkKind::Added, "x\n"),
                (ChunkKind::Equal, "c\n"),
            ]
        );
        let stats = DiffStats::from_chunks(&chunks);
        assert_eq!((stats.added, stats.removed, stats.unchanged), (1, 1, 2));
    }

    #[test]
    fn test_word_insertion() {
        let chunks = diff("the cat sat", "the black cat sat", DiffMode::Words);
        assert_eq!(
            kinds(&chunks),
            vec![
                (ChunkKind::Equal, "the "),
                (ChunkKind::Added, "black "),
                (ChunkKind::Equal, "cat sat"),
            ]
        );
    }

    #[test]
    fn test_char_mode_against_empty() {
        let chunks = diff("", "ab", DiffMode::Chars);
        assert_eq!(kinds(&chunks), vec![(ChunkKind::Added, "ab")]);
        let chunks = diff("ab", "", DiffMode::Chars);
        assert_eq!(kinds(&chunks), vec![(ChunkKind::Removed, "ab")]);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("WORDS".parse::<DiffMode>().unwrap(), DiffMode::Words);
        assert!("bytes".parse::<DiffMode>().is_err());
    }

    #[test]
    fn test_large_inputs_with_disjoint_middles() {
        let shared: String = (0..200).map(|i| format!("shared {}\n", i)).collect();
        let old: String = (0..5001).map(|i| format!("old {}\n", i)).collect();
        let new: String = (0..5001).map(|i| format!("new {}\n", i)).collect();
        let old = format!("{}{}{}", shared, old, shared);
        let new = format!("{}{}{}", shared, new, shared);

        let chunks = diff(&old, &new, DiffMode::Lines);
        let stats = DiffStats::from_chunks(&chunks);
        assert_eq!((stats.added, stats.removed, stats.unchanged), (5001, 5001, 400));

        let rebuilt: String = chunks
            .iter()
            .filter(|c| c.kind != ChunkKind::Added)
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(rebuilt, old);
    }

    #[test]
    fn test_interleaved_edits_rebuild_both_sides() {
        let old = "a\nb\nc\nd\ne\nf\n";
        let new = "a\nc\nd\nx\nf\ny\n";
        let chunks = diff(old, new, DiffMode::Lines);
        let side = |skip: ChunkKind| -> String {
            chunks
                .iter()
                .filter(|c| c.kind != skip)
                .map(|c| c.text.as_str())
                .collect()
        };
        assert_eq!(side(ChunkKind::Added), old);
        assert_eq!(side(ChunkKind::Removed), new);
        let stats = DiffStats::from_chunks(&chunks);
        assert_eq!(stats.unchanged, 4);
    }
}
