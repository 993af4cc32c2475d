//! Cheatsheet collection and its Markdown representation

use crate::error::{Result, ToolbeltError};
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic name → free-form content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cheatsheets {
    sheets: BTreeMap<String, String>,
}

impl Cheatsheets {
    pub fn topics(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sheets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn get(&self, topic: &str) -> Option<&str> {
        self.sheets.get(topic).map(|s| s.as_str())
    }

    /// Insert or overwrite a topic. Returns true when it replaced one.
    pub fn upsert(&mut self, topic: &str, content: &str) -> Result<bool> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ToolbeltError::InvalidInput(
                "cheatsheet topic cannot be empty".to_string(),
            ));
        }
        Ok(self
            .sheets
            .insert(topic.to_string(), content.trim().to_string())
            .is_some())
    }

    pub fn remove(&mut self, topic: &str) -> Result<String> {
        self.sheets
            .remove(topic.trim())
            .ok_or_else(|| ToolbeltError::NotFound(format!("cheatsheet '{}'", topic.trim())))
    }

    /// Case-insensitive substring match on topic or content
    pub fn search(&self, term: &str) -> Vec<(&str, &str)> {
        let needle = term.to_lowercase();
        self.topics()
            .filter(|(topic, content)| {
                topic.to_lowercase().contains(&needle) || content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Render as Markdown: a `#` title, then one `##` heading per topic with
    /// the content kept verbatim inside a fenced block.
    pub fn to_markdown(&self) -> String {
        let mut output = String::from("# Cheatsheets\n");
        for (topic, content) in self.topics() {
            let fence = "`".repeat(longest_backtick_run(content).max(2) + 1);
            output.push_str(&format!(
                "\n## {}\n\n{}\n{}\n{}\n",
                escape_heading(topic),
                fence,
                content,
                fence
            ));
        }
        output
    }

    /// Parse Markdown into topics. Topics are the headings at the shallowest
    /// level, or the next level down when the document opens with a single
    /// `#` title. Deeper headings belong to the topic content. Content is the
    /// source text up to the next topic, unwrapped when it is exactly one
    /// fenced code block.
    pub fn from_markdown(markdown: &str) -> Cheatsheets {
        let headings = headings(markdown);
        let mut sheets = BTreeMap::new();
        let Some(topic_level) = topic_level(&headings) else {
            return Cheatsheets { sheets };
        };

        for (i, heading) in headings.iter().enumerate() {
            if heading.level != topic_level || heading.title.trim().is_empty() {
                continue;
            }
            let end = headings[i + 1..]
                .iter()
                .find(|h| h.level <= topic_level)
                .map(|h| h.start)
                .unwrap_or(markdown.len());
            let body = markdown[heading.end..end].trim();
            sheets.insert(heading.title.trim().to_string(), unwrap_fence(body));
        }
        Cheatsheets { sheets }
    }
}

struct Heading {
    level: usize,
    title: String,
    /// Byte range of the heading line in the source
    start: usize,
    end: usize,
}

fn headings(markdown: &str) -> Vec<Heading> {
    let mut headings: Vec<Heading> = Vec::new();
    let mut in_heading = false;

    for (event, range) in MdParser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                headings.push(Heading {
                    level: level as usize,
                    title: String::new(),
                    start: range.start,
                    end: range.end,
                });
            }
            Event::End(TagEnd::Heading(_)) => in_heading = false,
            Event::Text(text) | Event::Code(text) | Event::InlineHtml(text) | Event::Html(text)
                if in_heading =>
            {
                if let Some(heading) = headings.last_mut() {
                    heading.title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headings
}

fn topic_level(headings: &[Heading]) -> Option<usize> {
    let first = headings.first()?;

    let shallowest = headings.iter().map(|h| h.level).min()?;
    let at_shallowest = headings.iter().filter(|h| h.level == shallowest).count();

    if shallowest == 1 && at_shallowest == 1 && first.level == 1 {
        let below = headings
            .iter()
            .map(|h| h.level)
            .filter(|&level| level > shallowest)
            .min();
        return Some(below.unwrap_or(shallowest));
    }
    Some(shallowest)
}

/// Literal text of `body` when it is a single fenced code block, otherwise
/// `body` unchanged
fn unwrap_fence(body: &str) -> String {
    let mut events = MdParser::new(body).into_offset_iter();
    match events.next() {
        Some((Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))), range))
            if range == (0..body.len()) => {}
        _ => return body.to_string(),
    }

    let mut literal = String::new();
    for (event, _) in events {
        match event {
            Event::Text(text) => literal.push_str(&text),
            Event::End(TagEnd::CodeBlock) => break,
            _ => {}
        }
    }
    literal.strip_suffix('\n').unwrap_or(&literal).to_string()
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

/// Backslash-escape punctuation so the topic reads back as plain text
fn escape_heading(topic: &str) -> String {
    let mut escaped = String::with_capacity(topic.len());
    for c in topic.chars() {
        if c.is_ascii_punctuation() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
