//! Visible text extraction: body text and paragraphs.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::html::element_text;
use crate::utils::parse_selector_unsafe;

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "BODY_SELECTOR"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("p", "PARAGRAPH_SELECTOR"));

/// Elements whose text content is never rendered.
const NON_VISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts the body's text nodes, trimmed and joined with single spaces.
///
/// Text inside `<script>`, `<style>`, `<noscript>` and `<template>` is skipped.
pub fn extract_body_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| NON_VISIBLE_TAGS.contains(&el.name()))
        });
        let trimmed = text.trim();
        if !hidden && !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    parts.join(" ")
}

/// Extracts the text of every `<p>` and its word count.
pub fn extract_paragraphs(document: &Html) -> (Vec<String>, Vec<usize>) {
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|element| {
            let text = element_text(&element);
            let words = text.split_whitespace().count();
            (text, words)
        })
        .unzip()
}
