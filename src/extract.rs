// src/extract.rs
//! Comment extraction from fetched HTML.

use scraper::Html;

/// Return every `<!-- ... -->` payload in `body`, in document order.
///
/// The whole tree is walked, so comments before `<html>` or after `</html>`
/// are included. Texts come back exactly as parsed (not trimmed). Broken
/// markup never fails: html5ever recovers, and a document with no comment
/// nodes simply yields an empty vector.
///
/// html5ever also stores `<?xml ...?>`, `<![CDATA[...]]>`, `<!DECL ...>` and
/// bogus end tags like `</3>` as comment nodes. Those are dropped: a node is
/// kept only if its text follows a literal `<!--` in the source, matched
/// left to right.
pub fn extract_comments(body: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    // Same newline normalisation the tokenizer applies before building nodes.
    let source = body.replace("\r\n", "\n").replace('\r', "\n");
    let mut cursor = 0usize;

    doc.tree
        .root()
        .descendants()
        .filter_map(|node| node.value().as_comment())
        .filter_map(|c| {
            let opener = format!("<!--{}", &**c);
            let at = source[cursor..].find(&opener)?;
            cursor += at + opener.len();
            Some(c.to_string())
        })
        .collect()
}
