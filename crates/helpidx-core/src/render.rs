//! HTML renderer for a finished [`ConceptIndex`].
//!
//! The document is written in a single pass:
//!
//! ```text
//! <HTML> header, title, heading
//! for each primary key (sorted):
//!     on a new leading letter: anchor + jump bar
//!     primary row
//!     unkeyed links as indented rows
//!     per secondary key: sub-header row carrying the first link, then indented rows
//! footer
//! ```
//!
//! All text and attribute values are HTML-escaped.

use crate::index::{Bucket, Link};
use crate::{ConceptIndex, Error, Result};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

/// Fixed strings and styling of the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Heading shown at the top of the page.
    pub title: String,
    /// Contents of the `<TITLE>` element.
    pub document_title: String,
    /// Prefix that leads from the index page back to the document root.
    pub link_prefix: String,
    /// File name of the index page itself, used by the jump bar links.
    pub self_href: String,
    /// Color of secondary-key labels and the current jump-bar letter.
    pub highlight_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "PETSc Help Index".to_string(),
            document_title: "Concepts_File".to_string(),
            link_prefix: "../../".to_string(),
            self_href: "help.html".to_string(),
            highlight_color: "#CC3333".to_string(),
        }
    }
}

/// Writes a [`ConceptIndex`] as a navigable HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with the given page settings.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Page settings in use.
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `index` into `out`.
    ///
    /// The only possible failure is the sink itself refusing a write.
    pub fn render<W: Write>(&self, index: &ConceptIndex, mut out: W) -> Result<()> {
        let sections = index.sections();
        let alphabet = index.alphabet();

        self.write_header(&mut out)?;

        let mut current_letter: Option<&str> = None;
        for section in &sections {
            if current_letter != Some(section.letter.as_str()) {
                current_letter = Some(section.letter.as_str());
                self.write_jump_bar(&mut out, &section.letter, &alphabet)?;
            }

            writeln!(
                out,
                "<TABLE><TR><TD WIDTH=4><BR></TD><TD WIDTH=1000><B><FONT SIZE=4>{}</FONT></B></TD></TR></TABLE>",
                encode_text(section.key)
            )?;

            for bucket in &section.buckets {
                self.write_bucket(&mut out, bucket)?;
            }
        }

        writeln!(out, "</BODY>\n</HTML>")?;
        out.flush()?;

        debug!(
            sections = sections.len(),
            letters = alphabet.len(),
            entries = index.len(),
            "rendered help index"
        );
        Ok(())
    }

    /// Render `index` into an owned string.
    pub fn render_to_string(&self, index: &ConceptIndex) -> Result<String> {
        let mut buf = Vec::new();
        self.render(index, &mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Render(format!("invalid UTF-8 output: {e}")))
    }

    fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "<HTML>\n<HEAD><TITLE>{}</TITLE></HEAD>\n<BODY>\n<H1><CENTER>{}</CENTER></H1>",
            encode_text(&self.options.document_title),
            encode_text(&self.options.title)
        )?;
        Ok(())
    }

    fn write_jump_bar<W: Write>(&self, out: &mut W, current: &str, alphabet: &[String]) -> Result<()> {
        write!(
            out,
            "<A NAME=\"{}\"></A>\n<H3> <CENTER> | ",
            encode_double_quoted_attribute(current)
        )?;
        for letter in alphabet {
            if letter.as_str() == current {
                writeln!(
                    out,
                    "<FONT COLOR=\"{}\">{}</FONT> | ",
                    encode_double_quoted_attribute(&self.options.highlight_color),
                    encode_text(letter)
                )?;
            } else {
                let href = format!("{}#{}", self.options.self_href, letter);
                writeln!(
                    out,
                    "<A HREF=\"{}\"> {} </A> | ",
                    encode_double_quoted_attribute(&href),
                    encode_text(letter)
                )?;
            }
        }
        writeln!(out, "</CENTER></H3>")?;
        Ok(())
    }

    fn write_bucket<W: Write>(&self, out: &mut W, bucket: &Bucket<'_>) -> Result<()> {
        let rest = match bucket.key.name() {
            None => bucket.links.as_slice(),
            Some(name) => {
                let Some((first, rest)) = bucket.links.split_first() else {
                    return Ok(());
                };
                writeln!(
                    out,
                    "<TABLE><TR><TD WIDTH=60><BR></TD><TD WIDTH=210><FONT COLOR=\"{}\"><B>{}</B></FONT></TD><TD WIDTH=300>{}</TD></TR></TABLE>",
                    encode_double_quoted_attribute(&self.options.highlight_color),
                    encode_text(name),
                    self.anchor(first)
                )?;
                rest
            },
        };

        for link in rest {
            writeln!(
                out,
                "<TABLE><TR><TD WIDTH=270><BR></TD><TD WIDTH=300>{}</TD></TR></TABLE>",
                self.anchor(link)
            )?;
        }
        Ok(())
    }

    fn anchor(&self, link: &Link<'_>) -> String {
        let href = format!("{}{}", self.options.link_prefix, link.path);
        format!(
            "<A HREF=\"{}\">{}</A>",
            encode_double_quoted_attribute(&href),
            encode_text(link.label)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::parse_record;

    fn index_from(lines: &[&str]) -> ConceptIndex {
        let mut index = ConceptIndex::new();
        for line in lines {
            for assoc in parse_record(line) {
                index.insert(assoc);
            }
        }
        index
    }

    fn render(lines: &[&str]) -> String {
        HtmlRenderer::default()
            .render_to_string(&index_from(lines))
            .unwrap()
    }

    #[test]
    fn test_empty_index_renders_shell() {
        let html = render(&[]);
        assert_eq!(
            html,
            "<HTML>\n<HEAD><TITLE>Concepts_File</TITLE></HEAD>\n<BODY>\n<H1><CENTER>PETSc Help Index</CENTER></H1>\n</BODY>\n</HTML>\n"
        );
    }

    #[test]
    fn test_sections_and_buckets() {
        let html = render(&["ex1 Alpha;Beta^Gamma;Beta^Delta"]);

        assert!(html.contains("<FONT SIZE=4>Alpha</FONT>"));
        assert!(html.contains("<FONT SIZE=4>Beta</FONT>"));
        assert!(html.contains(
            "<TD WIDTH=270><BR></TD><TD WIDTH=300><A HREF=\"../../ex1\">ex1</A></TD>"
        ));
        assert!(html.contains("<B>Gamma</B></FONT></TD><TD WIDTH=300><A HREF=\"../../ex1\">ex1</A>"));
        assert!(html.contains("<B>Delta</B></FONT></TD><TD WIDTH=300><A HREF=\"../../ex1\">ex1</A>"));

        let delta = html.find("<B>Delta</B>").unwrap();
        let gamma = html.find("<B>Gamma</B>").unwrap();
        assert!(delta < gamma);
    }

    #[test]
    fn test_first_link_uses_its_own_path() {
        let html = render(&[
            "man/Zeta.html Solvers^Krylov",
            "man/Alpha.html Solvers^Krylov",
            "src/last.c Other",
        ]);

        assert!(html.contains(
            "<B>Krylov</B></FONT></TD><TD WIDTH=300><A HREF=\"../../man/Alpha.html\">Alpha</A>"
        ));
        assert!(html.contains(
            "<TD WIDTH=270><BR></TD><TD WIDTH=300><A HREF=\"../../man/Zeta.html\">Zeta</A>"
        ));
    }

    #[test]
    fn test_jump_bar_per_letter() {
        let html = render(&["a.c apple;avocado;banana;Cherry"]);

        assert_eq!(html.matches("<A NAME=").count(), 3);
        assert!(html.contains("<A NAME=\"A\"></A>"));
        assert!(html.contains("<A NAME=\"C\"></A>"));

        let c_bar = &html[html.find("<A NAME=\"C\"></A>").unwrap()..];
        assert!(c_bar.starts_with(
            "<A NAME=\"C\"></A>\n<H3> <CENTER> | <A HREF=\"help.html#A\"> A </A> | \n<A HREF=\"help.html#B\"> B </A> | \n<FONT COLOR=\"#CC3333\">C</FONT> | \n</CENTER></H3>\n"
        ));
    }

    #[test]
    fn test_one_anchor_per_folded_letter() {
        let html = render(&["a \u{212A}a;kb;\u{212A}c"]);

        assert_eq!(html.matches("<A NAME=").count(), 1);
        assert!(html.contains("<A NAME=\"K\"></A>"));
        assert!(!html.contains("<A NAME=\"\u{212A}\">"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(&["a&b.c Less<More^x\"y"]);
        assert!(html.contains("Less&lt;More"));
        assert!(html.contains("HREF=\"../../a&amp;b.c\""));
        assert!(html.contains("<B>x\"y</B>"));
    }

    #[test]
    fn test_custom_options() {
        let options = RenderOptions {
            title: "Index".into(),
            link_prefix: "/docs/".into(),
            self_href: "concepts.html".into(),
            ..RenderOptions::default()
        };
        let html = HtmlRenderer::new(options)
            .render_to_string(&index_from(&["x.c Alpha;Beta"]))
            .unwrap();

        assert!(html.contains("<H1><CENTER>Index</CENTER></H1>"));
        assert!(html.contains("HREF=\"/docs/x.c\""));
        assert!(html.contains("HREF=\"concepts.html#B\""));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let lines = ["ex1 b;B;a^x;A^X", "ex2 b^y;a"];
        assert_eq!(render(&lines), render(&lines));
    }
}
