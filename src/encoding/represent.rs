use crate::{
    encoding::codec::{Encoded, Nibble, is_hex},
    encoding::tables::{
        SIXTEEN_COLORS, SIXTEEN_DINGBATS, SIXTEEN_EMOJI, SIXTEEN_GRAYS, SIXTEEN_NOTES,
        SIXTEEN_SHAPES,
    },
    foundation::random::IndexSource,
};

/// Signature shared by every representation: `(display string, code units, nibbles) -> markup`.
pub type RenderFn = fn(&str, &[u16], &[Nibble]) -> String;

const MONOSPACE_STACK: &str =
    "Courier New,Courier,Nimbus Mono L, Lucida Sans Typewriter,Lucida Typewriter,monospace";
const SERIF_STACK: &str = "Times Roman, Times New Roman,serif";

/// A named, pure rendering function.
#[derive(Clone, Copy, Debug)]
pub struct Representation {
    /// Stable identifier, e.g. `"colored_boxes"`.
    pub name: &'static str,
    render: RenderFn,
}

impl Representation {
    /// Wrap a render function under `name`.
    pub const fn new(name: &'static str, render: RenderFn) -> Self {
        Self { name, render }
    }

    /// Render an already-encoded value.
    pub fn render(&self, enc: &Encoded) -> String {
        (self.render)(&enc.text, &enc.bytes, &enc.nibbles)
    }

    /// Render from raw inputs.
    pub fn render_parts(&self, text: &str, bytes: &[u16], nibbles: &[Nibble]) -> String {
        (self.render)(text, bytes, nibbles)
    }
}

/// Fixed, ordered set of representations; one is drawn uniformly per render.
#[derive(Clone, Debug)]
pub struct Registry {
    reps: Vec<Representation>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Registry {
    /// The reference set, in its canonical order.
    pub fn standard() -> Self {
        Self {
            reps: vec![
                Representation::new("plain_text", plain_text),
                Representation::new("colored_boxes", colored_boxes),
                Representation::new("gray_boxes", gray_boxes),
                Representation::new("colored_blobs", colored_blobs),
                Representation::new("gray_blobs", gray_blobs),
                Representation::new("shapes", shapes),
                Representation::new("dingbats", dingbats),
                Representation::new("emoji", emoji),
                Representation::new("musical_notes", musical_notes),
                Representation::new("sized_circles", sized_circles),
                Representation::new("sized_squares", sized_squares),
            ],
        }
    }

    /// Build a registry from a custom ordered list.
    pub fn from_representations(reps: Vec<Representation>) -> Self {
        Self { reps }
    }

    /// Number of representations.
    pub fn len(&self) -> usize {
        self.reps.len()
    }

    /// Whether the registry has no representations.
    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }

    /// Look up by position.
    pub fn get(&self, index: usize) -> Option<&Representation> {
        self.reps.get(index)
    }

    /// Representation names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reps.iter().map(|r| r.name)
    }

    /// Uniformly random index in `[0, len)`.
    pub fn pick(&self, rng: &mut dyn IndexSource) -> usize {
        rng.pick(self.reps.len())
    }

    /// Render with the representation at `index`, if it exists.
    pub fn render(&self, index: usize, enc: &Encoded) -> Option<String> {
        self.get(index).map(|r| r.render(enc))
    }

    /// Draw a representation and render `enc` with it. An empty registry falls back to escaped
    /// plain text.
    pub fn render_random(&self, enc: &Encoded, rng: &mut dyn IndexSource) -> String {
        let index = self.pick(rng);
        match self.get(index) {
            Some(rep) => {
                tracing::trace!(representation = rep.name, "render value");
                rep.render(enc)
            }
            None => escape_html(&enc.text),
        }
    }
}

/// Escape the characters that are significant inside HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn plain_text(text: &str, _bytes: &[u16], _nibbles: &[Nibble]) -> String {
    let family = if is_hex(text) {
        MONOSPACE_STACK
    } else {
        SERIF_STACK
    };
    format!(
        r#"<span style="font-family: {family};">{}</span>"#,
        escape_html(text)
    )
}

fn map_nibbles(nibbles: &[Nibble], f: impl Fn(Nibble) -> String) -> String {
    nibbles.iter().copied().map(f).collect()
}

fn background_glyphs(nibbles: &[Nibble], table: &[&str; 16]) -> String {
    map_nibbles(nibbles, |v| {
        format!(
            r#"<span style="background-color: {};">&#x2001;</span>"#,
            table[v.index()]
        )
    })
}

fn colored_glyphs(nibbles: &[Nibble], table: &[&str; 16]) -> String {
    map_nibbles(nibbles, |v| {
        format!(
            r#"<span style="color: {};">&#x2B24;</span>"#,
            table[v.index()]
        )
    })
}

fn table_glyphs(nibbles: &[Nibble], table: &[&str; 16]) -> String {
    map_nibbles(nibbles, |v| table[v.index()].to_string())
}

fn sized_glyphs(nibbles: &[Nibble], base_pt: u8, glyph: &str) -> String {
    let inner = map_nibbles(nibbles, |v| {
        format!(
            r#"<span style="font-size: {}pt;">{glyph}</span>"#,
            u16::from(v.value()) + u16::from(base_pt)
        )
    });
    format!(r#"<span class="valign-content">{inner}</span>"#)
}

fn colored_boxes(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    background_glyphs(nibbles, &SIXTEEN_COLORS)
}

fn gray_boxes(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    background_glyphs(nibbles, &SIXTEEN_GRAYS)
}

fn colored_blobs(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    colored_glyphs(nibbles, &SIXTEEN_COLORS)
}

fn gray_blobs(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    colored_glyphs(nibbles, &SIXTEEN_GRAYS)
}

fn shapes(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    table_glyphs(nibbles, &SIXTEEN_SHAPES)
}

// Fleurons are missing from many default font sets.
fn dingbats(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    table_glyphs(nibbles, &SIXTEEN_DINGBATS)
}

fn emoji(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    table_glyphs(nibbles, &SIXTEEN_EMOJI)
}

fn musical_notes(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    table_glyphs(nibbles, &SIXTEEN_NOTES)
}

fn sized_circles(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    sized_glyphs(nibbles, 1, "&xcirc;")
}

fn sized_squares(_text: &str, _bytes: &[u16], nibbles: &[Nibble]) -> String {
    sized_glyphs(nibbles, 4, "&#x25A1;")
}

#[cfg(test)]
#[path = "../../tests/unit/encoding/represent.rs"]
mod tests;
