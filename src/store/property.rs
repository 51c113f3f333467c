use std::collections::BTreeMap;
use std::fmt;

use crate::{
    encoding::codec::Encoded,
    encoding::represent::{Registry, escape_html},
    foundation::error::{RevealError, RevealResult},
    foundation::random::IndexSource,
};

/// A fact value: free text (optionally `0x`-prefixed hex) or a JSON number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text value; hex blobs carry a `0x` prefix.
    Text(String),
    /// Numeric value, displayed the way a browser stringifies it (`100.0` shows as `100`).
    Number(serde_json::Number),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => f.write_str(&js_number(x)),
                _ => write!(f, "{n}"),
            },
        }
    }
}

/// Shortest round-trip rendering of `x` with ECMAScript `Number::toString` layout: plain
/// digits for decimal exponents in `-6..21`, `d.ddde+n` outside that range.
fn js_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return if x.is_nan() {
            "NaN".to_string()
        } else if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // `{:e}` yields the shortest digits as `d.ddde<exp>`.
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{lead}{rest}e{sign}{}", (n - 1).abs())
    };

    if x < 0.0 { format!("-{body}") } else { body }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for PropertyValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// One rendered fact: a name plus the markup chosen for its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    /// Fact name as stored.
    pub name: String,
    /// Markup of the value produced by one representation.
    pub value_markup: String,
}

impl Fact {
    /// Full row content: title paragraph followed by the value paragraph.
    pub fn to_markup(&self) -> String {
        format!(
            r#"{}<p class="fact-value">{}</p>"#,
            describe(&self.name),
            self.value_markup
        )
    }
}

/// Human-readable title for a fact name.
pub fn describe(name: &str) -> String {
    format!(
        r#"<p class="fact-title"><strong>{} this artwork</strong></p>"#,
        escape_html(name)
    )
}

/// In-memory mapping from fact name to value.
///
/// Names are kept sorted so that a seeded [`IndexSource`] produces a reproducible selection.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyStore {
    properties: BTreeMap<String, PropertyValue>,
}

impl PropertyStore {
    /// Create a store holding `properties`.
    pub fn new(properties: BTreeMap<String, PropertyValue>) -> Self {
        Self { properties }
    }

    /// Replace the whole store.
    pub fn init(&mut self, properties: BTreeMap<String, PropertyValue>) {
        self.properties = properties;
    }

    /// Insert or overwrite one fact.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Insert or overwrite several facts.
    pub fn extend<I, K, V>(&mut self, facts: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        for (k, v) in facts {
            self.set(k, v);
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Number of facts.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the store holds no facts.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Fact names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Uniformly random fact name; `None` for an empty store.
    pub fn random_property_name(&self, rng: &mut dyn IndexSource) -> Option<&str> {
        if self.properties.is_empty() {
            return None;
        }
        let index = rng.pick(self.properties.len());
        self.properties.keys().nth(index).map(String::as_str)
    }

    /// Render the value of `name` through the codec and a randomly drawn representation.
    pub fn render_random_value(
        &self,
        name: &str,
        registry: &Registry,
        rng: &mut dyn IndexSource,
    ) -> RevealResult<String> {
        let value = self
            .get(name)
            .ok_or_else(|| RevealError::unknown_property(name))?;
        let enc = Encoded::new(value.to_string());
        Ok(registry.render_random(&enc, rng))
    }

    /// Draw a random fact and render its value.
    pub fn render_random_fact(
        &self,
        registry: &Registry,
        rng: &mut dyn IndexSource,
    ) -> RevealResult<Fact> {
        let name = self
            .random_property_name(rng)
            .ok_or(RevealError::EmptyStore)?
            .to_string();
        let value_markup = self.render_random_value(&name, registry, rng)?;
        Ok(Fact { name, value_markup })
    }
}

/// Producer of fresh fact rows for the feed.
pub trait FactSource {
    /// Draw and render the next fact.
    fn next_fact(&mut self) -> RevealResult<Fact>;
}

/// Draws facts from a borrowed store, registry and index source.
pub struct FactDeck<'a> {
    store: &'a PropertyStore,
    registry: &'a Registry,
    rng: &'a mut dyn IndexSource,
}

impl<'a> FactDeck<'a> {
    /// Borrow the three collaborators for a batch of draws.
    pub fn new(
        store: &'a PropertyStore,
        registry: &'a Registry,
        rng: &'a mut dyn IndexSource,
    ) -> Self {
        Self {
            store,
            registry,
            rng,
        }
    }
}

impl FactSource for FactDeck<'_> {
    fn next_fact(&mut self) -> RevealResult<Fact> {
        self.store.render_random_fact(self.registry, &mut *self.rng)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/property.rs"]
mod tests;
