use std::collections::HashMap;
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use super::prompts::hotels_in_city_prompt::HotelsInCityPrompt;

pub const CITY_NAME_TOKEN: &str = "{{CITY_NAME}}";
pub const CURRENCY_TOKEN: &str = "{{CURRENCY}}";
pub const BDC_DATA_TOKEN: &str = "{{BDC_DATA}}";

/// Content types offered to form users. Only `hotels-in-city` has a template
/// on the server; the other two are rejected as unsupported.
pub const ADVERTISED_CONTENT_TYPES: [&str; 3] = ["hotels-in-city", "HDP", "OYO-travelblog"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeTemplate {
    content_type: String,
    template: String,
}

impl ContentTypeTemplate {
    pub fn new(content_type: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            template: template.into(),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitutes every placeholder token in a single pass over the
    /// template. Inserted values are never scanned for tokens, so the result
    /// does not depend on the order of the token types.
    pub fn render<T>(&self, city: &str, currency: &str, bdc_data: &T) -> String
    where
        T: Serialize + ?Sized,
    {
        let bdc_json = to_canonical_json(bdc_data);
        let substitutions = [
            (CITY_NAME_TOKEN, city),
            (CURRENCY_TOKEN, currency),
            (BDC_DATA_TOKEN, bdc_json.as_str()),
        ];

        let mut rendered = String::with_capacity(self.template.len() + bdc_json.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];

            match substitutions
                .iter()
                .find(|(token, _)| tail.starts_with(token))
            {
                Some((token, value)) => {
                    rendered.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    rendered.push('{');
                    rest = &tail[1..];
                }
            }
        }
        rendered.push_str(rest);

        rendered
    }
}

/// Read-only mapping from content type to prompt template.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, ContentTypeTemplate>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates the service ships with.
    pub fn builtin() -> Self {
        Self::new().with_template(
            HotelsInCityPrompt::CONTENT_TYPE,
            HotelsInCityPrompt::get_template(),
        )
    }

    pub fn with_template(mut self, content_type: &str, template: &str) -> Self {
        self.templates.insert(
            content_type.to_string(),
            ContentTypeTemplate::new(content_type, template),
        );
        self
    }

    pub fn lookup(&self, content_type: &str) -> Option<&ContentTypeTemplate> {
        self.templates.get(content_type)
    }

    pub fn content_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

/// Serializes in the layout the prompt templates were written against:
/// `", "` and `": "` separators with non-ASCII characters escaped as `\uXXXX`.
pub fn to_canonical_json<T>(value: &T) -> String
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);

    if let Err(e) = value.serialize(&mut serializer) {
        tracing::warn!(error = %e, "Falling back to compact JSON for BDC data");
        return serde_json::to_string(value).unwrap_or_default();
    }

    // Output is pure ASCII.
    String::from_utf8_lossy(&buffer).into_owned()
}

struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut ascii_start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[ascii_start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            ascii_start = index + ch.len_utf8();
        }
        writer.write_all(fragment[ascii_start..].as_bytes())
    }
}
