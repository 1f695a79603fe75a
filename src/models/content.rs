use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// The whole page copy: one record per section, arrays may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub showcase: Vec<ShowcaseEntry>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub music: Vec<MusicEntry>,
    #[serde(default)]
    pub art: Vec<ArtEntry>,
    #[serde(default)]
    pub blog: Vec<BlogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub lead: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseEntry {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Timeline descriptions arrive either as one string with embedded
/// newline markers or as an already split list of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Desc {
    Text(String),
    Points(Vec<String>),
}

impl Default for Desc {
    fn default() -> Self {
        Desc::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Written as `"2024"` or `2024`; kept as text either way.
    #[serde(deserialize_with = "year_text")]
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub desc: Desc,
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicEntry {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtEntry {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    /// Platform name → profile URL, in document order.
    #[serde(default)]
    pub socials: IndexMap<String, String>,
}

impl ContentDocument {
    /// Parse a raw JSON body and normalize it. Shape mismatches are errors;
    /// the caller decides whether to substitute the fallback.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let doc: ContentDocument = serde_json::from_str(body)?;
        Ok(doc.normalized())
    }

    /// Trim links and turn blank optional strings into `None` so renderers
    /// only ever test `Option`.
    pub fn normalized(mut self) -> Self {
        for item in &mut self.showcase {
            clean(&mut item.tag);
            clean(&mut item.link);
        }
        for item in &mut self.timeline {
            clean(&mut item.link);
            item.tag = item.tag.trim().to_string();
        }
        for item in &mut self.music {
            clean(&mut item.link);
        }
        for item in &mut self.art {
            clean(&mut item.link);
        }
        for item in &mut self.blog {
            clean(&mut item.quote);
            clean(&mut item.link);
        }
        if let Some(contact) = &mut self.contact {
            contact.email = contact.email.trim().to_string();
            contact.socials.retain(|_, url| {
                *url = url.trim().to_string();
                !url.is_empty()
            });
        }
        self
    }
}

fn clean(field: &mut Option<String>) {
    *field = field
        .take()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Number(serde_json::Number),
}

fn year_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match YearRepr::deserialize(deserializer)? {
        YearRepr::Text(s) => s,
        YearRepr::Number(n) => n.to_string(),
    })
}
