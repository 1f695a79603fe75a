//! Fragment renderers: one pure function per content item type.
//! Every string that came from the content document goes through `html_escape`.

use url::Url;

use crate::models::content::{
    ArtEntry, BlogEntry, Contact, Desc, Hero, MusicEntry, ShowcaseEntry, TimelineEntry,
};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_hero(hero: &Hero) -> String {
    format!(
        "<div class=\"hero\"><h1 class=\"hero-title\">{}</h1><p class=\"hero-subtitle\">{}</p><p class=\"hero-lead\">{}</p></div>",
        html_escape(&hero.title),
        html_escape(&hero.subtitle),
        html_escape(&hero.lead),
    )
}

/// Showcase card. With a link the whole card is an anchor opening a new tab.
pub fn render_card(item: &ShowcaseEntry) -> String {
    let tag = item
        .tag
        .as_deref()
        .map(|t| format!("<span class=\"tag\">{}</span>", html_escape(t)))
        .unwrap_or_default();
    let body = format!(
        "<h3>{}</h3><p>{}</p>{}",
        html_escape(&item.title),
        html_escape(&item.desc),
        tag
    );

    match item.link.as_deref() {
        Some(link) => format!(
            "<a class=\"card showcase-card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            html_escape(link),
            body
        ),
        None => format!("<div class=\"card showcase-card\">{}</div>", body),
    }
}

/// Split a timeline description into bullet points.
/// Lists are taken as-is (one element per point); strings are split on real
/// newlines and literal `\n` markers, with blank segments dropped and a
/// leading bullet glyph removed.
pub fn timeline_points(desc: &Desc) -> Vec<String> {
    match desc {
        Desc::Points(points) => points.iter().map(|p| p.trim().to_string()).collect(),
        Desc::Text(text) => text
            .replace("\\n", "\n")
            .split('\n')
            .map(strip_bullet)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn strip_bullet(segment: &str) -> &str {
    let s = segment.trim();
    s.strip_prefix(['•', '·', '-', '*'])
        .map(str::trim_start)
        .unwrap_or(s)
}

pub fn render_timeline(item: &TimelineEntry) -> String {
    let points = timeline_points(&item.desc);
    let desc_html = match points.len() {
        0 => String::new(),
        1 => format!("<p>{}</p>", html_escape(&points[0])),
        _ => {
            let items: String = points
                .iter()
                .map(|p| format!("<li>{}</li>", html_escape(p)))
                .collect();
            format!("<ul class=\"timeline-points\">{}</ul>", items)
        }
    };

    let title = match item.link.as_deref() {
        Some(link) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            html_escape(link),
            html_escape(&item.title)
        ),
        None => html_escape(&item.title),
    };
    let tag = if item.tag.is_empty() {
        String::new()
    } else {
        format!("<span class=\"tag\">{}</span>", html_escape(&item.tag))
    };

    format!(
        "<div class=\"timeline-item\"><span class=\"timeline-year\">{}</span><div class=\"timeline-body\"><h3>{}</h3>{}{}</div></div>",
        html_escape(&item.year),
        title,
        desc_html,
        tag
    )
}

/// Parse a link, assuming `https:` when it has no scheme
/// (`youtube.com/...`, `//www.youtube.com/...`).
fn parse_link(link: &str) -> Option<Url> {
    let link = link.trim();
    match Url::parse(link) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let absolute = if link.starts_with("//") {
                format!("https:{}", link)
            } else {
                format!("https://{}", link)
            };
            Url::parse(&absolute).ok()
        }
        Err(_) => None,
    }
}

/// Pull a YouTube video id out of a link. Checked in order: `/shorts/<id>`,
/// `/watch?v=<id>`, `/embed/<id>`; the first match wins.
pub fn youtube_id(link: &str) -> Option<String> {
    let url = parse_link(link)?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.collect())
        .unwrap_or_default();

    let segment_after = |name: &str| -> Option<String> {
        let pos = segments.iter().position(|s| *s == name)?;
        segments.get(pos + 1).map(|s| s.to_string())
    };

    let id = segment_after("shorts")
        .or_else(|| {
            if segments.last() == Some(&"watch") {
                url.query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned())
            } else {
                None
            }
        })
        .or_else(|| segment_after("embed"))?;

    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Some(id)
    } else {
        None
    }
}

pub fn render_music(item: &MusicEntry) -> String {
    let title = html_escape(&item.title);
    let desc = html_escape(&item.desc);

    let id = match item.link.as_deref().and_then(youtube_id) {
        Some(id) => id,
        None => {
            return format!(
                "<div class=\"card music-card\"><h3>{}</h3><p>{}</p></div>",
                title, desc
            )
        }
    };

    // Swapped in by the onerror handler when the embed cannot load.
    let fallback = format!(
        "<a class=\"yt-fallback\" href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\" rel=\"noopener noreferrer\"><img src=\"https://img.youtube.com/vi/{id}/hqdefault.jpg\" alt=\"{title}\"></a>",
        id = id,
        title = title
    );

    format!(
        "<div class=\"card music-card\"><h3>{title}</h3><div class=\"video-wrap\"><iframe class=\"yt-embed\" src=\"https://www.youtube.com/embed/{id}\" title=\"{title}\" frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen data-fallback=\"{fallback}\" onerror=\"this.outerHTML=this.dataset.fallback\"></iframe></div><p>{desc}</p></div>",
        title = title,
        id = id,
        fallback = html_escape(&fallback),
        desc = desc
    )
}

/// Art card; the thumbnail carries its full-size URL for the modal viewer.
pub fn render_art(item: &ArtEntry) -> String {
    let image = item
        .link
        .as_deref()
        .map(|link| {
            let link = html_escape(link);
            format!(
                "<img class=\"art-thumb\" src=\"{}\" alt=\"{}\" data-full=\"{}\" loading=\"lazy\">",
                link,
                html_escape(&item.title),
                link
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"card art-card\">{}<h3>{}</h3><p>{}</p></div>",
        image,
        html_escape(&item.title),
        html_escape(&item.desc)
    )
}

pub fn render_blog(item: &BlogEntry) -> String {
    let quote = item
        .quote
        .as_deref()
        .map(|q| format!("<blockquote>{}</blockquote>", html_escape(q)))
        .unwrap_or_default();
    let more = item
        .link
        .as_deref()
        .map(|l| {
            format!(
                "<a class=\"read-more\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Read more &rarr;</a>",
                html_escape(l)
            )
        })
        .unwrap_or_default();

    format!(
        "<article class=\"card blog-card\"><h3>{}</h3>{}<p>{}</p>{}</article>",
        html_escape(&item.title),
        quote,
        html_escape(&item.desc),
        more
    )
}

/// Mail-to link plus a pipe-separated list of socials in document order.
pub fn render_contact(contact: &Contact) -> String {
    let mut html = String::from("<div class=\"contact\">");
    if !contact.email.is_empty() {
        let email = html_escape(&contact.email);
        html.push_str(&format!(
            "<p class=\"contact-email\"><a href=\"mailto:{}\">{}</a></p>",
            email, email
        ));
    }
    if !contact.socials.is_empty() {
        let links: Vec<String> = contact
            .socials
            .iter()
            .map(|(name, url)| {
                format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    html_escape(url),
                    html_escape(name)
                )
            })
            .collect();
        html.push_str(&format!("<p class=\"socials\">{}</p>", links.join(" | ")));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_shorts() {
        assert_eq!(
            youtube_id("https://www.youtube.com/shorts/ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_watch_stops_at_ampersand() {
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?v=XYZ987&t=5"),
            Some("XYZ987".to_string())
        );
    }

    #[test]
    fn test_youtube_embed() {
        assert_eq!(
            youtube_id("https://www.youtube.com/embed/EMB_42?autoplay=1"),
            Some("EMB_42".to_string())
        );
    }

    #[test]
    fn test_youtube_shorts_checked_before_watch() {
        assert_eq!(
            youtube_id("https://www.youtube.com/shorts/SHORT1/watch?v=OTHER"),
            Some("SHORT1".to_string())
        );
    }

    #[test]
    fn test_youtube_links_without_scheme() {
        assert_eq!(
            youtube_id("www.youtube.com/watch?v=XYZ987"),
            Some("XYZ987".to_string())
        );
        assert_eq!(
            youtube_id("youtube.com/shorts/ABC123"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            youtube_id("//www.youtube.com/embed/X"),
            Some("X".to_string())
        );
    }

    #[test]
    fn test_youtube_rejects_other_links() {
        assert_eq!(youtube_id("https://vimeo.com/12345"), None);
        assert_eq!(youtube_id("not a url"), None);
        assert_eq!(youtube_id("https://www.youtube.com/watch"), None);
        assert_eq!(youtube_id("https://www.youtube.com/shorts/"), None);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("  • Did a thing "), "Did a thing");
        assert_eq!(strip_bullet("- dash"), "dash");
        assert_eq!(strip_bullet("plain"), "plain");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
