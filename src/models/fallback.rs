//! Built-in content used whenever `content.json` cannot be loaded.
//! Same types as the external document, so rendering never branches on source.

use indexmap::IndexMap;

use super::content::{
    ArtEntry, BlogEntry, Contact, ContentDocument, Desc, Hero, MusicEntry, ShowcaseEntry,
    TimelineEntry,
};

pub fn document() -> ContentDocument {
    let mut socials = IndexMap::new();
    socials.insert("GitHub".to_string(), "https://github.com/".to_string());
    socials.insert("YouTube".to_string(), "https://www.youtube.com/".to_string());
    socials.insert("Instagram".to_string(), "https://www.instagram.com/".to_string());

    ContentDocument {
        hero: Some(Hero {
            title: "Hi, I'm a maker of things".to_string(),
            subtitle: "Engineer · Musician · Artist".to_string(),
            lead: "Software by day, songs and sketches by night. This page collects a bit of everything."
                .to_string(),
        }),
        showcase: vec![
            ShowcaseEntry {
                title: "Projects".to_string(),
                desc: "Open-source tools and experiments.".to_string(),
                tag: Some("code".to_string()),
                link: Some("https://github.com/".to_string()),
            },
            ShowcaseEntry {
                title: "Sketchbook".to_string(),
                desc: "Drawings and paintings from the last few years.".to_string(),
                tag: Some("art".to_string()),
                link: None,
            },
        ],
        timeline: vec![
            TimelineEntry {
                year: "2024".to_string(),
                title: "Started freelancing".to_string(),
                desc: Desc::Points(vec![
                    "Backend services in Rust".to_string(),
                    "Workshops on systems programming".to_string(),
                ]),
                tag: "work".to_string(),
                link: None,
            },
            TimelineEntry {
                year: "2021".to_string(),
                title: "First album".to_string(),
                desc: Desc::Text("Recorded and mixed at home.".to_string()),
                tag: "music".to_string(),
                link: None,
            },
        ],
        music: vec![
            MusicEntry {
                title: "Late Night Loop".to_string(),
                desc: "A short piano improvisation.".to_string(),
                link: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            },
            MusicEntry {
                title: "Unreleased demo".to_string(),
                desc: "Coming soon.".to_string(),
                link: None,
            },
        ],
        art: vec![ArtEntry {
            title: "Harbour at Dusk".to_string(),
            desc: "Watercolour, A4.".to_string(),
            link: Some("/static/img/harbour.jpg".to_string()),
        }],
        blog: vec![BlogEntry {
            title: "Why I keep a sketchbook".to_string(),
            desc: "Notes on drawing every day, even badly.".to_string(),
            quote: Some("The page does not judge.".to_string()),
            link: None,
        }],
        contact: Some(Contact {
            email: "hello@example.com".to_string(),
            socials,
        }),
    }
}
