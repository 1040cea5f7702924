//! Content record types.
//!
//! One `ContentPage` per data file. Records are plain data: loaded once,
//! never mutated. Optional fields left out of a file are simply not rendered.

use serde::{Deserialize, Serialize};

/// A complete topic page: hero, tabbed card sections, related links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentPage {
    pub metadata: Metadata,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub related: Vec<RelatedLink>,
}

// ============================================================================
// Metadata (SEO)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub open_graph: Option<OpenGraph>,
    #[serde(default)]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenGraph {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default = "default_og_type")]
    pub kind: String,
}

fn default_og_type() -> String {
    "article".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwitterCard {
    #[serde(default)]
    pub card: TwitterCardKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardKind {
    #[default]
    Summary,
    SummaryLargeImage,
}

impl TwitterCardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardKind::Summary => "summary",
            TwitterCardKind::SummaryLargeImage => "summary_large_image",
        }
    }
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

// ============================================================================
// Sections and tabs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub content: Block,
}

/// The list rendered inside one tab panel.
///
/// Written as `{ kind, items }`; a block without `items` is an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlockRecord", into = "BlockRecord")]
pub enum Block {
    Topics(Vec<TopicArea>),
    Figures(Vec<HistoricalFigure>),
    Resources(Vec<Resource>),
    Practices(Vec<Practice>),
}

/// On-disk shape of a `Block`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum BlockRecord {
    Topics {
        #[serde(default)]
        items: Vec<TopicArea>,
    },
    Figures {
        #[serde(default)]
        items: Vec<HistoricalFigure>,
    },
    Resources {
        #[serde(default)]
        items: Vec<Resource>,
    },
    Practices {
        #[serde(default)]
        items: Vec<Practice>,
    },
}

impl From<BlockRecord> for Block {
    fn from(record: BlockRecord) -> Self {
        match record {
            BlockRecord::Topics { items } => Block::Topics(items),
            BlockRecord::Figures { items } => Block::Figures(items),
            BlockRecord::Resources { items } => Block::Resources(items),
            BlockRecord::Practices { items } => Block::Practices(items),
        }
    }
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        match block {
            Block::Topics(items) => BlockRecord::Topics { items },
            Block::Figures(items) => BlockRecord::Figures { items },
            Block::Resources(items) => BlockRecord::Resources { items },
            Block::Practices(items) => BlockRecord::Practices { items },
        }
    }
}

impl Block {
    pub fn len(&self) -> usize {
        match self {
            Block::Topics(items) => items.len(),
            Block::Figures(items) => items.len(),
            Block::Resources(items) => items.len(),
            Block::Practices(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Topics(_) => "topics",
            Block::Figures(_) => "figures",
            Block::Resources(_) => "resources",
            Block::Practices(_) => "practices",
        }
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicArea {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoricalFigure {
    pub name: String,
    pub period: String,
    pub contribution: String,
    #[serde(default)]
    pub key_texts: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub affiliate: bool,
    #[serde(default)]
    pub affiliate_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Book,
    Article,
    Website,
    Video,
    Podcast,
    Course,
    Organization,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Book => "Book",
            ResourceKind::Article => "Article",
            ResourceKind::Website => "Website",
            ResourceKind::Video => "Video",
            ResourceKind::Podcast => "Podcast",
            ResourceKind::Course => "Course",
            ResourceKind::Organization => "Organization",
        }
    }

    /// Call-to-action label for the resource button.
    pub fn action_label(&self) -> &'static str {
        match self {
            ResourceKind::Book => "View Book",
            ResourceKind::Article => "Read Article",
            ResourceKind::Website | ResourceKind::Organization => "Visit Website",
            ResourceKind::Video => "Watch",
            ResourceKind::Podcast => "Listen",
            ResourceKind::Course => "View Course",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Practice {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub figures: Vec<HistoricalFigure>,
    #[serde(default)]
    pub techniques: Vec<Technique>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Technique {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub scriptures: Vec<Scripture>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scripture {
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedLink {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub href: String,
}

// ============================================================================
// Icons
// ============================================================================

/// Icon references available to topic cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Book,
    Cross,
    Church,
    Scroll,
    Dove,
    Globe,
    Heart,
    Users,
    Sun,
    Lightbulb,
}

impl Icon {
    pub fn svg_path(&self) -> &'static str {
        match self {
            Icon::Book => r#"<path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"/><path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"/>"#,
            Icon::Cross => r#"<path d="M11 2h2v6h6v2h-6v12h-2V10H5V8h6z"/>"#,
            Icon::Church => r#"<path d="M12 2v4"/><path d="M10 4h4"/><path d="M18 22V11l-6-5-6 5v11"/><path d="M2 22h20"/><path d="M10 22v-5a2 2 0 0 1 4 0v5"/>"#,
            Icon::Scroll => r#"<path d="M8 21h12a2 2 0 0 0 2-2v-2H10v2a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v3h4"/><path d="M19 17V5a2 2 0 0 0-2-2H4"/>"#,
            Icon::Dove => r#"<path d="M3 12c3 0 6-2 8-5 1 3 4 5 8 5-2 4-5 7-9 7-3 0-5-2-7-7z"/><path d="M14 7l3-3"/>"#,
            Icon::Globe => r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#,
            Icon::Heart => r#"<path d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 0 0 0-7.8z"/>"#,
            Icon::Users => r#"<path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.9"/><path d="M16 3.1a4 4 0 0 1 0 7.8"/>"#,
            Icon::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="M4.9 4.9l1.4 1.4"/><path d="M17.7 17.7l1.4 1.4"/><path d="M2 12h2"/><path d="M20 12h2"/>"#,
            Icon::Lightbulb => r#"<path d="M9 18h6"/><path d="M10 22h4"/><path d="M12 2a7 7 0 0 0-4 12.7V17h8v-2.3A7 7 0 0 0 12 2z"/>"#,
        }
    }
}
