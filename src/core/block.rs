//! Typed block and record definitions for the help-center page.
//!
//! Every block type is a concrete enum variant with its own record shapes;
//! there is no free-form property bag. Field editing goes through a small
//! schema layer (`FieldSpec` tables plus `field`/`set_field` accessors) so
//! the editor UI can stay generic while the data stays strongly typed.
//! Unknown field keys are ignored with a warning rather than surfaced as
//! errors; validation belongs to the input widget, not this layer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::core::repeater::{self, RepeaterPolicy};
use crate::core::style::{StyleConfig, TextAlign};

/// Input widget to use for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Color,
    Toggle,
    Align,
}

/// One editable field in a block or record schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

/// A field value in transit between a record and the editor widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
    Align(TextAlign),
}

impl FieldValue {
    /// Display form used by read-only renderers and the editor's value column.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Toggle(on) => if *on { "on" } else { "off" }.to_string(),
            FieldValue::Align(align) => align.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            label: "New link".to_string(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl Default for CategoryCard {
    fn default() -> Self {
        Self {
            icon: "rocket".to_string(),
            title: "New Category".to_string(),
            description: "Category description".to_string(),
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleItem {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Default for ArticleItem {
    fn default() -> Self {
        Self {
            title: "New article".to_string(),
            description: String::new(),
            url: String::new(),
        }
    }
}

/// A CTA button carries both its normal-state and hover-state styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub icon: String,
    pub url: String,
    pub bg_color: String,
    pub text_color: String,
    pub border: String,
    pub hover_bg_color: String,
    pub hover_text_color: String,
    pub hover_border: String,
}

impl Default for CtaButton {
    fn default() -> Self {
        Self {
            text: "Button".to_string(),
            icon: String::new(),
            url: String::new(),
            bg_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
            border: "none".to_string(),
            hover_bg_color: "#1d4ed8".to_string(),
            hover_text_color: "#ffffff".to_string(),
            hover_border: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseCard {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl Default for ResponseCard {
    fn default() -> Self {
        Self {
            label: "Live Chat".to_string(),
            value: "< 2 hours".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursRow {
    pub label: String,
    pub hours: String,
}

/// Support-hours card: a titled card holding an ordered list of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursCard {
    pub title: String,
    pub rows: Vec<HoursRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// The block library. One variant per block type of the composed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Hero {
        title: String,
        subtitle: String,
        placeholder: String,
        show_search: bool,
        style: StyleConfig,
    },
    Header {
        site_title: String,
        show_logo: bool,
        menu_items: Vec<MenuItem>,
    },
    Faq {
        header_title: String,
        header_subtitle: String,
        style: StyleConfig,
        faqs: Vec<FaqItem>,
    },
    CategoryCards {
        heading: String,
        subheading: String,
        card_bg: String,
        style: StyleConfig,
        cards: Vec<CategoryCard>,
    },
    PopularArticles {
        heading: String,
        style: StyleConfig,
        articles: Vec<ArticleItem>,
    },
    NeedHelp {
        heading: String,
        description: String,
        style: StyleConfig,
        buttons: Vec<CtaButton>,
    },
    ResponseTimes {
        title: String,
        subtitle: String,
        style: StyleConfig,
        cards: Vec<ResponseCard>,
    },
    SupportHours {
        title: String,
        subtitle: String,
        style: StyleConfig,
        cards: Vec<HoursCard>,
    },
    ContactForm {
        title: String,
        subtitle: String,
        form_shortcode: String,
    },
    Footer {
        footer_text: String,
        links: Vec<FooterLink>,
    },
}

/// Block type tags, in the order the add-block selector cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum BlockKind {
    Hero,
    Header,
    Faq,
    CategoryCards,
    PopularArticles,
    NeedHelp,
    ResponseTimes,
    SupportHours,
    ContactForm,
    Footer,
}

impl BlockKind {
    /// Type-specific default block inserted by the add operation.
    pub fn create(self) -> Block {
        match self {
            BlockKind::Hero => Block::Hero {
                title: "How can we help?".to_string(),
                subtitle: "Search our knowledge base for answers".to_string(),
                placeholder: "Search for articles...".to_string(),
                show_search: true,
                style: crate::core::style::section_style(),
            },
            BlockKind::Header => Block::Header {
                site_title: "Help Center".to_string(),
                show_logo: true,
                menu_items: Vec::new(),
            },
            BlockKind::Faq => Block::Faq {
                header_title: "Frequently Asked Questions".to_string(),
                header_subtitle: "Quick answers to common questions".to_string(),
                style: crate::core::style::section_style(),
                faqs: Vec::new(),
            },
            BlockKind::CategoryCards => Block::CategoryCards {
                heading: "Browse by Category".to_string(),
                subheading: "Find the help you need organized by topic".to_string(),
                card_bg: crate::core::style::card_background(),
                style: StyleConfig {
                    background_color: "#f8fafc".to_string(),
                    ..crate::core::style::section_style()
                },
                cards: Vec::new(),
            },
            BlockKind::PopularArticles => Block::PopularArticles {
                heading: "Popular Articles".to_string(),
                style: crate::core::style::section_style(),
                // keeps at least one article; seed the list accordingly
                articles: vec![ArticleItem::default()],
            },
            BlockKind::NeedHelp => Block::NeedHelp {
                heading: "Still need help?".to_string(),
                description: "Our support team is here for you".to_string(),
                style: crate::core::style::section_style(),
                buttons: Vec::new(),
            },
            BlockKind::ResponseTimes => Block::ResponseTimes {
                title: "Response Times".to_string(),
                subtitle: "Here's what you can expect when contacting us".to_string(),
                style: crate::core::style::section_style(),
                cards: Vec::new(),
            },
            BlockKind::SupportHours => Block::SupportHours {
                title: "Support Hours".to_string(),
                subtitle: "When you can reach us".to_string(),
                style: crate::core::style::section_style(),
                cards: Vec::new(),
            },
            BlockKind::ContactForm => Block::ContactForm {
                title: "Contact us".to_string(),
                subtitle: "We usually respond within one business day".to_string(),
                form_shortcode: String::new(),
            },
            BlockKind::Footer => Block::Footer {
                footer_text: "© Help Center".to_string(),
                links: Vec::new(),
            },
        }
    }
}

// Field tables. Keys are schema constants, matched exhaustively below.
const HERO_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("subtitle", "Subtitle", FieldKind::Text),
    field("placeholder", "Search placeholder", FieldKind::Text),
    field("show_search", "Show search", FieldKind::Toggle),
    field("background_color", "Background", FieldKind::Color),
    field("text_align", "Text align", FieldKind::Align),
];

const HEADER_FIELDS: &[FieldSpec] = &[
    field("site_title", "Site title", FieldKind::Text),
    field("show_logo", "Show logo", FieldKind::Toggle),
];

const FAQ_FIELDS: &[FieldSpec] = &[
    field("header_title", "Header title", FieldKind::Text),
    field("header_subtitle", "Header subtitle", FieldKind::Text),
    field("background_color", "Background", FieldKind::Color),
    field("text_color", "Text color", FieldKind::Color),
];

const CATEGORY_FIELDS: &[FieldSpec] = &[
    field("heading", "Heading", FieldKind::Text),
    field("subheading", "Subheading", FieldKind::Text),
    field("card_bg", "Card background", FieldKind::Color),
    field("background_color", "Section background", FieldKind::Color),
    field("text_align", "Text align", FieldKind::Align),
];

const ARTICLES_FIELDS: &[FieldSpec] = &[
    field("heading", "Heading", FieldKind::Text),
    field("background_color", "Background", FieldKind::Color),
];

const NEED_HELP_FIELDS: &[FieldSpec] = &[
    field("heading", "Heading", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
    field("background_color", "Background", FieldKind::Color),
    field("text_align", "Text align", FieldKind::Align),
];

const RESPONSE_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("subtitle", "Subtitle", FieldKind::Text),
    field("background_color", "Background", FieldKind::Color),
    field("text_align", "Text align", FieldKind::Align),
];

const HOURS_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("subtitle", "Subtitle", FieldKind::Text),
    field("background_color", "Background", FieldKind::Color),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("subtitle", "Subtitle", FieldKind::Text),
    field("form_shortcode", "Form shortcode", FieldKind::Text),
];

const FOOTER_FIELDS: &[FieldSpec] = &[field("footer_text", "Footer text", FieldKind::Text)];

const MENU_ITEM_FIELDS: &[FieldSpec] = &[
    field("label", "Label", FieldKind::Text),
    field("url", "URL", FieldKind::Text),
];

const FAQ_ITEM_FIELDS: &[FieldSpec] = &[
    field("question", "Question", FieldKind::Text),
    field("answer", "Answer", FieldKind::Text),
];

const CATEGORY_CARD_FIELDS: &[FieldSpec] = &[
    field("icon", "Icon", FieldKind::Text),
    field("title", "Title", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
    field("link", "Link", FieldKind::Text),
];

const ARTICLE_ITEM_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
    field("url", "URL", FieldKind::Text),
];

const CTA_BUTTON_FIELDS: &[FieldSpec] = &[
    field("text", "Text", FieldKind::Text),
    field("icon", "Icon", FieldKind::Text),
    field("url", "URL", FieldKind::Text),
    field("bg_color", "Background", FieldKind::Color),
    field("text_color", "Text color", FieldKind::Color),
    field("border", "Border", FieldKind::Text),
    field("hover_bg_color", "Hover background", FieldKind::Color),
    field("hover_text_color", "Hover text color", FieldKind::Color),
    field("hover_border", "Hover border", FieldKind::Text),
];

const RESPONSE_CARD_FIELDS: &[FieldSpec] = &[
    field("label", "Label", FieldKind::Text),
    field("value", "Value", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
];

const HOURS_CARD_FIELDS: &[FieldSpec] = &[field("title", "Card title", FieldKind::Text)];

const HOURS_ROW_FIELDS: &[FieldSpec] = &[
    field("label", "Label", FieldKind::Text),
    field("hours", "Hours", FieldKind::Text),
];

const FOOTER_LINK_FIELDS: &[FieldSpec] = &[field("text", "Text", FieldKind::Text)];

fn style_field(style: &StyleConfig, key: &str) -> Option<FieldValue> {
    match key {
        "background_color" => Some(FieldValue::Text(style.background_color.clone())),
        "text_color" => Some(FieldValue::Text(style.text_color.clone())),
        "text_align" => Some(FieldValue::Align(style.text_align)),
        _ => None,
    }
}

fn set_style_field(style: &mut StyleConfig, key: &str, value: &FieldValue) -> bool {
    match (key, value) {
        ("background_color", FieldValue::Text(text)) => {
            style.background_color = text.clone();
            true
        }
        ("text_color", FieldValue::Text(text)) => {
            style.text_color = text.clone();
            true
        }
        ("text_align", FieldValue::Align(align)) => {
            style.text_align = *align;
            true
        }
        _ => false,
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Hero { .. } => BlockKind::Hero,
            Block::Header { .. } => BlockKind::Header,
            Block::Faq { .. } => BlockKind::Faq,
            Block::CategoryCards { .. } => BlockKind::CategoryCards,
            Block::PopularArticles { .. } => BlockKind::PopularArticles,
            Block::NeedHelp { .. } => BlockKind::NeedHelp,
            Block::ResponseTimes { .. } => BlockKind::ResponseTimes,
            Block::SupportHours { .. } => BlockKind::SupportHours,
            Block::ContactForm { .. } => BlockKind::ContactForm,
            Block::Footer { .. } => BlockKind::Footer,
        }
    }

    /// Short description shown in the entry page's block list.
    pub fn summary(&self) -> String {
        match self {
            Block::Hero { title, .. } => title.clone(),
            Block::Header { site_title, .. } => site_title.clone(),
            Block::Faq {
                header_title, faqs, ..
            } => format!("{header_title} ({} items)", faqs.len()),
            Block::CategoryCards { heading, cards, .. } => {
                format!("{heading} ({} cards)", cards.len())
            }
            Block::PopularArticles {
                heading, articles, ..
            } => format!("{heading} ({} articles)", articles.len()),
            Block::NeedHelp {
                heading, buttons, ..
            } => format!("{heading} ({} buttons)", buttons.len()),
            Block::ResponseTimes { title, cards, .. } => {
                format!("{title} ({} cards)", cards.len())
            }
            Block::SupportHours { title, cards, .. } => {
                format!("{title} ({} cards)", cards.len())
            }
            Block::ContactForm { title, .. } => title.clone(),
            Block::Footer { footer_text, .. } => footer_text.clone(),
        }
    }

    // -- block-level fields -------------------------------------------------

    pub fn field_specs(&self) -> &'static [FieldSpec] {
        match self {
            Block::Hero { .. } => HERO_FIELDS,
            Block::Header { .. } => HEADER_FIELDS,
            Block::Faq { .. } => FAQ_FIELDS,
            Block::CategoryCards { .. } => CATEGORY_FIELDS,
            Block::PopularArticles { .. } => ARTICLES_FIELDS,
            Block::NeedHelp { .. } => NEED_HELP_FIELDS,
            Block::ResponseTimes { .. } => RESPONSE_FIELDS,
            Block::SupportHours { .. } => HOURS_FIELDS,
            Block::ContactForm { .. } => CONTACT_FIELDS,
            Block::Footer { .. } => FOOTER_FIELDS,
        }
    }

    pub fn field(&self, key: &str) -> Option<FieldValue> {
        match self {
            Block::Hero {
                title,
                subtitle,
                placeholder,
                show_search,
                style,
            } => match key {
                "title" => Some(FieldValue::Text(title.clone())),
                "subtitle" => Some(FieldValue::Text(subtitle.clone())),
                "placeholder" => Some(FieldValue::Text(placeholder.clone())),
                "show_search" => Some(FieldValue::Toggle(*show_search)),
                _ => style_field(style, key),
            },
            Block::Header {
                site_title,
                show_logo,
                ..
            } => match key {
                "site_title" => Some(FieldValue::Text(site_title.clone())),
                "show_logo" => Some(FieldValue::Toggle(*show_logo)),
                _ => None,
            },
            Block::Faq {
                header_title,
                header_subtitle,
                style,
                ..
            } => match key {
                "header_title" => Some(FieldValue::Text(header_title.clone())),
                "header_subtitle" => Some(FieldValue::Text(header_subtitle.clone())),
                _ => style_field(style, key),
            },
            Block::CategoryCards {
                heading,
                subheading,
                card_bg,
                style,
                ..
            } => match key {
                "heading" => Some(FieldValue::Text(heading.clone())),
                "subheading" => Some(FieldValue::Text(subheading.clone())),
                "card_bg" => Some(FieldValue::Text(card_bg.clone())),
                _ => style_field(style, key),
            },
            Block::PopularArticles { heading, style, .. } => match key {
                "heading" => Some(FieldValue::Text(heading.clone())),
                _ => style_field(style, key),
            },
            Block::NeedHelp {
                heading,
                description,
                style,
                ..
            } => match key {
                "heading" => Some(FieldValue::Text(heading.clone())),
                "description" => Some(FieldValue::Text(description.clone())),
                _ => style_field(style, key),
            },
            Block::ResponseTimes {
                title,
                subtitle,
                style,
                ..
            }
            | Block::SupportHours {
                title,
                subtitle,
                style,
                ..
            } => match key {
                "title" => Some(FieldValue::Text(title.clone())),
                "subtitle" => Some(FieldValue::Text(subtitle.clone())),
                _ => style_field(style, key),
            },
            Block::ContactForm {
                title,
                subtitle,
                form_shortcode,
            } => match key {
                "title" => Some(FieldValue::Text(title.clone())),
                "subtitle" => Some(FieldValue::Text(subtitle.clone())),
                "form_shortcode" => Some(FieldValue::Text(form_shortcode.clone())),
                _ => None,
            },
            Block::Footer { footer_text, .. } => match key {
                "footer_text" => Some(FieldValue::Text(footer_text.clone())),
                _ => None,
            },
        }
    }

    /// Replace one named field, leaving everything else untouched. Unknown
    /// keys and kind mismatches are ignored.
    pub fn set_field(&mut self, key: &str, value: FieldValue) {
        let applied = match self {
            Block::Hero {
                title,
                subtitle,
                placeholder,
                show_search,
                style,
            } => match (key, &value) {
                ("title", FieldValue::Text(text)) => {
                    *title = text.clone();
                    true
                }
                ("subtitle", FieldValue::Text(text)) => {
                    *subtitle = text.clone();
                    true
                }
                ("placeholder", FieldValue::Text(text)) => {
                    *placeholder = text.clone();
                    true
                }
                ("show_search", FieldValue::Toggle(on)) => {
                    *show_search = *on;
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::Header {
                site_title,
                show_logo,
                ..
            } => match (key, &value) {
                ("site_title", FieldValue::Text(text)) => {
                    *site_title = text.clone();
                    true
                }
                ("show_logo", FieldValue::Toggle(on)) => {
                    *show_logo = *on;
                    true
                }
                _ => false,
            },
            Block::Faq {
                header_title,
                header_subtitle,
                style,
                ..
            } => match (key, &value) {
                ("header_title", FieldValue::Text(text)) => {
                    *header_title = text.clone();
                    true
                }
                ("header_subtitle", FieldValue::Text(text)) => {
                    *header_subtitle = text.clone();
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::CategoryCards {
                heading,
                subheading,
                card_bg,
                style,
                ..
            } => match (key, &value) {
                ("heading", FieldValue::Text(text)) => {
                    *heading = text.clone();
                    true
                }
                ("subheading", FieldValue::Text(text)) => {
                    *subheading = text.clone();
                    true
                }
                ("card_bg", FieldValue::Text(text)) => {
                    *card_bg = text.clone();
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::PopularArticles { heading, style, .. } => match (key, &value) {
                ("heading", FieldValue::Text(text)) => {
                    *heading = text.clone();
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::NeedHelp {
                heading,
                description,
                style,
                ..
            } => match (key, &value) {
                ("heading", FieldValue::Text(text)) => {
                    *heading = text.clone();
                    true
                }
                ("description", FieldValue::Text(text)) => {
                    *description = text.clone();
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::ResponseTimes {
                title,
                subtitle,
                style,
                ..
            }
            | Block::SupportHours {
                title,
                subtitle,
                style,
                ..
            } => match (key, &value) {
                ("title", FieldValue::Text(text)) => {
                    *title = text.clone();
                    true
                }
                ("subtitle", FieldValue::Text(text)) => {
                    *subtitle = text.clone();
                    true
                }
                _ => set_style_field(style, key, &value),
            },
            Block::ContactForm {
                title,
                subtitle,
                form_shortcode,
            } => match (key, &value) {
                ("title", FieldValue::Text(text)) => {
                    *title = text.clone();
                    true
                }
                ("subtitle", FieldValue::Text(text)) => {
                    *subtitle = text.clone();
                    true
                }
                ("form_shortcode", FieldValue::Text(text)) => {
                    *form_shortcode = text.clone();
                    true
                }
                _ => false,
            },
            Block::Footer { footer_text, .. } => match (key, &value) {
                ("footer_text", FieldValue::Text(text)) => {
                    *footer_text = text.clone();
                    true
                }
                _ => false,
            },
        };

        if !applied {
            log::warn!(
                "Ignoring unknown field '{key}' on {:?} block",
                self.kind()
            );
        }
    }

    // -- repeater items -----------------------------------------------------

    /// Noun used in editor chrome for one record of this block's repeater,
    /// or `None` when the block has no repeater at all.
    pub fn item_noun(&self) -> Option<&'static str> {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => None,
            Block::Header { .. } => Some("menu item"),
            Block::Faq { .. } => Some("FAQ"),
            Block::CategoryCards { .. } => Some("card"),
            Block::PopularArticles { .. } => Some("article"),
            Block::NeedHelp { .. } => Some("button"),
            Block::ResponseTimes { .. } => Some("card"),
            Block::SupportHours { .. } => Some("card"),
            Block::Footer { .. } => Some("link"),
        }
    }

    /// Minimum-cardinality policy for this block's repeater. Only the
    /// popular-articles block refuses to drop its last record.
    pub fn item_policy(&self) -> RepeaterPolicy {
        match self {
            Block::PopularArticles { .. } => RepeaterPolicy::KEEP_ONE,
            _ => RepeaterPolicy::UNBOUNDED,
        }
    }

    pub fn items_len(&self) -> usize {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => 0,
            Block::Header { menu_items, .. } => menu_items.len(),
            Block::Faq { faqs, .. } => faqs.len(),
            Block::CategoryCards { cards, .. } => cards.len(),
            Block::PopularArticles { articles, .. } => articles.len(),
            Block::NeedHelp { buttons, .. } => buttons.len(),
            Block::ResponseTimes { cards, .. } => cards.len(),
            Block::SupportHours { cards, .. } => cards.len(),
            Block::Footer { links, .. } => links.len(),
        }
    }

    pub fn item_specs(&self) -> &'static [FieldSpec] {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => &[],
            Block::Header { .. } => MENU_ITEM_FIELDS,
            Block::Faq { .. } => FAQ_ITEM_FIELDS,
            Block::CategoryCards { .. } => CATEGORY_CARD_FIELDS,
            Block::PopularArticles { .. } => ARTICLE_ITEM_FIELDS,
            Block::NeedHelp { .. } => CTA_BUTTON_FIELDS,
            Block::ResponseTimes { .. } => RESPONSE_CARD_FIELDS,
            Block::SupportHours { .. } => HOURS_CARD_FIELDS,
            Block::Footer { .. } => FOOTER_LINK_FIELDS,
        }
    }

    /// Header text for one item in the editor's item list. Empty fields fall
    /// back to the item noun so every row stays visible and selectable.
    pub fn item_title(&self, index: usize) -> String {
        let title = match self {
            Block::Hero { .. } | Block::ContactForm { .. } => None,
            Block::Header { menu_items, .. } => menu_items.get(index).map(|m| m.label.clone()),
            Block::Faq { faqs, .. } => faqs.get(index).map(|f| f.question.clone()),
            Block::CategoryCards { cards, .. } => cards.get(index).map(|c| c.title.clone()),
            Block::PopularArticles { articles, .. } => {
                articles.get(index).map(|a| a.title.clone())
            }
            Block::NeedHelp { buttons, .. } => buttons.get(index).map(|b| b.text.clone()),
            Block::ResponseTimes { cards, .. } => cards.get(index).map(|c| c.label.clone()),
            Block::SupportHours { cards, .. } => cards.get(index).map(|c| c.title.clone()),
            Block::Footer { links, .. } => links.get(index).map(|l| l.text.clone()),
        };
        match title {
            Some(text) if !text.is_empty() => text,
            _ => format!("{} {}", self.item_noun().unwrap_or("item"), index + 1),
        }
    }

    pub fn item_field(&self, index: usize, key: &str) -> Option<FieldValue> {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => None,
            Block::Header { menu_items, .. } => {
                let item = menu_items.get(index)?;
                match key {
                    "label" => Some(FieldValue::Text(item.label.clone())),
                    "url" => Some(FieldValue::Text(item.url.clone())),
                    _ => None,
                }
            }
            Block::Faq { faqs, .. } => {
                let item = faqs.get(index)?;
                match key {
                    "question" => Some(FieldValue::Text(item.question.clone())),
                    "answer" => Some(FieldValue::Text(item.answer.clone())),
                    _ => None,
                }
            }
            Block::CategoryCards { cards, .. } => {
                let card = cards.get(index)?;
                match key {
                    "icon" => Some(FieldValue::Text(card.icon.clone())),
                    "title" => Some(FieldValue::Text(card.title.clone())),
                    "description" => Some(FieldValue::Text(card.description.clone())),
                    "link" => Some(FieldValue::Text(card.link.clone())),
                    _ => None,
                }
            }
            Block::PopularArticles { articles, .. } => {
                let article = articles.get(index)?;
                match key {
                    "title" => Some(FieldValue::Text(article.title.clone())),
                    "description" => Some(FieldValue::Text(article.description.clone())),
                    "url" => Some(FieldValue::Text(article.url.clone())),
                    _ => None,
                }
            }
            Block::NeedHelp { buttons, .. } => {
                let button = buttons.get(index)?;
                match key {
                    "text" => Some(FieldValue::Text(button.text.clone())),
                    "icon" => Some(FieldValue::Text(button.icon.clone())),
                    "url" => Some(FieldValue::Text(button.url.clone())),
                    "bg_color" => Some(FieldValue::Text(button.bg_color.clone())),
                    "text_color" => Some(FieldValue::Text(button.text_color.clone())),
                    "border" => Some(FieldValue::Text(button.border.clone())),
                    "hover_bg_color" => Some(FieldValue::Text(button.hover_bg_color.clone())),
                    "hover_text_color" => Some(FieldValue::Text(button.hover_text_color.clone())),
                    "hover_border" => Some(FieldValue::Text(button.hover_border.clone())),
                    _ => None,
                }
            }
            Block::ResponseTimes { cards, .. } => {
                let card = cards.get(index)?;
                match key {
                    "label" => Some(FieldValue::Text(card.label.clone())),
                    "value" => Some(FieldValue::Text(card.value.clone())),
                    "description" => Some(FieldValue::Text(card.description.clone())),
                    _ => None,
                }
            }
            Block::SupportHours { cards, .. } => {
                let card = cards.get(index)?;
                match key {
                    "title" => Some(FieldValue::Text(card.title.clone())),
                    _ => None,
                }
            }
            Block::Footer { links, .. } => {
                let link = links.get(index)?;
                match key {
                    "text" => Some(FieldValue::Text(link.text.clone())),
                    _ => None,
                }
            }
        }
    }

    pub fn set_item_field(&mut self, index: usize, key: &str, value: FieldValue) -> bool {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => false,
            Block::Header { menu_items, .. } => {
                repeater::update_at(menu_items, index, |item| match (key, &value) {
                    ("label", FieldValue::Text(text)) => item.label = text.clone(),
                    ("url", FieldValue::Text(text)) => item.url = text.clone(),
                    _ => {}
                })
            }
            Block::Faq { faqs, .. } => {
                repeater::update_at(faqs, index, |item| match (key, &value) {
                    ("question", FieldValue::Text(text)) => item.question = text.clone(),
                    ("answer", FieldValue::Text(text)) => item.answer = text.clone(),
                    _ => {}
                })
            }
            Block::CategoryCards { cards, .. } => {
                repeater::update_at(cards, index, |card| match (key, &value) {
                    ("icon", FieldValue::Text(text)) => card.icon = text.clone(),
                    ("title", FieldValue::Text(text)) => card.title = text.clone(),
                    ("description", FieldValue::Text(text)) => card.description = text.clone(),
                    ("link", FieldValue::Text(text)) => card.link = text.clone(),
                    _ => {}
                })
            }
            Block::PopularArticles { articles, .. } => {
                repeater::update_at(articles, index, |article| match (key, &value) {
                    ("title", FieldValue::Text(text)) => article.title = text.clone(),
                    ("description", FieldValue::Text(text)) => article.description = text.clone(),
                    ("url", FieldValue::Text(text)) => article.url = text.clone(),
                    _ => {}
                })
            }
            Block::NeedHelp { buttons, .. } => {
                repeater::update_at(buttons, index, |button| match (key, &value) {
                    ("text", FieldValue::Text(text)) => button.text = text.clone(),
                    ("icon", FieldValue::Text(text)) => button.icon = text.clone(),
                    ("url", FieldValue::Text(text)) => button.url = text.clone(),
                    ("bg_color", FieldValue::Text(text)) => button.bg_color = text.clone(),
                    ("text_color", FieldValue::Text(text)) => button.text_color = text.clone(),
                    ("border", FieldValue::Text(text)) => button.border = text.clone(),
                    ("hover_bg_color", FieldValue::Text(text)) => {
                        button.hover_bg_color = text.clone()
                    }
                    ("hover_text_color", FieldValue::Text(text)) => {
                        button.hover_text_color = text.clone()
                    }
                    ("hover_border", FieldValue::Text(text)) => {
                        button.hover_border = text.clone()
                    }
                    _ => {}
                })
            }
            Block::ResponseTimes { cards, .. } => {
                repeater::update_at(cards, index, |card| match (key, &value) {
                    ("label", FieldValue::Text(text)) => card.label = text.clone(),
                    ("value", FieldValue::Text(text)) => card.value = text.clone(),
                    ("description", FieldValue::Text(text)) => card.description = text.clone(),
                    _ => {}
                })
            }
            Block::SupportHours { cards, .. } => {
                repeater::update_at(cards, index, |card| match (key, &value) {
                    ("title", FieldValue::Text(text)) => card.title = text.clone(),
                    _ => {}
                })
            }
            Block::Footer { links, .. } => {
                repeater::update_at(links, index, |link| match (key, &value) {
                    ("text", FieldValue::Text(text)) => link.text = text.clone(),
                    _ => {}
                })
            }
        }
    }

    /// Append a type-specific default record. Returns false for blocks
    /// without a repeater.
    pub fn append_item(&mut self) -> bool {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => false,
            Block::Header { menu_items, .. } => {
                repeater::append(menu_items, MenuItem::default());
                true
            }
            Block::Faq { faqs, .. } => {
                repeater::append(faqs, FaqItem::default());
                true
            }
            Block::CategoryCards { cards, .. } => {
                repeater::append(cards, CategoryCard::default());
                true
            }
            Block::PopularArticles { articles, .. } => {
                repeater::append(articles, ArticleItem::default());
                true
            }
            Block::NeedHelp { buttons, .. } => {
                repeater::append(buttons, CtaButton::default());
                true
            }
            Block::ResponseTimes { cards, .. } => {
                repeater::append(cards, ResponseCard::default());
                true
            }
            Block::SupportHours { cards, .. } => {
                repeater::append(cards, HoursCard::default());
                true
            }
            Block::Footer { links, .. } => {
                repeater::append(links, FooterLink::default());
                true
            }
        }
    }

    pub fn remove_item(&mut self, index: usize) -> bool {
        let policy = self.item_policy();
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => false,
            Block::Header { menu_items, .. } => repeater::remove_at(menu_items, index, policy),
            Block::Faq { faqs, .. } => repeater::remove_at(faqs, index, policy),
            Block::CategoryCards { cards, .. } => repeater::remove_at(cards, index, policy),
            Block::PopularArticles { articles, .. } => {
                repeater::remove_at(articles, index, policy)
            }
            Block::NeedHelp { buttons, .. } => repeater::remove_at(buttons, index, policy),
            Block::ResponseTimes { cards, .. } => repeater::remove_at(cards, index, policy),
            Block::SupportHours { cards, .. } => repeater::remove_at(cards, index, policy),
            Block::Footer { links, .. } => repeater::remove_at(links, index, policy),
        }
    }

    pub fn move_item_up(&mut self, index: usize) -> bool {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => false,
            Block::Header { menu_items, .. } => repeater::move_up(menu_items, index),
            Block::Faq { faqs, .. } => repeater::move_up(faqs, index),
            Block::CategoryCards { cards, .. } => repeater::move_up(cards, index),
            Block::PopularArticles { articles, .. } => repeater::move_up(articles, index),
            Block::NeedHelp { buttons, .. } => repeater::move_up(buttons, index),
            Block::ResponseTimes { cards, .. } => repeater::move_up(cards, index),
            Block::SupportHours { cards, .. } => repeater::move_up(cards, index),
            Block::Footer { links, .. } => repeater::move_up(links, index),
        }
    }

    pub fn move_item_down(&mut self, index: usize) -> bool {
        match self {
            Block::Hero { .. } | Block::ContactForm { .. } => false,
            Block::Header { menu_items, .. } => repeater::move_down(menu_items, index),
            Block::Faq { faqs, .. } => repeater::move_down(faqs, index),
            Block::CategoryCards { cards, .. } => repeater::move_down(cards, index),
            Block::PopularArticles { articles, .. } => repeater::move_down(articles, index),
            Block::NeedHelp { buttons, .. } => repeater::move_down(buttons, index),
            Block::ResponseTimes { cards, .. } => repeater::move_down(cards, index),
            Block::SupportHours { cards, .. } => repeater::move_down(cards, index),
            Block::Footer { links, .. } => repeater::move_down(links, index),
        }
    }

    // -- nested rows (support-hours cards only) -----------------------------

    pub fn supports_rows(&self) -> bool {
        matches!(self, Block::SupportHours { .. })
    }

    pub fn rows_len(&self, item: usize) -> usize {
        match self {
            Block::SupportHours { cards, .. } => {
                cards.get(item).map(|c| c.rows.len()).unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn row_specs(&self) -> &'static [FieldSpec] {
        match self {
            Block::SupportHours { .. } => HOURS_ROW_FIELDS,
            _ => &[],
        }
    }

    pub fn row_field(&self, item: usize, row: usize, key: &str) -> Option<FieldValue> {
        match self {
            Block::SupportHours { cards, .. } => {
                let record = cards.get(item)?.rows.get(row)?;
                match key {
                    "label" => Some(FieldValue::Text(record.label.clone())),
                    "hours" => Some(FieldValue::Text(record.hours.clone())),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn set_row_field(&mut self, item: usize, row: usize, key: &str, value: FieldValue) -> bool {
        match self {
            Block::SupportHours { cards, .. } => repeater::update_at(cards, item, |card| {
                repeater::update_at(&mut card.rows, row, |record| match (key, &value) {
                    ("label", FieldValue::Text(text)) => record.label = text.clone(),
                    ("hours", FieldValue::Text(text)) => record.hours = text.clone(),
                    _ => {}
                });
            }),
            _ => false,
        }
    }

    pub fn append_row(&mut self, item: usize) -> bool {
        match self {
            Block::SupportHours { cards, .. } => repeater::update_at(cards, item, |card| {
                repeater::append(&mut card.rows, HoursRow::default());
            }),
            _ => false,
        }
    }

    pub fn remove_row(&mut self, item: usize, row: usize) -> bool {
        match self {
            Block::SupportHours { cards, .. } => {
                let mut removed = false;
                repeater::update_at(cards, item, |card| {
                    removed = repeater::remove_at(&mut card.rows, row, RepeaterPolicy::UNBOUNDED);
                });
                removed
            }
            _ => false,
        }
    }

    pub fn move_row_up(&mut self, item: usize, row: usize) -> bool {
        match self {
            Block::SupportHours { cards, .. } => {
                let mut moved = false;
                repeater::update_at(cards, item, |card| {
                    moved = repeater::move_up(&mut card.rows, row);
                });
                moved
            }
            _ => false,
        }
    }

    pub fn move_row_down(&mut self, item: usize, row: usize) -> bool {
        match self {
            Block::SupportHours { cards, .. } => {
                let mut moved = false;
                repeater::update_at(cards, item, |card| {
                    moved = repeater::move_down(&mut card.rows, row);
                });
                moved
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut block = BlockKind::Faq.create();
        let before = block.clone();
        block.set_field("no_such_field", FieldValue::Text("x".to_string()));
        assert_eq!(block, before);
    }

    #[test]
    fn test_field_update_is_isolated() {
        let mut block = BlockKind::Faq.create();
        block.append_item();
        block.append_item();
        let before = block.clone();
        assert!(block.set_item_field(0, "question", FieldValue::Text("Why?".to_string())));
        assert_eq!(
            block.item_field(0, "question"),
            Some(FieldValue::Text("Why?".to_string()))
        );
        assert_eq!(block.item_field(0, "answer"), before.item_field(0, "answer"));
        assert_eq!(
            block.item_field(1, "question"),
            before.item_field(1, "question")
        );
        assert_eq!(block.field("header_title"), before.field("header_title"));
    }

    #[test]
    fn test_articles_keep_at_least_one() {
        let mut block = BlockKind::PopularArticles.create();
        assert_eq!(block.items_len(), 1);
        assert!(!block.remove_item(0));
        assert_eq!(block.items_len(), 1);

        block.append_item();
        assert!(block.remove_item(1));
        assert_eq!(block.items_len(), 1);
    }

    #[test]
    fn test_item_moves_stop_at_boundaries() {
        let mut block = BlockKind::NeedHelp.create();
        block.append_item();
        block.append_item();
        block.set_item_field(0, "text", FieldValue::Text("First".to_string()));
        block.set_item_field(1, "text", FieldValue::Text("Second".to_string()));

        assert!(!block.move_item_up(0));
        assert!(!block.move_item_down(1));
        assert!(block.move_item_down(0));
        assert_eq!(
            block.item_field(0, "text"),
            Some(FieldValue::Text("Second".to_string()))
        );
    }

    #[test]
    fn test_nested_rows_roundtrip() {
        let mut block = BlockKind::SupportHours.create();
        assert!(block.append_item());
        assert!(block.append_row(0));
        assert!(block.append_row(0));
        assert_eq!(block.rows_len(0), 2);

        assert!(block.set_row_field(0, 0, "label", FieldValue::Text("Mon-Fri".to_string())));
        assert!(block.set_row_field(0, 1, "label", FieldValue::Text("Sat".to_string())));
        assert!(block.move_row_down(0, 0));
        assert_eq!(
            block.row_field(0, 0, "label"),
            Some(FieldValue::Text("Sat".to_string()))
        );
        assert!(block.remove_row(0, 1));
        assert_eq!(block.rows_len(0), 1);
        // rows of a missing card are silently absent
        assert_eq!(block.rows_len(9), 0);
        assert!(!block.remove_row(9, 0));
    }

    #[test]
    fn test_blocks_without_repeater() {
        let mut block = BlockKind::Hero.create();
        assert_eq!(block.item_noun(), None);
        assert!(!block.append_item());
        assert!(!block.remove_item(0));
        assert_eq!(block.items_len(), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut block = BlockKind::SupportHours.create();
        block.append_item();
        block.append_row(0);
        let json = serde_json::to_string(&block).expect("serialize");
        let back: Block = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(block, back);
    }
}
